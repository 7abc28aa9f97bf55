//! Static page content.

use shared::domain::PageNumber;

pub struct PageContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static [&'static str],
}

const COVER: PageContent = PageContent {
    title: "Portfolio",
    subtitle: "Cover",
    body: &[
        "Course portfolio",
        "Use the arrows below to move between pages.",
    ],
};

const CONTENTS: PageContent = PageContent {
    title: "Contents",
    subtitle: "Page 2",
    body: &[
        "1. Introduction",
        "2. Coursework",
        "3. Lab reports",
        "4. Reflections",
    ],
};

pub fn content_for(page: PageNumber) -> &'static PageContent {
    match page.0 {
        1 => &COVER,
        _ => &CONTENTS,
    }
}

pub fn show_page(ui: &mut egui::Ui, content: &PageContent, scale: f32) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0 * scale);
        ui.label(egui::RichText::new(content.title).size(36.0 * scale).strong());
        ui.label(egui::RichText::new(content.subtitle).size(16.0 * scale).weak());
        ui.add_space(24.0 * scale);
        for line in content.body {
            ui.label(egui::RichText::new(*line).size(18.0 * scale));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_page_headlessly() {
        let ctx = egui::Context::default();
        for page in [PageNumber(1), PageNumber(2)] {
            let output = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    show_page(ui, content_for(page), 0.98);
                });
            });
            assert!(!output.shapes.is_empty());
        }
        assert_eq!(content_for(PageNumber(1)).title, "Portfolio");
        assert_eq!(content_for(PageNumber(2)).title, "Contents");
    }
}
