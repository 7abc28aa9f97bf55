use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use navigator::{PageNavigator, Settings};
use shared::{
    domain::{ControlKind, TOTAL_PAGES},
    protocol::ConsoleCommand,
};

use crate::controller::{
    events::ViewerEvent, orchestration::apply_viewer_event, timers::FrameScheduler,
};
use crate::ui::{pages, surface::EguiSurface};

pub struct NavigatorApp {
    navigator: PageNavigator<EguiSurface, FrameScheduler>,
    console_rx: Receiver<ConsoleCommand>,
    pending_events: Vec<ViewerEvent>,
}

impl NavigatorApp {
    pub fn new(settings: Settings, console_rx: Receiver<ConsoleCommand>) -> Self {
        let surface = EguiSurface::new(TOTAL_PAGES, &settings);
        let mut navigator = PageNavigator::new(surface, FrameScheduler::default(), settings);
        navigator.initialize();
        tracing::info!("navigation is button-only; console commands are read from stdin");

        Self {
            navigator,
            console_rx,
            pending_events: Vec::new(),
        }
    }

    fn fire_due_timers(&mut self, now: Instant) {
        for step in self.navigator.scheduler_mut().take_due(now) {
            self.navigator.complete_step(step);
        }
    }

    fn drain_console(&mut self) {
        while let Ok(command) = self.console_rx.try_recv() {
            self.pending_events.push(ViewerEvent::Console(command));
        }
    }

    fn apply_pending_events(&mut self, ctx: &egui::Context) {
        for event in std::mem::take(&mut self.pending_events) {
            if apply_viewer_event(&mut self.navigator, event).is_break() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context, now: Instant) {
        let surface = self.navigator.surface();
        let mut clicked = None;

        egui::TopBottomPanel::bottom("page_navigation")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let previous = egui::Button::new(egui::RichText::new("←").size(20.0));
                    if ui
                        .add_enabled(!surface.control_disabled(ControlKind::Previous), previous)
                        .clicked()
                    {
                        clicked = Some(ControlKind::Previous);
                    }

                    ui.label(
                        egui::RichText::new(format!("{} / {}", surface.indicator(), TOTAL_PAGES))
                            .size(16.0)
                            .monospace(),
                    );

                    let next = egui::Button::new(egui::RichText::new("→").size(20.0));
                    if ui
                        .add_enabled(!surface.control_disabled(ControlKind::Next), next)
                        .clicked()
                    {
                        clicked = Some(ControlKind::Next);
                    }

                    if let Some(message) = surface.announcement(now) {
                        ui.separator();
                        ui.label(egui::RichText::new(message).weak());
                    }
                });
                ui.add_space(8.0);
            });

        if let Some(kind) = clicked {
            self.pending_events.push(ViewerEvent::ControlClicked(kind));
        }
    }

    fn show_pages(&self, ctx: &egui::Context, now: Instant) {
        let surface = self.navigator.surface();
        egui::CentralPanel::default().show(ctx, |ui| {
            for panel in surface.visible_panels() {
                let (opacity, scale) = surface.panel_appearance(panel, now);
                ui.scope(|ui| {
                    ui.multiply_opacity(opacity);
                    pages::show_page(ui, pages::content_for(panel.page), scale);
                });
            }
        });
    }
}

impl eframe::App for NavigatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.fire_due_timers(now);
        self.drain_console();

        self.show_nav_bar(ctx, now);
        self.show_pages(ctx, now);

        self.apply_pending_events(ctx);

        if self.navigator.is_transitioning() || self.navigator.surface().is_animating(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            let idle = Duration::from_millis(100);
            let wait = self
                .navigator
                .scheduler()
                .next_deadline()
                .map_or(idle, |deadline| deadline.saturating_duration_since(now).min(idle));
            ctx.request_repaint_after(wait);
        }
    }
}
