//! Text rendering of the display surface: every attribute change becomes a
//! log line.

use navigator::{Control, ControlState, DisplaySurface, IntroAnimation, Panel, PanelState};
use shared::domain::{ControlKind, PageNumber};

pub struct TerminalPanel {
    page: PageNumber,
    state: PanelState,
}

impl Panel for TerminalPanel {
    fn set_active(&mut self, active: bool) {
        if self.state.active != active {
            tracing::info!(page = self.page.0, active, "panel visibility");
        }
        self.state.set_active(active);
    }

    fn mark_exiting(&mut self, exiting: bool) {
        if exiting {
            tracing::debug!(page = self.page.0, "panel fading out");
        }
        self.state.mark_exiting(exiting);
    }

    fn mark_entering(&mut self, entering: bool) {
        if entering {
            tracing::debug!(page = self.page.0, "panel fading in");
        }
        self.state.mark_entering(entering);
    }
}

pub struct TerminalControl {
    kind: ControlKind,
    state: ControlState,
}

impl Control for TerminalControl {
    fn set_disabled(&mut self, disabled: bool) {
        if self.state.disabled != disabled {
            tracing::debug!(control = ?self.kind, disabled, "control state");
        }
        self.state.set_disabled(disabled);
    }
}

pub struct TerminalSurface {
    panels: Vec<TerminalPanel>,
    controls: [TerminalControl; 2],
    indicator: String,
}

impl TerminalSurface {
    pub fn new(total_pages: u32) -> Self {
        Self {
            panels: (1..=total_pages)
                .map(|n| TerminalPanel {
                    page: PageNumber(n),
                    state: PanelState::default(),
                })
                .collect(),
            controls: ControlKind::ALL.map(|kind| TerminalControl {
                kind,
                state: ControlState::default(),
            }),
            indicator: String::new(),
        }
    }

    /// `[<] 1 [>]`, with a disabled side drawn as `·`.
    pub fn status_line(&self) -> String {
        let arrow = |kind: ControlKind, glyph: &str| {
            let disabled = self
                .controls
                .iter()
                .find(|control| control.kind == kind)
                .map(|control| control.state.disabled)
                .unwrap_or(true);
            if disabled {
                "·".to_string()
            } else {
                glyph.to_string()
            }
        };
        format!(
            "[{}] {} [{}]",
            arrow(ControlKind::Previous, "<"),
            self.indicator,
            arrow(ControlKind::Next, ">")
        )
    }
}

impl DisplaySurface for TerminalSurface {
    type Panel = TerminalPanel;
    type Control = TerminalControl;

    fn panel_mut(&mut self, page: PageNumber) -> Option<&mut TerminalPanel> {
        self.panels.iter_mut().find(|panel| panel.page == page)
    }

    fn control_mut(&mut self, kind: ControlKind) -> Option<&mut TerminalControl> {
        self.controls.iter_mut().find(|control| control.kind == kind)
    }

    fn set_indicator_text(&mut self, text: &str) {
        self.indicator = text.to_string();
        println!("{}", self.status_line());
    }

    fn announce(&mut self, message: &str) {
        tracing::info!("{message}");
    }

    fn begin_intro(&mut self, page: PageNumber, intro: IntroAnimation) {
        tracing::debug!(
            page = page.0,
            delay_ms = intro.delay.as_millis() as u64,
            duration_ms = intro.duration.as_millis() as u64,
            "intro animation"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_reflects_control_state() {
        let mut surface = TerminalSurface::new(2);
        surface
            .control_mut(ControlKind::Previous)
            .expect("previous")
            .set_disabled(true);
        surface.set_indicator_text("1");
        assert_eq!(surface.status_line(), "[·] 1 [>]");

        surface
            .control_mut(ControlKind::Previous)
            .expect("previous")
            .set_disabled(false);
        surface
            .control_mut(ControlKind::Next)
            .expect("next")
            .set_disabled(true);
        surface.set_indicator_text("2");
        assert_eq!(surface.status_line(), "[<] 2 [·]");
    }

    #[test]
    fn looks_up_panels_by_page() {
        let mut surface = TerminalSurface::new(2);
        surface.panel_mut(PageNumber(2)).expect("page 2").set_active(true);
        assert!(surface.panel_mut(PageNumber(2)).expect("page 2").state.active);
        assert!(surface.panel_mut(PageNumber(3)).is_none());
    }
}
