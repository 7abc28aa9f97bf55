//! Collaborator seams between the navigator and whatever renders the pages.

use std::time::Duration;

use shared::domain::{ControlKind, PageNumber};

use crate::TransitionStep;

pub trait Panel {
    fn set_active(&mut self, active: bool);
    fn mark_exiting(&mut self, exiting: bool);
    fn mark_entering(&mut self, entering: bool);
}

pub trait Control {
    fn set_disabled(&mut self, disabled: bool);
}

/// Load-time fade/scale-in of the first visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroAnimation {
    pub delay: Duration,
    pub duration: Duration,
}

pub trait DisplaySurface {
    type Panel: Panel;
    type Control: Control;

    fn panel_mut(&mut self, page: PageNumber) -> Option<&mut Self::Panel>;
    fn control_mut(&mut self, kind: ControlKind) -> Option<&mut Self::Control>;
    fn set_indicator_text(&mut self, text: &str);

    /// Polite screen-reader announcement.
    fn announce(&mut self, _message: &str) {}

    fn begin_intro(&mut self, _page: PageNumber, _intro: IntroAnimation) {}
}

/// Fire-and-forget, non-cancellable delayed delivery of a transition step
/// back to [`crate::PageNavigator::complete_step`].
pub trait Scheduler {
    fn schedule_after(&mut self, delay: Duration, step: TransitionStep);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub active: bool,
    pub exiting: bool,
    pub entering: bool,
}

impl Panel for PanelState {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn mark_exiting(&mut self, exiting: bool) {
        self.exiting = exiting;
    }

    fn mark_entering(&mut self, entering: bool) {
        self.entering = entering;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub disabled: bool,
}

impl Control for ControlState {
    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
