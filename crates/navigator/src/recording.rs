//! In-memory surface and virtual-clock scheduler for driving the navigator
//! without a renderer.

use std::{collections::BTreeMap, time::Duration};

use shared::domain::{ControlKind, PageNumber};

use crate::{
    surface::{ControlState, DisplaySurface, IntroAnimation, PanelState, Scheduler},
    PageNavigator, TransitionStep,
};

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub panels: BTreeMap<PageNumber, PanelState>,
    pub previous: ControlState,
    pub next: ControlState,
    pub indicator: String,
    pub announcements: Vec<String>,
    pub intros: Vec<(PageNumber, IntroAnimation)>,
}

impl RecordingSurface {
    /// Page 1 starts active, as the static markup does.
    pub fn with_pages(total_pages: u32) -> Self {
        let panels = (1..=total_pages)
            .map(|n| {
                let state = PanelState {
                    active: n == 1,
                    ..PanelState::default()
                };
                (PageNumber(n), state)
            })
            .collect();
        Self {
            panels,
            ..Self::default()
        }
    }

    pub fn panel(&self, page: u32) -> PanelState {
        self.panels
            .get(&PageNumber(page))
            .copied()
            .unwrap_or_default()
    }

    pub fn active_pages(&self) -> Vec<PageNumber> {
        self.panels
            .iter()
            .filter(|(_, state)| state.active)
            .map(|(page, _)| *page)
            .collect()
    }
}

impl DisplaySurface for RecordingSurface {
    type Panel = PanelState;
    type Control = ControlState;

    fn panel_mut(&mut self, page: PageNumber) -> Option<&mut PanelState> {
        self.panels.get_mut(&page)
    }

    fn control_mut(&mut self, kind: ControlKind) -> Option<&mut ControlState> {
        Some(match kind {
            ControlKind::Previous => &mut self.previous,
            ControlKind::Next => &mut self.next,
        })
    }

    fn set_indicator_text(&mut self, text: &str) {
        self.indicator = text.to_string();
    }

    fn announce(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }

    fn begin_intro(&mut self, page: PageNumber, intro: IntroAnimation) {
        self.intros.push((page, intro));
    }
}

/// Scheduler on a virtual clock. Steps fire only when [`advance`] moves the
/// clock past their deadline.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, TransitionStep)>,
    scheduled_total: usize,
}

impl ManualScheduler {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Every step ever scheduled, fired or not.
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    fn pop_due(&mut self, until: Duration) -> Option<(Duration, TransitionStep)> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= until)
            .min_by_key(|(_, (due, _))| *due)?;
        Some(self.pending.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration, step: TransitionStep) {
        self.scheduled_total += 1;
        self.pending.push((self.now + delay, step));
    }
}

/// Moves the virtual clock forward by `by`, firing due steps in deadline
/// order. Steps scheduled by a firing step are honored within the same call.
pub fn advance<S: DisplaySurface>(navigator: &mut PageNavigator<S, ManualScheduler>, by: Duration) {
    let until = navigator.scheduler().now + by;
    while let Some((due, step)) = navigator.scheduler_mut().pop_due(until) {
        navigator.scheduler_mut().now = due;
        navigator.complete_step(step);
    }
    navigator.scheduler_mut().now = until;
}
