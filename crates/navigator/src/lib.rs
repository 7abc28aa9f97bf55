use std::time::Duration;

use shared::domain::{ControlKind, NavigatorSnapshot, PageNumber, TOTAL_PAGES};
use tracing::{debug, info, warn};

pub mod config;
pub mod recording;
pub mod runtime;
pub mod surface;

pub use config::Settings;
pub use surface::{
    Control, ControlState, DisplaySurface, IntroAnimation, Panel, PanelState, Scheduler,
};

/// Sub-phase a pending timer will complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Outgoing panel is fading out; completing it swaps the panels.
    Exiting,
    /// Incoming panel is fading in; completing it returns to idle.
    Entering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionStep {
    pub transition_id: u64,
    pub phase: TransitionPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlightTransition {
    id: u64,
    from: PageNumber,
    to: PageNumber,
    phase: TransitionPhase,
}

impl InFlightTransition {
    fn step(&self) -> TransitionStep {
        TransitionStep {
            transition_id: self.id,
            phase: self.phase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Busy,
    OutOfRange,
    AlreadyCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Started { from: PageNumber, to: PageNumber },
    Ignored(IgnoreReason),
}

impl NavigationOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, NavigationOutcome::Started { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavigatorState {
    current_page: PageNumber,
    total_pages: u32,
    transition: Option<InFlightTransition>,
}

/// Two-phase animated page switcher. Owns its surface and scheduler; the host
/// hands fired timers back through [`PageNavigator::complete_step`].
pub struct PageNavigator<S, T> {
    state: NavigatorState,
    settings: Settings,
    next_transition_id: u64,
    surface: S,
    scheduler: T,
}

impl<S, T> PageNavigator<S, T>
where
    S: DisplaySurface,
    T: Scheduler,
{
    pub fn new(surface: S, scheduler: T, settings: Settings) -> Self {
        Self::with_page_count(surface, scheduler, settings, TOTAL_PAGES)
    }

    pub fn with_page_count(surface: S, scheduler: T, settings: Settings, total_pages: u32) -> Self {
        Self {
            state: NavigatorState {
                current_page: PageNumber::FIRST,
                total_pages: total_pages.max(1),
                transition: None,
            },
            settings,
            next_transition_id: 1,
            surface,
            scheduler,
        }
    }

    pub fn current_page(&self) -> PageNumber {
        self.state.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.state.total_pages
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.transition.is_some()
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            current_page: self.state.current_page,
            total_pages: self.state.total_pages,
            is_transitioning: self.is_transitioning(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    /// Puts the surface in its load-time state: only the current page
    /// visible, controls synchronized, intro animation requested.
    pub fn initialize(&mut self) {
        let current = self.state.current_page;
        for page in (1..=self.state.total_pages).map(PageNumber) {
            if let Some(panel) = self.surface.panel_mut(page) {
                panel.set_active(page == current);
                panel.mark_exiting(false);
                panel.mark_entering(false);
            }
        }
        self.refresh_controls();
        self.surface.begin_intro(current, self.settings.intro());
        info!(
            page = current.0,
            total_pages = self.state.total_pages,
            "page navigator initialized"
        );
    }

    pub fn navigate_to(&mut self, target: i64) -> NavigationOutcome {
        if let Some(transition) = self.state.transition {
            debug!(
                requested = target,
                in_flight_to = transition.to.0,
                "navigation ignored; transition in progress"
            );
            return NavigationOutcome::Ignored(IgnoreReason::Busy);
        }

        let to = match PageNumber::checked(target, self.state.total_pages) {
            Ok(page) => page,
            Err(err) => {
                debug!(%err, "navigation request rejected");
                return NavigationOutcome::Ignored(IgnoreReason::OutOfRange);
            }
        };

        let from = self.state.current_page;
        if to == from {
            return NavigationOutcome::Ignored(IgnoreReason::AlreadyCurrent);
        }

        let transition = InFlightTransition {
            id: self.next_transition_id,
            from,
            to,
            phase: TransitionPhase::Exiting,
        };
        self.next_transition_id += 1;
        self.state.transition = Some(transition);

        match self.surface.panel_mut(from) {
            Some(panel) => panel.mark_exiting(true),
            None => warn!(page = from.0, "surface has no panel for outgoing page"),
        }

        debug!(from = from.0, to = to.0, "transition started");
        self.schedule(self.settings.exit_delay(), transition.step());
        NavigationOutcome::Started { from, to }
    }

    pub fn go_to_previous(&mut self) -> NavigationOutcome {
        self.navigate_to(self.state.current_page.offset(-1))
    }

    pub fn go_to_next(&mut self) -> NavigationOutcome {
        self.navigate_to(self.state.current_page.offset(1))
    }

    /// Syncs both controls and the page indicator with the current page.
    pub fn refresh_controls(&mut self) {
        let current = self.state.current_page;
        let total_pages = self.state.total_pages;
        for kind in ControlKind::ALL {
            match self.surface.control_mut(kind) {
                Some(control) => control.set_disabled(kind.is_at_boundary(current, total_pages)),
                None => warn!(control = ?kind, "surface has no navigation control"),
            }
        }
        self.surface.set_indicator_text(&current.to_string());
    }

    /// Continuation entry point for a fired timer.
    pub fn complete_step(&mut self, step: TransitionStep) {
        let Some(mut transition) = self.state.transition else {
            warn!(?step, "transition step fired while idle");
            return;
        };
        if transition.step() != step {
            warn!(?step, expected = ?transition.step(), "ignoring stale transition step");
            return;
        }

        match step.phase {
            TransitionPhase::Exiting => {
                if let Some(panel) = self.surface.panel_mut(transition.from) {
                    panel.set_active(false);
                    panel.mark_exiting(false);
                }
                match self.surface.panel_mut(transition.to) {
                    Some(panel) => {
                        panel.set_active(true);
                        panel.mark_entering(true);
                    }
                    None => warn!(page = transition.to.0, "surface has no panel for incoming page"),
                }

                self.state.current_page = transition.to;
                self.refresh_controls();
                self.surface.announce(&format!(
                    "Navigating to page {} of {}",
                    transition.to, self.state.total_pages
                ));
                info!(
                    page = transition.to.0,
                    total_pages = self.state.total_pages,
                    "page changed"
                );

                transition.phase = TransitionPhase::Entering;
                self.state.transition = Some(transition);
                self.schedule(self.settings.enter_delay(), transition.step());
            }
            TransitionPhase::Entering => {
                if let Some(panel) = self.surface.panel_mut(transition.to) {
                    panel.mark_entering(false);
                }
                self.state.transition = None;
                debug!(page = transition.to.0, "transition finished");
            }
        }
    }

    pub fn reset_to_first_page(&mut self) -> NavigationOutcome {
        if self.state.current_page == PageNumber::FIRST {
            return NavigationOutcome::Ignored(IgnoreReason::AlreadyCurrent);
        }
        if self.is_transitioning() {
            return NavigationOutcome::Ignored(IgnoreReason::Busy);
        }
        self.navigate_to(i64::from(PageNumber::FIRST.0))
    }

    pub fn log_current_page(&self) -> NavigatorSnapshot {
        let snapshot = self.snapshot();
        info!(
            page = snapshot.current_page.0,
            total_pages = snapshot.total_pages,
            transitioning = snapshot.is_transitioning,
            "current page"
        );
        snapshot
    }

    pub fn go_to_page(&mut self, page: i64) -> NavigationOutcome {
        if let Err(err) = PageNumber::checked(page, self.state.total_pages) {
            warn!("{err}");
            return NavigationOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        self.navigate_to(page)
    }

    fn schedule(&mut self, delay: Duration, step: TransitionStep) {
        self.scheduler.schedule_after(delay, step);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
