//! Display surface backed by plain state the egui frame reads back.

use std::time::{Duration, Instant};

use navigator::{ControlState, DisplaySurface, IntroAnimation, Panel, PanelState, Settings};
use shared::domain::{ControlKind, PageNumber};

const ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone)]
pub struct EguiPanel {
    pub page: PageNumber,
    pub state: PanelState,
    marked_at: Instant,
}

impl EguiPanel {
    fn touch(&mut self) {
        self.marked_at = Instant::now();
    }
}

impl Panel for EguiPanel {
    fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }

    fn mark_exiting(&mut self, exiting: bool) {
        self.state.mark_exiting(exiting);
        self.touch();
    }

    fn mark_entering(&mut self, entering: bool) {
        self.state.mark_entering(entering);
        self.touch();
    }
}

#[derive(Debug, Clone, Copy)]
struct IntroState {
    page: PageNumber,
    started_at: Instant,
    animation: IntroAnimation,
}

pub struct EguiSurface {
    panels: Vec<EguiPanel>,
    previous: ControlState,
    next: ControlState,
    indicator: String,
    announcement: Option<(String, Instant)>,
    intro: Option<IntroState>,
    fade_out: Duration,
    fade_in: Duration,
}

impl EguiSurface {
    pub fn new(total_pages: u32, settings: &Settings) -> Self {
        let now = Instant::now();
        Self {
            panels: (1..=total_pages)
                .map(|n| EguiPanel {
                    page: PageNumber(n),
                    state: PanelState::default(),
                    marked_at: now,
                })
                .collect(),
            previous: ControlState::default(),
            next: ControlState::default(),
            indicator: String::new(),
            announcement: None,
            intro: None,
            fade_out: settings.exit_delay(),
            fade_in: settings.enter_delay(),
        }
    }

    pub fn visible_panels(&self) -> impl Iterator<Item = &EguiPanel> {
        self.panels.iter().filter(|panel| panel.state.active)
    }

    pub fn control_disabled(&self, kind: ControlKind) -> bool {
        match kind {
            ControlKind::Previous => self.previous.disabled,
            ControlKind::Next => self.next.disabled,
        }
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    pub fn announcement(&self, now: Instant) -> Option<&str> {
        self.announcement
            .as_ref()
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(message, _)| message.as_str())
    }

    /// Opacity and scale of a visible panel at `now`.
    pub fn panel_appearance(&self, panel: &EguiPanel, now: Instant) -> (f32, f32) {
        let mut opacity = 1.0;
        if panel.state.exiting {
            opacity = 1.0 - progress(panel.marked_at, self.fade_out, now);
        } else if panel.state.entering {
            opacity = progress(panel.marked_at, self.fade_in, now);
        }

        let mut scale = 1.0;
        if let Some(intro) = self.intro.filter(|intro| intro.page == panel.page) {
            let begin = intro.started_at + intro.animation.delay;
            let t = progress(begin, intro.animation.duration, now);
            opacity *= t;
            scale = 0.98 + 0.02 * t;
        }
        (opacity, scale)
    }

    /// Whether anything on screen still changes over time.
    pub fn is_animating(&self, now: Instant) -> bool {
        let intro_running = self.intro.is_some_and(|intro| {
            now < intro.started_at + intro.animation.delay + intro.animation.duration
        });
        intro_running
            || self.announcement(now).is_some()
            || self
                .panels
                .iter()
                .any(|panel| panel.state.exiting || panel.state.entering)
    }
}

fn progress(start: Instant, length: Duration, now: Instant) -> f32 {
    if now <= start {
        return 0.0;
    }
    if length.is_zero() {
        return 1.0;
    }
    (now.duration_since(start).as_secs_f32() / length.as_secs_f32()).clamp(0.0, 1.0)
}

impl DisplaySurface for EguiSurface {
    type Panel = EguiPanel;
    type Control = ControlState;

    fn panel_mut(&mut self, page: PageNumber) -> Option<&mut EguiPanel> {
        self.panels.iter_mut().find(|panel| panel.page == page)
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
        self.announcement = Some((message.to_string(), Instant::now() + ANNOUNCEMENT_TTL));
    }

    fn begin_intro(&mut self, page: PageNumber, animation: IntroAnimation) {
        self.intro = Some(IntroState {
            page,
            started_at: Instant::now(),
            animation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exiting_panel_fades_out_over_exit_delay() {
        let mut surface = EguiSurface::new(2, &Settings::default());
        let panel = surface.panel_mut(PageNumber(1)).expect("page 1");
        panel.set_active(true);
        panel.mark_exiting(true);
        let panel = surface.panels[0].clone();

        let (start, _) = surface.panel_appearance(&panel, panel.marked_at);
        let (end, _) =
            surface.panel_appearance(&panel, panel.marked_at + Duration::from_millis(300));
        assert_eq!(start, 1.0);
        assert_eq!(end, 0.0);
        assert!(surface.is_animating(panel.marked_at));
    }

    #[test]
    fn intro_scales_first_page_in_after_delay() {
        let mut surface = EguiSurface::new(2, &Settings::default());
        surface.begin_intro(PageNumber(1), Settings::default().intro());
        let started_at = surface.intro.expect("intro").started_at;
        let panel = surface.panels[0].clone();

        let (opacity, scale) = surface.panel_appearance(&panel, started_at);
        assert_eq!(opacity, 0.0);
        assert!((scale - 0.98).abs() < f32::EPSILON);

        let done = started_at + Duration::from_millis(900);
        let (opacity, scale) = surface.panel_appearance(&panel, done);
        assert_eq!(opacity, 1.0);
        assert!((scale - 1.0).abs() < 1e-6);
        assert!(!surface.is_animating(done));
    }

    #[test]
    fn announcements_expire() {
        let mut surface = EguiSurface::new(2, &Settings::default());
        surface.announce("Navigating to page 2 of 2");
        let now = Instant::now();
        assert_eq!(surface.announcement(now), Some("Navigating to page 2 of 2"));
        assert_eq!(surface.announcement(now + Duration::from_secs(2)), None);
    }
}
