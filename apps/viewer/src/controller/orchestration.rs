//! Routes viewer events onto navigator operations.

use std::ops::ControlFlow;

use navigator::{runtime::dispatch_console_command, DisplaySurface, PageNavigator, Scheduler};
use shared::domain::ControlKind;

use crate::controller::events::ViewerEvent;

/// `Break` means the console asked the viewer to close.
pub fn apply_viewer_event<S, T>(
    navigator: &mut PageNavigator<S, T>,
    event: ViewerEvent,
) -> ControlFlow<()>
where
    S: DisplaySurface,
    T: Scheduler,
{
    tracing::debug!(source = event.source(), "viewer event");
    match event {
        ViewerEvent::ControlClicked(ControlKind::Previous) => {
            navigator.go_to_previous();
            ControlFlow::Continue(())
        }
        ViewerEvent::ControlClicked(ControlKind::Next) => {
            navigator.go_to_next();
            ControlFlow::Continue(())
        }
        ViewerEvent::Console(command) => dispatch_console_command(navigator, command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator::{
        recording::{ManualScheduler, RecordingSurface},
        Settings,
    };
    use shared::protocol::ConsoleCommand;

    #[test]
    fn buttons_and_console_share_the_transition_guard() {
        let mut navigator = PageNavigator::new(
            RecordingSurface::with_pages(2),
            ManualScheduler::default(),
            Settings::default(),
        );
        navigator.initialize();

        let flow = apply_viewer_event(&mut navigator, ViewerEvent::ControlClicked(ControlKind::Next));
        assert!(flow.is_continue());
        assert!(navigator.is_transitioning());

        apply_viewer_event(
            &mut navigator,
            ViewerEvent::Console(ConsoleCommand::GoToPage { page: 1 }),
        );
        assert_eq!(navigator.scheduler().scheduled_total(), 1);

        let flow = apply_viewer_event(&mut navigator, ViewerEvent::Console(ConsoleCommand::Quit));
        assert!(flow.is_break());
    }
}
