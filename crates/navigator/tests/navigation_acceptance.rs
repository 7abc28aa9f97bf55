use std::time::Duration;

use navigator::{
    recording::{advance, ManualScheduler, RecordingSurface},
    IgnoreReason, NavigationOutcome, PageNavigator, Settings,
};
use shared::domain::PageNumber;

const D1: Duration = Duration::from_millis(300);
const D2: Duration = Duration::from_millis(600);

fn loaded_navigator() -> PageNavigator<RecordingSurface, ManualScheduler> {
    let mut navigator = PageNavigator::new(
        RecordingSurface::with_pages(2),
        ManualScheduler::default(),
        Settings::default(),
    );
    navigator.initialize();
    navigator
}

#[test]
fn initial_load_then_next_then_back_acceptance() {
    let mut navigator = loaded_navigator();
    assert_eq!(navigator.surface().indicator, "1");
    assert!(navigator.surface().previous.disabled);
    assert!(!navigator.surface().next.disabled);

    navigator.go_to_next();
    advance(&mut navigator, D1);
    assert_eq!(navigator.current_page(), PageNumber(2));
    assert_eq!(navigator.surface().indicator, "2");
    assert!(!navigator.surface().previous.disabled);
    assert!(navigator.surface().next.disabled);
    assert!(navigator.is_transitioning());

    advance(&mut navigator, D2);
    assert!(!navigator.is_transitioning());

    navigator.go_to_previous();
    advance(&mut navigator, D1 + D2);
    assert_eq!(navigator.current_page(), PageNumber(1));
    assert_eq!(navigator.surface().active_pages(), vec![PageNumber(1)]);
    assert_eq!(
        navigator.surface().announcements,
        vec!["Navigating to page 2 of 2", "Navigating to page 1 of 2"]
    );
}

#[test]
fn go_to_missing_page_acceptance() {
    let mut navigator = loaded_navigator();

    assert_eq!(
        navigator.go_to_page(5),
        NavigationOutcome::Ignored(IgnoreReason::OutOfRange)
    );
    advance(&mut navigator, D1 + D2);

    assert_eq!(navigator.current_page(), PageNumber(1));
    assert_eq!(navigator.scheduler().scheduled_total(), 0);
    assert!(navigator.surface().announcements.is_empty());
}

#[test]
fn rapid_double_next_acceptance() {
    let mut navigator = loaded_navigator();

    assert!(navigator.go_to_next().is_started());
    advance(&mut navigator, Duration::from_millis(150));
    assert_eq!(
        navigator.go_to_next(),
        NavigationOutcome::Ignored(IgnoreReason::Busy)
    );
    advance(&mut navigator, D1 + D2);

    assert_eq!(navigator.current_page(), PageNumber(2));
    assert!(!navigator.is_transitioning());
    assert_eq!(navigator.surface().announcements.len(), 1);
}
