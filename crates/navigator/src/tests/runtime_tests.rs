use super::*;
use crate::recording::{ManualScheduler, RecordingSurface};
use shared::domain::PageNumber;

fn commands(items: Vec<ConsoleCommand>) -> mpsc::Receiver<ConsoleCommand> {
    let (tx, rx) = mpsc::channel(16);
    for item in items {
        tx.try_send(item).expect("queue command");
    }
    rx
}

#[tokio::test(start_paused = true)]
async fn closing_command_stream_lets_transition_finish() {
    let rx = commands(vec![ConsoleCommand::Next]);

    let snapshot = run_navigator(RecordingSurface::with_pages(2), Settings::default(), rx).await;

    assert_eq!(snapshot.current_page, PageNumber(2));
    assert!(!snapshot.is_transitioning);
}

#[tokio::test(start_paused = true)]
async fn back_to_back_commands_collapse_into_one_transition() {
    let rx = commands(vec![
        ConsoleCommand::Next,
        ConsoleCommand::Next,
        ConsoleCommand::Previous,
    ]);

    let snapshot = run_navigator(RecordingSurface::with_pages(2), Settings::default(), rx).await;

    assert_eq!(snapshot.current_page, PageNumber(2));
}

#[tokio::test(start_paused = true)]
async fn commands_after_transition_settles_are_applied() {
    let (tx, rx) = mpsc::channel(16);
    let task = tokio::spawn(run_navigator(
        RecordingSurface::with_pages(2),
        Settings::default(),
        rx,
    ));

    tx.send(ConsoleCommand::Next).await.expect("send next");
    tokio::time::sleep(Duration::from_millis(100)).await;
    tx.send(ConsoleCommand::Next).await.expect("send second next");
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    tx.send(ConsoleCommand::Reset).await.expect("send reset");
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    tx.send(ConsoleCommand::Log).await.expect("send log");
    tx.send(ConsoleCommand::Quit).await.expect("send quit");

    let snapshot = task.await.expect("navigator task");
    assert_eq!(snapshot.current_page, PageNumber(1));
    assert!(!snapshot.is_transitioning);
}

#[tokio::test(start_paused = true)]
async fn invalid_go_to_page_keeps_current_page() {
    let rx = commands(vec![
        ConsoleCommand::GoToPage { page: 5 },
        ConsoleCommand::Quit,
        ConsoleCommand::Next,
    ]);

    let snapshot = run_navigator(RecordingSurface::with_pages(2), Settings::default(), rx).await;

    assert_eq!(snapshot.current_page, PageNumber(1));
    assert!(!snapshot.is_transitioning);
}

#[test]
fn dispatch_maps_commands_onto_navigator_operations() {
    let mut navigator = PageNavigator::new(
        RecordingSurface::with_pages(2),
        ManualScheduler::default(),
        Settings::default(),
    );
    navigator.initialize();

    assert!(dispatch_console_command(&mut navigator, ConsoleCommand::Help).is_continue());
    assert!(dispatch_console_command(&mut navigator, ConsoleCommand::Next).is_continue());
    assert!(navigator.is_transitioning());
    assert_eq!(navigator.scheduler().pending(), 1);
    assert!(dispatch_console_command(&mut navigator, ConsoleCommand::Quit).is_break());
}
