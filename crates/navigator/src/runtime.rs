//! Tokio host: timers become sleeping tasks that post steps back to the
//! single task owning the navigator.

use std::{ops::ControlFlow, time::Duration};

use shared::{
    domain::NavigatorSnapshot,
    protocol::{ConsoleCommand, CONSOLE_HELP},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    surface::{DisplaySurface, Scheduler},
    PageNavigator, Settings, TransitionStep,
};

#[derive(Debug, Clone)]
pub struct TokioScheduler {
    step_tx: mpsc::UnboundedSender<TransitionStep>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TransitionStep>) {
        let (step_tx, step_rx) = mpsc::unbounded_channel();
        (Self { step_tx }, step_rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&mut self, delay: Duration, step: TransitionStep) {
        let step_tx = self.step_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if step_tx.send(step).is_err() {
                debug!(?step, "navigator loop gone; dropping transition step");
            }
        });
    }
}

/// Applies one console command. `Break` asks the host to stop reading input.
pub fn dispatch_console_command<S, T>(
    navigator: &mut PageNavigator<S, T>,
    command: ConsoleCommand,
) -> ControlFlow<()>
where
    S: DisplaySurface,
    T: Scheduler,
{
    debug!(command = command.name(), "console command");
    match command {
        ConsoleCommand::Next => {
            navigator.go_to_next();
        }
        ConsoleCommand::Previous => {
            navigator.go_to_previous();
        }
        ConsoleCommand::GoToPage { page } => {
            navigator.go_to_page(page);
        }
        ConsoleCommand::Reset => {
            navigator.reset_to_first_page();
        }
        ConsoleCommand::Log => {
            navigator.log_current_page();
        }
        ConsoleCommand::Help => info!("\n{CONSOLE_HELP}"),
        ConsoleCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

/// Runs the navigator until the command stream ends or `quit` arrives, then
/// lets an in-flight transition finish before returning the final state.
pub async fn run_navigator<S>(
    surface: S,
    settings: Settings,
    mut commands: mpsc::Receiver<ConsoleCommand>,
) -> NavigatorSnapshot
where
    S: DisplaySurface,
{
    let (scheduler, mut steps) = TokioScheduler::new();
    let mut navigator = PageNavigator::new(surface, scheduler, settings);
    navigator.initialize();

    loop {
        tokio::select! {
            biased;
            Some(step) = steps.recv() => navigator.complete_step(step),
            command = commands.recv() => match command {
                Some(command) => {
                    if dispatch_console_command(&mut navigator, command).is_break() {
                        break;
                    }
                }
                None => break,
            },
        }
    }

    while navigator.is_transitioning() {
        match steps.recv().await {
            Some(step) => navigator.complete_step(step),
            None => break,
        }
    }

    navigator.snapshot()
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
