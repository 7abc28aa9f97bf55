//! Console lines queued from the stdin thread to the UI thread.

use crossbeam_channel::{Sender, TrySendError};
use shared::protocol::ConsoleCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    Queued,
    Rejected,
    Full,
    Disconnected,
}

pub fn dispatch_console_line(cmd_tx: &Sender<ConsoleCommand>, line: &str) -> QueueStatus {
    let command = match line.parse::<ConsoleCommand>() {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            return QueueStatus::Rejected;
        }
    };
    let command_name = command.name();

    match cmd_tx.try_send(command) {
        Ok(()) => {
            tracing::debug!(command = command_name, "queued console->ui command");
            QueueStatus::Queued
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = command_name, "console->ui command queue is full");
            QueueStatus::Full
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = command_name, "console->ui command queue disconnected");
            QueueStatus::Disconnected
        }
    }
}
