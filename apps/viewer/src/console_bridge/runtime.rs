//! Stdin reader thread feeding the console command queue.

use std::{
    io::{self, BufRead},
    thread,
};

use crossbeam_channel::Sender;
use shared::protocol::ConsoleCommand;

use crate::console_bridge::commands::{dispatch_console_line, QueueStatus};

pub fn launch(cmd_tx: Sender<ConsoleCommand>) -> io::Result<()> {
    thread::Builder::new()
        .name("viewer-console".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                if dispatch_console_line(&cmd_tx, &line) == QueueStatus::Disconnected {
                    break;
                }
            }
            tracing::debug!("viewer console input closed");
        })?;
    Ok(())
}
