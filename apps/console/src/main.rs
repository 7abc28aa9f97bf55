use std::{
    io::{self, BufRead},
    path::PathBuf,
    thread,
};

use anyhow::Result;
use clap::Parser;
use navigator::{config::load_settings, runtime::run_navigator};
use shared::{
    domain::TOTAL_PAGES,
    protocol::{ConsoleCommand, CONSOLE_HELP},
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

mod surface;

use surface::TerminalSurface;

#[derive(Parser, Debug)]
struct Args {
    /// Transition timings file; defaults to ./navigator.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the final state as JSON on exit.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;

    println!("Page navigator console ({TOTAL_PAGES} pages)");
    println!("{CONSOLE_HELP}");

    let (cmd_tx, cmd_rx) = mpsc::channel::<ConsoleCommand>(64);
    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || read_commands(cmd_tx))?;

    let snapshot = run_navigator(TerminalSurface::new(TOTAL_PAGES), settings, cmd_rx).await;
    if args.json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        println!("{snapshot}");
    }

    Ok(())
}

/// Blocking stdin reader; ends the command stream on EOF or `quit`.
fn read_commands(cmd_tx: mpsc::Sender<ConsoleCommand>) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::error!("failed to read console input: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ConsoleCommand>() {
            Ok(command) => {
                let quit = command == ConsoleCommand::Quit;
                if cmd_tx.blocking_send(command).is_err() || quit {
                    break;
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }
}

/// `RUST_LOG`-style directives, falling back to `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::log_filter;

    #[test]
    fn log_filter_honors_directives_and_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
        assert_eq!(
            log_filter(Some("navigator=debug")).to_string(),
            "navigator=debug"
        );
        assert_eq!(log_filter(Some("navigator=loud")).to_string(), "info");
    }
}
