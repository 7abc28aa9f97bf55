use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::bounded;
use shared::protocol::ConsoleCommand;
use tracing_subscriber::EnvFilter;

mod console_bridge;
mod controller;
mod ui;

use ui::NavigatorApp;

#[derive(Parser, Debug)]
struct Args {
    /// Transition timings file; defaults to ./navigator.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();
    let args = Args::parse();
    let settings = navigator::config::load_settings(args.config.as_deref())?;

    let (console_tx, console_rx) = bounded::<ConsoleCommand>(64);
    console_bridge::runtime::launch(console_tx)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Page Navigator")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Page Navigator",
        options,
        Box::new(move |_cc| Ok(Box::new(NavigatorApp::new(settings, console_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("viewer exited with error: {err}"))
}

/// `RUST_LOG`-style directives, falling back to `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
