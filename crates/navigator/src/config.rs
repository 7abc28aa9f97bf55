use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;

use crate::surface::IntroAnimation;

pub const DEFAULT_CONFIG_PATH: &str = "navigator.toml";

/// Transition timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fade-out of the outgoing page before the panels swap.
    pub exit_delay_ms: u64,
    /// Fade-in of the incoming page before navigation unlocks.
    pub enter_delay_ms: u64,
    pub intro_delay_ms: u64,
    pub intro_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exit_delay_ms: 300,
            enter_delay_ms: 600,
            intro_delay_ms: 100,
            intro_duration_ms: 800,
        }
    }
}

impl Settings {
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn intro(&self) -> IntroAnimation {
        IntroAnimation {
            delay: Duration::from_millis(self.intro_delay_ms),
            duration: Duration::from_millis(self.intro_duration_ms),
        }
    }
}

/// Defaults, then `path` (or `navigator.toml` when present), then `APP__*`
/// environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(path) => read_settings_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            read_settings_file(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => Settings::default(),
    };
    Ok(apply_env_overrides(settings, |key| std::env::var(key).ok()))
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    parse_settings(&raw).with_context(|| format!("invalid settings file '{}'", path.display()))
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str::<Settings>(raw)?)
}

pub fn apply_env_overrides(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    let read = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

    if let Some(v) = read("APP__EXIT_DELAY_MS") {
        settings.exit_delay_ms = v;
    }
    if let Some(v) = read("APP__ENTER_DELAY_MS") {
        settings.enter_delay_ms = v;
    }
    if let Some(v) = read("APP__INTRO_DELAY_MS") {
        settings.intro_delay_ms = v;
    }
    if let Some(v) = read("APP__INTRO_DURATION_MS") {
        settings.intro_duration_ms = v;
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
