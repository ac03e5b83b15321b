//! Runtime settings
//!
//! Loaded once at startup from a JSON file; anything missing falls back to
//! the built-in defaults, so a partial file is fine. Nothing is ever
//! written back.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
    /// Start with the software renderer backend (the `-software` flag
    /// also sets this)
    pub software_renderer: bool,
    /// Fixed run seed; unset derives one from the clock
    pub seed: Option<u64>,
    /// Safety stop for unattended demo runs
    pub max_run_ticks: u64,
    /// How often the run logs a progress line
    pub log_interval_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            software_renderer: false,
            seed: None,
            max_run_ticks: 60_000,
            log_interval_ticks: 500,
        }
    }
}

impl Settings {
    /// Load settings from `FALLDOWN_CONFIG` or `config/falldown.json`.
    /// A missing or unparseable file falls back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("FALLDOWN_CONFIG")
            .unwrap_or_else(|_| "config/falldown.json".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => {
                    log::info!("loaded settings from {path}");
                    settings
                }
                Err(e) => {
                    log::warn!("failed to parse {path}: {e}, using defaults");
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }
}
