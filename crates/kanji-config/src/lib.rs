use std::env;

use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::log::LogConfig;
use self::ui::UiConfig;

pub mod catalog;
pub mod log;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub catalog: CatalogConfig,
    pub log: LogConfig,

    /// Capacity of the UI <-> app event channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            catalog: CatalogConfig::default(),
            log: LogConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply `KANJI_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply `KANJI_*` overrides. Unparsable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(filter) = lookup("KANJI_LOG") {
            self.log.filter = filter;
        }

        if let Some(json) = lookup("KANJI_LOG_JSON").and_then(|v| parse_flag(&v)) {
            self.log.json = json;
        }

        if let Some(columns) = lookup("KANJI_GRID_COLUMNS")
            .and_then(|v| v.parse().ok())
            .filter(|&c: &u32| c > 0)
        {
            self.ui.grid_columns = columns;
        }

        if let Some(capacity) = lookup("KANJI_CHANNEL_CAPACITY")
            .and_then(|v| v.parse().ok())
            .filter(|&c: &usize| c > 0)
        {
            self.channel_capacity = capacity;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
