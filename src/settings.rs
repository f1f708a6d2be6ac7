//! Demo settings persisted between runs

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CIRCLE_COUNT, DEFAULT_SPLIT_CRITERIA};

/// Tunable demo parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// World seed; `None` draws one from the clock at startup
    pub seed: Option<u64>,
    /// Circles placed by the initial build
    pub initial_circles: usize,
    /// Quad-tree leaf capacity before a split
    pub split_criteria: usize,
    /// Whether the tree overlay starts visible
    pub show_quadtree: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            initial_circles: DEFAULT_CIRCLE_COUNT,
            split_criteria: DEFAULT_SPLIT_CRITERIA,
            show_quadtree: true,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "quad-pack.json";

    /// Load settings from `path`, falling back to defaults on a missing
    /// or malformed file
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings to `path`
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save settings to {}: {err}", path.display());
                } else {
                    log::info!("settings saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}
