//! Host settings
//!
//! Only things the host environment decides live here. Gameplay constants
//! are fixed in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::HAZARD_SIZE;
use crate::platform::Key;
use crate::sim::ScreenBounds;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield size in pixels
    pub screen: ScreenBounds,
    /// RNG seed (`None` picks one from the clock)
    pub seed: Option<u64>,
    /// Length of a headless run
    pub demo_seconds: u32,
    /// Let the bot press keys
    pub autopilot: bool,
    /// Menu choice to make at startup (1 = fall, 2 = climb)
    pub start_mode: Option<u8>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen: ScreenBounds::default(),
            seed: None,
            demo_seconds: 30,
            autopilot: true,
            start_mode: Some(1),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read settings {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Keep the screen big enough for one hazard
    pub fn validated(mut self) -> Self {
        self.screen.width = self.screen.width.max(HAZARD_SIZE);
        self.screen.height = self.screen.height.max(HAZARD_SIZE);
        self
    }

    /// Menu key for the configured start mode
    pub fn start_key(&self) -> Option<Key> {
        match self.start_mode {
            Some(1) => Some(Key::Digit1),
            Some(2) => Some(Key::Digit2),
            _ => None,
        }
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
