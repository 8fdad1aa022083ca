//! Engine configuration: the tunable heuristics of the attitude, mood and
//! decoration policies, with JSON load/save.
//!
//! Defaults reproduce the shipped behavior; a config file only needs the
//! fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many recent analyses the attitude policy reads.
    pub attitude_window: usize,
    /// Positive-sentiment count that triggers the warm transition.
    pub positive_streak: usize,
    /// Praise-intent count that triggers the warm transition.
    pub praise_streak: usize,
    /// Negative-sentiment count that triggers the cold transition.
    pub negative_streak: usize,
    /// Criticism-intent count that triggers the cold transition.
    pub criticism_streak: usize,
    /// Question-intent count that turns the character helpful.
    pub question_streak: usize,
    /// Minimum intensity for a single message to shift the mood.
    pub mood_shift_threshold: u8,
    /// Intensity at which strong negativity reads as anger.
    pub rage_threshold: u8,
    /// Minimum intensity for the high-energy/subdued reply suffix.
    pub emphasis_threshold: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            attitude_window: 5,
            positive_streak: 3,
            praise_streak: 2,
            negative_streak: 3,
            criticism_streak: 2,
            question_streak: 3,
            mood_shift_threshold: 7,
            rage_threshold: 9,
            emphasis_threshold: 8,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or unparsable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded engine config");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "bad engine config, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "no engine config file, using defaults");
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "saved engine config");
        Ok(())
    }
}
