//! # Configuration Module
//!
//! Tempo bounds, dial geometry and animation length. Every field has a
//! default, so a config file only needs the values it wants to change.
//! The file is read once at startup and never written.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use crate::dial::DialGeometry;
use crate::error::{MetronomeError, Result};
use crate::tempo::{BpmRange, DEFAULT_BPM, MAX_BPM, MIN_BPM};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "metronome_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetronomeConfig {
    pub min_bpm: u32,
    pub max_bpm: u32,
    pub default_bpm: u32,
    pub dial: DialGeometry,
    /// Length of one dial transition in milliseconds.
    pub sweep_animation_ms: u64,
}

impl Default for MetronomeConfig {
    fn default() -> Self {
        Self {
            min_bpm: MIN_BPM,
            max_bpm: MAX_BPM,
            default_bpm: DEFAULT_BPM,
            dial: DialGeometry::default(),
            sweep_animation_ms: 300,
        }
    }
}

impl MetronomeConfig {
    /// Loads a config from a JSON file and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;
        Self::from_json(&data)
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MetronomeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the bounds, the default tempo and the dial angles.
    ///
    /// Returns the validated range on success.
    pub fn validate(&self) -> Result<BpmRange> {
        let range = BpmRange::new(self.min_bpm, self.max_bpm)?;
        if !range.contains(self.default_bpm) {
            return Err(MetronomeError::DefaultOutOfRange {
                bpm: self.default_bpm,
                min: self.min_bpm,
                max: self.max_bpm,
            });
        }
        self.dial.validate()?;
        Ok(range)
    }

    pub fn sweep_duration(&self) -> Duration {
        Duration::from_millis(self.sweep_animation_ms)
    }
}
