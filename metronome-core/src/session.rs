//! # Session Module
//!
//! Everything one running app owns: tempo, settings, the dial mapping and
//! the screen stack. The session lives as long as the GUI and is dropped
//! with it.

use log::info;

use crate::config::MetronomeConfig;
use crate::dial::DialMapper;
use crate::error::Result;
use crate::navigation::Navigator;
use crate::settings::{SettingsSnapshot, SettingsState};
use crate::tempo::{BpmRange, TempoState};

#[derive(Debug, Default)]
pub struct MetronomeSession {
    tempo: TempoState,
    settings: SettingsState,
    dial: DialMapper,
    navigator: Navigator,
}

impl MetronomeSession {
    /// Session with the built-in bounds and dial.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session built from a config, validated first.
    pub fn from_config(config: &MetronomeConfig) -> Result<Self> {
        let range = config.validate()?;
        info!(
            "Session: {}..={} BPM, starting at {}",
            range.min(),
            range.max(),
            config.default_bpm
        );
        Ok(Self {
            tempo: TempoState::with_range(range, config.default_bpm),
            settings: SettingsState::new(),
            dial: DialMapper::new(range, config.dial),
            navigator: Navigator::new(),
        })
    }

    // --- Reads ---

    pub fn current_bpm(&self) -> u32 {
        self.tempo.current_bpm()
    }

    pub fn is_playing(&self) -> bool {
        self.tempo.is_playing()
    }

    pub fn settings_snapshot(&self) -> SettingsSnapshot {
        self.settings.snapshot()
    }

    pub fn bpm_range(&self) -> BpmRange {
        self.tempo.range()
    }

    /// Dial sweep for the current tempo, in degrees.
    pub fn sweep_angle(&self) -> f32 {
        self.dial.sweep_angle(self.tempo.current_bpm())
    }

    // --- Writes ---

    pub fn increment(&mut self) -> bool {
        self.tempo.increment()
    }

    pub fn decrement(&mut self) -> bool {
        self.tempo.decrement()
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.tempo.toggle_playing()
    }

    pub fn toggle_vibration(&mut self) -> bool {
        self.settings.toggle_vibration()
    }

    pub fn toggle_slider(&mut self) -> bool {
        self.settings.toggle_slider()
    }

    pub fn toggle_ai_corrector(&mut self) -> bool {
        self.settings.toggle_ai_corrector()
    }

    // --- Parts ---

    pub fn dial(&self) -> &DialMapper {
        &self.dial
    }

    pub fn tempo_mut(&mut self) -> &mut TempoState {
        &mut self.tempo
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }
}
