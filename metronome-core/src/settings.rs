//! # Settings Module
//!
//! Three independent switches shown on the settings screen. They are plain
//! flags: vibration and the AI corrector have no behavior behind them, and
//! nothing is saved between sessions.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::listeners::{ListenerId, Listeners};

/// Copy of the three settings flags at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub vibration_enabled: bool,
    pub slider_mode_enabled: bool,
    pub ai_corrector_enabled: bool,
}

impl Default for SettingsSnapshot {
    /// Every switch starts on.
    fn default() -> Self {
        Self {
            vibration_enabled: true,
            slider_mode_enabled: true,
            ai_corrector_enabled: true,
        }
    }
}

/// Published after every toggle, carrying the full new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsEvent {
    pub snapshot: SettingsSnapshot,
}

#[derive(Debug, Default)]
pub struct SettingsState {
    flags: SettingsSnapshot,
    listeners: Listeners<SettingsEvent>,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        self.flags
    }

    pub fn toggle_vibration(&mut self) -> bool {
        self.flags.vibration_enabled = !self.flags.vibration_enabled;
        self.publish("vibration", self.flags.vibration_enabled)
    }

    pub fn toggle_slider(&mut self) -> bool {
        self.flags.slider_mode_enabled = !self.flags.slider_mode_enabled;
        self.publish("slider", self.flags.slider_mode_enabled)
    }

    pub fn toggle_ai_corrector(&mut self) -> bool {
        self.flags.ai_corrector_enabled = !self.flags.ai_corrector_enabled;
        self.publish("ai corrector", self.flags.ai_corrector_enabled)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SettingsEvent) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn publish(&mut self, name: &str, value: bool) -> bool {
        debug!("Setting {} -> {}", name, value);
        self.listeners.emit(&SettingsEvent {
            snapshot: self.flags,
        });
        value
    }
}
