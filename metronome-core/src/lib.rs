// metronome-core/src/lib.rs

//! The core logic for the metronome.
//! This crate holds the tempo and settings state, the BPM-to-dial mapping,
//! the dial animation curve and the screen stack. It is completely headless
//! and contains no GUI code.

pub mod animation;
pub mod config;
pub mod dial;
pub mod error;
pub mod listeners;
pub mod navigation;
pub mod session;
pub mod settings;
pub mod tempo;

pub use config::MetronomeConfig;
pub use error::{MetronomeError, Result};
pub use session::MetronomeSession;
pub use settings::SettingsSnapshot;
pub use tempo::{BpmRange, TempoEvent, TempoState};
