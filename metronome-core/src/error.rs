//! Error types for the metronome core.
//!
//! The tempo and settings operations are total and never fail. Only
//! building a session from configuration can go wrong.

use thiserror::Error;

/// Result type alias for metronome core operations.
pub type Result<T> = std::result::Result<T, MetronomeError>;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum MetronomeError {
    #[error("Invalid BPM range: min {min} must be below max {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("Default BPM {bpm} lies outside {min}..={max}")]
    DefaultOutOfRange { bpm: u32, min: u32, max: u32 },

    #[error("Invalid dial geometry: {reason}")]
    InvalidDial { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
