//! # UI Module
//!
//! This module contains all screens and widgets of the metronome.

pub mod bpm_dial;
pub mod main_screen;
pub mod settings_screen;
pub mod style;
pub mod welcome;

/// Everything the dial screen needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct DialDisplay {
    pub bpm: u32,
    pub is_playing: bool,
    /// Arc start, degrees clockwise from 3 o'clock.
    pub start_angle: f32,
    /// Currently shown sweep (animated), degrees.
    pub sweep: f32,
    /// Sweep at the top of the tempo range, degrees.
    pub max_sweep: f32,
}
