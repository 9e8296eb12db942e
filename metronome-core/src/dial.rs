//! # Dial Mapping Module
//!
//! Maps a tempo onto the arc drawn around the watch face. The arc starts at a
//! fixed angle and sweeps clockwise. A small minimum sweep keeps it visible at
//! the lowest tempo:
//!
//! ```text
//! sweep = (bpm - min) / (max - min) * total_sweep_range + min_visible_sweep
//! ```
//!
//! Angles are in degrees, clockwise from the 3 o'clock position, which is
//! the convention of screen-space canvases.

use serde::{Deserialize, Serialize};

use crate::error::{MetronomeError, Result};
use crate::tempo::BpmRange;

/// Fixed angles describing the dial arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialGeometry {
    /// Where the arc begins.
    pub start_angle_degrees: f32,
    /// Extra sweep covered between the lowest and highest tempo.
    pub total_sweep_range_degrees: f32,
    /// Sweep drawn at the lowest tempo.
    pub min_visible_sweep_degrees: f32,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            start_angle_degrees: 142.0,
            total_sweep_range_degrees: 228.0,
            min_visible_sweep_degrees: 28.5,
        }
    }
}

impl DialGeometry {
    /// Rejects non-finite angles and negative sweeps.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("start_angle_degrees", self.start_angle_degrees),
            ("total_sweep_range_degrees", self.total_sweep_range_degrees),
            ("min_visible_sweep_degrees", self.min_visible_sweep_degrees),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(MetronomeError::InvalidDial {
                    reason: format!("{} is not finite", name),
                });
            }
        }
        if self.total_sweep_range_degrees < 0.0 || self.min_visible_sweep_degrees < 0.0 {
            return Err(MetronomeError::InvalidDial {
                reason: "sweep angles must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Stateless BPM to sweep-angle mapping for one range and geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialMapper {
    range: BpmRange,
    geometry: DialGeometry,
}

impl DialMapper {
    pub fn new(range: BpmRange, geometry: DialGeometry) -> Self {
        Self { range, geometry }
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    /// Position of `bpm` within the range, from 0.0 to 1.0.
    ///
    /// Values outside the range are clamped first.
    pub fn fraction(&self, bpm: u32) -> f32 {
        let bpm = self.range.clamp(bpm);
        (bpm - self.range.min()) as f32 / self.range.span() as f32
    }

    /// Sweep of the arc for `bpm`, in degrees.
    pub fn sweep_angle(&self, bpm: u32) -> f32 {
        self.fraction(bpm) * self.geometry.total_sweep_range_degrees
            + self.geometry.min_visible_sweep_degrees
    }

    pub fn start_angle(&self) -> f32 {
        self.geometry.start_angle_degrees
    }

    /// Sweep at the top of the range.
    pub fn max_sweep(&self) -> f32 {
        self.geometry.min_visible_sweep_degrees + self.geometry.total_sweep_range_degrees
    }
}
