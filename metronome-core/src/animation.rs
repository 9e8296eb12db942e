//! # Sweep Animation Module
//!
//! Eases the dial arc from its current sweep to a new target instead of
//! jumping. Time is passed in explicitly so the curve can be sampled from a
//! GUI tick or from a test.

use std::time::{Duration, Instant};

/// Default length of one dial transition.
pub const DEFAULT_SWEEP_DURATION: Duration = Duration::from_millis(300);

/// Control points of the fast-out-slow-in curve.
const FAST_OUT_SLOW_IN: (f32, f32, f32, f32) = (0.4, 0.0, 0.2, 1.0);

/// A one-dimensional eased transition between two sweep angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAnimation {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
}

impl SweepAnimation {
    /// Creates an idle animation resting at `value`.
    pub fn new(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Starts a new transition towards `target` from whatever is shown at `now`.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        self.from = self.value_at(now);
        self.to = target;
        self.started = Some(now);
    }

    /// Sweep to display at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * fast_out_slow_in(progress)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Material "fast out, slow in" easing: cubic-bezier(0.4, 0.0, 0.2, 1.0).
pub fn fast_out_slow_in(t: f32) -> f32 {
    let (x1, y1, x2, y2) = FAST_OUT_SLOW_IN;
    cubic_bezier(x1, y1, x2, y2, t)
}

/// Evaluates a CSS-style cubic bezier timing curve at horizontal position `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }
    let s = solve_curve_x(x1, x2, x);
    bezier_coord(s, y1, y2)
}

// Polynomial form of one bezier axis with endpoints fixed at 0 and 1.
fn bezier_coord(s: f32, p1: f32, p2: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

/// Finds the curve parameter whose x coordinate is `x`.
///
/// Newton-Raphson first, bisection if the slope gets too flat.
fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let error = bezier_coord(s, x1, x2) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_coord(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
