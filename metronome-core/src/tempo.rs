//! # Tempo State Module
//!
//! Owns the current BPM and the play/pause flag. The BPM is kept inside a
//! [`BpmRange`] at all times: stepping past a bound is a silent no-op.
//!
//! Playing is a pure flag. Nothing here schedules clicks.

use log::debug;

use crate::error::{MetronomeError, Result};
use crate::listeners::{ListenerId, Listeners};

/// Lowest tempo the dial accepts.
pub const MIN_BPM: u32 = 30;
/// Highest tempo the dial accepts.
pub const MAX_BPM: u32 = 240;
/// Tempo a fresh session starts at.
pub const DEFAULT_BPM: u32 = 120;

/// Inclusive tempo bounds with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpmRange {
    min: u32,
    max: u32,
}

impl BpmRange {
    pub const DEFAULT: BpmRange = BpmRange {
        min: MIN_BPM,
        max: MAX_BPM,
    };

    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min >= max {
            return Err(MetronomeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Width of the range in BPM. Always non-zero.
    pub fn span(&self) -> u32 {
        self.max - self.min
    }

    pub fn contains(&self, bpm: u32) -> bool {
        (self.min..=self.max).contains(&bpm)
    }

    pub fn clamp(&self, bpm: u32) -> u32 {
        bpm.clamp(self.min, self.max)
    }
}

impl Default for BpmRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Published to tempo listeners after every real change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempoEvent {
    BpmChanged { bpm: u32 },
    PlayingChanged { is_playing: bool },
}

/// BPM value plus play flag, with change notification.
#[derive(Debug)]
pub struct TempoState {
    bpm: u32,
    is_playing: bool,
    range: BpmRange,
    listeners: Listeners<TempoEvent>,
}

impl TempoState {
    /// Starts at 120 BPM, paused, within 30..=240.
    pub fn new() -> Self {
        Self::with_range(BpmRange::DEFAULT, DEFAULT_BPM)
    }

    /// Starts at `initial_bpm` clamped into `range`, paused.
    pub fn with_range(range: BpmRange, initial_bpm: u32) -> Self {
        Self {
            bpm: range.clamp(initial_bpm),
            is_playing: false,
            range,
            listeners: Listeners::new(),
        }
    }

    pub fn current_bpm(&self) -> u32 {
        self.bpm
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn range(&self) -> BpmRange {
        self.range
    }

    /// Raises the tempo by one unless already at the maximum.
    ///
    /// Returns `true` if the BPM changed.
    pub fn increment(&mut self) -> bool {
        if self.bpm >= self.range.max() {
            return false;
        }
        self.bpm += 1;
        self.publish_bpm();
        true
    }

    /// Lowers the tempo by one unless already at the minimum.
    ///
    /// Returns `true` if the BPM changed.
    pub fn decrement(&mut self) -> bool {
        if self.bpm <= self.range.min() {
            return false;
        }
        self.bpm -= 1;
        self.publish_bpm();
        true
    }

    /// Flips the play flag and returns the new value.
    pub fn toggle_playing(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        debug!("Playing: {}", self.is_playing);
        self.listeners.emit(&TempoEvent::PlayingChanged {
            is_playing: self.is_playing,
        });
        self.is_playing
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&TempoEvent) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn publish_bpm(&mut self) {
        debug!("BPM: {}", self.bpm);
        self.listeners.emit(&TempoEvent::BpmChanged { bpm: self.bpm });
    }
}

impl Default for TempoState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn starts_paused_at_default_tempo() {
        let tempo = TempoState::new();
        assert_eq!(tempo.current_bpm(), 120);
        assert!(!tempo.is_playing());
        assert_eq!(tempo.range(), BpmRange::DEFAULT);
    }

    #[test]
    fn initial_bpm_is_clamped_into_range() {
        let range = BpmRange::new(40, 200).unwrap();
        assert_eq!(TempoState::with_range(range, 10).current_bpm(), 40);
        assert_eq!(TempoState::with_range(range, 500).current_bpm(), 200);
    }

    #[test]
    fn range_rejects_empty_or_inverted_bounds() {
        assert!(BpmRange::new(100, 100).is_err());
        assert!(BpmRange::new(200, 100).is_err());
        assert_eq!(BpmRange::new(30, 240).unwrap().span(), 210);
    }

    #[test]
    fn bound_no_ops_publish_nothing() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let range = BpmRange::new(30, 31).unwrap();
        let mut tempo = TempoState::with_range(range, 31);
        let sink = Arc::clone(&events);
        tempo.subscribe(move |e| sink.lock().unwrap().push(*e));

        assert!(!tempo.increment());
        assert!(tempo.decrement());
        assert!(!tempo.decrement());

        assert_eq!(
            *events.lock().unwrap(),
            vec![TempoEvent::BpmChanged { bpm: 30 }]
        );
    }

    #[test]
    fn listener_reads_new_value_synchronously() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut tempo = TempoState::new();
        let sink = Arc::clone(&events);
        tempo.subscribe(move |e| sink.lock().unwrap().push(*e));

        tempo.increment();
        tempo.toggle_playing();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                TempoEvent::BpmChanged { bpm: 121 },
                TempoEvent::PlayingChanged { is_playing: true },
            ]
        );
    }
}
