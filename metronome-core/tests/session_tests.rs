//! Session Tests
//!
//! End-to-end behavior of a metronome session: tempo bounds, play toggling,
//! settings, the dial mapping and config loading.

use std::io::Write;
use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use metronome_core::navigation::Screen;
use metronome_core::tempo::{MAX_BPM, MIN_BPM};
use metronome_core::{MetronomeConfig, MetronomeError, MetronomeSession, TempoEvent, TempoState};
use test_case::test_case;

// === Tempo Bounds ===

#[test]
fn test_ten_increments_then_clamp_at_minimum() {
    let mut session = MetronomeSession::new();
    assert_eq!(session.current_bpm(), 120);

    for _ in 0..10 {
        session.increment();
    }
    assert_eq!(session.current_bpm(), 130);

    for _ in 0..200 {
        session.decrement();
    }
    assert_eq!(session.current_bpm(), MIN_BPM);

    session.decrement();
    assert_eq!(session.current_bpm(), MIN_BPM);
}

#[test]
fn test_increment_is_idempotent_at_maximum() {
    let mut session = MetronomeSession::new();
    while session.increment() {}
    assert_eq!(session.current_bpm(), MAX_BPM);

    for _ in 0..5 {
        assert!(!session.increment());
        assert_eq!(session.current_bpm(), MAX_BPM);
    }
}

#[test]
fn test_any_step_sequence_stays_in_bounds() {
    // Deterministic pseudo-random walk over increments and decrements.
    let mut state: u32 = 0x2545_f491;
    for start in [MIN_BPM, 31, 120, 239, MAX_BPM] {
        let mut tempo = TempoState::with_range(Default::default(), start);
        for _ in 0..2_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if state % 3 == 0 {
                tempo.decrement();
            } else {
                tempo.increment();
            }
            let bpm = tempo.current_bpm();
            assert!((MIN_BPM..=MAX_BPM).contains(&bpm), "bpm {} escaped bounds", bpm);
        }
    }
}

#[test_case(31 ; "just above minimum")]
#[test_case(120 ; "default")]
#[test_case(239 ; "just below maximum")]
fn test_increment_and_decrement_are_inverse_inside_range(start: u32) {
    let mut tempo = TempoState::with_range(Default::default(), start);
    tempo.increment();
    tempo.decrement();
    assert_eq!(tempo.current_bpm(), start);
    tempo.decrement();
    tempo.increment();
    assert_eq!(tempo.current_bpm(), start);
}

// === Play Toggle ===

#[test]
fn test_toggle_playing_is_its_own_inverse() {
    let mut session = MetronomeSession::new();
    assert!(!session.is_playing());
    assert!(session.toggle_playing());
    assert!(session.is_playing());
    assert!(!session.toggle_playing());
    assert!(!session.is_playing());
}

#[test]
fn test_play_flag_is_independent_of_tempo() {
    let mut session = MetronomeSession::new();
    session.toggle_playing();
    session.increment();
    assert!(session.is_playing());
    assert_eq!(session.current_bpm(), 121);
}

// === Notifications ===

#[test]
fn test_listener_sees_each_change_once_in_order() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut session = MetronomeSession::new();
    let sink = Arc::clone(&events);
    let id = session.tempo_mut().subscribe(move |e| sink.lock().unwrap().push(*e));

    session.increment();
    session.decrement();
    session.toggle_playing();
    assert!(session.tempo_mut().unsubscribe(id));
    session.increment();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            TempoEvent::BpmChanged { bpm: 121 },
            TempoEvent::BpmChanged { bpm: 120 },
            TempoEvent::PlayingChanged { is_playing: true },
        ]
    );
}

#[test]
fn test_settings_listener_receives_snapshots() {
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let mut session = MetronomeSession::new();
    let sink = Arc::clone(&snapshots);
    session
        .settings_mut()
        .subscribe(move |e| sink.lock().unwrap().push(e.snapshot));

    session.toggle_vibration();
    session.toggle_ai_corrector();

    let seen = snapshots.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(!seen[0].vibration_enabled && seen[0].ai_corrector_enabled);
    assert!(!seen[1].vibration_enabled && !seen[1].ai_corrector_enabled);
    assert_eq!(*seen.last().unwrap(), session.settings_snapshot());
}

// === Dial ===

#[test]
fn test_dial_endpoints_are_exact() {
    let mut session = MetronomeSession::new();
    while session.decrement() {}
    assert_eq!(session.sweep_angle(), 28.5);
    while session.increment() {}
    assert_eq!(session.sweep_angle(), 28.5 + 228.0);
}

#[test]
fn test_dial_follows_tempo() {
    let mut session = MetronomeSession::new();
    let before = session.sweep_angle();
    session.increment();
    assert_relative_eq!(session.sweep_angle() - before, 228.0 / 210.0, epsilon = 1e-4);
}

// === Navigation ===

#[test]
fn test_screen_flow() {
    let mut session = MetronomeSession::new();
    assert_eq!(session.navigator().current(), Screen::Welcome);

    session.navigator_mut().replace_all(Screen::Main);
    session.increment();
    session.navigator_mut().navigate(Screen::Settings);
    session.toggle_slider();
    assert!(session.navigator_mut().pop_back());

    // State outlives screen changes.
    assert_eq!(session.navigator().current(), Screen::Main);
    assert_eq!(session.current_bpm(), 121);
    assert!(!session.settings_snapshot().slider_mode_enabled);
}

// === Config ===

#[test]
fn test_session_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "min_bpm": 40, "max_bpm": 240, "default_bpm": 100,
             "dial": {{ "start_angle_degrees": 135.0, "total_sweep_range_degrees": 270.0,
                        "min_visible_sweep_degrees": 10.0 }} }}"#
    )
    .unwrap();

    let config = MetronomeConfig::load(file.path()).unwrap();
    let mut session = MetronomeSession::from_config(&config).unwrap();

    assert_eq!(session.current_bpm(), 100);
    assert_eq!(session.bpm_range().min(), 40);
    for _ in 0..100 {
        session.decrement();
    }
    assert_eq!(session.current_bpm(), 40);
    assert_relative_eq!(session.sweep_angle(), 10.0);
    assert_relative_eq!(session.dial().start_angle(), 135.0);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MetronomeConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MetronomeError::Io(_)));
}

#[test]
fn test_invalid_config_does_not_build_session() {
    let config = MetronomeConfig {
        min_bpm: 100,
        max_bpm: 100,
        ..MetronomeConfig::default()
    };
    assert!(MetronomeSession::from_config(&config).is_err());
}
