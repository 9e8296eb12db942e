//! # Metronome - GUI
//!
//! This module contains the main GUI application for the metronome.
//! It shows a welcome screen, the BPM dial with play/pause and tempo
//! controls, and a settings screen with three switches.
//!
//! ## Architecture
//! - **Main Thread**: Iced GUI application with dark theme
//! - **State**: One `MetronomeSession` owned for the app's lifetime
//! - **Communication**: Tempo changes are forwarded over a crossbeam channel
//!   and drained after every update to retarget the dial animation
//! - **Updates**: 60 FPS ticks only while the dial arc is animating

mod ui;

use crossbeam_channel::Receiver;
use iced::keyboard::{self, key};
use iced::{self, Element, Subscription, Theme};
use log::{info, warn};
use metronome_core::{
    animation::SweepAnimation,
    config::CONFIG_FILE_NAME,
    navigation::Screen,
    MetronomeConfig, MetronomeSession, TempoEvent,
};
use std::path::Path;
use std::time::{Duration, Instant};
use ui::DialDisplay;

/// Main entry point for the metronome application.
///
/// Initializes logging, then the Iced GUI application with dark theme.
pub fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting metronome...");
    let result = iced::application("Metronome", MetronomeApp::update, MetronomeApp::view)
        .subscription(MetronomeApp::subscription)
        .theme(MetronomeApp::theme)
        .window_size(iced::Size::new(360.0, 360.0))
        .run();
    info!("Application finished with result: {:?}", result);
    result
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Start,            // Leave the welcome screen
    OpenSettings,     // Show the settings screen
    Back,             // Go back one screen

    // Tempo controls
    Increment,
    Decrement,
    TogglePlaying,

    // Settings switches
    ToggleVibration,
    ToggleSlider,
    ToggleAiCorrector,

    // Animation frame
    Tick,
}

/// Main application state.
#[derive(Debug)]
struct MetronomeApp {
    session: MetronomeSession,
    tempo_events: Receiver<TempoEvent>, // Fed by the session's tempo listener
    dial_animation: SweepAnimation,
}

impl Default for MetronomeApp {
    /// Creates the app from `metronome_config.json` if present, defaults otherwise.
    fn default() -> Self {
        let config = load_config(Path::new(CONFIG_FILE_NAME));
        let (config, mut session) = match MetronomeSession::from_config(&config) {
            Ok(session) => (config, session),
            Err(e) => {
                warn!("Config rejected ({}), using defaults", e);
                (MetronomeConfig::default(), MetronomeSession::new())
            }
        };

        let (tempo_tx, tempo_rx) = crossbeam_channel::unbounded();
        session.tempo_mut().subscribe(move |event| {
            // The receiver lives in the same app, so a send can only fail during teardown.
            let _ = tempo_tx.send(*event);
        });

        let dial_animation = SweepAnimation::new(session.sweep_angle(), config.sweep_duration());
        Self {
            session,
            tempo_events: tempo_rx,
            dial_animation,
        }
    }
}

impl MetronomeApp {
    /// Handles application state updates based on incoming messages.
    fn update(&mut self, message: Message) {
        log::debug!("Received message: {:?}", message);

        match message {
            Message::Start => self.session.navigator_mut().replace_all(Screen::Main),
            Message::OpenSettings => self.session.navigator_mut().navigate(Screen::Settings),
            Message::Back => {
                self.session.navigator_mut().pop_back();
            }
            Message::Increment => {
                self.session.increment();
            }
            Message::Decrement => {
                self.session.decrement();
            }
            Message::TogglePlaying => {
                self.session.toggle_playing();
            }
            Message::ToggleVibration => {
                self.session.toggle_vibration();
            }
            Message::ToggleSlider => {
                self.session.toggle_slider();
            }
            Message::ToggleAiCorrector => {
                self.session.toggle_ai_corrector();
            }
            Message::Tick => {
                // Redraw only; the dial samples the animation in `view`.
            }
        }

        self.drain_tempo_events();
    }

    /// Retargets the dial for every tempo change published since the last update.
    fn drain_tempo_events(&mut self) {
        let now = Instant::now();
        for event in self.tempo_events.try_iter() {
            if let TempoEvent::BpmChanged { bpm } = event {
                let target = self.session.dial().sweep_angle(bpm);
                self.dial_animation.retarget(target, now);
            }
        }
    }

    /// Renders the screen on top of the navigation stack.
    fn view(&self) -> Element<'_, Message> {
        match self.session.navigator().current() {
            Screen::Welcome => ui::welcome::view(),
            Screen::Main => {
                let dial = DialDisplay {
                    bpm: self.session.current_bpm(),
                    is_playing: self.session.is_playing(),
                    start_angle: self.session.dial().start_angle(),
                    sweep: self.dial_animation.value_at(Instant::now()),
                    max_sweep: self.session.dial().max_sweep(),
                };
                ui::main_screen::view(&dial)
            }
            Screen::Settings => ui::settings_screen::view(self.session.settings_snapshot()),
        }
    }

    /// Keyboard shortcuts always; frame ticks only while the arc moves.
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Named(key::Named::ArrowUp) => Some(Message::Increment),
            keyboard::Key::Named(key::Named::ArrowDown) => Some(Message::Decrement),
            keyboard::Key::Named(key::Named::Space) => Some(Message::TogglePlaying),
            keyboard::Key::Named(key::Named::Escape) => Some(Message::Back),
            _ => None,
        });

        if self.dial_animation.is_running(Instant::now()) {
            Subscription::batch([
                keys,
                iced::time::every(Duration::from_millis(16)).map(|_| Message::Tick),
            ])
        } else {
            keys
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Reads the optional config file.
///
/// A missing file means defaults. A broken file is logged and ignored so the
/// app always starts.
fn load_config(path: &Path) -> MetronomeConfig {
    if !path.exists() {
        info!("No {} found, using default settings", path.display());
        return MetronomeConfig::default();
    }
    match read_config(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("{:#}", e);
            MetronomeConfig::default()
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<MetronomeConfig> {
    use anyhow::Context;

    MetronomeConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
