use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::format::{PLACEHOLDER, format_percent};
use crate::system::sampler::{Sample, Sampler};
use crate::system::ticks::{SystemTicks, TickSource};

/// Display-surface state: owns the sampler, the latest published value, and
/// the formatting settings. Rendering itself lives in [`crate::ui`].
pub struct App<S: TickSource = SystemTicks> {
    pub running: bool,
    pub paused: bool,
    sampler: Sampler<S>,
    latest: Option<f64>,
    decimal_places: u8,
    hold_last_sample: bool,
    refresh_rate_ms: u64,
}

impl App<SystemTicks> {
    pub fn new(config: &Config) -> Self {
        App::with_sampler(config, Sampler::system())
    }
}

impl<S: TickSource> App<S> {
    pub fn with_sampler(config: &Config, sampler: Sampler<S>) -> Self {
        App {
            running: true,
            paused: false,
            sampler,
            latest: None,
            decimal_places: config.general.decimal_places,
            hold_last_sample: config.general.hold_last_sample,
            refresh_rate_ms: config.general.refresh_rate_ms,
        }
    }

    /// Runs one measurement and publishes it, last-value-wins. Unavailable
    /// ticks either hold the previous good value or clear it, per config.
    pub fn refresh(&mut self) {
        if self.paused {
            return;
        }
        match self.sampler.tick() {
            Sample::Usage(value) => self.latest = Some(value),
            Sample::Unavailable => {
                if !self.hold_last_sample {
                    self.latest = None;
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('p') => self.paused = !self.paused,
            _ => {}
        }
    }

    pub fn latest(&self) -> Option<f64> {
        self.latest
    }

    pub fn refresh_rate_ms(&self) -> u64 {
        self.refresh_rate_ms
    }

    pub fn display_text(&self) -> String {
        match self.latest {
            Some(value) => format_percent(value, self.decimal_places),
            None => PLACEHOLDER.to_string(),
        }
    }
}
