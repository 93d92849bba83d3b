// src/app/state.rs
//! Application state definitions

use std::time::Duration;

use iced::time::Instant;
use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::Settings;
use crate::features::progress;
use crate::ui::animation::{PulseFrame, ScanAnimation, pulse_frame};
use crate::ui::widgets::Toast;

/// Easing window for the percent label between feed ticks
const SMOOTHING_DURATION: Duration = Duration::from_millis(400);

/// Main application state
pub struct App {
    /// Core infrastructure (settings)
    pub core: CoreState,
    /// UI state (scan lifecycle, animations, notifications)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

/// UI state
pub struct UiState {
    pub scan: ScanState,
    pub toast: Option<Toast>,
}

impl UiState {
    pub fn new(now: Instant, cycle: Duration) -> Self {
        Self {
            scan: ScanState::new(now, cycle),
            toast: None,
        }
    }
}

/// Scan lifecycle state
pub struct ScanState {
    /// Latest value published by the progress feed
    pub progress: f64,
    /// Smoothed copy driving the percent label
    pub display_progress: Animated<f32>,
    /// Completion latch; guards the exactly-once notification
    pub completed: bool,
    /// Current feed run; events from superseded runs are dropped
    pub run: u32,
    /// Loop clock for the pulse
    pub animation: ScanAnimation,
    /// Pulse values computed on the last animation tick
    pub pulse: PulseFrame,
}

/// Create the label smoothing easing
fn smoothing() -> Easing {
    Easing::EASE_OUT.with_duration(SMOOTHING_DURATION)
}

impl ScanState {
    pub fn new(now: Instant, cycle: Duration) -> Self {
        Self {
            progress: 0.0,
            display_progress: Animated::transition(0.0, smoothing()),
            completed: false,
            run: 0,
            animation: ScanAnimation::new(now, cycle),
            pulse: PulseFrame::default(),
        }
    }

    /// Record a value published by the feed and ease the label toward it.
    pub fn publish(&mut self, value: f64) {
        self.progress = value;
        self.display_progress.update((value as f32).into());
    }

    /// Reset for a fresh run; the bumped `run` retires the old stream.
    pub fn restart(&mut self, now: Instant) {
        self.progress = 0.0;
        self.completed = false;
        self.run = self.run.wrapping_add(1);
        self.display_progress = Animated::transition(0.0, smoothing());
        self.animation.restart(now);
    }

    /// Advance the per-frame state.
    pub fn tick(&mut self, now: Instant) {
        self.display_progress.tick(now);
        self.pulse = pulse_frame(self.animation.phase(now));
    }

    /// Percent currently shown in the label.
    pub fn display_percent(&self) -> u8 {
        progress::percent(f64::from(*self.display_progress.value()))
    }
}
