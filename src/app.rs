//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

use crate::features::{Settings, progress};

pub use message::Message;
pub use state::{App, CoreState, ScanState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let ui = UiState::new(iced::time::Instant::now(), settings.scan.cycle());
        let core = CoreState::new(settings);

        let app = Self { core, ui };
        tracing::info!(
            "starting scan: {} per {} ms tick",
            app.core.settings.scan.step,
            app.core.settings.scan.tick_ms
        );

        let start = app.start_feed();
        (app, start)
    }

    /// Start the progress feed for the current run.
    ///
    /// Events are tagged with the run counter; a restart bumps the
    /// counter and any stragglers from the old stream are dropped by the
    /// update handler.
    fn start_feed(&self) -> Task<Message> {
        let scan = &self.core.settings.scan;
        let run = self.ui.scan.run;

        Task::run(
            progress::feed_events(scan.step, scan.tick()),
            move |event| Message::Progress(run, event),
        )
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dynamic window title based on scan progress
    pub fn title(&self) -> String {
        if self.ui.scan.completed {
            "Aegis - protected".to_string()
        } else {
            format!("Aegis - scanning {}%", progress::percent(self.ui.scan.progress))
        }
    }

    /// Subscription for the animation clock
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::time::Duration;

        // Vsync rate normally, throttled in power saving mode. The pulse
        // keeps looping after completion, so the clock never stops.
        match subscription_logic::animation_interval_ms(
            self.core.settings.display.power_saving_mode,
        ) {
            Some(ms) => {
                iced::time::every(Duration::from_millis(ms)).map(|_| Message::AnimationTick)
            }
            None => iced::window::frames().map(|_| Message::AnimationTick),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Throttled animation interval in power saving mode
    pub const POWER_SAVING_FRAME_MS: u64 = 100;

    /// `None` means vsync-rate frames
    pub fn animation_interval_ms(power_saving: bool) -> Option<u64> {
        power_saving.then_some(POWER_SAVING_FRAME_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn animation_clock_is_throttled_in_power_saving() {
        assert_eq!(animation_interval_ms(true), Some(POWER_SAVING_FRAME_MS));
    }

    #[test]
    fn animation_clock_is_vsync_by_default() {
        assert_eq!(animation_interval_ms(false), None);
    }
}
