// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateScanColor(preset) => {
                self.core.settings.scan.color = *preset;
                self.persist_settings();
                Some(Task::none())
            }

            Message::UpdateCycleMs(ms) => {
                self.core.settings.scan.cycle_ms = u64::from(*ms);
                // Retime the running loop without restarting the scan.
                self.ui
                    .scan
                    .animation
                    .set_cycle(self.core.settings.scan.cycle());
                self.persist_settings();
                Some(Task::none())
            }

            Message::UpdateDarkMode(dark) => {
                self.core.settings.display.dark_mode = *dark;
                self.persist_settings();
                Some(Task::none())
            }

            Message::UpdatePowerSavingMode(enabled) => {
                self.core.settings.display.power_saving_mode = *enabled;
                self.persist_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ScanPreset;

    #[test]
    fn cycle_update_retimes_the_loop() {
        let mut app = App::default();
        let _ = app.handle_settings(&Message::UpdateCycleMs(2400));
        assert_eq!(app.core.settings.scan.cycle_ms, 2400);
    }

    #[test]
    fn color_update_is_stored() {
        let mut app = App::default();
        let _ = app.handle_settings(&Message::UpdateScanColor(ScanPreset::Azure));
        assert_eq!(app.core.settings.scan.color, ScanPreset::Azure);
    }

    #[test]
    fn scan_messages_are_not_handled_here() {
        let mut app = App::default();
        assert!(app.handle_settings(&Message::AnimationTick).is_none());
        assert!(app.handle_settings(&Message::RestartScan).is_none());
    }
}
