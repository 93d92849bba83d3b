// src/app/update/scan.rs
//! Scan lifecycle message handlers

use std::time::Duration;

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ProgressEvent;
use crate::ui::widgets::Toast;

/// How long a notification stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

impl App {
    /// Handle scan-related messages
    pub fn handle_scan(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Progress(run, event) => {
                // Stragglers from a superseded feed stream are dropped.
                if stale_run(self.ui.scan.run, *run) {
                    return Some(Task::none());
                }
                Some(self.apply_progress(*event))
            }

            Message::AnimationTick => {
                self.ui.scan.tick(Instant::now());
                Some(Task::none())
            }

            Message::RestartScan => {
                self.ui.scan.restart(Instant::now());
                self.ui.toast = Some(Toast::info("Scan restarted"));
                tracing::info!("restarting scan (run {})", self.ui.scan.run);
                Some(Task::batch([self.start_feed(), dismiss_later()]))
            }

            Message::DismissToast => {
                self.ui.toast = None;
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn apply_progress(&mut self, event: ProgressEvent) -> Task<Message> {
        match event {
            ProgressEvent::Advanced(value) => {
                self.ui.scan.publish(value);
                Task::none()
            }
            ProgressEvent::Completed => {
                // The feed emits this once per run; the latch keeps any
                // duplicate from showing a second notification.
                if self.ui.scan.completed {
                    return Task::none();
                }
                self.ui.scan.completed = true;
                self.ui.toast = Some(Toast::success("Scan complete"));
                tracing::info!("scan complete");
                dismiss_later()
            }
        }
    }
}

/// An event belongs to a superseded run
fn stale_run(current: u32, event_run: u32) -> bool {
    current != event_run
}

/// Schedule the toast to auto-dismiss
fn dismiss_later() -> Task<Message> {
    Task::perform(tokio::time::sleep(TOAST_DURATION), |_| Message::DismissToast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::ToastStyle;

    fn advance(app: &mut App, value: f64) {
        let run = app.ui.scan.run;
        let _ = app.update(Message::Progress(run, ProgressEvent::Advanced(value)));
    }

    fn complete(app: &mut App) {
        let run = app.ui.scan.run;
        let _ = app.update(Message::Progress(run, ProgressEvent::Completed));
    }

    #[test]
    fn advanced_values_are_published() {
        let mut app = App::default();
        advance(&mut app, 0.54);

        assert!((app.ui.scan.progress - 0.54).abs() < 1e-9);
        assert!(!app.ui.scan.completed);
    }

    #[tokio::test]
    async fn completion_notifies_exactly_once() {
        let mut app = App::default();
        advance(&mut app, 1.0);
        complete(&mut app);

        assert!(app.ui.scan.completed);
        let toast = app.ui.toast.take().expect("completion toast");
        assert_eq!(toast.style, ToastStyle::Success);

        // A duplicate event must not re-notify.
        complete(&mut app);
        assert!(app.ui.toast.is_none());
    }

    #[tokio::test]
    async fn restart_resets_the_run() {
        let mut app = App::default();
        advance(&mut app, 1.0);
        complete(&mut app);

        let run_before = app.ui.scan.run;
        let _ = app.update(Message::RestartScan);

        assert!(!app.ui.scan.completed);
        assert_eq!(app.ui.scan.progress, 0.0);
        assert_eq!(app.ui.scan.run, run_before + 1);

        // Completion can fire again on the new run.
        advance(&mut app, 1.0);
        complete(&mut app);
        assert!(app.ui.scan.completed);
    }

    #[tokio::test]
    async fn stale_run_events_are_dropped() {
        let mut app = App::default();
        let old_run = app.ui.scan.run;
        let _ = app.update(Message::RestartScan);

        // An event from the superseded stream arrives late.
        let _ = app.update(Message::Progress(old_run, ProgressEvent::Advanced(0.9)));
        assert_eq!(app.ui.scan.progress, 0.0);

        let _ = app.update(Message::Progress(old_run, ProgressEvent::Completed));
        assert!(!app.ui.scan.completed);
    }

    #[tokio::test]
    async fn dismiss_clears_the_toast() {
        let mut app = App::default();
        let _ = app.update(Message::RestartScan);
        assert!(app.ui.toast.is_some());

        let _ = app.update(Message::DismissToast);
        assert!(app.ui.toast.is_none());
    }
}
