//! Scan progress feed
//!
//! The counter that drives the shield widget: it advances by a fixed step
//! at a fixed interval, clamps at 1.0, and publishes every value to the
//! application as messages. The async stream owns the counter and
//! terminates itself at the ceiling; a superseded stream's remaining
//! events are filtered out by their run tag.

use std::time::Duration;

use iced::futures::Stream;

/// Default increment per tick
pub const DEFAULT_STEP: f64 = 0.01;

/// One published update from the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// New progress value in [0, 1]
    Advanced(f64),
    /// The counter reached its ceiling; emitted exactly once per run
    Completed,
}

/// Counter state: advances by a fixed step and latches at 1.0.
#[derive(Debug, Clone)]
pub struct ProgressFeed {
    value: f64,
    step: f64,
    completed: bool,
}

impl Default for ProgressFeed {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl ProgressFeed {
    pub fn new(step: f64) -> Self {
        Self {
            value: 0.0,
            step: step.max(0.0),
            completed: false,
        }
    }

    /// Current progress fraction in [0, 1].
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Advance one tick, clamping at the ceiling.
    ///
    /// The ceiling latches: once 1.0 is reached, further calls keep the
    /// value there without ever un-completing.
    pub fn advance(&mut self) {
        if !self.completed {
            self.value += self.step;
            if self.value >= 1.0 {
                self.value = 1.0;
                self.completed = true;
            }
        }
    }
}

/// Stream of progress events.
///
/// Sleeps `interval` between increments and terminates after emitting
/// [`ProgressEvent::Completed`] exactly once.
pub fn feed_events(step: f64, interval: Duration) -> impl Stream<Item = ProgressEvent> {
    async_stream::stream! {
        let mut feed = ProgressFeed::new(step);
        loop {
            tokio::time::sleep(interval).await;
            feed.advance();
            yield ProgressEvent::Advanced(feed.value());
            if feed.is_complete() {
                yield ProgressEvent::Completed;
                break;
            }
        }
    }
}

/// Integer percent in [0, 100] for a progress fraction.
pub fn percent(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u8
}
