//! Looping scan phase and pulse values
//!
//! All values derived here are transient: they are recomputed from the
//! clock on every animation tick and discarded after the redraw.

use std::time::Duration;

use iced::time::Instant;

/// Pulse ring scale at the end of a cycle
const PULSE_SCALE_MAX: f32 = 1.5;

/// Pulse ring stroke width at the start / end of a cycle
const PULSE_STROKE_START: f32 = 10.0;
const PULSE_STROKE_END: f32 = 1.5;

/// Repeating animation clock for the scan loop.
///
/// Owns nothing but the cycle origin; restarting or retiming the loop
/// never touches any other state.
#[derive(Debug, Clone, Copy)]
pub struct ScanAnimation {
    started: Instant,
    cycle: Duration,
}

impl ScanAnimation {
    pub fn new(now: Instant, cycle: Duration) -> Self {
        Self {
            started: now,
            cycle,
        }
    }

    /// Current loop phase in [0, 1).
    pub fn phase(&self, now: Instant) -> f32 {
        let cycle = self.cycle.as_secs_f32().max(0.001);
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / cycle).fract()
    }

    /// Restart the loop from phase zero.
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    /// Change the loop period; takes effect on the next tick.
    pub fn set_cycle(&mut self, cycle: Duration) {
        self.cycle = cycle;
    }
}

/// Per-frame pulse values derived from the loop phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    /// Pulse ring scale around the silhouette center (1.0 -> 1.5)
    pub scale: f32,
    /// Pulse ring stroke width (10.0 -> 1.5)
    pub stroke_width: f32,
    /// Pulse ring opacity (1.0 -> 0.0)
    pub ring_alpha: f32,
    /// Linear sweep phase driving the radar wedge
    pub sweep_phase: f32,
}

impl Default for PulseFrame {
    fn default() -> Self {
        pulse_frame(0.0)
    }
}

/// Map a loop phase in [0, 1] to the pulse values for this frame.
///
/// The ring values follow the eased curve; the sweep phase stays linear
/// because its easing is baked into the wedge angle mapping.
pub fn pulse_frame(phase: f32) -> PulseFrame {
    let phase = phase.clamp(0.0, 1.0);
    let eased = ease(phase);

    PulseFrame {
        scale: 1.0 + (PULSE_SCALE_MAX - 1.0) * eased,
        stroke_width: PULSE_STROKE_START + (PULSE_STROKE_END - PULSE_STROKE_START) * eased,
        ring_alpha: 1.0 - eased,
        sweep_phase: phase,
    }
}

/// Standard ease curve of the pulse: cubic-bezier(0.4, 0.0, 0.2, 1.0).
pub fn ease(t: f32) -> f32 {
    cubic_bezier(0.4, 0.0, 0.2, 1.0, t)
}

/// Evaluate a CSS-style cubic bezier timing curve at `x`.
///
/// Solves the curve parameter for `x` with a few Newton iterations (the
/// x polynomial is monotonic for valid control points) and evaluates the
/// y polynomial at the solution.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut u = x;
    for _ in 0..8 {
        let error = sample(u, x1, x2) - x;
        let slope = derivative(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - error / slope).clamp(0.0, 1.0);
    }

    sample(u, y1, y2)
}

/// Bezier polynomial with endpoints pinned at 0 and 1.
fn sample(u: f32, p1: f32, p2: f32) -> f32 {
    let v = 1.0 - u;
    3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
}

fn derivative(u: f32, p1: f32, p2: f32) -> f32 {
    let v = 1.0 - u;
    3.0 * v * v * p1 + 6.0 * v * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}
