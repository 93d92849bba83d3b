//! Animation support for the shield scan
//!
//! The looping pulse is phase-derived: a [`ScanAnimation`] turns the wall
//! clock into a repeating phase in [0, 1), and [`pulse_frame`] maps that
//! phase to the per-frame scale/stroke/alpha/sweep values. Discrete
//! progress updates are smoothed separately with `iced_anim` transitions
//! owned by the application state.

mod scan;

pub use scan::{PulseFrame, ScanAnimation, ease, pulse_frame};
