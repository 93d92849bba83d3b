//! Sweep arc angle mapping
//!
//! Converts the scan loop phase into the `(start, sweep)` angle pair of
//! the radar wedge. The mapping is piecewise on purpose: the leading edge
//! of the wedge moves at a third of the trailing edge's speed for the
//! first half of the cycle, then accelerates and catches up, so the slice
//! widens slowly, peaks at 120°, and closes back to nothing at the end of
//! every loop. The easing lives in the angle math, not in the timing
//! curve driving the phase.

/// Phase angle at which the coordinate mapping switches
const PHASE_SPLIT: f32 = 180.0;

/// Coordinate angle at the switch point
const SPLIT_COORDINATE: f32 = 60.0;

/// Shift so the wedge opens from the visual top instead of 3 o'clock
const TOP_SHIFT: f32 = 90.0;

/// A pie-slice arc in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepArc {
    /// Leading edge of the wedge, already shifted to the top reference
    pub start: f32,
    /// Angular extent of the wedge
    pub sweep: f32,
}

/// Map a loop phase in [0, 1] to the wedge angles for this frame.
pub fn wedge_for_phase(phase: f32) -> SweepArc {
    sweep_angles(remap(phase.clamp(0.0, 1.0), 0.0, 1.0, 0.0, 360.0))
}

/// Map an end angle in [0, 360] to the wedge start/sweep pair.
pub fn sweep_angles(end_angle: f32) -> SweepArc {
    let coordinate = if end_angle < PHASE_SPLIT {
        end_angle / 3.0
    } else {
        remap(end_angle, PHASE_SPLIT, 360.0, SPLIT_COORDINATE, 360.0)
    };

    SweepArc {
        start: coordinate - TOP_SHIFT,
        sweep: end_angle - coordinate,
    }
}

/// Linear remap of `value` from [min1, max1] to [min2, max2].
///
/// The domain must not be degenerate; the shipped constants never are,
/// but the precondition is asserted so a reconfiguration cannot silently
/// divide by zero.
pub fn remap(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    assert!(
        (max1 - min1).abs() > f32::EPSILON,
        "remap domain is degenerate: [{min1}, {max1}]"
    );
    (value - min1) * ((max2 - min2) / (max1 - min1)) + min2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn wedge_is_closed_at_phase_start() {
        let arc = sweep_angles(0.0);
        assert_close(arc.start, -90.0);
        assert_close(arc.sweep, 0.0);
    }

    #[test]
    fn first_half_sweeps_at_two_thirds_rate() {
        // Below 180° the coordinate is end/3, so sweep = (2/3) * end.
        for end in [1.0_f32, 45.0, 90.0, 120.0, 179.0] {
            let arc = sweep_angles(end);
            assert_close(arc.sweep, end * 2.0 / 3.0);
        }
    }

    #[test]
    fn first_half_sweep_is_monotonic() {
        let mut previous = -1.0_f32;
        let mut end = 0.0_f32;
        while end < 180.0 {
            let arc = sweep_angles(end);
            assert!(arc.sweep > previous, "sweep regressed at end angle {end}");
            previous = arc.sweep;
            end += 0.5;
        }
    }

    #[test]
    fn wedge_peaks_at_phase_boundary() {
        let arc = sweep_angles(180.0);
        assert_close(arc.start, 60.0 - 90.0);
        assert_close(arc.sweep, 120.0);
    }

    #[test]
    fn wedge_closes_at_phase_end() {
        let arc = sweep_angles(360.0);
        assert_close(arc.start, 360.0 - 90.0);
        assert_close(arc.sweep, 0.0);
    }

    #[test]
    fn mapping_is_continuous_at_the_boundary() {
        let below = sweep_angles(179.999);
        let above = sweep_angles(180.0);
        assert!((below.sweep - above.sweep).abs() < 0.01);
        assert!((below.start - above.start).abs() < 0.01);
    }

    #[test]
    fn phase_endpoints_match_angle_endpoints() {
        let start = wedge_for_phase(0.0);
        assert_close(start.sweep, 0.0);

        let peak = wedge_for_phase(0.5);
        assert_close(peak.sweep, 120.0);

        let end = wedge_for_phase(1.0);
        assert_close(end.sweep, 0.0);
    }

    #[test]
    fn sweep_never_exceeds_peak() {
        let mut end = 0.0_f32;
        while end <= 360.0 {
            let arc = sweep_angles(end);
            assert!(arc.sweep >= -1e-3, "negative sweep at {end}");
            assert!(arc.sweep <= 120.0 + 1e-3, "sweep above peak at {end}");
            end += 0.25;
        }
    }

    #[test]
    fn remap_maps_endpoints_and_midpoint() {
        assert_close(remap(180.0, 180.0, 360.0, 60.0, 360.0), 60.0);
        assert_close(remap(360.0, 180.0, 360.0, 60.0, 360.0), 360.0);
        assert_close(remap(270.0, 180.0, 360.0, 60.0, 360.0), 210.0);
    }

    #[test]
    #[should_panic(expected = "degenerate")]
    fn remap_rejects_degenerate_domain() {
        remap(1.0, 180.0, 180.0, 60.0, 360.0);
    }
}
