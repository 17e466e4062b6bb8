//! Progress ring geometry

use serde::{Deserialize, Serialize};

/// Angle the ring sweep starts at (12 o'clock in screen coordinates)
pub const RING_START_ANGLE_DEGREES: f64 = 270.0;

/// Radius of the handle dot drawn at the tip of the sweep while playing
pub const HANDLE_RADIUS_PLAYING: f64 = 12.0;

/// Geometry of the progress ring for one frame.
///
/// Coordinates are relative to the ring centre with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub start_angle_degrees: f64,
    pub sweep_degrees: f64,
    pub handle_x: f64,
    pub handle_y: f64,
    pub handle_radius: f64,
}

/// Fraction of the total already counted, in `0.0..=1.0`
pub fn progress_fraction(elapsed_seconds: u64, total_seconds: u64) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    (elapsed_seconds as f64 / total_seconds as f64).clamp(0.0, 1.0)
}

pub fn sweep_degrees(elapsed_seconds: u64, total_seconds: u64) -> f64 {
    360.0 * progress_fraction(elapsed_seconds, total_seconds)
}

impl RingGeometry {
    pub fn compute(elapsed_seconds: u64, total_seconds: u64, is_playing: bool, ring_radius: f64) -> Self {
        let sweep = sweep_degrees(elapsed_seconds, total_seconds);
        let tip = (RING_START_ANGLE_DEGREES + sweep).to_radians();

        Self {
            start_angle_degrees: RING_START_ANGLE_DEGREES,
            sweep_degrees: sweep,
            handle_x: tip.cos() * ring_radius,
            handle_y: tip.sin() * ring_radius,
            handle_radius: if is_playing { HANDLE_RADIUS_PLAYING } else { 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sweep_is_proportional_to_elapsed() {
        assert_close(sweep_degrees(0, 10), 0.0);
        assert_close(sweep_degrees(5, 10), 180.0);
        assert_close(sweep_degrees(10, 10), 360.0);
    }

    #[test]
    fn zero_total_and_overshoot_are_clamped() {
        assert_close(sweep_degrees(3, 0), 0.0);
        assert_close(sweep_degrees(12, 10), 360.0);
        assert_close(progress_fraction(12, 10), 1.0);
    }

    #[test]
    fn handle_starts_at_top_and_moves_clockwise() {
        let start = RingGeometry::compute(0, 8, true, 150.0);
        assert_close(start.handle_x, 0.0);
        assert_close(start.handle_y, -150.0);

        let quarter = RingGeometry::compute(2, 8, true, 150.0);
        assert_close(quarter.sweep_degrees, 90.0);
        assert_close(quarter.handle_x, 150.0);
        assert_close(quarter.handle_y, 0.0);
    }

    #[test]
    fn handle_is_hidden_unless_playing() {
        assert_close(RingGeometry::compute(1, 4, true, 10.0).handle_radius, HANDLE_RADIUS_PLAYING);
        assert_close(RingGeometry::compute(1, 4, false, 10.0).handle_radius, 0.0);
    }
}
