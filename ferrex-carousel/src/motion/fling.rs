//! Fling projection for drag release

use crate::constants::drag;

/// Whole slides a release at `velocity_px_per_ms` should carry the track,
/// in pointer space (positive = pointer moving towards +main axis).
///
/// Releases slower than [`drag::FLING_MIN_VELOCITY`] never fling.
pub fn fling_steps(velocity_px_per_ms: f32, strength: f32, stride: f32) -> i64 {
    if !velocity_px_per_ms.is_finite()
        || velocity_px_per_ms.abs() < drag::FLING_MIN_VELOCITY
        || stride <= 0.0
        || strength <= 0.0
    {
        return 0;
    }
    let projected = velocity_px_per_ms * drag::FLING_HORIZON_MS * strength;
    let steps = (projected / stride).round();
    // A qualifying fling always moves at least one slide.
    if steps == 0.0 {
        return velocity_px_per_ms.signum() as i64;
    }
    steps as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_release_does_not_fling() {
        assert_eq!(fling_steps(0.1, 1.0, 200.0), 0);
        assert_eq!(fling_steps(-0.1, 4.0, 200.0), 0);
    }

    #[test]
    fn fast_release_moves_at_least_one_slide() {
        assert_eq!(fling_steps(0.5, 1.0, 400.0), 1);
        assert_eq!(fling_steps(-0.5, 1.0, 400.0), -1);
    }

    #[test]
    fn strength_scales_projection() {
        // 2 px/ms * 180 ms = 360 px; 360 / 100 = 3.6 -> 4
        assert_eq!(fling_steps(2.0, 1.0, 100.0), 4);
        assert_eq!(fling_steps(2.0, 2.0, 100.0), 7);
    }

    #[test]
    fn degenerate_inputs_are_ignored() {
        assert_eq!(fling_steps(f32::NAN, 1.0, 100.0), 0);
        assert_eq!(fling_steps(3.0, 1.0, 0.0), 0);
        assert_eq!(fling_steps(3.0, 0.0, 100.0), 0);
    }
}
