//! Scalar range mapping and rounding helpers

/// Map `value` from `[min, max]` to `[0, 1]`.
pub fn map01(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Map `value` from `[min, max]` to `[1, 0]`. The reverse of [`map01`].
pub fn map10(value: f32, min: f32, max: f32) -> f32 {
    1.0 - map01(value, min, max)
}

/// Map `value` from `[left_min, left_max]` to `[right_min, right_max]`.
pub fn map(value: f32, left_min: f32, left_max: f32, right_min: f32, right_max: f32) -> f32 {
    right_min + (value - left_min) * (right_max - right_min) / (left_max - left_min)
}

/// Round `value` to the nearest multiple of `step` (127 to nearest 5 is 125).
pub fn round_to_nearest(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

/// Snap `value` onto a grid of size `snap`.
///
/// Same as [`round_to_nearest`] except that halfway cases round to even,
/// which keeps repeated snapping of a dragged object stable.
pub fn snap_and_round(value: f32, snap: f32) -> f32 {
    snap * (value / snap).round_ties_even()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn map01_endpoints_and_midpoint() {
        assert!(approx(map01(10.0, 10.0, 20.0), 0.0));
        assert!(approx(map01(20.0, 10.0, 20.0), 1.0));
        assert!(approx(map01(15.0, 10.0, 20.0), 0.5));
    }

    #[test]
    fn map10_is_reverse_of_map01() {
        assert!(approx(map10(10.0, 10.0, 20.0), 1.0));
        assert!(approx(map10(17.5, 10.0, 20.0), 0.25));
    }

    #[test]
    fn map_between_ranges() {
        assert!(approx(map(5.0, 0.0, 10.0, 100.0, 200.0), 150.0));
        assert!(approx(map(0.0, -1.0, 1.0, 0.0, 1.0), 0.5));
        // inverted target range
        assert!(approx(map(2.5, 0.0, 10.0, 1.0, 0.0), 0.75));
    }

    #[test]
    fn round_to_nearest_step() {
        assert!(approx(round_to_nearest(127.0, 5.0), 125.0));
        assert!(approx(round_to_nearest(128.0, 5.0), 130.0));
        assert!(approx(round_to_nearest(0.26, 0.25), 0.25));
    }

    #[test]
    fn snap_and_round_to_grid() {
        assert!(approx(snap_and_round(1.4, 1.0), 1.0));
        assert!(approx(snap_and_round(22.0, 15.0), 15.0));
        assert!(approx(snap_and_round(23.0, 15.0), 30.0));
        assert!(approx(snap_and_round(2.5, 1.0), 2.0));
    }
}
