//! Geometric measurements on 3D points.
//!
//! Pure functions over Cartesian coordinates. No validation is performed
//! here: non-finite components propagate into the result (NaN in, NaN out).

/// Euclidean distance between two points.
#[inline]
pub fn calculate_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Angle at vertex `b` formed by the points `a`-`b`-`c`, in radians.
///
/// Computed from the dot product of the `b→a` and `b→c` vectors; the
/// cosine is clamped to [-1, 1] so collinear geometries never produce NaN
/// from rounding.
pub fn calculate_angle(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    let ba = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    let bc = [c[0] - b[0], c[1] - b[1], c[2] - b[2]];

    let dot = ba[0] * bc[0] + ba[1] * bc[1] + ba[2] * bc[2];
    let norm_ba = (ba[0] * ba[0] + ba[1] * ba[1] + ba[2] * ba[2]).sqrt();
    let norm_bc = (bc[0] * bc[0] + bc[1] * bc[1] + bc[2] * bc[2]).sqrt();

    (dot / (norm_ba * norm_bc)).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn distance_along_axis() {
        assert!(approx_eq(
            calculate_distance([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            1.0,
            1e-12
        ));
    }

    #[test]
    fn distance_general() {
        let d = calculate_distance([1.0, 2.0, 3.0], [4.0, 6.0, 3.0]);
        assert!(approx_eq(d, 5.0, 1e-12));
    }

    #[test]
    fn distance_zero_for_coincident_points() {
        assert_eq!(calculate_distance([1.5, -2.0, 0.3], [1.5, -2.0, 0.3]), 0.0);
    }

    #[test]
    fn distance_propagates_nan() {
        let d = calculate_distance([f64::NAN, 0.0, 0.0], [0.0, 0.0, 0.0]);
        assert!(d.is_nan());
    }

    #[test]
    fn right_angle() {
        let theta = calculate_angle([1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(approx_eq(theta, FRAC_PI_2, 1e-12));
    }

    #[test]
    fn straight_angle_is_pi() {
        let theta = calculate_angle([-1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert!(approx_eq(theta, PI, 1e-12));
    }

    #[test]
    fn zero_angle_for_parallel_arms() {
        let theta = calculate_angle([1.0, 1.0, 0.0], [0.0, 0.0, 0.0], [2.0, 2.0, 0.0]);
        assert!(approx_eq(theta, 0.0, 1e-7));
    }
}
