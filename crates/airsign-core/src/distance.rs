//! Pointwise dissimilarity between 3-axis samples
//!
//! The metric combines direction and magnitude: the Euclidean distance
//! between two samples is scaled by how well their directions agree,
//!
//! ```text
//! dir  = dot(a, b) / (|a| * |b| + ε)
//! d    = (1 - 0.5 * dir) * |a - b|
//! ```
//!
//! so samples pointing the same way cost roughly half as much as samples
//! pointing opposite ways at the same separation. `dir` is left unclamped;
//! the scale factor is nominally in [0.5, 1.5].

use crate::types::Sample;

/// Guard against a zero denominator for zero-magnitude samples.
pub const NORM_EPSILON: f64 = 1e-7;

/// Euclidean norm of a 3-axis reading.
pub fn magnitude(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

/// Cosine-like directional agreement between two samples.
///
/// Close to 1 for aligned samples, -1 for opposed ones. Near-zero vectors
/// push the result toward 0 via the ε guard instead of dividing by zero.
pub fn direction_similarity(a: &Sample, b: &Sample) -> f64 {
    a.dot(b) / (a.norm() * b.norm() + NORM_EPSILON)
}

/// Direction-scaled distance between two samples.
pub fn sample_distance(a: &Sample, b: &Sample) -> f64 {
    (1.0 - 0.5 * direction_similarity(a, b)) * (*a - *b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-6;

    #[test]
    fn test_magnitude() {
        assert_relative_eq!(magnitude(2.0, 3.0, 6.0), 7.0, epsilon = TOL);
        assert_relative_eq!(magnitude(0.0, 0.0, 0.0), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let samples = [
            Sample::new(1.0, 2.0, 3.0),
            Sample::new(-0.5, 0.25, 10.0),
            Sample::new(0.001, -0.002, 0.0),
        ];
        for s in &samples {
            assert_relative_eq!(sample_distance(s, s), 0.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_zero_samples_do_not_divide_by_zero() {
        let zero = Sample::default();
        let dir = direction_similarity(&zero, &zero);
        assert!(dir.is_finite());
        assert_relative_eq!(dir, 0.0, epsilon = TOL);
        assert_relative_eq!(sample_distance(&zero, &zero), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_aligned_samples_cost_half() {
        // Same direction, different magnitude: dir ≈ 1, factor ≈ 0.5.
        let a = Sample::new(2.0, 0.0, 0.0);
        let b = Sample::new(4.0, 0.0, 0.0);
        assert_relative_eq!(sample_distance(&a, &b), 0.5 * 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_opposed_samples_cost_more() {
        // Opposite directions: dir ≈ -1, factor ≈ 1.5, separation 2.
        let a = Sample::new(1.0, 0.0, 0.0);
        let b = Sample::new(-1.0, 0.0, 0.0);
        assert_relative_eq!(sample_distance(&a, &b), 1.5 * 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_orthogonal_samples_pure_magnitude() {
        let a = Sample::new(1.0, 0.0, 0.0);
        let b = Sample::new(0.0, 1.0, 0.0);
        assert_relative_eq!(
            sample_distance(&a, &b),
            std::f64::consts::SQRT_2,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_symmetry_within_tolerance() {
        // Not guaranteed bit-exact, only value-close.
        let a = Sample::new(0.3, -1.7, 2.2);
        let b = Sample::new(-0.9, 0.4, 1.1);
        assert_relative_eq!(sample_distance(&a, &b), sample_distance(&b, &a), epsilon = TOL);
    }
}
