//! Core data types for gesture classification
//!
//! Defines the 3-axis [`Sample`], the fixed-length [`Gesture`] recording, the
//! closed [`Label`] set with its distinguished unrecognized category, and the
//! crate-wide error type.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::types::{Gesture, Label, Sample, GESTURE_LENGTH};
//!
//! let samples: Vec<Sample> = (0..GESTURE_LENGTH)
//!     .map(|i| Sample::new(i as f64, 0.0, 0.0))
//!     .collect();
//! let gesture = Gesture::from_samples(samples).unwrap();
//! assert_eq!(gesture.samples().len(), GESTURE_LENGTH);
//!
//! let label = Label::from_prefix("junk");
//! assert!(label.is_unrecognized());
//! ```

use serde::{Deserialize, Serialize};

/// Number of samples in every gesture recording.
///
/// The DTW alignment table is hard-sized to this length, so gestures are
/// validated at construction rather than at alignment time.
pub const GESTURE_LENGTH: usize = 50;

/// Result type for gesture operations.
pub type GestureResult<T> = Result<T, GestureError>;

/// Errors reported by the gesture classification core.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GestureError {
    /// Gesture does not contain exactly [`GESTURE_LENGTH`] samples.
    #[error("Gesture length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Classification was requested against an empty reference pool.
    #[error("Reference set contains no gestures")]
    EmptyReferenceSet,

    /// Evaluation was requested on a dataset with no real categories.
    #[error("Dataset declares no categories")]
    EmptyDataset,

    /// A declared category holds no gestures.
    #[error("Category `{label}` holds no gestures")]
    EmptyCategory { label: String },

    /// A gesture was filed under a category the dataset does not declare.
    #[error("Category `{label}` is not declared in this dataset")]
    UnknownCategory { label: String },

    /// A category is too small to supply the requested number of references.
    #[error("Category `{label}` holds {available} gestures, split needs at least {required}")]
    SplitTooSmall {
        label: String,
        available: usize,
        required: usize,
    },

    /// Two confusion matrices cover different label sets.
    #[error("Confusion matrices cover different label sets")]
    MatrixLabelMismatch,
}

/// One instant of 3-axis sensor reading.
///
/// Values are used as given; no unit conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    /// Create a sample from its three axis readings.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another sample.
    pub fn dot(&self, other: &Sample) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl std::ops::Sub for Sample {
    type Output = Sample;

    fn sub(self, rhs: Sample) -> Sample {
        Sample::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// An ordered recording of exactly [`GESTURE_LENGTH`] samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    samples: Vec<Sample>,
}

impl Gesture {
    /// Build a gesture, validating the fixed length.
    pub fn from_samples(samples: Vec<Sample>) -> GestureResult<Self> {
        if samples.len() != GESTURE_LENGTH {
            return Err(GestureError::LengthMismatch {
                expected: GESTURE_LENGTH,
                actual: samples.len(),
            });
        }
        Ok(Self { samples })
    }

    /// Build from samples whose length is already known to be valid.
    pub(crate) fn from_samples_unchecked(samples: Vec<Sample>) -> Self {
        debug_assert_eq!(samples.len(), GESTURE_LENGTH);
        Self { samples }
    }

    /// The recorded samples, in order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Copy of this gesture smoothed by the low-pass filter.
    ///
    /// Convenience wrapper around [`crate::fir_lowpass::FirLowpass`]; the DTW
    /// aligner smooths internally, so this is mainly for inspection.
    pub fn smoothed(&self, coefficient: f64) -> Gesture {
        let filter = crate::fir_lowpass::FirLowpass::new(coefficient);
        Gesture::from_samples_unchecked(filter.smooth(&self.samples))
    }
}

/// A gesture category.
///
/// Real categories form a closed set declared by the caller; the
/// [`Label::Unrecognized`] variant is the rejection outcome and never names a
/// trained category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// A named real category, e.g. `circle_cw`.
    Category(String),
    /// Nothing matched closely enough, or the recording is known junk.
    Unrecognized,
}

impl Label {
    /// Create a real category label.
    pub fn category(name: impl Into<String>) -> Self {
        Label::Category(name.into())
    }

    /// Map a filename-style prefix to a label.
    ///
    /// The `junk` prefix names recordings that should never be matched and
    /// maps to [`Label::Unrecognized`]; everything else is a real category.
    pub fn from_prefix(prefix: &str) -> Self {
        if prefix == "junk" {
            Label::Unrecognized
        } else {
            Label::Category(prefix.to_string())
        }
    }

    /// True for the rejection label.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Label::Unrecognized)
    }

    /// The display name of this label.
    pub fn name(&self) -> &str {
        match self {
            Label::Category(name) => name,
            Label::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A gesture together with its true category.
#[derive(Debug, Clone)]
pub struct LabeledGesture {
    pub label: Label,
    pub gesture: Gesture,
}

impl LabeledGesture {
    pub fn new(label: Label, gesture: Gesture) -> Self {
        Self { label, gesture }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-6;

    fn ramp(n: usize) -> Vec<Sample> {
        (0..n).map(|i| Sample::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_sample_dot() {
        let a = Sample::new(1.0, 2.0, 3.0);
        let b = Sample::new(4.0, -5.0, 6.0);
        assert_relative_eq!(a.dot(&b), 4.0 - 10.0 + 18.0, epsilon = TOL);
    }

    #[test]
    fn test_sample_norm() {
        let s = Sample::new(3.0, 4.0, 0.0);
        assert_relative_eq!(s.norm(), 5.0, epsilon = TOL);
        assert_relative_eq!(Sample::default().norm(), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_sample_sub() {
        let d = Sample::new(5.0, 7.0, 9.0) - Sample::new(1.0, 2.0, 3.0);
        assert_relative_eq!(d.x, 4.0, epsilon = TOL);
        assert_relative_eq!(d.y, 5.0, epsilon = TOL);
        assert_relative_eq!(d.z, 6.0, epsilon = TOL);
    }

    #[test]
    fn test_gesture_valid_length() {
        let g = Gesture::from_samples(ramp(GESTURE_LENGTH));
        assert!(g.is_ok());
    }

    #[test]
    fn test_gesture_short_rejected() {
        match Gesture::from_samples(ramp(GESTURE_LENGTH - 1)) {
            Err(GestureError::LengthMismatch { expected, actual }) => {
                assert_eq!(expected, GESTURE_LENGTH);
                assert_eq!(actual, GESTURE_LENGTH - 1);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_gesture_long_rejected() {
        assert!(Gesture::from_samples(ramp(GESTURE_LENGTH + 3)).is_err());
    }

    #[test]
    fn test_label_from_prefix() {
        assert_eq!(
            Label::from_prefix("circle_cw"),
            Label::Category("circle_cw".to_string())
        );
        assert_eq!(Label::from_prefix("junk"), Label::Unrecognized);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::category("square_ccw").to_string(), "square_ccw");
        assert_eq!(Label::Unrecognized.to_string(), "unrecognized");
    }

    #[test]
    fn test_error_messages() {
        let err = GestureError::SplitTooSmall {
            label: "heart_cw".to_string(),
            available: 1,
            required: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("heart_cw"));
        assert!(msg.contains('1'));
        assert!(msg.contains('2'));
    }
}
