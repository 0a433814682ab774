//! # AirSign Gesture Classification Library
//!
//! This crate classifies short 3-axis accelerometer recordings against a
//! small set of labeled reference gestures, and measures how well that works
//! on a recorded dataset.
//!
//! ## Overview
//!
//! Recognition is template matching: no model is fitted, and adding a
//! category means recording a handful of reference gestures for it. The
//! pipeline is built from:
//!
//! - **Smoothing**: a two-tap low-pass filter applied per axis
//! - **Alignment**: dynamic time warping with a banded greedy backtrace
//! - **Classification**: nearest reference by mean warped-step distance,
//!   with a rejection threshold for gestures that match nothing
//! - **Evaluation**: repeated random reference/test splits accumulated into
//!   a confusion matrix
//!
//! ## Decision Flow
//!
//! ```text
//! Recording → Smooth → DTW score per reference → Rank → Threshold → Label
//! Dataset → Split per trial → Classify test pool → Confusion matrix → Accuracy
//! ```
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::prelude::*;
//!
//! // Two reference gestures under different labels
//! let circle: Vec<Sample> = (0..GESTURE_LENGTH)
//!     .map(|i| {
//!         let angle = std::f64::consts::TAU * i as f64 / GESTURE_LENGTH as f64;
//!         Sample::new(angle.cos(), angle.sin(), 0.0)
//!     })
//!     .collect();
//! let swipe: Vec<Sample> = (0..GESTURE_LENGTH)
//!     .map(|i| Sample::new(0.1 * i as f64, 0.0, 0.0))
//!     .collect();
//!
//! let mut references = ReferenceSet::new();
//! references.push(Label::category("circle_cw"), Gesture::from_samples(circle)?);
//! references.push(Label::category("swipe_right"), Gesture::from_samples(swipe.clone())?);
//!
//! // Classify an unknown recording
//! let mut classifier = GestureClassifier::new(ClassifierConfig::default());
//! classifier.train(references);
//! let decision = classifier.classify(&Gesture::from_samples(swipe)?)?;
//! assert_eq!(decision.label, Label::category("swipe_right"));
//! # Ok::<(), airsign_core::GestureError>(())
//! ```

pub mod classifier;
pub mod confusion;
pub mod confusion_display;
pub mod dataset;
pub mod distance;
pub mod dtw;
pub mod evaluation;
pub mod fir_lowpass;
pub mod logging;
pub mod types;

// Parallel trial execution (requires `parallel` feature)
#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export main types
pub use classifier::{Classification, ClassifierConfig, GestureClassifier, ReferenceSet};
pub use confusion::ConfusionMatrix;
pub use confusion_display::{colormap_grayscale, colormap_rocket, render_table};
pub use dataset::{load_dir, read_gesture_file, write_gesture_file, GestureDataset};
pub use dtw::{AlignmentTable, DtwAligner, DtwConfig, TraceStep};
pub use evaluation::{EvaluationConfig, Evaluator, SweepPoint, ThresholdSweep};
pub use fir_lowpass::FirLowpass;
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use types::{
    Gesture, GestureError, GestureResult, Label, LabeledGesture, Sample, GESTURE_LENGTH,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassifierConfig, GestureClassifier, ReferenceSet};
    pub use crate::confusion::ConfusionMatrix;
    pub use crate::dataset::GestureDataset;
    pub use crate::dtw::{DtwAligner, DtwConfig};
    pub use crate::evaluation::{EvaluationConfig, Evaluator};
    pub use crate::types::{Gesture, Label, Sample, GESTURE_LENGTH};
}
