//! Nearest-reference gesture classification with rejection
//!
//! An unknown gesture is scored against every labeled reference with the DTW
//! aligner; the lowest score wins. When even the best score exceeds the
//! rejection threshold the gesture is labeled [`Label::Unrecognized`] —
//! anything can be waved at the sensor, and most of it should match nothing.
//!
//! Ranking uses a stable ascending sort, so references that score identically
//! resolve to insertion order. Rejection is strict (`score > threshold`): an
//! exact match still classifies at a zero threshold.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::classifier::{ClassifierConfig, GestureClassifier, ReferenceSet};
//! use airsign_core::types::{Gesture, Label, Sample, GESTURE_LENGTH};
//!
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
//! references.push(Label::category("circle"), Gesture::from_samples(circle.clone()).unwrap());
//! references.push(Label::category("swipe"), Gesture::from_samples(swipe).unwrap());
//!
//! let mut classifier = GestureClassifier::new(ClassifierConfig::default());
//! classifier.train(references);
//!
//! let unknown = Gesture::from_samples(circle).unwrap();
//! let result = classifier.classify(&unknown).unwrap();
//! assert_eq!(result.label, Label::category("circle"));
//! ```

use serde::{Deserialize, Serialize};

use crate::dtw::{DtwAligner, DtwConfig};
use crate::types::{Gesture, GestureError, GestureResult, Label, LabeledGesture};

/// Classification parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Rejection threshold: a best score strictly above this yields
    /// [`Label::Unrecognized`].
    pub threshold: f64,
    /// Alignment parameters forwarded to the DTW aligner.
    pub dtw: DtwConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            dtw: DtwConfig::default(),
        }
    }
}

impl ClassifierConfig {
    /// Set the rejection threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Ordered pool of labeled reference gestures.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    entries: Vec<LabeledGesture>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LabeledGesture>) -> Self {
        Self { entries }
    }

    /// Append a reference; insertion order is the tie-break order.
    pub fn push(&mut self, label: Label, gesture: Gesture) {
        self.entries.push(LabeledGesture::new(label, gesture));
    }

    pub fn entries(&self) -> &[LabeledGesture] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One scored outcome.
#[derive(Debug, Clone)]
pub struct Classification {
    /// The winning label, or [`Label::Unrecognized`] after rejection.
    pub label: Label,
    /// The best (lowest) alignment score, reported even when rejected.
    pub score: f64,
}

/// Nearest-reference classifier.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: ClassifierConfig,
    aligner: DtwAligner,
    references: ReferenceSet,
}

impl GestureClassifier {
    /// Create a classifier with no references; call
    /// [`GestureClassifier::train`] before classifying.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            aligner: DtwAligner::new(config.dtw),
            references: ReferenceSet::new(),
        }
    }

    /// Create a classifier with an initial reference pool.
    pub fn with_references(config: ClassifierConfig, references: ReferenceSet) -> Self {
        let mut classifier = Self::new(config);
        classifier.references = references;
        classifier
    }

    /// Replace the reference pool.
    pub fn train(&mut self, references: ReferenceSet) {
        self.references = references;
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Score the gesture against every reference, ascending.
    ///
    /// Ties keep insertion order (stable sort). Errors on an empty pool.
    pub fn ranked(&mut self, gesture: &Gesture) -> GestureResult<Vec<Classification>> {
        if self.references.is_empty() {
            return Err(GestureError::EmptyReferenceSet);
        }
        let mut scored: Vec<Classification> = self
            .references
            .entries
            .iter()
            .map(|reference| Classification {
                label: reference.label.clone(),
                score: self.aligner.score(gesture, &reference.gesture),
            })
            .collect();
        scored.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(scored)
    }

    /// Classify the gesture against the trained references.
    pub fn classify(&mut self, gesture: &Gesture) -> GestureResult<Classification> {
        let mut ranked = self.ranked(gesture)?;
        let best = ranked.swap_remove(0);
        if best.score > self.config.threshold {
            Ok(Classification {
                label: Label::Unrecognized,
                score: best.score,
            })
        } else {
            Ok(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sample, GESTURE_LENGTH};
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-9;

    fn circle(phase: f64) -> Gesture {
        let samples = (0..GESTURE_LENGTH)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / GESTURE_LENGTH as f64 + phase;
                Sample::new(angle.cos(), angle.sin(), 0.0)
            })
            .collect();
        Gesture::from_samples(samples).unwrap()
    }

    fn swipe() -> Gesture {
        let samples = (0..GESTURE_LENGTH)
            .map(|i| Sample::new(0.1 * i as f64, 0.02 * i as f64, 0.0))
            .collect();
        Gesture::from_samples(samples).unwrap()
    }

    #[test]
    fn test_empty_references_error() {
        let mut classifier = GestureClassifier::new(ClassifierConfig::default());
        match classifier.classify(&circle(0.0)) {
            Err(GestureError::EmptyReferenceSet) => {}
            other => panic!("expected EmptyReferenceSet, got {:?}", other),
        }
    }

    #[test]
    fn test_sole_reference_wins_with_large_threshold() {
        let mut references = ReferenceSet::new();
        references.push(Label::category("circle_cw"), circle(0.0));
        let config = ClassifierConfig::default().with_threshold(1000.0);
        let mut classifier = GestureClassifier::with_references(config, references);

        // Even a completely different shape matches the sole reference.
        let result = classifier.classify(&swipe()).unwrap();
        assert_eq!(result.label, Label::category("circle_cw"));
    }

    #[test]
    fn test_zero_threshold_rejects_inexact() {
        let mut references = ReferenceSet::new();
        references.push(Label::category("circle_cw"), circle(0.0));
        let config = ClassifierConfig::default().with_threshold(0.0);
        let mut classifier = GestureClassifier::with_references(config, references);

        let result = classifier.classify(&circle(0.3)).unwrap();
        assert_eq!(result.label, Label::Unrecognized);
        assert!(result.score > 0.0);
    }

    #[test]
    fn test_zero_threshold_keeps_exact_match() {
        // Rejection is strict, so a self-match at score 0.0 still classifies.
        let mut references = ReferenceSet::new();
        references.push(Label::category("circle_cw"), circle(0.0));
        let config = ClassifierConfig::default().with_threshold(0.0);
        let mut classifier = GestureClassifier::with_references(config, references);

        let result = classifier.classify(&circle(0.0)).unwrap();
        assert_eq!(result.label, Label::category("circle_cw"));
        assert_relative_eq!(result.score, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_nearest_reference_wins() {
        let mut references = ReferenceSet::new();
        references.push(Label::category("circle_cw"), circle(0.0));
        references.push(Label::category("swipe_right"), swipe());
        let config = ClassifierConfig::default().with_threshold(1000.0);
        let mut classifier = GestureClassifier::with_references(config, references);

        let result = classifier.classify(&circle(0.05)).unwrap();
        assert_eq!(result.label, Label::category("circle_cw"));
    }

    #[test]
    fn test_tie_resolves_to_insertion_order() {
        // Two identical references under different labels: the first wins.
        let mut references = ReferenceSet::new();
        references.push(Label::category("first"), circle(0.0));
        references.push(Label::category("second"), circle(0.0));
        let config = ClassifierConfig::default().with_threshold(1000.0);
        let mut classifier = GestureClassifier::with_references(config, references);

        let result = classifier.classify(&circle(0.0)).unwrap();
        assert_eq!(result.label, Label::category("first"));
    }

    #[test]
    fn test_ranked_is_sorted_and_complete() {
        let mut references = ReferenceSet::new();
        references.push(Label::category("circle_cw"), circle(0.0));
        references.push(Label::category("circle_shifted"), circle(1.0));
        references.push(Label::category("swipe_right"), swipe());
        let mut classifier =
            GestureClassifier::with_references(ClassifierConfig::default(), references);

        let ranked = classifier.ranked(&circle(0.0)).unwrap();
        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
        assert_eq!(ranked[0].label, Label::category("circle_cw"));
    }

    #[test]
    fn test_rejection_reports_best_score() {
        let mut references = ReferenceSet::new();
        references.push(Label::category("circle_cw"), circle(0.0));
        let config = ClassifierConfig::default().with_threshold(0.0);
        let mut classifier = GestureClassifier::with_references(config, references.clone());

        let rejected = classifier.classify(&swipe()).unwrap();
        let mut permissive = GestureClassifier::with_references(
            ClassifierConfig::default().with_threshold(1000.0),
            references,
        );
        let accepted = permissive.classify(&swipe()).unwrap();
        assert_relative_eq!(rejected.score, accepted.score, epsilon = TOL);
    }

    #[test]
    fn test_train_replaces_pool() {
        let mut first = ReferenceSet::new();
        first.push(Label::category("circle_cw"), circle(0.0));
        let mut classifier = GestureClassifier::with_references(
            ClassifierConfig::default().with_threshold(1000.0),
            first,
        );

        let mut second = ReferenceSet::new();
        second.push(Label::category("swipe_right"), swipe());
        classifier.train(second);

        let result = classifier.classify(&circle(0.0)).unwrap();
        assert_eq!(result.label, Label::category("swipe_right"));
        assert_eq!(classifier.references().len(), 1);
    }

    #[test]
    fn test_default_threshold() {
        assert_relative_eq!(
            ClassifierConfig::default().threshold,
            0.25,
            epsilon = TOL
        );
    }
}
