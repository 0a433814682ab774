//! # Classifier evaluation by repeated random splits
//!
//! Monte Carlo cross-validation for the gesture classifier. Each trial
//! shuffles every real category independently, takes the first
//! `samples_per_class` recordings as references, and classifies the rest.
//! Known-junk recordings are never used as references; every trial presents
//! all of them for rejection. Decisions accumulate into one
//! [`ConfusionMatrix`] across all trials.
//!
//! Seeding the evaluator makes the whole run reproducible: the same seed,
//! dataset, and configuration always produce the same matrix.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::evaluation::{EvaluationConfig, Evaluator};
//! use airsign_core::dataset::GestureDataset;
//! use airsign_core::types::{Gesture, Label, Sample, GESTURE_LENGTH};
//!
//! let circle = Label::category("circle_cw");
//! let mut dataset = GestureDataset::new(vec![circle.clone()]);
//! for phase in [0.0, 0.03, 0.06] {
//!     let samples = (0..GESTURE_LENGTH)
//!         .map(|i| {
//!             let angle = std::f64::consts::TAU * i as f64 / GESTURE_LENGTH as f64 + phase;
//!             Sample::new(angle.cos(), angle.sin(), 0.0)
//!         })
//!         .collect();
//!     dataset.add_gesture(circle.clone(), Gesture::from_samples(samples)?)?;
//! }
//!
//! let config = EvaluationConfig::default().with_trials(2);
//! let matrix = Evaluator::with_seed(config, 7).run(&dataset)?;
//! assert_eq!(matrix.accuracy(), 1.0);
//! # Ok::<(), airsign_core::types::GestureError>(())
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{ClassifierConfig, GestureClassifier, ReferenceSet};
use crate::confusion::ConfusionMatrix;
use crate::dataset::GestureDataset;
use crate::types::{Gesture, GestureError, GestureResult, Label};

/// Evaluation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// References drawn from each real category per trial.
    pub samples_per_class: usize,
    /// Number of independent shuffle-and-classify trials.
    pub trials: usize,
    /// Classifier under evaluation.
    pub classifier: ClassifierConfig,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            samples_per_class: 1,
            trials: 25,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl EvaluationConfig {
    pub fn with_samples_per_class(mut self, samples_per_class: usize) -> Self {
        self.samples_per_class = samples_per_class;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }
}

/// Runs repeated random-split trials over a dataset.
#[derive(Debug)]
pub struct Evaluator {
    config: EvaluationConfig,
    rng: StdRng,
}

impl Evaluator {
    /// Create an evaluator with an entropy-seeded split sequence.
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible evaluator.
    pub fn with_seed(config: EvaluationConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an evaluator over a caller-supplied generator.
    pub fn with_rng(config: EvaluationConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Run all trials and accumulate one confusion matrix.
    ///
    /// A category holding exactly `samples_per_class` recordings is legal and
    /// simply contributes no test decisions; its column normalizes to zeros.
    pub fn run(&mut self, dataset: &GestureDataset) -> GestureResult<ConfusionMatrix> {
        let config = self.config;
        self.run_with(dataset, &config)
    }

    fn run_with(
        &mut self,
        dataset: &GestureDataset,
        config: &EvaluationConfig,
    ) -> GestureResult<ConfusionMatrix> {
        validate_split(dataset, config.samples_per_class)?;

        let mut matrix = ConfusionMatrix::for_categories(&dataset.labels());
        for trial in 0..config.trials {
            let (references, test_items) =
                self.split_dataset(dataset, config.samples_per_class);
            let decisions = test_items.len();
            let mut classifier =
                GestureClassifier::with_references(config.classifier, references);
            for (gesture, actual) in test_items {
                let result = classifier.classify(gesture)?;
                matrix.record(&result.label, &actual);
            }
            debug!(trial, decisions, "Evaluation trial complete");
        }
        Ok(matrix)
    }

    /// Shuffle each category and split it into references and test items.
    ///
    /// Junk recordings are appended to the test pool unshuffled; they are
    /// never trained on.
    fn split_dataset<'d>(
        &mut self,
        dataset: &'d GestureDataset,
        samples_per_class: usize,
    ) -> (ReferenceSet, Vec<(&'d Gesture, Label)>) {
        let mut references = ReferenceSet::new();
        let mut test_items = Vec::new();
        for (label, gestures) in dataset.categories() {
            let mut order: Vec<usize> = (0..gestures.len()).collect();
            order.shuffle(&mut self.rng);
            for (rank, &index) in order.iter().enumerate() {
                if rank < samples_per_class {
                    references.push(label.clone(), gestures[index].clone());
                } else {
                    test_items.push((&gestures[index], label.clone()));
                }
            }
        }
        for gesture in dataset.unrecognized() {
            test_items.push((gesture, Label::Unrecognized));
        }
        (references, test_items)
    }

    /// Evaluate once per threshold, reporting accuracy for each.
    ///
    /// All other parameters come from this evaluator's configuration.
    pub fn sweep_threshold(
        &mut self,
        dataset: &GestureDataset,
        thresholds: &[f64],
    ) -> GestureResult<ThresholdSweep> {
        let mut points = Vec::with_capacity(thresholds.len());
        for &threshold in thresholds {
            let mut config = self.config;
            config.classifier.threshold = threshold;
            let matrix = self.run_with(dataset, &config)?;
            points.push(SweepPoint {
                threshold,
                accuracy: matrix.accuracy(),
            });
        }
        Ok(ThresholdSweep { points })
    }
}

fn validate_split(dataset: &GestureDataset, samples_per_class: usize) -> GestureResult<()> {
    if dataset.category_count() == 0 {
        return Err(GestureError::EmptyDataset);
    }
    for (label, gestures) in dataset.categories() {
        if gestures.is_empty() {
            return Err(GestureError::EmptyCategory {
                label: label.name().to_string(),
            });
        }
        if gestures.len() < samples_per_class {
            return Err(GestureError::SplitTooSmall {
                label: label.name().to_string(),
                available: gestures.len(),
                required: samples_per_class,
            });
        }
    }
    Ok(())
}

/// Accuracy measured at one rejection threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub threshold: f64,
    pub accuracy: f64,
}

/// Accuracy across a range of rejection thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSweep {
    points: Vec<SweepPoint>,
}

impl ThresholdSweep {
    /// Assemble a sweep from precomputed points.
    pub fn from_points(points: Vec<SweepPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// The point with the highest accuracy; earliest wins on ties.
    pub fn best(&self) -> Option<SweepPoint> {
        let mut best: Option<SweepPoint> = None;
        for &point in &self.points {
            match best {
                Some(current) if point.accuracy <= current.accuracy => {}
                _ => best = Some(point),
            }
        }
        best
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("threshold,accuracy\n");
        for p in &self.points {
            csv.push_str(&format!("{:.4},{:.4}\n", p.threshold, p.accuracy));
        }
        csv
    }
}
