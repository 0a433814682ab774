//! Parallel Trial Execution
//!
//! Parallel implementations of evaluation runs using Rayon. Enable with the
//! `parallel` feature flag.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! airsign-core = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! ## Performance Considerations
//!
//! Each trial trains and scores a full classifier, so trials parallelize
//! well once datasets reach a few dozen recordings. For tiny datasets the
//! sequential [`Evaluator`] is often faster.
//!
//! Trial `t` runs with seed `seed + t`, so a parallel run is reproducible
//! for a given seed but draws different shuffles than a sequential run with
//! the same seed.

use rayon::prelude::*;

use crate::confusion::ConfusionMatrix;
use crate::dataset::GestureDataset;
use crate::evaluation::{EvaluationConfig, Evaluator, SweepPoint, ThresholdSweep};
use crate::types::GestureResult;

/// Run every evaluation trial on its own Rayon task and merge the results.
pub fn evaluate_parallel(
    dataset: &GestureDataset,
    config: &EvaluationConfig,
    seed: u64,
) -> GestureResult<ConfusionMatrix> {
    if config.trials == 0 {
        return Evaluator::with_seed(*config, seed).run(dataset);
    }

    let single_trial = config.with_trials(1);
    let matrices = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            Evaluator::with_seed(single_trial, seed.wrapping_add(trial as u64)).run(dataset)
        })
        .collect::<GestureResult<Vec<_>>>()?;

    let mut combined = ConfusionMatrix::for_categories(&dataset.labels());
    for matrix in &matrices {
        combined.merge(matrix)?;
    }
    Ok(combined)
}

/// Evaluate every threshold in parallel.
///
/// All thresholds share the same trial seeds, so points differ only by the
/// rejection threshold.
pub fn sweep_threshold_parallel(
    dataset: &GestureDataset,
    config: &EvaluationConfig,
    thresholds: &[f64],
    seed: u64,
) -> GestureResult<ThresholdSweep> {
    let points = thresholds
        .par_iter()
        .map(|&threshold| {
            let mut point_config = *config;
            point_config.classifier.threshold = threshold;
            evaluate_parallel(dataset, &point_config, seed).map(|matrix| SweepPoint {
                threshold,
                accuracy: matrix.accuracy(),
            })
        })
        .collect::<GestureResult<Vec<_>>>()?;
    Ok(ThresholdSweep::from_points(points))
}
