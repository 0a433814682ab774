//! # Confusion matrix accumulation
//!
//! Tallies classifier decisions against ground truth across evaluation
//! trials. Counts are stored with the classifier output as the row index and
//! the true label as the column index; [`ConfusionMatrix::display_grid`]
//! flips the grid so each row collects everything one true label was
//! classified as, which is the usual reading for tables and plots.
//!
//! Normalization divides each cell by the number of test presentations of
//! its true label, so every column of the stored grid sums to 1 for labels
//! that were tested at all. A label with no test presentations normalizes to
//! an all-zero column rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::confusion::ConfusionMatrix;
//! use airsign_core::types::Label;
//!
//! let circle = Label::category("circle_cw");
//! let mut matrix = ConfusionMatrix::for_categories(&[circle.clone()]);
//! matrix.record(&circle, &circle);
//! matrix.record(&Label::Unrecognized, &circle);
//! matrix.record(&Label::Unrecognized, &Label::Unrecognized);
//!
//! // Two circle presentations: one recognized, one rejected.
//! let grid = matrix.normalized();
//! assert_eq!(grid[0][0], 0.5);
//! assert_eq!(matrix.accuracy(), 2.0 / 3.0);
//! ```

use crate::types::{GestureError, GestureResult, Label};

/// Accumulated decision counts over one or more evaluation trials.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    labels: Vec<Label>,
    /// Row-major `[predicted][actual]`, flattened.
    counts: Vec<u64>,
    /// Test presentations per true label.
    totals: Vec<u64>,
}

impl ConfusionMatrix {
    /// Build an empty matrix over the given categories plus a final
    /// [`Label::Unrecognized`] bucket.
    pub fn for_categories(categories: &[Label]) -> Self {
        let mut labels: Vec<Label> = categories
            .iter()
            .filter(|label| !label.is_unrecognized())
            .cloned()
            .collect();
        labels.push(Label::Unrecognized);
        let n = labels.len();
        Self {
            labels,
            counts: vec![0; n * n],
            totals: vec![0; n],
        }
    }

    /// Labels covered by this matrix, categories first, rejection bucket
    /// last.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn index_of(&self, label: &Label) -> Option<usize> {
        self.labels.iter().position(|known| known == label)
    }

    /// Record one decision. Labels outside the matrix are ignored.
    pub fn record(&mut self, predicted: &Label, actual: &Label) {
        let n = self.labels.len();
        if let (Some(p), Some(a)) = (self.index_of(predicted), self.index_of(actual)) {
            self.counts[p * n + a] += 1;
            self.totals[a] += 1;
        }
    }

    /// Raw count for one cell; 0 for labels outside the matrix.
    pub fn count(&self, predicted: &Label, actual: &Label) -> u64 {
        let n = self.labels.len();
        match (self.index_of(predicted), self.index_of(actual)) {
            (Some(p), Some(a)) => self.counts[p * n + a],
            _ => 0,
        }
    }

    /// Test presentations of one true label.
    pub fn total_for(&self, label: &Label) -> u64 {
        self.index_of(label).map_or(0, |i| self.totals[i])
    }

    /// Total decisions recorded.
    pub fn decisions(&self) -> u64 {
        self.totals.iter().sum()
    }

    /// Fold another matrix into this one.
    ///
    /// Both matrices must cover the same labels in the same order.
    pub fn merge(&mut self, other: &Self) -> GestureResult<()> {
        if self.labels != other.labels {
            return Err(GestureError::MatrixLabelMismatch);
        }
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
        for (mine, theirs) in self.totals.iter_mut().zip(&other.totals) {
            *mine += theirs;
        }
        Ok(())
    }

    /// Per-true-label rates, `[predicted][actual]` like the raw counts.
    ///
    /// Columns of tested labels sum to 1; untested labels give all-zero
    /// columns.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        let n = self.labels.len();
        let mut grid = vec![vec![0.0; n]; n];
        for predicted in 0..n {
            for actual in 0..n {
                let total = self.totals[actual];
                if total > 0 {
                    grid[predicted][actual] =
                        self.counts[predicted * n + actual] as f64 / total as f64;
                }
            }
        }
        grid
    }

    /// Normalized rates with rows as the true label, for display.
    pub fn display_grid(&self) -> Vec<Vec<f64>> {
        let n = self.labels.len();
        let normalized = self.normalized();
        let mut grid = vec![vec![0.0; n]; n];
        for actual in 0..n {
            for predicted in 0..n {
                grid[actual][predicted] = normalized[predicted][actual];
            }
        }
        grid
    }

    /// Fraction of decisions whose output matched the true label.
    ///
    /// Correct rejections of unrecognized gestures count as correct.
    pub fn accuracy(&self) -> f64 {
        let decisions = self.decisions();
        if decisions == 0 {
            return 0.0;
        }
        let n = self.labels.len();
        let correct: u64 = (0..n).map(|i| self.counts[i * n + i]).sum();
        correct as f64 / decisions as f64
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let n = self.labels.len();
        let correct: u64 = (0..n).map(|i| self.counts[i * n + i]).sum();
        format!(
            "Accuracy: {:.4} ({} correct / {} decisions, {} labels)",
            self.accuracy(),
            correct,
            self.decisions(),
            n,
        )
    }

    /// Export the normalized grid to CSV, rows as the true label.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("true_label");
        for label in &self.labels {
            csv.push_str(&format!(",{}", label.name()));
        }
        csv.push('\n');
        let grid = self.display_grid();
        for (label, row) in self.labels.iter().zip(&grid) {
            csv.push_str(label.name());
            for value in row {
                csv.push_str(&format!(",{:.4}", value));
            }
            csv.push('\n');
        }
        csv
    }
}
