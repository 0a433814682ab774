//! Dynamic Time Warping alignment between fixed-length gestures
//!
//! Scores the dissimilarity of two gestures in three stages:
//!
//! 1. Both sequences are smoothed by [`FirLowpass`].
//! 2. A dense [`GESTURE_LENGTH`]² cumulative-cost table is filled with the
//!    standard DTW recurrence over [`sample_distance`] (the forward pass is
//!    unbanded; the border row and column accumulate along their single
//!    available direction).
//! 3. A greedy backtrace walks from the far corner to the origin, recording
//!    the *incremental* cost of each step — the difference between the
//!    current cell's cumulative value and the chosen predecessor's — plus the
//!    origin cell itself, and the score is the arithmetic mean of those
//!    terms.
//!
//! Averaging over the traced path normalizes for path length, so a gesture
//! drawn faster or slower than its reference still scores close to it. The
//! window band constrains only the backtrace direction choice; at the default
//! width of [`GESTURE_LENGTH`] the band can never exclude a move (the largest
//! possible row/column gap is `GESTURE_LENGTH - 1`), but it remains
//! configurable for tighter alignments.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::dtw::{DtwAligner, DtwConfig};
//! use airsign_core::types::{Gesture, Sample, GESTURE_LENGTH};
//!
//! let wave: Vec<Sample> = (0..GESTURE_LENGTH)
//!     .map(|i| {
//!         let t = i as f64 / GESTURE_LENGTH as f64;
//!         Sample::new((6.28 * t).cos(), (6.28 * t).sin(), 0.0)
//!     })
//!     .collect();
//! let gesture = Gesture::from_samples(wave).unwrap();
//!
//! let mut aligner = DtwAligner::new(DtwConfig::default());
//! let score = aligner.score(&gesture, &gesture);
//! assert!(score.abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::distance::sample_distance;
use crate::fir_lowpass::{FirLowpass, DEFAULT_COEFFICIENT};
use crate::types::{Gesture, GESTURE_LENGTH};

/// DTW alignment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DtwConfig {
    /// Backtrace band half-width: a move is allowed only while the row/column
    /// gap stays within this many cells. The default equals
    /// [`GESTURE_LENGTH`], which never excludes a move; smaller values bound
    /// how far the alignment may skew.
    pub window: usize,
    /// Smoothing coefficient fed to [`FirLowpass`].
    pub smoothing: f64,
}

impl Default for DtwConfig {
    fn default() -> Self {
        Self {
            window: GESTURE_LENGTH,
            smoothing: DEFAULT_COEFFICIENT,
        }
    }
}

impl DtwConfig {
    /// Set the backtrace window.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the smoothing coefficient.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// Dense cumulative-cost table, flat row-major storage.
///
/// Hard-sized to [`GESTURE_LENGTH`]² and reused across comparisons.
#[derive(Debug, Clone)]
pub struct AlignmentTable {
    cells: Vec<f64>,
}

impl AlignmentTable {
    pub fn new() -> Self {
        Self {
            cells: vec![0.0; GESTURE_LENGTH * GESTURE_LENGTH],
        }
    }

    /// Cumulative cost at (row, col).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * GESTURE_LENGTH + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * GESTURE_LENGTH + col] = value;
    }
}

impl Default for AlignmentTable {
    fn default() -> Self {
        Self::new()
    }
}

/// One backtrace move toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStep {
    /// To (row - 1, col).
    Up,
    /// To (row, col - 1).
    Left,
    /// To (row - 1, col - 1).
    Diagonal,
}

/// Choose the backtrace move out of cell (row, col).
///
/// `up`, `left` and `diagonal` are the cumulative costs of the three
/// predecessor cells. Up wins when it is ≤ both alternatives and the
/// column-minus-row gap fits the window; otherwise Left wins when it is
/// strictly below Diagonal and the row-minus-column gap fits the window;
/// otherwise Diagonal. Negative gaps always fit.
pub fn choose_step(
    up: f64,
    left: f64,
    diagonal: f64,
    row: usize,
    col: usize,
    window: usize,
) -> TraceStep {
    let col_gap = col as i64 - row as i64;
    let row_gap = row as i64 - col as i64;
    if up <= left && up <= diagonal && col_gap <= window as i64 {
        TraceStep::Up
    } else if left < diagonal && row_gap <= window as i64 {
        TraceStep::Left
    } else {
        TraceStep::Diagonal
    }
}

/// Stateful DTW aligner.
///
/// Owns its smoothing filter and alignment table; scoring mutates the table
/// in place, so the table from the most recent [`DtwAligner::score`] call
/// stays available for inspection.
#[derive(Debug, Clone)]
pub struct DtwAligner {
    config: DtwConfig,
    filter: FirLowpass,
    table: AlignmentTable,
}

impl DtwAligner {
    pub fn new(config: DtwConfig) -> Self {
        Self {
            config,
            filter: FirLowpass::new(config.smoothing),
            table: AlignmentTable::new(),
        }
    }

    pub fn config(&self) -> &DtwConfig {
        &self.config
    }

    /// The cumulative-cost table from the most recent score.
    pub fn table(&self) -> &AlignmentTable {
        &self.table
    }

    /// Score the alignment of two gestures.
    ///
    /// Smooths both inputs, fills the cumulative-cost table and reduces the
    /// backtrace to its mean incremental cost. Lower is more similar; a
    /// gesture scores 0 against itself.
    pub fn score(&mut self, a: &Gesture, b: &Gesture) -> f64 {
        self.fill_table(a, b);
        let costs = self.backtrace_costs();
        let total: f64 = costs.iter().sum();
        total / costs.len() as f64
    }

    fn fill_table(&mut self, a: &Gesture, b: &Gesture) {
        let a = self.filter.smooth(a.samples());
        let b = self.filter.smooth(b.samples());

        self.table.set(0, 0, sample_distance(&a[0], &b[0]));
        for i in 1..GESTURE_LENGTH {
            let down = sample_distance(&a[i], &b[0]) + self.table.at(i - 1, 0);
            self.table.set(i, 0, down);
            let right = sample_distance(&a[0], &b[i]) + self.table.at(0, i - 1);
            self.table.set(0, i, right);
        }
        for i in 1..GESTURE_LENGTH {
            for j in 1..GESTURE_LENGTH {
                let best = self
                    .table
                    .at(i - 1, j)
                    .min(self.table.at(i, j - 1))
                    .min(self.table.at(i - 1, j - 1));
                self.table.set(i, j, sample_distance(&a[i], &b[j]) + best);
            }
        }
    }

    /// Incremental costs along the backtrace of the most recent score.
    ///
    /// Walks from the far corner through [`choose_step`] decisions, then
    /// straight along whichever border it lands on, and finishes with the
    /// origin cell's own cumulative value. Between [`GESTURE_LENGTH`] and
    /// `2 * GESTURE_LENGTH - 1` terms depending on path shape.
    pub fn backtrace_costs(&self) -> Vec<f64> {
        let t = &self.table;
        let window = self.config.window;
        let mut costs = Vec::with_capacity(2 * GESTURE_LENGTH);
        let mut i = GESTURE_LENGTH - 1;
        let mut j = GESTURE_LENGTH - 1;

        while i > 0 && j > 0 {
            match choose_step(
                t.at(i - 1, j),
                t.at(i, j - 1),
                t.at(i - 1, j - 1),
                i,
                j,
                window,
            ) {
                TraceStep::Up => {
                    costs.push(t.at(i, j) - t.at(i - 1, j));
                    i -= 1;
                }
                TraceStep::Left => {
                    costs.push(t.at(i, j) - t.at(i, j - 1));
                    j -= 1;
                }
                TraceStep::Diagonal => {
                    costs.push(t.at(i, j) - t.at(i - 1, j - 1));
                    i -= 1;
                    j -= 1;
                }
            }
        }
        while i > 0 {
            costs.push(t.at(i, 0) - t.at(i - 1, 0));
            i -= 1;
        }
        while j > 0 {
            costs.push(t.at(0, j) - t.at(0, j - 1));
            j -= 1;
        }
        costs.push(t.at(0, 0));
        costs
    }
}
