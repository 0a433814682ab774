//! First-order FIR low-pass smoothing for 3-axis sequences
//!
//! Implements the smoothing stage applied to every gesture before alignment:
//!
//! ```text
//! y[0] = x[0]
//! y[n] = (1 - q) * x[n-1] + q * x[n]    for n >= 1
//! ```
//!
//! Each axis is filtered independently. The blend input is the previous *raw*
//! sample, not the previous output — a single-pole response applied with a
//! one-sample lag, which makes this a two-tap FIR rather than a textbook
//! exponential moving average. The recurrence is part of the scoring contract
//! and must not be "corrected" to feed back `y[n-1]`.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::fir_lowpass::FirLowpass;
//! use airsign_core::types::Sample;
//!
//! let filter = FirLowpass::new(0.95);
//! let raw = vec![
//!     Sample::new(0.0, 0.0, 0.0),
//!     Sample::new(1.0, 0.0, 0.0),
//!     Sample::new(1.0, 0.0, 0.0),
//! ];
//! let smoothed = filter.smooth(&raw);
//! assert_eq!(smoothed[0], raw[0]);
//! assert!((smoothed[1].x - 0.95).abs() < 1e-12);
//! assert!((smoothed[2].x - 1.0).abs() < 1e-12);
//! ```

use crate::types::Sample;

/// Default smoothing coefficient.
pub const DEFAULT_COEFFICIENT: f64 = 0.95;

/// Two-tap FIR low-pass filter over 3-axis samples.
///
/// The coefficient weights the current raw sample; `1 - coefficient` weights
/// the previous raw sample. High values track the input closely, low values
/// smooth harder.
#[derive(Debug, Clone, Copy)]
pub struct FirLowpass {
    coefficient: f64,
}

impl FirLowpass {
    /// Create a filter with the given coefficient, clamped to [0, 1].
    pub fn new(coefficient: f64) -> Self {
        Self {
            coefficient: coefficient.clamp(0.0, 1.0),
        }
    }

    /// The clamped smoothing coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Smooth a sequence, returning a sequence of equal length.
    ///
    /// The first sample passes through unchanged. Empty input yields empty
    /// output.
    pub fn smooth(&self, raw: &[Sample]) -> Vec<Sample> {
        let q = self.coefficient;
        let mut out = Vec::with_capacity(raw.len());
        if let Some(&first) = raw.first() {
            out.push(first);
        }
        for i in 1..raw.len() {
            out.push(Sample::new(
                (1.0 - q) * raw[i - 1].x + q * raw[i].x,
                (1.0 - q) * raw[i - 1].y + q * raw[i].y,
                (1.0 - q) * raw[i - 1].z + q * raw[i].z,
            ));
        }
        out
    }
}

impl Default for FirLowpass {
    fn default() -> Self {
        Self::new(DEFAULT_COEFFICIENT)
    }
}
