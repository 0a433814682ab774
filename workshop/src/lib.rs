//! # AirSign Workshop
//!
//! Guided exercises for learning gesture classification with AirSign.
//!
//! ## Getting Started Track (exercises 01-04)
//!
//! Hands-on exercises covering the full decision pipeline:
//! - Low-pass smoothing of raw motion samples
//! - Dynamic time warping alignment and its scoring
//! - Classifier evaluation with confusion matrices
//! - Tuning the rejection threshold
//!
//! ## Running Exercises
//!
//! ```bash
//! # Run on synthetic recordings (no capture hardware needed)
//! cargo run -p airsign-workshop --example 03_evaluation_session
//!
//! # Run on a directory of recorded gesture files
//! cargo run -p airsign-workshop --example 03_evaluation_session -- ~/gestures
//! ```

pub use airsign_core;
pub use airsign_sim;
