//! # AirSign Gesture Simulator
//!
//! Synthetic accelerometer-style gesture generation for exercising the
//! classifier without a sensor. Ideal shape paths come from
//! [`shapes`]; [`synth`] turns them into noisy, tilted, speed-warped
//! recordings and whole labeled datasets.
//!
//! ## Example
//!
//! ```rust
//! use airsign_sim::{GestureSynthesizer, Shape, SynthConfig};
//!
//! let mut synth = GestureSynthesizer::with_seed(SynthConfig::default(), 7);
//! let gesture = synth.gesture(Shape::CircleCw);
//! assert_eq!(gesture.samples().len(), airsign_core::GESTURE_LENGTH);
//! ```

pub mod shapes;
pub mod synth;

// Re-export main types
pub use synth::{GestureSynthesizer, Shape, SynthConfig};
