//! Synthetic Gesture Recordings
//!
//! Turns the ideal paths from [`crate::shapes`] into recordings that look
//! like real wrist motion. Three impairments are applied:
//!
//! 1. **Speed warp**: uneven progress along the path, so no two recordings
//!    share a time base
//! 2. **Tilt**: a per-recording wrist rotation out of the drawing plane
//! 3. **Noise**: additive Gaussian jitter on every axis
//!
//! The `Scribble` shape produces aimless smoothed wandering for training
//! rejection; it never maps to a real category label.
//!
//! ## Example
//!
//! ```rust
//! use airsign_sim::synth::{GestureSynthesizer, Shape, SynthConfig};
//!
//! let mut synth = GestureSynthesizer::with_seed(SynthConfig::default(), 42);
//! let dataset = synth.dataset(4, 2).unwrap();
//! assert_eq!(dataset.category_count(), 5);
//! assert_eq!(dataset.unrecognized().len(), 2);
//! ```

use airsign_core::fir_lowpass::FirLowpass;
use airsign_core::types::{Gesture, GestureResult, Label, Sample, GESTURE_LENGTH};
use airsign_core::GestureDataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::shapes;

/// Ideal path length before warping down to [`GESTURE_LENGTH`].
const DENSE_POINTS: usize = 4 * GESTURE_LENGTH;

/// Synthesis parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Standard deviation of additive per-axis noise.
    pub noise_std: f64,
    /// Maximum wrist tilt per recording, radians.
    pub tilt: f64,
    /// Maximum relative speed deviation while tracing the path.
    pub speed_jitter: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            noise_std: 0.05,
            tilt: 0.2,
            speed_jitter: 0.3,
        }
    }
}

impl SynthConfig {
    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_tilt(mut self, tilt: f64) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_speed_jitter(mut self, speed_jitter: f64) -> Self {
        self.speed_jitter = speed_jitter;
        self
    }

    /// Nearly ideal recordings, useful for tests.
    pub fn clean() -> Self {
        Self {
            noise_std: 0.01,
            tilt: 0.05,
            speed_jitter: 0.1,
        }
    }
}

/// Shapes the synthesizer can trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    CircleCw,
    CircleCcw,
    SquareCcw,
    TriangleCw,
    HeartCw,
    /// Aimless wandering; labeled [`Label::Unrecognized`].
    Scribble,
}

impl Shape {
    /// The label a recording of this shape carries.
    pub fn label(&self) -> Label {
        match self {
            Shape::CircleCw => Label::category("circle_cw"),
            Shape::CircleCcw => Label::category("circle_ccw"),
            Shape::SquareCcw => Label::category("square_ccw"),
            Shape::TriangleCw => Label::category("triangle_cw"),
            Shape::HeartCw => Label::category("heart_cw"),
            Shape::Scribble => Label::Unrecognized,
        }
    }

    /// The real categories, in the order datasets declare them.
    pub fn demo_shapes() -> [Shape; 5] {
        [
            Shape::CircleCcw,
            Shape::CircleCw,
            Shape::HeartCw,
            Shape::SquareCcw,
            Shape::TriangleCw,
        ]
    }

    fn ideal_path(&self) -> Vec<Sample> {
        match self {
            Shape::CircleCw => shapes::circle(DENSE_POINTS, true),
            Shape::CircleCcw => shapes::circle(DENSE_POINTS, false),
            Shape::SquareCcw => shapes::square(DENSE_POINTS, false),
            Shape::TriangleCw => shapes::triangle(DENSE_POINTS, true),
            Shape::HeartCw => shapes::heart(DENSE_POINTS, true),
            Shape::Scribble => Vec::new(),
        }
    }
}

/// Seeded generator of synthetic gesture recordings.
#[derive(Debug)]
pub struct GestureSynthesizer {
    config: SynthConfig,
    rng: StdRng,
}

impl GestureSynthesizer {
    /// Create a synthesizer with an entropy seed.
    pub fn new(config: SynthConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible synthesizer.
    pub fn with_seed(config: SynthConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Synthesize one recording of the given shape.
    pub fn gesture(&mut self, shape: Shape) -> Gesture {
        let samples = match shape {
            Shape::Scribble => self.scribble(),
            _ => self.trace_shape(shape),
        };
        Gesture::from_samples(samples).unwrap()
    }

    fn trace_shape(&mut self, shape: Shape) -> Vec<Sample> {
        let path = shape.ideal_path();
        let positions = self.warped_positions(path.len());
        let traced = shapes::sample_path(&path, &positions);

        let (tilt_x, tilt_y) = self.draw_tilt();
        let noise = Normal::new(0.0, self.config.noise_std).unwrap();
        traced
            .into_iter()
            .map(|point| {
                let tilted = tilt(point, tilt_x, tilt_y);
                Sample::new(
                    tilted.x + noise.sample(&mut self.rng),
                    tilted.y + noise.sample(&mut self.rng),
                    tilted.z + noise.sample(&mut self.rng),
                )
            })
            .collect()
    }

    /// Fractional path positions with uneven per-step progress, scaled back
    /// so the last sample lands on the path end.
    fn warped_positions(&mut self, path_len: usize) -> Vec<f64> {
        let jitter = self.config.speed_jitter;
        let mut positions = Vec::with_capacity(GESTURE_LENGTH);
        let mut total = 0.0;
        for _ in 0..GESTURE_LENGTH {
            positions.push(total);
            let step = 1.0 + self.rng.gen_range(-jitter..=jitter);
            total += step.max(0.1);
        }
        let span = positions[GESTURE_LENGTH - 1];
        let scale = (path_len - 1) as f64 / span;
        for p in positions.iter_mut() {
            *p *= scale;
        }
        positions
    }

    fn draw_tilt(&mut self) -> (f64, f64) {
        let tilt = self.config.tilt;
        (
            self.rng.gen_range(-tilt..=tilt),
            self.rng.gen_range(-tilt..=tilt),
        )
    }

    /// Smoothed aimless wandering, for the rejection bucket.
    fn scribble(&mut self) -> Vec<Sample> {
        let step = Normal::new(0.0, 0.2).unwrap();
        let mut position = Sample::default();
        let mut raw = Vec::with_capacity(GESTURE_LENGTH);
        for _ in 0..GESTURE_LENGTH {
            position.x += step.sample(&mut self.rng);
            position.y += step.sample(&mut self.rng);
            position.z += step.sample(&mut self.rng);
            raw.push(position);
        }
        FirLowpass::new(0.8).smooth(&raw)
    }

    /// Synthesize a labeled dataset: `per_shape` recordings of each demo
    /// shape plus `scribbles` junk recordings.
    pub fn dataset(&mut self, per_shape: usize, scribbles: usize) -> GestureResult<GestureDataset> {
        let labels = Shape::demo_shapes().iter().map(Shape::label).collect();
        let mut dataset = GestureDataset::new(labels);
        for shape in Shape::demo_shapes() {
            for _ in 0..per_shape {
                dataset.add_gesture(shape.label(), self.gesture(shape))?;
            }
        }
        for _ in 0..scribbles {
            dataset.add_gesture(Label::Unrecognized, self.gesture(Shape::Scribble))?;
        }
        Ok(dataset)
    }
}

/// Rotate a point out of the drawing plane by small angles about the x and
/// y axes.
fn tilt(point: Sample, about_x: f64, about_y: f64) -> Sample {
    // About x: y/z plane rotation.
    let (sin_x, cos_x) = about_x.sin_cos();
    let y1 = point.y * cos_x - point.z * sin_x;
    let z1 = point.y * sin_x + point.z * cos_x;

    // About y: x/z plane rotation.
    let (sin_y, cos_y) = about_y.sin_cos();
    let x2 = point.x * cos_y + z1 * sin_y;
    let z2 = -point.x * sin_y + z1 * cos_y;

    Sample::new(x2, y1, z2)
}
