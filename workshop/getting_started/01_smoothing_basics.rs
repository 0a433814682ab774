//! # Exercise 01: Smoothing Basics
//!
//! Learn how raw motion samples are smoothed and compared pointwise.
//!
//! ## Topics
//! - The two-tap filter recurrence and its warm-up sample
//! - How the coefficient trades noise against lag
//! - The direction-weighted pointwise distance
//! - Where smoothing sits in the alignment pipeline
//!
//! ## Run
//! ```bash
//! cargo run -p airsign-workshop --example 01_smoothing_basics
//! ```

use airsign_core::distance::{direction_similarity, magnitude, sample_distance};
use airsign_core::fir_lowpass::{FirLowpass, DEFAULT_COEFFICIENT};
use airsign_core::prelude::*;
use airsign_sim::{GestureSynthesizer, Shape, SynthConfig};

fn main() {
    println!("=== Smoothing Basics Workshop ===\n");

    println!("== Part 1: The Filter Recurrence ==\n");
    demonstrate_recurrence();

    println!("\n== Part 2: Coefficient Trade-off ==\n");
    demonstrate_coefficients();

    println!("\n== Part 3: Pointwise Distance ==\n");
    demonstrate_distance();

    println!("\n== Part 4: Smoothing Inside the Aligner ==\n");
    demonstrate_aligner_smoothing();

    println!("\n=== Workshop Complete ===");
}

fn demonstrate_recurrence() {
    println!("y[0] = x[0]");
    println!("y[n] = (1 - q) * x[n-1] + q * x[n]\n");

    // Step input makes the two taps visible
    let filter = FirLowpass::new(0.8);
    let raw: Vec<Sample> = (0..8)
        .map(|i| Sample::new(if i < 4 { 0.0 } else { 1.0 }, 0.0, 0.0))
        .collect();
    let smoothed = filter.smooth(&raw);

    println!("Step input, q = {:.2}:", filter.coefficient());
    println!("{:>4} {:>8} {:>8}", "n", "x[n]", "y[n]");
    println!("{}", "-".repeat(22));
    for (i, (r, s)) in raw.iter().zip(smoothed.iter()).enumerate() {
        println!("{:>4} {:>8.2} {:>8.2}", i, r.x, s.x);
    }

    println!();
    println!("The step is split across exactly two outputs. The blend reads");
    println!("the previous raw sample rather than the previous output, so the");
    println!("filter settles after one sample instead of decaying.");
}

fn demonstrate_coefficients() {
    let config = SynthConfig::default()
        .with_noise_std(0.1)
        .with_tilt(0.0)
        .with_speed_jitter(0.0);
    let mut synth = GestureSynthesizer::with_seed(config, 7);
    let recording = synth.gesture(Shape::CircleCcw);

    println!("Noisy circle recording, roughness by coefficient:\n");
    println!("{:>6} {:>12}   {}", "q", "Roughness", "Note");
    println!("{}", "-".repeat(48));

    let coefficients = [1.0, DEFAULT_COEFFICIENT, 0.8, 0.5];
    for &q in &coefficients {
        let smoothed = FirLowpass::new(q).smooth(recording.samples());
        let note = if q == 1.0 {
            "passes raw samples through"
        } else if q == DEFAULT_COEFFICIENT {
            "aligner default"
        } else if q == 0.5 {
            "even blend, strongest smoothing"
        } else {
            ""
        };
        println!("{:>6.2} {:>12.4}   {}", q, roughness(&smoothed), note);
    }

    println!();
    println!("Roughness is the mean distance between consecutive samples.");
    println!("With only two taps the filter smooths hardest at q = 0.5;");
    println!("below that it turns back into a delayed passthrough.");
}

fn demonstrate_distance() {
    println!("distance(a, b) = (1 - 0.5 * dir) * |a - b|");
    println!("where dir is the normalized dot product of a and b.\n");

    let reference = Sample::new(1.0, 0.0, 0.0);
    let pairs = [
        ("same sample", reference),
        ("same direction, stronger", Sample::new(2.0, 0.0, 0.0)),
        ("orthogonal", Sample::new(0.0, 1.0, 0.0)),
        ("opposed", Sample::new(-1.0, 0.0, 0.0)),
    ];

    println!(
        "{:<26} {:>8} {:>8} {:>10}",
        "Pair", "|a-b|", "dir", "Distance"
    );
    println!("{}", "-".repeat(55));
    for (name, other) in &pairs {
        let gap = magnitude(
            reference.x - other.x,
            reference.y - other.y,
            reference.z - other.z,
        );
        println!(
            "{:<26} {:>8.3} {:>8.3} {:>10.3}",
            name,
            gap,
            direction_similarity(&reference, other),
            sample_distance(&reference, other)
        );
    }

    println!();
    println!("Samples pointing the same way cost half their separation;");
    println!("opposed samples cost one and a half times. Direction is a");
    println!("multiplier on magnitude, never a cost of its own.");
}

fn demonstrate_aligner_smoothing() {
    let clean_config = SynthConfig::default()
        .with_noise_std(0.0)
        .with_tilt(0.0)
        .with_speed_jitter(0.0);
    let mut clean_synth = GestureSynthesizer::with_seed(clean_config, 11);
    let reference = clean_synth.gesture(Shape::CircleCcw);

    let mut noisy_synth = GestureSynthesizer::with_seed(clean_config.with_noise_std(0.08), 12);
    let noisy = noisy_synth.gesture(Shape::CircleCcw);

    println!("Same circle, one clean and one noisy, scored with different");
    println!("smoothing coefficients in the aligner:\n");

    println!("{:>10} {:>10}", "Smoothing", "Score");
    println!("{}", "-".repeat(21));
    for &q in &[1.0, DEFAULT_COEFFICIENT, 0.8] {
        let mut aligner = DtwAligner::new(DtwConfig::default().with_smoothing(q));
        let score = aligner.score(&reference, &noisy);
        let label = if q == 1.0 {
            "off".to_string()
        } else {
            format!("{:.2}", q)
        };
        println!("{:>10} {:>10.4}", label, score);
    }

    println!();
    println!("Both gestures pass through the same filter before the cost");
    println!("table is filled, so stored references never need re-recording");
    println!("when the coefficient changes.");
}

/// Mean distance between consecutive samples.
fn roughness(samples: &[Sample]) -> f64 {
    let total: f64 = samples
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            let dz = pair[1].z - pair[0].z;
            (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .sum();
    total / (samples.len() - 1) as f64
}
