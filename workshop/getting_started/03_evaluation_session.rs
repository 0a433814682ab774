//! # Exercise 03: Evaluation Session
//!
//! Learn to measure classifier accuracy with repeated shuffled splits.
//!
//! ## Topics
//! - Shuffle splits and reference selection
//! - Reading a confusion matrix
//! - Accumulating decisions over repeated trials
//! - Running against recorded gesture files
//!
//! ## Run
//! ```bash
//! # Synthetic recordings
//! cargo run -p airsign-workshop --example 03_evaluation_session
//!
//! # A directory of recorded gesture files
//! cargo run -p airsign-workshop --example 03_evaluation_session -- ~/gestures
//!
//! # With per-trial logging
//! RUST_LOG=debug cargo run -p airsign-workshop --example 03_evaluation_session
//! ```

use airsign_core::confusion_display::{colormap_rocket, render_table};
use airsign_core::dataset;
use airsign_core::prelude::*;
use airsign_sim::{GestureSynthesizer, SynthConfig};
use std::env;

/// Filename prefixes recognized when loading recorded gestures.
const PREFIXES: &[&str] = &[
    "circle_ccw",
    "circle_cw",
    "heart_cw",
    "square_ccw",
    "triangle_cw",
    "junk",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Evaluation Session Workshop ===\n");

    let dataset = match env::args().nth(1) {
        Some(dir) => {
            println!("Loading recordings from {}...", dir);
            dataset::load_dir(&dir, PREFIXES)?
        }
        None => {
            println!("No directory given, synthesizing recordings.");
            let mut synth = GestureSynthesizer::with_seed(SynthConfig::default(), 42);
            synth.dataset(8, 6)?
        }
    };
    println!(
        "{} categories, {} recordings ({} known junk)\n",
        dataset.category_count(),
        dataset.total_gestures(),
        dataset.unrecognized().len()
    );

    let config = EvaluationConfig::default()
        .with_samples_per_class(2)
        .with_trials(10);
    println!(
        "Evaluating: {} trials, {} reference(s) per category, threshold {:.2}",
        config.trials, config.samples_per_class, config.classifier.threshold
    );
    println!("Each trial re-shuffles every category, trains on the first");
    println!("{} recordings, and classifies the rest plus all junk.\n", config.samples_per_class);

    let matrix = Evaluator::with_seed(config, 7).run(&dataset)?;

    println!("Confusion matrix (rows = true category, columns = decision):\n");
    println!("{}", render_table(&matrix));

    println!("Heatmap of the same matrix:\n");
    print_heatmap(&matrix);

    println!("{}", matrix.summary());
    println!();
    println!("Off-diagonal cells in a row show where that category leaks.");
    println!("The unrecognized column collects rejections; for the junk row");
    println!("that column is the correct outcome.");

    Ok(())
}

/// ANSI true-color rendering of the row-normalized matrix.
fn print_heatmap(matrix: &ConfusionMatrix) {
    let grid = matrix.display_grid();
    for (label, row) in matrix.labels().iter().zip(grid.iter()) {
        print!("  {:<14.14}", label.name());
        for &value in row {
            let (r, g, b) = colormap_rocket(value);
            print!("\x1b[48;2;{};{};{}m  \x1b[0m", r, g, b);
        }
        println!();
    }
    println!();
}
