//! # Exercise 02: Alignment Walkthrough
//!
//! Learn how dynamic time warping scores two gesture recordings.
//!
//! ## Topics
//! - Self-alignment and the zero score
//! - Why timing differences barely move the score
//! - Reading the cumulative-cost table and its backtrace
//! - How the backtrace window bounds skew
//!
//! ## Run
//! ```bash
//! cargo run -p airsign-workshop --example 02_alignment_walkthrough
//! ```

use airsign_core::dtw::{choose_step, TraceStep};
use airsign_core::prelude::*;
use airsign_sim::{GestureSynthesizer, Shape, SynthConfig};

fn main() {
    println!("=== Alignment Walkthrough Workshop ===\n");

    println!("== Part 1: Self-Alignment ==\n");
    demonstrate_self_alignment();

    println!("\n== Part 2: Timing vs Shape ==\n");
    demonstrate_timing_tolerance();

    println!("\n== Part 3: The Cost Table ==\n");
    demonstrate_cost_table();

    println!("\n== Part 4: The Backtrace Window ==\n");
    demonstrate_window();

    println!("\n=== Workshop Complete ===");
}

fn clean_synth(seed: u64) -> GestureSynthesizer {
    let config = SynthConfig::default()
        .with_noise_std(0.0)
        .with_tilt(0.0)
        .with_speed_jitter(0.0);
    GestureSynthesizer::with_seed(config, seed)
}

fn warped_synth(jitter: f64, seed: u64) -> GestureSynthesizer {
    let config = SynthConfig::default()
        .with_noise_std(0.0)
        .with_tilt(0.0)
        .with_speed_jitter(jitter);
    GestureSynthesizer::with_seed(config, seed)
}

fn demonstrate_self_alignment() {
    let mut synth = clean_synth(1);
    let circle = synth.gesture(Shape::CircleCcw);

    let mut aligner = DtwAligner::new(DtwConfig::default());
    let score = aligner.score(&circle, &circle);
    let path_len = aligner.backtrace_costs().len();

    println!("Score of a recording against itself: {:.6}", score);
    println!("Backtrace length: {} terms", path_len);
    println!();
    println!("Every sample pairs with itself, the backtrace runs straight");
    println!("down the diagonal, and the mean incremental cost is zero.");
}

fn demonstrate_timing_tolerance() {
    let mut synth = clean_synth(2);
    let reference = synth.gesture(Shape::CircleCcw);

    let mut aligner = DtwAligner::new(DtwConfig::default());

    println!("Circle reference scored against other recordings:\n");
    println!("{:<28} {:>10}", "Candidate", "Score");
    println!("{}", "-".repeat(39));

    let mild = warped_synth(0.2, 3).gesture(Shape::CircleCcw);
    let strong = warped_synth(0.5, 4).gesture(Shape::CircleCcw);
    let square = clean_synth(5).gesture(Shape::SquareCcw);
    let reversed = clean_synth(6).gesture(Shape::CircleCw);

    let candidates = [
        ("same circle", reference.clone()),
        ("mild speed warp", mild),
        ("strong speed warp", strong),
        ("square", square),
        ("circle, opposite direction", reversed),
    ];
    for (name, candidate) in &candidates {
        println!("{:<28} {:>10.4}", name, aligner.score(&reference, candidate));
    }

    println!();
    println!("Timing differences cost little because the warp path absorbs");
    println!("them. A different shape, or the same shape traced the other");
    println!("way, cannot be aligned away and scores far higher.");
}

fn demonstrate_cost_table() {
    let mut synth = clean_synth(7);
    let reference = synth.gesture(Shape::CircleCcw);
    let warped = warped_synth(0.4, 8).gesture(Shape::CircleCcw);

    let mut aligner = DtwAligner::new(DtwConfig::default());
    let score = aligner.score(&reference, &warped);

    println!("Cumulative cost table (rows = reference, cols = candidate),");
    println!("darker = more accumulated cost, * = backtrace path:\n");
    render_cost_table(&aligner);

    println!();
    println!("Score (mean incremental cost along *): {:.4}", score);
    println!("The path hugs the diagonal but bends wherever the candidate");
    println!("ran fast or slow relative to the reference.");
}

fn demonstrate_window() {
    let reference = clean_synth(9).gesture(Shape::CircleCcw);
    let warped = warped_synth(0.5, 10).gesture(Shape::CircleCcw);

    println!("Strongly warped circle scored under shrinking windows:\n");
    println!("{:>8} {:>10} {:>12}", "Window", "Score", "Path terms");
    println!("{}", "-".repeat(32));

    for &window in &[GESTURE_LENGTH, 10, 3, 1] {
        let mut aligner = DtwAligner::new(DtwConfig::default().with_window(window));
        let score = aligner.score(&reference, &warped);
        let terms = aligner.backtrace_costs().len();
        println!("{:>8} {:>10.4} {:>12}", window, score, terms);
    }

    println!();
    println!("The window bounds how far the backtrace may drift from the");
    println!("diagonal. The default never excludes a move; tight windows");
    println!("force near-diagonal paths even when the timing disagrees.");
}

/// Down-sampled ASCII rendering of the aligner's cost table with the
/// backtrace path overlaid.
fn render_cost_table(aligner: &DtwAligner) {
    let table = aligner.table();
    let window = aligner.config().window;

    // Re-walk the backtrace to collect cell coordinates.
    let mut on_path = vec![false; GESTURE_LENGTH * GESTURE_LENGTH];
    let mut i = GESTURE_LENGTH - 1;
    let mut j = GESTURE_LENGTH - 1;
    on_path[i * GESTURE_LENGTH + j] = true;
    while i > 0 && j > 0 {
        match choose_step(
            table.at(i - 1, j),
            table.at(i, j - 1),
            table.at(i - 1, j - 1),
            i,
            j,
            window,
        ) {
            TraceStep::Up => i -= 1,
            TraceStep::Left => j -= 1,
            TraceStep::Diagonal => {
                i -= 1;
                j -= 1;
            }
        }
        on_path[i * GESTURE_LENGTH + j] = true;
    }
    while i > 0 {
        i -= 1;
        on_path[i * GESTURE_LENGTH + j] = true;
    }
    while j > 0 {
        j -= 1;
        on_path[i * GESTURE_LENGTH + j] = true;
    }

    let corner = table.at(GESTURE_LENGTH - 1, GESTURE_LENGTH - 1).max(1e-12);
    let shades = [' ', '.', ':', '-', '=', '+', '#'];
    for row in (0..GESTURE_LENGTH).step_by(2) {
        print!("  ");
        for col in (0..GESTURE_LENGTH).step_by(2) {
            let block_hit = on_path[row * GESTURE_LENGTH + col]
                || on_path[row * GESTURE_LENGTH + (col + 1)]
                || on_path[(row + 1) * GESTURE_LENGTH + col]
                || on_path[(row + 1) * GESTURE_LENGTH + (col + 1)];
            if block_hit {
                print!("*");
            } else {
                let level = (table.at(row, col) / corner).clamp(0.0, 1.0);
                let idx = (level * (shades.len() - 1) as f64).round() as usize;
                print!("{}", shades[idx]);
            }
        }
        println!();
    }
}
