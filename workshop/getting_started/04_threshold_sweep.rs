//! # Exercise 04: Threshold Sweep
//!
//! Learn to tune the rejection threshold against labeled recordings.
//!
//! ## Topics
//! - How the threshold trades rejection against recognition
//! - Sweeping accuracy across candidate thresholds
//! - Reading the accuracy curve
//! - Exporting sweep results as CSV
//!
//! ## Run
//! ```bash
//! cargo run -p airsign-workshop --example 04_threshold_sweep
//! ```

use airsign_core::evaluation::SweepPoint;
use airsign_core::prelude::*;
use airsign_sim::{GestureSynthesizer, SynthConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Threshold Sweep Workshop ===\n");

    let mut synth = GestureSynthesizer::with_seed(SynthConfig::default(), 21);
    let dataset = synth.dataset(8, 8)?;
    println!(
        "Synthesized {} recordings: {} categories plus {} junk.\n",
        dataset.total_gestures(),
        dataset.category_count(),
        dataset.unrecognized().len()
    );

    println!("A low threshold rejects everything, junk included. A high one");
    println!("accepts everything, junk included. Accuracy peaks in between.\n");

    let thresholds: Vec<f64> = (1..=30).map(|i| i as f64 * 0.02).collect();
    let config = EvaluationConfig::default().with_trials(8);
    let mut evaluator = Evaluator::with_seed(config, 3);
    let sweep = evaluator.sweep_threshold(&dataset, &thresholds)?;

    println!("Accuracy vs rejection threshold:\n");
    print_accuracy_curve(sweep.points());
    println!();

    if let Some(best) = sweep.best() {
        println!(
            "Best threshold: {:.2} (accuracy {:.4})\n",
            best.threshold, best.accuracy
        );

        println!("{:>10} {:>10}", "Threshold", "Accuracy");
        println!("{}", "-".repeat(21));
        let at = sweep
            .points()
            .iter()
            .position(|p| p.threshold == best.threshold)
            .unwrap_or(0);
        let from = at.saturating_sub(2);
        let to = (at + 3).min(sweep.points().len());
        for point in &sweep.points()[from..to] {
            let marker = if point.threshold == best.threshold {
                "  <-- best"
            } else {
                ""
            };
            println!("{:>10.2} {:>10.4}{}", point.threshold, point.accuracy, marker);
        }
        println!();
        println!("Ties resolve to the lowest threshold, the stricter choice.");
    }

    println!("\nCSV export for plotting:\n");
    print!("{}", sweep.to_csv());

    Ok(())
}

fn print_accuracy_curve(points: &[SweepPoint]) {
    let height = 11;
    for row in 0..height {
        if row == 0 {
            print!("1.00 |");
        } else if row == height / 2 {
            print!("0.50 |");
        } else if row == height - 1 {
            print!("0.00 |");
        } else {
            print!("     |");
        }

        for point in points {
            let curve_row = ((1.0 - point.accuracy) * (height - 1) as f64).round() as usize;
            print!("{}", if curve_row == row { '*' } else { ' ' });
        }
        println!();
    }
    println!("     +{}+", "-".repeat(points.len()));

    let mid = points[points.len() / 2].threshold;
    let last = points[points.len() - 1].threshold;
    println!(
        "      {:<14.2}{:<14.2}{:.2}",
        points[0].threshold, mid, last
    );
    println!("              rejection threshold");
}
