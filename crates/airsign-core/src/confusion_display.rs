//! # Confusion matrix rendering helpers
//!
//! Text and color rendering for evaluation results. [`render_table`] prints
//! the normalized matrix with rows as the true label, ready for a terminal;
//! the colormap functions map a normalized rate in `[0, 1]` to an (R, G, B)
//! triplet for heatmap-style output.
//!
//! ## Example
//!
//! ```rust
//! use airsign_core::confusion::ConfusionMatrix;
//! use airsign_core::confusion_display::render_table;
//! use airsign_core::types::Label;
//!
//! let circle = Label::category("circle_cw");
//! let mut matrix = ConfusionMatrix::for_categories(&[circle.clone()]);
//! matrix.record(&circle, &circle);
//! let table = render_table(&matrix);
//! assert!(table.contains("circle_cw"));
//! ```

use crate::confusion::ConfusionMatrix;

/// Render the normalized matrix as an aligned text table.
///
/// Rows are the true label, columns the classifier output, cells the
/// per-true-label rate with two decimals.
pub fn render_table(matrix: &ConfusionMatrix) -> String {
    let labels = matrix.labels();
    let grid = matrix.display_grid();

    let row_header = "true";
    let row_width = labels
        .iter()
        .map(|label| label.name().len())
        .max()
        .unwrap_or(0)
        .max(row_header.len());
    let column_widths: Vec<usize> = labels
        .iter()
        .map(|label| label.name().len().max(4))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("{:<width$}", row_header, width = row_width));
    for (label, w) in labels.iter().zip(&column_widths) {
        out.push_str(&format!("  {:>width$}", label.name(), width = w));
    }
    out.push('\n');

    for (label, row) in labels.iter().zip(&grid) {
        out.push_str(&format!("{:<width$}", label.name(), width = row_width));
        for (value, w) in row.iter().zip(&column_widths) {
            out.push_str(&format!("  {:>width$.2}", value, width = w));
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Colormaps
// ---------------------------------------------------------------------------

/// Rocket colormap, reversed: maps a normalized value in `[0, 1]` to an
/// (R, G, B) triplet.
///
/// 0.0 = cream, 0.5 = crimson, 1.0 = near-black, so high rates print dark.
/// Values outside `[0, 1]` are clamped.
pub fn colormap_rocket(value: f64) -> (u8, u8, u8) {
    const ANCHORS: [(f64, f64, f64); 5] = [
        (250.0, 234.0, 220.0),
        (246.0, 157.0, 120.0),
        (222.0, 74.0, 105.0),
        (115.0, 31.0, 87.0),
        (3.0, 5.0, 26.0),
    ];

    let v = value.clamp(0.0, 1.0);
    let scaled = v * (ANCHORS.len() - 1) as f64;
    let low = (scaled.floor() as usize).min(ANCHORS.len() - 2);
    let t = scaled - low as f64;
    let (r0, g0, b0) = ANCHORS[low];
    let (r1, g1, b1) = ANCHORS[low + 1];
    (
        (r0 + (r1 - r0) * t).round() as u8,
        (g0 + (g1 - g0) * t).round() as u8,
        (b0 + (b1 - b0) * t).round() as u8,
    )
}

/// Grayscale colormap: 0.0 = black, 1.0 = white, clamped.
pub fn colormap_grayscale(value: f64) -> (u8, u8, u8) {
    let v = value.clamp(0.0, 1.0);
    let level = (v * 255.0).round() as u8;
    (level, level, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    fn sample_matrix() -> ConfusionMatrix {
        let circle = Label::category("circle_cw");
        let square = Label::category("square_ccw");
        let mut matrix = ConfusionMatrix::for_categories(&[circle.clone(), square.clone()]);
        matrix.record(&circle, &circle);
        matrix.record(&circle, &circle);
        matrix.record(&circle, &circle);
        matrix.record(&square, &circle);
        matrix.record(&square, &square);
        matrix.record(&Label::Unrecognized, &square);
        matrix.record(&Label::Unrecognized, &Label::Unrecognized);
        matrix
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&sample_matrix());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("true"));
        assert!(lines[0].contains("circle_cw"));
        assert!(lines[0].contains("unrecognized"));
        assert!(lines[1].starts_with("circle_cw"));
        assert!(lines[1].contains("0.75"));
        assert!(lines[1].contains("0.25"));
    }

    #[test]
    fn test_table_rows_are_true_labels() {
        // The square row splits between the square and rejection columns.
        let table = render_table(&sample_matrix());
        let square_row = table
            .lines()
            .find(|line| line.starts_with("square_ccw"))
            .unwrap();
        let cells: Vec<&str> = square_row.split_whitespace().collect();
        assert_eq!(cells, vec!["square_ccw", "0.00", "0.50", "0.50"]);
    }

    #[test]
    fn test_rocket_endpoints() {
        assert_eq!(colormap_rocket(0.0), (250, 234, 220));
        assert_eq!(colormap_rocket(1.0), (3, 5, 26));
        assert_eq!(colormap_rocket(0.5), (222, 74, 105));
    }

    #[test]
    fn test_rocket_clamps() {
        assert_eq!(colormap_rocket(-1.0), colormap_rocket(0.0));
        assert_eq!(colormap_rocket(2.0), colormap_rocket(1.0));
    }

    #[test]
    fn test_rocket_darkens_with_value() {
        let (r_low, ..) = colormap_rocket(0.1);
        let (r_high, ..) = colormap_rocket(0.9);
        assert!(r_low > r_high);
    }

    #[test]
    fn test_grayscale_endpoints() {
        assert_eq!(colormap_grayscale(0.0), (0, 0, 0));
        assert_eq!(colormap_grayscale(1.0), (255, 255, 255));
        assert_eq!(colormap_grayscale(0.5), (128, 128, 128));
    }
}
