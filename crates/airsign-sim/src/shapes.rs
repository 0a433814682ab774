//! Ideal Gesture Shape Paths
//!
//! Parametric unit-scale paths for the gesture categories the classifier is
//! typically trained on. Each generator traces one closed loop in the x/y
//! plane with z held at 0; the synthesizer warps, tilts, and noises these
//! into realistic recordings.
//!
//! ## Example
//!
//! ```rust
//! use airsign_sim::shapes;
//!
//! let path = shapes::circle(200, false);
//! let trace = shapes::resample(&path, 50);
//! assert_eq!(trace.len(), 50);
//! ```

use airsign_core::types::Sample;

/// Points around a circle of radius 1 centered on the origin.
///
/// Starts at (1, 0); counter-clockwise unless `clockwise` is set.
pub fn circle(n: usize, clockwise: bool) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let mut angle = std::f64::consts::TAU * i as f64 / n as f64;
            if clockwise {
                angle = -angle;
            }
            Sample::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect()
}

/// One walk around an axis-aligned square, corners at (±0.7, ±0.7).
pub fn square(n: usize, clockwise: bool) -> Vec<Sample> {
    let corners = [(0.7, 0.7), (-0.7, 0.7), (-0.7, -0.7), (0.7, -0.7)];
    polygon(&corners, n, clockwise)
}

/// One walk around an equilateral triangle, apex up, circumradius 1.
pub fn triangle(n: usize, clockwise: bool) -> Vec<Sample> {
    let h = 3.0_f64.sqrt() / 2.0;
    let corners = [(0.0, 1.0), (-h, -0.5), (h, -0.5)];
    polygon(&corners, n, clockwise)
}

/// One loop of the classic heart curve, scaled to roughly unit extent.
pub fn heart(n: usize, clockwise: bool) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let mut t = std::f64::consts::TAU * i as f64 / n as f64;
            if clockwise {
                t = -t;
            }
            let x = 16.0 * t.sin().powi(3) / 17.0;
            let y = (13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos())
                / 17.0;
            Sample::new(x, y, 0.0)
        })
        .collect()
}

/// Walk a corner list at constant speed, one full lap over `n` points.
///
/// Clockwise paths mirror the y axis, which reverses the winding.
fn polygon(corners: &[(f64, f64)], n: usize, clockwise: bool) -> Vec<Sample> {
    let k = corners.len();
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * k as f64;
            let seg = (t as usize).min(k - 1);
            let frac = t - seg as f64;
            let (x0, y0) = corners[seg];
            let (x1, y1) = corners[(seg + 1) % k];
            let x = x0 + (x1 - x0) * frac;
            let y = y0 + (y1 - y0) * frac;
            if clockwise {
                Sample::new(x, -y, 0.0)
            } else {
                Sample::new(x, y, 0.0)
            }
        })
        .collect()
}

/// Linearly interpolate `path` at fractional indices.
///
/// Positions are clamped to `[0, path.len() - 1]`; `path` must not be empty.
pub fn sample_path(path: &[Sample], positions: &[f64]) -> Vec<Sample> {
    debug_assert!(!path.is_empty());
    positions
        .iter()
        .map(|&p| {
            let clamped = p.clamp(0.0, (path.len() - 1) as f64);
            let low = clamped.floor() as usize;
            let high = (low + 1).min(path.len() - 1);
            let frac = clamped - low as f64;
            let a = path[low];
            let b = path[high];
            Sample::new(
                a.x + (b.x - a.x) * frac,
                a.y + (b.y - a.y) * frac,
                a.z + (b.z - a.z) * frac,
            )
        })
        .collect()
}

/// Resample `path` to `n` evenly spaced points, keeping both endpoints.
pub fn resample(path: &[Sample], n: usize) -> Vec<Sample> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![path[0]];
    }
    let positions: Vec<f64> = (0..n)
        .map(|j| (j * (path.len() - 1)) as f64 / (n - 1) as f64)
        .collect();
    sample_path(path, &positions)
}
