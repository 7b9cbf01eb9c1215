//! Parameter sampling for parametric curves.

use std::f64::consts::TAU;

/// Returns `n` evenly spaced values from `start` to `end`, both included.
///
/// `n == 1` yields `[start]`, `n == 0` yields an empty vector. The
/// direction of travel follows the arguments, so `start > end` samples
/// downwards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Returns `n` angles covering one full turn `[0, 2π)`, endpoint excluded.
///
/// Closed curves use this so the wrap-around segment from the last sample
/// back to the first has the same length as every other segment.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn full_turn(n: usize) -> Vec<f64> {
    let step = TAU / n.max(1) as f64;
    (0..n).map(|i| step * i as f64).collect()
}
