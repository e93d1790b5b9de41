//! Reductions over finite readings shared by the daily and monthly summaries
//!
//! Readings are finite, but a plain running total of large readings can
//! still overflow. When it does, the values are reduced at a scale relative
//! to the largest magnitude instead.

/// Smallest and largest value; `None` for an empty slice
pub(crate) fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

fn magnitude(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
}

/// Total of the values
///
/// A total beyond the `f64` range saturates at `f64::MAX` (or its negation).
pub(crate) fn finite_sum(values: &[f64]) -> f64 {
    let total: f64 = values.iter().sum();
    if total.is_finite() {
        return total;
    }

    let scale = magnitude(values);
    let scaled: f64 = values.iter().map(|v| v / scale).sum();
    (scaled * scale).clamp(-f64::MAX, f64::MAX)
}

/// Arithmetic mean, kept within the values' own `[min, max]`
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    let (min, max) = bounds(values)?;
    let count = values.len() as f64;

    let total: f64 = values.iter().sum();
    let mean = if total.is_finite() {
        total / count
    } else {
        let scale = magnitude(values);
        values.iter().map(|v| v / scale).sum::<f64>() / count * scale
    };

    // Summation rounding can push the mean a hair outside [min, max]
    Some(mean.clamp(min, max))
}

/// Sample standard deviation (n - 1 denominator) about `mean`; 0 below two values
pub(crate) fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let denominator = (values.len() - 1) as f64;

    let squared: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    if squared.is_finite() {
        return (squared / denominator).sqrt();
    }

    let scale = magnitude(values);
    let scaled: f64 = values
        .iter()
        .map(|v| (v / scale - mean / scale).powi(2))
        .sum();
    (scaled / denominator).sqrt() * scale
}
