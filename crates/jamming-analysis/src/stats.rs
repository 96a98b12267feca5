// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Sample Statistics
// ─────────────────────────────────────────────────────────────────────

/// Arithmetic mean. 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction (divisor n-1).
///
/// `None` for fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|&v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Standard error of the mean, `sample_std / sqrt(n)`.
pub fn standard_error(values: &[f64]) -> Option<f64> {
    sample_std(values).map(|s| s / (values.len() as f64).sqrt())
}
