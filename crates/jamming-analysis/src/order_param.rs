// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Order Parameter
// ─────────────────────────────────────────────────────────────────────
//! Windowed throughput order parameter of a cumulative packet history.
//!
//! Pipeline:
//!   1. Drop the first `steady` samples (transient)
//!   2. Difference at lag `time_window`, clamping negative deltas to 0
//!   3. Normalise by `time_window * packet`
//!   4. Mean and standard error (ddof = 1) of the rates

use serde::{Deserialize, Serialize};

use jamming_types::{AnalysisParams, JammingError, JammingResult};

use crate::stats;

/// Mean order parameter with its standard error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderParameter {
    pub mean: f64,
    /// Standard error of the mean.
    pub sem: f64,
    /// Number of windowed samples.
    pub samples: usize,
}

impl OrderParameter {
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.mean, self.sem)
    }
}

/// Clamped, normalised windowed rates of `raw` after the transient.
///
/// Returns `len - steady - time_window` rates.
pub fn windowed_rates<T>(
    raw: &[T],
    steady: usize,
    time_window: usize,
    packet: u32,
) -> JammingResult<Vec<f64>>
where
    T: Copy + Into<f64>,
{
    if time_window == 0 {
        return Err(JammingError::Config("time_window must be >= 1".to_string()));
    }
    if packet == 0 {
        return Err(JammingError::Config("packet must be >= 1".to_string()));
    }
    if raw.len() <= steady.saturating_add(time_window) {
        return Err(JammingError::InvalidWindow {
            len: raw.len(),
            steady,
            time_window,
        });
    }

    let norm = time_window as f64 * packet as f64;
    let mut clamped = 0usize;
    let rates: Vec<f64> = raw[steady..]
        .iter()
        .zip(&raw[steady + time_window..])
        .map(|(&before, &after)| {
            let (before, after): (f64, f64) = (before.into(), after.into());
            let delta = after - before;
            if delta < 0.0 {
                clamped += 1;
            }
            delta.max(0.0) / norm
        })
        .collect();

    if clamped > 0 {
        log::warn!(
            "windowed_rates: clamped {clamped} of {} negative deltas to 0",
            rates.len()
        );
    }
    Ok(rates)
}

/// Order parameter `(mean, sem)` of a cumulative history.
///
/// Uses `steady`, `time_window` and `packet` from `param`.
///
/// # Errors
/// - [`JammingError::InvalidWindow`] when `raw.len() <= steady + time_window`
/// - [`JammingError::DegenerateSample`] when exactly one rate remains
/// - [`JammingError::Config`] when `time_window` or `packet` is zero
pub fn history_to_op<T>(raw: &[T], param: &AnalysisParams) -> JammingResult<OrderParameter>
where
    T: Copy + Into<f64>,
{
    let rates = windowed_rates(raw, param.steady, param.time_window, param.packet)?;
    let sem = stats::standard_error(&rates).ok_or(JammingError::DegenerateSample)?;
    let mean = stats::mean(&rates);
    log::debug!(
        "history_to_op: {} samples, mean={mean:.6}, sem={sem:.6}",
        rates.len()
    );
    Ok(OrderParameter {
        mean,
        sem,
        samples: rates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(steady: usize, time_window: usize, packet: u32) -> AnalysisParams {
        AnalysisParams::default()
            .with_window(steady, time_window)
            .with_packet(packet)
    }

    #[test]
    fn test_linear_rates() {
        let raw = [0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 5.0, 8.0, 13.0, 18.0];
        let rates = windowed_rates(&raw, 3, 2, 1).unwrap();
        assert_eq!(rates, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        let op = history_to_op(&raw, &params(3, 2, 1)).unwrap();
        assert_eq!(op.samples, 5);
        assert!((op.mean - 3.0).abs() < 1e-12, "mean = {}", op.mean);
        assert!((op.sem - 0.5f64.sqrt()).abs() < 1e-12, "sem = {}", op.sem);
    }

    #[test]
    fn test_ramp_after_transient() {
        let raw = [0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
        let rates = windowed_rates(&raw, 3, 2, 1).unwrap();
        assert_eq!(rates, vec![1.0, 2.0, 2.0, 2.0, 2.0]);

        let (mean, sem) = history_to_op(&raw, &params(3, 2, 1)).unwrap().as_tuple();
        assert!((mean - 1.8).abs() < 1e-12, "mean = {mean}");
        assert!((sem - 0.2).abs() < 1e-12, "sem = {sem}");
    }

    #[test]
    fn test_packet_normalisation() {
        let raw: Vec<u32> = (0..20).map(|t| 4 * t).collect();
        let op = history_to_op(&raw, &params(5, 5, 2)).unwrap();
        assert!((op.mean - 2.0).abs() < 1e-12);
        assert_eq!(op.sem, 0.0);
    }

    #[test]
    fn test_all_zero_history() {
        let raw = [0.0f64; 50];
        let op = history_to_op(&raw, &params(10, 5, 3)).unwrap();
        assert_eq!(op.mean, 0.0);
        assert_eq!(op.sem, 0.0);
    }

    #[test]
    fn test_negative_deltas_clamped() {
        let raw = [5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
        let rates = windowed_rates(&raw, 0, 1, 1).unwrap();
        assert!(rates.iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_invalid_window() {
        let raw = [0.0; 5];
        assert_eq!(
            history_to_op(&raw, &params(3, 2, 1)),
            Err(JammingError::InvalidWindow {
                len: 5,
                steady: 3,
                time_window: 2
            })
        );
        assert!(matches!(
            history_to_op(&[0.0; 2], &params(3, 2, 1)),
            Err(JammingError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_degenerate_single_sample() {
        let raw = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(
            history_to_op(&raw, &params(3, 2, 1)),
            Err(JammingError::DegenerateSample)
        );
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let raw = [0.0; 10];
        assert!(matches!(
            history_to_op(&raw, &params(0, 0, 1)),
            Err(JammingError::Config(_))
        ));
        assert!(matches!(
            history_to_op(&raw, &params(0, 1, 0)),
            Err(JammingError::Config(_))
        ));
    }

    #[test]
    fn test_saturating_window_bounds() {
        let raw = [0.0; 4];
        assert!(matches!(
            windowed_rates(&raw, usize::MAX, 1, 1),
            Err(JammingError::InvalidWindow { .. })
        ));
    }
}
