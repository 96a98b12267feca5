// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Near-Critical Packet Table
// ─────────────────────────────────────────────────────────────────────
//! Calibrated packet loads around the jamming transition.
//!
//! Runs inside these ranges relax slowly, so the generator extends their
//! horizon. Only the N=10000, L=25000 network has been calibrated.

/// Calibrated network: (network_size, link_size).
const CALIBRATED_NETWORK: (u32, u64) = (10_000, 25_000);

/// (strategy, first packet, last packet), inclusive.
const NEAR_CRITICAL: [(f64, u32, u32); 3] = [
    (0.5, 70, 100),
    (0.85, 70, 120),
    (0.95, 65, 180),
];

const STRATEGY_TOL: f64 = 1e-9;

/// Near-critical packet loads for a network and routing strategy.
///
/// Returns an empty list for uncalibrated configurations.
pub fn near_critical_packets(network_size: u32, link_size: u64, strategy: f64) -> Vec<u32> {
    if (network_size, link_size) != CALIBRATED_NETWORK {
        return Vec::new();
    }
    NEAR_CRITICAL
        .iter()
        .find(|(s, _, _)| (s - strategy).abs() < STRATEGY_TOL)
        .map(|&(_, first, last)| (first..=last).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibrated_ranges() {
        let r = near_critical_packets(10_000, 25_000, 0.5);
        assert_eq!(r.first(), Some(&70));
        assert_eq!(r.last(), Some(&100));
        assert_eq!(r.len(), 31);

        let r = near_critical_packets(10_000, 25_000, 0.95);
        assert_eq!((r[0], r[r.len() - 1]), (65, 180));
    }

    #[test]
    fn test_uncalibrated_strategy_is_empty() {
        assert!(near_critical_packets(10_000, 25_000, 0.7).is_empty());
    }

    #[test]
    fn test_uncalibrated_network_is_empty() {
        assert!(near_critical_packets(10_000, 200_000, 0.85).is_empty());
    }
}
