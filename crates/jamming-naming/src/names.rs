// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Run Names
// ─────────────────────────────────────────────────────────────────────
//! Names for raw generator output. The seed suffix is always present.

use jamming_types::RunParams;

/// Fixed-precision float. Non-finite values render as `nan`, `inf` and
/// `-inf`, so names built from unvalidated records stay lowercase.
pub(crate) fn fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// `N{size}L{links}G{exponent:.1}-{network_seed}`.
pub fn network_name(param: &RunParams) -> String {
    format!(
        "N{}L{}G{}-{}",
        param.network_size,
        param.link_size,
        fixed(param.degree_exponent, 1),
        param.network_seed
    )
}

/// `S{strategy:.2}P{new_packet}I{max_iteration}-{dynamics_seed}`.
pub fn dynamics_name(param: &RunParams) -> String {
    format!(
        "S{}P{}I{}-{}",
        fixed(param.strategy, 2),
        param.new_packet,
        param.max_iteration,
        param.dynamics_seed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_name_default() {
        assert_eq!(network_name(&RunParams::default()), "N10000L200000G2.2-0");
    }

    #[test]
    fn test_dynamics_name_default() {
        assert_eq!(dynamics_name(&RunParams::default()), "S1.00P8I200-0");
    }

    #[test]
    fn test_network_name_keeps_sentinel_seed() {
        let p = RunParams::default().with_network_seed(-1);
        assert_eq!(network_name(&p), "N10000L200000G2.2--1");
    }

    #[test]
    fn test_fixed_precision() {
        let p = RunParams {
            degree_exponent: 3.0,
            strategy: 0.5,
            ..Default::default()
        };
        assert_eq!(network_name(&p), "N10000L200000G3.0-0");
        assert_eq!(dynamics_name(&p), "S0.50P8I200-0");
    }

    #[test]
    fn test_non_finite_lowercase() {
        let p = RunParams {
            degree_exponent: f64::NAN,
            strategy: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(network_name(&p), "N10000L200000Gnan-0");
        assert_eq!(dynamics_name(&p), "SinfP8I200-0");
        assert_eq!(fixed(f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn test_names_are_deterministic() {
        let p = RunParams::default().with_dynamics_seed(42);
        assert_eq!(dynamics_name(&p), dynamics_name(&p.clone()));
        assert_eq!(dynamics_name(&p), "S1.00P8I200-42");
    }
}
