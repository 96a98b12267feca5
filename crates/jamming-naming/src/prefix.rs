// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Result Prefixes
// ─────────────────────────────────────────────────────────────────────
//! Prefixes for analysed results.
//!
//! A prefix carries a `-{seed}` suffix unless the seed is
//! [`SEED_INDEPENDENT`], in which case it names results aggregated over
//! seeds. The dynamics prefixes key their suffix on `network_seed`, not on
//! `dynamics_seed`: result directories are grouped per network realisation.
//! The `_for_seed` variants take the seed explicitly, as the generator
//! names its output by its own engine seed.

use jamming_types::{AnalysisParams, SEED_INDEPENDENT};

use crate::names::fixed;

fn with_seed(prefix: String, seed: i64) -> String {
    if seed == SEED_INDEPENDENT {
        prefix
    } else {
        format!("{prefix}-{seed}")
    }
}

/// `N{size}L{links}G{exponent:.1}[-{network_seed}]`.
pub fn network_prefix(param: &AnalysisParams) -> String {
    let prefix = format!(
        "N{}L{}G{}",
        param.network_size,
        param.link_size,
        fixed(param.degree_exponent, 1)
    );
    with_seed(prefix, param.network_seed)
}

/// `S{strategy:.2}P{packet}I{max_iteration}[-{network_seed}]`.
pub fn dynamics_prefix(param: &AnalysisParams) -> String {
    dynamics_prefix_for_seed(param, param.network_seed)
}

/// `S{strategy:.2}I{max_iteration}[-{network_seed}]`.
pub fn dynamics_prefix_wo_packet(param: &AnalysisParams) -> String {
    dynamics_prefix_wo_packet_for_seed(param, param.network_seed)
}

/// `S{strategy:.2}P{packet}I{max_iteration}[-{seed}]`.
pub fn dynamics_prefix_for_seed(param: &AnalysisParams, seed: i64) -> String {
    let prefix = format!(
        "S{}P{}I{}",
        fixed(param.strategy, 2),
        param.packet,
        param.max_iteration
    );
    with_seed(prefix, seed)
}

/// `S{strategy:.2}I{max_iteration}[-{seed}]`.
pub fn dynamics_prefix_wo_packet_for_seed(param: &AnalysisParams, seed: i64) -> String {
    let prefix = format!("S{}I{}", fixed(param.strategy, 2), param.max_iteration);
    with_seed(prefix, seed)
}
