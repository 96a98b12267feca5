// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Identification Banner
// ─────────────────────────────────────────────────────────────────────
//! Prints the kernel identification and the identifiers of the default
//! parameter sets. Performs no other action.

use jamming_naming::{dynamics_name, dynamics_prefix, network_name, network_prefix};
use jamming_types::{AnalysisParams, RunParams};

fn main() {
    env_logger::init();

    let run = RunParams::default();
    let analysis = AnalysisParams::default();
    log::debug!("default analysis parameters: {analysis:?}");

    println!(
        "jamming-kernel {}: naming helpers and order-parameter statistics",
        env!("CARGO_PKG_VERSION")
    );
    println!("run names:       {} / {}", network_name(&run), dynamics_name(&run));
    println!(
        "result prefixes: {} / {}",
        network_prefix(&analysis),
        dynamics_prefix(&analysis)
    );
    match serde_json::to_string_pretty(&analysis) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to encode default parameters: {e}"),
    }
}
