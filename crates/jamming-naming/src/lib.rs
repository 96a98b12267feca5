// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Naming
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Canonical identifiers for jamming simulation runs.
//!
//! - names: seed-suffixed run names for raw generator output
//! - prefix: result prefixes that drop the suffix for seed-independent sets
//! - layout: data-directory paths built from both (no filesystem access)

pub mod layout;
pub mod names;
pub mod prefix;

pub use layout::DataLayout;
pub use names::{dynamics_name, network_name};
pub use prefix::{
    dynamics_prefix, dynamics_prefix_for_seed, dynamics_prefix_wo_packet,
    dynamics_prefix_wo_packet_for_seed, network_prefix,
};
