// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Order-Parameter Analysis
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Order-parameter extraction from cumulative packet histories.
//!
//! The order parameter is the windowed, load-normalised growth rate of
//! the total packet count after the transient:
//!
//!   op_i = max(0, raw[s + i + w] - raw[s + i]) / (w * p)
//!
//! reported as its mean and standard error of the mean.

pub mod order_param;
pub mod stats;
pub mod sweep;

pub use order_param::{history_to_op, windowed_rates, OrderParameter};
pub use sweep::{sweep, SweepPoint};
