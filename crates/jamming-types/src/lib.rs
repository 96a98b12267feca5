// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Parameter Types
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Parameter sets, validation, and error hierarchy shared by the
//! naming and analysis crates of the jamming simulation study.

pub mod config;
pub mod critical;
pub mod error;

pub use config::{AnalysisParams, RunParams, SEED_INDEPENDENT};
pub use critical::near_critical_packets;
pub use error::{JammingError, JammingResult};
