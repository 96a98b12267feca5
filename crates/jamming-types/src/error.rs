// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for parameter loading and order-parameter extraction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JammingError {
    /// A parameter record was loaded without one of its required fields.
    #[error("incomplete parameter set: missing field `{field}`")]
    IncompleteParameter { field: String },

    /// The history is too short for the transient cut plus one window.
    #[error(
        "invalid window: history of length {len} does not exceed steady ({steady}) + time_window ({time_window})"
    )]
    InvalidWindow {
        len: usize,
        steady: usize,
        time_window: usize,
    },

    /// Exactly one windowed sample: the standard error is undefined.
    #[error("degenerate sample: a single windowed sample has no standard error")]
    DegenerateSample,

    /// Out-of-range or malformed configuration.
    #[error("config error: {0}")]
    Config(String),
}

pub type JammingResult<T> = Result<T, JammingError>;
