//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `TrajError` as one
//! variant, so the data / input / unsupported split survives all the way up
//! to the converter.

use thiserror::Error;

/// The base error type for `traj-core` and the store crates.
#[derive(Debug, Error)]
pub enum TrajError {
    /// A structural invariant of the data model was violated.
    #[error("data error: {0}")]
    Data(String),

    /// Engine input was malformed.  Kept apart from `Data` so callers can
    /// report "your input file is bad" differently.
    #[error("input data error: {0}")]
    InputData(String),

    /// An identifier (plot type, engine, version, block type) is not supported.
    #[error("unsupported {what}: {name}")]
    Unsupported { what: &'static str, name: String },

    #[error("missing data: {0}")]
    MissingData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrajError {
    pub fn data(msg: impl Into<String>) -> Self {
        TrajError::Data(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        TrajError::InputData(msg.into())
    }

    pub fn unsupported(what: &'static str, name: impl ToString) -> Self {
        TrajError::Unsupported { what, name: name.to_string() }
    }
}

/// Shorthand result type for all `traj-*` crates.
pub type TrajResult<T> = Result<T, TrajError>;
