//! Error types for traj-output.

use thiserror::Error;
use traj_codec::CodecError;
use traj_core::TrajError;

/// Errors that can occur when writing or reading `.simularium` files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Traj(#[from] TrajError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The binary layout is corrupt: wrong identifier, inconsistent block
    /// table, or a length that runs past the data.
    #[error("binary format error: {0}")]
    Format(String),

    /// One frame alone exceeds the byte budget of a binary file.
    #[error("frame {frame} needs a {needed}-byte file, over the {max_bytes}-byte limit")]
    FrameTooLarge { frame: usize, needed: u64, max_bytes: u64 },
}

impl OutputError {
    pub fn format(msg: impl Into<String>) -> Self {
        OutputError::Format(msg.into())
    }
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
