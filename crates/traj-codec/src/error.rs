//! Error types for traj-codec.

use thiserror::Error;
use traj_core::TrajError;

/// Errors raised while encoding, decoding or validating frame buffers.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Traj(#[from] TrajError),

    /// A record header or subpoint tail runs past the end of the buffer.
    #[error("frame buffer truncated: record at {offset} needs {needed} values, {available} left")]
    Truncated { offset: usize, needed: usize, available: usize },

    /// The subpoint count slot does not hold a non-negative integer.
    #[error("bad subpoint count {value} in record at {offset}")]
    BadSubpointCount { offset: usize, value: f64 },

    #[error("agent ID {id} at frame {frame} exceeds the 32-bit range")]
    IdOutOfRange { id: i64, frame: usize },

    #[error("duplicate agent ID {id} in frame {frame} at index {index}")]
    DuplicateId { id: i64, frame: usize, index: usize },
}

/// Alias for `Result<T, CodecError>`.
pub type CodecResult<T> = Result<T, CodecError>;
