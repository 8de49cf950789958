//! Error types for traj-convert.

use thiserror::Error;
use traj_codec::CodecError;
use traj_core::TrajError;
use traj_output::OutputError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Traj(#[from] TrajError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("converter configuration error: {0}")]
    Config(String),

    /// A progress observer asked for the conversion to stop.
    #[error("conversion cancelled: {0}")]
    Cancelled(String),
}

impl ConvertError {
    pub fn config(msg: impl Into<String>) -> Self {
        ConvertError::Config(msg.into())
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
