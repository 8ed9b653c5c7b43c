use recovery_math::error::{DecodeError, InterpolationError, MathError};
use thiserror::Error;

/// Result type specialized for recovery operations.
pub type Result<T, E = RecoveryError> = std::result::Result<T, E>;

/// Errors that can arise while reconstructing a secret from shares.
///
/// Corrupted shares are not errors: they are reported in
/// [`ReconstructionResult::outliers`](crate::result::ReconstructionResult).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(
        "Invalid threshold configuration: threshold {threshold} must be between 1 and share count {total}"
    )]
    InvalidThreshold { threshold: usize, total: usize },
    #[error("Share count mismatch: declared {declared}, provided {provided}")]
    ShareCountMismatch { declared: usize, provided: usize },
    #[error("Invalid share index: {0}")]
    InvalidShareIndex(u64),
    #[error("Share {x} could not be decoded: {source}")]
    ShareDecode {
        x: u64,
        #[source]
        source: MathError,
    },
    #[error("No subset of {subsets} interpolated to an integer secret")]
    NoConsensus { subsets: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("Malformed test case document: {0}")]
    Wire(String),
}

impl From<DecodeError> for RecoveryError {
    fn from(err: DecodeError) -> Self {
        RecoveryError::Math(err.into())
    }
}

impl From<InterpolationError> for RecoveryError {
    fn from(err: InterpolationError) -> Self {
        RecoveryError::Math(err.into())
    }
}

impl From<serde_json::Error> for RecoveryError {
    fn from(err: serde_json::Error) -> Self {
        RecoveryError::Wire(err.to_string())
    }
}

impl RecoveryError {
    /// The interpolation failure behind this error, if any.
    pub fn interpolation(&self) -> Option<&InterpolationError> {
        match self {
            RecoveryError::Math(MathError::Interpolation(err)) => Some(err),
            _ => None,
        }
    }

    /// The decoding failure behind this error, if any.
    pub fn decode(&self) -> Option<&DecodeError> {
        match self {
            RecoveryError::Math(MathError::Decode(err))
            | RecoveryError::ShareDecode {
                source: MathError::Decode(err),
                ..
            } => Some(err),
            _ => None,
        }
    }
}
