use num_bigint::BigInt;
use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("unsupported base {0}: must lie in 2..=36")]
        UnsupportedBase(u32),
        #[error("value is empty")]
        EmptyValue,
        #[error(
            "invalid digit {digit:?} at position {position} for base {base}"
        )]
        InvalidDigit {
            digit: char,
            position: usize,
            base: u32,
        },
    }
}

pub mod interpolation {
    use num_bigint::BigInt;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("duplicate x coordinate {0}")]
        DuplicateX(BigInt),
        #[error("insufficient points: need {required}, got {provided}")]
        InsufficientPoints { required: usize, provided: usize },
        #[error("too many points: need exactly {required}, got {provided}")]
        TooManyPoints { required: usize, provided: usize },
        #[error(
            "interpolation does not reduce to an integer: {numerator}/{denominator}"
        )]
        NonIntegerResult {
            numerator: BigInt,
            denominator: BigInt,
        },
    }
}

pub use interpolation::Error as InterpolationError;
pub use radix::Error as DecodeError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;

impl MathError {
    /// The fraction left over when an interpolation failed to divide exactly.
    pub fn non_integer_parts(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            MathError::Interpolation(InterpolationError::NonIntegerResult {
                numerator,
                denominator,
            }) => Some((numerator, denominator)),
            _ => None,
        }
    }
}
