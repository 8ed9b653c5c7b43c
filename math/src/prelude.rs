pub use num_bigint::BigInt;

pub use crate::combinations::Combinations;
pub use crate::error::{DecodeError, InterpolationError, MathError};
pub use crate::lagrange::{evaluate_at, interpolate, lies_on, Fraction};
pub use crate::point::Point;
pub use crate::radix::Radix;
pub use crate::{pt, pts};
