//! Exact arithmetic for threshold secret recovery: mixed-radix decoding,
//! rational Lagrange interpolation and k-subset enumeration.

pub mod combinations;
pub mod error;
pub mod lagrange;
pub mod macros;
pub mod point;
pub mod prelude;
pub mod radix;
pub mod serde_utils;

pub use crate::{
    combinations::{binomial, Combinations},
    error::{MathError, Result},
    lagrange::{evaluate_at, interpolate, lies_on, Fraction},
    point::Point,
    radix::{decode, encode, Radix},
};
