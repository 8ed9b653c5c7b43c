//! Lagrange interpolation over exact rationals.
//!
//! For points `(x_i, y_i)` the interpolating polynomial evaluated at `a` is
//!
//! `P(a) = Σ_i y_i · Π_{j≠i} (a − x_j) / (x_i − x_j)`
//!
//! Every term is folded into a single running fraction that is reduced by
//! its gcd after each addition, so no precision is lost regardless of the
//! magnitude of the inputs. Recovering a secret is the special case `a = 0`,
//! which must reduce to an integer.

use std::fmt;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{InterpolationError, Result};
use crate::point::Point;

/// An exact rational with a positive denominator, kept in lowest terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    /// Build `numer / denom` in lowest terms.
    ///
    /// Returns `None` when `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        let mut fraction = Self { numer, denom };
        fraction.normalize();
        Some(fraction)
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Whether this fraction is exactly the integer `value`.
    pub fn matches(&self, value: &BigInt) -> bool {
        self.is_integer() && &self.numer == value
    }

    /// The integer this fraction is equal to, or
    /// [`InterpolationError::NonIntegerResult`] if it has a remainder.
    pub fn into_integer(self) -> Result<BigInt, InterpolationError> {
        if !self.is_integer() {
            return Err(InterpolationError::NonIntegerResult {
                numerator: self.numer,
                denominator: self.denom,
            });
        }
        Ok(self.numer)
    }

    /// `self += numer / denom`, with `denom` non-zero.
    fn add_ratio(&mut self, numer: BigInt, denom: BigInt) {
        if denom == self.denom {
            self.numer += numer;
        } else {
            self.numer = &self.numer * &denom + numer * &self.denom;
            self.denom *= denom;
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        if self.denom.sign() == Sign::Minus {
            self.numer = -std::mem::take(&mut self.numer);
            self.denom = -std::mem::take(&mut self.denom);
        }
        let g = self.numer.gcd(&self.denom);
        if !g.is_one() && !g.is_zero() {
            self.numer /= &g;
            self.denom /= &g;
        }
        if self.numer.is_zero() {
            self.denom = BigInt::one();
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// Reject point sets in which two points share an `x` coordinate.
pub fn ensure_distinct_x(points: &[Point]) -> Result<(), InterpolationError> {
    let mut xs: Vec<&BigInt> = points.iter().map(|p| &p.x).collect();
    xs.sort_unstable();
    match xs.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(InterpolationError::DuplicateX(w[0].clone())),
        None => Ok(()),
    }
}

/// Evaluate the polynomial through `points` at `at`, exactly.
///
/// The degree of the polynomial is `points.len() - 1`.
pub fn evaluate_at(points: &[Point], at: &BigInt) -> Result<Fraction> {
    if points.is_empty() {
        return Err(InterpolationError::InsufficientPoints {
            required: 1,
            provided: 0,
        }
        .into());
    }
    ensure_distinct_x(points)?;

    let mut acc = Fraction::zero();
    for (i, pi) in points.iter().enumerate() {
        let mut numer = pi.y.clone();
        let mut denom = BigInt::one();
        for (j, pj) in points.iter().enumerate() {
            if i != j {
                numer *= at - &pj.x;
                denom *= &pi.x - &pj.x;
            }
        }
        acc.add_ratio(numer, denom);
    }

    Ok(acc)
}

/// Recover the constant term of the degree `k - 1` polynomial through
/// exactly `k` points.
///
/// ```
/// use recovery_math::prelude::*;
///
/// // y = x^2 + 3
/// let points = pts![(1, 4), (2, 7), (3, 12)];
/// assert_eq!(interpolate(&points, 3).unwrap(), BigInt::from(3));
/// ```
pub fn interpolate(points: &[Point], k: usize) -> Result<BigInt> {
    if points.len() < k {
        return Err(InterpolationError::InsufficientPoints {
            required: k,
            provided: points.len(),
        }
        .into());
    }
    if points.len() > k {
        return Err(InterpolationError::TooManyPoints {
            required: k,
            provided: points.len(),
        }
        .into());
    }

    Ok(evaluate_at(points, &BigInt::zero())?.into_integer()?)
}

/// Whether `candidate` lies on the polynomial through `points`.
pub fn lies_on(points: &[Point], candidate: &Point) -> Result<bool> {
    Ok(evaluate_at(points, &candidate.x)?.matches(&candidate.y))
}
