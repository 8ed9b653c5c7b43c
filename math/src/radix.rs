//! Positional decoding of share values written in bases 2 through 36.
//!
//! Digits `0`–`9` carry their face value and letters `A`–`Z` (either case)
//! carry 10–35. A character outside that alphabet, or one whose value is not
//! below the base, is rejected rather than read as zero.

use std::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::error::{DecodeError, Result};

/// Alphabet used when writing digits back out.
const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A validated numeric base in `Radix::MIN..=Radix::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub fn new(base: u32) -> Result<Self, DecodeError> {
        if !(Self::MIN..=Self::MAX).contains(&base) {
            return Err(DecodeError::UnsupportedBase(base));
        }
        Ok(Self(base))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Value of a single digit in this base, if it is one.
    #[inline]
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.0)
    }

    /// Parse `value` into an exact integer.
    pub fn decode(self, value: &str) -> Result<BigInt, DecodeError> {
        if value.is_empty() {
            return Err(DecodeError::EmptyValue);
        }

        let base = BigInt::from(self.0);
        let mut result = BigInt::zero();
        for (position, digit) in value.chars().enumerate() {
            let d = self.digit_value(digit).ok_or(DecodeError::InvalidDigit {
                digit,
                position,
                base: self.0,
            })?;
            result = result * &base + d;
        }

        Ok(result)
    }

    /// Write `value` in this base using upper-case digits.
    pub fn encode(self, value: &BigInt) -> String {
        if value.is_zero() {
            return "0".to_owned();
        }

        let digits = value.magnitude().to_radix_be(self.0);
        let mut out = String::with_capacity(digits.len() + 1);
        if value.sign() == Sign::Minus {
            out.push('-');
        }
        out.extend(digits.into_iter().map(|d| DIGITS[d as usize] as char));
        out
    }
}

impl TryFrom<u32> for Radix {
    type Error = DecodeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode `value` written in `base` into an exact integer.
///
/// ```
/// use recovery_math::radix::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode(2, "111").unwrap(), BigInt::from(7));
/// assert_eq!(decode(16, "ff").unwrap(), BigInt::from(255));
/// assert!(decode(10, "G").is_err());
/// ```
pub fn decode(base: u32, value: &str) -> Result<BigInt> {
    Ok(Radix::new(base)?.decode(value)?)
}

/// Encode `value` in `base`; the inverse of [`decode`] up to letter case and
/// leading zeros.
pub fn encode(base: u32, value: &BigInt) -> Result<String> {
    Ok(Radix::new(base)?.encode(value))
}
