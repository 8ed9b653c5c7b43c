use recovery_math::{Point, Radix};
use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, Result};

/// One encoded sample of the secret-sharing polynomial.
///
/// `value` is the y coordinate written in `base`; `x` is the share index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShare", into = "RawShare")]
pub struct Share {
    x: u64,
    base: Radix,
    value: String,
}

#[derive(Clone, Serialize, Deserialize)]
struct RawShare {
    x: u64,
    base: u32,
    value: String,
}

impl Share {
    pub fn new(x: u64, base: u32, value: impl Into<String>) -> Result<Self> {
        if x == 0 {
            return Err(RecoveryError::InvalidShareIndex(x));
        }

        Ok(Share {
            x,
            base: Radix::new(base)?,
            value: value.into(),
        })
    }

    #[inline]
    pub fn x(&self) -> u64 {
        self.x
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.base.get()
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decode this share into an exact point.
    pub fn decode(&self) -> Result<Point> {
        let y = self.base.decode(&self.value).map_err(|err| {
            RecoveryError::ShareDecode {
                x: self.x,
                source: err.into(),
            }
        })?;
        Ok(Point::new(self.x, y))
    }
}

impl TryFrom<RawShare> for Share {
    type Error = RecoveryError;

    fn try_from(raw: RawShare) -> Result<Self> {
        Share::new(raw.x, raw.base, raw.value)
    }
}

impl From<Share> for RawShare {
    fn from(share: Share) -> Self {
        RawShare {
            x: share.x,
            base: share.base.get(),
            value: share.value,
        }
    }
}

/// A threshold instance: `n` shares of a degree `k - 1` polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTestCase", into = "RawTestCase")]
pub struct TestCase {
    n: usize,
    k: usize,
    shares: Vec<Share>,
}

#[derive(Clone, Serialize, Deserialize)]
struct RawTestCase {
    n: usize,
    k: usize,
    shares: Vec<Share>,
}

impl TestCase {
    pub fn new(n: usize, k: usize, shares: Vec<Share>) -> Result<Self> {
        if !validate_threshold_config(k, n) {
            return Err(RecoveryError::InvalidThreshold {
                threshold: k,
                total: n,
            });
        }
        if shares.len() != n {
            return Err(RecoveryError::ShareCountMismatch {
                declared: n,
                provided: shares.len(),
            });
        }

        Ok(TestCase { n, k, shares })
    }

    /// Total number of shares supplied.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Minimum number of shares needed to reconstruct.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Whether more shares are present than the threshold requires.
    #[inline]
    pub fn has_redundancy(&self) -> bool {
        self.n > self.k
    }
}

impl TryFrom<RawTestCase> for TestCase {
    type Error = RecoveryError;

    fn try_from(raw: RawTestCase) -> Result<Self> {
        TestCase::new(raw.n, raw.k, raw.shares)
    }
}

impl From<TestCase> for RawTestCase {
    fn from(case: TestCase) -> Self {
        RawTestCase {
            n: case.n,
            k: case.k,
            shares: case.shares,
        }
    }
}

/// `1 <= threshold <= total`.
#[inline]
pub const fn validate_threshold_config(threshold: usize, total: usize) -> bool {
    threshold >= 1 && threshold <= total
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use recovery_math::error::DecodeError;

    use super::*;

    fn sample_shares() -> Vec<Share> {
        vec![
            Share::new(1, 10, "4").unwrap(),
            Share::new(2, 2, "111").unwrap(),
            Share::new(3, 10, "12").unwrap(),
            Share::new(6, 4, "213").unwrap(),
        ]
    }

    #[test]
    fn shares_decode_to_points() {
        let points: Vec<Point> = sample_shares()
            .iter()
            .map(|s| s.decode().unwrap())
            .collect();
        let expected = [(1, 4), (2, 7), (3, 12), (6, 39)];
        for (point, (x, y)) in points.iter().zip(expected) {
            assert_eq!(point, &Point::new(x, y));
        }
    }

    #[test]
    fn zero_index_is_rejected() {
        assert!(matches!(
            Share::new(0, 10, "1"),
            Err(RecoveryError::InvalidShareIndex(0))
        ));
    }

    #[test]
    fn unsupported_base_is_rejected_at_construction() {
        let err = Share::new(1, 37, "1").unwrap_err();
        assert_eq!(err.decode(), Some(&DecodeError::UnsupportedBase(37)));
    }

    #[test]
    fn invalid_digit_names_the_share() {
        let share = Share::new(4, 10, "G").unwrap();
        let err = share.decode().unwrap_err();
        assert!(matches!(err, RecoveryError::ShareDecode { x: 4, .. }));
        assert!(matches!(
            err.decode(),
            Some(DecodeError::InvalidDigit { digit: 'G', .. })
        ));
    }

    #[test]
    fn test_case_validates_threshold() {
        let err = TestCase::new(4, 5, sample_shares()).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::InvalidThreshold {
                threshold: 5,
                total: 4
            }
        ));
        assert!(TestCase::new(4, 0, sample_shares()).is_err());
    }

    #[test]
    fn test_case_validates_share_count() {
        let err = TestCase::new(5, 3, sample_shares()).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::ShareCountMismatch {
                declared: 5,
                provided: 4
            }
        ));
    }

    #[test]
    fn serde_enforces_invariants() {
        let json = r#"{"n":1,"k":1,"shares":[{"x":0,"base":10,"value":"7"}]}"#;
        assert!(serde_json::from_str::<TestCase>(json).is_err());

        let json = r#"{"n":1,"k":1,"shares":[{"x":3,"base":10,"value":"7"}]}"#;
        let case: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.shares()[0].decode().unwrap().y, BigInt::from(7));
        assert_eq!(serde_json::to_string(&case).unwrap(), json);
    }
}
