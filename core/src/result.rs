use std::fmt;

use num_bigint::BigInt;
use recovery_math::Point;
use serde::Serialize;

/// How a secret was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Exactly k points, interpolated once.
    Direct,
    /// Every k-subset voted.
    Exhaustive,
    /// Greedy elimination; not guaranteed to find the majority secret.
    Greedy,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStrategy::Direct => "direct",
            SearchStrategy::Exhaustive => "exhaustive",
            SearchStrategy::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

/// The recovered secret together with the points that disagree with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReconstructionResult {
    #[serde(with = "recovery_math::serde_utils::decimal")]
    pub secret: BigInt,
    /// Points off the winning polynomial, ascending by `x`.
    pub outliers: Vec<Point>,
    pub strategy: SearchStrategy,
    /// Subsets (or windows, for greedy search) that voted for `secret`.
    pub support: usize,
}

impl ReconstructionResult {
    pub fn direct(secret: BigInt) -> Self {
        Self {
            secret,
            outliers: Vec::new(),
            strategy: SearchStrategy::Direct,
            support: 1,
        }
    }

    /// No share was found inconsistent.
    pub fn is_clean(&self) -> bool {
        self.outliers.is_empty()
    }

    pub fn outlier_xs(&self) -> impl Iterator<Item = &BigInt> + '_ {
        self.outliers.iter().map(|p| &p.x)
    }
}

impl fmt::Display for ReconstructionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "secret {} ({})", self.secret, self.strategy)?;
        if !self.outliers.is_empty() {
            let outliers: Vec<String> =
                self.outliers.iter().map(Point::to_string).collect();
            write!(f, ", outliers {}", outliers.join(" "))?;
        }
        Ok(())
    }
}
