use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, Result};

/// Largest number of k-subsets the verifier will enumerate before falling
/// back to greedy elimination. C(20, 10) = 184 756 sits just above it.
pub const DEFAULT_EXHAUSTIVE_LIMIT: u64 = 100_000;

/// Tunables for [`ConsensusVerifier`](crate::consensus::ConsensusVerifier).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Upper bound on C(n, k) for exhaustive subset search.
    pub exhaustive_limit: u64,
}

impl VerifierConfig {
    pub const fn new(exhaustive_limit: u64) -> Self {
        Self { exhaustive_limit }
    }

    pub const fn with_exhaustive_limit(mut self, exhaustive_limit: u64) -> Self {
        self.exhaustive_limit = exhaustive_limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.exhaustive_limit == 0 {
            return Err(RecoveryError::InvalidConfig(
                "exhaustive_limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Whether every k-subset of n points fits under the limit.
    pub fn allows_exhaustive(&self, n: usize, k: usize) -> bool {
        recovery_math::binomial(n, k)
            .is_some_and(|count| count <= self.exhaustive_limit)
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EXHAUSTIVE_LIMIT)
    }
}
