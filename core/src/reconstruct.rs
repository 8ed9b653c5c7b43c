use recovery_math::interpolate;
use tracing::debug;

use crate::consensus::ConsensusVerifier;
use crate::error::Result;
use crate::params::VerifierConfig;
use crate::points::PointSet;
use crate::result::ReconstructionResult;
use crate::share::TestCase;

/// Turns test cases into reconstruction results.
#[derive(Clone, Debug, Default)]
pub struct Reconstructor {
    verifier: ConsensusVerifier,
}

impl Reconstructor {
    pub fn new(config: VerifierConfig) -> Result<Self> {
        Ok(Self {
            verifier: ConsensusVerifier::new(config)?,
        })
    }

    /// Decode every share, then interpolate directly when `n == k` or vote
    /// across subsets when `n > k`.
    pub fn reconstruct(&self, case: &TestCase) -> Result<ReconstructionResult> {
        debug!(n = case.n(), k = case.k(), "reconstructing test case");
        let points = PointSet::from_shares(case.shares())?;

        if case.has_redundancy() {
            self.verifier.verify(&points, case.k())
        } else {
            let secret = interpolate(points.as_slice(), case.k())?;
            Ok(ReconstructionResult::direct(secret))
        }
    }

    /// Reconstruct each case independently; results keep input order.
    pub fn reconstruct_all(
        &self,
        cases: &[TestCase],
    ) -> Vec<Result<ReconstructionResult>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            cases.par_iter().map(|case| self.reconstruct(case)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            cases.iter().map(|case| self.reconstruct(case)).collect()
        }
    }
}

/// Reconstruct `case` with the default configuration.
pub fn reconstruct(case: &TestCase) -> Result<ReconstructionResult> {
    Reconstructor::default().reconstruct(case)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use recovery_math::Point;

    use super::*;
    use crate::error::RecoveryError;
    use crate::result::SearchStrategy;
    use crate::share::Share;

    fn first_sample() -> TestCase {
        TestCase::new(
            4,
            3,
            vec![
                Share::new(1, 10, "4").unwrap(),
                Share::new(2, 2, "111").unwrap(),
                Share::new(3, 10, "12").unwrap(),
                Share::new(6, 4, "213").unwrap(),
            ],
        )
        .unwrap()
    }

    fn second_sample() -> TestCase {
        let raw = [
            (1, 10, "28735619723837"),
            (2, 16, "1A228867F0CA"),
            (3, 12, "32811A4AA0B7B"),
            (4, 11, "917978721331A"),
            (5, 16, "1A22886782E1"),
            (6, 10, "28735619654702"),
            (7, 14, "71AB5070CC4B"),
            (8, 9, "122662581541670"),
            (9, 8, "642121030037605"),
        ];
        let shares = raw
            .iter()
            .map(|&(x, base, value)| Share::new(x, base, value).unwrap())
            .collect();
        TestCase::new(9, 6, shares).unwrap()
    }

    #[test]
    fn first_sample_secret() {
        let result = reconstruct(&first_sample()).unwrap();
        assert_eq!(result.secret, BigInt::from(3));
        assert!(result.is_clean());
    }

    #[test]
    fn second_sample_secret_and_wrong_share() {
        let result = reconstruct(&second_sample()).unwrap();
        assert_eq!(result.secret, BigInt::from(28_735_619_723_864_u64));
        assert_eq!(
            result.outliers,
            vec![Point::new(7, 28_859_585_857_715_u64)]
        );
        assert_eq!(result.strategy, SearchStrategy::Exhaustive);
        // Every 6-subset of the eight honest shares.
        assert_eq!(result.support, 28);
    }

    #[test]
    fn second_sample_with_greedy_search() {
        let reconstructor =
            Reconstructor::new(VerifierConfig::new(1)).unwrap();
        let result = reconstructor.reconstruct(&second_sample()).unwrap();
        assert_eq!(result.strategy, SearchStrategy::Greedy);
        assert_eq!(result.secret, BigInt::from(28_735_619_723_864_u64));
        assert_eq!(result.outliers.len(), 1);
        assert_eq!(result.outliers[0].x, BigInt::from(7));
    }

    #[test]
    fn exact_threshold_is_direct() {
        let shares = first_sample().shares()[..3].to_vec();
        let case = TestCase::new(3, 3, shares).unwrap();
        let result = reconstruct(&case).unwrap();
        assert_eq!(result.strategy, SearchStrategy::Direct);
        assert_eq!(result.secret, BigInt::from(3));
    }

    #[test]
    fn malformed_share_fails_the_case() {
        let case = TestCase::new(
            2,
            2,
            vec![
                Share::new(1, 10, "G").unwrap(),
                Share::new(2, 10, "5").unwrap(),
            ],
        )
        .unwrap();
        assert!(matches!(
            reconstruct(&case),
            Err(RecoveryError::ShareDecode { x: 1, .. })
        ));
    }

    #[test]
    fn batch_keeps_input_order() {
        let cases = vec![second_sample(), first_sample()];
        let results = Reconstructor::default().reconstruct_all(&cases);
        let secrets: Vec<BigInt> = results
            .into_iter()
            .map(|r| r.unwrap().secret)
            .collect();
        assert_eq!(
            secrets,
            vec![BigInt::from(28_735_619_723_864_u64), BigInt::from(3)]
        );
    }
}
