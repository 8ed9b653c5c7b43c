//! Majority-vote reconstruction over redundant shares.
//!
//! With `n > k` points every k-subset determines a candidate secret. The
//! candidate with the most votes wins (ties go to the smaller value).
//!
//! The winning secret does not fix the polynomial: colluding shares can lie
//! on another polynomial with the same constant term. Among the polynomials
//! of the subsets that voted for the winner, the one most points lie on is
//! kept, and every point off it is an outlier.
//!
//! Exhaustive voting needs at least `k + 1` honest points to single out the
//! honest polynomial: with exactly `k` of them it is indistinguishable from
//! any polynomial through `k` corrupted-or-honest points.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use num_bigint::BigInt;
use recovery_math::error::InterpolationError;
use recovery_math::{interpolate, lies_on, Combinations, Point};
use tracing::{debug, trace, warn};

use crate::error::{RecoveryError, Result};
use crate::params::VerifierConfig;
use crate::points::PointSet;
use crate::result::{ReconstructionResult, SearchStrategy};

/// Subsets that produced one candidate secret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Ballot {
    subsets: Vec<Vec<usize>>,
}

impl Ballot {
    fn votes(&self) -> usize {
        self.subsets.len()
    }
}

/// Order-independent vote count keyed by candidate secret.
#[derive(Clone, Debug, Default)]
struct Tally {
    ballots: BTreeMap<BigInt, Ballot>,
    trials: usize,
}

impl Tally {
    fn record(mut self, subset: Vec<usize>, secret: Option<BigInt>) -> Self {
        self.trials += 1;
        if let Some(secret) = secret {
            self.ballots.entry(secret).or_default().subsets.push(subset);
        }
        self
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(mut self, other: Tally) -> Self {
        self.trials += other.trials;
        for (secret, ballot) in other.ballots {
            self.ballots
                .entry(secret)
                .or_default()
                .subsets
                .extend(ballot.subsets);
        }
        self
    }

    /// Most votes; the smallest secret among equals.
    fn winner(&self) -> Option<(&BigInt, &Ballot)> {
        self.ballots.iter().fold(None, |best, (secret, ballot)| match best {
            Some((_, b)) if b.votes() >= ballot.votes() => best,
            _ => Some((secret, ballot)),
        })
    }

    fn top_votes(&self) -> usize {
        self.winner().map_or(0, |(_, b)| b.votes())
    }
}

/// Reconstructs a secret from more than `k` points and flags the ones that
/// disagree with the majority.
#[derive(Clone, Debug, Default)]
pub struct ConsensusVerifier {
    config: VerifierConfig,
}

impl ConsensusVerifier {
    pub fn new(config: VerifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Recover the majority secret of `points` for threshold `k`.
    ///
    /// `points.len() == k` degenerates to a single interpolation.
    pub fn verify(
        &self,
        points: &PointSet,
        k: usize,
    ) -> Result<ReconstructionResult> {
        let n = points.len();
        if k == 0 {
            return Err(RecoveryError::InvalidThreshold {
                threshold: k,
                total: n,
            });
        }
        if n < k {
            return Err(InterpolationError::InsufficientPoints {
                required: k,
                provided: n,
            }
            .into());
        }
        if n == k {
            let secret = interpolate(points.as_slice(), k)?;
            return Ok(ReconstructionResult::direct(secret));
        }

        let (tally, strategy) = if self.config.allows_exhaustive(n, k) {
            (exhaustive_tally(points, k), SearchStrategy::Exhaustive)
        } else {
            warn!(
                n,
                k,
                limit = self.config.exhaustive_limit,
                "subset count exceeds exhaustive limit, using greedy elimination"
            );
            (greedy_tally(points, k), SearchStrategy::Greedy)
        };

        let Some((secret, ballot)) = tally.winner() else {
            warn!(n, k, trials = tally.trials, "no subset produced an integer");
            return Err(RecoveryError::NoConsensus {
                subsets: tally.trials,
            });
        };

        let outliers = classify(points, &ballot.subsets)?;
        debug!(
            %secret,
            votes = ballot.votes(),
            trials = tally.trials,
            outliers = outliers.len(),
            %strategy,
            "consensus reached"
        );

        Ok(ReconstructionResult {
            secret: secret.clone(),
            outliers,
            strategy,
            support: ballot.votes(),
        })
    }
}

/// Recover the majority secret with the default [`VerifierConfig`].
///
/// Fails with `InsufficientPoints` for fewer than `k` points and with
/// `DuplicateX` if two points share an `x`.
pub fn verify(points: &[Point], k: usize) -> Result<ReconstructionResult> {
    let set = PointSet::from_points(points.iter().cloned())?;
    ConsensusVerifier::default().verify(&set, k)
}

/// Interpolate one subset; subsets without an integer secret cast no vote.
fn trial(points: &PointSet, subset: &[usize]) -> Option<BigInt> {
    match interpolate(&points.select(subset), subset.len()) {
        Ok(secret) => {
            trace!(?subset, %secret, "subset vote");
            Some(secret)
        }
        Err(err) => {
            trace!(?subset, %err, "subset abstains");
            None
        }
    }
}

#[cfg(feature = "parallel")]
fn exhaustive_tally(points: &PointSet, k: usize) -> Tally {
    use rayon::prelude::*;

    Combinations::new(points.len(), k)
        .par_bridge()
        .fold(Tally::default, |tally, subset| {
            let secret = trial(points, &subset);
            tally.record(subset, secret)
        })
        .reduce(Tally::default, Tally::merge)
}

#[cfg(not(feature = "parallel"))]
fn exhaustive_tally(points: &PointSet, k: usize) -> Tally {
    Combinations::new(points.len(), k).fold(Tally::default(), |tally, subset| {
        let secret = trial(points, &subset);
        tally.record(subset, secret)
    })
}

/// Contiguous k-windows over `survivors` (indices ordered by `x`), each
/// voting for its secret.
fn window_tally(points: &PointSet, survivors: &[usize], k: usize) -> Tally {
    survivors.windows(k).fold(Tally::default(), |tally, window| {
        let secret = trial(points, window);
        tally.record(window.to_vec(), secret)
    })
}

/// Heuristic search for large `n - k`: repeatedly drop the point whose
/// removal raises the share of agreeing windows the most, until all windows
/// agree or only `k` points remain.
///
/// Not exact: a corrupted point can survive if removing it does not
/// improve agreement more than removing some honest point.
fn greedy_tally(points: &PointSet, k: usize) -> Tally {
    let mut survivors: Vec<usize> = (0..points.len()).collect();
    let mut trials = 0;

    loop {
        let tally = window_tally(points, &survivors, k);
        trials += tally.trials;
        let windows = survivors.len() - k + 1;
        if tally.top_votes() == windows || survivors.len() == k {
            debug!(survivors = survivors.len(), "greedy elimination settled");
            return Tally { trials, ..tally };
        }

        // (position, votes, windows) of the best removal so far, compared
        // as the ratio votes / windows.
        let mut best: Option<(usize, usize, usize)> = None;
        for pos in 0..survivors.len() {
            let mut candidate = survivors.clone();
            candidate.remove(pos);
            let tally = window_tally(points, &candidate, k);
            trials += tally.trials;
            let (votes, windows) = (tally.top_votes(), candidate.len() - k + 1);
            let better = match best {
                None => true,
                Some((_, best_votes, best_windows)) => {
                    votes * best_windows > best_votes * windows
                }
            };
            if better {
                best = Some((pos, votes, windows));
            }
        }

        if let Some((pos, votes, windows)) = best {
            let dropped = survivors.remove(pos);
            let x = &points.as_slice()[dropped].x;
            trace!(%x, votes, windows, "dropped point");
        }
    }
}

/// Points off the best-supported polynomial among those through `subsets`,
/// ascending by `x`. The lexicographically first subset wins ties.
fn classify(points: &PointSet, subsets: &[Vec<usize>]) -> Result<Vec<Point>> {
    let mut ordered: Vec<&[usize]> = subsets.iter().map(Vec::as_slice).collect();
    ordered.sort_unstable();

    // For each distinct polynomial, which points lie on it.
    let mut curves: Vec<Vec<bool>> = Vec::new();
    for subset in ordered {
        // k points fix the polynomial, so a subset already on a known curve
        // defines that curve.
        if curves.iter().any(|on| subset.iter().all(|&i| on[i])) {
            continue;
        }
        let witness = points.select(subset);
        let on = points
            .iter()
            .map(|point| lies_on(&witness, point))
            .collect::<recovery_math::Result<Vec<bool>>>()?;
        curves.push(on);
    }

    let best = curves
        .iter()
        .enumerate()
        .max_by_key(|(i, on)| (on.iter().filter(|&&on| on).count(), Reverse(*i)))
        .map(|(_, on)| on);

    Ok(match best {
        Some(on) => points
            .iter()
            .zip(on)
            .filter(|(_, on)| !**on)
            .map(|(point, _)| point.clone())
            .collect(),
        None => Vec::new(),
    })
}
