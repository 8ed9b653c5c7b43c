//! Threshold secret recovery from shares written in mixed numeric bases.
//!
//! Shares are decoded into exact points, the secret is the constant term of
//! the interpolating polynomial, and when more than `k` shares are supplied
//! the majority polynomial is used to flag corrupted ones.

pub mod consensus;
pub mod error;
pub mod params;
pub mod points;
pub mod reconstruct;
pub mod result;
pub mod share;
pub mod wire;

pub use consensus::{verify, ConsensusVerifier};
pub use error::{RecoveryError, Result};
pub use params::VerifierConfig;
pub use points::PointSet;
pub use reconstruct::{reconstruct, Reconstructor};
pub use result::{ReconstructionResult, SearchStrategy};
pub use share::{Share, TestCase};

pub use recovery_math as math;
