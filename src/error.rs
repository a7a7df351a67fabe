//! Error types shared by the kinematics engine and the catalogue

use crate::numeric::Float;
use thiserror::Error;

/// Failures of four-momentum construction, access, and mutation
#[derive(Clone, Debug, Error, PartialEq)]
pub enum KinematicsError {
    /// The energy component is below the magnitude of the 3-momentum
    ///
    /// No physical particle can satisfy that, so the offending vector is
    /// rejected instead of being allowed to carry an imaginary mass.
    #[error("unphysical four-momentum: energy {energy} is below the momentum magnitude {momentum}")]
    InvalidKinematics {
        /// Energy component of the rejected vector
        energy: Float,
        /// 3-momentum magnitude of the rejected vector
        momentum: Float,
    },

    /// A component index outside of `0..=3` was requested
    #[error("four-momentum component index {0} is out of range (valid indices go from 0 to 3)")]
    IndexOutOfRange(usize),
}

/// Failure of the catalogue-wide four-momentum sum
///
/// A single unphysical accumulation invalidates the whole total, so the fold
/// aborts and reports which particle it choked on.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("total four-momentum aborted at catalogue index {index}")]
pub struct AggregationError {
    /// Position of the offending particle in the catalogue
    pub index: usize,
    /// The kinematics violation that aborted the fold
    #[source]
    pub source: KinematicsError,
}
