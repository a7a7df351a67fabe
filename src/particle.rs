//! The capability shared by every entry of the particle catalogue

use crate::{momentum::FourMomentum, numeric::Float};
use std::fmt;

/// Interface that every particle species exposes
///
/// The kinematics engine never looks at a concrete species. Everything it
/// consumes is a 4-momentum, and everything the catalogue needs on top of
/// that is listed here. Quantum numbers that only make sense for some
/// species come with neutral defaults.
pub trait Particle {
    /// Electric charge, in units of the elementary charge
    fn charge(&self) -> Float;

    /// Spin quantum number
    fn spin(&self) -> Float;

    /// Human-readable species label
    fn kind(&self) -> &str;

    /// The particle's 4-momentum
    ///
    /// Returned by value, so callers can never alias the particle's internal
    /// kinematic state.
    fn four_momentum(&self) -> FourMomentum;

    /// Baryon number, zero for anything that does not carry one
    fn baryon_number(&self) -> i32 {
        0
    }

    /// Lepton number, zero for anything that is not a lepton
    fn lepton_number(&self) -> i32 {
        0
    }

    /// Whether the particle lives long enough to be treated as stable
    fn is_stable(&self) -> bool {
        true
    }

    /// Decay products owned by this particle, empty while it has not decayed
    fn decay_products(&self) -> &[Box<dyn Particle>] {
        &[]
    }
}

impl fmt::Display for dyn Particle + '_ {
    /// One-line summary of the particle's quantum numbers and kinematics
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "{} with charge {:.2}, spin {:.1}, four-momentum {}",
            self.kind(),
            self.charge(),
            self.spin(),
            self.four_momentum()
        )
    }
}
