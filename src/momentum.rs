//! This module implements the domain-specific 4-momentum handling logic.

use crate::{
    error::KinematicsError,
    numeric::{functions::sqr, Float},
};
use log::warn;
use nalgebra::{SVector, Vector3};
use prefix_num_ops::real::*;
use std::{fmt, ops::Sub};

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Underlying storage of the 4-momentum components
type Components = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 0;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 1;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 2;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 3;

/// Absolute tolerance on invariant mass comparisons (same units as the mass)
pub const MASS_TOLERANCE: Float = 1e-4;

/// Relativistic 4-momentum, kept physical by construction
///
/// The energy component may never drop below the magnitude of the spatial
/// 3-momentum. Every constructor and every mutating operation re-checks that
/// constraint and reports [`KinematicsError::InvalidKinematics`] rather than
/// producing a vector with imaginary mass.
///
/// Equality (and thus `!=`) is an exact component-wise IEEE-754 comparison,
/// meant for change detection rather than physical comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourMomentum(Components);
//
impl FourMomentum {
    /// Build a validated 4-momentum from its components, energy first
    pub fn new(e: Float, px: Float, py: Float, pz: Float) -> Result<Self, KinematicsError> {
        Self::from_components(Components::new(e, px, py, pz))
    }

    /// Validate a raw component vector before wrapping it
    fn from_components(components: Components) -> Result<Self, KinematicsError> {
        let energy = components[E];
        let momentum = components.fixed_rows::<3>(X).norm();
        // Written so that a NaN component also fails the check
        if !(energy >= momentum) {
            return Err(KinematicsError::InvalidKinematics { energy, momentum });
        }
        Ok(Self(components))
    }

    /// The zero vector, i.e. no momentum assigned yet
    pub fn zero() -> Self {
        Self(Components::zeros())
    }

    /// Access one component by index, in (E, px, py, pz) order
    pub fn component(&self, index: usize) -> Result<Float, KinematicsError> {
        if index >= MOMENTUM_DIM {
            return Err(KinematicsError::IndexOutOfRange(index));
        }
        Ok(self.0[index])
    }

    /// Energy component
    pub fn energy(&self) -> Float {
        self.0[E]
    }

    /// Spatial part of the 4-momentum
    ///
    /// We return an owned vector because that is more convenient to handle
    /// than a slice, and the compiler is smart enough to elide the copy.
    pub fn spatial(&self) -> Vector3<Float> {
        self.0.fixed_rows::<3>(X).into_owned()
    }

    /// Invariant mass `sqrt(E² − |p|²)` of this 4-momentum
    ///
    /// Cancellation near the light-like boundary can push the squared mass
    /// slightly below zero; it is clamped back so that the square root stays
    /// real. This accessor never fails.
    pub fn invariant_mass(&self) -> Float {
        let mass_squared = sqr(self.energy()) - self.spatial().norm_squared();
        sqrt(mass_squared.max(0.))
    }

    /// Minkowski inner product with the (+,−,−,−) metric
    ///
    /// The only Lorentz-invariant pairing of two 4-momenta. No new vector is
    /// constructed, so nothing is validated here.
    pub fn dot(&self, other: &Self) -> Float {
        self.energy() * other.energy() - self.spatial().dot(&other.spatial())
    }

    /// Checked component-wise sum of two 4-momenta
    ///
    /// Summing the 4-momenta of a particle system yields the system's total
    /// 4-momentum. The sum is commutative and associative up to floating
    /// point rounding, and the result is validated like any other freshly
    /// constructed vector.
    pub fn checked_add(&self, other: &Self) -> Result<Self, KinematicsError> {
        Self::from_components(self.0 + other.0)
    }

    /// Accumulate another 4-momentum into this one
    ///
    /// All-or-nothing: the sum is validated into a temporary before being
    /// committed, so `self` is left untouched when the result would be
    /// unphysical.
    pub fn accumulate(&mut self, other: &Self) -> Result<(), KinematicsError> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    /// Rescale this vector so that its invariant mass matches `expected_mass`
    ///
    /// The spatial components are scaled by `expected_mass / current_mass`,
    /// which preserves the momentum direction, and the energy is recomputed
    /// as `sqrt(|p|² + expected_mass²)`. A vector already within
    /// [`MASS_TOLERANCE`] of the expected mass is left alone.
    ///
    /// A massless vector cannot be rescaled this way, as the scale factor
    /// would be undefined. It is parked at rest with `E = expected_mass`
    /// instead. That fallback is a convention, not a physically derived
    /// result, so it is reported as [`MassAdjustment::RestFallback`] and
    /// logged as a warning, never as a silent success.
    ///
    /// This operation cannot fail: it always leaves behind a valid vector.
    pub fn adjust_to_mass(&mut self, expected_mass: Float) -> MassAdjustment {
        let current_mass = self.invariant_mass();
        if abs(current_mass - expected_mass) <= MASS_TOLERANCE {
            return MassAdjustment::Unchanged;
        }
        let factor = expected_mass / current_mass;
        if !factor.is_finite() {
            warn!(
                "cannot rescale a 4-momentum of mass {} onto mass {}, parking it at rest",
                current_mass, expected_mass
            );
            self.0 = Components::zeros();
            self.0[E] = expected_mass;
            return MassAdjustment::RestFallback;
        }
        let rescaled = self.spatial() * factor;
        self.0[E] = sqrt(rescaled.norm_squared() + sqr(expected_mass));
        self.0.fixed_rows_mut::<3>(X).copy_from(&rescaled);
        MassAdjustment::Rescaled
    }
}

impl Default for FourMomentum {
    /// Default to the zero vector
    fn default() -> Self {
        Self::zero()
    }
}

impl Sub for FourMomentum {
    type Output = Self;

    /// Component-wise difference of two 4-momenta
    ///
    /// Deliberately not validated: the difference of two physical vectors can
    /// legitimately represent a missing-momentum quantity whose apparent
    /// squared mass is negative. Feed the components of a difference back
    /// through [`FourMomentum::new`] when a physical vector is required.
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for FourMomentum {
    /// Dump the components in the conventional (E, px, py, pz) notation
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "(E={}, px={}, py={}, pz={})",
            self.0[E], self.0[X], self.0[Y], self.0[Z]
        )
    }
}

/// Outcome of [`FourMomentum::adjust_to_mass`]
///
/// Distinguishes an ordinary rescale from the rest-frame fallback applied to
/// degenerate inputs, so that callers can surface the latter as a warning.
#[must_use = "a RestFallback outcome signals a degenerate input and should be surfaced"]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MassAdjustment {
    /// The invariant mass already matched the expected one
    Unchanged,
    /// The spatial components were rescaled and the energy recomputed
    Rescaled,
    /// Degenerate input, the vector was reset to rest at the expected mass
    RestFallback,
}
