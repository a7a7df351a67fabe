//! A catalogue of relativistic particles built on a validated 4-momentum type
//!
//!
//! # Introduction (for the physicist)
//!
//! Every particle tracked by this crate carries a 4-momentum (E, px, py, pz)
//! in natural units (MeV). The crate enforces E ≥ |p| at every construction
//! and every mutation, derives invariant masses with a clamp against
//! floating-point cancellation at the light-like boundary, and can repair a
//! 4-momentum whose invariant mass drifted away from the expected value
//! while preserving its direction.
//!
//!
//! # Introduction (for the computer guy)
//!
//! [`FourMomentum`] is a small algebraic value type: validated constructors,
//! Minkowski inner product, checked addition, an all-or-nothing in-place
//! accumulator, and a deliberately unvalidated subtraction for
//! missing-momentum bookkeeping. [`ParticleCatalogue`] stores
//! reference-counted handles to anything implementing [`Particle`] and folds
//! their momenta into a system total, aborting on the first unphysical
//! accumulation.
//!
//! Everything is synchronous and free of shared mutable state. Callers who
//! want parallel aggregation should partition the catalogue, fold each
//! partition on its own accumulator, and combine the partial sums with
//! [`FourMomentum::checked_add`].

#![warn(missing_docs)]

pub mod boson;
pub mod catalogue;
pub mod error;
pub mod lepton;
pub mod masses;
pub mod momentum;
pub mod numeric;
pub mod particle;
pub mod quark;

pub use crate::{
    boson::Boson,
    catalogue::ParticleCatalogue,
    error::{AggregationError, KinematicsError},
    lepton::Lepton,
    momentum::{FourMomentum, MassAdjustment, MASS_TOLERANCE},
    particle::Particle,
    quark::Quark,
};
