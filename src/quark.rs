//! Quarks and their baryonic quantum numbers

use crate::{momentum::FourMomentum, numeric::Float, particle::Particle};

/// A single quark
pub struct Quark {
    charge: Float,
    spin: Float,
    baryon_number: i32,
    momentum: FourMomentum,
}
//
impl Quark {
    /// Build a quark from its quantum numbers and a validated 4-momentum
    pub fn new(charge: Float, spin: Float, baryon_number: i32, momentum: FourMomentum) -> Self {
        Self {
            charge,
            spin,
            baryon_number,
            momentum,
        }
    }
}
//
impl Particle for Quark {
    fn charge(&self) -> Float {
        self.charge
    }

    fn spin(&self) -> Float {
        self.spin
    }

    fn kind(&self) -> &str {
        "Quark"
    }

    fn four_momentum(&self) -> FourMomentum {
        self.momentum
    }

    fn baryon_number(&self) -> i32 {
        self.baryon_number
    }
}
