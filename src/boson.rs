//! Bosons, the only species that records decay products here

use crate::{momentum::FourMomentum, numeric::Float, particle::Particle};

/// A gauge or scalar boson
///
/// A decayed boson owns its decay products outright: they are an ordered
/// sequence held exclusively by the decaying particle, with no back-reference
/// from product to parent, so no reference cycle can form.
pub struct Boson {
    charge: Float,
    spin: Float,
    momentum: FourMomentum,
    decay_products: Vec<Box<dyn Particle>>,
}
//
impl Boson {
    /// Build a stable boson from its quantum numbers and a 4-momentum
    pub fn new(charge: Float, spin: Float, momentum: FourMomentum) -> Self {
        Self::with_decay_products(charge, spin, momentum, Vec::new())
    }

    /// Build a boson together with the products it decayed into
    pub fn with_decay_products(
        charge: Float,
        spin: Float,
        momentum: FourMomentum,
        decay_products: Vec<Box<dyn Particle>>,
    ) -> Self {
        Self {
            charge,
            spin,
            momentum,
            decay_products,
        }
    }
}
//
impl Particle for Boson {
    fn charge(&self) -> Float {
        self.charge
    }

    fn spin(&self) -> Float {
        self.spin
    }

    fn kind(&self) -> &str {
        "Boson"
    }

    fn four_momentum(&self) -> FourMomentum {
        self.momentum
    }

    fn is_stable(&self) -> bool {
        self.decay_products.is_empty()
    }

    fn decay_products(&self) -> &[Box<dyn Particle>] {
        &self.decay_products
    }
}
