//! Leptons, including the calorimeter-backed reconstruction path

use crate::{
    momentum::{FourMomentum, MassAdjustment},
    numeric::Float,
    particle::Particle,
};
use log::warn;

/// A charged or neutral lepton
pub struct Lepton {
    /// Electric charge
    charge: Float,

    /// Spin quantum number
    spin: Float,

    /// +1 for particles, -1 for antiparticles
    lepton_number: i32,

    /// Kinematic state
    momentum: FourMomentum,

    /// Calorimeter energy deposits, when reconstructed from a calorimeter
    calorimeter_deposits: Vec<Float>,
}
//
impl Lepton {
    /// Build a lepton from an already validated 4-momentum
    pub fn new(charge: Float, spin: Float, lepton_number: i32, momentum: FourMomentum) -> Self {
        Self {
            charge,
            spin,
            lepton_number,
            momentum,
            calorimeter_deposits: Vec::new(),
        }
    }

    /// Build a lepton whose energy was measured independently by a calorimeter
    ///
    /// The tracker and the calorimeter rarely agree exactly, and the summed
    /// calorimeter deposits win: the candidate 4-momentum is rebuilt around
    /// them, keeping the tracker's spatial components. When that candidate is
    /// unphysical (deposits below the tracked momentum), the tracker
    /// measurement is kept instead. Either way, the result is then repaired
    /// onto `rest_mass`, so the stored 4-momentum is always consistent with
    /// the species the caller claims this lepton to be.
    pub fn with_calorimeter(
        charge: Float,
        spin: Float,
        lepton_number: i32,
        momentum: FourMomentum,
        deposits: Vec<Float>,
        rest_mass: Float,
    ) -> Self {
        let calorimeter_energy = deposits.iter().sum::<Float>();
        let spatial = momentum.spatial();
        let mut reconciled =
            FourMomentum::new(calorimeter_energy, spatial[0], spatial[1], spatial[2])
                .unwrap_or_else(|err| {
                    warn!("calorimeter energy rejected ({}), keeping the tracker measurement", err);
                    momentum
                });
        if reconciled.adjust_to_mass(rest_mass) == MassAdjustment::RestFallback {
            warn!("lepton 4-momentum degenerated to a rest vector of mass {}", rest_mass);
        }
        Self {
            charge,
            spin,
            lepton_number,
            momentum: reconciled,
            calorimeter_deposits: deposits,
        }
    }

    /// Calorimeter deposits recorded for this lepton, if any
    pub fn calorimeter_deposits(&self) -> &[Float] {
        &self.calorimeter_deposits
    }
}
//
impl Particle for Lepton {
    fn charge(&self) -> Float {
        self.charge
    }

    fn spin(&self) -> Float {
        self.spin
    }

    fn kind(&self) -> &str {
        "Lepton"
    }

    fn four_momentum(&self) -> FourMomentum {
        self.momentum
    }

    fn lepton_number(&self) -> i32 {
        self.lepton_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{masses::ELECTRON_MASS, momentum::MASS_TOLERANCE};

    #[test]
    fn calorimeter_energy_replaces_the_tracker_energy() {
        let tracker = FourMomentum::new(50., 3., 4., 0.).unwrap();
        let electron = Lepton::with_calorimeter(
            -1.,
            0.5,
            1,
            tracker,
            vec![10., 10., 15., 5.],
            ELECTRON_MASS,
        );
        let p = electron.four_momentum();
        // The repair keeps the measured direction and lands on the rest mass
        assert!((p.invariant_mass() - ELECTRON_MASS).abs() < MASS_TOLERANCE);
        let direction = p.spatial().normalize();
        assert!((direction - tracker.spatial().normalize()).norm() < 1e-12);
        assert_eq!(electron.calorimeter_deposits().len(), 4);
    }

    #[test]
    fn unphysical_calorimeter_energy_keeps_the_tracker_measurement() {
        // Summed deposits (5) are below the tracked momentum (8), so the
        // candidate fails construction and the tracker vector is repaired
        let tracker = FourMomentum::new(10., 0., 0., 8.).unwrap();
        let electron =
            Lepton::with_calorimeter(-1., 0.5, 1, tracker, vec![2., 3.], ELECTRON_MASS);
        let p = electron.four_momentum();
        assert!((p.invariant_mass() - ELECTRON_MASS).abs() < MASS_TOLERANCE);
        assert!(p.spatial()[2] > 0.);
    }

    #[test]
    fn plain_construction_stores_the_momentum_untouched() {
        let p = FourMomentum::new(120., 10., 0., 0.).unwrap();
        let muon = Lepton::new(-1., 0.5, 1, p);
        assert_eq!(muon.four_momentum(), p);
        assert_eq!(muon.lepton_number(), 1);
        assert!(muon.calorimeter_deposits().is_empty());
    }
}
