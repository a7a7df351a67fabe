//! The catalogue of particles and the aggregations defined over it

use crate::{
    error::AggregationError,
    momentum::FourMomentum,
    numeric::Float,
    particle::Particle,
};
use std::{fmt, sync::Arc};

/// Ordered collection of particle handles
///
/// Handles are reference-counted so that filtered views can share their
/// particles with the catalogue they were extracted from. The catalogue
/// never hands out a mutable path back into a particle: aggregations work
/// on the independent 4-momentum copies that the particles expose.
#[derive(Default)]
pub struct ParticleCatalogue {
    /// Catalogued particles, in insertion order
    particles: Vec<Arc<dyn Particle>>,
}
//
impl ParticleCatalogue {
    /// Set up an empty catalogue
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Append a particle to the catalogue
    pub fn add_particle(&mut self, particle: Arc<dyn Particle>) {
        self.particles.push(particle);
    }

    /// Number of catalogued particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the catalogue holds no particle at all
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate over the catalogued particles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Particle> {
        self.particles.iter().map(|particle| particle.as_ref())
    }

    /// Total 4-momentum of the catalogued particles
    ///
    /// Folds the catalogue in insertion order into a zero-initialized
    /// accumulator. The result is order-independent up to floating-point
    /// rounding. The first accumulation that would leave the running total
    /// unphysical aborts the whole fold and reports the offending index:
    /// there is no skip-and-continue mode, since one corrupt 4-momentum
    /// invalidates any total it contributed to.
    pub fn total_four_momentum(&self) -> Result<FourMomentum, AggregationError> {
        let mut total = FourMomentum::zero();
        for (index, particle) in self.particles.iter().enumerate() {
            total
                .accumulate(&particle.four_momentum())
                .map_err(|source| AggregationError { index, source })?;
        }
        Ok(total)
    }

    /// Extract the particles carrying the requested electric charge
    ///
    /// The filtered catalogue shares its particles with this one and
    /// preserves their relative order.
    pub fn filter_by_charge(&self, charge: Float) -> Self {
        Self {
            particles: self
                .particles
                .iter()
                .filter(|particle| particle.charge() == charge)
                .cloned()
                .collect(),
        }
    }

    /// Check whether every catalogued particle satisfies a property
    pub fn all_satisfy(&self, property: impl Fn(&dyn Particle) -> bool) -> bool {
        self.iter().all(property)
    }
}

impl fmt::Display for ParticleCatalogue {
    /// Dump one summary line per catalogued particle
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for particle in self.iter() {
            writeln!(fmt, "{}", particle)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::KinematicsError, lepton::Lepton, quark::Quark};

    /// A pair of particles at rest, adding up to an energy of 1 MeV
    fn resting_pair() -> ParticleCatalogue {
        let mut catalogue = ParticleCatalogue::new();
        let half = FourMomentum::new(0.5, 0., 0., 0.).unwrap();
        catalogue.add_particle(Arc::new(Lepton::new(-1., 0.5, 1, half)));
        catalogue.add_particle(Arc::new(Lepton::new(1., 0.5, -1, half)));
        catalogue
    }

    #[test]
    fn an_empty_catalogue_sums_to_the_zero_vector() {
        let catalogue = ParticleCatalogue::new();
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.total_four_momentum().unwrap(), FourMomentum::zero());
    }

    #[test]
    fn total_momentum_of_two_resting_particles() {
        let catalogue = resting_pair();
        let total = catalogue.total_four_momentum().unwrap();
        assert_eq!(total, FourMomentum::new(1., 0., 0., 0.).unwrap());
        assert!((total.invariant_mass() - 1.).abs() < 1e-12);
    }

    #[test]
    fn aggregation_aborts_on_the_offending_particle() {
        let mut catalogue = ParticleCatalogue::new();
        let running = FourMomentum::new(80., 0., 0., 0.).unwrap();
        // A missing-momentum difference smuggles an unphysical vector into a
        // particle; accumulating it must abort the fold, not skip it
        let rogue = FourMomentum::new(200., 0., 0., 100.).unwrap()
            - FourMomentum::new(190., 0., 0., 5.).unwrap();
        catalogue.add_particle(Arc::new(Quark::new(2. / 3., 0.5, 1, running)));
        catalogue.add_particle(Arc::new(Lepton::new(-1., 0.5, 1, rogue)));
        let err = catalogue.total_four_momentum().unwrap_err();
        assert_eq!(err.index, 1);
        assert!(matches!(
            err.source,
            KinematicsError::InvalidKinematics { .. }
        ));
    }

    #[test]
    fn charge_filtering_shares_particles_and_keeps_order() {
        let mut catalogue = resting_pair();
        let up = FourMomentum::new(120., 10., 0., 0.).unwrap();
        catalogue.add_particle(Arc::new(Quark::new(2. / 3., 0.5, 1, up)));
        let negative = catalogue.filter_by_charge(-1.);
        assert_eq!(negative.len(), 1);
        assert_eq!(negative.iter().next().unwrap().lepton_number(), 1);
        // The parent catalogue is left untouched
        assert_eq!(catalogue.len(), 3);
    }

    #[test]
    fn properties_can_be_checked_across_the_whole_catalogue() {
        let catalogue = resting_pair();
        assert!(catalogue.all_satisfy(|particle| particle.is_stable()));
        assert!(!catalogue.all_satisfy(|particle| particle.charge() > 0.));
    }

    #[test]
    fn the_catalogue_printout_has_one_line_per_particle() {
        let catalogue = resting_pair();
        let printout = catalogue.to_string();
        assert_eq!(printout.lines().count(), 2);
        assert!(printout.contains("Lepton"));
    }
}
