//! Reference rest masses of the particle species handled by the catalogue
//!
//! All values are in MeV, which is also the unit every 4-momentum in this
//! crate is expressed in.

use crate::numeric::Float;

/// Electron rest mass
pub const ELECTRON_MASS: Float = 0.511;

/// Muon rest mass
pub const MUON_MASS: Float = 105.658;

/// Tau rest mass
pub const TAU_MASS: Float = 1776.86;

/// Up quark rest mass
pub const UP_MASS: Float = 2.16;

/// Down quark rest mass
pub const DOWN_MASS: Float = 4.67;

/// Z⁰ boson rest mass
pub const Z0_MASS: Float = 91_187.6;

/// W boson rest mass
pub const W_MASS: Float = 80_377.;

/// Higgs boson rest mass
pub const HIGGS_MASS: Float = 125_250.;

/// Look up a rest mass from a species label
///
/// Labels are matched case-insensitively. Unknown species yield `None`
/// rather than a guessed mass.
pub fn rest_mass(kind: &str) -> Option<Float> {
    match kind.to_ascii_lowercase().as_str() {
        "electron" | "positron" => Some(ELECTRON_MASS),
        "muon" => Some(MUON_MASS),
        "tau" => Some(TAU_MASS),
        "up" => Some(UP_MASS),
        "down" => Some(DOWN_MASS),
        "z0" | "z" => Some(Z0_MASS),
        "w" | "w+" | "w-" => Some(W_MASS),
        "higgs" => Some(HIGGS_MASS),
        "photon" | "gluon" => Some(0.),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_honest_about_unknowns() {
        assert_eq!(rest_mass("Electron"), Some(ELECTRON_MASS));
        assert_eq!(rest_mass("photon"), Some(0.));
        assert_eq!(rest_mass("graviton"), None);
    }
}
