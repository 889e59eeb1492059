use serde::{Deserialize, Serialize};

use crate::number_density::NumberDensity;

/// A physical volume density (mass per volume) quantity using f64 precision.
///
/// Stored in grams per cubic centimeter, the CGS convention. Gas falling onto
/// a forming planet is extremely dilute: preshock densities of
/// 10⁻¹⁴–10⁻⁹ g/cm³ are typical.
///
/// # Examples
///
/// ```rust
/// use units::VolumeDensity;
///
/// let preshock = VolumeDensity::from_grams_per_cm3(1.673e-12);
/// let n0 = preshock.to_number_density(1.673e-24);
/// assert!((n0.to_per_cm3() - 1e12).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: g/cm³

impl VolumeDensity {
    /// Creates a new `VolumeDensity` from a value in grams per cubic centimeter.
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    /// Returns the volume density value in grams per cubic centimeter.
    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    /// Number of particles per cm³ given the mass carried per particle (g).
    pub fn to_number_density(&self, mass_per_particle_g: f64) -> NumberDensity {
        NumberDensity::from_per_cm3(self.0 / mass_per_particle_g)
    }
}
