use serde::{Deserialize, Serialize};

/// One Earth mass per year expressed in grams per second (1.893 × 10²⁰ g/s).
///
/// Accretion-rate fits for forming giant planets are tabulated in M⊕/yr
/// with this conversion factor baked in.
pub const EARTH_MASS_PER_YEAR_G_S: f64 = 1.893e20;

/// A physical mass rate (mass per time) quantity using f64 precision.
///
/// The `MassRate` struct stores grams per second. Planetary gas accretion
/// rates are usually quoted in Earth masses per year; typical values during
/// runaway accretion lie between 10⁻⁵ and 10⁻² M⊕/yr.
///
/// # Examples
///
/// ```rust
/// use units::MassRate;
///
/// let runaway = MassRate::from_earth_masses_per_year(1e-2);
/// assert_eq!(runaway.to_grams_per_second(), 1e-2 * 1.893e20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: g/s

impl MassRate {
    /// Creates a new `MassRate` from a value in Earth masses per year.
    ///
    /// # Arguments
    ///
    /// * `value` - The mass rate in M⊕/yr (1 M⊕/yr = 1.893 × 10²⁰ g/s)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::MassRate;
    ///
    /// let slow = MassRate::from_earth_masses_per_year(1e-5);
    /// let fast = MassRate::from_earth_masses_per_year(2e-2);
    /// assert!(fast > slow);
    /// ```
    pub fn from_earth_masses_per_year(value: f64) -> Self {
        Self(value * EARTH_MASS_PER_YEAR_G_S)
    }

    /// Returns the mass rate in grams per second.
    pub fn to_grams_per_second(&self) -> f64 {
        self.0
    }

    /// Converts the mass rate to Earth masses per year.
    pub fn to_earth_masses_per_year(&self) -> f64 {
        self.0 / EARTH_MASS_PER_YEAR_G_S
    }
}
