use serde::{Deserialize, Serialize};

/// Mass of Jupiter in grams (1.898 × 10³⁰ g)
///
/// This is the value the accretion fits were calibrated against; keep it
/// exact so that `Mass::from_jupiter_masses(m).to_grams()` reproduces the
/// published numbers.
pub const JUPITER_MASS_G: f64 = 1.898e30;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct stores grams, the CGS base unit, so that every
/// formula written in CGS can take `to_grams()` without an intermediate
/// rescaling. Giant-planet masses are usually quoted in Jupiter masses.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let planet = Mass::from_jupiter_masses(10.0);
/// assert_eq!(planet.to_grams(), 10.0 * 1.898e30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: grams

impl Mass {
    /// Creates a new `Mass` from a value in Jupiter masses.
    ///
    /// # Arguments
    ///
    /// * `value` - The mass value in Jupiter masses (1 MJ = 1.898 × 10³⁰ g)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let jupiter = Mass::from_jupiter_masses(1.0);
    /// let brown_dwarf = Mass::from_jupiter_masses(30.0);
    /// assert!(brown_dwarf > jupiter);
    /// ```
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_G)
    }

    /// Returns the mass in grams.
    pub fn to_grams(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 / JUPITER_MASS_G
    }
}
