use serde::{Deserialize, Serialize};

/// Particle number density, stored in cm⁻³.
///
/// Shock models are usually parametrised by the hydrogen-nucleus number
/// density `n₀` and its decimal logarithm.
///
/// # Examples
///
/// ```rust
/// use units::NumberDensity;
///
/// let n0 = NumberDensity::from_per_cm3(1e12);
/// assert!((n0.log10() - 12.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NumberDensity(f64); // Base unit: cm⁻³

impl NumberDensity {
    pub fn from_per_cm3(value: f64) -> Self {
        Self(value)
    }

    pub fn to_per_cm3(&self) -> f64 {
        self.0
    }

    /// Decimal logarithm of the density in cm⁻³
    pub fn log10(&self) -> f64 {
        self.0.log10()
    }
}
