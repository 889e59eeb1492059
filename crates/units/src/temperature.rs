use serde::{Deserialize, Serialize};

/// A physical temperature quantity using f64 precision.
///
/// The `Temperature` struct represents temperature with Kelvin as the base unit.
/// Effective temperatures of accreting planets are computed from flux
/// balances, so the fourth power shows up everywhere; see [`Temperature::from_flux`]
/// and [`Temperature::to_flux`].
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let interior = Temperature::from_kelvin(1000.0);
/// assert_eq!(interior.powi(4), 1e12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Blackbody temperature radiating the given flux.
    ///
    /// Inverts `F = σ T⁴` for a flux in erg cm⁻² s⁻¹ and a Stefan–Boltzmann
    /// constant in CGS.
    ///
    /// ```rust
    /// use units::Temperature;
    ///
    /// let sigma = 5.67e-5;
    /// let t = Temperature::from_flux(sigma * 1e12, sigma);
    /// assert!((t.to_kelvin() - 1000.0).abs() < 1e-9);
    /// ```
    pub fn from_flux(flux: f64, stefan_boltzmann: f64) -> Self {
        Self((flux / stefan_boltzmann).powf(0.25))
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Blackbody flux `σ T⁴` in erg cm⁻² s⁻¹.
    pub fn to_flux(&self, stefan_boltzmann: f64) -> f64 {
        stefan_boltzmann * self.0.powi(4)
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}
