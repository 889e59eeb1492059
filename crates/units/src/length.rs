use serde::{Deserialize, Serialize};

/// Jupiter radius in centimeters (7.15 × 10⁹ cm), as used by the radius fits
pub const JUPITER_RADIUS_CM: f64 = 7.15e9;

/// A physical length quantity using f64 precision.
///
/// Stored in centimeters. Forming gas giants are some 1–5 Jupiter radii
/// across while still accreting, so `to_jupiter_radii` is the usual read-out.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let radius = Length::from_jupiter_radii(2.0);
/// assert_eq!(radius.to_cm(), 2.0 * 7.15e9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: cm

impl Length {
    /// Creates a new `Length` from a value in Jupiter radii.
    pub fn from_jupiter_radii(value: f64) -> Self {
        Self(value * JUPITER_RADIUS_CM)
    }

    /// Returns the length in centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0
    }

    /// Converts the length to Jupiter radii.
    pub fn to_jupiter_radii(&self) -> f64 {
        self.0 / JUPITER_RADIUS_CM
    }

    /// Raise to integer power (returns dimensionless f64 in cmⁿ)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}
