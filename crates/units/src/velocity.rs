use serde::{Deserialize, Serialize};

const KM_TO_CM: f64 = 1e5;

/// A signed velocity using f64 precision, stored in cm/s.
///
/// Radial velocities follow the usual convention: negative values point
/// inward (towards the planet centre).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    /// Shock models tabulate infall speeds in km/s
    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / KM_TO_CM
    }

    /// Speed (magnitude) regardless of direction
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}
