use serde::{Deserialize, Serialize};
use units::{Mass, MassRate};

// Slack for unit round trips at the range edges
const EDGE_TOLERANCE: f64 = 1e-12;

fn within(value: f64, min: f64, max: f64) -> bool {
    value >= min * (1.0 - EDGE_TOLERANCE) && value <= max * (1.0 + EDGE_TOLERANCE)
}

/// Parameter range the fits were calibrated on.
///
/// Advisory only: nothing refuses to evaluate outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitDomain {
    /// Lowest calibrated accretion rate (M⊕/yr)
    pub min_accretion_rate: f64,
    /// Highest calibrated accretion rate (M⊕/yr)
    pub max_accretion_rate: f64,
    /// Lowest calibrated mass (MJ)
    pub min_mass: f64,
    /// Highest calibrated mass (MJ)
    pub max_mass: f64,
}

impl FitDomain {
    /// 1–30 MJ and 10⁻⁵–2×10⁻² M⊕/yr (Aoyama et al. 2020)
    pub const NOMINAL: FitDomain = FitDomain {
        min_accretion_rate: 1e-5,
        max_accretion_rate: 2e-2,
        min_mass: 1.0,
        max_mass: 30.0,
    };

    pub fn contains_accretion_rate(&self, accretion_rate: MassRate) -> bool {
        within(
            accretion_rate.to_earth_masses_per_year(),
            self.min_accretion_rate,
            self.max_accretion_rate,
        )
    }

    pub fn contains_mass(&self, mass: Mass) -> bool {
        within(mass.to_jupiter_masses(), self.min_mass, self.max_mass)
    }

    /// Whether both inputs lie inside the calibrated ranges
    pub fn contains(&self, accretion_rate: MassRate, mass: Mass) -> bool {
        self.contains_accretion_rate(accretion_rate) && self.contains_mass(mass)
    }
}

impl Default for FitDomain {
    fn default() -> Self {
        Self::NOMINAL
    }
}
