//! Post-formation entropy populations.
//!
//! The Bern population synthesis (Mordasini et al. 2012) follows planets
//! through formation with either hot or cold accretion; the two runs give
//! distinct radius–accretion-rate relations, so every radius-dependent
//! quantity is selected by population.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FitError, FitResult};
use crate::radius::{RadiusFit, COLD_START_RADIUS_FIT, WARM_START_RADIUS_FIT};

/// Entropy state of the synthetic population a fit was made to.
///
/// Parsed from (and written as) the lowercase names `"warm"` and `"cold"`.
/// No other spelling is accepted; in particular nothing silently falls back
/// to the cold population.
///
/// # Examples
/// ```
/// use accretion_shock::Population;
///
/// let warm: Population = "warm".parse().unwrap();
/// assert_eq!(warm, Population::Warm);
/// assert!("hot".parse::<Population>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Population {
    /// Warm-start planets. Larger radii during runaway accretion; the
    /// likelier of the two.
    #[default]
    Warm,
    /// Cold-start planets, radiating away the accretion energy at the shock.
    Cold,
}

impl Population {
    pub const ALL: [Population; 2] = [Population::Warm, Population::Cold];

    /// Name used on input and output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }

    /// Radius fit coefficients for this population
    pub fn radius_fit(&self) -> &'static RadiusFit {
        match self {
            Self::Warm => &WARM_START_RADIUS_FIT,
            Self::Cold => &COLD_START_RADIUS_FIT,
        }
    }
}

impl FromStr for Population {
    type Err = FitError;

    fn from_str(s: &str) -> FitResult<Self> {
        match s {
            "warm" => Ok(Self::Warm),
            "cold" => Ok(Self::Cold),
            other => Err(FitError::InvalidPopulation(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Population {
    type Error = FitError;

    fn try_from(s: &str) -> FitResult<Self> {
        s.parse()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
