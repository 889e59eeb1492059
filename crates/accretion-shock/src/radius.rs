//! Radius of an accreting giant planet.
//!
//! Aoyama et al. (2020, Fig. 1) fit the radii of the Mordasini et al. (2012)
//! synthetic planets during runaway gas accretion as a quadratic in mass
//! whose coefficients drift with the accretion rate:
//!
//! ```text
//! ℓ  = log10(Ṁ / 10⁻² M⊕/yr)
//! cᵢ = aᵢ + bᵢ ℓ + αᵢ exp(βᵢ ℓ)
//! R  = c₀ + c₁ (M − 1 MJ) + c₂ (M − 1 MJ)²     [RJ]
//! ```
//!
//! Everything is evaluated in real arithmetic: the mass offset is squared
//! with an integer power and the only fractional exponent is `exp`, so the
//! result is real for any finite mass and any positive accretion rate.
//!
//! # References
//! - Mordasini et al. (2012) - "Characterization of exoplanets from their formation. II."
//! - Aoyama, Marleau, Mordasini & Ikoma (2020) - "Spectral appearance of the
//!   planetary-surface accretion shock"

use units::{Length, Mass, MassRate};

use crate::population::Population;

/// Accretion rate the fits are centred on (M⊕/yr)
pub const REFERENCE_ACCRETION_RATE: f64 = 1e-2;

/// Mass the quadratic expansion is centred on (MJ)
pub const REFERENCE_MASS: f64 = 1.0;

/// One coefficient of the radius fit, `a + b·ℓ + α·exp(β·ℓ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTerm {
    pub offset: f64,
    pub slope: f64,
    pub amplitude: f64,
    pub rate: f64,
}

impl FitTerm {
    pub const fn new(offset: f64, slope: f64, amplitude: f64, rate: f64) -> Self {
        Self {
            offset,
            slope,
            amplitude,
            rate,
        }
    }

    /// Value of the coefficient at `ℓ = log10(Ṁ / 10⁻² M⊕/yr)`
    pub fn evaluate(&self, log_rate: f64) -> f64 {
        self.offset + self.slope * log_rate + self.amplitude * (self.rate * log_rate).exp()
    }
}

/// The three coefficients (constant, linear, quadratic in `M − 1 MJ`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusFit {
    pub terms: [FitTerm; 3],
}

pub const WARM_START_RADIUS_FIT: RadiusFit = RadiusFit {
    terms: [
        FitTerm::new(0.411, -0.244, 3.45, 0.762),
        FitTerm::new(-0.489, -0.0961, 0.652, 0.353),
        FitTerm::new(-0.228, -0.00106, 0.226, 0.000220),
    ],
};

pub const COLD_START_RADIUS_FIT: RadiusFit = RadiusFit {
    terms: [
        FitTerm::new(1.53, 0.111, 1.06, 0.906),
        FitTerm::new(-0.195, -0.0307, 0.0977, 0.000695),
        FitTerm::new(-0.250, 0.000276, 0.254, 0.000214),
    ],
};

impl RadiusFit {
    /// Radius in Jupiter radii for an accretion rate in M⊕/yr and a mass in MJ.
    pub fn evaluate(&self, accretion_rate_earth_per_year: f64, mass_jupiter: f64) -> f64 {
        let log_rate = (accretion_rate_earth_per_year / REFERENCE_ACCRETION_RATE).log10();
        let dm = mass_jupiter - REFERENCE_MASS;
        let [c0, c1, c2] = self.terms.map(|term| term.evaluate(log_rate));

        c0 + c1 * dm + c2 * dm.powi(2)
    }
}

/// Radius of an accreting planet.
///
/// Returns the fitted radius for the given accretion rate and mass of the
/// chosen population. The fit is calibrated for 1–30 MJ and
/// 10⁻⁵–2×10⁻² M⊕/yr; other inputs are extrapolated. Far above the
/// calibrated masses the quadratic term wins and the radius turns negative
/// (warm start at 10⁻² M⊕/yr crosses zero just above 100 MJ), after which
/// every quantity built on it is NaN.
///
/// # Examples
/// ```
/// use accretion_shock::{radius, Population};
/// use units::{Mass, MassRate};
///
/// let r = radius(
///     MassRate::from_earth_masses_per_year(1e-2),
///     Mass::from_jupiter_masses(1.0),
///     Population::Warm,
/// );
/// assert!((r.to_jupiter_radii() - 3.861).abs() < 1e-9);
/// ```
pub fn radius(accretion_rate: MassRate, mass: Mass, population: Population) -> Length {
    let r = population.radius_fit().evaluate(
        accretion_rate.to_earth_masses_per_year(),
        mass.to_jupiter_masses(),
    );
    Length::from_jupiter_radii(r)
}
