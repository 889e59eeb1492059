//! Accretion and effective temperature of the accreting hot spot.
//!
//! The infalling gas carries the accretion luminosity `L = G M Ṁ / R` onto
//! a fraction `f_fill` of the surface. Spreading it over that area defines
//! the accretion temperature
//!
//! ```text
//! σ T_acc⁴ = L / (4π R² f_fill)
//! ```
//!
//! Only the downstream fraction `f_down` of it heats the photosphere under
//! the shock, on top of the interior flux:
//!
//! ```text
//! T_eff⁴ = T_int⁴ + f_down T_acc⁴
//! ```
//!
//! `σ` here is the Stefan–Boltzmann constant, not `4σ/c`: `T_acc` is an
//! effective temperature, not a gas temperature (Marleau et al. 2019).

use units::{Mass, MassRate, Temperature};

use crate::constants::{G, PI, SIGMA_SB};
use crate::downstream::downstream_fraction;
use crate::population::Population;
use crate::radius::radius;
use crate::shock::preshock_state;

/// Accretion luminosity `G M Ṁ / R` in erg/s at the fitted radius.
pub fn accretion_luminosity(accretion_rate: MassRate, mass: Mass, population: Population) -> f64 {
    let r = radius(accretion_rate, mass, population);
    G * mass.to_grams() * accretion_rate.to_grams_per_second() / r.to_cm()
}

/// Temperature at which the hot spot would radiate the whole accretion
/// luminosity.
///
/// The rest of the surface emits at the interior temperature only.
pub fn accretion_temperature(
    accretion_rate: MassRate,
    mass: Mass,
    population: Population,
    filling_factor: f64,
) -> Temperature {
    let r = radius(accretion_rate, mass, population);
    let flux = G * mass.to_grams() * accretion_rate.to_grams_per_second()
        / (filling_factor * 4.0 * PI * r.powi(3));

    Temperature::from_flux(flux, SIGMA_SB)
}

/// Effective temperature of the heated photosphere under the accretion shock.
///
/// Combines the interior flux with the share of the accretion flux that the
/// shock sends downstream. Never below `interior_temperature`.
///
/// Breaks down for vanishing filling factors: once `n₀` overflows to
/// infinity (`filling_factor` below about 10⁻³⁰⁰) the downstream fraction
/// clamps to 1 instead of 0 and the result is infinite rather than
/// `interior_temperature`.
///
/// # Examples
/// ```
/// use accretion_shock::{effective_temperature, Population};
/// use units::{Mass, MassRate, Temperature};
///
/// let teff = effective_temperature(
///     MassRate::from_earth_masses_per_year(1e-3),
///     Mass::from_jupiter_masses(5.0),
///     Temperature::from_kelvin(1000.0),
///     Population::Warm,
///     1.0,
/// );
/// assert!((teff.to_kelvin() - 2188.4).abs() < 0.1);
/// ```
pub fn effective_temperature(
    accretion_rate: MassRate,
    mass: Mass,
    interior_temperature: Temperature,
    population: Population,
    filling_factor: f64,
) -> Temperature {
    let preshock = preshock_state(accretion_rate, mass, population, filling_factor);
    let f_down = downstream_fraction(preshock.number_density.log10(), preshock.speed_km_per_sec());
    let t_acc = accretion_temperature(accretion_rate, mass, population, filling_factor);

    Temperature::from_kelvin((interior_temperature.powi(4) + f_down * t_acc.powi(4)).powf(0.25))
}
