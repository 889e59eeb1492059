//! Gas state just upstream of the planetary-surface accretion shock.
//!
//! Gas is taken to fall freely from far away (accretion radius ≫ Rp), so
//! it reaches the surface at the escape speed and the mass flux through the
//! shocked fraction `f_fill` of the surface fixes its density:
//!
//! ```text
//! v₀ = −√(2 G M / R)
//! ρ₀ = Ṁ / (4π R² f_fill |v₀|)
//! n₀ = ρ₀ X_H / m_H
//! ```

use serde::{Deserialize, Serialize};
use units::{Length, Mass, MassRate, NumberDensity, Velocity, VolumeDensity};

use crate::constants::{G, MASS_PER_H_NUCLEUS, PI};
use crate::population::Population;
use crate::radius::radius;

/// Free-fall velocity onto a body of the given mass and radius.
///
/// The velocity is signed: the result is negative (directed inward). A
/// non-positive radius is outside the contract and yields NaN or infinity.
///
/// # Examples
/// ```
/// use accretion_shock::free_fall_velocity;
/// use units::{Length, Mass};
///
/// let v = free_fall_velocity(Mass::from_jupiter_masses(1.0), Length::from_jupiter_radii(1.0));
/// assert!(v.to_km_per_sec() < -59.0 && v.to_km_per_sec() > -60.0);
/// ```
pub fn free_fall_velocity(mass: Mass, radius: Length) -> Velocity {
    let speed = (2.0 * G * mass.to_grams() / radius.to_cm()).sqrt();
    Velocity::from_cm_per_sec(-speed)
}

/// Free-fall velocity at the fitted radius of an accreting planet.
pub fn preshock_velocity(accretion_rate: MassRate, mass: Mass, population: Population) -> Velocity {
    free_fall_velocity(mass, radius(accretion_rate, mass, population))
}

/// Preshock gas state at the accretion shock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreshockState {
    /// Fitted planet radius the shock sits at
    pub radius: Length,
    /// Infall velocity (negative, inward)
    pub velocity: Velocity,
    /// Mass density of the incoming gas
    pub mass_density: VolumeDensity,
    /// Hydrogen-nucleus number density of the incoming gas
    pub number_density: NumberDensity,
}

impl PreshockState {
    /// Infall speed in km/s, the velocity variable shock models are tabulated in
    pub fn speed_km_per_sec(&self) -> f64 {
        self.velocity.abs().to_km_per_sec()
    }
}

/// Full preshock state for an accretion rate, mass, population and filling factor.
///
/// `filling_factor` is the fraction of the surface covered by the shock, in
/// (0, 1]. Zero is outside the contract (the density diverges).
pub fn preshock_state(
    accretion_rate: MassRate,
    mass: Mass,
    population: Population,
    filling_factor: f64,
) -> PreshockState {
    let r = radius(accretion_rate, mass, population);
    let velocity = free_fall_velocity(mass, r);

    let shock_area = 4.0 * PI * r.powi(2) * filling_factor;
    let rho = accretion_rate.to_grams_per_second() / (shock_area * velocity.abs().to_cm_per_sec());
    let mass_density = VolumeDensity::from_grams_per_cm3(rho);

    PreshockState {
        radius: r,
        velocity,
        mass_density,
        number_density: mass_density.to_number_density(MASS_PER_H_NUCLEUS),
    }
}

/// Preshock hydrogen-nucleus number density (cm⁻³).
///
/// # Examples
/// ```
/// use accretion_shock::{preshock_density, Population};
/// use units::{Mass, MassRate};
///
/// let n0 = preshock_density(
///     MassRate::from_earth_masses_per_year(1e-3),
///     Mass::from_jupiter_masses(5.0),
///     Population::Warm,
///     1.0,
/// );
/// assert!((n0.log10() - 12.39).abs() < 0.01);
/// ```
pub fn preshock_density(
    accretion_rate: MassRate,
    mass: Mass,
    population: Population,
    filling_factor: f64,
) -> NumberDensity {
    preshock_state(accretion_rate, mass, population, filling_factor).number_density
}
