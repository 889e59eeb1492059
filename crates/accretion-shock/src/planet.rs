//! Planet-level view of the fit chain.
//!
//! [`AccretingPlanet`] bundles the accretion rate, mass and population once
//! so that callers interested in several quantities do not have to repeat
//! them, and [`AccretingPlanet::shock_profile`] evaluates the whole chain in
//! one go.

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Length, Mass, MassRate, Temperature, Velocity};

use crate::domain::FitDomain;
use crate::downstream::downstream_fraction;
use crate::error::FitResult;
use crate::population::Population;
use crate::radius::radius;
use crate::shock::{preshock_state, preshock_velocity, PreshockState};
use crate::temperature::{accretion_luminosity, accretion_temperature, effective_temperature};

/// Shock geometry and interior state that are not part of the fits.
///
/// Defaults are a shock covering the whole surface and a 1000 K interior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockParameters {
    /// Fraction of the surface covered by the accretion shock, in (0, 1]
    pub filling_factor: f64,
    /// Temperature the non-accreting surface radiates at
    pub interior_temperature: Temperature,
}

impl ShockParameters {
    pub fn new(filling_factor: f64, interior_temperature: Temperature) -> Self {
        Self {
            filling_factor,
            interior_temperature,
        }
    }
}

impl Default for ShockParameters {
    fn default() -> Self {
        Self {
            filling_factor: 1.0,
            interior_temperature: Temperature::from_kelvin(1000.0),
        }
    }
}

/// A forming giant planet in its runaway gas-accretion phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccretingPlanet {
    pub accretion_rate: MassRate,
    pub mass: Mass,
    pub population: Population,
}

/// Every quantity of the fit chain for one planet and shock configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShockProfile {
    pub preshock: PreshockState,
    pub downstream_fraction: f64,
    /// Accretion luminosity (erg/s)
    pub accretion_luminosity: f64,
    pub accretion_temperature: Temperature,
    pub effective_temperature: Temperature,
}

impl AccretingPlanet {
    pub fn new(accretion_rate: MassRate, mass: Mass, population: Population) -> Self {
        Self {
            accretion_rate,
            mass,
            population,
        }
    }

    /// Builds a planet from an accretion rate in M⊕/yr, a mass in MJ and a
    /// population name.
    ///
    /// # Examples
    /// ```
    /// use accretion_shock::{AccretingPlanet, FitError};
    ///
    /// let planet = AccretingPlanet::from_conventional_units(1e-2, 1.0, "cold").unwrap();
    /// assert!((planet.radius().to_jupiter_radii() - 2.59).abs() < 1e-9);
    ///
    /// let err = AccretingPlanet::from_conventional_units(1e-3, 5.0, "hot").unwrap_err();
    /// assert_eq!(err, FitError::InvalidPopulation("hot".to_string()));
    /// ```
    pub fn from_conventional_units(
        accretion_rate_earth_per_year: f64,
        mass_jupiter: f64,
        population: &str,
    ) -> FitResult<Self> {
        Ok(Self::new(
            MassRate::from_earth_masses_per_year(accretion_rate_earth_per_year),
            Mass::from_jupiter_masses(mass_jupiter),
            population.parse()?,
        ))
    }

    /// Whether the planet lies inside the range the fits were calibrated on
    pub fn in_fit_domain(&self) -> bool {
        FitDomain::NOMINAL.contains(self.accretion_rate, self.mass)
    }

    pub fn radius(&self) -> Length {
        radius(self.accretion_rate, self.mass, self.population)
    }

    pub fn preshock_velocity(&self) -> Velocity {
        preshock_velocity(self.accretion_rate, self.mass, self.population)
    }

    pub fn preshock(&self, filling_factor: f64) -> PreshockState {
        preshock_state(self.accretion_rate, self.mass, self.population, filling_factor)
    }

    pub fn accretion_luminosity(&self) -> f64 {
        accretion_luminosity(self.accretion_rate, self.mass, self.population)
    }

    pub fn accretion_temperature(&self, filling_factor: f64) -> Temperature {
        accretion_temperature(self.accretion_rate, self.mass, self.population, filling_factor)
    }

    pub fn effective_temperature(&self, shock: &ShockParameters) -> Temperature {
        effective_temperature(
            self.accretion_rate,
            self.mass,
            shock.interior_temperature,
            self.population,
            shock.filling_factor,
        )
    }

    /// Evaluates the full chain: preshock state, downstream fraction,
    /// luminosity and temperatures.
    pub fn shock_profile(&self, shock: &ShockParameters) -> ShockProfile {
        if !self.in_fit_domain() {
            debug!(
                accretion_rate = self.accretion_rate.to_earth_masses_per_year(),
                mass = self.mass.to_jupiter_masses(),
                population = %self.population,
                "extrapolating outside the calibrated fit domain"
            );
        }

        let preshock = self.preshock(shock.filling_factor);

        ShockProfile {
            preshock,
            downstream_fraction: downstream_fraction(
                preshock.number_density.log10(),
                preshock.speed_km_per_sec(),
            ),
            accretion_luminosity: self.accretion_luminosity(),
            accretion_temperature: self.accretion_temperature(shock.filling_factor),
            effective_temperature: self.effective_temperature(shock),
        }
    }
}
