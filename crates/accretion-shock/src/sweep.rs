//! One-dimensional sweeps of the fits.
//!
//! A sweep varies either the accretion rate (log-spaced) or the mass
//! (linearly spaced) while the other is held fixed, and tabulates
//! `(Ṁ, M, R, T_eff)` at each sample. This is the table the radius and
//! temperature figures are drawn from.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::array::{self, Operand};
use crate::error::{FitError, FitResult};
use crate::planet::ShockParameters;
use crate::population::Population;

/// Masses (MJ) the reference figures draw one curve each for
pub const REFERENCE_MASSES: [f64; 6] = [20.0, 15.0, 10.0, 5.0, 3.0, 1.0];

/// Accretion rates (M⊕/yr) the reference figures draw one curve each for
pub const REFERENCE_ACCRETION_RATES: [f64; 5] = [2e-2, 1e-2, 1e-3, 1e-4, 1e-5];

/// Default number of samples along a sweep
pub const DEFAULT_SAMPLES: usize = 70;

/// Which input a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepAxis {
    /// Log-spaced accretion rates at fixed mass
    #[serde(rename = "mdot")]
    AccretionRate,
    /// Linearly spaced masses at fixed accretion rate
    #[serde(rename = "mp")]
    Mass,
}

impl SweepAxis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccretionRate => "Mdot",
            Self::Mass => "Mp",
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the serde names `"mdot"` and `"mp"`, case-sensitively like [`Population`].
impl FromStr for SweepAxis {
    type Err = FitError;

    fn from_str(s: &str) -> FitResult<Self> {
        match s {
            "mdot" => Ok(Self::AccretionRate),
            "mp" => Ok(Self::Mass),
            other => Err(FitError::InvalidSweepAxis(other.to_string())),
        }
    }
}

/// Description of a sweep.
///
/// `fixed` is the held input (MJ when sweeping accretion rates, M⊕/yr when
/// sweeping masses); `start` and `end` bound the swept input in its own
/// unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub axis: SweepAxis,
    pub fixed: f64,
    pub start: f64,
    pub end: f64,
    pub samples: usize,
    #[serde(default)]
    pub population: Population,
    #[serde(default)]
    pub shock: ShockParameters,
}

impl SweepConfig {
    /// Accretion rates from 10⁻⁵ to 10⁻¹ M⊕/yr at a fixed mass in MJ.
    pub fn accretion_rates(mass_jupiter: f64) -> Self {
        Self {
            axis: SweepAxis::AccretionRate,
            fixed: mass_jupiter,
            start: 1e-5,
            end: 1e-1,
            samples: DEFAULT_SAMPLES,
            population: Population::default(),
            shock: ShockParameters::default(),
        }
    }

    /// Masses from 0.5 to 20 MJ at a fixed accretion rate in M⊕/yr.
    pub fn masses(accretion_rate_earth_per_year: f64) -> Self {
        Self {
            axis: SweepAxis::Mass,
            fixed: accretion_rate_earth_per_year,
            start: 0.5,
            end: 20.0,
            samples: DEFAULT_SAMPLES,
            population: Population::default(),
            shock: ShockParameters::default(),
        }
    }

    pub fn with_population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    pub fn with_shock(mut self, shock: ShockParameters) -> Self {
        self.shock = shock;
        self
    }

    pub fn with_range(mut self, start: f64, end: f64, samples: usize) -> Self {
        self.start = start;
        self.end = end;
        self.samples = samples;
        self
    }

    /// Short label naming the axis, population and filling factor, e.g. `Mdot_warm_ffill1`
    pub fn label(&self) -> String {
        format!(
            "{}_{}_ffill{}",
            self.axis, self.population, self.shock.filling_factor
        )
    }

    /// Sample points along the swept input
    pub fn grid(&self) -> Array1<f64> {
        match self.axis {
            SweepAxis::AccretionRate => {
                Array1::logspace(10.0, self.start.log10(), self.end.log10(), self.samples)
            }
            SweepAxis::Mass => Array1::linspace(self.start, self.end, self.samples),
        }
    }

    /// Evaluates radius and effective temperature at every sample.
    ///
    /// # Examples
    /// ```
    /// use accretion_shock::sweep::SweepConfig;
    ///
    /// let rows = SweepConfig::masses(1e-3).run().unwrap();
    /// assert_eq!(rows.len(), 70);
    /// assert!(rows.iter().all(|row| row.accretion_rate == 1e-3));
    /// ```
    pub fn run(&self) -> FitResult<Vec<SweepRow>> {
        let swept = self.grid();
        let (accretion_rate, mass): (Operand<'_>, Operand<'_>) = match self.axis {
            SweepAxis::AccretionRate => ((&swept).into(), self.fixed.into()),
            SweepAxis::Mass => (self.fixed.into(), (&swept).into()),
        };

        let radii = array::radius(accretion_rate, mass, self.population)?;
        let temperatures = array::effective_temperature(
            accretion_rate,
            mass,
            self.shock.interior_temperature.to_kelvin(),
            self.population,
            self.shock.filling_factor,
        )?;

        debug!(
            axis = %self.axis,
            population = %self.population,
            samples = swept.len(),
            "evaluated sweep"
        );

        Ok(swept
            .iter()
            .zip(radii.iter().zip(temperatures.iter()))
            .map(|(&value, (&radius, &effective_temperature))| {
                let (accretion_rate, mass) = match self.axis {
                    SweepAxis::AccretionRate => (value, self.fixed),
                    SweepAxis::Mass => (self.fixed, value),
                };
                SweepRow {
                    accretion_rate,
                    mass,
                    radius,
                    effective_temperature,
                }
            })
            .collect())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::accretion_rates(REFERENCE_MASSES[0])
    }
}

/// One sample of a sweep, in M⊕/yr, MJ, RJ and K.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub accretion_rate: f64,
    pub mass: f64,
    pub radius: f64,
    pub effective_temperature: f64,
}

/// Whitespace-separated columns in scientific notation, ready for gnuplot.
impl fmt::Display for SweepRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.18e} {:.18e} {:.18e} {:.18e}",
            self.accretion_rate, self.mass, self.radius, self.effective_temperature
        )
    }
}
