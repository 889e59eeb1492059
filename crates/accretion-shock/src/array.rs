//! Element-wise evaluation for curves and tables.
//!
//! Every fit is available here over `ndarray` arrays in the units the fits
//! are quoted in: accretion rates in M⊕/yr, masses in MJ, radii in RJ,
//! temperatures in K, velocities in cm/s (negative inward), densities in
//! cm⁻³ and infall speeds in km/s.
//!
//! Each numeric argument is an [`Operand`]: a scalar or a one-dimensional
//! array. Scalars are repeated against the arrays; arrays must all have the
//! same length. Element `i` of the result is exactly what the scalar
//! function returns for element `i` of the inputs.
//!
//! ```
//! use accretion_shock::{array, Population};
//! use ndarray::Array1;
//!
//! let mdot = Array1::logspace(10.0, -5.0, -2.0, 4);
//! let radii = array::radius(&mdot, 10.0, Population::Warm).unwrap();
//! assert_eq!(radii.len(), 4);
//! ```

use ndarray::{Array1, ArrayView1};
use units::{Length, Mass, MassRate, Temperature};

use crate::error::{FitError, FitResult};
use crate::population::Population;

/// A scalar or a one-dimensional array of samples.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Array(ArrayView1<'a, f64>),
}

impl Operand<'_> {
    /// Number of samples, or `None` for a scalar
    pub fn sample_count(&self) -> Option<usize> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Array(values) => Some(values.len()),
        }
    }

    fn at(&self, index: usize) -> f64 {
        match self {
            Operand::Scalar(value) => *value,
            Operand::Array(values) => values[index],
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<ArrayView1<'a, f64>> for Operand<'a> {
    fn from(values: ArrayView1<'a, f64>) -> Self {
        Operand::Array(values)
    }
}

impl<'a> From<&'a Array1<f64>> for Operand<'a> {
    fn from(values: &'a Array1<f64>) -> Self {
        Operand::Array(values.view())
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(values: &'a [f64]) -> Self {
        Operand::Array(ArrayView1::from(values))
    }
}

/// Shared length of the array operands; 1 when all are scalars.
fn common_len(operands: &[Operand<'_>]) -> FitResult<usize> {
    let mut common = None;
    for found in operands.iter().filter_map(Operand::sample_count) {
        match common {
            None => common = Some(found),
            Some(expected) if expected != found => {
                return Err(FitError::ShapeMismatch { expected, found });
            }
            Some(_) => {}
        }
    }
    Ok(common.unwrap_or(1))
}

fn elementwise<const N: usize>(
    operands: [Operand<'_>; N],
    f: impl Fn([f64; N]) -> f64,
) -> FitResult<Array1<f64>> {
    let len = common_len(&operands)?;
    Ok(Array1::from_shape_fn(len, |i| f(operands.map(|operand| operand.at(i)))))
}

fn rate(mdot: f64) -> MassRate {
    MassRate::from_earth_masses_per_year(mdot)
}

fn mass(mp: f64) -> Mass {
    Mass::from_jupiter_masses(mp)
}

/// Radius (RJ)
pub fn radius<'a>(
    accretion_rate: impl Into<Operand<'a>>,
    mass_jupiter: impl Into<Operand<'a>>,
    population: Population,
) -> FitResult<Array1<f64>> {
    elementwise([accretion_rate.into(), mass_jupiter.into()], |[mdot, mp]| {
        crate::radius::radius(rate(mdot), mass(mp), population).to_jupiter_radii()
    })
}

/// Free-fall velocity (cm/s, negative) for masses in MJ and radii in RJ
pub fn free_fall_velocity<'a>(
    mass_jupiter: impl Into<Operand<'a>>,
    radius_jupiter: impl Into<Operand<'a>>,
) -> FitResult<Array1<f64>> {
    elementwise([mass_jupiter.into(), radius_jupiter.into()], |[mp, rp]| {
        crate::shock::free_fall_velocity(mass(mp), Length::from_jupiter_radii(rp)).to_cm_per_sec()
    })
}

/// Free-fall velocity at the fitted radius (cm/s, negative)
pub fn preshock_velocity<'a>(
    accretion_rate: impl Into<Operand<'a>>,
    mass_jupiter: impl Into<Operand<'a>>,
    population: Population,
) -> FitResult<Array1<f64>> {
    elementwise([accretion_rate.into(), mass_jupiter.into()], |[mdot, mp]| {
        crate::shock::preshock_velocity(rate(mdot), mass(mp), population).to_cm_per_sec()
    })
}

/// Preshock hydrogen-nucleus number density (cm⁻³)
pub fn preshock_density<'a>(
    accretion_rate: impl Into<Operand<'a>>,
    mass_jupiter: impl Into<Operand<'a>>,
    population: Population,
    filling_factor: impl Into<Operand<'a>>,
) -> FitResult<Array1<f64>> {
    elementwise(
        [accretion_rate.into(), mass_jupiter.into(), filling_factor.into()],
        |[mdot, mp, ffill]| {
            crate::shock::preshock_density(rate(mdot), mass(mp), population, ffill).to_per_cm3()
        },
    )
}

/// Downstream fraction in `[0, 1]` from `log10(n₀ / cm⁻³)` and the infall speed in km/s
pub fn downstream_fraction<'a>(
    log_density: impl Into<Operand<'a>>,
    speed_km_s: impl Into<Operand<'a>>,
) -> FitResult<Array1<f64>> {
    elementwise([log_density.into(), speed_km_s.into()], |[x, y]| {
        crate::downstream::downstream_fraction(x, y)
    })
}

/// Unclamped downstream fraction
pub fn raw_downstream_fraction<'a>(
    log_density: impl Into<Operand<'a>>,
    speed_km_s: impl Into<Operand<'a>>,
) -> FitResult<Array1<f64>> {
    elementwise([log_density.into(), speed_km_s.into()], |[x, y]| {
        crate::downstream::raw_downstream_fraction(x, y)
    })
}

/// Accretion luminosity (erg/s)
pub fn accretion_luminosity<'a>(
    accretion_rate: impl Into<Operand<'a>>,
    mass_jupiter: impl Into<Operand<'a>>,
    population: Population,
) -> FitResult<Array1<f64>> {
    elementwise([accretion_rate.into(), mass_jupiter.into()], |[mdot, mp]| {
        crate::temperature::accretion_luminosity(rate(mdot), mass(mp), population)
    })
}

/// Accretion temperature (K)
pub fn accretion_temperature<'a>(
    accretion_rate: impl Into<Operand<'a>>,
    mass_jupiter: impl Into<Operand<'a>>,
    population: Population,
    filling_factor: impl Into<Operand<'a>>,
) -> FitResult<Array1<f64>> {
    elementwise(
        [accretion_rate.into(), mass_jupiter.into(), filling_factor.into()],
        |[mdot, mp, ffill]| {
            crate::temperature::accretion_temperature(rate(mdot), mass(mp), population, ffill)
                .to_kelvin()
        },
    )
}

/// Effective temperature of the accreting hot spot (K)
pub fn effective_temperature<'a>(
    accretion_rate: impl Into<Operand<'a>>,
    mass_jupiter: impl Into<Operand<'a>>,
    interior_temperature: impl Into<Operand<'a>>,
    population: Population,
    filling_factor: impl Into<Operand<'a>>,
) -> FitResult<Array1<f64>> {
    elementwise(
        [
            accretion_rate.into(),
            mass_jupiter.into(),
            interior_temperature.into(),
            filling_factor.into(),
        ],
        |[mdot, mp, tint, ffill]| {
            crate::temperature::effective_temperature(
                rate(mdot),
                mass(mp),
                Temperature::from_kelvin(tint),
                population,
                ffill,
            )
            .to_kelvin()
        },
    )
}
