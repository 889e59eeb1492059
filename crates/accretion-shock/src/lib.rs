//! Radius and hot-spot effective temperature of accreting giant planets.
//!
//! Closed-form fits from Aoyama, Marleau, Mordasini & Ikoma (2020) to the
//! warm- and cold-start populations of Mordasini et al. (2012). The
//! quantities build on each other:
//!
//! ```text
//! radius ─► free-fall velocity ─► preshock density ─┬─► downstream fraction ─┐
//!    └──────────────────────────► accretion temperature ─────────────────────┴─► effective temperature
//! ```
//!
//! The scalar functions take typed quantities from the `units` crate; the
//! [`array`] module evaluates the same functions element-wise over sample
//! arrays in conventional units, and [`sweep`] tabulates one-dimensional
//! sweeps.
//!
//! The fits are calibrated for 1 MJ ≤ M ≤ 30 MJ and
//! 10⁻⁵ M⊕/yr ≤ Ṁ ≤ 2×10⁻² M⊕/yr; see [`FitDomain`].
//!
//! ```
//! use accretion_shock::{AccretingPlanet, Population, ShockParameters};
//! use units::{Mass, MassRate};
//!
//! let planet = AccretingPlanet::new(
//!     MassRate::from_earth_masses_per_year(1e-2),
//!     Mass::from_jupiter_masses(10.0),
//!     Population::Warm,
//! );
//! let profile = planet.shock_profile(&ShockParameters::default());
//! assert!(profile.effective_temperature.to_kelvin() > 1000.0);
//! ```

pub mod array;
pub mod constants;
mod domain;
mod downstream;
mod error;
mod planet;
mod population;
mod radius;
mod shock;
pub mod sweep;
mod temperature;

#[cfg(test)]
mod planet_test;
#[cfg(test)]
mod radius_test;
#[cfg(test)]
mod shock_test;

pub use domain::FitDomain;
pub use downstream::{downstream_fraction, raw_downstream_fraction};
pub use error::{FitError, FitResult};
pub use planet::{AccretingPlanet, ShockParameters, ShockProfile};
pub use population::Population;
pub use radius::{radius, FitTerm, RadiusFit, COLD_START_RADIUS_FIT, WARM_START_RADIUS_FIT};
pub use shock::{free_fall_velocity, preshock_density, preshock_state, preshock_velocity, PreshockState};
pub use temperature::{accretion_luminosity, accretion_temperature, effective_temperature};
