//! Typed CGS physical quantities.
//!
//! Every quantity stores its CGS base unit internally and offers constructors
//! and read-outs in the astronomical units planet-formation work is quoted in
//! (Jupiter masses and radii, Earth masses per year, km/s).

pub mod length;
pub mod mass;
pub mod mass_rate;
pub mod number_density;
pub mod temperature;
pub mod velocity;
pub mod volume_density;

#[cfg(test)]
mod temperature_test;

pub use length::{Length, JUPITER_RADIUS_CM};
pub use mass::{Mass, JUPITER_MASS_G};
pub use mass_rate::{MassRate, EARTH_MASS_PER_YEAR_G_S};
pub use number_density::NumberDensity;
pub use temperature::Temperature;
pub use velocity::Velocity;
pub use volume_density::VolumeDensity;
