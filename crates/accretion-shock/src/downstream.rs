//! Fraction of the shock luminosity that travels downstream into the planet.
//!
//! Fit to the radiation-hydrodynamics shock models of Aoyama et al. (2018,
//! 2020) as a quadratic in the preshock density and velocity around
//! `log n₀ = 12` and `v₀ = 100 km/s`.

/// Fit centre in `log10(n₀ / cm⁻³)`
pub const LOG_DENSITY_CENTRE: f64 = 12.0;

/// Fit centre in infall speed (km/s)
pub const SPEED_CENTRE_KM_S: f64 = 100.0;

const A: f64 = 0.703752;
const B: f64 = -0.0967987;
const C: f64 = -0.0254579;
const D: f64 = -0.00527886;
const E: f64 = -0.00146833;
const F: f64 = -0.000321504;
const H: f64 = -9.91492e-06;

/// Unclamped downstream fraction.
///
/// # Arguments
/// * `log_density` - `log10(n₀ / cm⁻³)` of the preshock gas
/// * `speed_km_s` - infall speed in km/s (positive)
///
/// Away from the fitted region this is not a fraction: it can be negative
/// or exceed one. Use [`downstream_fraction`] for the physical value.
pub fn raw_downstream_fraction(log_density: f64, speed_km_s: f64) -> f64 {
    let x = log_density - LOG_DENSITY_CENTRE;
    let y = speed_km_s - SPEED_CENTRE_KM_S;

    A + B * x + C * x.abs().powi(2) + (D + E * x + F * x.abs().powi(2)) * y + H * y.abs().powi(2)
}

/// Downstream fraction limited to `[0, 1]`.
///
/// A NaN from the raw fit is clamped the way `fmin`/`fmax` treat it
/// (NaN operands are ignored), so the result is never NaN.
///
/// # Examples
/// ```
/// use accretion_shock::downstream_fraction;
///
/// assert!((downstream_fraction(12.0, 100.0) - 0.703752).abs() < 1e-12);
/// assert_eq!(downstream_fraction(0.0, 1e6), 0.0);
/// ```
pub fn downstream_fraction(log_density: f64, speed_km_s: f64) -> f64 {
    raw_downstream_fraction(log_density, speed_km_s).min(1.0).max(0.0)
}
