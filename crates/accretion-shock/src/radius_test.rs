//! Tests for the radius fit

use approx::assert_relative_eq;
use units::{Mass, MassRate};

use crate::population::Population;
use crate::radius::{radius, FitTerm, COLD_START_RADIUS_FIT, WARM_START_RADIUS_FIT};

fn fitted(mdot: f64, mp: f64, population: Population) -> f64 {
    radius(
        MassRate::from_earth_masses_per_year(mdot),
        Mass::from_jupiter_masses(mp),
        population,
    )
    .to_jupiter_radii()
}

// ========== Reference Values ==========

#[test]
fn test_warm_radius_at_fit_centre() {
    // log(Mdot/1e-2) = 0 and Mp - 1 = 0 leave only a + α
    assert_relative_eq!(fitted(1e-2, 1.0, Population::Warm), 0.411 + 3.45, max_relative = 1e-12);
    assert_relative_eq!(fitted(1e-2, 1.0, Population::Warm), 3.861, max_relative = 1e-12);
}

#[test]
fn test_cold_radius_at_fit_centre() {
    assert_relative_eq!(fitted(1e-2, 1.0, Population::Cold), 2.59, max_relative = 1e-12);
}

#[test]
fn test_radius_reference_grid() {
    let cases = [
        (1e-3, 5.0, Population::Warm, 2.5101113874146037),
        (1e-3, 5.0, Population::Cold, 1.6394286835587963),
        (1e-5, 20.0, Population::Warm, 2.348809194386232),
        (1e-5, 20.0, Population::Cold, 2.250544024932816),
        (2e-2, 30.0, Population::Warm, 8.747209641234914),
        (2e-2, 30.0, Population::Cold, 3.314298277043272),
        (1e-4, 10.0, Population::Warm, 1.8775420799664033),
    ];

    for (mdot, mp, population, expected) in cases {
        assert_relative_eq!(fitted(mdot, mp, population), expected, max_relative = 1e-10);
    }
}

// ========== Coefficient Tables ==========

#[test]
fn test_fit_term_evaluation() {
    let term = FitTerm::new(1.0, 2.0, 3.0, 0.5);
    assert_relative_eq!(term.evaluate(0.0), 4.0);
    assert_relative_eq!(term.evaluate(2.0), 1.0 + 4.0 + 3.0 * 1f64.exp(), max_relative = 1e-15);
}

#[test]
fn test_population_selects_coefficients() {
    assert_eq!(Population::Warm.radius_fit(), &WARM_START_RADIUS_FIT);
    assert_eq!(Population::Cold.radius_fit(), &COLD_START_RADIUS_FIT);
    assert_eq!(WARM_START_RADIUS_FIT.terms[0], FitTerm::new(0.411, -0.244, 3.45, 0.762));
    assert_eq!(COLD_START_RADIUS_FIT.terms[2], FitTerm::new(-0.250, 0.000276, 0.254, 0.000214));
}

#[test]
fn test_quadratic_in_mass_offset() {
    // At the fit centre the curve is c0 + c1 x + c2 x² with exactly the summed coefficients
    let [c0, c1, c2] = WARM_START_RADIUS_FIT.terms.map(|t| t.offset + t.amplitude);
    for mp in [1.0, 2.0, 7.5, 30.0] {
        let dm = mp - 1.0;
        assert_relative_eq!(
            fitted(1e-2, mp, Population::Warm),
            c0 + c1 * dm + c2 * dm * dm,
            max_relative = 1e-12
        );
    }
}

// ========== Physical Behaviour ==========

#[test]
fn test_warm_start_planets_are_larger_at_high_accretion() {
    for mp in [1.0, 5.0, 10.0, 20.0] {
        assert!(
            fitted(1e-2, mp, Population::Warm) > fitted(1e-2, mp, Population::Cold),
            "warm radius should exceed cold at {} MJ",
            mp
        );
    }
}

#[test]
fn test_radius_grows_with_accretion_rate_at_one_jupiter_mass() {
    let rates = [1e-5, 1e-4, 1e-3, 1e-2, 2e-2];
    for population in Population::ALL {
        let radii: Vec<f64> = rates.iter().map(|&m| fitted(m, 1.0, population)).collect();
        assert!(radii.windows(2).all(|w| w[1] > w[0]), "{population}: {radii:?}");
    }
}

#[test]
fn test_extrapolation_stays_real() {
    // Well outside the calibrated range the fit extrapolates instead of failing
    for population in Population::ALL {
        for mdot in [1e-9, 1e-1, 1.0] {
            for mp in [-5.0, 0.1, 50.0, 100.0] {
                let r = fitted(mdot, mp, population);
                assert!(r.is_finite(), "{population} Mdot={mdot} Mp={mp} gave {r}");
            }
        }
    }
    assert_relative_eq!(fitted(1e-2, 50.0, Population::Warm), 7.046, max_relative = 1e-9);
    assert_relative_eq!(fitted(1e-2, 100.0, Population::Cold), 32.1613, max_relative = 1e-9);
}

#[test]
fn test_radius_turns_negative_far_above_calibrated_masses() {
    assert_relative_eq!(fitted(1e-2, 100.0, Population::Warm), 0.396, max_relative = 1e-9);
    assert_relative_eq!(fitted(1e-2, 150.0, Population::Warm), -16.254, max_relative = 1e-9);

    let heavy = Mass::from_jupiter_masses(150.0);
    let r = radius(MassRate::from_earth_masses_per_year(1e-2), heavy, Population::Warm);
    let v = crate::shock::free_fall_velocity(heavy, r);
    assert!(v.to_cm_per_sec().is_nan());
}
