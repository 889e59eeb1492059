mod tests {
    use approx::assert_relative_eq;
    use units::{Length, Mass, MassRate};

    use crate::constants::{MASS_PER_H_NUCLEUS, PI};
    use crate::population::Population;
    use crate::radius::radius;
    use crate::shock::{free_fall_velocity, preshock_density, preshock_state, preshock_velocity};

    fn rate(mdot: f64) -> MassRate {
        MassRate::from_earth_masses_per_year(mdot)
    }

    fn mass(mp: f64) -> Mass {
        Mass::from_jupiter_masses(mp)
    }

    #[test]
    fn test_free_fall_velocity_reference_values() {
        let v = free_fall_velocity(mass(1.0), Length::from_jupiter_radii(1.0));
        assert_relative_eq!(v.to_cm_per_sec(), -5950767.712122224, max_relative = 1e-12);

        let v = free_fall_velocity(mass(10.0), Length::from_jupiter_radii(2.0));
        assert_relative_eq!(v.to_cm_per_sec(), -13306321.12261619, max_relative = 1e-12);
    }

    #[test]
    fn test_free_fall_velocity_points_inward_and_slows_with_radius() {
        let m = mass(5.0);
        let mut previous = f64::INFINITY;
        for rj in [0.5, 1.0, 1.5, 2.0, 4.0, 8.0] {
            let v = free_fall_velocity(m, Length::from_jupiter_radii(rj));
            assert!(v.to_cm_per_sec() < 0.0);
            let speed = v.abs().to_cm_per_sec();
            assert!(speed < previous, "speed should drop with radius, {rj} RJ");
            previous = speed;
        }
    }

    #[test]
    fn test_preshock_velocity_uses_fitted_radius() {
        let v = preshock_velocity(rate(1e-3), mass(5.0), Population::Warm);
        assert_relative_eq!(v.to_cm_per_sec(), -8398689.064257598, max_relative = 1e-10);

        let r = radius(rate(1e-3), mass(5.0), Population::Warm);
        assert_eq!(v, free_fall_velocity(mass(5.0), r));
    }

    #[test]
    fn test_preshock_density_reference_values() {
        let n = preshock_density(rate(1e-3), mass(5.0), Population::Warm, 1.0);
        assert_relative_eq!(n.to_per_cm3(), 2456357622148.73, max_relative = 1e-10);

        let n = preshock_density(rate(1e-3), mass(5.0), Population::Cold, 0.1);
        assert_relative_eq!(n.to_per_cm3(), 46536347435686.05, max_relative = 1e-10);
    }

    #[test]
    fn test_density_scales_inversely_with_filling_factor() {
        let full = preshock_density(rate(1e-4), mass(3.0), Population::Warm, 1.0);
        let tenth = preshock_density(rate(1e-4), mass(3.0), Population::Warm, 0.1);
        assert_relative_eq!(tenth.to_per_cm3() / full.to_per_cm3(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_preshock_state_conserves_mass_flux() {
        let mdot = rate(2e-3);
        let state = preshock_state(mdot, mass(8.0), Population::Cold, 0.3);

        // Ṁ = 4π R² f ρ |v|
        let flux = 4.0
            * PI
            * state.radius.powi(2)
            * 0.3
            * state.mass_density.to_grams_per_cm3()
            * state.velocity.abs().to_cm_per_sec();
        assert_relative_eq!(flux, mdot.to_grams_per_second(), max_relative = 1e-12);

        assert_relative_eq!(
            state.number_density.to_per_cm3() * MASS_PER_H_NUCLEUS,
            state.mass_density.to_grams_per_cm3(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            state.speed_km_per_sec(),
            -state.velocity.to_cm_per_sec() / 1e5,
            max_relative = 1e-15
        );
    }
}
