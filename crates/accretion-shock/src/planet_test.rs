mod tests {
    use approx::assert_relative_eq;
    use units::{Mass, MassRate, Temperature};

    use crate::domain::FitDomain;
    use crate::error::FitError;
    use crate::planet::{AccretingPlanet, ShockParameters};
    use crate::population::Population;
    use crate::radius::radius;
    use crate::temperature::effective_temperature;

    #[test]
    fn test_from_conventional_units() {
        let planet = AccretingPlanet::from_conventional_units(1e-3, 5.0, "warm").unwrap();
        assert_relative_eq!(planet.accretion_rate.to_earth_masses_per_year(), 1e-3, max_relative = 1e-15);
        assert_relative_eq!(planet.mass.to_jupiter_masses(), 5.0, max_relative = 1e-15);
        assert_eq!(planet.population, Population::Warm);
    }

    #[test]
    fn test_invalid_population_propagates() {
        let result = AccretingPlanet::from_conventional_units(1e-3, 5.0, "hot");
        assert_eq!(result, Err(FitError::InvalidPopulation("hot".to_string())));
    }

    #[test]
    fn test_default_shock_parameters() {
        let shock = ShockParameters::default();
        assert_eq!(shock.filling_factor, 1.0);
        assert_eq!(shock.interior_temperature, Temperature::from_kelvin(1000.0));

        // Missing fields fall back to the defaults
        let partial: ShockParameters = serde_json::from_str(r#"{"filling_factor": 0.1}"#).unwrap();
        assert_eq!(partial, ShockParameters::new(0.1, Temperature::from_kelvin(1000.0)));
    }

    #[test]
    fn test_shock_profile_matches_individual_functions() {
        let planet = AccretingPlanet::new(
            MassRate::from_earth_masses_per_year(1e-3),
            Mass::from_jupiter_masses(5.0),
            Population::Cold,
        );
        let shock = ShockParameters::new(0.1, Temperature::from_kelvin(1000.0));
        let profile = planet.shock_profile(&shock);

        assert_eq!(profile.preshock.radius, radius(planet.accretion_rate, planet.mass, Population::Cold));
        assert_eq!(profile.preshock, planet.preshock(0.1));
        assert_eq!(
            profile.effective_temperature,
            effective_temperature(
                planet.accretion_rate,
                planet.mass,
                shock.interior_temperature,
                Population::Cold,
                0.1
            )
        );
        assert_relative_eq!(profile.downstream_fraction, 0.437523100280352, max_relative = 1e-10);
        assert_relative_eq!(profile.accretion_temperature.to_kelvin(), 5684.4507229697665, max_relative = 1e-10);
        assert_relative_eq!(profile.effective_temperature.to_kelvin(), 4625.686125099482, max_relative = 1e-10);
        assert_relative_eq!(profile.accretion_luminosity, 1.0222193302554766e31, max_relative = 1e-10);
        assert_eq!(profile.preshock.velocity, planet.preshock_velocity());
    }

    #[test]
    fn test_profile_serializes() {
        let planet = AccretingPlanet::from_conventional_units(1e-2, 10.0, "warm").unwrap();
        let profile = planet.shock_profile(&ShockParameters::default());
        let json = serde_json::to_value(profile).unwrap();
        assert!(json["preshock"]["number_density"].as_f64().unwrap() > 1e12);
        assert!(json["effective_temperature"].as_f64().unwrap() > 2600.0);
    }

    #[test]
    fn test_fit_domain() {
        let inside = AccretingPlanet::from_conventional_units(1e-3, 5.0, "warm").unwrap();
        assert!(inside.in_fit_domain());

        let edges = AccretingPlanet::from_conventional_units(2e-2, 30.0, "cold").unwrap();
        assert!(edges.in_fit_domain());
        let low_edges = AccretingPlanet::from_conventional_units(1e-5, 1.0, "cold").unwrap();
        assert!(low_edges.in_fit_domain());

        let too_fast = AccretingPlanet::from_conventional_units(1e-1, 5.0, "warm").unwrap();
        assert!(!too_fast.in_fit_domain());
        let too_light = AccretingPlanet::from_conventional_units(1e-3, 0.5, "warm").unwrap();
        assert!(!too_light.in_fit_domain());

        // Extrapolation still evaluates
        let profile = too_fast.shock_profile(&ShockParameters::default());
        assert!(profile.effective_temperature.to_kelvin().is_finite());

        assert_eq!(FitDomain::default(), FitDomain::NOMINAL);
        assert!(FitDomain::NOMINAL.contains_mass(Mass::from_jupiter_masses(15.0)));
        assert!(!FitDomain::NOMINAL.contains_accretion_rate(MassRate::from_earth_masses_per_year(1e-6)));
    }
}
