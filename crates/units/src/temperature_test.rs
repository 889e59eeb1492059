mod tests {
    use approx::assert_relative_eq;

    use crate::temperature::Temperature;

    const SIGMA_SB: f64 = 5.67e-5;

    #[test]
    fn test_flux_round_trip() {
        let t = Temperature::from_kelvin(2500.0);
        let flux = t.to_flux(SIGMA_SB);
        assert_relative_eq!(flux, SIGMA_SB * 2500.0_f64.powi(4), max_relative = 1e-15);

        let back = Temperature::from_flux(flux, SIGMA_SB);
        assert_relative_eq!(back.to_kelvin(), 2500.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fluxes_add_not_temperatures() {
        // Two equal fluxes raise T by 2^(1/4), not by a factor of two
        let t = Temperature::from_kelvin(1000.0);
        let combined = Temperature::from_flux(2.0 * t.to_flux(SIGMA_SB), SIGMA_SB);
        assert_relative_eq!(combined.to_kelvin(), 1000.0 * 2f64.powf(0.25), max_relative = 1e-12);
    }

    #[test]
    fn test_zero_flux_is_zero_kelvin() {
        assert_eq!(Temperature::from_flux(0.0, SIGMA_SB).to_kelvin(), 0.0);
        assert_eq!(Temperature::from_kelvin(10.0).powi(4), 1e4);
    }
}
