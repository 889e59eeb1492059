/// Gravitational constant (cm³/(g·s²)), at the precision the fits were made with
pub const G: f64 = 6.67e-8;

/// Stefan–Boltzmann constant (erg/(cm²·s·K⁴))
pub const SIGMA_SB: f64 = 5.67e-5;

/// Hydrogen atom mass (g)
pub const M_H: f64 = 1.673e-24;

/// Hydrogen mass fraction of the infalling gas
pub const X_H: f64 = 0.738;

/// Gas mass per hydrogen nucleus (g)
pub const MASS_PER_H_NUCLEUS: f64 = M_H / X_H;

/// Pi
pub const PI: f64 = std::f64::consts::PI;
