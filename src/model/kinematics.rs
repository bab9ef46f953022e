//! Two-body decay formulas used by the HVT width model.
//!
//! Mass ratios are `r = m^2 / M^2`. The phase-space root is taken in the
//! complex plane: below threshold it is purely imaginary, so the real part of
//! a closed channel's width is exactly zero.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Källén function λ(1, a, b).
pub fn kallen(a: f64, b: f64) -> f64 {
    1.0 + a * a + b * b - 2.0 * a - 2.0 * b - 2.0 * a * b
}

pub fn mass_ratio(m: f64, mass: f64) -> f64 {
    (m * m) / (mass * mass)
}

/// Width of a vector into a fermion pair through a purely left-handed current
/// with coupling `g_left`, `n_c` colours.
pub fn fermion_width(mass: f64, g_left: f64, n_c: f64, r1: f64, r2: f64) -> Complex64 {
    let root = Complex64::new(kallen(r1, r2), 0.0).sqrt();
    let shape = 1.0 - 0.5 * (r1 + r2) - 0.5 * (r1 - r2).powi(2);
    root * (n_c * g_left * g_left * mass / (24.0 * PI) * shape)
}

/// Width into a longitudinal boson pair at coupling `gh` (equivalence-theorem limit).
pub fn boson_width(mass: f64, gh: f64, r1: f64, r2: f64) -> Complex64 {
    let root = Complex64::new(kallen(r1, r2), 0.0).sqrt();
    root * root * root * (gh * gh * mass / (192.0 * PI))
}
