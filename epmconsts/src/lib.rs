use std::f64;
use types::c64;

// units : energy

pub const RY_TO_EV: f64 = 13.605698066;

// free-electron dispersion : hbar^2 / (2 m_e) in eV * angstrom^2

pub const HBAR2_OVER_2ME: f64 = 3.80998212;

//

pub const ZERO_C64: c64 = c64 { re: 0.0, im: 0.0 };

// pi

pub const PI: f64 = f64::consts::PI;
pub const TWOPI: f64 = 2.0 * f64::consts::PI;

// numerical convergence

pub const EPS12: f64 = 1E-12;

// console layout

pub const OUT_WIDTH1: usize = 24;
pub const OUT_WIDTH2: usize = 16;
