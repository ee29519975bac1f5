//! Empirical pseudopotential form factors.
//!
//! The crystal potential of a diamond or zinc-blende solid is expanded on the
//! reciprocal lattice. With the origin placed at the centre of the two-atom
//! basis only the shells |G|^2 = 3, 4, 8, 11 (in units of (2pi/a)^2) carry a
//! form factor; each shell has a symmetric part (average of the two atoms) and
//! an antisymmetric part (half their difference).

mod material;
pub use material::*;

use epmconsts::*;
use types::c64;
use vector3::*;

/// The |G|^2 shells that carry a form factor.
pub const FORM_FACTOR_SHELLS: [i32; 4] = [3, 4, 8, 11];

/// Symmetric and antisymmetric form factors of one atom pair, in eV.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pseudopotential {
    v3s: f64,
    v4s: f64,
    v8s: f64,
    v11s: f64,
    v3a: f64,
    v4a: f64,
    v8a: f64,
    v11a: f64,
}

impl Pseudopotential {
    #[allow(clippy::too_many_arguments)]
    pub fn new(v3s: f64, v4s: f64, v8s: f64, v11s: f64, v3a: f64, v4a: f64, v8a: f64, v11a: f64) -> Pseudopotential {
        Pseudopotential {
            v3s,
            v4s,
            v8s,
            v11s,
            v3a,
            v4a,
            v8a,
            v11a,
        }
    }

    /// Same argument order as `new`, values in Rydberg.
    #[allow(clippy::too_many_arguments)]
    pub fn from_rydberg(
        v3s: f64,
        v4s: f64,
        v8s: f64,
        v11s: f64,
        v3a: f64,
        v4a: f64,
        v8a: f64,
        v11a: f64,
    ) -> Pseudopotential {
        Pseudopotential::new(
            v3s * RY_TO_EV,
            v4s * RY_TO_EV,
            v8s * RY_TO_EV,
            v11s * RY_TO_EV,
            v3a * RY_TO_EV,
            v4a * RY_TO_EV,
            v8a * RY_TO_EV,
            v11a * RY_TO_EV,
        )
    }

    /// `(VS, VA)` of the shell `g2`; zero outside the four tabulated shells.
    pub fn form_factors(&self, g2: i32) -> (f64, f64) {
        match g2 {
            3 => (self.v3s, self.v3a),
            4 => (self.v4s, self.v4a),
            8 => (self.v8s, self.v8a),
            11 => (self.v11s, self.v11a),
            _ => (0.0, 0.0),
        }
    }

    /// Structure-factor weighted form factor of the atom pair sitting at
    /// `+tau` / `-tau`:
    ///
    /// V(G) = cos(G.tau) VS(|G|^2) + i sin(G.tau) VA(|G|^2),  G.tau = (2pi/a) tau.G
    ///
    /// `g` is in units of 2pi/a, `tau` in the length unit of `lattice_constant`.
    pub fn get_value(&self, g: Vector3i32, tau: Vector3f64, lattice_constant: f64) -> c64 {
        let g2 = g.norm_squared();

        let (vs, va) = self.form_factors(g2);

        let gtau = (TWOPI / lattice_constant) * utility::dot_product_v3i32_v3f64(g, tau);

        c64::new(gtau.cos() * vs, gtau.sin() * va)
    }

    pub fn is_centrosymmetric(&self) -> bool {
        self.v3a == 0.0 && self.v4a == 0.0 && self.v8a == 0.0 && self.v11a == 0.0
    }

    pub fn display(&self) {
        println!("   {:-^40}", " form factors (eV) ");

        for &g2 in FORM_FACTOR_SHELLS.iter() {
            let (vs, va) = self.form_factors(g2);

            println!(
                "   {:>6} = {:>12.6}   {:>6} = {:>12.6}",
                format!("V{}S", g2),
                vs,
                format!("V{}A", g2),
                va
            );
        }
    }
}
