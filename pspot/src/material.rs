use crate::Pseudopotential;

/// A diamond or zinc-blende semiconductor with its empirical form factors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    name: &'static str,
    lattice_constant: f64, // angstrom
    // V3S V4S V8S V11S V3A V4A V8A V11A in Rydberg
    form_factors_ry: [f64; 8],
}

// Cohen and Bergstresser, Phys. Rev. 141, 789 (1966), Table II.
const MATERIALS: [Material; 14] = [
    mat("Si", 5.43, [-0.21, 0.00, 0.04, 0.08, 0.00, 0.00, 0.00, 0.00]),
    mat("Ge", 5.66, [-0.23, 0.00, 0.01, 0.06, 0.00, 0.00, 0.00, 0.00]),
    mat("Sn", 6.49, [-0.20, 0.00, 0.00, 0.04, 0.00, 0.00, 0.00, 0.00]),
    mat("GaP", 5.44, [-0.22, 0.00, 0.03, 0.07, 0.12, 0.07, 0.00, 0.02]),
    mat("GaAs", 5.64, [-0.23, 0.00, 0.01, 0.06, 0.07, 0.05, 0.00, 0.01]),
    mat("AlSb", 6.13, [-0.21, 0.00, 0.02, 0.06, 0.06, 0.04, 0.00, 0.02]),
    mat("InP", 5.86, [-0.23, 0.00, 0.01, 0.06, 0.07, 0.05, 0.00, 0.01]),
    mat("GaSb", 6.12, [-0.22, 0.00, 0.00, 0.05, 0.06, 0.05, 0.00, 0.01]),
    mat("InAs", 6.04, [-0.22, 0.00, 0.00, 0.05, 0.08, 0.05, 0.00, 0.03]),
    mat("InSb", 6.48, [-0.20, 0.00, 0.00, 0.04, 0.06, 0.05, 0.00, 0.01]),
    mat("ZnS", 5.41, [-0.22, 0.00, 0.03, 0.07, 0.24, 0.14, 0.00, 0.04]),
    mat("ZnSe", 5.65, [-0.23, 0.00, 0.01, 0.06, 0.18, 0.12, 0.00, 0.03]),
    mat("ZnTe", 6.07, [-0.22, 0.00, 0.00, 0.05, 0.13, 0.10, 0.00, 0.01]),
    mat("CdTe", 6.41, [-0.20, 0.00, 0.00, 0.04, 0.15, 0.09, 0.00, 0.04]),
];

const fn mat(name: &'static str, lattice_constant: f64, form_factors_ry: [f64; 8]) -> Material {
    Material {
        name,
        lattice_constant,
        form_factors_ry,
    }
}

impl Material {
    pub fn new(name: &'static str, lattice_constant: f64, form_factors_ry: [f64; 8]) -> Material {
        mat(name, lattice_constant, form_factors_ry)
    }

    pub fn all() -> &'static [Material] {
        &MATERIALS
    }

    // case-insensitive lookup in the built-in table
    pub fn find(name: &str) -> Option<Material> {
        MATERIALS
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn get_name(&self) -> &'static str {
        self.name
    }

    pub fn get_lattice_constant(&self) -> f64 {
        self.lattice_constant
    }

    pub fn get_form_factors_ry(&self) -> [f64; 8] {
        self.form_factors_ry
    }

    pub fn pseudopotential(&self) -> Pseudopotential {
        let v = self.form_factors_ry;

        Pseudopotential::from_rydberg(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7])
    }
}
