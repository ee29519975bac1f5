use control::Control;
use pspot::{Material, Pseudopotential};
use vector3::*;

#[derive(Debug, thiserror::Error)]
pub enum CrystalError {
    #[error("unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("invalid lattice constant {0} (must be a positive length)")]
    InvalidLatticeConstant(f64),
}

// One form-factor centre: an atom pair sitting at -tau / +tau around it.
#[derive(Debug, Copy, Clone)]
pub struct Site {
    tau: Vector3f64,
    pot: Pseudopotential,
}

impl Site {
    pub fn new(tau: Vector3f64, pot: Pseudopotential) -> Site {
        Site { tau, pot }
    }

    pub fn get_tau(&self) -> Vector3f64 {
        self.tau
    }

    pub fn get_pseudopotential(&self) -> &Pseudopotential {
        &self.pot
    }
}

// Crystal structure container.
//
// Coordinates:
// - the lattice constant `a` is the edge of the conventional cubic cell, in angstrom
// - atomic positions are stored in units of `a`
// - site offsets `tau` are stored in angstrom, the length unit the form-factor phase expects
#[derive(Debug, Clone)]
pub struct Crystal {
    name: String,
    lattice_constant: f64,
    atom_positions: Vec<Vector3f64>,
    sites: Vec<Site>,
}

impl Crystal {
    pub fn new(name: &str, lattice_constant: f64) -> Result<Crystal, CrystalError> {
        if !(lattice_constant.is_finite() && lattice_constant > 0.0) {
            return Err(CrystalError::InvalidLatticeConstant(lattice_constant));
        }

        Ok(Crystal {
            name: name.to_string(),
            lattice_constant,
            atom_positions: Vec::new(),
            sites: Vec::new(),
        })
    }

    // Diamond / zinc-blende: atoms at (0,0,0) and (1/4,1/4,1/4) a.
    pub fn zinc_blende(material: &Material) -> Crystal {
        let mut crystal = Crystal {
            name: material.get_name().to_string(),
            lattice_constant: material.get_lattice_constant(),
            atom_positions: Vec::new(),
            sites: Vec::new(),
        };

        crystal.add_atom_pair(
            Vector3f64::zeros(),
            Vector3f64::new(0.25, 0.25, 0.25),
            material.pseudopotential(),
        );

        crystal
    }

    pub fn from_control(ctrl: &Control) -> Result<Crystal, CrystalError> {
        let material = Material::find(ctrl.get_material())
            .ok_or_else(|| CrystalError::UnknownMaterial(ctrl.get_material().to_string()))?;

        let mut crystal = Crystal::zinc_blende(&material);

        if let Some(a) = ctrl.get_lattice_constant() {
            crystal.set_lattice_constant(a)?;
        }

        Ok(crystal)
    }

    // The pair's form factors are evaluated about the bond centre, so the
    // site offset is half the separation: tau = a (r2 - r1) / 2.
    pub fn add_atom_pair(&mut self, r1: Vector3f64, r2: Vector3f64, pot: Pseudopotential) {
        self.atom_positions.push(r1);
        self.atom_positions.push(r2);

        let tau = (r2 - r1) * (0.5 * self.lattice_constant);

        self.sites.push(Site::new(tau, pot));
    }

    pub fn add_site(&mut self, tau: Vector3f64, pot: Pseudopotential) {
        self.sites.push(Site::new(tau, pot));
    }

    // keeps atom positions (units of a) and rescales the site offsets
    pub fn set_lattice_constant(&mut self, lattice_constant: f64) -> Result<(), CrystalError> {
        if !(lattice_constant.is_finite() && lattice_constant > 0.0) {
            return Err(CrystalError::InvalidLatticeConstant(lattice_constant));
        }

        let f = lattice_constant / self.lattice_constant;

        for site in self.sites.iter_mut() {
            site.tau = site.tau * f;
        }

        self.lattice_constant = lattice_constant;

        Ok(())
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_lattice_constant(&self) -> f64 {
        self.lattice_constant
    }

    pub fn get_atom_positions(&self) -> &[Vector3f64] {
        &self.atom_positions
    }

    pub fn get_atom_positions_cart(&self) -> Vec<Vector3f64> {
        self.atom_positions
            .iter()
            .map(|r| *r * self.lattice_constant)
            .collect()
    }

    pub fn get_n_atoms(&self) -> usize {
        self.atom_positions.len()
    }

    pub fn get_sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn display(&self) {
        println!("   {:-^80}", " crystal ");
        println!();
        println!("   {:<24} = {:>16}", "name", self.name);
        println!("   {:<24} = {:>16.6} A", "lattice_constant", self.lattice_constant);
        println!();

        for (i, r) in self.atom_positions.iter().enumerate() {
            println!(
                "   atom {:>4} {:>16.8} {:>16.8} {:>16.8}",
                i + 1,
                r.x,
                r.y,
                r.z
            );
        }

        println!();

        for site in self.sites.iter() {
            println!(
                "   tau  {:>16.8} {:>16.8} {:>16.8} A",
                site.tau.x, site.tau.y, site.tau.z
            );
            site.pot.display();
        }

        println!();
    }
}
