use crystal::Crystal;
use epmconsts::*;
use matrix::Matrix;
use num_traits::Zero;
use pwbasis::PWBasis;
use types::c64;
use vector3::*;

// Plane-wave EPM Hamiltonian
//
//   H_ij(k) = (hbar^2/2m) (2pi/a)^2 |k + G_i|^2 delta_ij + V(G_i - G_j)
//
// with k and G in units of 2pi/a and energies in eV. The potential block is
// independent of k and is assembled once; only the diagonal changes per k.
#[derive(Debug, Clone)]
pub struct HamiltonianBuilder {
    lattice_constant: f64,
    kinetic_prefactor: f64,
    basis: PWBasis,
    vpot: Matrix<c64>,
}

impl HamiltonianBuilder {
    pub fn new(crystal: &Crystal, basis: PWBasis) -> HamiltonianBuilder {
        let a = crystal.get_lattice_constant();

        let vpot = build_potential(crystal, &basis);

        HamiltonianBuilder {
            lattice_constant: a,
            kinetic_prefactor: HBAR2_OVER_2ME * (TWOPI / a) * (TWOPI / a),
            basis,
            vpot,
        }
    }

    pub fn get_lattice_constant(&self) -> f64 {
        self.lattice_constant
    }

    pub fn get_basis(&self) -> &PWBasis {
        &self.basis
    }

    pub fn get_n_plane_waves(&self) -> usize {
        self.basis.get_n_plane_waves()
    }

    pub fn get_potential(&self) -> &Matrix<c64> {
        &self.vpot
    }

    // (hbar^2/2m) (2pi/a)^2 |k + G_i|^2 for every basis vector, in eV
    pub fn kinetic_diagonal(&self, xk: Vector3f64) -> Vec<f64> {
        self.basis
            .get_g()
            .iter()
            .map(|g| self.kinetic_prefactor * (xk + g.to_f64()).norm_squared())
            .collect()
    }

    // Fills `ham` with H(k); `ham` is resized when its shape does not match.
    pub fn build(&self, xk: Vector3f64, ham: &mut Matrix<c64>) {
        ham.copy_from(&self.vpot);

        for (i, g) in self.basis.get_g().iter().enumerate() {
            let kg2 = (xk + g.to_f64()).norm_squared();

            ham[[i, i]] += c64::new(self.kinetic_prefactor * kg2, 0.0);
        }
    }

    pub fn new_hamiltonian(&self, xk: Vector3f64) -> Matrix<c64> {
        let npw = self.get_n_plane_waves();

        let mut ham = Matrix::<c64>::new(npw, npw);

        self.build(xk, &mut ham);

        ham
    }
}

// V_ij = sum_sites V_site(G_i - G_j). The upper triangle is evaluated and
// mirrored, so V_ji = conj(V_ij) holds exactly. The G = 0 term sits on the
// diagonal and keeps only its real part.
fn build_potential(crystal: &Crystal, basis: &PWBasis) -> Matrix<c64> {
    let a = crystal.get_lattice_constant();
    let sites = crystal.get_sites();
    let g = basis.get_g();
    let npw = g.len();

    let mut vpot = Matrix::<c64>::new(npw, npw);

    let site_sum = |dg: Vector3i32| -> c64 {
        sites
            .iter()
            .fold(c64::zero(), |acc, s| acc + s.get_pseudopotential().get_value(dg, s.get_tau(), a))
    };

    let v0 = site_sum(Vector3i32::zeros());

    for j in 0..npw {
        for i in 0..j {
            let v = site_sum(g[i] - g[j]);

            vpot[[i, j]] = v;
            vpot[[j, i]] = v.conj();
        }

        vpot[[j, j]] = c64::new(v0.re, 0.0);
    }

    vpot
}
