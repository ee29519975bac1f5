use eigensolver::{EigenSolver, SolverError, Spectrum};
use hamiltonian::HamiltonianBuilder;
use matrix::Matrix;
use types::c64;
use vector3::Vector3f64;

use std::sync::Arc;

// Per-worker band solver.
//
// The builder (basis + potential block) is shared read-only between workers;
// the Hamiltonian buffer and the eigensolver workspace are private, so one
// BandSolver must not be used from two threads at the same time.
pub struct BandSolver {
    builder: Arc<HamiltonianBuilder>,
    ham: Matrix<c64>,
    eigen: Box<dyn EigenSolver>,
}

impl BandSolver {
    pub fn new(builder: Arc<HamiltonianBuilder>, eigen: Box<dyn EigenSolver>) -> BandSolver {
        let npw = builder.get_n_plane_waves();

        BandSolver {
            builder,
            ham: Matrix::<c64>::new(npw, npw),
            eigen,
        }
    }

    pub fn get_builder(&self) -> &HamiltonianBuilder {
        &self.builder
    }

    pub fn get_scheme(&self) -> &str {
        self.eigen.get_scheme()
    }

    pub fn get_n_plane_waves(&self) -> usize {
        self.builder.get_n_plane_waves()
    }

    // lowest `nband` energies (eV) at `xk`, given in units of 2pi/a
    pub fn solve_at(&mut self, xk: Vector3f64, nband: usize) -> Result<Spectrum, SolverError> {
        if !xk.is_finite() {
            return Err(SolverError::NonFinite);
        }

        self.builder.build(xk, &mut self.ham);

        self.eigen.compute(&self.ham, nband)
    }
}

#[cfg(test)]
mod tests;
