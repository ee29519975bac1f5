mod dense;
pub use dense::*;

mod jacobi;
pub use jacobi::*;

use control::Control;
use matrix::Matrix;
use types::c64;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("{scheme} eigensolver did not converge within {max_iter} iterations")]
    NotConverged { scheme: String, max_iter: usize },

    #[error("hamiltonian contains non-finite entries")]
    NonFinite,

    #[error("hamiltonian must be square, got {nrow} x {ncol}")]
    NotSquare { nrow: usize, ncol: usize },

    #[error("unknown eigensolver scheme '{0}' (expected 'dense' or 'jacobi')")]
    UnknownScheme(String),
}

// Lowest eigenvalues of one Hamiltonian, ascending. Holds fewer than
// `n_requested` values only when the basis is smaller than the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    energies: Vec<f64>,
    n_requested: usize,
}

impl Spectrum {
    pub fn new(mut eigvals: Vec<f64>, n_requested: usize) -> Spectrum {
        eigvals.truncate(n_requested);

        Spectrum {
            energies: eigvals,
            n_requested,
        }
    }

    pub fn get_energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn into_energies(self) -> Vec<f64> {
        self.energies
    }

    pub fn get_n_bands(&self) -> usize {
        self.energies.len()
    }

    pub fn get_n_requested(&self) -> usize {
        self.n_requested
    }

    pub fn n_missing(&self) -> usize {
        self.n_requested - self.energies.len()
    }

    pub fn is_complete(&self) -> bool {
        self.n_missing() == 0
    }
}

pub trait EigenSolver: Send {
    fn get_scheme(&self) -> &str;

    // lowest `nband` eigenvalues of the Hermitian matrix `ham`
    fn compute(&mut self, ham: &Matrix<c64>, nband: usize) -> Result<Spectrum, SolverError>;
}

// `max_iter = 0` selects the scheme's own limit.
pub fn new(scheme: &str, tol: f64, max_iter: usize) -> Result<Box<dyn EigenSolver>, SolverError> {
    let solver: Box<dyn EigenSolver> = match scheme {
        "dense" => Box::new(EigenSolverDense::new(tol, max_iter)),

        "jacobi" => {
            let max_sweeps = if max_iter == 0 {
                JACOBI_DEFAULT_MAX_SWEEPS
            } else {
                max_iter
            };

            Box::new(EigenSolverJacobi::new(tol, max_sweeps))
        }

        other => return Err(SolverError::UnknownScheme(other.to_string())),
    };

    Ok(solver)
}

pub fn from_control(ctrl: &Control) -> Result<Box<dyn EigenSolver>, SolverError> {
    new(
        ctrl.get_eigen_solver(),
        ctrl.get_eigval_epsilon(),
        ctrl.get_eigen_max_iter(),
    )
}

// shape and finiteness checks shared by the solvers
fn check_input(ham: &Matrix<c64>) -> Result<(), SolverError> {
    if !ham.is_square() {
        return Err(SolverError::NotSquare {
            nrow: ham.nrow(),
            ncol: ham.ncol(),
        });
    }

    if !ham.is_finite() {
        return Err(SolverError::NonFinite);
    }

    Ok(())
}

#[cfg(test)]
mod tests;
