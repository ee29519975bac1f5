use crate::{check_input, EigenSolver, SolverError, Spectrum};
use matrix::Matrix;
use types::c64;

// Householder tridiagonalisation followed by implicit QR, through nalgebra.
pub struct EigenSolverDense {
    tol: f64,
    max_iter: usize,
}

impl EigenSolverDense {
    pub fn new(tol: f64, max_iter: usize) -> EigenSolverDense {
        // below machine precision the QR sweeps can stall forever
        EigenSolverDense {
            tol: tol.max(f64::EPSILON),
            max_iter,
        }
    }
}

impl EigenSolver for EigenSolverDense {
    fn get_scheme(&self) -> &str {
        "dense"
    }

    fn compute(&mut self, ham: &Matrix<c64>, nband: usize) -> Result<Spectrum, SolverError> {
        check_input(ham)?;

        let eigvals = linalg::eigvalsh(ham, self.tol, self.max_iter).ok_or_else(|| {
            SolverError::NotConverged {
                scheme: self.get_scheme().to_string(),
                max_iter: self.max_iter,
            }
        })?;

        if eigvals.iter().any(|e| !e.is_finite()) {
            return Err(SolverError::NonFinite);
        }

        Ok(Spectrum::new(eigvals, nband))
    }
}
