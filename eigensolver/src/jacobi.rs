use crate::{check_input, EigenSolver, SolverError, Spectrum};
use epmconsts::ZERO_C64;
use matrix::Matrix;
use types::c64;

pub const JACOBI_DEFAULT_MAX_SWEEPS: usize = 50;

// Cyclic Jacobi for complex Hermitian matrices.
//
// Each rotation first removes the phase of A_pq with diag(1, conj(e)),
// e = A_pq / |A_pq|, then applies the real symmetric Jacobi rotation to the
// now real 2x2 block. Converged when the off-diagonal norm drops below
// `tol` times the Frobenius norm of the input.
pub struct EigenSolverJacobi {
    tol: f64,
    max_sweeps: usize,
    work: Matrix<c64>,
    n_sweeps: usize,
}

impl EigenSolverJacobi {
    pub fn new(tol: f64, max_sweeps: usize) -> EigenSolverJacobi {
        EigenSolverJacobi {
            tol,
            max_sweeps,
            work: Matrix::new(0, 0),
            n_sweeps: 0,
        }
    }

    // sweeps used by the last successful `compute`
    pub fn get_n_sweeps(&self) -> usize {
        self.n_sweeps
    }

    fn rotate(&mut self, p: usize, q: usize) {
        let a = &mut self.work;
        let n = a.nrow();

        let apq = a[[p, q]];
        let m = apq.norm();

        if m == 0.0 {
            return;
        }

        let e = apq / m;

        let theta = (a[[q, q]].re - a[[p, p]].re) / (2.0 * m);
        let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
        let c = 1.0 / (t * t + 1.0).sqrt();
        let s = t * c;

        let ec = e.conj();

        // A <- A U
        for k in 0..n {
            let akp = a[[k, p]];
            let akq = a[[k, q]];

            a[[k, p]] = akp * c - ec * akq * s;
            a[[k, q]] = akp * s + ec * akq * c;
        }

        // A <- U^H A
        for k in 0..n {
            let apk = a[[p, k]];
            let aqk = a[[q, k]];

            a[[p, k]] = apk * c - e * aqk * s;
            a[[q, k]] = apk * s + e * aqk * c;
        }

        a[[p, q]] = ZERO_C64;
        a[[q, p]] = ZERO_C64;
        a[[p, p]].im = 0.0;
        a[[q, q]].im = 0.0;
    }
}

impl EigenSolver for EigenSolverJacobi {
    fn get_scheme(&self) -> &str {
        "jacobi"
    }

    fn compute(&mut self, ham: &Matrix<c64>, nband: usize) -> Result<Spectrum, SolverError> {
        check_input(ham)?;

        self.work.copy_from(ham);

        let n = self.work.nrow();
        let threshold = self.tol * self.work.frobenius_norm();

        let mut nsweep = 0;

        while self.work.off_diagonal_norm() > threshold {
            if nsweep == self.max_sweeps {
                return Err(SolverError::NotConverged {
                    scheme: self.get_scheme().to_string(),
                    max_iter: self.max_sweeps,
                });
            }

            for p in 0..n {
                for q in (p + 1)..n {
                    self.rotate(p, q);
                }
            }

            nsweep += 1;
        }

        self.n_sweeps = nsweep;

        let mut eigvals = self.work.diagonal_real();
        eigvals.sort_by(|a, b| a.total_cmp(b));

        Ok(Spectrum::new(eigvals, nband))
    }
}
