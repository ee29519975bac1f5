use crate::Matrix;
use nalgebra::DMatrix;
use types::c64;

impl Matrix<c64> {
    // max_{ij} |A_ij - conj(A_ji)|; infinite for a non-square matrix
    pub fn max_hermitian_deviation(&self) -> f64 {
        if !self.is_square() {
            return f64::INFINITY;
        }

        let n = self.nrow;
        let mut dev: f64 = 0.0;

        for j in 0..n {
            for i in 0..=j {
                dev = dev.max((self[[i, j]] - self[[j, i]].conj()).norm());
            }
        }

        dev
    }

    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.is_square() && self.max_hermitian_deviation() <= tol
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.re.is_finite() && v.im.is_finite())
    }

    pub fn diagonal_real(&self) -> Vec<f64> {
        let n = self.nrow.min(self.ncol);

        (0..n).map(|i| self[[i, i]].re).collect()
    }

    // sqrt( sum_{i != j} |A_ij|^2 )
    pub fn off_diagonal_norm(&self) -> f64 {
        let mut s = 0.0;

        for j in 0..self.ncol {
            for (i, v) in self.get_col(j).iter().enumerate() {
                if i != j {
                    s += v.norm_sqr();
                }
            }
        }

        s.sqrt()
    }

    pub fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|v| v.norm_sqr()).sum::<f64>().sqrt()
    }

    pub fn to_dmatrix(&self) -> DMatrix<c64> {
        DMatrix::<c64>::from_column_slice(self.nrow, self.ncol, self.as_slice())
    }
}
