use matrix::Matrix;
use nalgebra::linalg::SymmetricEigen;
use types::c64;

// Eigenvalues of a Hermitian matrix, ascending.
//
// Only the lower triangle is referenced. `eps` is the off-diagonal threshold
// of the implicit QR sweeps and `max_niter` caps them (0 means no cap).
// Returns None for a non-square matrix or when the iteration does not
// converge within `max_niter`.
pub fn eigvalsh(mat: &Matrix<c64>, eps: f64, max_niter: usize) -> Option<Vec<f64>> {
    if !mat.is_square() {
        return None;
    }

    if mat.nrow() == 0 {
        return Some(Vec::new());
    }

    let eig = SymmetricEigen::try_new(mat.to_dmatrix(), eps, max_niter)?;

    let mut eigval: Vec<f64> = eig.eigenvalues.iter().copied().collect();
    eigval.sort_by(|a, b| a.total_cmp(b));

    Some(eigval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eigvalsh_2x2() {
        let cm = Matrix::<c64>::from_row_slice(
            2,
            2,
            &[
                c64 { re: 1.0, im: 0.0 },
                c64 { re: 0.0, im: 0.01 },
                c64 { re: 0.0, im: -0.01 },
                c64 { re: 1.0, im: 0.0 },
            ],
        );

        let e = eigvalsh(&cm, f64::EPSILON, 0).unwrap();

        assert_relative_eq!(e[0], 0.99, epsilon = 1e-12);
        assert_relative_eq!(e[1], 1.01, epsilon = 1e-12);
    }

    #[test]
    fn test_eigvalsh_sorted_and_trace_preserving() {
        let m = utility::make_rand_hermitian(12);

        let e = eigvalsh(&m, f64::EPSILON, 0).unwrap();

        assert_eq!(e.len(), 12);
        assert!(utility::is_sorted_ascending(&e));

        let trace: f64 = m.diagonal_real().iter().sum();
        assert_relative_eq!(e.iter().sum::<f64>(), trace, epsilon = 1e-9);
    }

    #[test]
    fn test_eigvalsh_empty() {
        let m = Matrix::<c64>::new(0, 0);
        assert_eq!(eigvalsh(&m, f64::EPSILON, 0), Some(vec![]));
    }

    #[test]
    fn test_eigvalsh_non_square_is_none() {
        let m = Matrix::<c64>::new(3, 2);
        assert_eq!(eigvalsh(&m, f64::EPSILON, 0), None);
    }
}
