use super::*;
use types::c64;

fn hermitian_2x2() -> Matrix<c64> {
    Matrix::<c64>::from_row_slice(
        2,
        2,
        &[
            c64::new(1.0, 0.0),
            c64::new(0.5, 0.25),
            c64::new(0.5, -0.25),
            c64::new(-2.0, 0.0),
        ],
    )
}

#[test]
fn test_column_major_layout() {
    let m = Matrix::<f64>::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    assert_eq!(m.nrow(), 2);
    assert_eq!(m.ncol(), 3);
    assert_eq!(m[[0, 2]], 3.0);
    assert_eq!(m[[1, 0]], 4.0);
    assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(m.get_col(1), &[2.0, 5.0]);
}

#[test]
fn test_resize_and_copy_from() {
    let mut m = Matrix::<f64>::new(1, 1);
    m[[0, 0]] = 7.0;

    m.resize(2, 2);
    assert_eq!(m.as_slice(), &[0.0; 4]);

    let src = Matrix::<f64>::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
    m.copy_from(&src);
    assert_eq!(m, src);
}

#[test]
fn test_hermitian_helpers() {
    let m = hermitian_2x2();

    assert!(m.is_hermitian(0.0));
    assert_eq!(m.max_hermitian_deviation(), 0.0);
    assert_eq!(m.diagonal_real(), vec![1.0, -2.0]);

    let mut broken = m.clone();
    broken[[0, 1]] = c64::new(0.5, -0.25);
    assert!((broken.max_hermitian_deviation() - 0.5).abs() < 1e-15);
    assert!(!broken.is_hermitian(1e-12));

    let rect = Matrix::<c64>::new(2, 3);
    assert_eq!(rect.max_hermitian_deviation(), f64::INFINITY);
    assert!(!rect.is_hermitian(1.0));
}

#[test]
fn test_norms_and_finiteness() {
    let mut m = hermitian_2x2();

    let off = 2.0 * (0.5f64 * 0.5 + 0.25 * 0.25);
    assert!((m.off_diagonal_norm() - off.sqrt()).abs() < 1e-15);
    assert!((m.frobenius_norm() - (off + 1.0 + 4.0).sqrt()).abs() < 1e-15);

    assert!(m.is_finite());
    m[[1, 1]] = c64::new(f64::NAN, 0.0);
    assert!(!m.is_finite());
}

#[test]
fn test_to_dmatrix() {
    let m = hermitian_2x2();
    let d = m.to_dmatrix();

    assert_eq!(d.nrows(), 2);
    assert_eq!(d[(0, 1)], m[[0, 1]]);
    assert_eq!(d[(1, 0)], m[[1, 0]]);
}
