use super::*;
use approx::assert_relative_eq;

fn small_hermitian() -> Matrix<c64> {
    Matrix::<c64>::from_row_slice(
        2,
        2,
        &[
            c64::new(1.0, 0.0),
            c64::new(0.0, 0.01),
            c64::new(0.0, -0.01),
            c64::new(1.0, 0.0),
        ],
    )
}

fn solvers() -> Vec<Box<dyn EigenSolver>> {
    vec![
        new("dense", 1e-12, 0).unwrap(),
        new("jacobi", 1e-12, 0).unwrap(),
    ]
}

#[test]
fn test_known_eigenvalues() {
    for mut solver in solvers() {
        let spec = solver.compute(&small_hermitian(), 2).unwrap();

        assert_eq!(spec.get_n_bands(), 2);
        assert_relative_eq!(spec.get_energies()[0], 0.99, epsilon = 1e-12);
        assert_relative_eq!(spec.get_energies()[1], 1.01, epsilon = 1e-12);
    }
}

#[test]
fn test_dense_and_jacobi_agree() {
    let mats = vec![utility::make_matrix(24), utility::make_rand_hermitian(17)];

    for m in mats.iter() {
        let mut dense = EigenSolverDense::new(1e-12, 0);
        let mut jacobi = EigenSolverJacobi::new(1e-13, JACOBI_DEFAULT_MAX_SWEEPS);

        let n = m.nrow();
        let e1 = dense.compute(m, n).unwrap();
        let e2 = jacobi.compute(m, n).unwrap();

        assert!(jacobi.get_n_sweeps() > 0);

        for (a, b) in e1.get_energies().iter().zip(e2.get_energies()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_eigenvalues_ascending_and_truncated() {
    let m = utility::make_rand_hermitian(30);

    for mut solver in solvers() {
        let spec = solver.compute(&m, 10).unwrap();

        assert_eq!(spec.get_n_bands(), 10);
        assert!(spec.is_complete());
        assert!(utility::is_sorted_ascending(spec.get_energies()));

        // the truncated spectrum is the bottom of the full one
        let full = solver.compute(&m, 30).unwrap();
        assert_eq!(&full.get_energies()[..10], spec.get_energies());
    }
}

#[test]
fn test_insufficient_basis_is_signalled() {
    for mut solver in solvers() {
        let spec = solver.compute(&small_hermitian(), 5).unwrap();

        assert_eq!(spec.get_n_bands(), 2);
        assert_eq!(spec.get_n_requested(), 5);
        assert_eq!(spec.n_missing(), 3);
        assert!(!spec.is_complete());
    }
}

#[test]
fn test_jacobi_sweep_limit_reports_non_convergence() {
    let mut solver = new("jacobi", 1e-12, 1).unwrap();

    let err = solver.compute(&utility::make_matrix(20), 4).unwrap_err();

    assert_eq!(
        err,
        SolverError::NotConverged {
            scheme: "jacobi".to_string(),
            max_iter: 1
        }
    );
}

#[test]
fn test_non_finite_input_is_rejected() {
    let mut m = utility::make_matrix(6);
    m[[2, 2]] = c64::new(f64::NAN, 0.0);

    for mut solver in solvers() {
        assert_eq!(solver.compute(&m, 3), Err(SolverError::NonFinite));
    }
}

#[test]
fn test_non_square_input_is_rejected() {
    let m = Matrix::<c64>::new(3, 2);

    for mut solver in solvers() {
        assert_eq!(
            solver.compute(&m, 1),
            Err(SolverError::NotSquare { nrow: 3, ncol: 2 })
        );
    }
}

#[test]
fn test_factory() {
    assert_eq!(new("dense", 1e-12, 0).unwrap().get_scheme(), "dense");
    assert_eq!(new("jacobi", 1e-12, 0).unwrap().get_scheme(), "jacobi");

    match new("pcg", 1e-12, 0) {
        Err(SolverError::UnknownScheme(s)) => assert_eq!(s, "pcg"),
        _ => panic!("pcg is not an available scheme"),
    }

    let mut ctrl = Control::new();
    ctrl.set_eigen_solver("jacobi");
    assert_eq!(from_control(&ctrl).unwrap().get_scheme(), "jacobi");
}
