use super::*;
use approx::assert_relative_eq;
use crystal::Crystal;
use pspot::Material;
use pwbasis::PWBasis;

fn band_solver(name: &str, max_g2: u32, scheme: &str) -> BandSolver {
    let material = Material::find(name).unwrap();
    let crystal = Crystal::zinc_blende(&material);

    let builder = HamiltonianBuilder::new(&crystal, PWBasis::new(max_g2));

    BandSolver::new(Arc::new(builder), eigensolver::new(scheme, 1e-12, 0).unwrap())
}

#[test]
fn test_silicon_at_gamma() {
    for &scheme in ["dense", "jacobi"].iter() {
        let mut solver = band_solver("Si", 11, scheme);
        assert_eq!(solver.get_n_plane_waves(), 51);
        assert_eq!(solver.get_scheme(), scheme);

        let spec = solver.solve_at(Vector3f64::zeros(), 8).unwrap();
        let e = spec.get_energies();

        assert_eq!(e.len(), 8);
        assert_relative_eq!(e[0], -2.0954057628, epsilon = 1e-6);

        // triply degenerate valence-band top
        for ib in 1..4 {
            assert_relative_eq!(e[ib], 10.5919141575, epsilon = 1e-6);
        }

        for ib in 4..7 {
            assert_relative_eq!(e[ib], 14.1545292721, epsilon = 1e-6);
        }

        assert_relative_eq!(e[7], 14.5549718432, epsilon = 1e-6);
    }
}

#[test]
fn test_silicon_at_gamma_larger_basis() {
    let mut solver = band_solver("Si", 20, "dense");
    assert_eq!(solver.get_n_plane_waves(), 113);

    let spec = solver.solve_at(Vector3f64::zeros(), 4).unwrap();

    assert_relative_eq!(spec.get_energies()[0], -2.1546988421, epsilon = 1e-6);
    assert_relative_eq!(spec.get_energies()[3], 10.4823263715, epsilon = 1e-6);
}

#[test]
fn test_gallium_arsenide_at_gamma() {
    let mut solver = band_solver("GaAs", 11, "dense");

    let e = solver.solve_at(Vector3f64::zeros(), 5).unwrap().into_energies();

    assert_relative_eq!(e[0], -3.3354990453, epsilon = 1e-6);
    assert_relative_eq!(e[1], 8.9583468571, epsilon = 1e-6);
    assert_relative_eq!(e[3], 8.9583468571, epsilon = 1e-6);
    assert_relative_eq!(e[4], 10.3347017884, epsilon = 1e-6);
}

#[test]
fn test_time_reversal_symmetry() {
    let mut solver = band_solver("GaAs", 11, "dense");

    let xk = Vector3f64::new(0.3, -0.1, 0.45);

    let e1 = solver.solve_at(xk, 8).unwrap();
    let e2 = solver.solve_at(-xk, 8).unwrap();

    for (a, b) in e1.get_energies().iter().zip(e2.get_energies()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-8);
    }
}

#[test]
fn test_solver_is_reusable_across_k() {
    let mut solver = band_solver("Si", 11, "dense");

    let e_gamma = solver.solve_at(Vector3f64::zeros(), 4).unwrap();
    let _ = solver.solve_at(Vector3f64::new(1.0, 0.0, 0.0), 4).unwrap();
    let e_again = solver.solve_at(Vector3f64::zeros(), 4).unwrap();

    assert_eq!(e_gamma, e_again);
}

#[test]
fn test_request_beyond_basis() {
    let mut solver = band_solver("Si", 3, "dense");
    assert_eq!(solver.get_n_plane_waves(), 9);

    let spec = solver.solve_at(Vector3f64::zeros(), 12).unwrap();

    assert_eq!(spec.get_n_bands(), 9);
    assert_eq!(spec.n_missing(), 3);
    assert_relative_eq!(spec.get_energies()[0], -1.7476821024, epsilon = 1e-6);
}

#[test]
fn test_non_finite_k_is_rejected() {
    let mut solver = band_solver("Si", 8, "jacobi");

    let err = solver
        .solve_at(Vector3f64::new(f64::NAN, 0.0, 0.0), 4)
        .unwrap_err();

    assert_eq!(err, SolverError::NonFinite);
}

#[test]
fn test_solver_from_control() {
    let mut ctrl = control::Control::new();
    ctrl.set_eigen_solver("jacobi");

    let crystal = Crystal::from_control(&ctrl).unwrap();
    let builder = HamiltonianBuilder::new(&crystal, PWBasis::new(ctrl.get_basis_max_g2()));

    let mut solver = BandSolver::new(Arc::new(builder), eigensolver::from_control(&ctrl).unwrap());

    let spec = solver.solve_at(Vector3f64::zeros(), ctrl.get_nband()).unwrap();

    assert_eq!(solver.get_scheme(), "jacobi");
    assert!(spec.is_complete());
    assert_relative_eq!(spec.get_energies()[0], -2.0954057628, epsilon = 1e-6);
}
