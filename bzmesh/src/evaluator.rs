use crate::MeshError;
use bands::BandSolver;
use control::Control;
use crystal::Crystal;
use eigensolver::SolverError;
use hamiltonian::HamiltonianBuilder;
use pwbasis::PWBasis;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

// Cooperative stop flag shared between the caller and a running evaluation.
// It is checked before each vertex, never inside a diagonalisation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

pub const DEFAULT_NBAND: usize = 8;

// Everything a mesh evaluation shares between workers: the Hamiltonian
// builder (read-only) and the recipe for each worker's private eigensolver.
pub struct MeshEvaluator {
    builder: Arc<HamiltonianBuilder>,
    scheme: String,
    tol: f64,
    max_iter: usize,
    nband: usize,
    num_threads: usize,
    cancel: CancelToken,
}

impl MeshEvaluator {
    pub fn new(builder: HamiltonianBuilder, scheme: &str, tol: f64, max_iter: usize) -> Result<MeshEvaluator, MeshError> {
        // reject an unknown scheme here rather than once per worker
        eigensolver::new(scheme, tol, max_iter)?;

        Ok(MeshEvaluator {
            builder: Arc::new(builder),
            scheme: scheme.to_string(),
            tol,
            max_iter,
            nband: DEFAULT_NBAND,
            num_threads: 0,
            cancel: CancelToken::new(),
        })
    }

    pub fn from_control(ctrl: &Control) -> Result<MeshEvaluator, MeshError> {
        let crystal = Crystal::from_control(ctrl)?;
        let basis = PWBasis::new(ctrl.get_basis_max_g2());

        if ctrl.is_verbose() {
            crystal.display();
            basis.display();
        }

        let builder = HamiltonianBuilder::new(&crystal, basis);

        let mut evaluator = MeshEvaluator::new(
            builder,
            ctrl.get_eigen_solver(),
            ctrl.get_eigval_epsilon(),
            ctrl.get_eigen_max_iter(),
        )?;

        evaluator.set_nband(ctrl.get_nband());
        evaluator.set_num_threads(ctrl.get_num_threads());

        Ok(evaluator)
    }

    pub fn get_builder(&self) -> &Arc<HamiltonianBuilder> {
        &self.builder
    }

    pub fn get_n_plane_waves(&self) -> usize {
        self.builder.get_n_plane_waves()
    }

    pub fn get_scheme(&self) -> &str {
        &self.scheme
    }

    // band count used by `BrillouinZoneMesh::evaluate`
    pub fn get_nband(&self) -> usize {
        self.nband
    }

    pub fn set_nband(&mut self, nband: usize) {
        self.nband = nband;
    }

    pub fn get_num_threads(&self) -> usize {
        self.num_threads
    }

    // 0 runs on the global rayon pool
    pub fn set_num_threads(&mut self, n: usize) {
        self.num_threads = n;
    }

    pub fn get_cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn set_cancel_token(&mut self, token: CancelToken) {
        self.cancel = token;
    }

    pub fn new_band_solver(&self) -> Result<BandSolver, SolverError> {
        let eigen = eigensolver::new(&self.scheme, self.tol, self.max_iter)?;

        Ok(BandSolver::new(Arc::clone(&self.builder), eigen))
    }
}
