mod vertex;
pub use vertex::*;

mod evaluator;
pub use evaluator::*;

mod mesh;
pub use mesh::*;

use crystal::CrystalError;
use eigensolver::SolverError;

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("number of bands must be at least one")]
    InvalidBandCount,

    #[error("{nband} bands requested but the basis holds only {npw} plane waves")]
    InsufficientBasis { nband: usize, npw: usize },

    #[error("failed to create thread pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Crystal(#[from] CrystalError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}
