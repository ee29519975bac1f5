mod line;
pub use line::*;

mod points;
pub use points::*;

use vector3::Vector3f64;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum KptsError {
    #[error("unknown high-symmetry point '{0}' (expected one of G X L W K U)")]
    UnknownLabel(String),

    #[error("a k-path needs at least two labels, got {0}")]
    TooFewLabels(usize),

    #[error("each path segment needs at least two points, got {0}")]
    TooFewPoints(usize),
}

// K-point provider interface.
//
// Coordinates are cartesian in units of 2pi/a, the convention the
// Hamiltonian and the mesh vertices use.
pub trait KPTS {
    fn get_k(&self, k_index: usize) -> Vector3f64;
    fn get_k_weight(&self, k_index: usize) -> f64;
    fn get_n_kpts(&self) -> usize;
    fn get_positions(&self) -> Vec<Vector3f64> {
        (0..self.get_n_kpts()).map(|ik| self.get_k(ik)).collect()
    }
    fn display(&self);
}
