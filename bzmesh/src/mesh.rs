use crate::{MeshError, MeshEvaluator, MeshVertex};
use eigensolver::SolverError;
use epmconsts::*;
use kpts::KPTS;
use vector3::Vector3f64;

use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct VertexFailure {
    pub index: usize,
    pub error: SolverError,
}

// Outcome of one `evaluate_all` call.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub n_vertices: usize,
    pub n_evaluated: usize,
    pub failures: Vec<VertexFailure>,
    pub n_cancelled: usize,
    pub elapsed: Duration,
}

impl EvaluationReport {
    pub fn is_complete(&self) -> bool {
        self.n_evaluated == self.n_vertices
    }

    pub fn display(&self) {
        println!();
        println!("   {:-^80}", " mesh evaluation ");
        println!();

        println!(
            "   {:<width1$} = {:>width2$}",
            "vertices",
            self.n_vertices,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "evaluated",
            self.n_evaluated,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "failed",
            self.failures.len(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "cancelled",
            self.n_cancelled,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$.3} s",
            "elapsed",
            self.elapsed.as_secs_f64(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        if !self.failures.is_empty() {
            println!();

            for f in self.failures.iter() {
                println!("   vertex {:>8} : {}", f.index, f.error);
            }
        }

        println!();
    }
}

enum Outcome {
    Evaluated,
    Failed(VertexFailure),
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct BrillouinZoneMesh {
    vertices: Vec<MeshVertex>,
}

impl BrillouinZoneMesh {
    pub fn new() -> BrillouinZoneMesh {
        BrillouinZoneMesh::default()
    }

    // vertex i takes index i, in the order supplied
    pub fn from_positions(positions: Vec<Vector3f64>) -> BrillouinZoneMesh {
        let vertices = positions
            .into_iter()
            .enumerate()
            .map(|(i, xk)| MeshVertex::new(i, xk))
            .collect();

        BrillouinZoneMesh { vertices }
    }

    pub fn from_kpts(kpts: &dyn KPTS) -> BrillouinZoneMesh {
        BrillouinZoneMesh::from_positions(kpts.get_positions())
    }

    pub fn add_vertex(&mut self, position: Vector3f64) -> usize {
        let index = self.vertices.len();

        self.vertices.push(MeshVertex::new(index, position));

        index
    }

    pub fn get_vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn get_vertex(&self, index: usize) -> Option<&MeshVertex> {
        self.vertices.get(index)
    }

    pub fn get_vertex_mut(&mut self, index: usize) -> Option<&mut MeshVertex> {
        self.vertices.get_mut(index)
    }

    pub fn get_n_vertices(&self) -> usize {
        self.vertices.len()
    }

    // evaluate_all with the evaluator's configured band count
    pub fn evaluate(&mut self, evaluator: &MeshEvaluator) -> Result<EvaluationReport, MeshError> {
        self.evaluate_all(evaluator, evaluator.get_nband())
    }

    // Computes the lowest `nband` energies of every vertex.
    //
    // Vertices are distributed over rayon workers; each worker owns one
    // BandSolver. A successful vertex has its previous energies and rates
    // replaced, a failed vertex is left without energies, a vertex skipped
    // after cancellation is not touched.
    pub fn evaluate_all(&mut self, evaluator: &MeshEvaluator, nband: usize) -> Result<EvaluationReport, MeshError> {
        if nband == 0 {
            return Err(MeshError::InvalidBandCount);
        }

        let npw = evaluator.get_n_plane_waves();

        if nband > npw {
            return Err(MeshError::InsufficientBasis { nband, npw });
        }

        let n_vertices = self.vertices.len();

        info!(
            "evaluating {} bands on {} vertices ({} plane waves, {} eigensolver)",
            nband,
            n_vertices,
            npw,
            evaluator.get_scheme()
        );

        let start_time = Instant::now();

        let outcomes = match evaluator.get_num_threads() {
            0 => evaluate_vertices(&mut self.vertices, evaluator, nband),
            n => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| MeshError::ThreadPool(e.to_string()))?;

                let vertices = &mut self.vertices;

                pool.install(|| evaluate_vertices(vertices, evaluator, nband))
            }
        };

        let mut report = EvaluationReport {
            n_vertices,
            n_evaluated: 0,
            failures: Vec::new(),
            n_cancelled: 0,
            elapsed: Duration::default(),
        };

        for outcome in outcomes {
            match outcome {
                Outcome::Evaluated => report.n_evaluated += 1,
                Outcome::Failed(f) => report.failures.push(f),
                Outcome::Cancelled => report.n_cancelled += 1,
            }
        }

        report.elapsed = start_time.elapsed();

        info!(
            "mesh evaluation finished: {}/{} evaluated, {} failed, {} cancelled in {:.3} s",
            report.n_evaluated,
            n_vertices,
            report.failures.len(),
            report.n_cancelled,
            report.elapsed.as_secs_f64()
        );

        Ok(report)
    }

    // (min, max) of band `band` over the vertices that hold it
    pub fn get_band_energy_range(&self, band: usize) -> Option<(f64, f64)> {
        self.vertices
            .iter()
            .filter_map(|v| v.get_energy_at_band(band))
            .minmax()
            .into_option()
    }

    pub fn get_energy_range(&self) -> Option<(f64, f64)> {
        self.vertices
            .iter()
            .flat_map(|v| v.get_band_energies().iter().copied())
            .minmax()
            .into_option()
    }

    pub fn get_min_band_energy(&self) -> Option<f64> {
        self.get_energy_range().map(|(emin, _)| emin)
    }

    pub fn get_max_band_energy(&self) -> Option<f64> {
        self.get_energy_range().map(|(_, emax)| emax)
    }

    // Moves the energy zero, e.g. shift_band_energies(-vbm) puts the
    // valence-band maximum at 0 eV.
    pub fn shift_band_energies(&mut self, delta: f64) {
        for v in self.vertices.iter_mut() {
            v.shift_band_energies(delta);
        }
    }
}

fn evaluate_vertices(vertices: &mut [MeshVertex], evaluator: &MeshEvaluator, nband: usize) -> Vec<Outcome> {
    let cancel = evaluator.get_cancel_token();

    vertices
        .par_iter_mut()
        .map_init(
            || evaluator.new_band_solver(),
            |solver, vertex| {
                if cancel.is_cancelled() {
                    return Outcome::Cancelled;
                }

                let index = vertex.get_index();

                let result = match solver {
                    Ok(s) => s.solve_at(vertex.get_position(), nband),
                    Err(e) => Err(e.clone()),
                };

                vertex.clear_band_energies();

                match result {
                    Ok(spectrum) => {
                        for e in spectrum.into_energies() {
                            vertex.add_band_energy_value(e);
                        }

                        debug!("vertex {} at {} evaluated", index, vertex.get_position());

                        Outcome::Evaluated
                    }

                    Err(error) => {
                        warn!("vertex {} at {} failed: {}", index, vertex.get_position(), error);

                        Outcome::Failed(VertexFailure { index, error })
                    }
                }
            },
        )
        .collect()
}
