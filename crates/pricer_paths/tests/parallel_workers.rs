//! One generator per rayon worker reproduces the serial results.

use std::sync::Arc;

use pricer_core::math::CovarianceMatrix;
use pricer_core::types::TimeGrid;
use pricer_models::models::{DiffusionProcess, GbmProcess, OrnsteinUhlenbeckProcess};
use pricer_paths::generator::{MultiPathGenerator, MultiPathSampler};
use pricer_paths::rng::GaussianSequenceGenerator;
use rayon::prelude::*;

const STEPS: usize = 24;
const PATHS_PER_WORKER: usize = 50;

fn generator(seed: u64) -> MultiPathGenerator<GaussianSequenceGenerator> {
    let processes: Vec<Arc<dyn DiffusionProcess>> = vec![
        Arc::new(GbmProcess::new(100.0, 0.03, 0.01, 0.2).unwrap()),
        Arc::new(OrnsteinUhlenbeckProcess::new(1.0, 2.0, 1.2, 0.3).unwrap()),
        Arc::new(GbmProcess::new(40.0, 0.03, 0.0, 0.35).unwrap()),
    ];
    let cov = CovarianceMatrix::new(
        &[
            0.04, 0.018, 0.014, //
            0.018, 0.09, 0.021, //
            0.014, 0.021, 0.1225,
        ],
        3,
    )
    .unwrap();
    let grid = TimeGrid::uniform(2.0, STEPS).unwrap();
    MultiPathGenerator::new(
        processes,
        &[0.0; 3],
        &cov,
        grid,
        GaussianSequenceGenerator::new(3 * STEPS, seed),
    )
    .unwrap()
}

/// Mean terminal log increment of asset 0 over a worker's paths.
fn worker_mean(seed: u64) -> f64 {
    let mut g = generator(seed);
    (0..PATHS_PER_WORKER)
        .map(|_| g.next_ref().unwrap().value[0].total_log_increment())
        .sum::<f64>()
        / PATHS_PER_WORKER as f64
}

#[test]
fn test_parallel_workers_match_serial() {
    let seeds: Vec<u64> = (1000..1016).collect();

    let serial: Vec<f64> = seeds.iter().map(|&s| worker_mean(s)).collect();
    let parallel: Vec<f64> = seeds.par_iter().map(|&s| worker_mean(s)).collect();

    assert_eq!(serial, parallel);
}

#[test]
fn test_generator_moves_between_threads() {
    let mut g = generator(7);
    let expected = generator(7).next().unwrap();

    let sample = std::thread::spawn(move || g.next().unwrap())
        .join()
        .unwrap();
    assert_eq!(sample, expected);
}
