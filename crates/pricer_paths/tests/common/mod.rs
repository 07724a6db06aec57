//! Deterministic test doubles for the injected capabilities.

#![allow(dead_code)]

use pricer_core::types::Sample;
use pricer_models::models::{DiffusionProcess, ProcessError};
use pricer_paths::rng::{RandomArrayGenerator, RandomError, RandomSequenceGenerator};

/// Returns the same weighted sequence on every call.
#[derive(Clone, Debug)]
pub struct FixedSequence {
    sample: Sample<Vec<f64>>,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>, weight: f64) -> Self {
        Self {
            sample: Sample::with_weight(values, weight),
        }
    }
}

impl RandomSequenceGenerator for FixedSequence {
    fn dimension(&self) -> usize {
        self.sample.value.len()
    }

    fn next_sequence(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        Ok(&self.sample)
    }
}

/// Declares one dimension but returns a sequence of a different length.
#[derive(Clone, Debug)]
pub struct MisreportedSequence {
    pub declared: usize,
    sample: Sample<Vec<f64>>,
}

impl MisreportedSequence {
    pub fn new(declared: usize, values: Vec<f64>) -> Self {
        Self {
            declared,
            sample: Sample::new(values),
        }
    }
}

impl RandomSequenceGenerator for MisreportedSequence {
    fn dimension(&self) -> usize {
        self.declared
    }

    fn next_sequence(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        Ok(&self.sample)
    }
}

/// Cycles through a list of weighted arrays.
///
/// The declared dimension is the length of the first array.

#[derive(Clone, Debug)]
pub struct CyclingArrays {
    arrays: Vec<Sample<Vec<f64>>>,
    position: usize,
}

impl CyclingArrays {
    pub fn new(arrays: Vec<Sample<Vec<f64>>>) -> Self {
        Self {
            arrays,
            position: 0,
        }
    }
}

impl RandomArrayGenerator for CyclingArrays {
    fn dimension(&self) -> usize {
        self.arrays.first().map_or(0, |a| a.value.len())
    }

    fn next_array(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        let index = self.position % self.arrays.len();
        self.position += 1;
        Ok(&self.arrays[index])
    }
}

/// Sequence source that fails on every draw.
#[derive(Debug)]
pub struct FailingSequence {
    pub dimension: usize,
}

impl RandomSequenceGenerator for FailingSequence {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn next_sequence(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        Err(RandomError::Exhausted(0))
    }
}

/// Process with constant drift and variance `variance_rate * dt`.
#[derive(Clone, Copy, Debug)]
pub struct ConstantProcess {
    pub x0: f64,
    pub drift: f64,
    pub variance_rate: f64,
}

impl DiffusionProcess for ConstantProcess {
    fn x0(&self) -> f64 {
        self.x0
    }

    fn drift(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        Ok(self.drift)
    }

    fn variance(&self, _t: f64, _x: f64, dt: f64) -> Result<f64, ProcessError> {
        Ok(self.variance_rate * dt)
    }
}

/// Process reporting the same variance for every step, whatever its sign.
#[derive(Clone, Copy, Debug)]
pub struct FixedVarianceProcess {
    pub variance: f64,
}

impl DiffusionProcess for FixedVarianceProcess {
    fn x0(&self) -> f64 {
        1.0
    }

    fn drift(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        Ok(0.0)
    }

    fn variance(&self, _t: f64, _x: f64, _dt: f64) -> Result<f64, ProcessError> {
        Ok(self.variance)
    }
}

/// Process whose drift evaluation always fails.
#[derive(Debug)]
pub struct BrokenProcess;

impl DiffusionProcess for BrokenProcess {
    fn x0(&self) -> f64 {
        1.0
    }

    fn drift(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        Err(ProcessError::Evaluation("quote not set".to_string()))
    }

    fn variance(&self, _t: f64, _x: f64, dt: f64) -> Result<f64, ProcessError> {
        Ok(dt)
    }
}

/// Process that records the evaluation times it is asked about.
#[derive(Debug, Default)]
pub struct RecordingProcess {
    pub times: std::sync::Mutex<Vec<f64>>,
}

impl DiffusionProcess for RecordingProcess {
    fn x0(&self) -> f64 {
        1.0
    }

    fn drift(&self, t: f64, _x: f64) -> Result<f64, ProcessError> {
        if let Ok(mut times) = self.times.lock() {
            times.push(t);
        }
        Ok(0.0)
    }

    fn variance(&self, _t: f64, _x: f64, dt: f64) -> Result<f64, ProcessError> {
        Ok(dt)
    }
}
