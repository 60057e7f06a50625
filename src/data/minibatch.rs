use crate::data::dataset::Sample;
use crate::math::Matrix;

/// A batched group of samples consumed by one optimization step: inputs
/// stacked as an n×D_in matrix, labels as n×D_out, sample-major and
/// row-major. Built fresh each epoch and discarded after the step.
#[derive(Debug, Clone, PartialEq)]
pub struct Minibatch {
    pub inputs: Matrix,
    pub labels: Matrix,
    pub samples: usize,
    /// Set by file-backed sources when this batch consumed the final record
    /// of a full pass over the underlying file.
    pub sweep_end: bool,
}

impl Minibatch {
    pub fn from_samples(samples: &[Sample]) -> Minibatch {
        assert!(!samples.is_empty(), "Minibatch::from_samples: empty batch");
        Minibatch {
            inputs: Matrix::from_rows(samples.iter().map(|s| s.input.clone()).collect()),
            labels: Matrix::from_rows(samples.iter().map(|s| s.label.clone()).collect()),
            samples: samples.len(),
            sweep_end: false,
        }
    }

    pub fn with_sweep_end(mut self, sweep_end: bool) -> Minibatch {
        self.sweep_end = sweep_end;
        self
    }
}
