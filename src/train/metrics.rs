use serde::{Serialize, Deserialize};

/// Post-step averages for the most recently consumed minibatch.
///
/// Overwritten by every `Trainer::step`; read-only to reporting code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepMetrics {
    /// Mean binary cross-entropy over the batch.
    pub loss: f64,
    /// Mean thresholded-equality accuracy fraction in [0, 1]:
    /// `round(prediction) == label`, averaged over all outputs.
    pub eval: f64,
    /// Number of samples the step consumed.
    pub samples: usize,
}
