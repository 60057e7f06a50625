/// Hyperparameters for a training run.
///
/// # Fields
/// - `epochs`       — full passes over the training data; for file-backed
///                    training an epoch ends when the source reports a
///                    completed sweep, not per minibatch
/// - `batch_size`   — records pulled per minibatch from a file-backed
///                    source (the in-memory variant always batches the whole
///                    dataset)
/// - `report_every` — print progress every N minibatches
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub report_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, batch_size: usize, report_every: usize) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            report_every,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(1000, 4, 50)
    }
}
