use rand::Rng;

use crate::data::{shuffle, Minibatch, Sample, TextMinibatchSource};
use crate::train::metrics::StepMetrics;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::Trainer;

// ---------------------------------------------------------------------------
// Variant A — in-memory dataset
// ---------------------------------------------------------------------------

/// Trains from a fixed in-memory dataset. Each iteration reshuffles the
/// sample order with the caller's generator, submits the whole dataset as
/// one minibatch, and counts as exactly one epoch. Returns the last step's
/// metrics.
pub fn train_from_memory<R: Rng>(
    trainer: &mut Trainer,
    samples: &[Sample],
    config: &TrainConfig,
    rng: &mut R,
) -> Option<StepMetrics> {
    assert!(!samples.is_empty(), "train_from_memory: empty dataset");

    let mut order: Vec<Sample> = samples.to_vec();
    let mut last = None;

    for i in 0..config.epochs {
        shuffle(&mut order, rng);
        let batch = Minibatch::from_samples(&order);
        let metrics = trainer.step(&batch);
        report_progress(i, config.report_every, &metrics);
        last = Some(metrics);
    }

    last
}

// ---------------------------------------------------------------------------
// Variant B — file-backed streaming
// ---------------------------------------------------------------------------

/// Trains from a file-backed minibatch source that repeats indefinitely.
///
/// The epoch counter decrements only when the source reports a completed
/// sweep of the underlying file, so depending on file size some steps do not
/// consume an epoch and epoch counts are approximate rather than exact.
/// Returns the last step's metrics.
pub fn train_from_source(
    trainer: &mut Trainer,
    source: &mut TextMinibatchSource,
    config: &TrainConfig,
) -> Option<StepMetrics> {
    let mut epochs_remaining = config.epochs;
    let mut i = 0;
    let mut last = None;

    while epochs_remaining > 0 {
        let batch = source.next_minibatch(config.batch_size);
        let metrics = trainer.step(&batch);
        report_progress(i, config.report_every, &metrics);
        if batch.sweep_end {
            epochs_remaining -= 1;
        }
        i += 1;
        last = Some(metrics);
    }

    last
}

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

/// The reporting gate: every `report_every` minibatches, and only if the
/// step just taken consumed at least one sample.
pub fn should_report(minibatch_idx: usize, report_every: usize, previous_samples: usize) -> bool {
    minibatch_idx % report_every == 0 && previous_samples > 0
}

fn report_progress(minibatch_idx: usize, report_every: usize, metrics: &StepMetrics) {
    if should_report(minibatch_idx, report_every, metrics.samples) {
        // The printed "acc" is accuracy-fraction × sample-count, not a
        // proportion. Kept as the original program printed it.
        println!(
            "Minibatch Epoch: {:5} loss = {:.6}, acc = {}",
            minibatch_idx,
            metrics.loss,
            metrics.eval * metrics.samples as f64
        );
    }
}
