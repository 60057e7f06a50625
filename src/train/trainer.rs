use crate::{
    data::Minibatch,
    loss::BceLoss,
    math::Matrix,
    model::Mlp,
    optim::Sgd,
    train::metrics::StepMetrics,
};

/// Pairs the model with its loss, accuracy metric and optimizer.
///
/// The trainer owns the model outright: parameters are written only inside
/// `step`, and `forward` is the read-only surface. `step` takes `&mut self`,
/// so two steps can never run concurrently on the same trainer.
pub struct Trainer {
    model: Mlp,
    optimizer: Sgd,
}

impl Trainer {
    pub fn new(model: Mlp, optimizer: Sgd) -> Trainer {
        Trainer { model, optimizer }
    }

    /// One forward pass, one backward pass, one in-place parameter update.
    ///
    /// Gradients are summed over the batch and applied once with the
    /// optimizer's per-sample rate. Returns the post-step loss/accuracy
    /// averages and the sample count consumed; an empty batch performs no
    /// update and reports zero samples.
    pub fn step(&mut self, batch: &Minibatch) -> StepMetrics {
        let n = batch.samples;
        if n == 0 {
            return StepMetrics {
                loss: 0.0,
                eval: 0.0,
                samples: 0,
            };
        }

        let mut acc_grads: Vec<(Matrix, Matrix)> = self
            .model
            .layers
            .iter()
            .map(|layer| layer.zeroed_gradients())
            .collect();

        let mut total_loss = 0.0;
        let mut total_eval = 0.0;

        for s in 0..n {
            let input = batch.inputs.row(s);
            let expected = batch.labels.row(s);

            let (output, caches) = self.model.forward_cached(input);

            total_loss += BceLoss::loss(&output, expected);
            total_eval += equal_fraction(&output, expected);

            let error = BceLoss::derivative(&output, expected);
            let mut delta = Matrix::row_vector(&error);

            // Backward pass.
            for i in (0..self.model.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::row_vector(input)
                } else {
                    caches[i - 1].a.clone()
                };

                let (w_grad, b_grad) = self.model.layers[i].gradients(
                    &delta,
                    &caches[i].z,
                    &input_for_layer,
                );

                if i > 0 {
                    // Propagate δ_i through the weights to ∂L/∂a_{i-1}.
                    delta = self.model.layers[i].backprop_delta(&b_grad);
                }

                acc_grads[i].0 = acc_grads[i].0.clone() + w_grad;
                acc_grads[i].1 = acc_grads[i].1.clone() + b_grad;
            }
        }

        for (i, (w_sum, b_sum)) in acc_grads.into_iter().enumerate() {
            self.optimizer.step(&mut self.model.layers[i], w_sum, b_sum);
        }

        StepMetrics {
            loss: total_loss / n as f64,
            eval: total_eval / n as f64,
            samples: n,
        }
    }

    /// Forward pass through the current parameters. Never mutates.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.model.forward(input)
    }

    /// Read-only access to the trained model, e.g. for persistence.
    pub fn model(&self) -> &Mlp {
        &self.model
    }
}

/// Fraction of outputs whose rounded prediction equals the label.
fn equal_fraction(predicted: &[f64], expected: &[f64]) -> f64 {
    let matches = predicted
        .iter()
        .zip(expected.iter())
        .filter(|(p, y)| p.round() == **y)
        .count();
    matches as f64 / predicted.len() as f64
}
