use crate::{layers::Dense, math::Matrix};

/// Plain stochastic gradient descent with a fixed *per-sample* learning
/// rate: callers pass gradients summed over the minibatch and the update is
/// `param -= rate · grad_sum`, so each sample contributes one rate-sized
/// step regardless of batch size.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD update to a layer given its summed gradients.
    pub fn step(&self, layer: &mut Dense, weights_grad: Matrix, biases_grad: Matrix) {
        layer.apply_gradients(weights_grad, biases_grad, self.learning_rate);
    }
}
