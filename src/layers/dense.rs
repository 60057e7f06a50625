use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::Activation, math::Matrix};

/// A fully-connected (affine) layer: `a = act(x·W + b)`.
///
/// Weights are Glorot-uniform, biases start at zero. The parameters are
/// private; after construction only `apply_gradients` may write them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dense {
    in_dim: usize,
    out_dim: usize,
    weights: Matrix,
    biases: Matrix,
    activation: Activation,
}

impl Dense {
    pub fn new<R: Rng>(
        in_dim: usize,
        out_dim: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Dense {
        Dense {
            in_dim,
            out_dim,
            weights: Matrix::glorot_uniform(in_dim, out_dim, rng),
            biases: Matrix::zeros(1, out_dim),
            activation,
        }
    }

    pub fn in_dim(&self) -> usize {
        self.in_dim
    }

    pub fn out_dim(&self) -> usize {
        self.out_dim
    }

    /// Forward pass for one 1×in_dim sample row. Returns the pre-activation
    /// `z = x·W + b` and the activation `a = act(z)`; the caller keeps them
    /// for backprop. Reads parameters only, never mutates.
    pub fn forward(&self, input: &Matrix) -> (Matrix, Matrix) {
        let z = input.clone() * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activation.apply(x));
        (z, a)
    }

    /// Computes parameter gradients. Returns (weights_grad, biases_grad).
    /// `delta` is ∂L/∂a for this layer (error in activation space), `z` the
    /// cached pre-activation from the forward pass, `input` the row the
    /// layer saw.
    pub fn gradients(&self, delta: &Matrix, z: &Matrix, input: &Matrix) -> (Matrix, Matrix) {
        // δ = error ⊙ act'(z)
        let act_derivative = z.map(|x| self.activation.derivative(x));
        let layer_delta = delta.hadamard(&act_derivative);

        let weights_grad = input.transpose() * layer_delta.clone();
        let biases_grad = layer_delta;

        (weights_grad, biases_grad)
    }

    /// Propagates this layer's bias-space delta to ∂L/∂a of the previous
    /// layer.
    pub fn backprop_delta(&self, biases_grad: &Matrix) -> Matrix {
        biases_grad.clone() * self.weights.transpose()
    }

    /// Applies pre-computed gradients scaled by `lr`.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, lr: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|x| x * lr);
        self.biases = self.biases.clone() - biases_grad.map(|x| x * lr);
    }

    /// Zero-valued gradient storage matching this layer's parameter shapes.
    pub fn zeroed_gradients(&self) -> (Matrix, Matrix) {
        (
            Matrix::zeros(self.weights.rows, self.weights.cols),
            Matrix::zeros(self.biases.rows, self.biases.cols),
        )
    }
}
