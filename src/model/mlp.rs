use std::path::Path;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::Activation, layers::Dense, math::Matrix};

/// Per-layer forward-pass cache kept for backprop.
pub(crate) struct LayerCache {
    pub z: Matrix,
    pub a: Matrix,
}

/// The two-layer perceptron: affine(D_in→H) → tanh → affine(H→D_out) → sigmoid.
///
/// Parameters are created once at construction and only ever written by the
/// optimizer through the trainer; the public surface is read-only.
#[derive(Serialize, Deserialize)]
pub struct Mlp {
    pub(crate) layers: Vec<Dense>,
}

impl Mlp {
    /// Builds the model for a 1-D input descriptor. `hidden_dim` and
    /// `output_dim` are caller-supplied; the input width is taken from the
    /// descriptor itself.
    ///
    /// # Panics
    /// Panics if `input_shape` does not describe a one-dimensional input.
    pub fn new<R: Rng>(
        input_shape: &[usize],
        hidden_dim: usize,
        output_dim: usize,
        rng: &mut R,
    ) -> Mlp {
        assert_eq!(
            input_shape.len(),
            1,
            "Mlp::new: input must be one-dimensional, got shape {input_shape:?}"
        );
        let in_dim = input_shape[0];

        Mlp {
            layers: vec![
                Dense::new(in_dim, hidden_dim, Activation::Tanh, rng),
                Dense::new(hidden_dim, output_dim, Activation::Sigmoid, rng),
            ],
        }
    }

    pub fn input_dim(&self) -> usize {
        self.layers[0].in_dim()
    }

    pub fn output_dim(&self) -> usize {
        self.layers[self.layers.len() - 1].out_dim()
    }

    /// Forward pass for one sample. Pure function of the current parameter
    /// state: repeated calls with the same input yield bit-identical output.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        let (output, _) = self.forward_cached(input);
        output
    }

    /// Forward pass that also returns each layer's (z, a) cache for
    /// backprop.
    pub(crate) fn forward_cached(&self, input: &[f64]) -> (Vec<f64>, Vec<LayerCache>) {
        let mut current = Matrix::row_vector(input);
        let mut caches = Vec::with_capacity(self.layers.len());

        for layer in &self.layers {
            let (z, a) = layer.forward(&current);
            current = a.clone();
            caches.push(LayerCache { z, a });
        }

        (current.data[0].clone(), caches)
    }

    /// Serializes the model parameters to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a model from a JSON file previously written by
    /// `save_json`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<Mlp> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
