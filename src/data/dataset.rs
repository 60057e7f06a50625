use rand::Rng;
use rand::seq::SliceRandom;

/// One training example: an input vector and its target vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub label: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, label: Vec<f64>) -> Sample {
        Sample { input, label }
    }
}

/// The four fixed rows of the XOR truth table.
pub fn xor_dataset() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

/// Uniformly random permutation of the sample order, driven by the caller's
/// generator. Applied before each epoch to decorrelate gradient updates.
pub fn shuffle<R: Rng>(samples: &mut [Sample], rng: &mut R) {
    samples.shuffle(rng);
}
