pub mod dataset;
pub mod minibatch;
pub mod text_source;

pub use dataset::{shuffle, xor_dataset, Sample};
pub use minibatch::Minibatch;
pub use text_source::{StreamConfig, TextMinibatchSource};
