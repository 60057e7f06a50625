pub mod math;
pub mod activation;
pub mod layers;
pub mod model;
pub mod loss;
pub mod optim;
pub mod data;
pub mod device;
pub mod error;
pub mod train;
pub mod eval;

// Convenience re-exports
pub use math::Matrix;
pub use activation::Activation;
pub use layers::Dense;
pub use model::Mlp;
pub use loss::BceLoss;
pub use optim::Sgd;
pub use data::{shuffle, xor_dataset, Minibatch, Sample, StreamConfig, TextMinibatchSource};
pub use device::{Device, DeviceKind};
pub use error::{DataError, DeviceError};
pub use train::{should_report, train_from_memory, train_from_source, StepMetrics, TrainConfig, Trainer};
pub use eval::{print_predictions, XOR_INPUTS};
