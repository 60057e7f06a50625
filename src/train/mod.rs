pub mod trainer;
pub mod metrics;
pub mod train_config;
pub mod loop_fn;

pub use trainer::Trainer;
pub use metrics::StepMetrics;
pub use train_config::TrainConfig;
pub use loop_fn::{should_report, train_from_memory, train_from_source};
