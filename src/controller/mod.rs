pub mod commands;
pub mod estimator_worker;

pub use commands::{EstimatorCommand, EstimatorResponse};
pub use estimator_worker::EstimatorWorker;
