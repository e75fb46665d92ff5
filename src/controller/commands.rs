use std::path::PathBuf;

use crate::estimator::{Estimate, EstimateQuery};
use crate::ui::DatasetSummary;

/// Estimator worker commands using Command Pattern
#[derive(Debug, Clone)]
pub enum EstimatorCommand {
    /// Run one prediction
    Estimate(EstimateQuery),
    /// Reload the dataset from new file(s) and refresh the fallbacks
    ChangeDataset(Vec<PathBuf>),
    /// Reload the model artifact
    ChangeModel(PathBuf),
    /// Shut the worker down
    Stop,
}

/// Responses sent back to GUI
#[derive(Debug, Clone)]
pub enum EstimatorResponse {
    /// Prediction finished
    Estimated(Estimate),
    /// Dataset reloaded successfully
    DatasetChanged(DatasetSummary),
    /// Model artifact reloaded successfully
    ModelChanged(PathBuf),
    /// A command failed; the previous state is kept
    Error(String),
    /// Worker exited
    Stopped,
}
