use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};
use std::path::{Path, PathBuf};

use crate::dataset::CleanDataset;
use crate::estimator::PriceEstimator;
use crate::model::LinearPriceModel;
use super::commands::{EstimatorCommand, EstimatorResponse};

/// Owns the prepared dataset and the estimator, serving GUI commands.
/// All mutation after startup happens on this thread; the GUI only ever
/// sees immutable snapshots in responses.
pub struct EstimatorWorker {
    command_rx: Receiver<EstimatorCommand>,
    response_tx: Sender<EstimatorResponse>,
    /// Kept for the process lifetime; the estimator reads only the stats
    #[allow(dead_code)]
    dataset: CleanDataset,
    estimator: PriceEstimator,
}

impl EstimatorWorker {
    pub fn new(
        command_rx: Receiver<EstimatorCommand>,
        response_tx: Sender<EstimatorResponse>,
        dataset: CleanDataset,
        estimator: PriceEstimator,
    ) -> Self {
        Self {
            command_rx,
            response_tx,
            dataset,
            estimator,
        }
    }

    /// Serve commands until `Stop` or until the GUI side goes away
    pub fn run(mut self) -> Result<()> {
        loop {
            match self.command_rx.recv() {
                Ok(EstimatorCommand::Estimate(query)) => {
                    let response = match self.estimator.estimate(&query) {
                        Ok(estimate) => EstimatorResponse::Estimated(estimate),
                        Err(e) => EstimatorResponse::Error(format!("{:#}", e)),
                    };
                    let _ = self.response_tx.send(response);
                }
                Ok(EstimatorCommand::ChangeDataset(paths)) => self.change_dataset(&paths),
                Ok(EstimatorCommand::ChangeModel(path)) => self.change_model(&path),
                Ok(EstimatorCommand::Stop) => {
                    let _ = self.response_tx.send(EstimatorResponse::Stopped);
                    break;
                }
                Err(_) => break, // GUI dropped the channel
            }
        }
        Ok(())
    }

    fn change_dataset(&mut self, paths: &[PathBuf]) {
        match CleanDataset::load_files(paths) {
            Ok(dataset) => {
                self.estimator.set_fallback(dataset.stats);
                let summary = dataset.summary();
                self.dataset = dataset;
                let _ = self.response_tx.send(EstimatorResponse::DatasetChanged(summary));
            }
            Err(e) => {
                let _ = self.response_tx.send(EstimatorResponse::Error(format!("{:#}", e)));
            }
        }
    }

    fn change_model(&mut self, path: &Path) {
        match LinearPriceModel::load(path) {
            Ok(model) => {
                self.estimator.set_model(model);
                let _ = self
                    .response_tx
                    .send(EstimatorResponse::ModelChanged(path.to_path_buf()));
            }
            Err(e) => {
                let _ = self.response_tx.send(EstimatorResponse::Error(format!("{:#}", e)));
            }
        }
    }
}
