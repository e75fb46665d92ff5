mod app;
mod charts;
mod data;
mod input_panel;
mod stats_panel;

pub use app::EstimatorApp;
pub use data::{build_price_histogram, DatasetSummary, HistogramBin, PRICE_HISTOGRAM_BINS};

use crossbeam_channel::unbounded;
use std::thread;

use crate::controller::EstimatorWorker;
use crate::dataset::CleanDataset;
use crate::estimator::PriceEstimator;

/// Spawn the estimator worker and run the GUI until the window closes
pub fn launch_app(dataset: CleanDataset, estimator: PriceEstimator) -> anyhow::Result<()> {
    let (command_tx, command_rx) = unbounded();
    let (response_tx, response_rx) = unbounded();

    let summary = dataset.summary();
    let worker = EstimatorWorker::new(command_rx, response_tx, dataset, estimator);
    let worker_thread = thread::spawn(move || worker.run());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 780.0])
            .with_title("Car Price Estimator"),
        ..Default::default()
    };

    let gui_result = eframe::run_native(
        "Car Price Estimator",
        options,
        Box::new(move |_cc| Ok(Box::new(EstimatorApp::new(command_tx, response_rx, summary)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e));

    // The app sends Stop when it is dropped; join to surface worker errors
    match worker_thread.join() {
        Ok(worker_result) => worker_result?,
        Err(_) => anyhow::bail!("estimator worker panicked"),
    }

    gui_result
}
