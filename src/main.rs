mod common;
mod config;
mod controller;
mod dataset;
mod estimator;
mod model;
mod ui;

use anyhow::Result;
use dataset::CleanDataset;
use estimator::PriceEstimator;
use model::LinearPriceModel;

fn main() -> Result<()> {
    println!("🚗 Car Price Estimator\n");

    let dataset_pattern = config::get_dataset_file_pattern();
    let model_path = config::get_model_file_path();

    // Load-time failures are fatal: without a dataset and a model the
    // process must not serve requests.
    let dataset = CleanDataset::load(&dataset_pattern)?;

    println!(
        "Found {} file(s) matching pattern '{}':",
        dataset.source_files.len(),
        dataset_pattern
    );
    for (i, file) in dataset.source_files.iter().enumerate() {
        println!("  [{}] {}", i + 1, file.display());
    }
    println!();

    println!(
        "Cleaned records: {} (of {} raw rows)",
        dataset.records.len(),
        dataset.total_raw
    );
    println!("  Excluded by fuel type (LPG/CNG): {}", dataset.excluded_fuel);
    println!("  Excluded test drive cars: {}", dataset.excluded_owner);
    println!("  Dropped malformed rows: {}", dataset.dropped_malformed);
    println!("Fallback statistics:");
    println!("  Median max power: {:.3} bhp", dataset.stats.median_max_power);
    println!("  Mean mileage: {:.3} km/l", dataset.stats.mean_mileage);
    println!("  Median km driven: {:.0} km", dataset.stats.median_km_driven);
    println!();

    let model = LinearPriceModel::load(&model_path)?;
    println!("Model artifact loaded from: {}\n", model_path);

    let estimator = PriceEstimator::new(model, dataset.stats);
    ui::launch_app(dataset, estimator)
}
