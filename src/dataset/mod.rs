mod cleaning;
mod record;
mod stats;

pub use cleaning::{CleaningOutcome, DatasetCleaner};
pub use record::{parse_compound_number, CarRecord, RawCarRecord};
pub use stats::FallbackStats;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::common::DataLoader;
use crate::config::CleaningConfig;
use crate::ui::{build_price_histogram, DatasetSummary, PRICE_HISTOGRAM_BINS};

/// The cleaned historical record set and its derived statistics.
/// Built once at startup (or on a dataset swap); read-only afterwards.
pub struct CleanDataset {
    pub records: Vec<CarRecord>,
    pub stats: FallbackStats,
    pub source_files: Vec<PathBuf>,
    pub total_raw: usize,
    pub excluded_fuel: usize,
    pub excluded_owner: usize,
    pub dropped_malformed: usize,
}

impl CleanDataset {
    /// Load every CSV matching the path or glob pattern and run the
    /// cleaning pipeline over the concatenated rows
    pub fn load(pattern: &str) -> Result<Self> {
        let files = DataLoader::resolve_files(pattern)?;
        Self::load_files(&files)
    }

    /// Load an explicit list of CSV files
    pub fn load_files(files: &[PathBuf]) -> Result<Self> {
        let mut raw_records = Vec::new();
        for file in files {
            raw_records.extend(read_csv_records(file)?);
        }

        let mut dataset = Self::prepare(&raw_records, &CleaningConfig::default())?;
        dataset.source_files = files.to_vec();
        Ok(dataset)
    }

    /// The `prepare(raw) -> (cleaned, stats)` pipeline: exclusion filters,
    /// numeric parsing, then fallback statistics over the surviving set
    pub fn prepare(raw_records: &[RawCarRecord], config: &CleaningConfig) -> Result<Self> {
        let outcome = DatasetCleaner::new(config.clone()).clean(raw_records);
        let stats = FallbackStats::from_records(&outcome.records)
            .context("dataset contains no usable records after cleaning")?;

        Ok(Self {
            records: outcome.records,
            stats,
            source_files: Vec::new(),
            total_raw: raw_records.len(),
            excluded_fuel: outcome.excluded_fuel,
            excluded_owner: outcome.excluded_owner,
            dropped_malformed: outcome.dropped_malformed,
        })
    }

    /// Snapshot for the statistics panel
    pub fn summary(&self) -> DatasetSummary {
        let prices: Vec<f64> = self.records.iter().map(|r| r.selling_price).collect();
        let min_price = prices.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_price = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        DatasetSummary {
            source_files: self
                .source_files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            total_raw: self.total_raw,
            cleaned: self.records.len(),
            excluded_fuel: self.excluded_fuel,
            excluded_owner: self.excluded_owner,
            dropped_malformed: self.dropped_malformed,
            stats: self.stats,
            min_price,
            max_price,
            price_histogram: build_price_histogram(&prices, PRICE_HISTOGRAM_BINS),
        }
    }
}

fn read_csv_records(path: &Path) -> Result<Vec<RawCarRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawCarRecord =
            row.with_context(|| format!("Malformed CSV row in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_HEADER: &str =
        "name,year,selling_price,km_driven,fuel,seller_type,transmission,owner,mileage,engine,max_power,torque,seats\n";

    fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut contents = String::from(CSV_HEADER);
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_cleans_and_derives_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "cars.csv",
            &[
                "Maruti Swift,2014,450000,145500,Diesel,Individual,Manual,First Owner,23.4 kmpl,1248 CC,74 bhp,190Nm@ 2000rpm,5",
                "Hyundai i20,2016,100000,120000,LPG,Individual,Manual,First Owner,17.7 km/kg,1197 CC,81.86 bhp,115Nm,5",
                "Honda City,2017,950000,1000,Petrol,Dealer,Automatic,Test Drive Car,17.8 kmpl,1497 CC,117 bhp,145Nm,5",
            ],
        );

        let dataset = CleanDataset::load(path.to_str().unwrap()).unwrap();

        assert_eq!(dataset.total_raw, 3);
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.excluded_fuel, 1);
        assert_eq!(dataset.excluded_owner, 1);
        assert_eq!(dataset.records[0].max_power, 74.0);
        assert_eq!(dataset.stats.median_km_driven, 145500.0);
    }

    #[test]
    fn test_load_concatenates_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "cars_2019.csv",
            &["Car A,2019,300000,50000,Petrol,Individual,Manual,First Owner,18 kmpl,1200 CC,80 bhp,110Nm,5"],
        );
        write_csv(
            dir.path(),
            "cars_2020.csv",
            &["Car B,2020,500000,20000,Diesel,Individual,Manual,First Owner,21 kmpl,1500 CC,100 bhp,200Nm,5"],
        );

        let pattern = dir.path().join("*.csv");
        let dataset = CleanDataset::load(pattern.to_str().unwrap()).unwrap();
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.source_files.len(), 2);
    }

    #[test]
    fn test_prepare_is_deterministic() {
        let raw = vec![
            RawCarRecord {
                fuel: "Petrol".to_string(),
                owner: "First Owner".to_string(),
                mileage: "18.6 kmpl".to_string(),
                max_power: "88.5 bhp".to_string(),
                km_driven: 35000.0,
                selling_price: 550000.0,
            },
            RawCarRecord {
                fuel: "Diesel".to_string(),
                owner: "Second Owner".to_string(),
                mileage: "24.3 kmpl".to_string(),
                max_power: "67 bhp".to_string(),
                km_driven: 110000.0,
                selling_price: 280000.0,
            },
        ];

        let first = CleanDataset::prepare(&raw, &CleaningConfig::default()).unwrap();
        let second = CleanDataset::prepare(&raw, &CleaningConfig::default()).unwrap();
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.records, second.records);
    }

    #[test]
    fn test_prepare_fails_when_nothing_survives() {
        let raw = vec![RawCarRecord {
            fuel: "CNG".to_string(),
            owner: "First Owner".to_string(),
            mileage: "26.2 km/kg".to_string(),
            max_power: "58.2 bhp".to_string(),
            km_driven: 40000.0,
            selling_price: 325000.0,
        }];

        assert!(CleanDataset::prepare(&raw, &CleaningConfig::default()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(CleanDataset::load("no/such/cars.csv").is_err());
    }
}
