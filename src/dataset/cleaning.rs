use crate::config::CleaningConfig;
use super::record::{CarRecord, RawCarRecord};

/// Result of one cleaning pass over the raw record set
#[derive(Debug, Default)]
pub struct CleaningOutcome {
    pub records: Vec<CarRecord>,
    pub excluded_fuel: usize,
    pub excluded_owner: usize,
    pub dropped_malformed: usize,
}

/// Applies the record exclusion and parsing rules before any statistics
/// are computed
pub struct DatasetCleaner {
    config: CleaningConfig,
}

impl DatasetCleaner {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    fn is_excluded_fuel(&self, fuel: &str) -> bool {
        self.config.excluded_fuel_types.iter().any(|f| f == fuel)
    }

    fn is_test_drive(&self, owner: &str) -> bool {
        owner == self.config.test_drive_owner
    }

    /// Clean the raw set: exclusion filters first, numeric parsing second.
    /// Rows whose compound numeric fields cannot be parsed are dropped and
    /// counted rather than failing the whole pass.
    pub fn clean(&self, raw_records: &[RawCarRecord]) -> CleaningOutcome {
        let mut outcome = CleaningOutcome::default();

        for raw in raw_records {
            if self.is_excluded_fuel(&raw.fuel) {
                outcome.excluded_fuel += 1;
                continue;
            }
            if self.is_test_drive(&raw.owner) {
                outcome.excluded_owner += 1;
                continue;
            }
            match CarRecord::from_raw(raw) {
                Ok(record) => outcome.records.push(record),
                Err(_) => outcome.dropped_malformed += 1,
            }
        }

        outcome
    }
}
