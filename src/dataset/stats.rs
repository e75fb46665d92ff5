use anyhow::Result;
use super::record::CarRecord;

/// Dataset-derived substitutes for unsupplied estimator inputs.
/// Computed once from the cleaned set; read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackStats {
    pub median_max_power: f64,
    pub mean_mileage: f64,
    pub median_km_driven: f64,
}

impl FallbackStats {
    pub fn from_records(records: &[CarRecord]) -> Result<Self> {
        if records.is_empty() {
            anyhow::bail!("cannot derive fallback statistics from an empty record set");
        }

        Ok(Self {
            median_max_power: median(records.iter().map(|r| r.max_power)),
            mean_mileage: mean(records.iter().map(|r| r.mileage)),
            median_km_driven: median(records.iter().map(|r| r.km_driven)),
        })
    }
}

/// Median of a non-empty sequence; the average of the two middle values
/// for even lengths
fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}
