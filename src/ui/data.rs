use crate::dataset::FallbackStats;

/// Number of buckets in the selling price chart
pub const PRICE_HISTOGRAM_BINS: usize = 30;

/// Histogram bucket for the selling price chart
#[derive(Debug, Clone, Copy)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Snapshot of the prepared dataset shown in the statistics panel
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub source_files: Vec<String>,
    pub total_raw: usize,
    pub cleaned: usize,
    pub excluded_fuel: usize,
    pub excluded_owner: usize,
    pub dropped_malformed: usize,
    pub stats: FallbackStats,
    pub min_price: f64,
    pub max_price: f64,
    pub price_histogram: Vec<HistogramBin>,
}

/// Equal-width binning over [min, max]; the maximum lands in the last bin
pub fn build_price_histogram(prices: &[f64], bins: usize) -> Vec<HistogramBin> {
    if prices.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: prices.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &price in prices {
        let mut index = ((price - min) / width) as usize;
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
