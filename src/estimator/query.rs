/// Per-request estimator inputs; `None` means "substitute the dataset
/// fallback statistic"
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimateQuery {
    pub max_power: Option<f64>,
    pub mileage: Option<f64>,
    pub km_driven: Option<f64>,
}
