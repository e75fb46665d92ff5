use anyhow::Result;

/// Input width of the price model: [max_power, mileage, ln(km_driven)]
pub const FEATURE_DIM: usize = 3;

/// Narrow interface over the trained artifact.
///
/// Implementations predict the natural logarithm of the sale price from the
/// fixed-order feature vector; callers exponentiate. The seam exists so the
/// estimator can be exercised with doubles instead of real artifacts.
pub trait PriceModel: Send {
    fn predict(&self, features: &[f64; FEATURE_DIM]) -> Result<f64>;
}
