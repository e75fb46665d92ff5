mod price_estimator;
mod query;

pub use price_estimator::{Estimate, PriceEstimator};
pub use query::EstimateQuery;
