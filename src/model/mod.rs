mod linear;
mod price_model;

pub use linear::LinearPriceModel;
pub use price_model::{PriceModel, FEATURE_DIM};
