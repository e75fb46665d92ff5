use anyhow::Result;

use crate::dataset::FallbackStats;
use crate::model::{PriceModel, FEATURE_DIM};
use super::query::EstimateQuery;

/// A finished prediction: the resolved feature vector, the model output in
/// log-price space and the display price
#[derive(Debug, Clone)]
pub struct Estimate {
    pub price: u64,
    pub log_price: f64,
    pub features: [f64; FEATURE_DIM],
    pub used_fallback: [bool; FEATURE_DIM],
}

impl Estimate {
    /// The single output line of the estimator
    pub fn message(&self) -> String {
        format!("The predictive car price is {}", self.price)
    }
}

/// Fills missing inputs with dataset statistics, transforms them, and runs
/// the trained model. Pure request/response; holds no per-request state.
pub struct PriceEstimator {
    model: Box<dyn PriceModel>,
    fallback: FallbackStats,
}

impl PriceEstimator {
    pub fn new(model: impl PriceModel + 'static, fallback: FallbackStats) -> Self {
        Self {
            model: Box::new(model),
            fallback,
        }
    }

    pub fn set_fallback(&mut self, fallback: FallbackStats) {
        self.fallback = fallback;
    }

    pub fn set_model(&mut self, model: impl PriceModel + 'static) {
        self.model = Box::new(model);
    }

    /// Single-shot inference with fallback substitution.
    ///
    /// Negative power or mileage and non-positive kilometers driven are
    /// rejected with a descriptive error before the logarithm is taken.
    pub fn estimate(&self, query: &EstimateQuery) -> Result<Estimate> {
        let max_power = query.max_power.unwrap_or(self.fallback.median_max_power);
        let mileage = query.mileage.unwrap_or(self.fallback.mean_mileage);
        let km_driven = query.km_driven.unwrap_or(self.fallback.median_km_driven);

        if max_power < 0.0 {
            anyhow::bail!("maximum power must not be negative (got {})", max_power);
        }
        if mileage < 0.0 {
            anyhow::bail!("mileage must not be negative (got {})", mileage);
        }
        if km_driven <= 0.0 {
            anyhow::bail!(
                "kilometers driven must be positive to take its logarithm (got {})",
                km_driven
            );
        }

        let features = [max_power, mileage, km_driven.ln()];
        let log_price = self.model.predict(&features)?;

        let price = log_price.exp();
        if !price.is_finite() {
            anyhow::bail!("model produced a non-finite price (log-price {})", log_price);
        }

        Ok(Estimate {
            // truncated toward zero for display
            price: price as u64,
            log_price,
            features,
            used_fallback: [
                query.max_power.is_none(),
                query.mileage.is_none(),
                query.km_driven.is_none(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearPriceModel;

    /// Double returning a fixed log-price regardless of features
    struct ConstantModel(f64);

    impl PriceModel for ConstantModel {
        fn predict(&self, _features: &[f64; FEATURE_DIM]) -> Result<f64> {
            Ok(self.0)
        }
    }

    /// Double computing a dot product in pure Rust
    struct LinearDouble {
        weights: [f64; FEATURE_DIM],
        intercept: f64,
    }

    impl PriceModel for LinearDouble {
        fn predict(&self, features: &[f64; FEATURE_DIM]) -> Result<f64> {
            let dot: f64 = self.weights.iter().zip(features).map(|(w, x)| w * x).sum();
            Ok(dot + self.intercept)
        }
    }

    fn fallback() -> FallbackStats {
        FallbackStats {
            median_max_power: 82.0,
            mean_mileage: 19.4,
            median_km_driven: 60000.0,
        }
    }

    fn linear_estimator() -> PriceEstimator {
        PriceEstimator::new(
            LinearDouble {
                weights: [0.02, 0.05, 0.3],
                intercept: 5.0,
            },
            fallback(),
        )
    }

    #[test]
    fn test_full_fallback_scenario() {
        let estimator = PriceEstimator::new(ConstantModel(13.0), fallback());
        let estimate = estimator.estimate(&EstimateQuery::default()).unwrap();

        assert_eq!(estimate.message(), "The predictive car price is 442413");
        assert_eq!(estimate.used_fallback, [true, true, true]);
        assert_eq!(estimate.features[0], 82.0);
        assert_eq!(estimate.features[1], 19.4);
        assert_eq!(estimate.features[2], 60000f64.ln());
    }

    #[test]
    fn test_full_fallback_scenario_with_candle_model() {
        // same scenario through the real inference path
        let model = LinearPriceModel::from_coefficients([0.0, 0.0, 0.0], 13.0).unwrap();
        let estimator = PriceEstimator::new(model, fallback());

        let estimate = estimator.estimate(&EstimateQuery::default()).unwrap();
        assert_eq!(estimate.message(), "The predictive car price is 442413");
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let estimator = linear_estimator();
        let query = EstimateQuery {
            max_power: Some(110.0),
            mileage: Some(21.5),
            km_driven: Some(42000.0),
        };

        let first = estimator.estimate(&query).unwrap();
        let second = estimator.estimate(&query).unwrap();
        assert_eq!(first.price, second.price);
        assert_eq!(first.log_price, second.log_price);
    }

    #[test]
    fn test_absent_inputs_equal_explicit_fallbacks() {
        let estimator = linear_estimator();

        let implicit = estimator.estimate(&EstimateQuery::default()).unwrap();
        let explicit = estimator
            .estimate(&EstimateQuery {
                max_power: Some(82.0),
                mileage: Some(19.4),
                km_driven: Some(60000.0),
            })
            .unwrap();

        assert_eq!(implicit.price, explicit.price);
        assert_eq!(implicit.features, explicit.features);
        assert_eq!(explicit.used_fallback, [false, false, false]);
    }

    #[test]
    fn test_single_input_overrides_only_its_coordinate() {
        let estimator = linear_estimator();

        let baseline = estimator.estimate(&EstimateQuery::default()).unwrap();
        let with_power = estimator
            .estimate(&EstimateQuery {
                max_power: Some(100.0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(with_power.features[0], 100.0);
        assert_eq!(with_power.features[1], baseline.features[1]);
        assert_eq!(with_power.features[2], baseline.features[2]);
        assert_eq!(with_power.used_fallback, [false, true, true]);
    }

    #[test]
    fn test_unit_distance_yields_zero_log() {
        let estimator = linear_estimator();
        let estimate = estimator
            .estimate(&EstimateQuery {
                max_power: Some(0.0),
                mileage: Some(0.0),
                km_driven: Some(1.0),
            })
            .unwrap();

        assert_eq!(estimate.features, [0.0, 0.0, 0.0]);
        // only the intercept remains
        assert_eq!(estimate.log_price, 5.0);
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let estimator = linear_estimator();

        for km_driven in [0.0, -5.0] {
            let err = estimator
                .estimate(&EstimateQuery {
                    km_driven: Some(km_driven),
                    ..Default::default()
                })
                .unwrap_err();
            assert!(err.to_string().contains("kilometers driven"));
        }
    }

    #[test]
    fn test_rejects_negative_power_and_mileage() {
        let estimator = linear_estimator();

        let err = estimator
            .estimate(&EstimateQuery {
                max_power: Some(-1.0),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("maximum power"));

        let err = estimator
            .estimate(&EstimateQuery {
                mileage: Some(-0.1),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("mileage"));
    }

    #[test]
    fn test_price_is_truncated_toward_zero() {
        // exp(12.0) = 162754.79... -> 162754
        let estimator = PriceEstimator::new(ConstantModel(12.0), fallback());
        let estimate = estimator.estimate(&EstimateQuery::default()).unwrap();
        assert_eq!(estimate.price, 162754);
    }
}
