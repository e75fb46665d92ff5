use anyhow::{Context, Result};
use candle_core::{DType, Device, Tensor};
use candle_nn::{linear, Linear, Module, VarBuilder, VarMap};
use std::collections::HashMap;
use std::path::Path;

use super::price_model::{PriceModel, FEATURE_DIM};

/// Linear regression over the three car features, running on candle.
///
/// The artifact is a safetensors file holding `linear.weight` `[1, 3]` and
/// `linear.bias` `[1]`, trained offline against log-price targets.
pub struct LinearPriceModel {
    device: Device,
    inner: Linear,
}

impl LinearPriceModel {
    /// Load the trained artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let device = Device::Cpu;

        let mut varmap = VarMap::new();
        let vs = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        let inner = linear(FEATURE_DIM, 1, vs.pp("linear"))?;

        varmap
            .load(path)
            .with_context(|| format!("Failed to load model artifact: {}", path.display()))?;

        Ok(Self { device, inner })
    }

    /// Build a model from explicit coefficients (artifact tooling and tests)
    #[allow(dead_code)]
    pub fn from_coefficients(weights: [f64; FEATURE_DIM], intercept: f64) -> Result<Self> {
        let device = Device::Cpu;
        let weights: Vec<f32> = weights.iter().map(|&w| w as f32).collect();
        let weight = Tensor::from_vec(weights, (1, FEATURE_DIM), &device)?;
        let bias = Tensor::new(&[intercept as f32], &device)?;

        Ok(Self {
            device,
            inner: Linear::new(weight, Some(bias)),
        })
    }

    /// Write the current weights as a loadable artifact
    #[allow(dead_code)]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut tensors = HashMap::new();
        tensors.insert("linear.weight".to_string(), self.inner.weight().clone());
        if let Some(bias) = self.inner.bias() {
            tensors.insert("linear.bias".to_string(), bias.clone());
        }

        candle_core::safetensors::save(&tensors, path.as_ref())
            .with_context(|| format!("Failed to save model artifact: {}", path.as_ref().display()))
    }
}

impl PriceModel for LinearPriceModel {
    fn predict(&self, features: &[f64; FEATURE_DIM]) -> Result<f64> {
        let features: Vec<f32> = features.iter().map(|&f| f as f32).collect();
        let input = Tensor::from_vec(features, (1, FEATURE_DIM), &self.device)?;

        let output = self.inner.forward(&input)?;
        let log_price = output.squeeze(0)?.squeeze(0)?.to_scalar::<f32>()? as f64;

        Ok(log_price)
    }
}
