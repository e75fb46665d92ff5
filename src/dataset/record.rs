use anyhow::{Context, Result};
use serde::Deserialize;

/// One row of the historical sales CSV as stored on disk.
///
/// `mileage` and `max_power` arrive as compound "<value> <unit>" strings
/// ("23.4 kmpl", "74 bhp"); columns not named here are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCarRecord {
    pub fuel: String,
    pub owner: String,
    pub mileage: String,
    pub max_power: String,
    pub km_driven: f64,
    pub selling_price: f64,
}

/// A cleaned record: numeric fields parsed, units discarded
#[derive(Debug, Clone, PartialEq)]
pub struct CarRecord {
    pub fuel: String,
    pub owner: String,
    pub mileage: f64,
    pub max_power: f64,
    pub km_driven: f64,
    pub selling_price: f64,
}

impl CarRecord {
    pub fn from_raw(raw: &RawCarRecord) -> Result<Self> {
        Ok(Self {
            fuel: raw.fuel.clone(),
            owner: raw.owner.clone(),
            mileage: parse_compound_number(&raw.mileage)
                .with_context(|| format!("invalid mileage {:?}", raw.mileage))?,
            max_power: parse_compound_number(&raw.max_power)
                .with_context(|| format!("invalid max_power {:?}", raw.max_power))?,
            km_driven: raw.km_driven,
            selling_price: raw.selling_price,
        })
    }
}

/// Split a "<value> <unit>" field at the first space and parse the value.
/// A bare number with no unit parses the same way; the unit is discarded.
pub fn parse_compound_number(text: &str) -> Result<f64> {
    let value = text.trim().split(' ').next().unwrap_or("");
    if value.is_empty() {
        anyhow::bail!("empty numeric field");
    }
    value
        .parse::<f64>()
        .map_err(|e| anyhow::anyhow!("{} in {:?}", e, text))
}
