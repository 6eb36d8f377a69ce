use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse scan config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("empty_line_ratio must be between 0 and 1 (exclusive), got {0}")]
    RatioOutOfRange(f32),
}

/// Tunables for the receipt pipeline. The defaults reproduce the stock
/// behavior; embedding applications may override any subset via TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Global binarization cutoff, 0–255. Pixels below it become ink.
    pub threshold: u8,
    /// Sigma of the Gaussian blur applied before thresholding.
    pub blur_sigma: f32,
    /// Margin added around the detected content box, in pixels per side.
    pub padding: u32,
    /// Fraction of a row/column that must be background for the line to
    /// count as empty. Must lie strictly between 0 and 1.
    pub empty_line_ratio: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            threshold: 150,
            blur_sigma: 2.0,
            padding: 10,
            empty_line_ratio: 0.95,
        }
    }
}

impl ScanConfig {
    /// Parse a TOML fragment; unspecified fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ScanConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.empty_line_ratio > 0.0 && self.empty_line_ratio < 1.0) {
            return Err(ConfigError::RatioOutOfRange(self.empty_line_ratio));
        }
        Ok(())
    }
}
