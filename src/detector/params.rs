//! Parameter types configuring the detector stages.
//!
//! Every field has a default, and the whole struct deserializes from JSON
//! with missing keys falling back to those defaults. Parameters are checked
//! once by [`DetectorParams::validate`] when a detector is built.

use crate::edges::EdgeLabels;
use crate::error::{EdgeError, Result};
use crate::grayscale::DEFAULT_RGB_WEIGHTS;
use log::warn;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters for the five-stage pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Gaussian kernel size (odd, >= 1).
    pub gauss_size: usize,
    /// Gaussian standard deviation in pixels (> 0).
    pub sigma: f32,
    /// Luminance weights applied to (R, G, B).
    pub rgb_weights: [f32; 3],
    /// Ratios deriving the two threshold cut-offs.
    pub thresholds: ThresholdRatios,
    /// Label values for weak and strong edges.
    pub edge_labels: EdgeLabels,
    /// Shape of the returned label map.
    pub extent: ExtentPolicy,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            gauss_size: 5,
            sigma: 1.0,
            rgb_weights: DEFAULT_RGB_WEIGHTS,
            thresholds: ThresholdRatios::default(),
            edge_labels: EdgeLabels::default(),
            extent: ExtentPolicy::default(),
        }
    }
}

/// `high` is a fraction of the map maximum, `low` a fraction of the high cut.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRatios {
    pub low: f32,
    pub high: f32,
}

impl Default for ThresholdRatios {
    fn default() -> Self {
        Self {
            low: 0.05,
            high: 0.2,
        }
    }
}

/// Controls the extent of the label map returned by the detector.
///
/// The blur and gradient convolutions run without padding, so the computed
/// map is `gauss_size + 1` pixels smaller than the input on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtentPolicy {
    /// Re-embed the computed map at its true offset in an input-sized zero frame.
    #[default]
    Restore,
    /// Return the computed (shrunken) map as is.
    Valid,
}

impl DetectorParams {
    /// Check ranges; returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.gauss_size == 0 || self.gauss_size % 2 == 0 {
            return Err(EdgeError::InvalidKernelSize {
                size: self.gauss_size,
            });
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(EdgeError::InvalidParams(format!(
                "sigma must be positive and finite (got {})",
                self.sigma
            )));
        }
        if self.rgb_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(EdgeError::InvalidParams(format!(
                "rgb weights must be finite and non-negative (got {:?})",
                self.rgb_weights
            )));
        }
        let weight_sum: f32 = self.rgb_weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.05 {
            warn!(
                "rgb weights sum to {weight_sum:.4}; grayscale intensities will be rescaled"
            );
        }
        for (name, ratio) in [("low", self.thresholds.low), ("high", self.thresholds.high)] {
            if !(ratio > 0.0 && ratio < 1.0) {
                return Err(EdgeError::InvalidParams(format!(
                    "{name} threshold ratio must lie in (0, 1) (got {ratio})"
                )));
            }
        }
        Ok(())
    }

    /// Pixels lost on each side of the computed map relative to the input.
    pub fn border_margin(&self) -> usize {
        self.gauss_size / 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = DetectorParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.border_margin(), 3);
        assert_eq!(params.edge_labels, EdgeLabels { weak: 80, strong: 200 });
    }

    #[test]
    fn invalid_values_are_rejected() {
        let even = DetectorParams {
            gauss_size: 4,
            ..Default::default()
        };
        assert_eq!(
            even.validate(),
            Err(EdgeError::InvalidKernelSize { size: 4 })
        );

        let sigma = DetectorParams {
            sigma: -1.0,
            ..Default::default()
        };
        assert!(matches!(sigma.validate(), Err(EdgeError::InvalidParams(_))));

        let ratio = DetectorParams {
            thresholds: ThresholdRatios { low: 0.05, high: 1.0 },
            ..Default::default()
        };
        assert!(matches!(ratio.validate(), Err(EdgeError::InvalidParams(_))));

        let weights = DetectorParams {
            rgb_weights: [0.5, f32::NAN, 0.5],
            ..Default::default()
        };
        assert!(matches!(weights.validate(), Err(EdgeError::InvalidParams(_))));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: DetectorParams =
            serde_json::from_str(r#"{ "gauss_size": 3, "extent": "valid" }"#).unwrap();
        assert_eq!(params.gauss_size, 3);
        assert_eq!(params.extent, ExtentPolicy::Valid);
        assert_eq!(params.sigma, 1.0);
        assert_eq!(params.thresholds, ThresholdRatios::default());
    }
}
