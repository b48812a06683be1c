//! Two-level classification of suppressed magnitudes.
//!
//! `high_cut = max * high_ratio` and `low_cut = high_cut * low_ratio` (the
//! low cut is a fraction of the high cut, not of the maximum). Values at or
//! above `high_cut` become the strong label, values in `[low_cut, high_cut)`
//! the weak label, and everything else keeps its input value. There is no
//! hysteresis pass: weak pixels are never promoted or dropped based on their
//! neighbours.
use crate::image::ImageI32;
use log::debug;
use serde::{Deserialize, Serialize};

/// Label values written for weak and strong edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeLabels {
    pub weak: i32,
    pub strong: i32,
}

impl Default for EdgeLabels {
    fn default() -> Self {
        Self {
            weak: 80,
            strong: 200,
        }
    }
}

/// Cut-offs derived from a magnitude map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdCuts {
    pub low: f32,
    pub high: f32,
}

impl ThresholdCuts {
    pub fn from_max(max: f32, low_ratio: f32, high_ratio: f32) -> Self {
        let high = max * high_ratio;
        Self {
            low: high * low_ratio,
            high,
        }
    }
}

/// Relabel `magnitude` into weak/strong bands.
///
/// A map whose maximum is not positive has no edges at all; it is returned
/// unchanged instead of letting both cuts collapse to zero and marking every
/// pixel strong.
pub fn double_threshold(
    magnitude: &ImageI32,
    low_ratio: f32,
    high_ratio: f32,
    labels: EdgeLabels,
) -> ImageI32 {
    double_threshold_with_cuts(magnitude, low_ratio, high_ratio, labels).0
}

/// [`double_threshold`] that also returns the cuts it applied (`None` when
/// the map had no positive magnitude).
pub fn double_threshold_with_cuts(
    magnitude: &ImageI32,
    low_ratio: f32,
    high_ratio: f32,
    labels: EdgeLabels,
) -> (ImageI32, Option<ThresholdCuts>) {
    let mut out = magnitude.clone();
    let max = match magnitude.max_value() {
        Some(m) if m > 0 => m as f32,
        _ => {
            debug!("double_threshold: no positive magnitude, nothing to label");
            return (out, None);
        }
    };

    let cuts = ThresholdCuts::from_max(max, low_ratio, high_ratio);
    for v in out.data.iter_mut() {
        let m = *v as f32;
        if m >= cuts.high {
            *v = labels.strong;
        } else if m >= cuts.low {
            *v = labels.weak;
        }
    }
    (out, Some(cuts))
}
