use crate::diagnostics::TimingBreakdown;
use crate::edges::{EdgeLabels, ThresholdCuts};
use crate::image::{ImageF32, ImageI32};
use serde::Serialize;

/// Result produced by [`EdgeDetector::detect_with_report`](crate::EdgeDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Final label map (shape depends on the extent policy).
    #[serde(skip)]
    pub labels: ImageI32,
    /// Normalized gradient magnitude on the computed (unpadded) grid.
    #[serde(skip)]
    pub magnitude: ImageF32,
    pub trace: PipelineTrace,
}

/// Structured record of what each stage saw and produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    /// Size of the map the stages actually computed.
    pub computed_width: usize,
    pub computed_height: usize,
    /// Offset of the computed map inside the returned label map.
    pub offset: usize,
    pub flat_gradient: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuts: Option<ThresholdCuts>,
    pub labels: LabelStats,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

/// Pixel counts per class in a label map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStats {
    pub strong: usize,
    pub weak: usize,
    pub zero: usize,
    /// Pixels below the low cut that kept a non-zero magnitude.
    pub unlabeled: usize,
}

impl LabelStats {
    pub fn from_map(map: &ImageI32, labels: EdgeLabels) -> Self {
        let mut stats = Self::default();
        for &v in &map.data {
            if v == labels.strong {
                stats.strong += 1;
            } else if v == labels.weak {
                stats.weak += 1;
            } else if v == 0 {
                stats.zero += 1;
            } else {
                stats.unlabeled += 1;
            }
        }
        stats
    }
}
