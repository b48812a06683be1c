//! Edge stages downstream of the blur: gradients, suppression, thresholding.
//!
//! - [`grad`]: Sobel responses, normalized magnitude and direction.
//! - [`nms`]: direction-aligned non‑maximum suppression with a zero border.
//! - [`threshold`]: weak/strong relabelling from two chained cut-offs.

pub mod grad;
pub mod nms;
pub mod threshold;

pub use grad::{intensity_gradient, GradientField};
pub use nms::{non_max_suppression, DirectionBand};
pub use threshold::{double_threshold, double_threshold_with_cuts, EdgeLabels, ThresholdCuts};
