//! Edge detector orchestrating the five-stage pipeline.
//!
//! Overview
//! - Converts the 8-bit input to a grayscale float map with configurable
//!   luminance weights.
//! - Blurs it with an (unnormalized) Gaussian kernel.
//! - Computes Sobel gradients, normalizing the magnitude to a 255 maximum.
//! - Thins ridges with direction-aligned non-maximum suppression.
//! - Relabels survivors into weak/strong edges with two chained cut-offs.
//!
//! The stages form a strict chain: every stage consumes the previous
//! output immutably and allocates its own, and the first error aborts the
//! run.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the [`EdgeDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{DetectorParams, ExtentPolicy, ThresholdRatios};
pub use pipeline::EdgeDetector;
