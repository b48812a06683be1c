//! Edge detection on raster images.
//!
//! The pipeline converts an 8-bit image to grayscale, blurs it with a
//! Gaussian kernel, computes Sobel gradients, thins them with non-maximum
//! suppression and labels the survivors as weak or strong edges with a
//! two-level threshold.

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage building blocks, usable on their own.
pub mod config;
pub mod convolve;
pub mod edges;
pub mod grayscale;
pub mod kernel;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{DetectorParams, EdgeDetector, ExtentPolicy, ThresholdRatios};
pub use crate::diagnostics::{DetectionReport, PipelineTrace};
pub use crate::edges::EdgeLabels;
pub use crate::error::{EdgeError, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// # fn main() -> edge_detector::Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8::gray(w, h, &gray);
///
/// let detector = EdgeDetector::new(DetectorParams::default())?;
/// let labels = detector.detect(img)?;
/// println!("strong edges: {}", labels.count(200));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageI32, ImageU8};
    pub use crate::{DetectorParams, EdgeDetector, EdgeLabels};
}

// --- Stage-level API -------------------------------------------------------

pub mod stages {
    pub use crate::convolve::{convolve, pad_image};
    pub use crate::edges::{
        double_threshold, double_threshold_with_cuts, intensity_gradient, non_max_suppression,
    };
    pub use crate::grayscale::to_grayscale;
    pub use crate::kernel::gaussian_kernel;
}
