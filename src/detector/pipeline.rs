use crate::convolve::convolve;
use crate::detector::params::{DetectorParams, ExtentPolicy};
use crate::diagnostics::{
    DetectionReport, InputDescriptor, LabelStats, PipelineTrace, TimingBreakdown,
};
use crate::edges::{double_threshold_with_cuts, intensity_gradient, non_max_suppression};
use crate::error::{EdgeError, Result};
use crate::grayscale::to_grayscale;
use crate::image::{ImageI32, ImageU8, ImageView};
use crate::kernel::{gaussian_kernel, Kernel};
use log::{debug, warn};
use std::time::Instant;

/// Stateless edge detector built from validated [`DetectorParams`].
///
/// The Gaussian kernel is generated once at construction; `detect` only reads
/// `self`, so one detector can serve many images (and threads).
#[derive(Clone, Debug)]
pub struct EdgeDetector {
    params: DetectorParams,
    gaussian: Kernel,
}

impl EdgeDetector {
    pub fn new(params: DetectorParams) -> Result<Self> {
        params.validate()?;
        let gaussian = gaussian_kernel(params.gauss_size, params.sigma)?;
        Ok(Self { params, gaussian })
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    pub fn gaussian(&self) -> &Kernel {
        &self.gaussian
    }

    /// Run the pipeline and return only the label map.
    pub fn detect(&self, image: ImageU8<'_>) -> Result<ImageI32> {
        self.detect_with_report(image).map(|report| report.labels)
    }

    /// Run grayscale → blur → gradient → suppression → threshold.
    ///
    /// Any stage failure is returned immediately; no partial output exists.
    pub fn detect_with_report(&self, image: ImageU8<'_>) -> Result<DetectionReport> {
        if image.is_empty() {
            return Err(EdgeError::DegenerateImage("input image has no pixels"));
        }
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let params = &self.params;

        let gray = timings.measure("grayscale", || to_grayscale(&image, params.rgb_weights))?;
        let blurred = timings.measure("blur", || convolve(&gray, &self.gaussian, 0))?;
        let grad = timings.measure("gradient", || intensity_gradient(&blurred))?;
        let flat_gradient = grad.is_flat();
        if flat_gradient {
            warn!(
                "EdgeDetector::detect {}x{} input has a flat gradient field, no edges",
                image.w, image.h
            );
        }
        let suppressed = timings.measure("nms", || {
            non_max_suppression(&grad.magnitude, &grad.direction)
        })?;

        let ratios = params.thresholds;
        let labels = params.edge_labels;
        let (computed, cuts) = timings.measure("threshold", || {
            double_threshold_with_cuts(&suppressed, ratios.low, ratios.high, labels)
        });

        let (computed_width, computed_height) = (computed.w, computed.h);
        let (offset, labels_map) = match params.extent {
            ExtentPolicy::Restore => {
                let offset = params.border_margin();
                let restored = computed.embed(image.w, image.h, offset, offset);
                (offset, restored)
            }
            ExtentPolicy::Valid => (0, computed),
        };

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let stats = LabelStats::from_map(&labels_map, labels);
        debug!(
            "EdgeDetector::detect {}x{} -> strong={} weak={} total_ms={:.3}",
            image.w, image.h, stats.strong, stats.weak, timings.total_ms
        );

        Ok(DetectionReport {
            labels: labels_map,
            magnitude: grad.magnitude,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: image.w,
                    height: image.h,
                    channels: image.channels,
                },
                computed_width,
                computed_height,
                offset,
                flat_gradient,
                cuts,
                labels: stats,
                timings,
            },
        })
    }
}
