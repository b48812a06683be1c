//! Intensity gradients from the fixed Sobel pair.
//!
//! - Runs both 3×3 kernels through the convolution engine without padding,
//!   so each output axis is two pixels shorter than the input.
//! - `magnitude = hypot(gx, gy)`, rescaled so the strongest response is 255.
//! - `direction = atan2(gx, gy)` in radians, range (−π, π]. The argument
//!   order (horizontal over vertical) is what the suppression buckets expect.
//!
//! A flat input has no strongest response. Blurring a constant image leaves
//! f32 rounding residue in the Sobel sums, so flatness is judged against the
//! input's own scale: a raw maximum at or below
//! `FLAT_RELATIVE_EPS * (1 + max |input|)` zeroes the whole magnitude map
//! instead of stretching the residue to 255.
use crate::convolve::convolve;
use crate::error::{EdgeError, Result};
use crate::image::ImageF32;
use crate::kernel::{sobel_x, sobel_y};
use log::debug;

/// Value the strongest gradient response is rescaled to.
pub const MAGNITUDE_SCALE: f32 = 255.0;

/// Raw magnitude at or below this fraction of the input scale counts as flat.
pub const FLAT_RELATIVE_EPS: f32 = 1e-4;

/// Co-indexed gradient maps of one single-channel image.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Horizontal response (Sobel X)
    pub gx: ImageF32,
    /// Vertical response (Sobel Y)
    pub gy: ImageF32,
    /// Normalized Euclidean magnitude, max 255 (all zero for flat input)
    pub magnitude: ImageF32,
    /// `atan2(gx, gy)` per pixel, radians
    pub direction: ImageF32,
}

impl GradientField {
    /// True when the field was judged flat and its magnitude zeroed.
    pub fn is_flat(&self) -> bool {
        self.magnitude.data.iter().all(|&m| m == 0.0)
    }
}

fn flat_tolerance(input_scale: f32) -> f32 {
    FLAT_RELATIVE_EPS * (1.0 + input_scale)
}

/// Compute the normalized gradient field of a single-channel image.
pub fn intensity_gradient(image: &ImageF32) -> Result<GradientField> {
    if image.channels != 1 {
        return Err(EdgeError::ChannelMismatch {
            expected: 1,
            found: image.channels,
        });
    }
    let gx = convolve(image, &sobel_x(), 0)?;
    let gy = convolve(image, &sobel_y(), 0)?;

    let mut magnitude = ImageF32::new(gx.w, gx.h);
    let mut direction = ImageF32::new(gx.w, gx.h);
    for (((m, d), &x), &y) in magnitude
        .data
        .iter_mut()
        .zip(direction.data.iter_mut())
        .zip(&gx.data)
        .zip(&gy.data)
    {
        *m = x.hypot(y);
        *d = x.atan2(y);
    }

    let max = magnitude.max_value().unwrap_or(0.0);
    let input_scale = image.data.iter().fold(0.0f32, |acc, &v| acc.max(v.abs()));
    if max <= flat_tolerance(input_scale) {
        magnitude.data.fill(0.0);
        debug!(
            "intensity_gradient {}x{} flat field (raw max={max:.3e})",
            gx.w, gx.h
        );
    } else {
        for m in magnitude.data.iter_mut() {
            *m = *m / max * MAGNITUDE_SCALE;
        }
        debug!("intensity_gradient {}x{} raw max={max:.3}", gx.w, gx.h);
    }

    Ok(GradientField {
        gx,
        gy,
        magnitude,
        direction,
    })
}
