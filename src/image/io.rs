//! I/O helpers for input images, label maps and JSON.
//!
//! - `load_image`: read a PNG/JPEG into an owned 8-bit buffer, keeping RGB
//!   for color sources and a single channel for grayscale ones.
//! - `save_label_map`: write an `ImageI32` as an 8-bit grayscale image; the
//!   format follows the file extension.
//! - `save_grayscale_f32`: write an `ImageF32` (values on a 0..255 scale).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageI32, ImageU8, ImageView};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit buffer with interleaved channels and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct OwnedImageU8 {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl OwnedImageU8 {
    /// Construct an owned buffer given tightly packed raw bytes.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel (1 or 3)
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            channels: self.channels,
            stride: self.width * self.channels,
            data: &self.data,
        }
    }
}

/// Load an image from disk. Grayscale sources stay single-channel, everything
/// else is converted to 8-bit RGB.
pub fn load_image(path: &Path) -> Result<OwnedImageU8, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let width = img.width() as usize;
    let height = img.height() as usize;
    let owned = match img {
        DynamicImage::ImageLuma8(gray) => OwnedImageU8::new(width, height, 1, gray.into_raw()),
        gray @ (DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLuma16(_)) => {
            OwnedImageU8::new(width, height, 1, gray.into_luma8().into_raw())
        }
        other => OwnedImageU8::new(width, height, 3, other.into_rgb8().into_raw()),
    };
    Ok(owned)
}

/// Convert a label map into 8-bit grayscale, clamping values to [0, 255].
pub fn label_map_to_gray(labels: &ImageI32) -> GrayImage {
    let mut out = GrayImage::new(labels.w as u32, labels.h as u32);
    for y in 0..labels.h {
        for (x, &v) in labels.row(y).iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([v.clamp(0, 255) as u8]));
        }
    }
    out
}

/// Save a label map as a grayscale image; the encoder is picked from the
/// extension (`.jpg`, `.png`, ...).
pub fn save_label_map(labels: &ImageI32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    label_map_to_gray(labels)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save the first channel of a float image as grayscale PNG, clamping to [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut raw = Vec::with_capacity(image.w * image.h);
    for y in 0..image.h {
        let row = image.row(y);
        raw.extend(
            row.iter()
                .step_by(image.channels.max(1))
                .map(|&px| px.clamp(0.0, 255.0) as u8),
        );
    }
    let out: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.w as u32, image.h as u32, raw)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
