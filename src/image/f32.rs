//! Owned f32 image in row-major layout with interleaved channels.
//!
//! Single-channel maps (grayscale, blurred, gradient magnitude/direction) use
//! `channels == 1`; the convolution engine also accepts multi-channel
//! buffers, in which case each row stores `w * channels` samples.
use crate::image::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Samples per pixel
    pub channels: usize,
    /// Number of f32 elements between consecutive rows (equals `w * channels`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized single-channel buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::with_channels(w, h, 1)
    }

    /// Construct a zero-initialized buffer with `channels` samples per pixel.
    pub fn with_channels(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            stride: w * channels,
            data: vec![0.0; w * h * channels],
        }
    }

    /// Wrap an existing single-channel buffer. Returns `None` when the length
    /// does not match `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            channels: 1,
            stride: w,
            data,
        })
    }

    /// Build a single-channel image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut out = Self::new(w, h);
        for y in 0..h {
            let row = out.row_mut(y);
            for (x, px) in row.iter_mut().enumerate() {
                *px = f(x, y);
            }
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data` (first channel).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * self.channels
    }
    #[inline]
    /// Get the first-channel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the first-channel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Largest sample, or `None` for an empty image.
    pub fn max_value(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        self.is_contiguous()
            .then_some(&self.data[..self.w * self.h * self.channels])
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w * self.channels;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [f32]> {
        if self.is_contiguous() {
            let len = self.w * self.h * self.channels;
            Some(&mut self.data[..len])
        } else {
            None
        }
    }
}
