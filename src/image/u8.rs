use crate::error::{EdgeError, Result};

/// Borrowed 8-bit image with interleaved channels (1 = gray, 3 = RGB, 4 = RGBA).
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub channels: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view with `channels` interleaved samples per pixel.
    ///
    /// Fails when `channels` is zero or `data` holds fewer than
    /// `w * h * channels` bytes.
    pub fn new(w: usize, h: usize, channels: usize, data: &'a [u8]) -> Result<Self> {
        if channels == 0 {
            return Err(EdgeError::InvalidParams(
                "image must have at least one channel".to_string(),
            ));
        }
        let needed = w * h * channels;
        if data.len() < needed {
            return Err(EdgeError::InvalidParams(format!(
                "{w}x{h}x{channels} image needs {needed} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            channels,
            stride: w * channels,
            data,
        })
    }

    /// Tightly packed single-channel view.
    ///
    /// `data` must hold at least `w * h` bytes; use [`ImageU8::new`] for a
    /// checked constructor.
    pub fn gray(w: usize, h: usize, data: &'a [u8]) -> Self {
        debug_assert!(
            data.len() >= w * h,
            "gray {w}x{h} view over {} bytes",
            data.len()
        );
        Self {
            w,
            h,
            channels: 1,
            stride: w,
            data,
        }
    }

    /// Tightly packed RGB view (`data.len() >= w * h * 3`).
    pub fn rgb(w: usize, h: usize, data: &'a [u8]) -> Self {
        debug_assert!(
            data.len() >= w * h * 3,
            "rgb {w}x{h} view over {} bytes",
            data.len()
        );
        Self {
            w,
            h,
            channels: 3,
            stride: w * 3,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[y * self.stride + x * self.channels + c]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

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
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w * self.channels)
            .then_some(&self.data[..self.w * self.h * self.channels])
    }
}
