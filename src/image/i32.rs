//! Owned single-channel i32 grid used for suppressed magnitudes and label maps.
use crate::image::traits::{ImageView, ImageViewMut};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageI32 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<i32>,
}

impl ImageI32 {
    /// Zero-filled grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: i32) {
        self.data[y * self.w + x] = v;
    }

    /// Largest value, or `None` for an empty grid.
    pub fn max_value(&self) -> Option<i32> {
        self.data.iter().copied().max()
    }

    /// Number of cells holding exactly `value`.
    pub fn count(&self, value: i32) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    /// Copy `self` into a zero grid of size `w × h` with its top-left corner
    /// at `(x0, y0)`. Cells falling outside the destination are dropped.
    pub fn embed(&self, w: usize, h: usize, x0: usize, y0: usize) -> ImageI32 {
        let mut out = ImageI32::new(w, h);
        for y in 0..self.h {
            let dy = y + y0;
            if dy >= h {
                break;
            }
            let copy_w = self.w.min(w.saturating_sub(x0));
            if copy_w == 0 {
                break;
            }
            let src = &self.row(y)[..copy_w];
            out.row_mut(dy)[x0..x0 + copy_w].copy_from_slice(src);
        }
        out
    }
}

impl ImageView for ImageI32 {
    type Pixel = i32;

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
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[i32]> {
        Some(&self.data)
    }
}

impl ImageViewMut for ImageI32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [i32]> {
        Some(&mut self.data)
    }
}
