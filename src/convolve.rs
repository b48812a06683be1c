//! 2D sliding-window convolution by sub-matrix summation.
//!
//! For every kernel tap `(dx, dy)` the correspondingly shifted window of the
//! (optionally zero-padded) input is scaled by the tap weight and accumulated
//! into the output. The cost is `kernel_area` passes over whole rows, which
//! keeps the inner loop a contiguous multiply-add over slices.
//!
//! Taps are applied without flipping the kernel (cross-correlation), and
//! interleaved channels are convolved independently.
//!
//! Output shape for kernel size `k` and padding `p`:
//! `(w + 2p - k + 1) × (h + 2p - k + 1)` with the input's channel count.
use crate::error::{EdgeError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::kernel::Kernel;
use std::borrow::Cow;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Embed `image` in a zero buffer enlarged by `pad` pixels on every side of
/// the spatial axes. Channels are left untouched.
pub fn pad_image(image: &ImageF32, pad: usize) -> ImageF32 {
    if pad == 0 {
        return image.clone();
    }
    let c = image.channels;
    let mut out = ImageF32::with_channels(image.w + 2 * pad, image.h + 2 * pad, c);
    for y in 0..image.h {
        let dst = out.row_mut(y + pad);
        dst[pad * c..(pad + image.w) * c].copy_from_slice(image.row(y));
    }
    out
}

/// Convolve `image` with `kernel` after zero-padding by `pad` pixels.
pub fn convolve(image: &ImageF32, kernel: &Kernel, pad: usize) -> Result<ImageF32> {
    if image.is_empty() {
        return Err(EdgeError::DegenerateImage("cannot convolve an empty image"));
    }
    let padded: Cow<'_, ImageF32> = if pad > 0 {
        Cow::Owned(pad_image(image, pad))
    } else {
        Cow::Borrowed(image)
    };

    let k = kernel.size();
    if k > padded.w || k > padded.h {
        return Err(EdgeError::KernelTooLarge {
            kernel: k,
            width: padded.w,
            height: padded.h,
        });
    }

    let out_w = padded.w - k + 1;
    let out_h = padded.h - k + 1;
    let mut out = ImageF32::with_channels(out_w, out_h, padded.channels);
    accumulate_taps(&padded, kernel, &mut out);
    Ok(out)
}

#[cfg(not(feature = "parallel"))]
fn accumulate_taps(src: &ImageF32, kernel: &Kernel, out: &mut ImageF32) {
    let c = src.channels;
    let span = out.w * c;
    let k = kernel.size();
    for dy in 0..k {
        for dx in 0..k {
            let weight = kernel.get(dx, dy);
            if weight == 0.0 {
                continue;
            }
            for (y, dst) in out.rows_mut().enumerate() {
                let window = &src.row(y + dy)[dx * c..dx * c + span];
                axpy(dst, window, weight);
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn accumulate_taps(src: &ImageF32, kernel: &Kernel, out: &mut ImageF32) {
    let c = src.channels;
    let span = out.w * c;
    let k = kernel.size();
    out.data
        .par_chunks_mut(out.stride)
        .enumerate()
        .for_each(|(y, dst)| {
            for dy in 0..k {
                let src_row = src.row(y + dy);
                for dx in 0..k {
                    let weight = kernel.get(dx, dy);
                    if weight == 0.0 {
                        continue;
                    }
                    axpy(dst, &src_row[dx * c..dx * c + span], weight);
                }
            }
        });
}

#[inline]
fn axpy(dst: &mut [f32], src: &[f32], weight: f32) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d += s * weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::gaussian_kernel;
    use approx::assert_relative_eq;

    fn ramp(w: usize, h: usize) -> ImageF32 {
        ImageF32::from_fn(w, h, |x, y| (x * 7 + y * 3) as f32)
    }

    #[test]
    fn unit_kernel_is_identity() {
        let img = ramp(6, 4);
        let out = convolve(&img, &Kernel::scalar(1.0), 0).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn output_shape_follows_kernel_and_padding() {
        let img = ramp(10, 8);
        let k3 = gaussian_kernel(3, 1.0).unwrap();
        let k5 = gaussian_kernel(5, 1.0).unwrap();

        let out = convolve(&img, &k5, 0).unwrap();
        assert_eq!((out.w, out.h), (6, 4));

        let out = convolve(&img, &k3, 1).unwrap();
        assert_eq!((out.w, out.h), (10, 8));

        let out = convolve(&img, &k3, 3).unwrap();
        assert_eq!((out.w, out.h), (14, 12));
    }

    #[test]
    fn channels_are_convolved_independently() {
        let mut img = ImageF32::with_channels(4, 3, 2);
        for y in 0..3 {
            let row = img.row_mut(y);
            for x in 0..4 {
                row[x * 2] = 1.0;
                row[x * 2 + 1] = x as f32;
            }
        }
        let k = Kernel::new(3, vec![1.0; 9]).unwrap();
        let out = convolve(&img, &k, 0).unwrap();
        assert_eq!((out.w, out.h, out.channels), (2, 1, 2));
        assert_eq!(out.row(0), &[9.0, 3.0 * 3.0, 9.0, 3.0 * 6.0]);
    }

    #[test]
    fn taps_are_not_flipped() {
        // Picks the right neighbour: out[x] = in[x + 2].
        let mut weights = vec![0.0; 9];
        weights[5] = 1.0;
        let k = Kernel::new(3, weights).unwrap();
        let img = ramp(5, 3);
        let out = convolve(&img, &k, 0).unwrap();
        for x in 0..out.w {
            assert_eq!(out.get(x, 0), img.get(x + 2, 1));
        }
    }

    #[test]
    fn padding_embeds_image_in_zeros() {
        let img = ImageF32::from_fn(2, 2, |_, _| 1.0);
        let padded = pad_image(&img, 2);
        assert_eq!((padded.w, padded.h), (6, 6));
        assert_eq!(padded.data.iter().sum::<f32>(), 4.0);
        assert_eq!(padded.get(2, 2), 1.0);
        assert_eq!(padded.get(3, 3), 1.0);
        assert_eq!(padded.get(1, 2), 0.0);
    }

    #[test]
    fn same_size_box_filter_sees_zero_border() {
        let img = ImageF32::from_fn(3, 3, |_, _| 1.0);
        let k = Kernel::new(3, vec![1.0; 9]).unwrap();
        let out = convolve(&img, &k, 1).unwrap();
        assert_relative_eq!(out.get(1, 1), 9.0);
        assert_relative_eq!(out.get(0, 0), 4.0);
        assert_relative_eq!(out.get(1, 0), 6.0);
    }

    #[test]
    fn oversized_kernel_fails_fast() {
        let img = ramp(4, 4);
        let k = gaussian_kernel(5, 1.0).unwrap();
        assert_eq!(
            convolve(&img, &k, 0),
            Err(EdgeError::KernelTooLarge {
                kernel: 5,
                width: 4,
                height: 4
            })
        );
        assert!(convolve(&img, &k, 1).is_ok());
    }

    #[test]
    fn empty_image_is_degenerate() {
        let img = ImageF32::new(0, 5);
        assert!(matches!(
            convolve(&img, &Kernel::scalar(1.0), 0),
            Err(EdgeError::DegenerateImage(_))
        ));
    }
}
