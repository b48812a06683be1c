//! Weighted RGB → luminance conversion into a single-channel float map.
use crate::error::{EdgeError, Result};
use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};

/// ITU-R BT.601-style luma weights for (R, G, B).
pub const DEFAULT_RGB_WEIGHTS: [f32; 3] = [0.2989, 0.5870, 0.1140];

/// Convert an 8-bit image to a grayscale `ImageF32` on the 0..255 scale.
///
/// Single-channel input is copied through unchanged. For three or more
/// channels the first three are combined with `weights`; any further channel
/// (alpha) is ignored.
pub fn to_grayscale(image: &ImageU8<'_>, weights: [f32; 3]) -> Result<ImageF32> {
    if image.is_empty() {
        return Err(EdgeError::DegenerateImage("input image has no pixels"));
    }
    let c = image.channels;
    if c == 2 {
        return Err(EdgeError::ChannelMismatch {
            expected: 3,
            found: c,
        });
    }

    let mut out = ImageF32::new(image.w, image.h);
    for y in 0..image.h {
        let src = image.row(y);
        let dst = out.row_mut(y);
        if c == 1 {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s as f32;
            }
        } else {
            for (d, px) in dst.iter_mut().zip(src.chunks_exact(c)) {
                *d = px[0] as f32 * weights[0]
                    + px[1] as f32 * weights[1]
                    + px[2] as f32 * weights[2];
            }
        }
    }
    Ok(out)
}
