//! Non‑maximum suppression along the quantized gradient direction.
//!
//! Directions are converted to degrees and folded into [0°, 180°]; each
//! interior pixel is bucketed into one of four 45°‑wide bands (0°, 45°, 90°,
//! 135°, with 0° wrapping around 180°). The two neighbours of the band are
//! compared with the centre, which survives only when it is greater than or
//! equal to both. Survivors keep their magnitude truncated to an integer.
//!
//! The outermost 1‑pixel frame is never evaluated and is always 0: only the
//! interior index range is visited, so neighbour lookups cannot leave the
//! image.
use crate::error::{EdgeError, Result};
use crate::image::{ImageF32, ImageI32, ImageView};
#[cfg(not(feature = "parallel"))]
use crate::image::ImageViewMut;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Orientation band a gradient direction falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionBand {
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

impl DirectionBand {
    /// Bucket an angle in degrees already folded into [0, 180].
    #[inline]
    pub fn from_degrees(angle: f32) -> Self {
        if angle < 22.5 || angle >= 157.5 {
            DirectionBand::Deg0
        } else if angle < 67.5 {
            DirectionBand::Deg45
        } else if angle < 112.5 {
            DirectionBand::Deg90
        } else {
            DirectionBand::Deg135
        }
    }

    /// Bucket a direction in radians, range (−π, π].
    #[inline]
    pub fn from_radians(direction: f32) -> Self {
        Self::from_degrees(fold_degrees(direction))
    }
}

/// Convert radians to degrees and shift negative angles by 180°.
#[inline]
pub fn fold_degrees(direction: f32) -> f32 {
    let deg = direction.to_degrees();
    if deg < 0.0 {
        deg + 180.0
    } else {
        deg
    }
}

/// Thin `magnitude` to its ridge along `direction`.
pub fn non_max_suppression(magnitude: &ImageF32, direction: &ImageF32) -> Result<ImageI32> {
    if (magnitude.w, magnitude.h) != (direction.w, direction.h) {
        return Err(EdgeError::ShapeMismatch {
            left: (magnitude.w, magnitude.h),
            right: (direction.w, direction.h),
        });
    }
    if magnitude.channels != 1 || direction.channels != 1 {
        return Err(EdgeError::ChannelMismatch {
            expected: 1,
            found: magnitude.channels.max(direction.channels),
        });
    }

    let (w, h) = (magnitude.w, magnitude.h);
    let mut out = ImageI32::new(w, h);
    if w < 3 || h < 3 {
        return Ok(out);
    }

    #[cfg(not(feature = "parallel"))]
    for (y, dst) in out.rows_mut().enumerate().take(h - 1).skip(1) {
        suppress_row(magnitude, direction, y, dst);
    }

    #[cfg(feature = "parallel")]
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .take(h - 1)
        .skip(1)
        .for_each(|(y, dst)| suppress_row(magnitude, direction, y, dst));

    Ok(out)
}

/// Evaluate interior row `y` (1..h-1) into `dst`; border columns stay 0.
fn suppress_row(magnitude: &ImageF32, direction: &ImageF32, y: usize, dst: &mut [i32]) {
    let w = magnitude.w;
    let prev = magnitude.row(y - 1);
    let cur = magnitude.row(y);
    let next = magnitude.row(y + 1);
    let dir_row = direction.row(y);

    for x in 1..w - 1 {
        let (q, r) = match DirectionBand::from_radians(dir_row[x]) {
            DirectionBand::Deg0 => (cur[x + 1], cur[x - 1]),
            DirectionBand::Deg45 => (next[x - 1], prev[x + 1]),
            DirectionBand::Deg90 => (next[x], prev[x]),
            DirectionBand::Deg135 => (prev[x - 1], next[x + 1]),
        };
        let m = cur[x];
        dst[x] = if m >= q && m >= r { m as i32 } else { 0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn pseudo_random(w: usize, h: usize, seed: u32) -> ImageF32 {
        let mut state = seed;
        ImageF32::from_fn(w, h, |_, _| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 8) as f32 / (1u32 << 24) as f32 * 255.0
        })
    }

    #[test]
    fn bands_cover_folded_range() {
        assert_eq!(DirectionBand::from_degrees(0.0), DirectionBand::Deg0);
        assert_eq!(DirectionBand::from_degrees(22.4), DirectionBand::Deg0);
        assert_eq!(DirectionBand::from_degrees(22.5), DirectionBand::Deg45);
        assert_eq!(DirectionBand::from_degrees(67.5), DirectionBand::Deg90);
        assert_eq!(DirectionBand::from_degrees(112.5), DirectionBand::Deg135);
        assert_eq!(DirectionBand::from_degrees(157.5), DirectionBand::Deg0);
        assert_eq!(DirectionBand::from_degrees(180.0), DirectionBand::Deg0);
        assert_eq!(DirectionBand::from_radians(-FRAC_PI_2), DirectionBand::Deg90);
        assert_eq!(DirectionBand::from_radians(-FRAC_PI_4), DirectionBand::Deg135);
        assert_eq!(DirectionBand::from_radians(PI), DirectionBand::Deg0);
    }

    #[test]
    fn border_is_always_zero() {
        for seed in 1..6 {
            let mag = pseudo_random(11, 8, seed);
            let dir = pseudo_random(11, 8, seed + 100);
            let dir = ImageF32::from_fn(11, 8, |x, y| dir.get(x, y) / 255.0 * 2.0 * PI - PI);
            let out = non_max_suppression(&mag, &dir).unwrap();
            assert!(out.row(0).iter().all(|&v| v == 0));
            assert!(out.row(7).iter().all(|&v| v == 0));
            for y in 0..8 {
                assert_eq!(out.get(0, y), 0);
                assert_eq!(out.get(10, y), 0);
            }
        }
    }

    #[test]
    fn horizontal_band_keeps_column_ridge() {
        // Ridge along column 2; direction 0 compares left/right neighbours.
        let mag = ImageF32::from_fn(5, 5, |x, _| match x {
            2 => 100.7,
            1 | 3 => 40.0,
            _ => 10.0,
        });
        let dir = ImageF32::new(5, 5);
        let out = non_max_suppression(&mag, &dir).unwrap();
        for y in 1..4 {
            assert_eq!(out.get(2, y), 100);
            assert_eq!(out.get(1, y), 0);
            assert_eq!(out.get(3, y), 0);
        }
    }

    #[test]
    fn vertical_band_compares_rows() {
        // Same ridge, but a −π/2 direction compares up/down neighbours, which
        // are equal along the ridge, so every ridge and flank pixel survives.
        let mag = ImageF32::from_fn(5, 5, |x, _| if x == 2 { 100.0 } else { 40.0 });
        let dir = ImageF32::from_fn(5, 5, |_, _| -FRAC_PI_2);
        let out = non_max_suppression(&mag, &dir).unwrap();
        assert_eq!(out.get(2, 2), 100);
        assert_eq!(out.get(1, 2), 40);
    }

    #[test]
    fn diagonal_bands_pick_matching_neighbours() {
        let mut mag = ImageF32::from_fn(3, 3, |_, _| 10.0);
        mag.set(1, 1, 50.0);
        // 45°: neighbours (x-1, y+1) and (x+1, y-1).
        mag.set(0, 2, 60.0);
        let dir45 = ImageF32::from_fn(3, 3, |_, _| FRAC_PI_4);
        assert_eq!(non_max_suppression(&mag, &dir45).unwrap().get(1, 1), 0);
        // 135°: neighbours (x-1, y-1) and (x+1, y+1) are both 10.
        let dir135 = ImageF32::from_fn(3, 3, |_, _| 3.0 * FRAC_PI_4);
        assert_eq!(non_max_suppression(&mag, &dir135).unwrap().get(1, 1), 50);
    }

    #[test]
    fn tiny_and_mismatched_inputs() {
        let mag = ImageF32::new(2, 5);
        let out = non_max_suppression(&mag, &ImageF32::new(2, 5)).unwrap();
        assert_eq!(out.count(0), 10);

        assert!(matches!(
            non_max_suppression(&ImageF32::new(4, 4), &ImageF32::new(4, 5)),
            Err(EdgeError::ShapeMismatch { .. })
        ));
    }
}
