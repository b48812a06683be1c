//! Square convolution kernels: the Gaussian generator and the fixed Sobel pair.
//!
//! Kernels are always odd-sized so that a unique centre tap exists; the
//! constructors reject anything else before a convolution can run.
use crate::error::{EdgeError, Result};

pub type Kernel3 = [[f32; 3]; 3];

/// Horizontal-emphasis Sobel taps (responds to left-minus-right intensity).
pub const SOBEL_KERNEL_X: Kernel3 = [[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]];
/// Vertical-emphasis Sobel taps (responds to top-minus-bottom intensity).
pub const SOBEL_KERNEL_Y: Kernel3 = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Square, odd-sized grid of weights stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Wrap `weights` (row-major, `size * size` entries).
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self> {
        validate_size(size)?;
        if weights.len() != size * size {
            return Err(EdgeError::InvalidParams(format!(
                "kernel of size {size} needs {} weights, got {}",
                size * size,
                weights.len()
            )));
        }
        Ok(Self { size, weights })
    }

    pub fn from_kernel3(taps: &Kernel3) -> Self {
        Self {
            size: 3,
            weights: taps.iter().flatten().copied().collect(),
        }
    }

    /// 1×1 kernel holding `value`.
    pub fn scalar(value: f32) -> Self {
        Self {
            size: 1,
            weights: vec![value],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, dx: usize, dy: usize) -> f32 {
        self.weights[dy * self.size + dx]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

pub fn sobel_x() -> Kernel {
    Kernel::from_kernel3(&SOBEL_KERNEL_X)
}

pub fn sobel_y() -> Kernel {
    Kernel::from_kernel3(&SOBEL_KERNEL_Y)
}

/// Sample the 2D Gaussian density on a centred `size × size` grid.
///
/// Coordinates run from `-size/2` to `+size/2`. Each weight is
/// `exp(-(x² + y²) / 2σ²) / (2πσ²)`; the result is deliberately left
/// unnormalized, so its sum is below 1 for small kernels.
pub fn gaussian_kernel(size: usize, sigma: f32) -> Result<Kernel> {
    validate_size(size)?;
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(EdgeError::InvalidParams(format!(
            "sigma must be positive and finite (got {sigma})"
        )));
    }
    let half = (size / 2) as i32;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let norm = 1.0 / (std::f32::consts::PI * two_sigma_sq);
    let mut weights = Vec::with_capacity(size * size);
    for y in -half..=half {
        for x in -half..=half {
            let r2 = (x * x + y * y) as f32;
            weights.push((-r2 / two_sigma_sq).exp() * norm);
        }
    }
    Ok(Kernel { size, weights })
}

fn validate_size(size: usize) -> Result<()> {
    if size == 0 || size % 2 == 0 {
        return Err(EdgeError::InvalidKernelSize { size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gaussian_is_point_symmetric() {
        for &(size, sigma) in &[(3usize, 0.5f32), (5, 1.0), (7, 2.3)] {
            let k = gaussian_kernel(size, sigma).unwrap();
            for y in 0..size {
                for x in 0..size {
                    assert_eq!(k.get(x, y), k.get(size - 1 - x, size - 1 - y));
                }
            }
        }
    }

    #[test]
    fn gaussian_peaks_at_centre_with_density_value() {
        let sigma = 1.0f32;
        let k = gaussian_kernel(5, sigma).unwrap();
        let expected = 1.0 / (2.0 * std::f32::consts::PI * sigma * sigma);
        assert_relative_eq!(k.get(2, 2), expected, epsilon = 1e-7);
        assert!(k.weights().iter().all(|&w| w <= k.get(2, 2)));
    }

    #[test]
    fn gaussian_is_not_renormalized() {
        let k = gaussian_kernel(5, 1.0).unwrap();
        let sum = k.sum();
        assert!(sum < 0.99 && sum > 0.9, "unexpected kernel mass {sum}");
    }

    #[test]
    fn even_and_zero_sizes_are_rejected() {
        assert_eq!(
            gaussian_kernel(4, 1.0),
            Err(EdgeError::InvalidKernelSize { size: 4 })
        );
        assert_eq!(
            gaussian_kernel(0, 1.0),
            Err(EdgeError::InvalidKernelSize { size: 0 })
        );
        assert!(Kernel::new(2, vec![0.0; 4]).is_err());
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        assert!(matches!(
            gaussian_kernel(5, 0.0),
            Err(EdgeError::InvalidParams(_))
        ));
        assert!(matches!(
            gaussian_kernel(5, f32::NAN),
            Err(EdgeError::InvalidParams(_))
        ));
    }

    #[test]
    fn sobel_pair_is_transposed() {
        let kx = sobel_x();
        let ky = sobel_y();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(kx.get(x, y), ky.get(y, x));
            }
        }
        assert_eq!(kx.sum(), 0.0);
    }
}
