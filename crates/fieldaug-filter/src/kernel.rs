//! Convolution kernels
//!
//! One-dimensional kernels for separable filtering. A kernel of radius `r`
//! holds `2r + 1` weights centred on index `r`.

use crate::{FilterError, FilterResult};

/// A 1-D convolution kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Half-width; the kernel spans `-radius..=radius`
    radius: u32,
    /// Weights, `data[radius]` is the centre
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from its weights.
    ///
    /// The length must be odd so the kernel has a centre.
    pub fn from_slice(data: &[f64]) -> FilterResult<Self> {
        if data.is_empty() || data.len() % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel length must be odd, got {}",
                data.len()
            )));
        }
        Ok(Self {
            radius: (data.len() / 2) as u32,
            data: data.to_vec(),
        })
    }

    /// Create a normalized Gaussian kernel.
    ///
    /// The radius is `floor(truncate * sigma + 0.5)` and the weights are
    /// `exp(-x^2 / (2 sigma^2))` scaled to sum to 1.
    ///
    /// # Arguments
    ///
    /// * `sigma` - Standard deviation in pixels; must be > 0
    /// * `truncate` - Kernel half-width in standard deviations; must be > 0
    pub fn gaussian_1d(sigma: f32, truncate: f32) -> FilterResult<Self> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be > 0, got {sigma}"
            )));
        }
        if !(truncate > 0.0 && truncate.is_finite()) {
            return Err(FilterError::InvalidParameters(format!(
                "truncate must be > 0, got {truncate}"
            )));
        }

        let sigma = f64::from(sigma);
        let radius = (f64::from(truncate) * sigma + 0.5) as i64;
        let denom = 2.0 * sigma * sigma;
        let mut data: Vec<f64> = (-radius..=radius)
            .map(|x| (-((x * x) as f64) / denom).exp())
            .collect();

        let sum: f64 = data.iter().sum();
        data.iter_mut().for_each(|w| *w /= sum);
        Ok(Self {
            radius: radius as u32,
            data,
        })
    }

    /// Get the kernel radius.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Get the kernel size (`2 * radius + 1`).
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Get the kernel weights.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the sum of all kernel weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
