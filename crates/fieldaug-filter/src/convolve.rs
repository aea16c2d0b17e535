//! Separable convolution and Gaussian blur
//!
//! Blur runs a 1-D kernel down the columns, then along the rows. Each pass
//! writes 8-bit results (truncated toward zero, clamped to `0..=255`), and
//! each field channel is filtered on its own.

use crate::{FilterResult, Kernel};
use fieldaug_core::{Field, Gray, RasterMut, channel};

/// How samples outside the raster are synthesized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Mirror about the edge, repeating the edge pixel (`d c b a | a b c d | d c b a`)
    #[default]
    Reflect,
    /// Repeat the nearest edge pixel (`a a a a | a b c d | d d d d`)
    Replicate,
}

impl BorderMode {
    /// Map a possibly out-of-range index onto `0..n`.
    #[inline]
    fn resolve(self, i: i64, n: i64) -> usize {
        match self {
            BorderMode::Reflect => {
                let period = 2 * n;
                let m = i.rem_euclid(period);
                (if m >= n { period - 1 - m } else { m }) as usize
            }
            BorderMode::Replicate => i.clamp(0, n - 1) as usize,
        }
    }
}

/// Options for Gaussian blur
#[derive(Debug, Clone)]
pub struct BlurOptions {
    /// Kernel half-width in standard deviations
    pub truncate: f32,
    /// Border handling
    pub border: BorderMode,
}

impl Default for BlurOptions {
    fn default() -> Self {
        Self {
            truncate: 4.0,
            border: BorderMode::Reflect,
        }
    }
}

impl BlurOptions {
    /// Create options with a specific border mode
    pub fn with_border(border: BorderMode) -> Self {
        Self {
            border,
            ..Default::default()
        }
    }

    /// Set the kernel truncation
    pub fn truncate(mut self, truncate: f32) -> Self {
        self.truncate = truncate;
        self
    }
}

/// Blur every channel of a field with an isotropic Gaussian
///
/// Uses the default [`BlurOptions`]. The input field is never modified.
///
/// # Arguments
/// * `field` - Input field
/// * `sigma` - Standard deviation in pixels; must be > 0
pub fn gaussian_blur(field: &Field, sigma: f32) -> FilterResult<Field> {
    gaussian_blur_with_options(field, sigma, &BlurOptions::default())
}

/// Blur every channel of a field with explicit options
pub fn gaussian_blur_with_options(
    field: &Field,
    sigma: f32,
    options: &BlurOptions,
) -> FilterResult<Field> {
    let kernel = Kernel::gaussian_1d(sigma, options.truncate)?;

    let mut blurred = Vec::with_capacity(channel::COUNT);
    for c in 0..channel::COUNT {
        let plane = field.channel(c)?;
        blurred.push(convolve_sep(&plane, &kernel, options.border)?);
    }

    Ok(Field::from_channels(&blurred[0], &blurred[1], &blurred[2])?)
}

/// Blur a single 8-bit channel with an isotropic Gaussian
pub fn gaussian_blur_channel(
    gray: &Gray,
    sigma: f32,
    options: &BlurOptions,
) -> FilterResult<Gray> {
    let kernel = Kernel::gaussian_1d(sigma, options.truncate)?;
    convolve_sep(gray, &kernel, options.border)
}

/// Separable convolution: `kernel` down the columns, then along the rows
fn convolve_sep(gray: &Gray, kernel: &Kernel, border: BorderMode) -> FilterResult<Gray> {
    let vertical = convolve_axis(gray, kernel, border, Axis::Columns)?;
    convolve_axis(&vertical, kernel, border, Axis::Rows)
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    /// Filter along y
    Columns,
    /// Filter along x
    Rows,
}

fn convolve_axis(gray: &Gray, kernel: &Kernel, border: BorderMode, axis: Axis) -> FilterResult<Gray> {
    let w = gray.width();
    let h = gray.height();
    let r = i64::from(kernel.radius());
    let weights = kernel.data();
    let mut out = RasterMut::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f64;
            for (k, &weight) in (-r..=r).zip(weights) {
                let (sx, sy) = match axis {
                    Axis::Columns => (x as usize, border.resolve(i64::from(y) + k, i64::from(h))),
                    Axis::Rows => (border.resolve(i64::from(x) + k, i64::from(w)), y as usize),
                };
                sum += f64::from(gray.get_pixel_unchecked(sx as u32, sy as u32)) * weight;
            }
            out.set_pixel_unchecked(x, y, sum.clamp(0.0, 255.0) as u8);
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_resolve_reflect() {
        let b = BorderMode::Reflect;
        // d c b a | a b c d | d c b a  with n = 4
        let got: Vec<usize> = (-4..8).map(|i| b.resolve(i, 4)).collect();
        assert_eq!(got, vec![3, 2, 1, 0, 0, 1, 2, 3, 3, 2, 1, 0]);
        // Radius larger than the raster keeps reflecting
        assert_eq!(b.resolve(-9, 4), 0);
        assert_eq!(b.resolve(9, 1), 0);
    }

    #[test]
    fn test_border_resolve_replicate() {
        let b = BorderMode::Replicate;
        let got: Vec<usize> = (-2..6).map(|i| b.resolve(i, 4)).collect();
        assert_eq!(got, vec![0, 0, 0, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_blur_constant_field_nearly_unchanged() {
        // Truncation may drop a unit per pass when the weights sum just below 1
        let field = Field::filled(9, 7, [40, 128, 250]).unwrap();
        for sigma in [1.0, 2.0, 3.0] {
            let blurred = gaussian_blur(&field, sigma).unwrap();
            let close = blurred
                .data()
                .iter()
                .zip(field.data())
                .all(|(a, b)| (0..3).all(|c| a[c].abs_diff(b[c]) <= 2));
            assert!(close, "sigma {sigma}");
        }
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let mut m = RasterMut::<u8>::new(9, 9).unwrap();
        m.set_pixel(4, 4, 255).unwrap();
        let gray: Gray = m.into();
        let blurred = gaussian_blur_channel(&gray, 1.0, &BlurOptions::default()).unwrap();
        let centre = blurred.get_pixel(4, 4).unwrap();
        assert!(centre < 255 && centre > 0);
        assert!(blurred.get_pixel(5, 4).unwrap() > 0);
        // Symmetric spread
        assert_eq!(blurred.get_pixel(3, 4), blurred.get_pixel(5, 4));
        assert_eq!(blurred.get_pixel(4, 3), blurred.get_pixel(4, 5));
    }

    #[test]
    fn test_blur_impulse_truncates_each_pass() {
        let mut m = RasterMut::<u8>::new(9, 9).unwrap();
        m.set_pixel(4, 4, 255).unwrap();
        let gray: Gray = m.into();
        let blurred = gaussian_blur_channel(&gray, 1.0, &BlurOptions::default()).unwrap();
        assert_eq!(blurred.row(4), &[0, 0, 5, 24, 40, 24, 5, 0, 0]);
    }

    #[test]
    fn test_blur_channels_independent() {
        // Only the red channel varies; green and blue must stay constant
        let data = (0..16u8).map(|v| [v * 16, 100, 7]).collect();
        let field = Field::from_vec(4, 4, data).unwrap();
        let blurred = gaussian_blur(&field, 1.0).unwrap();
        assert!(blurred.data().iter().all(|px| px[1] == 100 && px[2] == 7));
    }

    #[test]
    fn test_blur_invalid_sigma() {
        let field = Field::new(4, 4).unwrap();
        assert!(gaussian_blur(&field, 0.0).is_err());
    }
}
