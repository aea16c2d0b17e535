//! Synthetic fields and masks
//!
//! Every builder is deterministic; `random_pair` is driven by a seed.

use crate::error::{TestError, TestResult};
use fieldaug_core::{Field, Label, Mask, Rgb};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform, Uniform};
use rand::rngs::StdRng;

/// Field whose red channel ramps with x, green with y and blue with x + y.
///
/// Every pixel differs from its neighbours, so any misplaced pixel shows up
/// in an exact comparison.
pub fn gradient_field(width: u32, height: u32) -> TestResult<Field> {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + 3 * y) % 256) as u8;
            data.push([r, g, b]);
        }
    }
    Field::from_vec(width, height, data).map_err(|source| TestError::Fixture {
        name: "gradient_field",
        source,
    })
}

/// Field with every pixel set to `rgb`.
pub fn constant_field(width: u32, height: u32, rgb: Rgb) -> TestResult<Field> {
    Field::filled(width, height, rgb).map_err(|source| TestError::Fixture {
        name: "constant_field",
        source,
    })
}

/// Mask with one non-contiguous label per quadrant.
///
/// Top-left is background (0); top-right, bottom-left and bottom-right carry
/// labels 7, 3 and 12.
pub fn quadrant_mask(width: u32, height: u32) -> TestResult<Mask> {
    let (hw, hh) = (width / 2, height / 2);
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let label: Label = match (y >= hh, x >= hw) {
                (false, false) => 0,
                (false, true) => 7,
                (true, false) => 3,
                (true, true) => 12,
            };
            data.push(label);
        }
    }
    Mask::from_labels(width, height, data).map_err(|source| TestError::Fixture {
        name: "quadrant_mask",
        source,
    })
}

/// Mask of vertical stripes `stripe` pixels wide labelled 0, 5, 10, ...
pub fn stripe_mask(width: u32, height: u32, stripe: u32) -> TestResult<Mask> {
    if stripe == 0 {
        return Err(TestError::InvalidParameter("stripe must be >= 1".into()));
    }
    let row: Vec<Label> = (0..width).map(|x| (x / stripe) * 5).collect();
    let data = row.repeat(height as usize);
    Mask::from_labels(width, height, data).map_err(|source| TestError::Fixture {
        name: "stripe_mask",
        source,
    })
}

/// Random field and mask with labels in `0..=max_label`.
pub fn random_pair(
    width: u32,
    height: u32,
    max_label: Label,
    seed: u64,
) -> TestResult<(Field, Mask)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels = Uniform::new_inclusive(0, max_label)
        .map_err(|e| TestError::InvalidParameter(e.to_string()))?;

    let n = width as usize * height as usize;
    let pixels: Vec<Rgb> = (0..n)
        .map(|_| {
            let r: u8 = StandardUniform.sample(&mut rng);
            let g: u8 = StandardUniform.sample(&mut rng);
            let b: u8 = StandardUniform.sample(&mut rng);
            [r, g, b]
        })
        .collect();
    let mask_data: Vec<Label> = (0..n).map(|_| labels.sample(&mut rng)).collect();

    let field = Field::from_vec(width, height, pixels).map_err(|source| TestError::Fixture {
        name: "random_pair",
        source,
    })?;
    let mask = Mask::from_labels(width, height, mask_data).map_err(|source| TestError::Fixture {
        name: "random_pair",
        source,
    })?;
    Ok((field, mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_mask_labels() {
        let mask = quadrant_mask(4, 4).unwrap();
        assert_eq!(mask.row(0), &[0, 0, 7, 7]);
        assert_eq!(mask.row(3), &[3, 3, 12, 12]);
    }

    #[test]
    fn test_stripe_mask() {
        let mask = stripe_mask(6, 2, 2).unwrap();
        assert_eq!(mask.row(1), &[0, 0, 5, 5, 10, 10]);
        assert!(stripe_mask(6, 2, 0).is_err());
    }

    #[test]
    fn test_random_pair_is_seeded() {
        let (f1, m1) = random_pair(8, 8, 5, 42).unwrap();
        let (f2, m2) = random_pair(8, 8, 5, 42).unwrap();
        assert!(f1.equals(&f2));
        assert!(m1.equals(&m2));
        assert!(m1.data().iter().all(|&v| v <= 5));
    }

    #[test]
    fn test_gradient_field_distinct_columns() {
        let field = gradient_field(16, 4).unwrap();
        assert_ne!(field.get_pixel(0, 0), field.get_pixel(1, 0));
        assert_ne!(field.get_pixel(0, 0), field.get_pixel(0, 1));
    }
}
