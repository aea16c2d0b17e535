//! Noise operators
//!
//! A noise operator perturbs orientation or pixel values of the pair that
//! the translation produced. Rotation and flips move the mask with the
//! field; blur and gamma only touch the field.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::{AugmentError, AugmentResult};
use fieldaug_core::{Field, Mask};
use fieldaug_filter::{gamma_correct, gaussian_blur};
use fieldaug_transform::{flip_lr, flip_tb, rotate_orth_ccw, transpose};

/// Pixel or orientation operator applied second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Noise {
    /// Pass-through; the mask is reduced to 8 bits
    Identity,
    /// `index` quarter turns counter-clockwise
    Rotation,
    /// 0 = transpose, 1 = vertical flip, 2 = horizontal flip
    Flip,
    /// Gaussian blur with sigma = `index`
    Blur,
    /// Gamma correction with gamma = `index / 10`
    Gamma,
}

impl Noise {
    /// All noise operators in registry order.
    pub const ALL: [Noise; 5] = [
        Noise::Identity,
        Noise::Rotation,
        Noise::Flip,
        Noise::Blur,
        Noise::Gamma,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Noise::Identity => "identity",
            Noise::Rotation => "rotation",
            Noise::Flip => "flip",
            Noise::Blur => "blur",
            Noise::Gamma => "gamma",
        }
    }

    /// Legacy function name, still accepted by [`FromStr`]
    pub fn legacy_name(self) -> &'static str {
        match self {
            Noise::Identity => "t_linear",
            Noise::Rotation => "t_rotation",
            Noise::Flip => "t_flip",
            Noise::Blur => "t_blur",
            Noise::Gamma => "t_gamma",
        }
    }

    /// Indices the operator accepts.
    pub fn index_range(self) -> RangeInclusive<u32> {
        match self {
            Noise::Identity => 0..=0,
            Noise::Rotation => 0..=3,
            Noise::Flip => 0..=2,
            Noise::Blur => 1..=3,
            Noise::Gamma => 5..=15,
        }
    }

    /// Indices a registry draws from.
    ///
    /// Narrower than [`index_range`](Self::index_range) for gamma only.
    pub fn sampling_range(self) -> RangeInclusive<u32> {
        match self {
            Noise::Gamma => 8..=12,
            other => other.index_range(),
        }
    }

    /// Check `index` against [`index_range`](Self::index_range).
    pub fn check_index(self, index: u32) -> AugmentResult<()> {
        let range = self.index_range();
        if range.contains(&index) {
            Ok(())
        } else {
            Err(AugmentError::IndexOutOfRange {
                operator: self.name(),
                index,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }

    /// Run the operator on a pair of equal shape.
    ///
    /// Square inputs keep their shape; rotation by an odd number of quarter
    /// turns and the transpose swap width and height otherwise.
    pub fn apply(self, field: &Field, mask: &Mask, index: u32) -> AugmentResult<(Field, Mask)> {
        self.check_index(index)?;

        let pair = match (self, index) {
            (Noise::Identity, _) => (field.clone(), mask.to_8bit()),
            (Noise::Rotation, quads) => (rotate_orth_ccw(field, quads)?, rotate_orth_ccw(mask, quads)?),
            (Noise::Flip, 0) => (transpose(field)?, transpose(mask)?),
            (Noise::Flip, 1) => (flip_tb(field)?, flip_tb(mask)?),
            (Noise::Flip, _) => (flip_lr(field)?, flip_lr(mask)?),
            (Noise::Blur, sigma) => (gaussian_blur(field, sigma as f32)?, mask.clone()),
            (Noise::Gamma, tenths) => (gamma_correct(field, tenths as f32 / 10.0)?, mask.clone()),
        };
        Ok(pair)
    }
}

impl fmt::Display for Noise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Noise {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.name() == s || n.legacy_name() == s)
            .ok_or_else(|| AugmentError::UnknownOperator {
                family: "noise",
                name: s.to_string(),
            })
    }
}
