//! Translation operators
//!
//! A translation crops (or keeps) part of the pair and brings it back to
//! the input resolution. It always runs before the noise operator.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::{AugmentError, AugmentResult};
use fieldaug_core::{Field, Mask};
use fieldaug_transform::{Quadrant, crop_offset, crop_quadrant, max_offset};

/// Spatial operator applied first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translation {
    /// Pass-through; the mask is reduced to 8 bits
    Identity,
    /// One quadrant, replicated 2x
    QuartileSplit,
    /// Half-size square at `(index, index)`, replicated 2x
    OffsetCrop,
}

impl Translation {
    /// All translations in registry order.
    pub const ALL: [Translation; 3] = [
        Translation::Identity,
        Translation::QuartileSplit,
        Translation::OffsetCrop,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Translation::Identity => "identity",
            Translation::QuartileSplit => "quartile-split",
            Translation::OffsetCrop => "offset-crop",
        }
    }

    /// Legacy function name, still accepted by [`FromStr`]
    pub fn legacy_name(self) -> &'static str {
        match self {
            Translation::Identity => "t_linear",
            Translation::QuartileSplit => "t_quartile",
            Translation::OffsetCrop => "t_offset",
        }
    }

    /// Indices accepted for a `width` x `height` input.
    pub fn index_range(self, width: u32, height: u32) -> RangeInclusive<u32> {
        match self {
            Translation::Identity => 0..=0,
            Translation::QuartileSplit => 0..=3,
            Translation::OffsetCrop => 0..=max_offset(width, height),
        }
    }

    /// Indices drawn by a registry built for square tiles of side `tile`.
    pub fn sampling_range(self, tile: u32) -> RangeInclusive<u32> {
        self.index_range(tile, tile)
    }

    /// Check `index` against [`index_range`](Self::index_range).
    pub fn check_index(self, index: u32, width: u32, height: u32) -> AugmentResult<()> {
        let range = self.index_range(width, height);
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
    /// The output pair has the input shape. Crops renumber the surviving
    /// mask labels to `1..=k`.
    pub fn apply(self, field: &Field, mask: &Mask, index: u32) -> AugmentResult<(Field, Mask)> {
        self.check_index(index, field.width(), field.height())?;

        let pair = match self {
            Translation::Identity => (field.clone(), mask.to_8bit()),
            Translation::QuartileSplit => {
                let quadrant = Quadrant::from_index(index).ok_or(AugmentError::IndexOutOfRange {
                    operator: self.name(),
                    index,
                    min: 0,
                    max: 3,
                })?;
                crop_quadrant(field, mask, quadrant)?
            }
            Translation::OffsetCrop => crop_offset(field, mask, index)?,
        };
        Ok(pair)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Translation {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s || t.legacy_name() == s)
            .ok_or_else(|| AugmentError::UnknownOperator {
                family: "translation",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pair() -> (Field, Mask) {
        let field = Field::new(4, 4).unwrap();
        let mask = Mask::from_labels(
            4,
            4,
            vec![0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 0, 0, 2, 2, 0, 0],
        )
        .unwrap();
        (field, mask)
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("identity".parse::<Translation>().unwrap(), Translation::Identity);
        assert_eq!("t_linear".parse::<Translation>().unwrap(), Translation::Identity);
        assert_eq!("t_quartile".parse::<Translation>().unwrap(), Translation::QuartileSplit);
        assert_eq!("offset-crop".parse::<Translation>().unwrap(), Translation::OffsetCrop);
        for t in Translation::ALL {
            assert_eq!(t.to_string().parse::<Translation>().unwrap(), t);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "t_rotation".parse::<Translation>().unwrap_err();
        assert!(matches!(
            err,
            AugmentError::UnknownOperator { family: "translation", .. }
        ));
        assert!("t_shear".parse::<Translation>().is_err());
    }

    #[test]
    fn test_index_ranges() {
        assert_eq!(Translation::Identity.index_range(64, 64), 0..=0);
        assert_eq!(Translation::QuartileSplit.index_range(64, 64), 0..=3);
        assert_eq!(Translation::OffsetCrop.index_range(64, 40), 0..=20);
        assert_eq!(Translation::OffsetCrop.sampling_range(1024), 0..=512);
    }

    #[test]
    fn test_identity_keeps_values() {
        let (field, mask) = sample_pair();
        let (f, m) = Translation::Identity.apply(&field, &mask, 0).unwrap();
        assert!(f.shares_storage(&field));
        assert!(m.equals(&mask));
    }

    #[test]
    fn test_quartile_zero() {
        let (field, mask) = sample_pair();
        let (f, m) = Translation::QuartileSplit.apply(&field, &mask, 0).unwrap();
        assert!(f.equals(&field));
        assert!(m.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_offset_out_of_range() {
        let (field, mask) = sample_pair();
        assert!(Translation::OffsetCrop.apply(&field, &mask, 2).is_ok());
        let err = Translation::OffsetCrop.apply(&field, &mask, 3).unwrap_err();
        assert!(matches!(
            err,
            AugmentError::IndexOutOfRange { index: 3, max: 2, .. }
        ));
    }
}
