//! Translation + noise composition
//!
//! [`transform`] validates the whole request before any operator runs, so a
//! rejected call does no work.

use std::fmt;

use crate::{AugmentError, AugmentResult, Noise, Translation};
use fieldaug_core::{Field, Mask};
use tracing::{debug, warn};

/// Apply `translation` at `translation_index`, then `noise` at `noise_index`.
///
/// # Errors
///
/// - [`AugmentError::DimensionMismatch`] if field and mask shapes differ
/// - [`AugmentError::IndexOutOfRange`] if either index is outside its
///   operator's accepted range
///
/// # Example
/// ```
/// use fieldaug_augment::{Noise, Translation, transform};
/// use fieldaug_core::{Field, Mask};
///
/// let field = Field::new(4, 4).unwrap();
/// let mask = Mask::from_labels(4, 4, vec![
///     0, 0, 1, 1,
///     0, 0, 1, 1,
///     2, 2, 0, 0,
///     2, 2, 0, 0,
/// ]).unwrap();
/// let (f, m) = transform(&field, &mask, Translation::QuartileSplit, 0, Noise::Identity, 0).unwrap();
/// assert_eq!(f.dimensions(), (4, 4));
/// assert!(m.data().iter().all(|&v| v == 0));
/// ```
pub fn transform(
    field: &Field,
    mask: &Mask,
    translation: Translation,
    translation_index: u32,
    noise: Noise,
    noise_index: u32,
) -> AugmentResult<(Field, Mask)> {
    let (width, height) = field.dimensions();

    if !field.sizes_equal(mask) {
        warn!(
            width,
            height,
            mask_width = mask.width(),
            mask_height = mask.height(),
            "field and mask shapes differ"
        );
        return Err(AugmentError::DimensionMismatch {
            field_width: width,
            field_height: height,
            mask_width: mask.width(),
            mask_height: mask.height(),
        });
    }

    let checked = translation
        .check_index(translation_index, width, height)
        .and_then(|()| noise.check_index(noise_index));
    if let Err(err) = checked {
        warn!(
            %translation,
            translation_index,
            %noise,
            noise_index,
            error = %err,
            "rejected augmentation"
        );
        return Err(err);
    }

    debug!(
        %translation,
        translation_index,
        %noise,
        noise_index,
        width,
        height,
        "applying augmentation"
    );

    let (field, mask) = translation.apply(field, mask, translation_index)?;
    noise.apply(&field, &mask, noise_index)
}

/// One translation + noise configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Augmentation {
    pub translation: Translation,
    pub translation_index: u32,
    pub noise: Noise,
    pub noise_index: u32,
}

impl Augmentation {
    /// Create a configuration.
    pub fn new(translation: Translation, translation_index: u32, noise: Noise, noise_index: u32) -> Self {
        Self {
            translation,
            translation_index,
            noise,
            noise_index,
        }
    }

    /// Run the configuration through [`transform`].
    pub fn apply(&self, field: &Field, mask: &Mask) -> AugmentResult<(Field, Mask)> {
        transform(
            field,
            mask,
            self.translation,
            self.translation_index,
            self.noise,
            self.noise_index,
        )
    }
}

impl Default for Augmentation {
    fn default() -> Self {
        Self::new(Translation::Identity, 0, Noise::Identity, 0)
    }
}

impl fmt::Display for Augmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})+{}({})",
            self.translation, self.translation_index, self.noise, self.noise_index
        )
    }
}
