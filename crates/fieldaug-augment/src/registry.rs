//! Operator registry and random sampling
//!
//! A registry lists, for each operator family, the operators to draw from
//! and the index range drawn for each. Sampling picks an operator of each
//! family uniformly, then an index uniformly inside its range.

use std::ops::RangeInclusive;

use crate::{AugmentError, AugmentResult, Augmentation, Noise, Translation};
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use tracing::debug;

/// Tile side assumed by [`Registry::default`]
pub const DEFAULT_TILE_SIZE: u32 = 1024;

/// Operators and sampling ranges for both families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    translations: Vec<(Translation, RangeInclusive<u32>)>,
    noises: Vec<(Noise, RangeInclusive<u32>)>,
}

impl Default for Registry {
    /// Tables for [`DEFAULT_TILE_SIZE`] tiles.
    ///
    /// Offsets are drawn from `0..=512`, which smaller inputs reject.
    fn default() -> Self {
        Self::for_tile(DEFAULT_TILE_SIZE)
    }
}

impl Registry {
    /// Create a registry from explicit tables.
    ///
    /// Tables are checked when sampling, not here.
    pub fn new(
        translations: Vec<(Translation, RangeInclusive<u32>)>,
        noises: Vec<(Noise, RangeInclusive<u32>)>,
    ) -> Self {
        Self {
            translations,
            noises,
        }
    }

    /// Tables whose offset bound matches a `width` x `height` input.
    ///
    /// Every configuration sampled from the result is accepted by
    /// [`transform`](crate::transform) for that input.
    pub fn for_size(width: u32, height: u32) -> Self {
        Self::for_tile(width.min(height))
    }

    fn for_tile(tile: u32) -> Self {
        let translations = Translation::ALL
            .into_iter()
            .map(|t| (t, t.sampling_range(tile)))
            .collect();
        let noises = Noise::ALL.into_iter().map(|n| (n, n.sampling_range())).collect();
        debug!(tile, "built operator registry");
        Self::new(translations, noises)
    }

    /// Translation table
    pub fn translations(&self) -> &[(Translation, RangeInclusive<u32>)] {
        &self.translations
    }

    /// Noise table
    pub fn noises(&self) -> &[(Noise, RangeInclusive<u32>)] {
        &self.noises
    }

    /// Draw one configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidRange`] if a table is empty or the
    /// drawn operator's range is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AugmentResult<Augmentation> {
        let (translation, translation_index) = draw(&self.translations, "translation", rng)?;
        let (noise, noise_index) = draw(&self.noises, "noise", rng)?;
        Ok(Augmentation::new(translation, translation_index, noise, noise_index))
    }
}

fn draw<T: Copy, R: Rng + ?Sized>(
    table: &[(T, RangeInclusive<u32>)],
    family: &str,
    rng: &mut R,
) -> AugmentResult<(T, u32)> {
    let pick = Uniform::new(0, table.len())
        .map_err(|_| AugmentError::InvalidRange(format!("empty {family} table")))?;
    let (operator, range) = &table[pick.sample(rng)];
    let index = Uniform::new_inclusive(*range.start(), *range.end())
        .map_err(|e| AugmentError::InvalidRange(format!("{family} range {range:?}: {e}")))?
        .sample(rng);
    Ok((*operator, index))
}
