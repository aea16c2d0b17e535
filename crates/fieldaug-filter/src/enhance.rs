//! Image enhancement operations
//!
//! Tone reproduction curve (TRC) mapping and gamma correction.

use crate::{FilterError, FilterResult};
use fieldaug_core::Field;

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input channel values [0..255] to output values [0..255].
pub type TrcLut = [u8; 256];

/// Generate a gamma TRC lookup table.
///
/// The mapping uses a power function:
/// `output = floor(255 * (input / 255) ^ (1 / gamma))`
///
/// # Arguments
///
/// * `gamma` - Gamma correction factor; must be > 0.0.
///   Values > 1.0 lighten the image; values < 1.0 darken it.
///   `gamma == 1.0` gives the identity table.
pub fn gamma_trc(gamma: f32) -> FilterResult<TrcLut> {
    if !(gamma > 0.0 && gamma.is_finite()) {
        return Err(FilterError::InvalidParameters(format!(
            "gamma must be > 0.0, got {gamma}"
        )));
    }

    let inv_gamma = 1.0 / f64::from(gamma);
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f64 / 255.0;
        let mapped = 255.0 * x.powf(inv_gamma);
        *entry = mapped.clamp(0.0, 255.0) as u8;
    }

    Ok(lut)
}

/// Apply a TRC lookup table to every channel of every field pixel.
///
/// Returns a new field; the input is left untouched.
pub fn trc_map(field: &Field, lut: &TrcLut) -> Field {
    field.map(|[r, g, b]| [lut[r as usize], lut[g as usize], lut[b as usize]])
}

/// Gamma-correct a field.
///
/// Builds the table with [`gamma_trc`] and applies it with [`trc_map`].
pub fn gamma_correct(field: &Field, gamma: f32) -> FilterResult<Field> {
    let lut = gamma_trc(gamma)?;
    Ok(trc_map(field, &lut))
}
