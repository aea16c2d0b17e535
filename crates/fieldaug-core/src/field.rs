//! Field - RGB image tiles
//!
//! A field is an H x W x 3 array of 8-bit channel values stored as
//! `Raster<[u8; 3]>`. [`Gray`] holds one channel of a field.

use crate::channel;
use crate::error::{Error, Result};
use crate::raster::{Raster, RasterMut};

/// One RGB pixel: `[red, green, blue]`.
pub type Rgb = [u8; 3];

/// RGB image tile being augmented.
pub type Field = Raster<Rgb>;

/// Single 8-bit channel.
pub type Gray = Raster<u8>;

impl Raster<Rgb> {
    /// Create a field from interleaved `RGBRGB...` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Field> {
        let expected = width as usize * height as usize * channel::COUNT;
        if bytes.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(channel::COUNT)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Raster::from_vec(width, height, data)
    }

    /// Get the field as interleaved `RGBRGB...` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.data().iter().flatten().copied().collect()
    }

    /// Extract one channel as an 8-bit raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `c` is not 0, 1 or 2.
    pub fn channel(&self, c: usize) -> Result<Gray> {
        if c >= channel::COUNT {
            return Err(Error::InvalidParameter(format!(
                "channel index {c} must be < {}",
                channel::COUNT
            )));
        }
        Ok(self.map(|px| px[c]))
    }

    /// Combine three channels into a field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the channels differ in size.
    pub fn from_channels(r: &Gray, g: &Gray, b: &Gray) -> Result<Field> {
        for other in [g, b] {
            if !r.sizes_equal(other) {
                return Err(Error::DimensionMismatch {
                    expected: r.dimensions(),
                    actual: other.dimensions(),
                });
            }
        }
        let mut out = RasterMut::new(r.width(), r.height())?;
        for (i, px) in out.data_mut().iter_mut().enumerate() {
            *px = [r.data()[i], g.data()[i], b.data()[i]];
        }
        Ok(out.into())
    }
}
