//! fieldaug-core - Basic data structures for field/mask augmentation
//!
//! This crate provides the containers shared by every fieldaug operator:
//!
//! - [`Raster`] / [`RasterMut`] - Generic 2-D pixel container (immutable / mutable)
//! - [`Field`] - RGB image tile (`Raster<Rgb>`)
//! - [`Mask`] - Categorical label array aligned with a field (`Raster<Label>`)
//! - [`Gray`] - Single 8-bit channel (`Raster<u8>`), used for per-channel filtering
//!
//! Label renormalization ([`Mask::relabel_contiguous`]) also lives here since
//! every spatial operator that subsamples a mask needs it.

pub mod error;
pub mod field;
pub mod mask;
pub mod raster;

pub use error::{Error, Result};
pub use field::{Field, Gray, Rgb};
pub use mask::{Label, Mask};
pub use raster::{Pixel, Raster, RasterMut, Region};

/// Channel indices of an [`Rgb`] pixel.
pub mod channel {
    /// Red channel
    pub const RED: usize = 0;
    /// Green channel
    pub const GREEN: usize = 1;
    /// Blue channel
    pub const BLUE: usize = 2;

    /// Number of channels in a field pixel.
    pub const COUNT: usize = 3;
}
