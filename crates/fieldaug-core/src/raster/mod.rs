//! Raster - The generic 2-D pixel container
//!
//! A `Raster<P>` is a row-major grid of `width * height` pixels of type `P`.
//! [`Field`](crate::Field) and [`Mask`](crate::Mask) are aliases over it, so
//! every spatial operator is written once and moves a field and its mask in
//! exactly the same way.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod access;
mod clip;

pub use clip::Region;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel types that can be stored in a [`Raster`].
pub trait Pixel: Copy + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {}

impl<T> Pixel for T where T: Copy + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {}

/// Internal raster data
#[derive(Debug)]
struct RasterData<P> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixels in row-major order
    data: Vec<P>,
}

impl<P: Clone> Clone for RasterData<P> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }
}

/// Raster - Main pixel container
///
/// `Raster` uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use fieldaug_core::Mask;
///
/// let mask = Mask::new(64, 32).unwrap();
/// assert_eq!(mask.width(), 64);
/// assert_eq!(mask.height(), 32);
/// ```
#[derive(Debug)]
pub struct Raster<P> {
    inner: Arc<RasterData<P>>,
}

impl<P> Clone for Raster<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Pixel> Raster<P> {
    /// Create a new raster with the specified dimensions.
    ///
    /// Every pixel is initialized to `P::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, P::default())
    }

    /// Create a new raster with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self::wrap(width, height, vec![value; len]))
    }

    /// Create a raster from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::DataLength {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self::wrap(width, height, data))
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(width as usize * height as usize)
    }

    fn wrap(width: u32, height: u32, data: Vec<P>) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        }
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data (row-major).
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster's storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two rasters share the same storage.
    #[inline]
    pub fn shares_storage(&self, other: &Raster<P>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Get the pixels of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[P] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Check if two rasters have the same width and height.
    ///
    /// The pixel types may differ, so a field can be checked against its mask.
    pub fn sizes_equal<Q: Pixel>(&self, other: &Raster<Q>) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Check if two rasters have the same dimensions and pixels.
    pub fn equals(&self, other: &Raster<P>) -> bool {
        self.shares_storage(other)
            || (self.sizes_equal(other) && self.inner.data == other.inner.data)
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut<P>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut<P> {
        RasterMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Build a new raster of another pixel type by mapping every pixel.
    pub fn map<Q: Pixel>(&self, f: impl FnMut(P) -> Q) -> Raster<Q> {
        let data = self.inner.data.iter().copied().map(f).collect();
        Raster::wrap(self.inner.width, self.inner.height, data)
    }
}

/// Mutable raster
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut<P> {
    inner: RasterData<P>,
}

impl<P: Pixel> RasterMut<P> {
    /// Create a new mutable raster with every pixel set to `P::default()`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Raster::<P>::checked_len(width, height)?;
        Ok(RasterMut {
            inner: RasterData {
                width,
                height,
                data: vec![P::default(); len],
            },
        })
    }

    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.inner.data
    }

    /// Get mutable access to one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: P) {
        self.inner.data.fill(value);
    }
}

impl<P> From<RasterMut<P>> for Raster<P> {
    fn from(raster_mut: RasterMut<P>) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
