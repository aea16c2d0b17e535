//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Coordinates are `(x, y)` with `x` the column and `y` the row.

use super::{Pixel, Raster, RasterMut};
use crate::error::{Error, Result};

impl<P: Pixel> Raster<P> {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width() && y < self.height() {
            Some(self.get_pixel_unchecked(x, y))
        } else {
            None
        }
    }

    /// Get a pixel value without bounds checking against the raster shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> P {
        self.data()[y as usize * self.width() as usize + x as usize]
    }
}

impl<P: Pixel> RasterMut<P> {
    /// Get a pixel value at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width() && y < self.height() {
            Some(self.get_pixel_unchecked(x, y))
        } else {
            None
        }
    }

    /// Get a pixel value without bounds checking against the raster shape.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> P {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: P) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking against the raster shape.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: P) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.data_mut()[idx] = val;
    }
}
