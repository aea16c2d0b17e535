//! Rectangle clipping

use super::{Pixel, Raster, RasterMut};
use crate::error::{Error, Result};

/// Axis-aligned rectangle inside a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

impl Region {
    /// Create a region from its top-left corner and size.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Check that the region is non-empty and fits in a `width` x `height` raster.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.w > 0
            && self.h > 0
            && u64::from(self.x) + u64::from(self.w) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.h) <= u64::from(height)
    }
}

impl<P: Pixel> Raster<P> {
    /// Copy a rectangular region into a new raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the region is empty or extends
    /// past the raster.
    pub fn clip_rectangle(&self, region: Region) -> Result<Raster<P>> {
        if !region.fits(self.width(), self.height()) {
            return Err(Error::InvalidRegion {
                x: region.x,
                y: region.y,
                w: region.w,
                h: region.h,
                width: self.width(),
                height: self.height(),
            });
        }

        let mut out = RasterMut::new(region.w, region.h)?;
        let x0 = region.x as usize;
        let x1 = x0 + region.w as usize;
        for dy in 0..region.h {
            let src = &self.row(region.y + dy)[x0..x1];
            out.row_mut(dy).copy_from_slice(src);
        }
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(w: u32, h: u32) -> Raster<u32> {
        Raster::from_vec(w, h, (0..w * h).collect()).unwrap()
    }

    #[test]
    fn test_clip_rectangle() {
        // 0  1  2  3
        // 4  5  6  7
        // 8  9 10 11
        let r = numbered(4, 3);
        let c = r.clip_rectangle(Region::new(1, 1, 2, 2)).unwrap();
        assert_eq!(c.dimensions(), (2, 2));
        assert_eq!(c.data(), &[5, 6, 9, 10]);
    }

    #[test]
    fn test_clip_full_raster() {
        let r = numbered(3, 3);
        let c = r.clip_rectangle(Region::new(0, 0, 3, 3)).unwrap();
        assert!(c.equals(&r));
    }

    #[test]
    fn test_clip_out_of_bounds() {
        let r = numbered(4, 4);
        assert!(r.clip_rectangle(Region::new(3, 0, 2, 1)).is_err());
        assert!(r.clip_rectangle(Region::new(0, 0, 0, 1)).is_err());
        assert!(r.clip_rectangle(Region::new(u32::MAX, 0, 2, 1)).is_err());
    }
}
