//! Rotation and flip operations
//!
//! This module provides:
//! - Orthogonal rotations (90/180/270 degrees)
//! - Horizontal and vertical flips
//! - Transpose (mirror about the main diagonal)
//!
//! Rotations by 90 degrees swap width and height; flips keep them.

use crate::{TransformError, TransformResult};
use fieldaug_core::{Pixel, Raster, RasterMut};

/// Rotate a raster counter-clockwise in 90-degree steps
///
/// The rotation is applied as `quads` successive single-step rotations,
/// so `rotate_orth_ccw(r, 2)` is bit-identical to rotating twice by hand.
///
/// # Arguments
/// * `raster` - Input raster
/// * `quads` - Number of 90-degree counter-clockwise rotations (0-3)
///
/// # Returns
/// The rotated raster. `quads == 0` returns a clone sharing storage.
pub fn rotate_orth_ccw<P: Pixel>(raster: &Raster<P>, quads: u32) -> TransformResult<Raster<P>> {
    if quads > 3 {
        return Err(TransformError::InvalidParameters(format!(
            "quads must be in 0..=3, got {quads}"
        )));
    }

    let mut out = raster.clone();
    for _ in 0..quads {
        out = rotate_90(&out, false)?;
    }
    Ok(out)
}

/// Rotate a raster 90 degrees
///
/// # Arguments
/// * `raster` - Input raster
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90<P: Pixel>(raster: &Raster<P>, clockwise: bool) -> TransformResult<Raster<P>> {
    let w = raster.width();
    let h = raster.height();

    // Output dimensions are swapped
    let mut out = RasterMut::new(h, w)?;

    for y in 0..h {
        for x in 0..w {
            let val = raster.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out.set_pixel_unchecked(nx, ny, val);
        }
    }

    Ok(out.into())
}

/// Rotate a raster 180 degrees
pub fn rotate_180<P: Pixel>(raster: &Raster<P>) -> TransformResult<Raster<P>> {
    // 180 rotation = horizontal flip + vertical flip
    let flipped_h = flip_lr(raster)?;
    flip_tb(&flipped_h)
}

/// Flip a raster left-right (reverse column order)
pub fn flip_lr<P: Pixel>(raster: &Raster<P>) -> TransformResult<Raster<P>> {
    let mut out = RasterMut::new(raster.width(), raster.height())?;

    for y in 0..raster.height() {
        let dst = out.row_mut(y);
        dst.copy_from_slice(raster.row(y));
        dst.reverse();
    }

    Ok(out.into())
}

/// Flip a raster top-bottom (reverse row order)
pub fn flip_tb<P: Pixel>(raster: &Raster<P>) -> TransformResult<Raster<P>> {
    let h = raster.height();
    let mut out = RasterMut::new(raster.width(), h)?;

    for y in 0..h {
        out.row_mut(h - 1 - y).copy_from_slice(raster.row(y));
    }

    Ok(out.into())
}

/// Mirror a raster about its main diagonal
///
/// `out(x, y) = in(y, x)`. Equivalent to a left-right flip followed by a
/// 90-degree counter-clockwise rotation.
pub fn transpose<P: Pixel>(raster: &Raster<P>) -> TransformResult<Raster<P>> {
    let w = raster.width();
    let h = raster.height();
    let mut out = RasterMut::new(h, w)?;

    for y in 0..h {
        for x in 0..w {
            out.set_pixel_unchecked(y, x, raster.get_pixel_unchecked(x, y));
        }
    }

    Ok(out.into())
}
