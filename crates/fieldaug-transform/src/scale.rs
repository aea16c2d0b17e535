//! Pixel replication (nearest-neighbor upsampling)
//!
//! Replication copies each source pixel into a block of output pixels and
//! never blends neighbours, so categorical mask labels survive unchanged.

use crate::{TransformError, TransformResult};
use fieldaug_core::{Pixel, Raster, RasterMut};

/// Expand a raster by an exact integer factor along both axes
///
/// Every source pixel becomes a `factor x factor` block.
///
/// # Arguments
/// * `raster` - Input raster
/// * `factor` - Replication factor (>= 1)
pub fn expand_replicate<P: Pixel>(raster: &Raster<P>, factor: u32) -> TransformResult<Raster<P>> {
    if factor == 0 {
        return Err(TransformError::InvalidScaleFactor(
            "replication factor must be >= 1".into(),
        ));
    }
    if factor == 1 {
        return Ok(raster.clone());
    }

    let w = raster.width().checked_mul(factor);
    let h = raster.height().checked_mul(factor);
    let (Some(w), Some(h)) = (w, h) else {
        return Err(TransformError::InvalidScaleFactor(format!(
            "factor {factor} overflows {}x{}",
            raster.width(),
            raster.height()
        )));
    };

    sample_blocks(raster, w, h, factor)
}

/// Expand a raster by 2x replication to an exact target size
///
/// Output pixel `(x, y)` takes source pixel `(x / 2, y / 2)`. When the
/// target is exactly twice the source this is plain 2x replication; when a
/// target dimension is odd the last source row or column is repeated once
/// more to fill it.
///
/// # Arguments
/// * `raster` - Input raster
/// * `width` - Target width, in `2 * w ..= 2 * w + 1`
/// * `height` - Target height, in `2 * h ..= 2 * h + 1`
pub fn expand_replicate_to<P: Pixel>(
    raster: &Raster<P>,
    width: u32,
    height: u32,
) -> TransformResult<Raster<P>> {
    let fits = |src: u32, dst: u32| {
        let lo = u64::from(src) * 2;
        (lo..=lo + 1).contains(&u64::from(dst))
    };
    if !fits(raster.width(), width) || !fits(raster.height(), height) {
        return Err(TransformError::InvalidParameters(format!(
            "cannot replicate {}x{} to {}x{}",
            raster.width(),
            raster.height(),
            width,
            height
        )));
    }

    sample_blocks(raster, width, height, 2)
}

fn sample_blocks<P: Pixel>(
    raster: &Raster<P>,
    width: u32,
    height: u32,
    factor: u32,
) -> TransformResult<Raster<P>> {
    let max_x = raster.width() - 1;
    let max_y = raster.height() - 1;
    let mut out = RasterMut::new(width, height)?;

    for y in 0..height {
        let src = raster.row((y / factor).min(max_y));
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            *px = src[(x as u32 / factor).min(max_x) as usize];
        }
    }

    Ok(out.into())
}
