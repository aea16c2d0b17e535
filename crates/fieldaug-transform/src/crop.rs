//! Half-size crops re-expanded to the input resolution
//!
//! Both crops cut a region of half the input height and half the input
//! width, replicate it back to the input shape with
//! [`expand_replicate_to`](crate::expand_replicate_to) and renumber the
//! mask labels that survive to `1..=k`.
//!
//! | Rust function | Region |
//! |---|---|
//! | `crop_quadrant` | one of the four quadrants |
//! | `crop_offset` | square offset `(offset, offset)` from the top-left corner |

use crate::scale::expand_replicate_to;
use crate::{TransformError, TransformResult};
use fieldaug_core::{Field, Mask, Region};

/// One quarter of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Rows `0..h/2`, columns `0..w/2`
    TopLeft,
    /// Rows `0..h/2`, columns `w/2..w`
    TopRight,
    /// Rows `h/2..h`, columns `0..w/2`
    BottomLeft,
    /// Rows `h/2..h`, columns `w/2..w`
    BottomRight,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Get the quadrant for an index in `0..=3`.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Get the `(row, col)` position of the quadrant in the 2x2 grid.
    pub fn grid_position(self) -> (u32, u32) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, 1),
            Quadrant::BottomLeft => (1, 0),
            Quadrant::BottomRight => (1, 1),
        }
    }
}

/// Largest offset accepted by [`crop_offset`] for a `width` x `height` input.
pub fn max_offset(width: u32, height: u32) -> u32 {
    width.min(height) / 2
}

fn half_size(width: u32, height: u32) -> TransformResult<(u32, u32)> {
    let (hw, hh) = (width / 2, height / 2);
    if hw == 0 || hh == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "{width}x{height} is too small to halve"
        )));
    }
    Ok((hw, hh))
}

/// Get the region covered by a quadrant of a `width` x `height` raster.
pub fn quadrant_region(width: u32, height: u32, quadrant: Quadrant) -> TransformResult<Region> {
    let (hw, hh) = half_size(width, height)?;
    let (row, col) = quadrant.grid_position();
    Ok(Region::new(col * hw, row * hh, hw, hh))
}

/// Get the half-size region starting at `(offset, offset)`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `offset` exceeds
/// [`max_offset`].
pub fn offset_region(width: u32, height: u32, offset: u32) -> TransformResult<Region> {
    let (hw, hh) = half_size(width, height)?;
    let max = max_offset(width, height);
    if offset > max {
        return Err(TransformError::InvalidParameters(format!(
            "offset {offset} exceeds {max} for {width}x{height} input"
        )));
    }
    Ok(Region::new(offset, offset, hw, hh))
}

/// Crop one quadrant and replicate it back to the input resolution.
///
/// The field and mask must have the same dimensions.
///
/// # Example
/// ```
/// use fieldaug_core::{Field, Mask};
/// use fieldaug_transform::{Quadrant, crop_quadrant};
///
/// let field = Field::new(4, 4).unwrap();
/// let mask = Mask::from_labels(4, 4, vec![
///     0, 0, 1, 1,
///     0, 0, 1, 1,
///     2, 2, 0, 0,
///     2, 2, 0, 0,
/// ]).unwrap();
/// let (_, m) = crop_quadrant(&field, &mask, Quadrant::TopRight).unwrap();
/// assert!(m.data().iter().all(|&v| v == 1));
/// ```
pub fn crop_quadrant(
    field: &Field,
    mask: &Mask,
    quadrant: Quadrant,
) -> TransformResult<(Field, Mask)> {
    let region = quadrant_region(field.width(), field.height(), quadrant)?;
    crop_and_expand(field, mask, region)
}

/// Crop the half-size square at `(offset, offset)` and replicate it back to
/// the input resolution.
///
/// The field and mask must have the same dimensions.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `offset` exceeds
/// [`max_offset`].
pub fn crop_offset(field: &Field, mask: &Mask, offset: u32) -> TransformResult<(Field, Mask)> {
    let region = offset_region(field.width(), field.height(), offset)?;
    crop_and_expand(field, mask, region)
}

fn crop_and_expand(field: &Field, mask: &Mask, region: Region) -> TransformResult<(Field, Mask)> {
    let (w, h) = field.dimensions();

    let field_slice = field.clip_rectangle(region)?;
    let field_out = expand_replicate_to(&field_slice, w, h)?;

    let mask_slice = mask.clip_rectangle(region)?;
    let mask_out = expand_replicate_to(&mask_slice, w, h)?.relabel_contiguous();

    Ok((field_out, mask_out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_mask(w: u32, h: u32) -> Mask {
        Mask::from_labels(w, h, (1..=w * h).collect()).unwrap()
    }

    #[test]
    fn test_quadrant_from_index() {
        assert_eq!(Quadrant::from_index(0), Some(Quadrant::TopLeft));
        assert_eq!(Quadrant::from_index(3), Some(Quadrant::BottomRight));
        assert_eq!(Quadrant::from_index(4), None);
    }

    #[test]
    fn test_quadrant_regions() {
        assert_eq!(
            quadrant_region(8, 6, Quadrant::TopLeft).unwrap(),
            Region::new(0, 0, 4, 3)
        );
        assert_eq!(
            quadrant_region(8, 6, Quadrant::TopRight).unwrap(),
            Region::new(4, 0, 4, 3)
        );
        assert_eq!(
            quadrant_region(8, 6, Quadrant::BottomLeft).unwrap(),
            Region::new(0, 3, 4, 3)
        );
        assert_eq!(
            quadrant_region(8, 6, Quadrant::BottomRight).unwrap(),
            Region::new(4, 3, 4, 3)
        );
        assert!(quadrant_region(1, 6, Quadrant::TopLeft).is_err());
    }

    #[test]
    fn test_offset_region_bounds() {
        assert_eq!(max_offset(8, 6), 3);
        assert_eq!(offset_region(8, 6, 3).unwrap(), Region::new(3, 3, 4, 3));
        assert!(offset_region(8, 6, 4).is_err());
    }

    #[test]
    fn test_crop_quadrant_bottom_right() {
        // Labels 1..=16 row-major; bottom-right quadrant holds 11, 12, 15, 16
        let mask = numbered_mask(4, 4);
        let field = Field::new(4, 4).unwrap();
        let (f, m) = crop_quadrant(&field, &mask, Quadrant::BottomRight).unwrap();
        assert_eq!(f.dimensions(), (4, 4));
        #[rustfmt::skip]
        let expected = [
            1, 1, 2, 2,
            1, 1, 2, 2,
            3, 3, 4, 4,
            3, 3, 4, 4,
        ];
        assert_eq!(m.data(), &expected);
    }

    #[test]
    fn test_crop_offset_zero_is_top_left() {
        let mask = numbered_mask(4, 4);
        let field = Field::from_vec(4, 4, (0..16u8).map(|v| [v, v, v]).collect()).unwrap();
        let (f_off, m_off) = crop_offset(&field, &mask, 0).unwrap();
        let (f_q, m_q) = crop_quadrant(&field, &mask, Quadrant::TopLeft).unwrap();
        assert!(f_off.equals(&f_q));
        assert!(m_off.equals(&m_q));
        assert_eq!(f_off.get_pixel(3, 3), Some([5, 5, 5]));
    }

    #[test]
    fn test_crop_offset_too_large() {
        let mask = numbered_mask(4, 4);
        let field = Field::new(4, 4).unwrap();
        assert!(crop_offset(&field, &mask, 2).is_ok());
        assert!(crop_offset(&field, &mask, 3).is_err());
    }

    #[test]
    fn test_crop_odd_dimensions_keep_shape() {
        let mask = numbered_mask(5, 3);
        let field = Field::new(5, 3).unwrap();
        let (f, m) = crop_quadrant(&field, &mask, Quadrant::BottomRight).unwrap();
        assert_eq!(f.dimensions(), (5, 3));
        assert_eq!(m.dimensions(), (5, 3));
    }
}
