//! Mask - categorical label arrays
//!
//! A mask is aligned pixel-for-pixel with a [`Field`](crate::Field).
//! Label `0` means background; positive labels identify distinct
//! boundary regions.

use crate::error::Result;
use crate::raster::Raster;
use std::collections::BTreeSet;

/// Region identifier stored in a mask.
pub type Label = u32;

/// Label array aligned with a field.
pub type Mask = Raster<Label>;

impl Raster<Label> {
    /// Create a mask from row-major labels.
    pub fn from_labels(width: u32, height: u32, labels: Vec<Label>) -> Result<Mask> {
        Raster::from_vec(width, height, labels)
    }

    /// Get the distinct non-zero labels in ascending order.
    pub fn labels(&self) -> BTreeSet<Label> {
        self.data().iter().copied().filter(|&v| v != 0).collect()
    }

    /// Get the number of distinct non-zero labels.
    pub fn label_count(&self) -> usize {
        self.labels().len()
    }

    /// Renumber the non-zero labels to the contiguous range `1..=k`.
    ///
    /// Labels keep their ascending order: the smallest label present becomes
    /// 1, the next becomes 2, and so on. Background (0) is left untouched.
    /// Returns a clone of `self` when the labels are already contiguous.
    pub fn relabel_contiguous(&self) -> Mask {
        let labels: Vec<Label> = self.labels().into_iter().collect();
        let contiguous = labels
            .iter()
            .enumerate()
            .all(|(i, &v)| v as usize == i + 1);
        if contiguous {
            return self.clone();
        }

        self.map(|v| match v {
            0 => 0,
            // v is present in `labels`, so the search always succeeds
            _ => labels.binary_search(&v).map_or(0, |i| i as Label + 1),
        })
    }

    /// Re-encode the mask as an 8-bit label image.
    ///
    /// Labels up to 255 are unchanged; larger labels keep their low 8 bits.
    pub fn to_8bit(&self) -> Mask {
        if self.data().iter().all(|&v| v <= Label::from(u8::MAX)) {
            return self.clone();
        }
        self.map(|v| v & 0xff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let mask = Mask::from_labels(3, 2, vec![0, 5, 5, 9, 0, 2]).unwrap();
        let labels: Vec<_> = mask.labels().into_iter().collect();
        assert_eq!(labels, vec![2, 5, 9]);
        assert_eq!(mask.label_count(), 3);
    }

    #[test]
    fn test_relabel_contiguous() {
        let mask = Mask::from_labels(3, 2, vec![0, 5, 5, 9, 0, 2]).unwrap();
        let relabeled = mask.relabel_contiguous();
        assert_eq!(relabeled.data(), &[0, 2, 2, 3, 0, 1]);
        // Source is untouched
        assert_eq!(mask.data(), &[0, 5, 5, 9, 0, 2]);
    }

    #[test]
    fn test_relabel_already_contiguous_shares_storage() {
        let mask = Mask::from_labels(2, 2, vec![1, 2, 0, 3]).unwrap();
        let relabeled = mask.relabel_contiguous();
        assert!(relabeled.shares_storage(&mask));
    }

    #[test]
    fn test_relabel_background_only() {
        let mask = Mask::new(4, 4).unwrap();
        let relabeled = mask.relabel_contiguous();
        assert!(relabeled.data().iter().all(|&v| v == 0));
        assert!(relabeled.labels().is_empty());
    }

    #[test]
    fn test_relabel_single_high_label() {
        let mask = Mask::from_labels(2, 1, vec![0, 700]).unwrap();
        assert_eq!(mask.relabel_contiguous().data(), &[0, 1]);
    }

    #[test]
    fn test_to_8bit() {
        let small = Mask::from_labels(2, 1, vec![3, 255]).unwrap();
        assert!(small.to_8bit().shares_storage(&small));

        let large = Mask::from_labels(2, 1, vec![256, 258]).unwrap();
        assert_eq!(large.to_8bit().data(), &[0, 2]);
    }
}
