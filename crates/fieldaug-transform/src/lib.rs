//! fieldaug-transform - Spatial operators for field/mask pairs
//!
//! This crate provides the geometric operations used by the augmentation
//! engine:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal and vertical flips, transpose (diagonal flip)
//! - Integer pixel replication (nearest-neighbor upsampling)
//! - Quadrant and offset crops that re-expand to the input resolution
//!
//! Every function is generic over the pixel type, so a field and its mask
//! go through the same code path.

pub mod crop;
mod error;
pub mod rotate;
pub mod scale;

pub use crop::{Quadrant, crop_offset, crop_quadrant, max_offset, offset_region, quadrant_region};
pub use error::{TransformError, TransformResult};
pub use rotate::{flip_lr, flip_tb, rotate_90, rotate_180, rotate_orth_ccw, transpose};
pub use scale::{expand_replicate, expand_replicate_to};
