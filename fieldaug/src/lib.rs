//! fieldaug - Field/mask augmentation for field-boundary segmentation
//!
//! Augments paired RGB tiles and label masks by running one spatial
//! translation operator followed by one noise operator. The output pair
//! always has the input shape (for square inputs) and crop operators
//! renumber the surviving mask labels to `1..=k`.
//!
//! # Overview
//!
//! - [`augment`] - operator enums, the [`augment::transform`] dispatcher and
//!   the sampling [`augment::Registry`]
//! - [`transform`] - crops, pixel replication, rotations and flips
//! - [`filter`] - Gaussian blur and gamma correction
//!
//! # Example
//!
//! ```
//! use fieldaug::augment::Registry;
//! use fieldaug::{Field, Mask};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let field = Field::filled(64, 64, [90, 140, 60]).unwrap();
//! let mask = Mask::new(64, 64).unwrap();
//!
//! let registry = Registry::for_size(64, 64);
//! let mut rng = StdRng::seed_from_u64(1);
//! let aug = registry.sample(&mut rng).unwrap();
//! let (f, m) = aug.apply(&field, &mask).unwrap();
//! assert_eq!(f.dimensions(), (64, 64));
//! assert_eq!(m.dimensions(), (64, 64));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use fieldaug_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use fieldaug_augment as augment;
pub use fieldaug_filter as filter;
pub use fieldaug_transform as transform;
