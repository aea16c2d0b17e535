//! fieldaug-augment - Operator dispatch for field/mask augmentation
//!
//! An augmentation is one [`Translation`] (crop and re-expand) followed by
//! one [`Noise`] operator (orientation or pixel perturbation), each chosen
//! by a small integer index:
//!
//! - [`transform`] validates and runs one configuration
//! - [`Augmentation`] bundles a configuration
//! - [`Registry`] lists the sampling ranges and draws random configurations
//!
//! # Example
//!
//! ```
//! use fieldaug_augment::{Augmentation, Noise, Translation};
//! use fieldaug_core::{Field, Mask};
//!
//! let field = Field::new(8, 8).unwrap();
//! let mask = Mask::new(8, 8).unwrap();
//! let aug: Augmentation = Augmentation::new(
//!     "t_quartile".parse::<Translation>().unwrap(),
//!     3,
//!     "blur".parse::<Noise>().unwrap(),
//!     1,
//! );
//! let (f, m) = aug.apply(&field, &mask).unwrap();
//! assert_eq!(f.dimensions(), m.dimensions());
//! ```

pub mod dispatch;
mod error;
pub mod noise;
pub mod registry;
pub mod translation;

pub use dispatch::{Augmentation, transform};
pub use error::{AugmentError, AugmentResult};
pub use noise::Noise;
pub use registry::{DEFAULT_TILE_SIZE, Registry};
pub use translation::Translation;
