//! fieldaug-filter - Pixel-level field operations
//!
//! This crate provides the photometric operations used by the augmentation
//! engine:
//!
//! - Separable Gaussian blur applied independently to each field channel
//! - Tone reproduction curve (TRC) lookup tables and gamma correction
//!
//! Masks never pass through this crate: blur and gamma leave labels alone.

pub mod convolve;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{
    BlurOptions, BorderMode, gaussian_blur, gaussian_blur_channel, gaussian_blur_with_options,
};
pub use enhance::{TrcLut, gamma_correct, gamma_trc, trc_map};
