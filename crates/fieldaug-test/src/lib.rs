//! fieldaug-test - Regression test framework for fieldaug
//!
//! This crate provides a regression test tracker with two modes:
//!
//! - **Compare**: Record every mismatch and fail in [`RegParams::cleanup`] (default)
//! - **Display**: Run and print every comparison without failing
//!
//! plus synthetic field/mask fixtures, so tests never depend on image files.
//!
//! # Usage
//!
//! ```
//! use fieldaug_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("fixtures");
//! let field = fixtures::gradient_field(8, 8).expect("gradient field");
//! rp.compare_values(8.0, field.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
