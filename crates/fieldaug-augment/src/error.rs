//! Error types for fieldaug-augment

use thiserror::Error;

/// Errors that can occur while dispatching or sampling augmentations
#[derive(Debug, Error)]
pub enum AugmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fieldaug_core::Error),

    /// Spatial operator error
    #[error("transform error: {0}")]
    Transform(#[from] fieldaug_transform::TransformError),

    /// Pixel operator error
    #[error("filter error: {0}")]
    Filter(#[from] fieldaug_filter::FilterError),

    /// Operator name not in the translation or noise set
    #[error("unknown {family} operator: {name:?}")]
    UnknownOperator {
        /// `"translation"` or `"noise"`
        family: &'static str,
        name: String,
    },

    /// Operator index outside the operator's accepted range
    #[error("{operator} index {index} outside {min}..={max}")]
    IndexOutOfRange {
        operator: &'static str,
        index: u32,
        min: u32,
        max: u32,
    },

    /// Field and mask shapes differ
    #[error("field is {field_width}x{field_height} but mask is {mask_width}x{mask_height}")]
    DimensionMismatch {
        field_width: u32,
        field_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// Empty operator table or index range
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

/// Result type for augmentation operations
pub type AugmentResult<T> = Result<T, AugmentError>;
