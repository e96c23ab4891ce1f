//! Error types.
//!
//! Gesture and transition operations are total and never fail; the only
//! fallible surface is loading and validating tunables.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'{name}' must be a finite value greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("min_zoom_scale ({min}) must not exceed max_zoom_scale ({max})")]
    ScaleOrdering { min: f32, max: f32 },

    #[error("double_tap_zoom_scale ({value}) must lie within [{min}, {max}]")]
    DoubleTapOutOfRange { value: f32, min: f32, max: f32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
