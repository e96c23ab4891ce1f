//! Tunable parameters for the gesture engine and the hero controller.
//!
//! Every field has a default, so a host may supply a partial JSON document
//! (or nothing at all) and only override what it cares about.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::EasingType;
use crate::error::ConfigError;

/// Zoom limits for [`TransformGestureEngine`](crate::gesture::TransformGestureEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Committed scales below this snap back to identity.
    pub min_zoom_scale: f32,
    /// Upper bound for pinch zoom.
    pub max_zoom_scale: f32,
    /// Scale applied by a double tap on an unzoomed element.
    pub double_tap_zoom_scale: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom_scale: 1.0,
            max_zoom_scale: 5.0,
            double_tap_zoom_scale: 3.0,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("min_zoom_scale", self.min_zoom_scale)?;
        positive("max_zoom_scale", self.max_zoom_scale)?;
        positive("double_tap_zoom_scale", self.double_tap_zoom_scale)?;
        if self.min_zoom_scale > self.max_zoom_scale {
            return Err(ConfigError::ScaleOrdering {
                min: self.min_zoom_scale,
                max: self.max_zoom_scale,
            });
        }
        if !(self.min_zoom_scale..=self.max_zoom_scale).contains(&self.double_tap_zoom_scale) {
            return Err(ConfigError::DoubleTapOutOfRange {
                value: self.double_tap_zoom_scale,
                min: self.min_zoom_scale,
                max: self.max_zoom_scale,
            });
        }
        Ok(())
    }
}

/// Timing and thresholds for [`HeroHandoffController`](crate::hero::HeroHandoffController).
///
/// Durations are whole milliseconds so the animation clock stays exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// Length of the expand/collapse progress ramp.
    pub transition_ms: u64,
    /// Delay before the detail layer accepts input after an expand starts.
    pub interaction_delay_ms: u64,
    /// Delay before the selection is cleared after a collapse starts.
    pub collapse_delay_ms: u64,
    /// Length of the snap-back when a dismiss drag is released short.
    pub snap_back_ms: u64,
    /// Projected vertical drag distance beyond which a release dismisses.
    pub dismiss_distance: f32,
    /// Vertical drag distance at which drag progress reaches 1.
    pub drag_progress_divisor: f32,
    /// Release velocity is divided by this before being added to the offset.
    pub flick_velocity_divisor: f32,
    /// Minimum travel before an at-rest pan becomes a dismiss drag.
    pub drag_min_distance: f32,
    pub transition_easing: EasingType,
    pub snap_easing: EasingType,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            transition_ms: 250,
            interaction_delay_ms: 250,
            collapse_delay_ms: 250,
            snap_back_ms: 200,
            dismiss_distance: 100.0,
            drag_progress_divisor: 500.0,
            flick_velocity_divisor: 5.0,
            drag_min_distance: 15.0,
            transition_easing: EasingType::EaseInOut,
            snap_easing: EasingType::EaseIn,
        }
    }
}

impl HandoffConfig {
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn interaction_delay(&self) -> Duration {
        Duration::from_millis(self.interaction_delay_ms)
    }

    pub fn collapse_delay(&self) -> Duration {
        Duration::from_millis(self.collapse_delay_ms)
    }

    pub fn snap_back_duration(&self) -> Duration {
        Duration::from_millis(self.snap_back_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dismiss_distance", self.dismiss_distance)?;
        positive("drag_progress_divisor", self.drag_progress_divisor)?;
        positive("flick_velocity_divisor", self.flick_velocity_divisor)?;
        if !self.drag_min_distance.is_finite() || self.drag_min_distance < 0.0 {
            return Err(ConfigError::NotPositive {
                name: "drag_min_distance",
                value: self.drag_min_distance,
            });
        }
        Ok(())
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub zoom: ZoomConfig,
    pub handoff: HandoffConfig,
}

impl EngineConfig {
    /// Parses and validates a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom.validate()?;
        self.handoff.validate()
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
