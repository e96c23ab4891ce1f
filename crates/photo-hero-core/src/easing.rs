//! Timing curves for the hero ramp and the drag snap-back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Curve mapping elapsed animation time onto eased progress. Configured by
/// name in JSON (`"ease_in_out"`, `"ease_in"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    /// Starts slow. Used for the snap-back after a cancelled dismiss.
    EaseIn,
    EaseOut,
    /// Expand/collapse ramp.
    #[default]
    EaseInOut,
}

impl EasingType {
    /// Eased value for a fraction of the animation. Out-of-range input is
    /// clamped, so overshooting ticks land exactly on 1.
    pub fn apply(&self, fraction: f32) -> f32 {
        let x = fraction.clamp(0.0, 1.0);
        match self {
            Self::Linear => x,
            Self::EaseIn => x * x,
            Self::EaseOut => x * (2.0 - x),
            Self::EaseInOut if x < 0.5 => 2.0 * x * x,
            Self::EaseInOut => 1.0 - 2.0 * (1.0 - x) * (1.0 - x),
        }
    }

    /// Eased value after `elapsed` of an animation lasting `total`. A zero
    /// length animation is already finished.
    pub fn at(&self, elapsed: Duration, total: Duration) -> f32 {
        if total.is_zero() {
            return 1.0;
        }
        self.apply(elapsed.as_secs_f32() / total.as_secs_f32())
    }
}
