//! Photo-Hero Core Library
//!
//! Gesture and transition math for a photo grid that expands into a
//! full-screen viewer. The rendering host owns every view; it feeds layout
//! rectangles, gesture samples and clock ticks in, and applies the returned
//! transforms, progress values and flags.
//!
//! - [`gesture`]: pinch / pan / double-tap transform for the detail image
//! - [`hero`]: expand/collapse handoff and drag-to-dismiss
//! - [`router`]: decides who owns a pan on the detail page

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod anchors;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod hero;
pub mod router;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod test_utils;

pub use anchors::{AnchorRegistry, AnchorRole, HeroItem};
pub use config::{EngineConfig, HandoffConfig, ZoomConfig};
pub use easing::EasingType;
pub use error::ConfigError;
pub use geometry::{AffineTransform2D, ContentBounds, Point, Rect, Size, UnitPoint, Vector2D};
pub use gesture::{Anchor, GestureSample, TransformGestureEngine};
pub use hero::{
    Decision, DragDismissState, HandoffEvent, HeroHandoffController, TransitionState,
};
pub use router::{DetailGestureRouter, PanRoute, RouteOutcome};
pub use scheduler::{DeferredQueue, Generation};
