//! Pinch, pan and double-tap handling for a single zoomable element.
//!
//! The engine keeps two transforms:
//! - `committed`: the baseline produced by the last finished gesture
//! - `current`: what the host should render right now
//!
//! Gesture-change samples update `current`; gesture-end samples clamp it and
//! make it the new baseline.

use serde::{Deserialize, Serialize};

use crate::config::ZoomConfig;
use crate::geometry::{AffineTransform2D, ContentBounds, Point, UnitPoint, Vector2D};

/// Smallest pinch magnitude accepted; non-positive samples are raised to this.
pub const MIN_PINCH_MAGNITUDE: f32 = 1e-3;

/// Scale never drops below this while a pinch is in flight.
pub const MIN_SCALE_FLOOR: f32 = 1e-3;

/// Where a pinch is centered.
///
/// Some platforms report the pinch center as an absolute point under the
/// fingers, others as a fraction of the element's size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "snake_case")]
pub enum Anchor {
    /// Absolute point in the content's local coordinates.
    Point(Point),
    /// Fraction of the content bounds.
    Unit(UnitPoint),
}

impl Anchor {
    pub fn resolve(&self, bounds: ContentBounds) -> Point {
        match self {
            Self::Point(point) => *point,
            Self::Unit(unit) => unit.scaled_by(bounds),
        }
    }
}

/// A raw gesture sample reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureSample {
    /// Pinch update. `magnitude` is cumulative since the pinch began.
    PinchChanged { magnitude: f32, anchor: Anchor },
    PinchEnded,
    /// Pan update. `translation` is cumulative since the pan began.
    PanChanged { translation: Vector2D },
    PanEnded {
        translation: Vector2D,
        velocity: Vector2D,
    },
    DoubleTap { location: Point },
}

/// Running scale + translation state for one element.
#[derive(Debug, Clone)]
pub struct TransformGestureEngine {
    config: ZoomConfig,
    committed: AffineTransform2D,
    current: AffineTransform2D,
    content_bounds: ContentBounds,
    /// Transform the active pinch started from. Cumulative samples are
    /// applied to it directly so that a magnitude of exactly 1.0 returns it
    /// bit for bit.
    pinch_baseline: Option<AffineTransform2D>,
    /// Transform the active pan started from, including any in-flight zoom.
    pan_baseline: Option<AffineTransform2D>,
}

impl Default for TransformGestureEngine {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl TransformGestureEngine {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            committed: AffineTransform2D::IDENTITY,
            current: AffineTransform2D::IDENTITY,
            content_bounds: ContentBounds::ZERO,
            pinch_baseline: None,
            pan_baseline: None,
        }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// The transform the host should render.
    pub fn transform(&self) -> AffineTransform2D {
        self.current
    }

    /// Baseline left by the last finished gesture.
    pub fn committed(&self) -> AffineTransform2D {
        self.committed
    }

    pub fn content_bounds(&self) -> ContentBounds {
        self.content_bounds
    }

    /// Records the element size from the host's latest layout pass.
    pub fn set_content_bounds(&mut self, bounds: ContentBounds) {
        self.content_bounds = bounds;
    }

    /// True while the element is unscaled. The host routes pans to the
    /// dismiss drag instead of the zoom pan in that case.
    pub fn is_at_rest(&self) -> bool {
        self.current.is_scale_identity()
    }

    /// Returns the element to identity, discarding any gesture in flight.
    pub fn reset(&mut self) {
        self.committed = AffineTransform2D::IDENTITY;
        self.current = AffineTransform2D::IDENTITY;
        self.end_tracking();
    }

    /// Dispatches a raw sample to the matching operation.
    pub fn handle(&mut self, sample: GestureSample, bounds: ContentBounds) -> AffineTransform2D {
        self.content_bounds = bounds;
        match sample {
            GestureSample::PinchChanged { magnitude, anchor } => {
                self.pinch_changed(magnitude, anchor, bounds)
            }
            GestureSample::PinchEnded | GestureSample::PanEnded { .. } => self.commit_and_clamp(),
            GestureSample::PanChanged { translation } => self.apply_pan(translation),
            GestureSample::DoubleTap { location } => self.apply_double_tap(location),
        }
    }

    /// Feeds a cumulative pinch magnitude (1.0 at the start of the pinch).
    ///
    /// The result is always rebuilt from the transform the pinch started
    /// from, never chained onto the previous sample, so rounding cannot
    /// accumulate over a long pinch.
    pub fn pinch_changed(
        &mut self,
        magnitude: f32,
        anchor: Anchor,
        bounds: ContentBounds,
    ) -> AffineTransform2D {
        self.content_bounds = bounds;
        let baseline = *self.pinch_baseline.get_or_insert(self.current);
        let magnitude = magnitude.max(MIN_PINCH_MAGNITUDE);
        let scale = (baseline.scale_x * magnitude)
            .min(self.config.max_zoom_scale)
            .max(MIN_SCALE_FLOOR);
        let factor = scale / baseline.scale_x;

        let anchor = anchor.resolve(bounds);
        self.current = baseline.then(&AffineTransform2D::anchored_scale(factor, anchor));

        tracing::trace!(
            "pinch x{:.3} at ({:.1},{:.1}) -> scale {:.3}",
            magnitude,
            anchor.x,
            anchor.y,
            self.current.scale_x
        );
        self.current
    }

    /// Scales the current transform by `magnitude` (relative to the previous
    /// sample) around `anchor`, capped at `max_zoom_scale`. Hosts that get
    /// cumulative magnitudes should use [`Self::pinch_changed`] instead.
    pub fn apply_pinch(
        &mut self,
        magnitude: f32,
        anchor: Anchor,
        bounds: ContentBounds,
    ) -> AffineTransform2D {
        self.content_bounds = bounds;
        let magnitude = magnitude.max(MIN_PINCH_MAGNITUDE);
        let previous = self.current.scale_x;
        let scale = (previous * magnitude)
            .min(self.config.max_zoom_scale)
            .max(MIN_SCALE_FLOOR);
        let factor = scale / previous;

        let anchor = anchor.resolve(bounds);
        self.current = self
            .current
            .then(&AffineTransform2D::anchored_scale(factor, anchor));

        tracing::trace!(
            "pinch x{:.3} at ({:.1},{:.1}) -> scale {:.3}",
            magnitude,
            anchor.x,
            anchor.y,
            self.current.scale_x
        );
        self.current
    }

    /// Moves the image by `translation` (cumulative since the pan began).
    /// Suppressed while at rest.
    ///
    /// The pan starts from the transform on screen when its first sample
    /// arrives, so a zoom still in flight from a pinch is kept.
    pub fn apply_pan(&mut self, translation: Vector2D) -> AffineTransform2D {
        if self.is_at_rest() {
            return self.current;
        }
        let baseline = *self.pan_baseline.get_or_insert(self.current);
        self.current = baseline.translated_by(
            translation.width / baseline.scale_x,
            translation.height / baseline.scale_y,
        );
        self.current
    }

    /// Toggles between identity and `double_tap_zoom_scale` centered on `location`.
    pub fn apply_double_tap(&mut self, location: Point) -> AffineTransform2D {
        let target = if self.current.is_identity() {
            AffineTransform2D::anchored_scale(self.config.double_tap_zoom_scale, location)
        } else {
            AffineTransform2D::IDENTITY
        };
        let target = clamp_translation(target, self.content_bounds);
        tracing::debug!(
            "double tap at ({:.1},{:.1}) -> scale {:.2}",
            location.x,
            location.y,
            target.scale_x
        );
        self.current = target;
        self.committed = target;
        self.end_tracking();
        target
    }

    /// Ends the gesture: snaps to identity below `min_zoom_scale`, otherwise
    /// keeps the content covering the viewport, then makes the result the new
    /// baseline.
    pub fn commit_and_clamp(&mut self) -> AffineTransform2D {
        let t = self.current;
        let clamped = if t.scale_x < self.config.min_zoom_scale
            || t.scale_y < self.config.min_zoom_scale
        {
            AffineTransform2D::IDENTITY
        } else {
            clamp_translation(t, self.content_bounds)
        };

        self.current = clamped;
        self.committed = clamped;
        self.end_tracking();
        tracing::trace!(
            "commit scale=({:.3},{:.3}) translate=({:.1},{:.1})",
            clamped.scale_x,
            clamped.scale_y,
            clamped.translate_x,
            clamped.translate_y
        );
        clamped
    }

    fn end_tracking(&mut self) {
        self.pinch_baseline = None;
        self.pan_baseline = None;
    }
}

/// Clamps translation into `[-size * (scale - 1), 0]` per axis.
/// Degenerate bounds allow no translation at all.
fn clamp_translation(mut t: AffineTransform2D, bounds: ContentBounds) -> AffineTransform2D {
    if bounds.is_degenerate() {
        t.translate_x = 0.0;
        t.translate_y = 0.0;
        return t;
    }
    let max_x = (bounds.width * (t.scale_x - 1.0)).max(0.0);
    let max_y = (bounds.height * (t.scale_y - 1.0)).max(0.0);
    t.translate_x = t.translate_x.clamp(-max_x, 0.0);
    t.translate_y = t.translate_y.clamp(-max_y, 0.0);
    t
}
