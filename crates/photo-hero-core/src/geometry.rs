//! 2D geometry shared by the gesture engine and the hero controller.
//!
//! Coordinates follow screen conventions: origin at the top-left, Y grows
//! downward. All values are in host layout units.

use serde::{Deserialize, Serialize};

/// A point in content-local or screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point expressed as a fraction of some size (0.0..=1.0 per axis).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Resolves the fraction against a concrete size.
    pub fn scaled_by(self, size: Size) -> Point {
        Point::new(self.x * size.width, self.y * size.height)
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Size of the element being transformed, as laid out by the host.
pub type ContentBounds = Size;

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// A displacement. Drag offsets and velocities use this shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub width: f32,
    pub height: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn length(&self) -> f32 {
        self.width.hypot(self.height)
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Linear interpolation of every component: `self + (other - self) * t`.
    pub fn lerp(&self, other: &Rect, t: f32) -> Rect {
        Rect {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }
}

/// Scale + translation transform applied to a single element.
///
/// Maps a local point `p` to `(scale_x * p.x + translate_x, scale_y * p.y + translate_y)`.
/// Rotation and shear never occur in this domain, so the matrix is kept
/// in this reduced form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform2D {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for AffineTransform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform2D {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn new(scale_x: f32, scale_y: f32, translate_x: f32, translate_y: f32) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Uniform scale that keeps `anchor` fixed:
    /// translate(anchor) ∘ scale(scale) ∘ translate(-anchor).
    pub fn anchored_scale(scale: f32, anchor: Point) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x: anchor.x * (1.0 - scale),
            translate_y: anchor.y * (1.0 - scale),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// True when both scale factors are exactly 1, regardless of translation.
    pub fn is_scale_identity(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0
    }

    /// Composes `self` followed by `next`.
    pub fn then(&self, next: &AffineTransform2D) -> AffineTransform2D {
        AffineTransform2D {
            scale_x: self.scale_x * next.scale_x,
            scale_y: self.scale_y * next.scale_y,
            translate_x: next.scale_x * self.translate_x + next.translate_x,
            translate_y: next.scale_y * self.translate_y + next.translate_y,
        }
    }

    /// Translates in the transform's local space, before scaling is applied.
    pub fn translated_by(&self, dx: f32, dy: f32) -> AffineTransform2D {
        AffineTransform2D {
            translate_x: self.translate_x + self.scale_x * dx,
            translate_y: self.translate_y + self.scale_y * dy,
            ..*self
        }
    }

    pub fn apply_to_point(&self, point: Point) -> Point {
        Point::new(
            self.scale_x * point.x + self.translate_x,
            self.scale_y * point.y + self.translate_y,
        )
    }
}
