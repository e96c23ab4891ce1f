//! Routes detail-page gesture samples between zoom-pan and drag-to-dismiss.
//!
//! A pan belongs to the zoomed image while it is scaled, and to the dismiss
//! drag while it is at rest. The route is picked on the first pan sample and
//! held until the pan ends, so a drag never changes owner midway.

use serde::{Deserialize, Serialize};

use crate::geometry::{AffineTransform2D, ContentBounds, Vector2D};
use crate::gesture::{GestureSample, TransformGestureEngine};
use crate::hero::{Decision, DragDismissState, HeroHandoffController, TransitionState};

/// Current owner of the pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanRoute {
    #[default]
    Idle,
    /// Pan moves the zoomed image.
    ZoomPan,
    /// At-rest pan that has not yet travelled `drag_min_distance`.
    PendingDismiss,
    /// Pan drives the dismiss drag.
    DismissDrag,
}

/// What a routed sample produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteOutcome {
    Transform(AffineTransform2D),
    Drag(DragDismissState),
    Decision(Decision),
    Ignored,
}

/// Per-gesture routing between a [`TransformGestureEngine`] and a
/// [`HeroHandoffController`]. Both are passed in explicitly on each call.
#[derive(Debug, Clone, Default)]
pub struct DetailGestureRouter {
    route: PanRoute,
}

impl DetailGestureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> PanRoute {
        self.route
    }

    pub fn is_dragging(&self) -> bool {
        self.route == PanRoute::DismissDrag
    }

    /// Horizontal paging between detail pages is allowed only while the image
    /// is at rest and no dismiss drag is running.
    pub fn paging_enabled(&self, engine: &TransformGestureEngine) -> bool {
        !self.is_dragging() && engine.is_at_rest()
    }

    pub fn handle(
        &mut self,
        sample: GestureSample,
        bounds: ContentBounds,
        engine: &mut TransformGestureEngine,
        controller: &mut HeroHandoffController,
    ) -> RouteOutcome {
        match sample {
            GestureSample::PanChanged { translation } => {
                self.pan_changed(translation, engine, controller)
            }
            GestureSample::PanEnded {
                translation,
                velocity,
            } => self.pan_ended(translation, velocity, engine, controller),
            GestureSample::PinchChanged { .. }
            | GestureSample::PinchEnded
            | GestureSample::DoubleTap { .. } => {
                if self.is_dragging() {
                    return RouteOutcome::Ignored;
                }
                RouteOutcome::Transform(engine.handle(sample, bounds))
            }
        }
    }

    fn pan_changed(
        &mut self,
        translation: Vector2D,
        engine: &mut TransformGestureEngine,
        controller: &mut HeroHandoffController,
    ) -> RouteOutcome {
        if self.route == PanRoute::Idle {
            self.route = if engine.is_at_rest() {
                PanRoute::PendingDismiss
            } else {
                PanRoute::ZoomPan
            };
            tracing::trace!("pan routed to {:?}", self.route);
        }

        if self.route == PanRoute::PendingDismiss
            && translation.length() >= controller.config().drag_min_distance
            && controller.state() == TransitionState::Expanded
        {
            self.route = PanRoute::DismissDrag;
        }

        match self.route {
            PanRoute::ZoomPan => RouteOutcome::Transform(engine.apply_pan(translation)),
            PanRoute::DismissDrag => {
                RouteOutcome::Drag(controller.update_drag_dismiss(translation, Vector2D::ZERO))
            }
            PanRoute::Idle | PanRoute::PendingDismiss => RouteOutcome::Ignored,
        }
    }

    fn pan_ended(
        &mut self,
        translation: Vector2D,
        velocity: Vector2D,
        engine: &mut TransformGestureEngine,
        controller: &mut HeroHandoffController,
    ) -> RouteOutcome {
        let route = std::mem::take(&mut self.route);
        match route {
            PanRoute::ZoomPan => RouteOutcome::Transform(engine.commit_and_clamp()),
            PanRoute::DismissDrag => {
                RouteOutcome::Decision(controller.end_drag_dismiss(translation, velocity))
            }
            PanRoute::Idle | PanRoute::PendingDismiss => RouteOutcome::Ignored,
        }
    }
}
