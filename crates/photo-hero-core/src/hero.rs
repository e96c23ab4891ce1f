//! Hero transition between a grid cell and the full-screen detail page.
//!
//! State machine:
//!
//! ```text
//! Collapsed --begin_expand--> Expanding --ramp done--> Expanded
//!     ^                                                   |
//!     +------ ramp done <-- Collapsing <--begin_collapse--+
//! ```
//!
//! Each transition has two stages. The progress ramp runs first; a deferred
//! effect (enable detail input on expand, clear the selection on collapse)
//! follows on a later tick. Deferred effects are tagged with the generation
//! that scheduled them and are dropped once a newer transition starts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::anchors::AnchorRegistry;
use crate::config::HandoffConfig;
use crate::easing::EasingType;
use crate::geometry::{Rect, Vector2D};
use crate::scheduler::{DeferredQueue, Generation};

/// Transition phase of the selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransitionState {
    #[default]
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

impl TransitionState {
    /// True while the hero image is moving between the grid and the viewer.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Expanding | Self::Collapsing)
    }
}

/// Drag-to-dismiss offset and the background fade it drives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragDismissState {
    pub offset: Vector2D,
    /// `|offset.height| / drag_progress_divisor`, clamped to [0, 1].
    pub progress: f32,
}

/// Outcome of releasing a dismiss drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Dismiss,
    Snap,
}

/// Notifications produced by the animation clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandoffEvent {
    ExpandCompleted { item_id: String },
    /// The detail layer may now receive input.
    InteractionEnabled,
    CollapseCompleted,
    /// Selection and scroll bookkeeping were reset; the host may unmount the detail view.
    SelectionCleared,
    SnapCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredEffect {
    EnableInteraction,
    ResetSelection,
}

#[derive(Debug, Clone)]
struct Ramp {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingType,
}

impl Ramp {
    fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.at(self.elapsed, self.duration)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone)]
struct SnapBack {
    from: DragDismissState,
    elapsed: Duration,
    duration: Duration,
    easing: EasingType,
}

/// Drives the expand/collapse progress, the drag-to-dismiss gesture and the
/// selection bookkeeping for at most one item at a time.
#[derive(Debug, Clone)]
pub struct HeroHandoffController {
    config: HandoffConfig,
    items: Vec<String>,
    state: TransitionState,
    progress: f32,
    ramp: Option<Ramp>,
    snap: Option<SnapBack>,
    drag: DragDismissState,
    interactive: bool,
    selected: Option<String>,
    detail_scroll_position: Option<String>,
    generation: Generation,
    deferred: DeferredQueue<DeferredEffect>,
    now: Duration,
}

impl HeroHandoffController {
    pub fn new(config: HandoffConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            state: TransitionState::Collapsed,
            progress: 0.0,
            ramp: None,
            snap: None,
            drag: DragDismissState::default(),
            interactive: false,
            selected: None,
            detail_scroll_position: None,
            generation: Generation::default(),
            deferred: DeferredQueue::new(),
            now: Duration::ZERO,
        }
    }

    /// Creates a controller over an initial item collection.
    pub fn with_items<I, S>(config: HandoffConfig, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut controller = Self::new(config);
        controller.set_items(items);
        controller
    }

    pub fn config(&self) -> &HandoffConfig {
        &self.config
    }

    /// Replaces the item collection. The current selection is left alone.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item == id)
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Eased transition progress: 0 when collapsed, 1 when expanded.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Opacity of the backdrop drawn over the grid.
    pub fn overlay_opacity(&self) -> f32 {
        self.progress
    }

    /// Whether the detail layer accepts input.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The grid only accepts taps while nothing is selected.
    pub fn grid_hit_testing_enabled(&self) -> bool {
        self.selected.is_none()
    }

    pub fn drag(&self) -> DragDismissState {
        self.drag
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn detail_scroll_position(&self) -> Option<&str> {
        self.detail_scroll_position.as_deref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of deferred effects still waiting to fire.
    pub fn pending_effects(&self) -> usize {
        self.deferred.len()
    }

    fn start_generation(&mut self) {
        self.generation = self.generation.next();
        let dropped = self.deferred.cancel_stale(self.generation);
        if dropped > 0 {
            tracing::debug!(
                "generation {} superseded {} pending effect(s)",
                self.generation.0,
                dropped
            );
        }
    }

    /// Starts expanding `item_id` into the detail view.
    ///
    /// Accepted from `Collapsed`, or from `Collapsing` of the same item (the
    /// collapse is reversed from its current progress). Unknown ids and
    /// requests while another item is in flight are ignored.
    pub fn begin_expand(&mut self, item_id: &str) -> bool {
        if !self.contains(item_id) {
            tracing::debug!("begin_expand: unknown item '{item_id}', ignoring");
            return false;
        }
        match self.state {
            TransitionState::Collapsed => {}
            TransitionState::Collapsing if self.selected.as_deref() == Some(item_id) => {}
            state => {
                tracing::debug!("begin_expand: '{item_id}' ignored in state {state:?}");
                return false;
            }
        }

        self.start_generation();
        self.selected = Some(item_id.to_string());
        self.detail_scroll_position = Some(item_id.to_string());
        self.drag = DragDismissState::default();
        self.snap = None;
        self.interactive = false;
        self.state = TransitionState::Expanding;
        self.ramp = Some(Ramp {
            from: self.progress,
            to: 1.0,
            elapsed: Duration::ZERO,
            duration: self.config.transition_duration(),
            easing: self.config.transition_easing,
        });
        self.deferred.schedule(
            self.generation,
            self.now + self.config.interaction_delay(),
            DeferredEffect::EnableInteraction,
        );

        tracing::debug!(
            "expanding '{item_id}' (generation {}) from progress {:.3}",
            self.generation.0,
            self.progress
        );
        true
    }

    /// Starts collapsing the detail view back into the grid.
    ///
    /// Input on the detail layer is disabled and the drag offset cleared
    /// immediately. Accepted from `Expanded` or `Expanding`.
    pub fn begin_collapse(&mut self) -> bool {
        if !matches!(
            self.state,
            TransitionState::Expanded | TransitionState::Expanding
        ) {
            tracing::debug!("begin_collapse ignored in state {:?}", self.state);
            return false;
        }

        self.start_generation();
        self.interactive = false;
        self.drag.offset = Vector2D::ZERO;
        self.snap = None;
        self.state = TransitionState::Collapsing;
        self.ramp = Some(Ramp {
            from: self.progress,
            to: 0.0,
            elapsed: Duration::ZERO,
            duration: self.config.transition_duration(),
            easing: self.config.transition_easing,
        });
        self.deferred.schedule(
            self.generation,
            self.now + self.config.collapse_delay(),
            DeferredEffect::ResetSelection,
        );

        tracing::debug!(
            "collapsing {:?} (generation {}) from progress {:.3}",
            self.selected,
            self.generation.0,
            self.progress
        );
        true
    }

    /// Advances the animation clock by `dt`.
    ///
    /// Deferred effects only run on a tick after the ramp has completed, so
    /// input is never enabled in the same frame the geometry lands.
    pub fn advance(&mut self, dt: Duration) -> Vec<HandoffEvent> {
        let mut events = Vec::new();
        self.now += dt;
        let settled = self.ramp.is_none();

        if let Some(mut ramp) = self.ramp.take() {
            ramp.elapsed += dt;
            if ramp.is_finished() {
                self.progress = ramp.to;
                self.finish_ramp(&mut events);
            } else {
                self.progress = ramp.value();
                self.ramp = Some(ramp);
            }
        }

        self.advance_snap(dt, &mut events);

        if settled {
            for effect in self.deferred.take_due(self.now, self.generation) {
                self.apply_effect(effect, &mut events);
            }
        }
        events
    }

    fn finish_ramp(&mut self, events: &mut Vec<HandoffEvent>) {
        match self.state {
            TransitionState::Expanding => {
                self.state = TransitionState::Expanded;
                let item_id = self.selected.clone().unwrap_or_default();
                tracing::debug!("expand of '{item_id}' completed");
                events.push(HandoffEvent::ExpandCompleted { item_id });
            }
            TransitionState::Collapsing => {
                self.state = TransitionState::Collapsed;
                tracing::debug!("collapse completed");
                events.push(HandoffEvent::CollapseCompleted);
            }
            TransitionState::Collapsed | TransitionState::Expanded => {}
        }
    }

    fn apply_effect(&mut self, effect: DeferredEffect, events: &mut Vec<HandoffEvent>) {
        match effect {
            DeferredEffect::EnableInteraction => {
                if self.state == TransitionState::Expanded {
                    self.interactive = true;
                    events.push(HandoffEvent::InteractionEnabled);
                }
            }
            DeferredEffect::ResetSelection => {
                if self.state == TransitionState::Collapsed {
                    self.selected = None;
                    self.detail_scroll_position = None;
                    self.drag = DragDismissState::default();
                    self.snap = None;
                    events.push(HandoffEvent::SelectionCleared);
                }
            }
        }
    }

    fn advance_snap(&mut self, dt: Duration, events: &mut Vec<HandoffEvent>) {
        let Some(mut snap) = self.snap.take() else {
            return;
        };
        snap.elapsed += dt;
        if snap.elapsed >= snap.duration {
            self.drag = DragDismissState::default();
            events.push(HandoffEvent::SnapCompleted);
            return;
        }
        let remaining = 1.0 - snap.easing.at(snap.elapsed, snap.duration);
        self.drag = DragDismissState {
            offset: snap.from.offset.scaled(remaining),
            progress: snap.from.progress * remaining,
        };
        self.snap = Some(snap);
    }

    fn drag_progress(&self, offset: Vector2D) -> f32 {
        (offset.height.abs() / self.config.drag_progress_divisor).clamp(0.0, 1.0)
    }

    /// Tracks an in-progress dismiss drag. Only honored while `Expanded`.
    pub fn update_drag_dismiss(&mut self, offset: Vector2D, _velocity: Vector2D) -> DragDismissState {
        if self.state != TransitionState::Expanded {
            tracing::trace!("drag ignored in state {:?}", self.state);
            return self.drag;
        }
        self.snap = None;
        self.drag = DragDismissState {
            offset,
            progress: self.drag_progress(offset),
        };
        self.drag
    }

    /// Releases a dismiss drag.
    ///
    /// The release point is projected by `velocity / flick_velocity_divisor`;
    /// beyond `dismiss_distance` the view collapses, otherwise the offset
    /// animates back to zero.
    pub fn end_drag_dismiss(&mut self, offset: Vector2D, velocity: Vector2D) -> Decision {
        if self.state != TransitionState::Expanded {
            tracing::debug!("drag release ignored in state {:?}", self.state);
            return Decision::Snap;
        }

        let projected = offset.height + velocity.height / self.config.flick_velocity_divisor;
        self.drag = DragDismissState {
            offset,
            progress: self.drag_progress(offset),
        };

        if projected.abs() > self.config.dismiss_distance {
            tracing::debug!("drag released at {projected:.1}, dismissing");
            self.begin_collapse();
            Decision::Dismiss
        } else {
            tracing::trace!("drag released at {projected:.1}, snapping back");
            self.snap = Some(SnapBack {
                from: self.drag,
                elapsed: Duration::ZERO,
                duration: self.config.snap_back_duration(),
                easing: self.config.snap_easing,
            });
            Decision::Snap
        }
    }

    /// `source + (dest - source) * progress` for each rect component.
    pub fn current_interpolated_rect(&self, source: &Rect, dest: &Rect) -> Rect {
        source.lerp(dest, self.progress)
    }

    /// Frame of the floating hero image for the selected item, if both of its
    /// anchors are known.
    pub fn hero_frame(&self, anchors: &AnchorRegistry) -> Option<Rect> {
        let item = anchors.hero_item(self.selected.as_deref()?)?;
        if self.state.is_in_flight() {
            return Some(self.current_interpolated_rect(&item.source_rect, &item.dest_rect));
        }
        Some(match self.state {
            TransitionState::Expanded => item.dest_rect,
            _ => item.source_rect,
        })
    }

    /// Records the detail pager's scroll position.
    ///
    /// While an item is selected, paging to another known item re-targets the
    /// selection so collapsing returns to the right grid cell. Ids missing from
    /// the collection leave the selection unchanged.
    pub fn set_detail_scroll_position(&mut self, item_id: Option<&str>) {
        self.detail_scroll_position = item_id.map(str::to_string);
        let Some(item_id) = item_id else {
            return;
        };
        if self.selected.is_none() {
            return;
        }
        if !self.contains(item_id) {
            tracing::debug!("scroll position '{item_id}' not in collection, keeping selection");
            return;
        }
        if self.selected.as_deref() != Some(item_id) {
            tracing::debug!("selection moved to '{item_id}'");
            self.selected = Some(item_id.to_string());
        }
    }
}

impl Default for HeroHandoffController {
    fn default() -> Self {
        Self::new(HandoffConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::AnchorRole;
    use crate::test_utils::TestHost;

    #[test]
    fn test_controller_creation() {
        let host = TestHost::new();
        assert_eq!(host.controller.state(), TransitionState::Collapsed);
        assert_eq!(host.controller.progress(), 0.0);
        assert!(!host.controller.is_interactive());
        assert!(host.controller.grid_hit_testing_enabled());
    }

    #[test]
    fn test_interaction_enabled_one_tick_after_ramp() {
        let mut host = TestHost::new();
        assert!(host.controller.begin_expand("p1"));
        assert_eq!(host.controller.state(), TransitionState::Expanding);
        assert!(!host.controller.grid_hit_testing_enabled());

        // 5 x 50ms == the 250ms ramp
        host.tick_n(4);
        assert_eq!(host.controller.state(), TransitionState::Expanding);

        let events = host.tick();
        assert_eq!(host.controller.state(), TransitionState::Expanded);
        assert_eq!(host.controller.progress(), 1.0);
        assert!(!host.controller.is_interactive());
        assert_eq!(
            events,
            vec![HandoffEvent::ExpandCompleted {
                item_id: "p1".to_string()
            }]
        );

        let events = host.tick();
        assert!(host.controller.is_interactive());
        assert_eq!(events, vec![HandoffEvent::InteractionEnabled]);
    }

    #[test]
    fn test_interpolated_rect_halfway() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p1");
        host.controller.advance(Duration::from_millis(125));
        assert!((host.controller.progress() - 0.5).abs() < 1e-6);

        let rect = host.controller.current_interpolated_rect(
            &Rect::new(0.0, 0.0, 50.0, 50.0),
            &Rect::new(0.0, 0.0, 400.0, 400.0),
        );
        assert!((rect.width - 225.0).abs() < 1e-3);
        assert!((rect.height - 225.0).abs() < 1e-3);
        assert_eq!(rect.x, 0.0);
    }

    #[test]
    fn test_expand_then_collapse_returns_to_collapsed() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p2");
        host.tick_n(10);
        assert!(host.controller.is_interactive());

        for i in 0..20 {
            let offset = Vector2D::new(0.0, i as f32 * 3.0);
            host.controller.update_drag_dismiss(offset, Vector2D::ZERO);
        }
        assert!(host.controller.drag().progress > 0.0);

        assert!(host.controller.begin_collapse());
        assert!(!host.controller.is_interactive());
        assert_eq!(host.controller.drag().offset, Vector2D::ZERO);

        host.tick_n(10);
        assert_eq!(host.controller.state(), TransitionState::Collapsed);
        assert_eq!(host.controller.progress(), 0.0);
        assert_eq!(host.controller.selected_item(), None);
        assert_eq!(host.controller.detail_scroll_position(), None);
        assert_eq!(host.controller.drag(), DragDismissState::default());
        assert!(host.events.contains(&HandoffEvent::SelectionCleared));
        assert_eq!(host.controller.pending_effects(), 0);
    }

    #[test]
    fn test_collapse_immediately_after_expand() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p1");
        assert!(host.controller.begin_collapse());
        host.tick_n(10);
        assert_eq!(host.controller.state(), TransitionState::Collapsed);
        assert!(!host.events.contains(&HandoffEvent::InteractionEnabled));
        assert!(host.events.contains(&HandoffEvent::SelectionCleared));
    }

    #[test]
    fn test_stale_effects_dropped_on_rapid_toggle() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p1");
        host.tick_n(2);
        host.controller.begin_collapse();
        host.tick_n(2);
        assert_eq!(host.controller.state(), TransitionState::Collapsing);

        // Reverse the collapse before its reset fires.
        assert!(host.controller.begin_expand("p1"));
        assert_eq!(host.controller.generation(), Generation(3));
        host.tick_n(10);

        assert_eq!(host.controller.state(), TransitionState::Expanded);
        assert!(host.controller.is_interactive());
        assert_eq!(host.controller.selected_item(), Some("p1"));
        assert!(!host.events.contains(&HandoffEvent::SelectionCleared));
        let enabled = host
            .events
            .iter()
            .filter(|e| **e == HandoffEvent::InteractionEnabled)
            .count();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_ramp_is_never_skipped() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p1");
        let events = host.controller.advance(Duration::from_secs(10));
        assert_eq!(host.controller.state(), TransitionState::Expanded);
        // Even with a huge tick the second stage waits for the next frame.
        assert!(!events.contains(&HandoffEvent::InteractionEnabled));
        assert!(!host.controller.is_interactive());
        host.tick();
        assert!(host.controller.is_interactive());
    }

    #[test]
    fn test_unknown_item_is_noop() {
        let mut host = TestHost::new();
        assert!(!host.controller.begin_expand("ghost"));
        assert_eq!(host.controller.state(), TransitionState::Collapsed);
        assert_eq!(host.controller.generation(), Generation(0));
    }

    #[test]
    fn test_only_one_item_in_flight() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p1");
        assert!(!host.controller.begin_expand("p2"));
        host.tick_n(6);
        assert!(!host.controller.begin_expand("p2"));
        assert_eq!(host.controller.selected_item(), Some("p1"));
    }

    #[test]
    fn test_collapse_ignored_when_collapsed() {
        let mut host = TestHost::new();
        assert!(!host.controller.begin_collapse());
        assert_eq!(host.controller.pending_effects(), 0);
    }

    #[test]
    fn test_drag_progress_clamped() {
        let mut host = TestHost::expanded("p1");
        let drag = host
            .controller
            .update_drag_dismiss(Vector2D::new(10.0, 250.0), Vector2D::ZERO);
        assert!((drag.progress - 0.5).abs() < 1e-6);
        let drag = host
            .controller
            .update_drag_dismiss(Vector2D::new(0.0, -900.0), Vector2D::ZERO);
        assert_eq!(drag.progress, 1.0);
        assert_eq!(drag.offset.height, -900.0);
    }

    #[test]
    fn test_drag_ignored_unless_expanded() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p1");
        let drag = host
            .controller
            .update_drag_dismiss(Vector2D::new(0.0, 200.0), Vector2D::ZERO);
        assert_eq!(drag, DragDismissState::default());
        assert_eq!(
            host.controller
                .end_drag_dismiss(Vector2D::new(0.0, 400.0), Vector2D::ZERO),
            Decision::Snap
        );
        assert_eq!(host.controller.state(), TransitionState::Expanding);
    }

    #[test]
    fn test_end_drag_beyond_threshold_dismisses() {
        let mut host = TestHost::expanded("p1");
        let decision = host
            .controller
            .end_drag_dismiss(Vector2D::new(0.0, 150.0), Vector2D::ZERO);
        assert_eq!(decision, Decision::Dismiss);
        assert_eq!(host.controller.state(), TransitionState::Collapsing);
        assert!(!host.controller.is_interactive());
        assert_eq!(host.controller.drag().offset, Vector2D::ZERO);
    }

    #[test]
    fn test_end_drag_short_snaps_back() {
        let mut host = TestHost::expanded("p1");
        let decision = host
            .controller
            .end_drag_dismiss(Vector2D::new(0.0, 50.0), Vector2D::ZERO);
        assert_eq!(decision, Decision::Snap);
        assert_eq!(host.controller.state(), TransitionState::Expanded);
        assert_eq!(host.controller.drag().offset.height, 50.0);

        host.tick();
        let mid = host.controller.drag();
        assert!(mid.offset.height > 0.0 && mid.offset.height < 50.0);
        assert!(mid.progress < 0.1);

        // 200ms snap == 4 frames
        host.tick_n(3);
        assert_eq!(host.controller.drag(), DragDismissState::default());
        assert!(host.events.contains(&HandoffEvent::SnapCompleted));
    }

    #[test]
    fn test_flick_velocity_projects_release() {
        let mut host = TestHost::expanded("p1");
        let decision = host
            .controller
            .end_drag_dismiss(Vector2D::new(0.0, 60.0), Vector2D::new(0.0, 300.0));
        assert_eq!(decision, Decision::Dismiss);

        let mut host = TestHost::expanded("p1");
        let decision = host
            .controller
            .end_drag_dismiss(Vector2D::new(0.0, 60.0), Vector2D::new(0.0, -300.0));
        assert_eq!(decision, Decision::Snap);
    }

    #[test]
    fn test_new_drag_cancels_snap_back() {
        let mut host = TestHost::expanded("p1");
        host.controller
            .end_drag_dismiss(Vector2D::new(0.0, 80.0), Vector2D::ZERO);
        host.tick();
        host.controller
            .update_drag_dismiss(Vector2D::new(0.0, 20.0), Vector2D::ZERO);
        host.tick_n(5);
        assert_eq!(host.controller.drag().offset.height, 20.0);
        assert!(!host.events.contains(&HandoffEvent::SnapCompleted));
    }

    #[test]
    fn test_detail_paging_retargets_selection() {
        let mut host = TestHost::expanded("p1");
        host.controller.set_detail_scroll_position(Some("p3"));
        assert_eq!(host.controller.selected_item(), Some("p3"));
        assert_eq!(host.controller.detail_scroll_position(), Some("p3"));

        host.controller.set_detail_scroll_position(Some("not-loaded-yet"));
        assert_eq!(host.controller.selected_item(), Some("p3"));
    }

    #[test]
    fn test_scroll_position_without_selection_is_noop() {
        let mut host = TestHost::new();
        host.controller.set_detail_scroll_position(Some("p2"));
        assert_eq!(host.controller.selected_item(), None);
        assert!(host.controller.grid_hit_testing_enabled());
    }

    #[test]
    fn test_hero_frame_follows_state() {
        let mut anchors = AnchorRegistry::new();
        anchors.report("p1", AnchorRole::Source, Rect::new(0.0, 0.0, 50.0, 50.0));
        anchors.report("p1", AnchorRole::Destination, Rect::new(0.0, 0.0, 400.0, 400.0));

        let mut host = TestHost::new();
        assert_eq!(host.controller.hero_frame(&anchors), None);

        host.controller.begin_expand("p1");
        assert_eq!(
            host.controller.hero_frame(&anchors),
            Some(Rect::new(0.0, 0.0, 50.0, 50.0))
        );
        host.tick_n(6);
        assert_eq!(
            host.controller.hero_frame(&anchors),
            Some(Rect::new(0.0, 0.0, 400.0, 400.0))
        );

        anchors.remove("p1");
        assert_eq!(host.controller.hero_frame(&anchors), None);
    }

    #[test]
    fn test_hero_frame_interpolates_only_in_flight() {
        let mut anchors = AnchorRegistry::new();
        anchors.report("p1", AnchorRole::Source, Rect::new(0.0, 0.0, 50.0, 50.0));
        anchors.report("p1", AnchorRole::Destination, Rect::new(0.0, 0.0, 400.0, 400.0));
        let width = |host: &TestHost| host.controller.hero_frame(&anchors).map(|r| r.width);

        let mut host = TestHost::new();
        assert!(!host.controller.state().is_in_flight());
        host.controller.begin_expand("p1");
        host.tick();
        assert!(host.controller.state().is_in_flight());
        // 50ms into a 250ms ease-in-out ramp: progress 0.08.
        assert!((width(&host).unwrap() - 78.0).abs() < 1e-3);

        host.tick_n(5);
        assert!(!host.controller.state().is_in_flight());
        assert_eq!(width(&host), Some(400.0));

        host.controller.begin_collapse();
        host.tick_n(2);
        assert!(host.controller.state().is_in_flight());
        let w = width(&host).unwrap();
        assert!(w > 50.0 && w < 400.0);
    }

    #[test]
    fn test_overlay_opacity_tracks_progress() {
        let mut host = TestHost::new();
        host.controller.begin_expand("p1");
        host.tick();
        assert!(host.controller.overlay_opacity() > 0.0);
        assert!(host.controller.overlay_opacity() < 1.0);
        assert_eq!(host.controller.overlay_opacity(), host.controller.progress());
    }
}
