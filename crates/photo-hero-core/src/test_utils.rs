//! Test utilities for driving the controller the way a host frame loop would.
//!
//! Provides `TestHost`, a wrapper around `HeroHandoffController` that ticks
//! the animation clock in fixed frames and collects every emitted event.

use std::time::Duration;

use crate::config::HandoffConfig;
use crate::hero::{HandoffEvent, HeroHandoffController};

/// Fixed frame step. Divides every default duration exactly.
pub(crate) const FRAME: Duration = Duration::from_millis(50);

pub(crate) const ITEMS: [&str; 3] = ["p1", "p2", "p3"];

pub(crate) struct TestHost {
    pub controller: HeroHandoffController,
    pub events: Vec<HandoffEvent>,
}

impl TestHost {
    /// Create a host with default tunables and the `ITEMS` collection.
    pub fn new() -> Self {
        Self::with_config(HandoffConfig::default())
    }

    pub fn with_config(config: HandoffConfig) -> Self {
        Self {
            controller: HeroHandoffController::with_items(config, ITEMS),
            events: Vec::new(),
        }
    }

    /// Create a host with `item_id` fully expanded and interactive.
    pub fn expanded(item_id: &str) -> Self {
        let mut host = Self::new();
        assert!(host.controller.begin_expand(item_id));
        host.tick_n(6);
        assert!(host.controller.is_interactive());
        host
    }

    /// Advance a single frame and return the events it produced.
    pub fn tick(&mut self) -> Vec<HandoffEvent> {
        let events = self.controller.advance(FRAME);
        self.events.extend(events.iter().cloned());
        events
    }

    /// Advance `n` frames.
    pub fn tick_n(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }
}
