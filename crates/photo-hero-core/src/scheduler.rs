//! Generation-tagged deferred effects.
//!
//! Every transition gets a fresh [`Generation`]. Effects scheduled by an
//! older generation are dropped instead of applied, so a timer started by a
//! superseded transition can never flip state for the current one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Monotonically increasing transition id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// Returns the following generation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone)]
struct Pending<E> {
    generation: Generation,
    due: Duration,
    effect: E,
}

/// Queue of effects that become due at a clock time.
#[derive(Debug, Clone)]
pub struct DeferredQueue<E> {
    pending: Vec<Pending<E>>,
}

impl<E> Default for DeferredQueue<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E: std::fmt::Debug> DeferredQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `effect` to become due at clock time `due`.
    pub fn schedule(&mut self, generation: Generation, due: Duration, effect: E) {
        self.pending.push(Pending {
            generation,
            due,
            effect,
        });
    }

    /// Drops every effect not belonging to `current`. Returns how many were dropped.
    pub fn cancel_stale(&mut self, current: Generation) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| {
            let keep = p.generation == current;
            if !keep {
                tracing::trace!(
                    "dropping stale effect {:?} from generation {}",
                    p.effect,
                    p.generation.0
                );
            }
            keep
        });
        before - self.pending.len()
    }

    /// Removes and returns the effects of `current` that are due at `now`,
    /// in scheduling order. Due effects from other generations are discarded.
    pub fn take_due(&mut self, now: Duration, current: Generation) -> Vec<E> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for pending in self.pending.drain(..) {
            if pending.due > now {
                remaining.push(pending);
            } else if pending.generation == current {
                due.push(pending.effect);
            } else {
                tracing::trace!(
                    "discarding stale effect {:?} from generation {}",
                    pending.effect,
                    pending.generation.0
                );
            }
        }
        self.pending = remaining;
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
