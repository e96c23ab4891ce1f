//! Source and destination rectangles reported by the host's layout pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Which end of the hero transition a rectangle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorRole {
    /// The grid cell the item expands from.
    Source,
    /// The detail page the item expands into.
    Destination,
}

/// An item with both ends of its transition resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroItem {
    pub id: String,
    pub source_rect: Rect,
    pub dest_rect: Rect,
}

/// Latest known anchor rectangles, keyed by item id.
///
/// Rects may change every frame as layout reflows; the host re-reports
/// them and the controller only reads.
#[derive(Debug, Clone, Default)]
pub struct AnchorRegistry {
    sources: HashMap<String, Rect>,
    destinations: HashMap<String, Rect>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, id: impl Into<String>, role: AnchorRole, rect: Rect) {
        let map = match role {
            AnchorRole::Source => &mut self.sources,
            AnchorRole::Destination => &mut self.destinations,
        };
        map.insert(id.into(), rect);
    }

    pub fn get(&self, id: &str, role: AnchorRole) -> Option<Rect> {
        match role {
            AnchorRole::Source => self.sources.get(id).copied(),
            AnchorRole::Destination => self.destinations.get(id).copied(),
        }
    }

    /// Forgets both anchors of an item, e.g. when its cell scrolls out of view.
    pub fn remove(&mut self, id: &str) {
        self.sources.remove(id);
        self.destinations.remove(id);
    }

    pub fn clear(&mut self) {
        self.sources.clear();
        self.destinations.clear();
    }

    /// Resolves an item only when both of its anchors are known.
    pub fn hero_item(&self, id: &str) -> Option<HeroItem> {
        Some(HeroItem {
            id: id.to_string(),
            source_rect: self.sources.get(id).copied()?,
            dest_rect: self.destinations.get(id).copied()?,
        })
    }
}
