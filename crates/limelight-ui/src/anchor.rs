//! Resolve-later geometry: anchors, coordinate space snapshots, resolved bounds.
//!
//! Trackers never publish concrete rectangles. They publish an opaque
//! [`BoundsAnchor`] that only becomes a rectangle once resolved against the
//! compositor's [`SpaceSnapshot`] for the current pass. Resolution is a
//! translation from root coordinates into the compositor's local space.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use limelight_graphics::Rect;

/// Opaque, coordinate-space-independent reference to a tracked view's
/// published bounds. Created by the collection pass for each pass; not
/// directly readable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsAnchor {
    bounds_in_root: Rect,
}

impl BoundsAnchor {
    pub(crate) fn new(bounds_in_root: Rect) -> Self {
        Self { bounds_in_root }
    }
}

/// The compositor's frame of reference for a single layout pass.
///
/// Layout may change between passes, so a snapshot must never be cached
/// across them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceSnapshot {
    frame_in_root: Rect,
}

impl SpaceSnapshot {
    pub fn new(frame_in_root: Rect) -> Self {
        Self { frame_in_root }
    }

    pub fn frame_in_root(&self) -> Rect {
        self.frame_in_root
    }

    /// Resolves an anchor into a rectangle in this snapshot's local space.
    pub fn resolve(&self, anchor: &BoundsAnchor) -> Rect {
        anchor
            .bounds_in_root
            .translate(-self.frame_in_root.x, -self.frame_in_root.y)
    }
}

/// Read-only identifier → rectangle mapping handed to shape builders after
/// resolution. Rectangles are in the compositor's local coordinate space.
#[derive(Clone, Debug)]
pub struct ResolvedBounds<Id> {
    entries: FxHashMap<Id, Rect>,
}

impl<Id: Eq + Hash> ResolvedBounds<Id> {
    pub(crate) fn from_entries(entries: FxHashMap<Id, Rect>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &Id) -> Option<Rect> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &Rect)> {
        self.entries.iter()
    }
}
