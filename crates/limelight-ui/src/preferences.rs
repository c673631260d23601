//! Bounds registry: merge semantics plus the explicit upward propagation pass.
//!
//! Each tracked view contributes a single-entry mapping. Contributions are
//! merged bottom-up in traversal order into one [`BoundsPreferences`] value,
//! which the compositor later resolves against its coordinate space snapshot.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::anchor::{BoundsAnchor, ResolvedBounds, SpaceSnapshot};
use crate::tree::LayoutBox;
use limelight_graphics::Point;

/// Aggregated identifier → anchor mapping for one subtree and one pass.
#[derive(Clone, Debug)]
pub struct BoundsPreferences<Id> {
    entries: FxHashMap<Id, BoundsAnchor>,
}

impl<Id: Eq + Hash> BoundsPreferences<Id> {
    /// The default value of the aggregation: an empty mapping.
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// A single tracker's contribution.
    pub fn single(id: Id, anchor: BoundsAnchor) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(id, anchor);
        Self { entries }
    }

    /// Merges `next` into the accumulated value.
    ///
    /// For identifiers present in both, the entry from `next` replaces the
    /// accumulated one (last-write-wins, a policy choice: the later
    /// publication in traversal order wins). Total over all mapping pairs;
    /// duplicates are not an error.
    pub fn merge(&mut self, next: BoundsPreferences<Id>) {
        for (id, anchor) in next.entries {
            if self.entries.insert(id, anchor).is_some() {
                log::trace!("duplicate tracked identifier overwritten during merge");
            }
        }
    }

    /// Resolves every anchor against `space`, yielding the read-only mapping
    /// handed to shape builders.
    pub fn resolve(&self, space: &SpaceSnapshot) -> ResolvedBounds<Id>
    where
        Id: Clone,
    {
        let entries = self
            .entries
            .iter()
            .map(|(id, anchor)| (id.clone(), space.resolve(anchor)))
            .collect();
        ResolvedBounds::from_entries(entries)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &Id) -> Option<&BoundsAnchor> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &BoundsAnchor)> {
        self.entries.iter()
    }
}

impl<Id: Eq + Hash> Default for BoundsPreferences<Id> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The explicit preference propagation pass.
///
/// Walks `subtree` depth-first in pre-order (node, then children in
/// declaration order), threading one accumulator and merging each tracker's
/// single-entry contribution at its padded absolute bounds. `origin` is the
/// root-space position of `subtree`'s parent.
pub fn collect_bounds_preferences<Id: Clone + Eq + Hash>(
    subtree: &LayoutBox<Id>,
    origin: Point,
) -> BoundsPreferences<Id> {
    let mut accumulated = BoundsPreferences::empty();
    collect_into(subtree, origin, &mut accumulated);
    accumulated
}

fn collect_into<Id: Clone + Eq + Hash>(
    node: &LayoutBox<Id>,
    origin: Point,
    accumulated: &mut BoundsPreferences<Id>,
) {
    let absolute = node.rect.translate(origin.x, origin.y);
    for (id, padding) in node.modifier.track_entries() {
        let published = absolute.outset(padding);
        accumulated.merge(BoundsPreferences::single(
            id.clone(),
            BoundsAnchor::new(published),
        ));
    }
    let child_origin = Point::new(absolute.x, absolute.y);
    for child in &node.children {
        collect_into(child, child_origin, accumulated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limelight_graphics::{EdgeInsets, Rect};

    fn anchor(x: f32, y: f32, w: f32, h: f32) -> BoundsAnchor {
        BoundsAnchor::new(Rect::new(x, y, w, h))
    }

    #[test]
    fn default_value_is_empty() {
        let prefs: BoundsPreferences<&str> = BoundsPreferences::default();
        assert!(prefs.is_empty());
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut prefs = BoundsPreferences::single("a", anchor(0.0, 0.0, 10.0, 10.0));
        prefs.merge(BoundsPreferences::single("a", anchor(5.0, 5.0, 20.0, 20.0)));
        let space = SpaceSnapshot::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let resolved = prefs.resolve(&space);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.get(&"a"), Some(Rect::new(5.0, 5.0, 20.0, 20.0)));
    }

    #[test]
    fn merge_carries_disjoint_keys_through() {
        let mut prefs = BoundsPreferences::single("a", anchor(0.0, 0.0, 10.0, 10.0));
        prefs.merge(BoundsPreferences::single("b", anchor(0.0, 20.0, 10.0, 10.0)));
        assert_eq!(prefs.len(), 2);
        assert!(prefs.contains(&"a"));
        assert!(prefs.contains(&"b"));
    }

    #[test]
    fn pairwise_merge_matches_flat_merge() {
        let contributions = [
            ("a", anchor(0.0, 0.0, 10.0, 10.0)),
            ("b", anchor(0.0, 20.0, 10.0, 10.0)),
            ("a", anchor(0.0, 40.0, 10.0, 10.0)),
            ("c", anchor(0.0, 60.0, 10.0, 10.0)),
        ];

        // Pairwise accumulation in traversal order.
        let mut pairwise = BoundsPreferences::empty();
        for (id, a) in contributions {
            pairwise.merge(BoundsPreferences::single(id, a));
        }

        // Grouped differently: ((a+b) merged once) + ((a+c) merged once).
        let mut left = BoundsPreferences::empty();
        left.merge(BoundsPreferences::single(contributions[0].0, contributions[0].1));
        left.merge(BoundsPreferences::single(contributions[1].0, contributions[1].1));
        let mut right = BoundsPreferences::empty();
        right.merge(BoundsPreferences::single(contributions[2].0, contributions[2].1));
        right.merge(BoundsPreferences::single(contributions[3].0, contributions[3].1));
        let mut grouped = BoundsPreferences::empty();
        grouped.merge(left);
        grouped.merge(right);

        assert_eq!(pairwise.len(), grouped.len());
        for (id, a) in pairwise.iter() {
            assert_eq!(grouped.get(id), Some(a));
        }
        // The later "a" contribution won in both groupings.
        assert_eq!(pairwise.get(&"a"), Some(&anchor(0.0, 40.0, 10.0, 10.0)));
    }

    #[test]
    fn collection_walk_publishes_absolute_padded_bounds() {
        use crate::modifier::Modifier;

        let child = LayoutBox::new(2, Rect::new(10.0, 20.0, 50.0, 30.0))
            .with_modifier(Modifier::empty().trackable_padded("child", 5.0));
        let root = LayoutBox::new(1, Rect::new(100.0, 100.0, 200.0, 200.0))
            .with_modifier(Modifier::empty().trackable("root"))
            .with_children(vec![child]);

        let prefs = collect_bounds_preferences(&root, Point::ZERO);
        assert_eq!(prefs.len(), 2);
        assert_eq!(prefs.get(&"root"), Some(&anchor(100.0, 100.0, 200.0, 200.0)));
        // Child: parent origin (100, 100) + child rect, outset by 5 per edge.
        assert_eq!(prefs.get(&"child"), Some(&anchor(105.0, 115.0, 60.0, 40.0)));
    }

    #[test]
    fn deeper_duplicate_wins_in_traversal_order() {
        use crate::modifier::Modifier;

        let deep = LayoutBox::new(3, Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_modifier(Modifier::empty().trackable("dup"));
        let shallow = LayoutBox::new(2, Rect::new(0.0, 50.0, 20.0, 20.0))
            .with_modifier(Modifier::empty().trackable("dup"))
            .with_children(vec![deep]);
        let root = LayoutBox::new(1, Rect::new(0.0, 0.0, 100.0, 100.0)).with_children(vec![shallow]);

        let prefs = collect_bounds_preferences(&root, Point::ZERO);
        assert_eq!(prefs.len(), 1);
        // The deeper node is visited later in pre-order, so it wins.
        assert_eq!(prefs.get(&"dup"), Some(&anchor(0.0, 50.0, 10.0, 10.0)));
    }

    #[test]
    fn per_edge_insets_inflate_asymmetrically() {
        use crate::modifier::Modifier;

        let root = LayoutBox::new(1, Rect::new(10.0, 10.0, 100.0, 50.0)).with_modifier(
            Modifier::empty().trackable_padded_insets("field", EdgeInsets::from_components(10.0, 0.0, 0.0, 0.0)),
        );
        let prefs = collect_bounds_preferences(&root, Point::ZERO);
        assert_eq!(prefs.get(&"field"), Some(&anchor(0.0, 10.0, 110.0, 50.0)));
    }
}
