//! Spotlight compositor: resolve anchors, build the cut-out, punch the scrim.

use std::hash::Hash;

use crate::anchor::SpaceSnapshot;
use crate::modifier::SpotlightSpec;
use crate::preferences::collect_bounds_preferences;
use crate::tree::LayoutBox;
use limelight_graphics::{MaskLayerBuilder, MaskScope, MaskedLayer, PlacedCutout, Point, Rect};

/// A composed overlay for one spotlight, in the compositor's local space.
#[derive(Clone, Debug)]
pub struct SpotlightOverlay {
    frame_in_root: Rect,
    layer: MaskedLayer,
    cutout: PlacedCutout,
}

impl SpotlightOverlay {
    /// The compositor's frame in root coordinates; the overlay covers it
    /// entirely.
    pub fn frame_in_root(&self) -> Rect {
        self.frame_in_root
    }

    /// The combined scrim-plus-cutout layer, in local coordinates.
    pub fn layer(&self) -> &MaskedLayer {
        &self.layer
    }

    /// The placed cut-out, in local coordinates.
    pub fn cutout(&self) -> PlacedCutout {
        self.cutout
    }

    /// Whether the overlay dims the given root-space point.
    pub fn dims_in_root(&self, point: Point) -> bool {
        let local = Point::new(point.x - self.frame_in_root.x, point.y - self.frame_in_root.y);
        self.layer.dims(local)
    }
}

/// Composes the overlay for one spotlight over `subtree`.
///
/// `origin_in_root` is the root-space position of `subtree`'s parent. Returns
/// `None` when no identifier is highlighted or when the highlighted
/// identifier has no publication in the subtree; both are defined no-op
/// states, not errors.
pub fn compose_overlay<Id: Clone + Eq + Hash>(
    subtree: &LayoutBox<Id>,
    origin_in_root: Point,
    spec: &SpotlightSpec<Id>,
) -> Option<SpotlightOverlay> {
    let highlighted = spec.highlighted()?;

    let preferences = collect_bounds_preferences(subtree, origin_in_root);
    if !preferences.contains(highlighted) {
        log::trace!("highlighted identifier has no tracked bounds; skipping overlay");
        return None;
    }

    let frame_in_root = subtree.rect.translate(origin_in_root.x, origin_in_root.y);
    let space = SpaceSnapshot::new(frame_in_root);
    let resolved = preferences.resolve(&space);
    let target = resolved.get(highlighted)?;

    // Shape decisions may read every resolved rectangle, but the cut-out is
    // sized and positioned by the highlighted one alone.
    let shape = spec.build_shape(&resolved);
    let cutout = PlacedCutout::new(shape, target);

    let mut builder = MaskLayerBuilder::new(Rect::from_size(frame_in_root.size()));
    builder.draw_dim(spec.scrim().clone());
    builder.draw_cutout(cutout);

    Some(SpotlightOverlay {
        frame_in_root,
        layer: builder.finish(),
        cutout,
    })
}
