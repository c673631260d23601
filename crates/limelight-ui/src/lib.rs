//! Spotlight overlay primitives for a retained view tree.
//!
//! Views are marked trackable via modifier elements; a pre-order collection
//! pass aggregates their bounds into one keyed mapping per pass; a spotlight
//! compositor resolves that mapping against its own coordinate space and
//! punches a cut-out over the highlighted view in a dimming scrim. Highlight
//! state lives with the caller: it is passed in by value on every pass and
//! only ever advanced from the tap callback.

mod anchor;
mod compositor;
mod modifier;
mod pointer;
mod preferences;
mod renderer;
mod tree;

pub use anchor::{BoundsAnchor, ResolvedBounds, SpaceSnapshot};
pub use compositor::{compose_overlay, SpotlightOverlay};
pub use modifier::{Modifier, ModifierElement, SpotlightSpec};
pub use pointer::{PointerEvent, PointerEventKind, TapDispatcher};
pub use preferences::{collect_bounds_preferences, BoundsPreferences};
pub use renderer::{PaintLayer, RecordedScene, RenderOp, SceneRenderer, TapRegion};
pub use tree::{LayoutBox, NodeId};

pub use limelight_graphics::{
    Brush, Color, CompositeOp, CornerRadii, CutoutShape, DrawPrimitive, EdgeInsets,
    MaskLayerBuilder, MaskOp, MaskScope, MaskedLayer, PlacedCutout, Point, Rect,
    RoundedCornerShape, Size,
};
