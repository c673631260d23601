//! Pure math/data for geometry and mask compositing in Limelight
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! cut-out shapes, and the inverse-mask layer used to punch a highlight
//! hole into a dimming scrim.

mod brush;
mod color;
mod cutout;
mod geometry;
mod mask;

pub use brush::*;
pub use color::*;
pub use cutout::*;
pub use geometry::*;
pub use mask::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::cutout::{CutoutShape, PlacedCutout};
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, Rect, RoundedCornerShape, Size};
    pub use crate::mask::{CompositeOp, DrawPrimitive, MaskLayerBuilder, MaskedLayer};
}
