//! Inverse-mask compositing: paint the dim, punch the cut-out, combine
//!
//! The overlay is modeled as two explicit passes over one layer: a scrim
//! painted source-over across the layer bounds, then the cut-out shape
//! applied destination-out so the highlighted region shows through undimmed.

use crate::brush::Brush;
use crate::color::Color;
use crate::cutout::{rounded_rect_contains, CutoutShape, PlacedCutout};
use crate::geometry::{CornerRadii, Point, Rect};

/// How a primitive combines with content already painted in its layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeOp {
    /// Paint over existing content.
    SourceOver,
    /// Erase existing content wherever this primitive has coverage.
    DestinationOut,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        brush: Brush,
    },
    RoundRect {
        rect: Rect,
        brush: Brush,
        radii: CornerRadii,
    },
    Circle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
}

impl DrawPrimitive {
    /// Coverage test for compositing; brushes do not affect coverage.
    pub fn covers(&self, point: Point) -> bool {
        match self {
            DrawPrimitive::Rect { rect, .. } => rect.contains_point(point),
            DrawPrimitive::RoundRect { rect, radii, .. } => {
                rounded_rect_contains(*rect, *radii, point)
            }
            DrawPrimitive::Circle { center, radius, .. } => {
                let dx = point.x - center.x;
                let dy = point.y - center.y;
                dx * dx + dy * dy <= radius * radius
            }
        }
    }
}

/// One compositing step: a primitive plus the operation it applies with.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskOp {
    pub op: CompositeOp,
    pub primitive: DrawPrimitive,
}

/// Scoped recorder for assembling a masked layer.
pub trait MaskScope {
    fn bounds(&self) -> Rect;
    /// Paints the scrim across the full layer bounds.
    fn draw_dim(&mut self, brush: Brush);
    /// Punches the cut-out shape out of everything painted so far.
    fn draw_cutout(&mut self, cutout: PlacedCutout);
}

#[derive(Clone, Debug)]
pub struct MaskLayerBuilder {
    bounds: Rect,
    ops: Vec<MaskOp>,
}

impl MaskLayerBuilder {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ops: Vec::new(),
        }
    }

    pub fn finish(self) -> MaskedLayer {
        MaskedLayer {
            bounds: self.bounds,
            ops: self.ops,
        }
    }
}

impl MaskScope for MaskLayerBuilder {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw_dim(&mut self, brush: Brush) {
        self.ops.push(MaskOp {
            op: CompositeOp::SourceOver,
            primitive: DrawPrimitive::Rect {
                rect: self.bounds,
                brush,
            },
        });
    }

    fn draw_cutout(&mut self, cutout: PlacedCutout) {
        self.ops.push(MaskOp {
            op: CompositeOp::DestinationOut,
            primitive: cutout_primitive(cutout),
        });
    }
}

/// A fully combined overlay layer: scrim plus punched cut-outs.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedLayer {
    bounds: Rect,
    ops: Vec<MaskOp>,
}

impl MaskedLayer {
    pub fn from_parts(bounds: Rect, ops: Vec<MaskOp>) -> Self {
        Self { bounds, ops }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn ops(&self) -> &[MaskOp] {
        &self.ops
    }

    /// Evaluates whether the layer dims the given point: painted by a
    /// source-over op and not erased by a later destination-out op.
    pub fn dims(&self, point: Point) -> bool {
        let mut covered = false;
        for MaskOp { op, primitive } in &self.ops {
            match op {
                CompositeOp::SourceOver => {
                    if primitive.covers(point) {
                        covered = true;
                    }
                }
                CompositeOp::DestinationOut => {
                    if primitive.covers(point) {
                        covered = false;
                    }
                }
            }
        }
        covered
    }
}

/// Converts a placed cut-out into its coverage primitive. The brush is
/// irrelevant under destination-out; only coverage matters.
fn cutout_primitive(cutout: PlacedCutout) -> DrawPrimitive {
    let rect = cutout.rect();
    let brush = Brush::solid(Color::BLACK);
    match cutout.shape() {
        CutoutShape::Rectangle => DrawPrimitive::Rect { rect, brush },
        CutoutShape::RoundedRectangle(shape) => DrawPrimitive::RoundRect {
            rect,
            brush,
            radii: shape.resolve(rect.width, rect.height),
        },
        CutoutShape::Circle => DrawPrimitive::Circle {
            center: rect.center(),
            radius: rect.width.min(rect.height) / 2.0,
            brush,
        },
        CutoutShape::Capsule => DrawPrimitive::RoundRect {
            rect,
            brush,
            radii: CornerRadii::uniform(rect.width.min(rect.height) / 2.0),
        },
    }
}
