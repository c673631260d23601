//! Headless scene renderer: walks the layout tree and materialises paint
//! operations plus the tap regions contributed by composed overlays.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::compositor::compose_overlay;
use crate::tree::{LayoutBox, NodeId};
use limelight_graphics::{
    Brush, DrawPrimitive, MaskOp, MaskedLayer, Point, Rect,
};

/// Layer that a paint operation targets within the rendering pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintLayer {
    Behind,
    Overlay,
}

/// A rendered operation emitted by the headless renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Primitive {
        node_id: NodeId,
        layer: PaintLayer,
        primitive: DrawPrimitive,
    },
    /// A composed spotlight layer, translated into root coordinates.
    Masked {
        node_id: NodeId,
        layer: MaskedLayer,
    },
}

/// Hit-testing region registered by a rendered overlay. The whole frame
/// consumes taps; the scrim blocks pass-through to content beneath.
#[derive(Clone)]
pub struct TapRegion {
    pub node_id: NodeId,
    pub frame: Rect,
    on_tap: Rc<dyn Fn()>,
}

impl TapRegion {
    pub fn contains(&self, point: Point) -> bool {
        self.frame.contains_point(point)
    }

    pub(crate) fn fire(&self) {
        (self.on_tap)();
    }
}

impl fmt::Debug for TapRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapRegion")
            .field("node_id", &self.node_id)
            .field("frame", &self.frame)
            .finish()
    }
}

/// A collection of render operations and tap regions for one pass.
#[derive(Clone, Debug, Default)]
pub struct RecordedScene {
    operations: Vec<RenderOp>,
    tap_regions: Vec<TapRegion>,
}

impl RecordedScene {
    /// Recorded render operations in submission order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    /// Primitives that target the provided paint layer.
    pub fn primitives_for(&self, layer: PaintLayer) -> impl Iterator<Item = &DrawPrimitive> {
        self.operations.iter().filter_map(move |op| match op {
            RenderOp::Primitive {
                layer: op_layer,
                primitive,
                ..
            } if *op_layer == layer => Some(primitive),
            _ => None,
        })
    }

    /// Composed overlay layers, in submission order.
    pub fn masked_layers(&self) -> impl Iterator<Item = &MaskedLayer> {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Masked { layer, .. } => Some(layer),
            _ => None,
        })
    }

    pub fn tap_regions(&self) -> &[TapRegion] {
        &self.tap_regions
    }

    /// The topmost tap region under `point`, if any. Later registrations
    /// paint above earlier ones, so the last match wins.
    pub fn tap_region_at(&self, point: Point) -> Option<&TapRegion> {
        self.tap_regions
            .iter()
            .rev()
            .find(|region| region.contains(point))
    }
}

/// A lightweight renderer that walks the layout tree and materialises paint
/// commands. Backgrounds paint behind a node's children; composed spotlight
/// overlays paint above the whole subtree they cover.
#[derive(Default)]
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<Id: Clone + Eq + Hash>(&self, root: &LayoutBox<Id>) -> RecordedScene {
        let mut scene = RecordedScene::default();
        self.render_box(root, Point::ZERO, &mut scene);
        log::trace!(
            "rendered scene: {} ops, {} tap regions",
            scene.operations.len(),
            scene.tap_regions.len()
        );
        scene
    }

    fn render_box<Id: Clone + Eq + Hash>(
        &self,
        node: &LayoutBox<Id>,
        origin: Point,
        scene: &mut RecordedScene,
    ) {
        let absolute = node.rect.translate(origin.x, origin.y);

        if let Some(color) = node.modifier.background_color() {
            scene.operations.push(RenderOp::Primitive {
                node_id: node.node_id,
                layer: PaintLayer::Behind,
                primitive: DrawPrimitive::Rect {
                    rect: absolute,
                    brush: Brush::solid(color),
                },
            });
        }

        let child_origin = Point::new(absolute.x, absolute.y);
        for child in &node.children {
            self.render_box(child, child_origin, scene);
        }

        if let Some(spec) = node.modifier.resolved_spotlight_spec() {
            if let Some(overlay) = compose_overlay(node, origin, spec) {
                let frame = overlay.frame_in_root();
                scene.operations.push(RenderOp::Masked {
                    node_id: node.node_id,
                    layer: translate_layer(overlay.layer().clone(), frame.x, frame.y),
                });
                scene.tap_regions.push(TapRegion {
                    node_id: node.node_id,
                    frame,
                    on_tap: spec.tap_handler(),
                });
            }
        }
    }
}

/// Translates a composed overlay layer from compositor-local coordinates
/// into root coordinates for scene-wide queries.
fn translate_layer(layer: MaskedLayer, dx: f32, dy: f32) -> MaskedLayer {
    let bounds = layer.bounds().translate(dx, dy);
    let ops = layer
        .ops()
        .iter()
        .map(|MaskOp { op, primitive }| MaskOp {
            op: *op,
            primitive: translate_primitive(primitive.clone(), dx, dy),
        })
        .collect();
    MaskedLayer::from_parts(bounds, ops)
}

fn translate_primitive(primitive: DrawPrimitive, dx: f32, dy: f32) -> DrawPrimitive {
    match primitive {
        DrawPrimitive::Rect { rect, brush } => DrawPrimitive::Rect {
            rect: rect.translate(dx, dy),
            brush,
        },
        DrawPrimitive::RoundRect { rect, brush, radii } => DrawPrimitive::RoundRect {
            rect: rect.translate(dx, dy),
            brush,
            radii,
        },
        DrawPrimitive::Circle {
            center,
            radius,
            brush,
        } => DrawPrimitive::Circle {
            center: Point::new(center.x + dx, center.y + dy),
            radius,
            brush,
        },
    }
}
