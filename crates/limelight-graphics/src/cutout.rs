//! Cut-out shapes: the vocabulary of highlight holes and their containment math

use crate::geometry::{CornerRadii, Point, Rect, RoundedCornerShape};

/// Shape of the hole punched into the dimming scrim.
///
/// The shape carries no position or size of its own; the compositor places it
/// exactly over the highlighted view's resolved rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CutoutShape {
    Rectangle,
    RoundedRectangle(RoundedCornerShape),
    /// A circle inscribed in the target rectangle, centered, with diameter
    /// equal to the smaller extent.
    Circle,
    /// A rounded rectangle whose radius is half the smaller extent.
    Capsule,
}

impl CutoutShape {
    pub fn rounded(radius: f32) -> Self {
        CutoutShape::RoundedRectangle(RoundedCornerShape::uniform(radius))
    }
}

/// A cut-out shape sized and positioned to a concrete rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedCutout {
    shape: CutoutShape,
    rect: Rect,
}

impl PlacedCutout {
    pub fn new(shape: CutoutShape, rect: Rect) -> Self {
        Self { shape, rect }
    }

    pub fn shape(&self) -> CutoutShape {
        self.shape
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Exact containment test for the placed shape.
    pub fn contains(&self, point: Point) -> bool {
        match self.shape {
            CutoutShape::Rectangle => self.rect.contains_point(point),
            CutoutShape::RoundedRectangle(shape) => {
                let radii = shape.resolve(self.rect.width, self.rect.height);
                rounded_rect_contains(self.rect, radii, point)
            }
            CutoutShape::Circle => {
                let radius = self.rect.width.min(self.rect.height) / 2.0;
                let center = self.rect.center();
                let dx = point.x - center.x;
                let dy = point.y - center.y;
                dx * dx + dy * dy <= radius * radius
            }
            CutoutShape::Capsule => {
                let radius = self.rect.width.min(self.rect.height) / 2.0;
                let radii = CornerRadii::uniform(radius);
                rounded_rect_contains(self.rect, radii, point)
            }
        }
    }
}

/// Rounded-rectangle containment with per-corner radii.
///
/// Points inside the rect but beyond a corner's quarter-circle are outside.
pub(crate) fn rounded_rect_contains(rect: Rect, radii: CornerRadii, point: Point) -> bool {
    if !rect.contains_point(point) {
        return false;
    }
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    let within = |cx: f32, cy: f32, radius: f32| {
        let dx = point.x - cx;
        let dy = point.y - cy;
        dx * dx + dy * dy <= radius * radius
    };

    let r = radii.top_left;
    if r > 0.0 && point.x < rect.x + r && point.y < rect.y + r {
        return within(rect.x + r, rect.y + r, r);
    }
    let r = radii.top_right;
    if r > 0.0 && point.x > right - r && point.y < rect.y + r {
        return within(right - r, rect.y + r, r);
    }
    let r = radii.bottom_right;
    if r > 0.0 && point.x > right - r && point.y > bottom - r {
        return within(right - r, bottom - r, r);
    }
    let r = radii.bottom_left;
    if r > 0.0 && point.x < rect.x + r && point.y > bottom - r {
        return within(rect.x + r, bottom - r, r);
    }
    true
}
