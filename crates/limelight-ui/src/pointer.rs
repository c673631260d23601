//! Pointer input types and the tap recognizer for overlay hit regions.

use crate::renderer::RecordedScene;
use crate::tree::NodeId;
use limelight_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position: Point::new(x, y),
        }
    }

    pub fn cancel() -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            position: Point::ZERO,
        }
    }
}

/// Recognizes single taps on overlay regions across Down/Up pairs.
///
/// A Down inside a region arms it; an Up inside the same region fires its
/// callback exactly once. Cancel disarms. Any event over a region is
/// consumed, so the scrim blocks pass-through to content beneath it; events
/// with no region under them are left for the host to route.
#[derive(Default)]
pub struct TapDispatcher {
    armed: Option<NodeId>,
}

impl TapDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one pointer event. Returns true when an overlay consumed it.
    pub fn dispatch(&mut self, scene: &RecordedScene, event: PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => match scene.tap_region_at(event.position) {
                Some(region) => {
                    self.armed = Some(region.node_id);
                    true
                }
                None => {
                    self.armed = None;
                    false
                }
            },
            PointerEventKind::Up => {
                let armed = self.armed.take();
                match scene.tap_region_at(event.position) {
                    Some(region) => {
                        if armed == Some(region.node_id) {
                            region.fire();
                        }
                        true
                    }
                    None => false,
                }
            }
            PointerEventKind::Cancel => {
                self.armed = None;
                false
            }
        }
    }
}
