//! Post-layout view snapshot tree: the contract with the host framework.
//!
//! The host runs measure/layout and hands Limelight an immutable snapshot of
//! the resulting boxes. Limelight never mutates geometry; trackers and
//! spotlights ride along on each box's modifier chain.

use crate::modifier::Modifier;
use limelight_graphics::Rect;

pub type NodeId = u64;

/// Layout information for a single view.
///
/// `rect` is expressed in the parent's coordinate space. Children are stored
/// in declaration order; the pre-order walk over this tree (node first, then
/// children in order) is the traversal order that decides which duplicate
/// tracked identifier wins.
#[derive(Clone, Debug)]
pub struct LayoutBox<Id> {
    pub node_id: NodeId,
    pub rect: Rect,
    pub modifier: Modifier<Id>,
    pub children: Vec<LayoutBox<Id>>,
}

impl<Id> LayoutBox<Id> {
    pub fn new(node_id: NodeId, rect: Rect) -> Self {
        Self {
            node_id,
            rect,
            modifier: Modifier::empty(),
            children: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier<Id>) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn with_children(mut self, children: Vec<LayoutBox<Id>>) -> Self {
        self.children = children;
        self
    }
}
