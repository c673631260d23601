//! Modifier system for Limelight
//!
//! A thin builder around an ordered element chain, generic over the caller's
//! identifier type. Elements are appended with [`Modifier::then`] and read
//! back by the collection pass and the scene renderer.

use std::fmt;

use smallvec::SmallVec;

use limelight_graphics::{Color, EdgeInsets};

mod background;
mod spotlight;
mod track_bounds;

pub use spotlight::SpotlightSpec;

/// One entry in a modifier chain.
#[derive(Clone)]
pub enum ModifierElement<Id> {
    /// Publishes this view's bounds (outset by `padding`) under `id`.
    TrackBounds { id: Id, padding: EdgeInsets },
    Background(Color),
    Spotlight(SpotlightSpec<Id>),
}

impl<Id> fmt::Debug for ModifierElement<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierElement::TrackBounds { padding, .. } => f
                .debug_struct("TrackBounds")
                .field("padding", padding)
                .finish(),
            ModifierElement::Background(color) => {
                f.debug_tuple("Background").field(color).finish()
            }
            ModifierElement::Spotlight(spec) => f.debug_tuple("Spotlight").field(spec).finish(),
        }
    }
}

#[derive(Clone)]
pub struct Modifier<Id> {
    elements: SmallVec<[ModifierElement<Id>; 2]>,
}

impl<Id> Modifier<Id> {
    pub fn empty() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    pub(crate) fn with_element(element: ModifierElement<Id>) -> Self {
        let mut elements = SmallVec::new();
        elements.push(element);
        Self { elements }
    }

    /// Concatenates `other` after this chain, preserving element order.
    pub fn then(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }

    pub fn elements(&self) -> &[ModifierElement<Id>] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Tracked identifiers contributed by this chain, in chain order.
    pub(crate) fn track_entries(&self) -> impl Iterator<Item = (&Id, EdgeInsets)> + '_ {
        self.elements.iter().filter_map(|element| match element {
            ModifierElement::TrackBounds { id, padding } => Some((id, *padding)),
            _ => None,
        })
    }

    /// Rightmost background wins, matching chain-order semantics.
    pub(crate) fn background_color(&self) -> Option<Color> {
        self.elements.iter().rev().find_map(|element| match element {
            ModifierElement::Background(color) => Some(*color),
            _ => None,
        })
    }

    /// Rightmost spotlight wins.
    pub(crate) fn resolved_spotlight_spec(&self) -> Option<&SpotlightSpec<Id>> {
        self.elements.iter().rev().find_map(|element| match element {
            ModifierElement::Spotlight(spec) => Some(spec),
            _ => None,
        })
    }
}

impl<Id> Default for Modifier<Id> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Id> fmt::Debug for Modifier<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}
