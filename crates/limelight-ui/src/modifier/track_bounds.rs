use super::{Modifier, ModifierElement};
use limelight_graphics::EdgeInsets;

impl<Id> Modifier<Id> {
    /// Track this view's bounds under `id`.
    ///
    /// On every pass the collection walk publishes a single-entry mapping
    /// `{id: anchor}` upward; the view's own layout is untouched.
    ///
    /// Example: `Modifier::empty().trackable(Item::Globe)`
    pub fn trackable(self, id: Id) -> Self {
        self.trackable_padded_insets(id, EdgeInsets::default())
    }

    /// Track this view's bounds inflated uniformly by `padding` on all edges.
    ///
    /// Example: `Modifier::empty().trackable_padded(Item::Globe, 5.0)`
    pub fn trackable_padded(self, id: Id, padding: f32) -> Self {
        self.trackable_padded_insets(id, EdgeInsets::uniform(padding))
    }

    /// Track this view's bounds inflated per edge. Negative insets deflate.
    ///
    /// The padding applies to the published rectangle only; it nets to zero
    /// on the view's rendered layout.
    ///
    /// Example: `Modifier::empty().trackable_padded_insets(Item::Field, EdgeInsets::horizontal(10.0))`
    pub fn trackable_padded_insets(self, id: Id, insets: EdgeInsets) -> Self {
        self.then(Self::with_element(ModifierElement::TrackBounds {
            id,
            padding: insets,
        }))
    }
}
