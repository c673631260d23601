use std::fmt;
use std::rc::Rc;

use super::{Modifier, ModifierElement};
use crate::anchor::ResolvedBounds;
use limelight_graphics::{Brush, Color, CutoutShape};

/// Configuration for one spotlight compositor.
///
/// Carries the currently highlighted identifier (owned and updated by the
/// caller, passed in by value each pass), the shape builder invoked with the
/// fully resolved bounds mapping, the tap callback, and the scrim brush.
#[derive(Clone)]
pub struct SpotlightSpec<Id> {
    highlighted: Option<Id>,
    shape: Rc<dyn Fn(&ResolvedBounds<Id>) -> CutoutShape>,
    on_tap: Rc<dyn Fn()>,
    scrim: Brush,
}

impl<Id> SpotlightSpec<Id> {
    pub fn new(
        highlighted: Option<Id>,
        shape: impl Fn(&ResolvedBounds<Id>) -> CutoutShape + 'static,
        on_tap: impl Fn() + 'static,
    ) -> Self {
        Self {
            highlighted,
            shape: Rc::new(shape),
            on_tap: Rc::new(on_tap),
            scrim: default_scrim(),
        }
    }

    /// Replace the default half-opacity black scrim.
    pub fn with_scrim(mut self, scrim: Brush) -> Self {
        self.scrim = scrim;
        self
    }

    pub fn highlighted(&self) -> Option<&Id> {
        self.highlighted.as_ref()
    }

    pub fn scrim(&self) -> &Brush {
        &self.scrim
    }

    pub(crate) fn build_shape(&self, bounds: &ResolvedBounds<Id>) -> CutoutShape {
        (self.shape)(bounds)
    }

    pub(crate) fn tap_handler(&self) -> Rc<dyn Fn()> {
        Rc::clone(&self.on_tap)
    }
}

impl<Id> fmt::Debug for SpotlightSpec<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotlightSpec")
            .field("highlighted", &self.highlighted.is_some())
            .field("scrim", &self.scrim)
            .finish()
    }
}

/// Default scrim: half-opacity black.
pub(crate) fn default_scrim() -> Brush {
    Brush::solid(Color::BLACK.with_alpha(0.5))
}

impl<Id> Modifier<Id> {
    /// Render a spotlight overlay over this view's subtree for `highlighted`,
    /// cutting out a plain rectangle over its tracked bounds.
    ///
    /// With `highlighted == None`, or an identifier no descendant currently
    /// publishes, nothing is rendered and `on_tap` never fires.
    pub fn spotlight(self, highlighted: Option<Id>, on_tap: impl Fn() + 'static) -> Self {
        self.spotlight_shaped(highlighted, || CutoutShape::Rectangle, on_tap)
    }

    /// Spotlight with a fixed cut-out shape; the resolved bounds mapping is
    /// ignored by the shape builder.
    pub fn spotlight_shaped(
        self,
        highlighted: Option<Id>,
        shape: impl Fn() -> CutoutShape + 'static,
        on_tap: impl Fn() + 'static,
    ) -> Self {
        self.spotlight_with_bounds(highlighted, move |_| shape(), on_tap)
    }

    /// Spotlight whose shape builder receives the fully resolved mapping of
    /// every tracked identifier in the subtree, e.g. to derive a corner
    /// radius from another item's width.
    pub fn spotlight_with_bounds(
        self,
        highlighted: Option<Id>,
        shape: impl Fn(&ResolvedBounds<Id>) -> CutoutShape + 'static,
        on_tap: impl Fn() + 'static,
    ) -> Self {
        self.spotlight_spec(SpotlightSpec::new(highlighted, shape, on_tap))
    }

    /// Spotlight from a prebuilt spec, for callers that also override the
    /// scrim brush.
    pub fn spotlight_spec(self, spec: SpotlightSpec<Id>) -> Self {
        self.then(Self::with_element(ModifierElement::Spotlight(spec)))
    }
}
