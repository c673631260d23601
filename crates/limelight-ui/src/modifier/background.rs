use super::{Modifier, ModifierElement};
use limelight_graphics::Color;

impl<Id> Modifier<Id> {
    /// Set the background color.
    ///
    /// Example: `Modifier::empty().background(Color::rgb(0.2, 0.6, 0.2))`
    pub fn background(self, color: Color) -> Self {
        self.then(Self::with_element(ModifierElement::Background(color)))
    }
}
