use crate::scroll::{ComponentId, Fadeable, OverlayStyle};

/// State of the HTML glass panel layer. The DOM side only writes styles when
/// something changed since the last frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    style: OverlayStyle,
    dirty: bool,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            style: OverlayStyle::from_opacity(0.0),
            dirty: true,
        }
    }

    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    /// The current style if it changed since the previous call.
    pub fn take_changed(&mut self) -> Option<OverlayStyle> {
        if std::mem::take(&mut self.dirty) {
            Some(self.style)
        } else {
            None
        }
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Fadeable for Overlay {
    fn component(&self) -> ComponentId {
        ComponentId::Overlay
    }

    fn set_opacity(&mut self, opacity: f32) {
        let style = OverlayStyle::from_opacity(opacity);
        if style != self.style {
            self.style = style;
            self.dirty = true;
        }
    }
}
