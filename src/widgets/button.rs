//! Button widget: a clickable caption.

use std::any::Any;

use crate::geometry::Size;
use crate::widget::{TextMeasure, Widget};

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A button with a centered caption.
///
/// The preferred size pads the caption by half a line on each side
/// horizontally and a quarter line vertically.
///
/// # Examples
///
/// ```
/// let btn = gilt_layout::widgets::Button::new("Submit").disabled(true);
/// assert!(btn.is_disabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    caption: String,
    disabled: bool,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self { caption: caption.into(), disabled: false }
    }

    /// Set whether the button is disabled (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &str {
        "Button"
    }

    fn preferred_size(&self, measure: &dyn TextMeasure) -> Option<Size> {
        let text = measure.measure(&self.caption);
        let line = measure.line_height();
        Some(Size::new(text.width + line, text.height + line / 2.0))
    }

    fn text(&self) -> Option<&str> {
        Some(&self.caption)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::MonospaceMeasure;

    #[test]
    fn widget_type_is_button() {
        assert_eq!(Button::new("OK").widget_type(), "Button");
    }

    #[test]
    fn preferred_size_pads_caption() {
        let m = MonospaceMeasure::new(20.0);
        assert_eq!(Button::new("OK").preferred_size(&m), Some(Size::new(40.0, 30.0)));
    }

    #[test]
    fn caption_updates() {
        let mut b = Button::new("OK");
        b.set_caption("Cancel");
        assert_eq!(b.caption(), "Cancel");
        assert!(!b.is_disabled());
    }
}
