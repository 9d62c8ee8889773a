//! Label widget: displays text.
//!
//! The simplest widget. Its preferred size is the measured size of its text,
//! and table cells given as plain values are wrapped in one.

use std::any::Any;

use crate::geometry::Size;
use crate::widget::{TextMeasure, Widget};

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// A non-interactive text widget.
///
/// # Examples
///
/// ```
/// use gilt_layout::widgets::Label;
///
/// let label = Label::new("Hello, world!");
/// assert_eq!(label.content(), "Hello, world!");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    content: String,
}

impl Label {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text. Through [`Gui::update_widget`](crate::gui::Gui::update_widget)
    /// the node is resized to the new text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn preferred_size(&self, measure: &dyn TextMeasure) -> Option<Size> {
        Some(measure.measure(&self.content))
    }

    fn text(&self) -> Option<&str> {
        Some(&self.content)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
