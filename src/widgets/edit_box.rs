//! EditBox widget: a single-line text field, optionally with a caption to its
//! left.
//!
//! Both the border and the caption are decoration: the node's size is the
//! editable area only, and box layouts shrink it so the caption still fits.

use std::any::Any;

use crate::geometry::{Size, Spacing};
use crate::widget::{TextMeasure, Widget};

/// Gap between an attached caption and the field.
const CAPTION_GAP: f32 = 5.0;

// ---------------------------------------------------------------------------
// EditBox
// ---------------------------------------------------------------------------

/// A single-line text field.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBox {
    value: String,
    caption: Option<String>,
    border: f32,
    columns: usize,
}

impl EditBox {
    /// An empty field with a 2px border, ten columns wide.
    pub fn new() -> Self {
        Self { value: String::new(), caption: None, border: 2.0, columns: 10 }
    }

    /// Attach a caption drawn left of the field (builder).
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the initial value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the border thickness (builder).
    pub fn with_border(mut self, border: f32) -> Self {
        self.border = border.max(0.0);
        self
    }

    /// Set the preferred width in characters (builder).
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn set_caption(&mut self, caption: Option<String>) {
        self.caption = caption;
    }
}

impl Default for EditBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for EditBox {
    fn widget_type(&self) -> &str {
        "EditBox"
    }

    fn decoration(&self, measure: &dyn TextMeasure) -> Spacing {
        let caption = match &self.caption {
            Some(text) => Spacing::horizontal(measure.measure(text).width + CAPTION_GAP, 0.0),
            None => Spacing::ZERO,
        };
        Spacing::all(self.border) + caption
    }

    fn preferred_size(&self, measure: &dyn TextMeasure) -> Option<Size> {
        let column = measure.measure("0").width;
        Some(Size::new(column * self.columns as f32, measure.line_height()))
    }

    fn text(&self) -> Option<&str> {
        Some(&self.value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
