//! CheckBox widget: a square box with a caption to its right.

use std::any::Any;

use crate::geometry::{Size, Spacing};
use crate::widget::{TextMeasure, Widget};

/// Gap between the box and its caption, as a fraction of the line height.
const CAPTION_GAP: f32 = 0.2;

/// A toggle. The node's size is the box; the caption is decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckBox {
    caption: String,
    checked: bool,
}

impl CheckBox {
    pub fn new(caption: impl Into<String>) -> Self {
        Self { caption: caption.into(), checked: false }
    }

    /// Set the initial state (builder).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl Widget for CheckBox {
    fn widget_type(&self) -> &str {
        "CheckBox"
    }

    fn decoration(&self, measure: &dyn TextMeasure) -> Spacing {
        if self.caption.is_empty() {
            return Spacing::ZERO;
        }
        let text = measure.measure(&self.caption);
        Spacing::horizontal(0.0, measure.line_height() * CAPTION_GAP + text.width)
    }

    fn preferred_size(&self, measure: &dyn TextMeasure) -> Option<Size> {
        let side = measure.line_height();
        Some(Size::new(side, side))
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
