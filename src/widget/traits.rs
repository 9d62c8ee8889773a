//! Widget trait: the content half of a widget node.
//!
//! A `Widget` describes what a node *is*: its type name, the decoration drawn
//! around its content, its natural size and whether it arranges children.
//! Geometry, names and ownership live on the node in the
//! [`WidgetTree`](crate::tree::WidgetTree), so widgets stay plain data.

use std::any::Any;

use crate::arrange::Arrangement;
use crate::config::GuiConfig;
use crate::geometry::{Size, Spacing};

use super::text::TextMeasure;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object-safe: the engine stores widgets as `Box<dyn Widget>` and downcasts
/// through [`Widget::as_any`] when typed access is needed.
pub trait Widget {
    /// Type name (e.g. "Button", "VerticalLayout").
    fn widget_type(&self) -> &str;

    /// Decoration around the content: borders, an attached label, a check
    /// box caption. Box layouts subtract it from the slot they assign.
    fn decoration(&self, _measure: &dyn TextMeasure) -> Spacing {
        Spacing::ZERO
    }

    /// Natural content size, used when the widget is created.
    fn preferred_size(&self, _measure: &dyn TextMeasure) -> Option<Size> {
        None
    }

    /// Container capability. `None` for leaf widgets.
    fn arrangement(&self, _config: &GuiConfig) -> Option<Arrangement> {
        None
    }

    /// Text shown by the widget, forwarded to draw commands.
    fn text(&self) -> Option<&str> {
        None
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
