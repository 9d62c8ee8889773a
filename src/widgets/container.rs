//! Free-form containers: Group and Panel.
//!
//! Children of a free container keep whatever position and size they are
//! given, usually through bound layouts relative to the container or to their
//! siblings.

use std::any::Any;

use crate::arrange::Arrangement;
use crate::config::GuiConfig;
use crate::geometry::Spacing;
use crate::widget::{TextMeasure, Widget};

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// An invisible free container. The root of every [`Gui`](crate::gui::Gui) is
/// a group.
///
/// # Examples
///
/// ```
/// use gilt_layout::gui::Gui;
/// use gilt_layout::widgets::{Button, Group};
///
/// let mut gui = Gui::default();
/// let group = gui.create(Group::new());
/// let ok = gui.create(Button::new("OK"));
/// gui.add(group, ok, Some("ok")).unwrap();
/// gui.add(gui.root(), group, None).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group;

impl Group {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Group {
    fn widget_type(&self) -> &str {
        "Group"
    }

    fn arrangement(&self, _config: &GuiConfig) -> Option<Arrangement> {
        Some(Arrangement::Free)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// A free container with a border.
///
/// The border is decoration, so children are positioned inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    border: f32,
}

impl Panel {
    pub fn new() -> Self {
        Self { border: 0.0 }
    }

    /// Set the border thickness (builder).
    pub fn with_border(mut self, border: f32) -> Self {
        self.border = border.max(0.0);
        self
    }

    pub fn border(&self) -> f32 {
        self.border
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn widget_type(&self) -> &str {
        "Panel"
    }

    fn decoration(&self, _measure: &dyn TextMeasure) -> Spacing {
        Spacing::all(self.border)
    }

    fn arrangement(&self, _config: &GuiConfig) -> Option<Arrangement> {
        Some(Arrangement::Free)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
