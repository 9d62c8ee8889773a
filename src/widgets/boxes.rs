//! Box layout widgets and the spacer used to pad them.

use std::any::Any;

use crate::arrange::{Arrangement, BoxLayout, Orientation};
use crate::config::GuiConfig;
use crate::widget::Widget;

fn box_arrangement(orientation: Orientation, spacing: Option<f32>, config: &GuiConfig) -> Arrangement {
    let mut layout = BoxLayout::new(orientation);
    layout.spacing = spacing.unwrap_or(config.spacing);
    Arrangement::Box(layout)
}

// ---------------------------------------------------------------------------
// HorizontalLayout / VerticalLayout
// ---------------------------------------------------------------------------

/// Places children side by side, partitioning its width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalLayout {
    spacing: Option<f32>,
}

impl HorizontalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the configured spacing between children (builder).
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

impl Widget for HorizontalLayout {
    fn widget_type(&self) -> &str {
        "HorizontalLayout"
    }

    fn arrangement(&self, config: &GuiConfig) -> Option<Arrangement> {
        Some(box_arrangement(Orientation::Horizontal, self.spacing, config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Stacks children top to bottom, partitioning its height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalLayout {
    spacing: Option<f32>,
}

impl VerticalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the configured spacing between children (builder).
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

impl Widget for VerticalLayout {
    fn widget_type(&self) -> &str {
        "VerticalLayout"
    }

    fn arrangement(&self, config: &GuiConfig) -> Option<Arrangement> {
        Some(box_arrangement(Orientation::Vertical, self.spacing, config))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Spacer
// ---------------------------------------------------------------------------

/// Empty widget occupying a box layout slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacer;

impl Widget for Spacer {
    fn widget_type(&self) -> &str {
        "Spacer"
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

    #[test]
    fn spacing_defaults_to_config() {
        let config = GuiConfig::new().with_spacing(6.0);
        let Some(Arrangement::Box(layout)) = VerticalLayout::new().arrangement(&config) else {
            panic!("expected a box arrangement");
        };
        assert_eq!(layout.orientation, Orientation::Vertical);
        assert_eq!(layout.spacing, 6.0);
    }

    #[test]
    fn spacing_override() {
        let config = GuiConfig::new().with_spacing(6.0);
        let Some(Arrangement::Box(layout)) = HorizontalLayout::new().with_spacing(2.0).arrangement(&config) else {
            panic!("expected a box arrangement");
        };
        assert_eq!(layout.orientation, Orientation::Horizontal);
        assert_eq!(layout.spacing, 2.0);
    }

    #[test]
    fn spacer_is_leaf() {
        assert!(Spacer.arrangement(&GuiConfig::default()).is_none());
    }
}
