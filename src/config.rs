//! GuiConfig: defaults the engine reads when creating widgets and flushing.

use crate::geometry::Size;

// ---------------------------------------------------------------------------
// GuiConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Gui`](crate::gui::Gui).
///
/// Built with chainable `with_*` methods:
///
/// ```
/// use gilt_layout::config::GuiConfig;
/// use gilt_layout::geometry::Size;
///
/// let config = GuiConfig::new()
///     .with_viewport(Size::new(1024.0, 768.0))
///     .with_row_height(24.0);
/// assert_eq!(config.row_height, 24.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GuiConfig {
    /// Initial size of the root container.
    pub viewport: Size,
    /// Character height used by the default text measurer.
    pub text_size: f32,
    /// Minimum height of table rows.
    pub row_height: f32,
    /// Gap between table rows.
    pub separator: f32,
    /// Spacing given to new box layouts.
    pub spacing: f32,
    /// How often one field may be re-evaluated in a single flush before the
    /// dependency cycle is cut.
    pub max_evaluations: usize,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            text_size: 20.0,
            row_height: 20.0,
            separator: 1.0,
            spacing: 0.0,
            max_evaluations: 16,
        }
    }
}

impl GuiConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial viewport size (builder).
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the text size for the default measurer (builder).
    pub fn with_text_size(mut self, text_size: f32) -> Self {
        self.text_size = text_size;
        self
    }

    /// Set the default table row height (builder).
    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set the default table separator thickness (builder).
    pub fn with_separator(mut self, separator: f32) -> Self {
        self.separator = separator;
        self
    }

    /// Set the default box layout spacing (builder).
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the re-evaluation cap used to cut dependency cycles (builder).
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = max_evaluations.max(1);
        self
    }
}
