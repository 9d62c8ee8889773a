//! A render target that keeps every command it receives.

use crate::gui::{DrawCommand, RenderTarget};
use crate::tree::WidgetId;

/// Records draw commands for later inspection.
///
/// # Examples
///
/// ```
/// use gilt_layout::gui::Gui;
/// use gilt_layout::testing::RecordingTarget;
///
/// let gui = Gui::default();
/// let mut target = RecordingTarget::new();
/// gui.draw(&mut target);
/// assert_eq!(target.commands().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingTarget {
    commands: Vec<DrawCommand>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// The command emitted for `widget`, if it was drawn.
    pub fn find(&self, widget: WidgetId) -> Option<&DrawCommand> {
        self.commands.iter().find(|c| c.widget == widget)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::Gui;
    use crate::widgets::Label;

    #[test]
    fn records_in_order_and_clears() {
        let mut gui = Gui::default();
        let label = gui.create(Label::new("hi"));
        gui.add(gui.root(), label, None).unwrap();

        let mut target = RecordingTarget::new();
        gui.draw(&mut target);
        assert_eq!(target.commands().len(), 2);
        assert_eq!(target.find(label).and_then(|c| c.text.as_deref()), Some("hi"));

        target.clear();
        assert!(target.commands().is_empty());
        assert!(target.find(label).is_none());
    }
}
