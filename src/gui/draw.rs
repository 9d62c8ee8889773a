//! Render walk: hands every widget's absolute geometry to a host renderer.

use crate::arrange::{Arrangement, Stripe};
use crate::geometry::{Point, Rect};
use crate::tree::WidgetId;

use super::Gui;

/// What a renderer needs to paint one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub widget: WidgetId,
    pub widget_type: String,
    /// Distance from the root, which is depth 0.
    pub depth: usize,
    /// Decorated bounding box in root coordinates.
    pub bounds: Rect,
    /// Content rectangle in root coordinates.
    pub content: Rect,
    pub text: Option<String>,
    /// Background class of a striped table row.
    pub stripe: Option<Stripe>,
}

/// Receives draw commands in z-order (parents before children, earlier
/// siblings before later ones).
pub trait RenderTarget {
    fn draw(&mut self, command: DrawCommand);
}

impl Gui {
    /// Walk the tree in z-order and emit one command per widget.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        self.draw_node(self.root(), Point::ZERO, 0, target);
    }

    fn draw_node(&self, id: WidgetId, origin: Point, depth: usize, target: &mut dyn RenderTarget) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let content = node.rect().translate(origin);
        let stripe = match node.arrangement() {
            Some(Arrangement::Row(row)) => row.stripe,
            _ => None,
        };
        target.draw(DrawCommand {
            widget: id,
            widget_type: node.widget_type().to_owned(),
            depth,
            bounds: node.bounds().translate(origin),
            content,
            text: node.widget().text().map(str::to_owned),
            stripe,
        });
        for &child in self.tree.children(id) {
            self.draw_node(child, content.position(), depth + 1, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuiConfig;
    use crate::geometry::Size;
    use crate::testing::RecordingTarget;
    use crate::widgets::{Button, Panel};
    use pretty_assertions::assert_eq;

    #[test]
    fn commands_follow_z_order_in_root_coordinates() {
        let mut gui = Gui::new(GuiConfig::new().with_viewport(Size::new(200.0, 100.0)));
        let panel = gui.create(Panel::new().with_border(2.0));
        gui.add(gui.root(), panel, None).unwrap();
        gui.set_position(panel, (10.0, 10.0)).unwrap();
        gui.set_size(panel, (100.0, 50.0)).unwrap();
        let ok = gui.create(Button::new("OK"));
        gui.add(panel, ok, None).unwrap();
        gui.set_position(ok, (5.0, 5.0)).unwrap();

        let mut target = RecordingTarget::new();
        gui.draw(&mut target);
        let commands = target.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].widget, gui.root());
        assert_eq!(commands[1].content, Rect::new(10.0, 10.0, 100.0, 50.0));
        assert_eq!(commands[1].bounds, Rect::new(8.0, 8.0, 104.0, 54.0));
        assert_eq!(commands[2].depth, 2);
        assert_eq!(commands[2].content, Rect::new(15.0, 15.0, 40.0, 30.0));
        assert_eq!(commands[2].text.as_deref(), Some("OK"));
    }
}
