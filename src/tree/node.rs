//! Node types: WidgetId, WidgetNode.

use slotmap::new_key_type;

use crate::arrange::Arrangement;
use crate::geometry::{Point, Rect, Size, Spacing};
use crate::layout::{Layout, Property};
use crate::widget::Widget;

new_key_type! {
    /// Generational handle to a widget node. Copy, lightweight (u64).
    ///
    /// A handle to a destroyed node never aliases a newer one.
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

/// The bound (non-constant) layouts of a node, one per property.
#[derive(Debug, Clone, Default)]
pub struct Bindings([Option<Layout>; 4]);

impl Bindings {
    fn slot(property: Property) -> usize {
        match property {
            Property::Left => 0,
            Property::Top => 1,
            Property::Width => 2,
            Property::Height => 3,
        }
    }

    /// The layout bound to `property`, if any.
    pub fn get(&self, property: Property) -> Option<&Layout> {
        self.0[Self::slot(property)].as_ref()
    }

    /// Replace the binding for `property`, returning the previous one.
    pub fn set(&mut self, property: Property, layout: Option<Layout>) -> Option<Layout> {
        std::mem::replace(&mut self.0[Self::slot(property)], layout)
    }

    /// Whether no property is bound.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

// ---------------------------------------------------------------------------
// WidgetNode
// ---------------------------------------------------------------------------

/// A widget together with its geometry and container capability.
///
/// `position` is relative to the parent's content area and addresses the
/// widget's content; the decoration extends around it.
pub struct WidgetNode {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) name: Option<String>,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) decoration: Spacing,
    pub(crate) arrangement: Option<Arrangement>,
    pub(crate) bindings: Bindings,
}

impl WidgetNode {
    /// Create an unnamed node at the origin.
    pub fn new(widget: Box<dyn Widget>, size: Size, decoration: Spacing) -> Self {
        Self {
            widget,
            name: None,
            position: Point::ZERO,
            size,
            decoration,
            arrangement: None,
            bindings: Bindings::default(),
        }
    }

    /// Attach a container capability (builder).
    pub fn with_arrangement(mut self, arrangement: Option<Arrangement>) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// The widget content.
    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    /// Widget type name.
    pub fn widget_type(&self) -> &str {
        self.widget.widget_type()
    }

    /// The name the node was added under.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Size including decoration.
    pub fn full_size(&self) -> Size {
        self.size + self.decoration.total()
    }

    /// Offset from the decorated bounding box to the content.
    pub fn content_offset(&self) -> Point {
        self.decoration.offset()
    }

    pub fn decoration(&self) -> Spacing {
        self.decoration
    }

    /// Content rectangle, relative to the parent.
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Decorated bounding box, relative to the parent.
    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position - self.content_offset(), self.full_size())
    }

    /// Container capability, if this node is a container.
    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    pub fn is_container(&self) -> bool {
        self.arrangement.is_some()
    }

    /// The bound layouts of this node.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Current value of a geometric property.
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Left => self.position.x,
            Property::Top => self.position.y,
            Property::Width => self.size.width,
            Property::Height => self.size.height,
        }
    }

    /// Write a geometric property. Returns whether the value changed.
    pub(crate) fn put(&mut self, property: Property, value: f32) -> bool {
        let field = match property {
            Property::Left => &mut self.position.x,
            Property::Top => &mut self.position.y,
            Property::Width => &mut self.size.width,
            Property::Height => &mut self.size.height,
        };
        if *field == value {
            return false;
        }
        *field = value;
        true
    }
}

impl std::fmt::Debug for WidgetNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetNode")
            .field("widget_type", &self.widget_type())
            .field("name", &self.name)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("decoration", &self.decoration)
            .field("arrangement", &self.arrangement)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;

    fn node() -> WidgetNode {
        WidgetNode::new(Box::new(Label::new("x")), Size::new(40.0, 20.0), Spacing::ZERO)
    }

    #[test]
    fn full_size_includes_decoration() {
        let mut n = node();
        n.decoration = Spacing::new(1.0, 2.0, 3.0, 10.0);
        n.position = Point::new(50.0, 5.0);
        assert_eq!(n.full_size(), Size::new(52.0, 24.0));
        assert_eq!(n.content_offset(), Point::new(10.0, 1.0));
        assert_eq!(n.bounds(), Rect::new(40.0, 4.0, 52.0, 24.0));
    }

    #[test]
    fn put_reports_change() {
        let mut n = node();
        assert!(!n.put(Property::Width, 40.0));
        assert!(n.put(Property::Width, 41.0));
        assert_eq!(n.get(Property::Width), 41.0);
        assert!(n.put(Property::Top, -3.0));
        assert_eq!(n.position(), Point::new(0.0, -3.0));
    }

    #[test]
    fn bindings_replace() {
        let mut b = Bindings::default();
        assert!(b.is_empty());
        assert!(b.set(Property::Left, Some(Layout::relative(0.5))).is_none());
        assert_eq!(b.get(Property::Left), Some(&Layout::relative(0.5)));
        assert_eq!(b.set(Property::Left, None), Some(Layout::relative(0.5)));
        assert!(b.is_empty());
    }

    #[test]
    fn widget_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<WidgetId>();
    }
}
