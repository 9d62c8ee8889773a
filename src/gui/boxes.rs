//! Box layout tuning: ratios, fixed sizes, spacers and spacing.
//!
//! These operate on any container that partitions its main axis, which
//! includes table rows.

use tracing::debug;

use crate::arrange::{BoxLayout, LayoutSlot};
use crate::error::{LayoutError, Result};
use crate::reactive::Job;
use crate::tree::WidgetId;
use crate::widgets::Spacer;

use super::{ChildRef, Gui};

impl Gui {
    /// Share of the free space given to a child.
    ///
    /// A widget that is not a child resolves to the index `child_count` and
    /// fails with `OutOfRange`.
    pub fn set_ratio(&mut self, layout: WidgetId, child: impl Into<ChildRef>, ratio: f32) -> Result<()> {
        let index = self.slot_index(layout, child.into())?;
        let ratio = checked_extent("ratio", ratio)?;
        self.update_slot(layout, index, |slot| slot.ratio = ratio);
        debug!(?layout, index, ratio, "set ratio");
        self.flush();
        Ok(())
    }

    pub fn ratio(&self, layout: WidgetId, child: impl Into<ChildRef>) -> Result<f32> {
        let index = self.slot_index(layout, child.into())?;
        Ok(self.box_layout(layout)?.slots[index].ratio)
    }

    /// Give a child an exact main-axis extent; `0` returns it to its ratio.
    pub fn set_fixed_size(&mut self, layout: WidgetId, child: impl Into<ChildRef>, size: f32) -> Result<()> {
        let index = self.slot_index(layout, child.into())?;
        let size = checked_extent("fixed size", size)?;
        self.update_slot(layout, index, |slot| slot.fixed_size = size);
        debug!(?layout, index, size, "set fixed size");
        self.flush();
        Ok(())
    }

    pub fn fixed_size(&self, layout: WidgetId, child: impl Into<ChildRef>) -> Result<f32> {
        let index = self.slot_index(layout, child.into())?;
        Ok(self.box_layout(layout)?.slots[index].fixed_size)
    }

    /// [`Gui::add`] with an explicit ratio.
    pub fn add_with_ratio(&mut self, layout: WidgetId, widget: WidgetId, ratio: f32, name: Option<&str>) -> Result<()> {
        let len = self.child_count(layout)?;
        self.insert_with_ratio(layout, len, widget, ratio, name)
    }

    /// [`Gui::insert`] with an explicit ratio.
    pub fn insert_with_ratio(
        &mut self,
        layout: WidgetId,
        index: usize,
        widget: WidgetId,
        ratio: f32,
        name: Option<&str>,
    ) -> Result<()> {
        self.box_layout(layout)?;
        let ratio = checked_extent("ratio", ratio)?;
        self.attach_child(layout, index, widget, name, Some(LayoutSlot::ratio(ratio)))?;
        self.flush();
        Ok(())
    }

    /// Append an empty spacer taking `ratio` of the free space.
    pub fn add_space(&mut self, layout: WidgetId, ratio: f32) -> Result<WidgetId> {
        let len = self.child_count(layout)?;
        self.insert_space(layout, len, ratio)
    }

    pub fn insert_space(&mut self, layout: WidgetId, index: usize, ratio: f32) -> Result<WidgetId> {
        self.box_layout(layout)?;
        let ratio = checked_extent("ratio", ratio)?;
        let len = self.child_count(layout)?;
        if index > len {
            return Err(LayoutError::OutOfRange { index, len });
        }
        let spacer = self.create(Spacer);
        if let Err(err) = self.attach_child(layout, index, spacer, None, Some(LayoutSlot::ratio(ratio))) {
            self.drop_subtree(spacer);
            return Err(err);
        }
        self.flush();
        Ok(spacer)
    }

    /// Gap between consecutive children.
    pub fn set_spacing(&mut self, layout: WidgetId, spacing: f32) -> Result<()> {
        self.box_layout(layout)?;
        let spacing = checked_extent("spacing", spacing)?;
        if let Some(partition) = self.box_layout_mut(layout) {
            partition.spacing = spacing;
        }
        self.graph.enqueue(Job::Arrange(layout));
        self.flush();
        Ok(())
    }

    pub fn spacing(&self, layout: WidgetId) -> Result<f32> {
        Ok(self.box_layout(layout)?.spacing)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn box_layout(&self, layout: WidgetId) -> Result<&BoxLayout> {
        let node = self
            .tree
            .get(layout)
            .ok_or_else(|| LayoutError::invalid("layout does not exist"))?;
        node.arrangement()
            .and_then(|a| a.box_layout())
            .ok_or_else(|| LayoutError::invalid(format!("{} is not a box layout", node.widget_type())))
    }

    /// Slot index of a child; unknown widgets map to `child_count`.
    fn slot_index(&self, layout: WidgetId, child: ChildRef) -> Result<usize> {
        self.box_layout(layout)?;
        let children = self.tree.children(layout);
        let len = children.len();
        let index = match child {
            ChildRef::Index(index) => index,
            ChildRef::Widget(widget) => std::iter::once(widget)
                .chain(self.tree.ancestors(widget))
                .find_map(|w| children.iter().position(|&c| c == w))
                .unwrap_or(len),
        };
        if index >= len {
            return Err(LayoutError::OutOfRange { index, len });
        }
        Ok(index)
    }

    fn update_slot(&mut self, layout: WidgetId, index: usize, f: impl FnOnce(&mut LayoutSlot)) {
        if let Some(slot) = self.box_layout_mut(layout).and_then(|b| b.slots.get_mut(index)) {
            f(slot);
        }
        self.graph.enqueue(Job::Arrange(layout));
    }
}

pub(super) fn checked_extent(what: &str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::invalid(format!("{what} must be finite and non-negative, got {value}")))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuiConfig;
    use crate::geometry::{Point, Size};
    use crate::widgets::{Button, EditBox, HorizontalLayout, Label, VerticalLayout};
    use pretty_assertions::assert_eq;

    fn hbox(gui: &mut Gui, width: f32) -> WidgetId {
        let layout = gui.create(HorizontalLayout::new());
        gui.add(gui.root(), layout, None).unwrap();
        gui.set_size(layout, (width, 50.0)).unwrap();
        layout
    }

    #[test]
    fn content_update_keeps_slot() {
        let mut gui = Gui::new(GuiConfig::new().with_viewport(Size::new(400.0, 300.0)));
        let layout = hbox(&mut gui, 400.0);
        let a = gui.create(Label::new("a"));
        let b = gui.create(Label::new("b"));
        gui.add(layout, a, None).unwrap();
        gui.add(layout, b, None).unwrap();
        assert_eq!(gui.size(a).unwrap(), Size::new(200.0, 50.0));

        gui.update_widget::<Label, _>(a, |l| l.set_content("a much longer caption here")).unwrap();
        assert_eq!(gui.size(a).unwrap(), Size::new(200.0, 50.0));
        assert_eq!(gui.position(b).unwrap(), Point::new(200.0, 0.0));
        assert_eq!(gui.size(b).unwrap(), Size::new(200.0, 50.0));
    }

    fn widths(gui: &Gui, layout: WidgetId) -> Vec<f32> {
        gui.children(layout).unwrap().iter().map(|&c| gui.size(c).unwrap().width).collect()
    }

    #[test]
    fn equal_ratios_share_width() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 400.0);
        for caption in ["a", "b"] {
            let b = gui.create(Button::new(caption));
            gui.add(layout, b, None).unwrap();
        }
        assert_eq!(widths(&gui, layout), vec![200.0, 200.0]);
        gui.set_size(layout, (600.0, 50.0)).unwrap();
        assert_eq!(widths(&gui, layout), vec![300.0, 300.0]);
    }

    #[test]
    fn fixed_then_ratio() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 300.0);
        let a = gui.create(Button::new("a"));
        let b = gui.create(Button::new("b"));
        gui.add(layout, a, None).unwrap();
        gui.add(layout, b, None).unwrap();
        gui.set_fixed_size(layout, 0, 100.0).unwrap();
        assert_eq!(widths(&gui, layout), vec![100.0, 200.0]);
        assert_eq!(gui.position(b).unwrap(), Point::new(100.0, 0.0));
        assert_eq!(gui.fixed_size(layout, a).unwrap(), 100.0);
    }

    #[test]
    fn ratio_by_widget_and_index() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 300.0);
        let a = gui.create(Button::new("a"));
        let b = gui.create(Button::new("b"));
        gui.add(layout, a, None).unwrap();
        gui.add_with_ratio(layout, b, 2.0, None).unwrap();
        assert_eq!(widths(&gui, layout), vec![100.0, 200.0]);
        gui.set_ratio(layout, a, 2.0).unwrap();
        assert_eq!(gui.ratio(layout, 0).unwrap(), 2.0);
        assert_eq!(widths(&gui, layout), vec![150.0, 150.0]);
    }

    #[test]
    fn zero_ratio_sum_gives_zero() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 300.0);
        let a = gui.create(Button::new("a"));
        gui.add_with_ratio(layout, a, 0.0, None).unwrap();
        assert_eq!(widths(&gui, layout), vec![0.0]);
    }

    #[test]
    fn slot_errors() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 300.0);
        let a = gui.create(Button::new("a"));
        gui.add(layout, a, None).unwrap();
        let stranger = gui.create(Button::new("x"));

        assert_eq!(gui.set_ratio(layout, 1, 1.0), Err(LayoutError::OutOfRange { index: 1, len: 1 }));
        assert_eq!(gui.set_ratio(layout, stranger, 1.0), Err(LayoutError::OutOfRange { index: 1, len: 1 }));
        assert!(matches!(gui.set_ratio(layout, a, -1.0), Err(LayoutError::InvalidArgument(_))));
        assert!(matches!(gui.set_fixed_size(layout, a, f32::NAN), Err(LayoutError::InvalidArgument(_))));
        assert_eq!(gui.ratio(layout, a).unwrap(), 1.0);

        let label = gui.create(Label::new("x"));
        assert!(matches!(gui.ratio(label, 0), Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn spaces_take_slots() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 400.0);
        let a = gui.create(Button::new("a"));
        gui.add(layout, a, None).unwrap();
        let space = gui.add_space(layout, 3.0).unwrap();
        assert_eq!(gui.widget::<Spacer>(space), Some(&Spacer));
        assert_eq!(widths(&gui, layout), vec![100.0, 300.0]);

        let front = gui.insert_space(layout, 0, 4.0).unwrap();
        assert_eq!(gui.index_of(layout, front).unwrap(), 0);
        assert_eq!(gui.insert_space(layout, 9, 1.0), Err(LayoutError::OutOfRange { index: 9, len: 3 }));
        assert_eq!(gui.child_count(layout).unwrap(), 3);
    }

    #[test]
    fn spacing_between_children() {
        let mut gui = Gui::default();
        let layout = gui.create(VerticalLayout::new());
        gui.add(gui.root(), layout, None).unwrap();
        gui.set_size(layout, (100.0, 210.0)).unwrap();
        let a = gui.create(Button::new("a"));
        let b = gui.create(Button::new("b"));
        gui.add(layout, a, None).unwrap();
        gui.add(layout, b, None).unwrap();
        gui.set_spacing(layout, 10.0).unwrap();
        assert_eq!(gui.spacing(layout).unwrap(), 10.0);
        assert_eq!(gui.size(a).unwrap(), Size::new(100.0, 100.0));
        assert_eq!(gui.position(b).unwrap(), Point::new(0.0, 110.0));
    }

    #[test]
    fn configured_spacing_is_default() {
        let mut gui = Gui::new(GuiConfig::new().with_spacing(4.0));
        let layout = gui.create(HorizontalLayout::new());
        assert_eq!(gui.spacing(layout).unwrap(), 4.0);
    }

    #[test]
    fn decoration_shrinks_slot() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 200.0);
        let edit = gui.create(EditBox::new().with_border(2.0));
        gui.add(layout, edit, None).unwrap();
        assert_eq!(gui.full_size(edit).unwrap(), Size::new(200.0, 50.0));
        assert_eq!(gui.size(edit).unwrap(), Size::new(196.0, 46.0));
        assert_eq!(gui.position(edit).unwrap(), Point::new(2.0, 2.0));
    }

    #[test]
    fn reorder_moves_slots() {
        let mut gui = Gui::default();
        let layout = hbox(&mut gui, 300.0);
        let a = gui.create(Button::new("a"));
        let b = gui.create(Button::new("b"));
        gui.add(layout, a, None).unwrap();
        gui.add(layout, b, None).unwrap();
        gui.set_fixed_size(layout, a, 100.0).unwrap();
        gui.set_widget_index(layout, a, 1).unwrap();
        assert_eq!(gui.fixed_size(layout, 1).unwrap(), 100.0);
        assert_eq!(gui.position(a).unwrap(), Point::new(200.0, 0.0));
    }
}
