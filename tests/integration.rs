//! Integration tests for gilt-layout.
//!
//! These tests exercise the public API from outside the crate: containers,
//! box layouts, bound layouts and tables working together on one `Gui`.

use gilt_layout::config::GuiConfig;
use gilt_layout::error::LayoutError;
use gilt_layout::geometry::{Point, Rect, Size};
use gilt_layout::gui::{Cell, Gui};
use gilt_layout::layout::{bind_bottom, bind_size, Layout, ParseError, Property};
use gilt_layout::testing::{dump_tree, render_to_string, RecordingTarget};
use gilt_layout::tree::WidgetId;
use gilt_layout::widgets::*;
use pretty_assertions::assert_eq;

fn gui() -> Gui {
    Gui::new(GuiConfig::new().with_viewport(Size::new(400.0, 300.0)))
}

/// A horizontal layout of `width` x 50 holding `n` buttons.
fn hbox(gui: &mut Gui, width: f32, n: usize) -> (WidgetId, Vec<WidgetId>) {
    let layout = gui.create(HorizontalLayout::new());
    gui.add(gui.root(), layout, None).unwrap();
    gui.set_size(layout, (width, 50.0)).unwrap();
    let buttons = (0..n)
        .map(|i| {
            let b = gui.create(Button::new(format!("B{i}")));
            gui.add(layout, b, None).unwrap();
            b
        })
        .collect();
    (layout, buttons)
}

fn rects(gui: &Gui, ids: &[WidgetId]) -> Vec<Rect> {
    ids.iter()
        .map(|&id| Rect::from_parts(gui.position(id).unwrap(), gui.size(id).unwrap()))
        .collect()
}

// ---------------------------------------------------------------------------
// Box layout
// ---------------------------------------------------------------------------

#[test]
fn test_two_ratio_children_follow_resize() {
    let mut gui = gui();
    let (layout, b) = hbox(&mut gui, 400.0, 2);
    assert_eq!(gui.size(b[0]).unwrap().width, 200.0);
    assert_eq!(gui.size(b[1]).unwrap().width, 200.0);

    gui.set_size(layout, (600.0, 50.0)).unwrap();
    assert_eq!(gui.size(b[0]).unwrap().width, 300.0);
    assert_eq!(gui.size(b[1]).unwrap().width, 300.0);
    assert_eq!(gui.position(b[1]).unwrap(), Point::new(300.0, 0.0));
}

#[test]
fn test_fixed_and_ratio_children() {
    let mut gui = gui();
    let (layout, b) = hbox(&mut gui, 300.0, 2);
    gui.set_fixed_size(layout, b[0], 100.0).unwrap();
    assert_eq!(
        rects(&gui, &b),
        vec![Rect::new(0.0, 0.0, 100.0, 50.0), Rect::new(100.0, 0.0, 200.0, 50.0)]
    );
}

#[test]
fn test_ratios_are_proportional_and_fill_free_space() {
    let mut gui = gui();
    let (layout, b) = hbox(&mut gui, 800.0, 3);
    gui.set_ratio(layout, 1, 2.0).unwrap();
    gui.set_ratio(layout, 2, 5.0).unwrap();
    let widths: Vec<f32> = b.iter().map(|&w| gui.size(w).unwrap().width).collect();
    assert_eq!(widths, vec![100.0, 200.0, 500.0]);
    assert_eq!(widths.iter().sum::<f32>(), 800.0);
}

#[test]
fn test_extents_never_exceed_axis_size() {
    let mut gui = gui();
    let (layout, b) = hbox(&mut gui, 300.0, 4);
    gui.set_fixed_size(layout, 0, 60.0).unwrap();
    gui.set_fixed_size(layout, 2, 40.0).unwrap();
    gui.set_ratio(layout, 3, 3.0).unwrap();
    for width in [100.0, 150.0, 333.0, 640.0, 1024.0] {
        gui.set_size(layout, (width, 50.0)).unwrap();
        let total: f32 = b.iter().map(|&w| gui.size(w).unwrap().width).sum();
        assert!(total <= width + 0.001, "{total} > {width}");
        assert_eq!(gui.size(b[0]).unwrap().width, 60.0);
        assert_eq!(gui.size(b[2]).unwrap().width, 40.0);
    }
}

#[test]
fn test_insert_past_end_is_out_of_range() {
    let mut gui = gui();
    let (layout, b) = hbox(&mut gui, 300.0, 3);
    let extra = gui.create(Button::new("extra"));
    let before = rects(&gui, &b);
    assert_eq!(gui.insert(layout, 5, extra, None), Err(LayoutError::OutOfRange { index: 5, len: 3 }));
    assert_eq!(gui.children(layout).unwrap(), b);
    assert_eq!(rects(&gui, &b), before);
}

#[test]
fn test_insert_then_remove_restores_layout() {
    let mut gui = gui();
    let (layout, b) = hbox(&mut gui, 300.0, 3);
    gui.set_fixed_size(layout, 1, 50.0).unwrap();
    let before = rects(&gui, &b);

    let extra = gui.create(Button::new("extra"));
    gui.insert(layout, 1, extra, None).unwrap();
    assert_ne!(rects(&gui, &b), before);
    gui.remove(layout, 1).unwrap();

    assert_eq!(gui.children(layout).unwrap(), b);
    assert_eq!(rects(&gui, &b), before);
    assert_eq!(gui.fixed_size(layout, 1).unwrap(), 50.0);
}

#[test]
fn test_set_ratio_on_foreign_widget() {
    let mut gui = gui();
    let (layout, _) = hbox(&mut gui, 300.0, 2);
    let foreign = gui.create(Button::new("foreign"));
    assert_eq!(
        gui.set_ratio(layout, foreign, 2.0),
        Err(LayoutError::OutOfRange { index: 2, len: 2 })
    );
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn test_get_by_name_then_remove() {
    let mut gui = gui();
    let root = gui.root();
    let ok = gui.create(Button::new("OK"));
    gui.add(root, ok, Some("ok")).unwrap();
    assert_eq!(gui.get_by_name(root, "ok").unwrap(), ok);

    let removed = gui.remove(root, ok).unwrap();
    assert_eq!(removed.name.as_deref(), Some("ok"));
    assert!(matches!(gui.get_by_name(root, "ok"), Err(LayoutError::NotFound(_))));
}

#[test]
fn test_reparent_through_remove() {
    let mut gui = gui();
    let root = gui.root();
    let left = gui.create(Panel::new());
    let right = gui.create(Panel::new());
    gui.add(root, left, None).unwrap();
    gui.add(root, right, None).unwrap();
    let label = gui.create(Label::new("moving"));
    gui.add(left, label, Some("tag")).unwrap();

    let removed = gui.remove(left, label).unwrap();
    let name = removed.name.clone();
    let moved = gui.create_boxed(removed.widget);
    gui.add(right, moved, name.as_deref()).unwrap();

    assert_eq!(gui.child_count(left).unwrap(), 0);
    assert_eq!(gui.find_by_name("tag"), Some(moved));
    assert_eq!(gui.widget::<Label>(moved).map(Label::content), Some("moving"));
}

#[test]
fn test_form_snapshot() {
    let mut gui = gui();
    let form = gui.create(VerticalLayout::new());
    gui.add(gui.root(), form, Some("form")).unwrap();
    gui.set_position(form, (10.0, 10.0)).unwrap();
    gui.set_size(form, (300.0, 60.0)).unwrap();
    for (name, caption) in [("name", "Name"), ("mail", "Mail")] {
        let edit = gui.create(EditBox::new().with_caption(caption));
        gui.add(form, edit, Some(name)).unwrap();
    }

    insta::assert_snapshot!(dump_tree(&gui), @r#"
Group @0,0 400x300
  VerticalLayout #form @10,10 300x60
    EditBox #name "" @47,2 251x26
    EditBox #mail "" @47,32 251x26
"#);
}

// ---------------------------------------------------------------------------
// Bound layouts
// ---------------------------------------------------------------------------

#[test]
fn test_bound_layouts_track_sources() {
    let mut gui = gui();
    let root = gui.root();
    let ok = gui.create(Button::new("OK"));
    let cancel = gui.create(Button::new("Cancel"));
    gui.add(root, ok, Some("ok")).unwrap();
    gui.add(root, cancel, Some("cancel")).unwrap();

    gui.set_position(ok, ("&.width - ok.width - 10", "&.height - ok.height - 10")).unwrap();
    gui.set_position(cancel, ("ok.left - cancel.width - 5", "ok.top")).unwrap();
    // OK 40x30, Cancel 80x30
    assert_eq!(gui.position(ok).unwrap(), Point::new(350.0, 260.0));
    assert_eq!(gui.position(cancel).unwrap(), Point::new(265.0, 260.0));

    gui.set_viewport(Size::new(500.0, 400.0));
    assert_eq!(gui.position(ok).unwrap(), Point::new(450.0, 360.0));
    assert_eq!(gui.position(cancel).unwrap(), Point::new(365.0, 360.0));
}

#[test]
fn test_bind_helpers_chain() {
    let mut gui = gui();
    let root = gui.root();
    let top = gui.create(Panel::new());
    let below = gui.create(Panel::new());
    gui.add(root, top, None).unwrap();
    gui.add(root, below, None).unwrap();
    gui.set_size(top, ("50%", "20%")).unwrap();
    gui.set_size(below, bind_size(top, (1.0, 0.5))).unwrap();
    gui.set_layout(below, Property::Top, bind_bottom(top, 1.0) + Layout::constant(4.0)).unwrap();

    assert_eq!(gui.size(below).unwrap(), Size::new(200.0, 30.0));
    assert_eq!(gui.position(below).unwrap(), Point::new(0.0, 64.0));
}

#[test]
fn test_layout_strings() {
    assert!(Layout::parse("min(50%, 200) + 4").is_ok());
    assert_eq!(Layout::percent("80%").unwrap(), Layout::relative(0.8));
    assert!(matches!(Layout::percent("80"), Err(_)));
    assert!(matches!(Layout::percent(""), Err(ParseError::Empty)));

    // A malformed string degrades to zero instead of failing.
    let mut gui = gui();
    let b = gui.create(Button::new("OK"));
    gui.add(gui.root(), b, None).unwrap();
    gui.set_size(b, ("((", "10")).unwrap();
    assert_eq!(gui.size(b).unwrap(), Size::new(0.0, 10.0));
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

fn people(gui: &mut Gui) -> WidgetId {
    let table = gui.create(Table::new().striped(true));
    gui.add(gui.root(), table, Some("people")).unwrap();
    gui.set_size(table, (300.0, 100.0)).unwrap();
    gui.set_header_columns(table, &["Name", "Age"]).unwrap();
    gui.add_row(table, ["Alice", "30"]).unwrap();
    gui.add_row(table, ["Bob", "41"]).unwrap();
    table
}

#[test]
fn test_table_snapshot() {
    let mut gui = gui();
    people(&mut gui);

    insta::assert_snapshot!(dump_tree(&gui), @r#"
Group @0,0 400x300
  Table #people @0,0 300x100
    TableHeader @0,0 300x20
      TableItem @0,0 150x20
        Label "Name" @0,0 40x20
      TableItem @150,0 150x20
        Label "Age" @0,0 30x20
    TableRow @0,21 300x20 even
      TableItem @0,0 150x20
        Label "Alice" @0,0 50x20
      TableItem @150,0 150x20
        Label "30" @0,0 20x20
    TableRow @0,42 300x20 odd
      TableItem @0,0 150x20
        Label "Bob" @0,0 30x20
      TableItem @150,0 150x20
        Label "41" @0,0 20x20
"#);
}

#[test]
fn test_table_renders_as_text() {
    let mut gui = gui();
    people(&mut gui);
    let expected = [
        format!("{:<15}{}", "Name", "Age"),
        format!("{:<15}{}", "Alice", "30"),
        format!("{:<15}{}", "Bob", "41"),
    ]
    .join("\n");
    assert_eq!(render_to_string(&gui, 30, 3), expected);
}

#[test]
fn test_table_mixed_cells_and_widget_rows() {
    let mut gui = gui();
    let table = people(&mut gui);
    let check = gui.create(CheckBox::new("Admin"));
    let row = gui.add_row(table, [Cell::from("Carol"), Cell::from(check)]).unwrap();
    assert_eq!(gui.row_count(table).unwrap(), 3);
    assert_eq!(gui.position(row).unwrap(), Point::new(0.0, 63.0));

    // Removing by the nested widget removes the whole row.
    let bob = gui.row(table, 1).unwrap();
    gui.remove(table, check).unwrap();
    assert_eq!(gui.row_count(table).unwrap(), 2);
    assert!(!gui.contains(row));
    assert_eq!(gui.stripe(bob).unwrap(), Some(gilt_layout::arrange::Stripe::Odd));
}

#[test]
fn test_table_draw_marks_stripes() {
    let mut gui = gui();
    let table = people(&mut gui);
    let mut target = RecordingTarget::new();
    gui.draw(&mut target);

    let first = gui.row(table, 0).unwrap();
    let command = target.find(first).unwrap();
    assert_eq!(command.stripe, Some(gilt_layout::arrange::Stripe::Even));
    assert_eq!(command.content, Rect::new(0.0, 21.0, 300.0, 20.0));

    let header = gui.header(table).unwrap().unwrap();
    assert_eq!(target.find(header).unwrap().stripe, None);
}
