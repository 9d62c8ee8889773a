//! Snapshot helpers.
//!
//! Functions for turning a laid-out [`Gui`] into plain text suitable for
//! snapshot testing and assertions.

use std::fmt::Write as _;

use crate::arrange::{Arrangement, Stripe};
use crate::gui::{DrawCommand, Gui};
use crate::tree::WidgetId;

use super::RecordingTarget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Outline of the widget tree, one line per widget.
///
/// Each line reads `Type #name "text" @x,y WxH`, indented two spaces per
/// level. Positions are relative to the parent's content area. Striped table
/// rows end with `even` or `odd`.
///
/// # Examples
///
/// ```
/// use gilt_layout::gui::Gui;
/// use gilt_layout::testing::dump_tree;
/// use gilt_layout::widgets::Label;
///
/// let mut gui = Gui::default();
/// let label = gui.create(Label::new("Hi"));
/// gui.add(gui.root(), label, Some("greeting")).unwrap();
/// assert_eq!(dump_tree(&gui), "Group @0,0 800x600\n  Label #greeting \"Hi\" @0,0 20x20");
/// ```
pub fn dump_tree(gui: &Gui) -> String {
    let mut lines = Vec::new();
    dump_node(gui, gui.root(), 0, &mut lines);
    lines.join("\n")
}

/// Draw every widget's text onto a character grid of `columns` x `rows`.
///
/// One cell is half the configured text size wide and one text size high,
/// matching the default text measurer. Rows are right-trimmed and joined
/// with `'\n'`.
pub fn render_to_string(gui: &Gui, columns: usize, rows: usize) -> String {
    let mut target = RecordingTarget::new();
    gui.draw(&mut target);
    let text_size = gui.config().text_size;
    commands_to_string(target.commands(), text_size / 2.0, text_size, columns, rows)
}

/// Overlay the text of draw commands onto a character grid.
///
/// Commands are painted in order, so later (higher) widgets win. Text that
/// falls outside the grid is clipped.
pub fn commands_to_string(
    commands: &[DrawCommand],
    cell_width: f32,
    cell_height: f32,
    columns: usize,
    rows: usize,
) -> String {
    if columns == 0 || rows == 0 || cell_width <= 0.0 || cell_height <= 0.0 {
        return String::new();
    }

    let mut grid: Vec<Vec<char>> = vec![vec![' '; columns]; rows];
    for command in commands {
        let Some(text) = &command.text else {
            continue;
        };
        let left = (command.content.x / cell_width).round() as i64;
        let top = (command.content.y / cell_height).round() as i64;
        for (line_index, line) in text.split('\n').enumerate() {
            let y = top + line_index as i64;
            if y < 0 || y >= rows as i64 {
                continue;
            }
            for (i, ch) in line.chars().enumerate() {
                let x = left + i as i64;
                if x < 0 || x >= columns as i64 {
                    continue;
                }
                grid[y as usize][x as usize] = ch;
            }
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn dump_node(gui: &Gui, id: WidgetId, depth: usize, lines: &mut Vec<String>) {
    let Some(node) = gui.node(id) else {
        return;
    };
    let mut line = "  ".repeat(depth);
    line.push_str(node.widget_type());
    if let Some(name) = node.name() {
        let _ = write!(line, " #{name}");
    }
    if let Some(text) = node.widget().text() {
        let _ = write!(line, " {text:?}");
    }
    let (position, size) = (node.position(), node.size());
    let _ = write!(line, " @{},{} {}x{}", position.x, position.y, size.width, size.height);
    if let Some(Arrangement::Row(row)) = node.arrangement() {
        match row.stripe {
            Some(Stripe::Even) => line.push_str(" even"),
            Some(Stripe::Odd) => line.push_str(" odd"),
            None => {}
        }
    }
    lines.push(line);

    for &child in gui.tree().children(id) {
        dump_node(gui, child, depth + 1, lines);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
