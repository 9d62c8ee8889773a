//! Table construction: header, rows, items, columns and striping.
//!
//! A table's children are a header row (when one was set) followed by the
//! data rows. Every row is a horizontal partition of [`TableItem`]s and every
//! item holds exactly one widget.

use tracing::debug;

use crate::arrange::{Arrangement, HorizontalAlign, LayoutSlot, RowLayout, Stripe, TableLayout};
use crate::error::{LayoutError, Result};
use crate::reactive::Job;
use crate::tree::WidgetId;
use crate::widgets::{Label, TableItem, TableRow};

use super::boxes::checked_extent;
use super::Gui;

/// Content of a table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Plain text, shown through a [`Label`].
    Text(String),
    /// A detached widget created by the caller.
    Widget(WidgetId),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_owned())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<WidgetId> for Cell {
    fn from(id: WidgetId) -> Self {
        Cell::Widget(id)
    }
}

impl Gui {
    /// The header row, if the table has one.
    pub fn header(&self, table: WidgetId) -> Result<Option<WidgetId>> {
        self.table_state(table)?;
        Ok(self.split_header(table).0)
    }

    /// Replace the header with one label per column name.
    pub fn set_header_columns(&mut self, table: WidgetId, names: &[&str]) -> Result<WidgetId> {
        let align = self.table_state(table)?.align;
        if let Some(old) = self.split_header(table).0 {
            self.unlink(table, old);
        }

        let header = self.create(TableRow::header());
        for (column, name) in names.iter().enumerate() {
            let label = self.create(Label::new(*name));
            self.push_item(header, column, label, TableItem::new(align));
        }
        self.link(table, 0, header, None, None);
        debug!(?table, columns = names.len(), "set table header");
        self.flush();
        Ok(header)
    }

    /// Append a data row. Text cells become labels.
    ///
    /// Widget cells must be detached; if any is not, nothing is created.
    pub fn add_row<C: Into<Cell>>(&mut self, table: WidgetId, cells: impl IntoIterator<Item = C>) -> Result<WidgetId> {
        let align = self.table_state(table)?.align;
        let cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();

        let mut seen = Vec::new();
        for cell in &cells {
            if let Cell::Widget(widget) = *cell {
                self.check_attachable(table, widget)?;
                if seen.contains(&widget) {
                    return Err(LayoutError::invalid("the same widget appears twice in a row"));
                }
                seen.push(widget);
            }
        }

        let row = self.create(TableRow::new());
        for (column, cell) in cells.into_iter().enumerate() {
            let widget = match cell {
                Cell::Text(text) => self.create(Label::new(text)),
                Cell::Widget(widget) => widget,
            };
            self.push_item(row, column, widget, TableItem::new(align));
        }
        let end = self.tree.children(table).len();
        self.link(table, end, row, None, None);
        self.flush();
        Ok(row)
    }

    /// Append `widget` to a row inside a new item.
    ///
    /// A `fixed_height` item lets the widget's full height raise the row
    /// height. `align` defaults to the row's alignment.
    pub fn add_item(
        &mut self,
        row: WidgetId,
        widget: WidgetId,
        fixed_height: bool,
        align: Option<HorizontalAlign>,
    ) -> Result<WidgetId> {
        let row_align = self.row_state(row)?.align;
        self.check_attachable(row, widget)?;
        let item = TableItem::new(align.unwrap_or(row_align)).fixed_height(fixed_height);
        let column = self.tree.children(row).len();
        let item = self.push_item(row, column, widget, item);
        self.flush();
        Ok(item)
    }

    /// Fixed width of `column` in the header and every row.
    pub fn set_fixed_column_width(&mut self, table: WidgetId, column: usize, width: f32) -> Result<()> {
        self.table_state(table)?;
        let width = checked_extent("column width", width)?;
        self.update_column(table, column, |slot| slot.fixed_size = width);
        debug!(?table, column, width, "set fixed column width");
        self.flush();
        Ok(())
    }

    /// Ratio of `column` in the header and every row.
    pub fn set_column_ratio(&mut self, table: WidgetId, column: usize, ratio: f32) -> Result<()> {
        self.table_state(table)?;
        let ratio = checked_extent("column ratio", ratio)?;
        self.update_column(table, column, |slot| slot.ratio = ratio);
        debug!(?table, column, ratio, "set column ratio");
        self.flush();
        Ok(())
    }

    pub fn set_striped(&mut self, table: WidgetId, striped: bool) -> Result<()> {
        self.update_table(table, |t| t.striped = striped)
    }

    /// Stripe of a data row; `None` for the header or an unstriped table.
    pub fn stripe(&self, row: WidgetId) -> Result<Option<Stripe>> {
        Ok(self.row_state(row)?.stripe)
    }

    /// Alignment of every item in a row, and of items added to it later.
    pub fn set_items_align(&mut self, row: WidgetId, align: HorizontalAlign) -> Result<()> {
        self.row_state(row)?;
        if let Some(Arrangement::Row(layout)) = self.arrangement_mut(row) {
            layout.align = align;
        }
        for item in self.tree.children(row).to_vec() {
            if let Some(Arrangement::Item(layout)) = self.arrangement_mut(item) {
                layout.align = align;
                self.graph.enqueue(Job::Arrange(item));
            }
        }
        self.flush();
        Ok(())
    }

    /// Alignment given to items the table creates from now on.
    pub fn set_default_align(&mut self, table: WidgetId, align: HorizontalAlign) -> Result<()> {
        self.update_table(table, |t| t.align = align)
    }

    /// Minimum height of the header and of every row.
    pub fn set_row_height(&mut self, table: WidgetId, row_height: f32) -> Result<()> {
        let row_height = checked_extent("row height", row_height)?;
        self.update_table(table, |t| t.row_height = row_height)
    }

    /// Gap below the header and below every row.
    pub fn set_separator(&mut self, table: WidgetId, separator: f32) -> Result<()> {
        let separator = checked_extent("separator", separator)?;
        self.update_table(table, |t| t.separator = separator)
    }

    /// Number of data rows.
    pub fn row_count(&self, table: WidgetId) -> Result<usize> {
        self.table_state(table)?;
        self.child_count(table)
    }

    /// Data row at `index`.
    pub fn row(&self, table: WidgetId, index: usize) -> Result<WidgetId> {
        self.table_state(table)?;
        self.get(table, index)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn table_state(&self, table: WidgetId) -> Result<&TableLayout> {
        let node = self.existing(table)?;
        self.table_layout(table)
            .ok_or_else(|| LayoutError::invalid(format!("{} is not a table", node.widget_type())))
    }

    fn row_state(&self, row: WidgetId) -> Result<&RowLayout> {
        let node = self.existing(row)?;
        match node.arrangement() {
            Some(Arrangement::Row(layout)) => Ok(layout),
            _ => Err(LayoutError::invalid(format!("{} is not a table row", node.widget_type()))),
        }
    }

    /// Wrap `widget` in a new item and link it into `row` at `column`.
    fn push_item(&mut self, row: WidgetId, column: usize, widget: WidgetId, item: TableItem) -> WidgetId {
        let item = self.create(item);
        self.link(item, 0, widget, None, None);
        self.link(row, column, item, None, None);
        item
    }

    fn update_table(&mut self, table: WidgetId, f: impl FnOnce(&mut TableLayout)) -> Result<()> {
        self.table_state(table)?;
        if let Some(Arrangement::Table(layout)) = self.arrangement_mut(table) {
            f(layout);
        }
        self.graph.enqueue(Job::Arrange(table));
        self.flush();
        Ok(())
    }

    /// Change one column of the template and of every row that has it.
    fn update_column(&mut self, table: WidgetId, column: usize, f: impl Fn(&mut LayoutSlot)) {
        if let Some(Arrangement::Table(layout)) = self.arrangement_mut(table) {
            f(layout.column_mut(column));
        }
        for row in self.tree.children(table).to_vec() {
            if let Some(slot) = self.box_layout_mut(row).and_then(|b| b.slots.get_mut(column)) {
                f(slot);
                self.graph.enqueue(Job::Arrange(row));
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
