//! Table widgets: Table, TableRow and TableItem.
//!
//! These are thin shells over the [`TableLayout`], [`RowLayout`] and
//! [`ItemLayout`] arrangements; the table operations on
//! [`Gui`](crate::gui::Gui) build the row/item structure for you.

use std::any::Any;

use crate::arrange::{Arrangement, HorizontalAlign, ItemLayout, RowLayout, TableLayout};
use crate::config::GuiConfig;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A header row and data rows stacked vertically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    row_height: Option<f32>,
    separator: Option<f32>,
    striped: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the configured minimum row height (builder).
    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = Some(row_height);
        self
    }

    /// Override the configured separator thickness (builder).
    pub fn with_separator(mut self, separator: f32) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Alternate the background class of data rows (builder).
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }
}

impl Widget for Table {
    fn widget_type(&self) -> &str {
        "Table"
    }

    fn arrangement(&self, config: &GuiConfig) -> Option<Arrangement> {
        let mut table = TableLayout::new(
            self.row_height.unwrap_or(config.row_height),
            self.separator.unwrap_or(config.separator),
        );
        table.striped = self.striped;
        Some(Arrangement::Table(table))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// TableRow
// ---------------------------------------------------------------------------

/// One row of a table: a horizontal box of [`TableItem`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    header: bool,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn header() -> Self {
        Self { header: true }
    }
}

impl Widget for TableRow {
    fn widget_type(&self) -> &str {
        if self.header {
            "TableHeader"
        } else {
            "TableRow"
        }
    }

    fn arrangement(&self, _config: &GuiConfig) -> Option<Arrangement> {
        let mut row = RowLayout::new();
        row.header = self.header;
        Some(Arrangement::Row(row))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// TableItem
// ---------------------------------------------------------------------------

/// A table cell holding a single widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableItem {
    align: HorizontalAlign,
    fixed_height: bool,
}

impl TableItem {
    pub fn new(align: HorizontalAlign) -> Self {
        Self { align, fixed_height: false }
    }

    /// Let the held widget's height raise the row height (builder).
    pub fn fixed_height(mut self, fixed_height: bool) -> Self {
        self.fixed_height = fixed_height;
        self
    }
}

impl Widget for TableItem {
    fn widget_type(&self) -> &str {
        "TableItem"
    }

    fn arrangement(&self, _config: &GuiConfig) -> Option<Arrangement> {
        let mut item = ItemLayout::new(self.align);
        item.fixed_height = self.fixed_height;
        Some(Arrangement::Item(item))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
