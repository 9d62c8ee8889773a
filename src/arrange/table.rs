//! Table composition: a header row and striped data rows of aligned items.
//!
//! Rows are horizontal [`BoxLayout`]s whose children are [`ItemLayout`]
//! containers; each item holds exactly one widget and aligns it inside the
//! cell.

use crate::geometry::{Point, Size, Spacing};

use super::boxes::{BoxLayout, LayoutSlot, Orientation};

/// Horizontal alignment of a widget inside a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Background class of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    /// Stripe for the data row at `index`.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }
}

/// State of a table container.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Minimum height of every row.
    pub row_height: f32,
    /// Gap between the header and the first row, and between rows.
    pub separator: f32,
    /// Whether data rows alternate [`Stripe::Even`] / [`Stripe::Odd`].
    pub striped: bool,
    /// Default alignment for newly created items.
    pub align: HorizontalAlign,
    /// Column slots copied into the header and every new row.
    pub columns: Vec<LayoutSlot>,
}

impl TableLayout {
    pub fn new(row_height: f32, separator: f32) -> Self {
        Self {
            row_height,
            separator,
            striped: false,
            align: HorizontalAlign::Left,
            columns: Vec::new(),
        }
    }

    /// Mutable column slot, growing the template with default slots as needed.
    pub fn column_mut(&mut self, column: usize) -> &mut LayoutSlot {
        if self.columns.len() <= column {
            self.columns.resize(column + 1, LayoutSlot::default());
        }
        &mut self.columns[column]
    }

    /// Height of a row given its custom (content-driven) height.
    pub fn row_extent(&self, custom_height: f32) -> f32 {
        self.row_height.max(custom_height)
    }

    /// Vertical offsets for a header (if any) followed by rows of the given
    /// heights.
    ///
    /// Returns `(header_top, row_tops)`.
    pub fn stack(&self, header: Option<f32>, rows: &[f32]) -> (Option<f32>, Vec<f32>) {
        let mut y = 0.0;
        let header_top = header.map(|height| {
            y = height + self.separator;
            0.0
        });
        let tops = rows
            .iter()
            .map(|height| {
                let top = y;
                y += height + self.separator;
                top
            })
            .collect();
        (header_top, tops)
    }
}

/// State of one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// Column partition of the row.
    pub columns: BoxLayout,
    /// Largest full height among items added with a fixed height.
    pub custom_height: f32,
    /// Alignment used for items that do not specify one.
    pub align: HorizontalAlign,
    /// Background class; `None` for the header and for unstriped tables.
    pub stripe: Option<Stripe>,
    /// Whether this row is the table header.
    pub header: bool,
}

impl RowLayout {
    pub fn new() -> Self {
        Self {
            columns: BoxLayout::new(Orientation::Horizontal),
            custom_height: 0.0,
            align: HorizontalAlign::Left,
            stripe: None,
            header: false,
        }
    }

    /// Copy the column slots of `template`, keeping this row's extra columns.
    pub fn copy_columns(&mut self, template: &[LayoutSlot]) {
        for (slot, source) in self.columns.slots.iter_mut().zip(template) {
            *slot = *source;
        }
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    pub align: HorizontalAlign,
    /// Whether the item's height contributes to the row's custom height.
    pub fixed_height: bool,
}

impl ItemLayout {
    pub fn new(align: HorizontalAlign) -> Self {
        Self { align, fixed_height: false }
    }

    /// Position of a widget with the given size and decoration inside a cell
    /// of size `cell`.
    ///
    /// The widget is aligned horizontally per `align` and centered vertically;
    /// alignment uses the decorated (full) size and the result is shifted by
    /// the content offset.
    pub fn place(&self, cell: Size, size: Size, decoration: Spacing) -> Point {
        let full = size + decoration.total();
        let x = match self.align {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Center => (cell.width - full.width) / 2.0,
            HorizontalAlign::Right => cell.width - full.width,
        };
        let y = (cell.height - full.height) / 2.0;
        Point::new(x, y) + decoration.offset()
    }
}
