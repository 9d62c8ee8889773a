//! Arrangement strategies: how a container positions its children.
//!
//! A widget node is a container exactly when it carries an [`Arrangement`].

pub mod boxes;
pub mod table;

pub use boxes::{fit_content, BoxLayout, LayoutSlot, Orientation, Placement};
pub use table::{HorizontalAlign, ItemLayout, RowLayout, Stripe, TableLayout};

/// The container capability of a widget node.
#[derive(Debug, Clone, PartialEq)]
pub enum Arrangement {
    /// Children keep their own positions and sizes.
    Free,
    /// Children partition the main axis.
    Box(BoxLayout),
    /// Header plus stacked rows.
    Table(TableLayout),
    /// A table row: a horizontal box of items.
    Row(RowLayout),
    /// A table cell holding a single aligned widget.
    Item(ItemLayout),
}

impl Arrangement {
    /// Short name used in diagnostics and dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            Arrangement::Free => "free",
            Arrangement::Box(b) => match b.orientation {
                Orientation::Horizontal => "hbox",
                Orientation::Vertical => "vbox",
            },
            Arrangement::Table(_) => "table",
            Arrangement::Row(_) => "row",
            Arrangement::Item(_) => "item",
        }
    }

    /// Per-child slots, if this arrangement keeps them.
    pub fn slots(&self) -> Option<&[LayoutSlot]> {
        match self {
            Arrangement::Box(b) => Some(&b.slots),
            Arrangement::Row(row) => Some(&row.columns.slots),
            _ => None,
        }
    }

    /// Mutable access to the box partition, if any.
    pub fn box_layout_mut(&mut self) -> Option<&mut BoxLayout> {
        match self {
            Arrangement::Box(b) => Some(b),
            Arrangement::Row(row) => Some(&mut row.columns),
            _ => None,
        }
    }

    /// Shared access to the box partition, if any.
    pub fn box_layout(&self) -> Option<&BoxLayout> {
        match self {
            Arrangement::Box(b) => Some(b),
            Arrangement::Row(row) => Some(&row.columns),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Arrangement::Free.kind(), "free");
        assert_eq!(Arrangement::Box(BoxLayout::new(Orientation::Vertical)).kind(), "vbox");
        assert_eq!(Arrangement::Row(RowLayout::new()).kind(), "row");
    }

    #[test]
    fn row_exposes_columns_as_slots() {
        let mut row = Arrangement::Row(RowLayout::new());
        if let Some(b) = row.box_layout_mut() {
            b.slots.push(LayoutSlot::fixed(10.0));
        }
        assert_eq!(row.slots(), Some(&[LayoutSlot::fixed(10.0)][..]));
        assert!(Arrangement::Free.slots().is_none());
    }
}
