//! Built-in widgets: Label, Button, EditBox, CheckBox, containers, box
//! layouts and tables.

pub mod boxes;
pub mod button;
pub mod check_box;
pub mod container;
pub mod edit_box;
pub mod label;
pub mod table;

pub use boxes::{HorizontalLayout, Spacer, VerticalLayout};
pub use button::Button;
pub use check_box::CheckBox;
pub use container::{Group, Panel};
pub use edit_box::EditBox;
pub use label::Label;
pub use table::{Table, TableItem, TableRow};
