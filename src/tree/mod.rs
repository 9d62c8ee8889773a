//! Widget arena: slotmap-backed tree of widget nodes.

pub mod node;
#[allow(clippy::module_inception)]
pub mod tree;

pub use node::{Bindings, WidgetId, WidgetNode};
pub use tree::WidgetTree;
