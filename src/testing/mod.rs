//! Headless testing helpers: tree dumps, text rendering, recorded draws.
//!
//! Use [`dump_tree`] for snapshot-style assertions on geometry, and
//! [`RecordingTarget`] to inspect the commands [`Gui::draw`](crate::gui::Gui::draw)
//! emits.

pub mod recorder;
pub mod snapshot;

pub use recorder::RecordingTarget;
pub use snapshot::{commands_to_string, dump_tree, render_to_string};
