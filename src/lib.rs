//! # gilt-layout
//!
//! A headless widget-container and layout engine.
//!
//! gilt-layout keeps a tree of widgets and their geometry current. Widgets
//! live in containers; containers either leave their children where the
//! caller put them or arrange them themselves (box layouts, tables). Any
//! position or size can be bound to an expression over other widgets'
//! geometry, such as `"50%"` or `"ok.right + 5"`, and is re-evaluated when
//! those sources change. Rendering is left to the host through a small
//! draw-command interface.
//!
//! ## Core Systems
//!
//! - **[`gui`]**: The [`Gui`](gui::Gui) engine: containers, bindings, tables and drawing
//! - **[`tree`]**: Slotmap-backed widget arena with parent/child links
//! - **[`layout`]**: Bound layout expressions: tokenizer, parser and evaluation
//! - **[`arrange`]**: Box partitioning and table stacking algorithms
//! - **[`reactive`]**: Dependency graph and job queue for change propagation
//! - **[`widget`]**: Widget trait and text measurement
//! - **[`widgets`]**: Built-in widgets: Label, Button, EditBox, CheckBox, Group, Panel, layouts, tables
//! - **[`config`]**: Engine configuration
//! - **[`error`]**: Error type shared by every fallible operation
//! - **[`geometry`]**: Point, Size, Rect, Spacing primitives
//! - **[`testing`]**: Tree dumps and a recording render target
//!
//! ## Example
//!
//! ```
//! use gilt_layout::gui::Gui;
//! use gilt_layout::geometry::{Point, Size};
//! use gilt_layout::widgets::Button;
//!
//! let mut gui = Gui::default();
//! let ok = gui.create(Button::new("OK"));
//! let cancel = gui.create(Button::new("Cancel"));
//! gui.add(gui.root(), ok, Some("ok")).unwrap();
//! gui.add(gui.root(), cancel, None).unwrap();
//!
//! gui.set_position(ok, (10.0, 10.0)).unwrap();
//! gui.set_position(cancel, ("ok.right + 5", "ok.top")).unwrap();
//! assert_eq!(gui.position(cancel).unwrap(), Point::new(55.0, 10.0));
//!
//! gui.set_size(ok, ("20%", "5%")).unwrap();
//! assert_eq!(gui.size(ok).unwrap(), Size::new(160.0, 30.0));
//! assert_eq!(gui.position(cancel).unwrap(), Point::new(175.0, 10.0));
//! ```

// Foundation
pub mod config;
pub mod error;
pub mod geometry;

// Layout values and algorithms
pub mod arrange;
pub mod layout;

// Widget system
pub mod tree;
pub mod widget;
pub mod widgets;

// Change propagation
pub mod reactive;

// Engine
pub mod gui;

// Test helpers
pub mod testing;
