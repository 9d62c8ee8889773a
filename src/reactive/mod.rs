//! Change propagation for bound layouts.
//!
//! - [`DependencyGraph`]: who reads which `(widget, property)`.
//! - [`Job`]: queued re-evaluation or re-arrangement work.

pub mod graph;

pub use graph::{DependencyGraph, Field, Job};
