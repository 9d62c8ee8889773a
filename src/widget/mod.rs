//! Widget system: content trait and text measurement.

pub mod text;
pub mod traits;

pub use text::{MonospaceMeasure, TextMeasure};
pub use traits::Widget;
