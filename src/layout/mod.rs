//! Bound layout values: expression strings, evaluation, `bind_*` helpers.

pub mod parser;
pub mod tokenizer;
pub mod value;

pub use parser::ParseError;
pub use value::{
    bind_bottom, bind_height, bind_left, bind_position, bind_right, bind_size, bind_top,
    bind_width, Axis, BinaryOp, Expr, Layout, Layout2d, Property, SourceResolver, Target,
};
