//! Dotted-path module: expression parsing and tree navigation.

pub mod eval;
pub mod parser;

pub use eval::{ensure, find, find_mut};
pub use parser::DotPath;
