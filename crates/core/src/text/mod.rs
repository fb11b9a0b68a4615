//! JSON text module: parsing documents and rendering them back out.

pub mod parser;
pub mod writer;

pub use parser::{parse, ParseError};
pub use writer::{render_document, render_value};
