//! dotjson core - JSON value model, dotted-path navigation and mutation engine.
//!
//! This crate provides everything the `dotjson` CLI does to a document:
//!
//! - `JsonValue`: the JSON tree with insertion-ordered object keys and
//!   integer/float-preserving numbers
//! - `text`: parsing JSON text and rendering it back (compact, pretty, and
//!   the bare-scalar value mode used by `get`)
//! - `DotPath`: dotted path expressions (`a.b.0.c`)
//! - `path`: read-only lookup and materializing creation over the tree
//! - `ops`: the four editing verbs — get, replace, add, del
//!
//! # Example
//!
//! ```rust
//! use dotjson_core::{ops, text, DotPath};
//!
//! let mut doc = text::parse(r#"{"user":{"name":"Alice"}}"#).unwrap();
//!
//! // Read a value out.
//! let name = ops::get(&doc, &DotPath::parse("user.name"));
//! assert_eq!(name.and_then(|v| v.as_str()), Some("Alice"));
//!
//! // Add a value, creating intermediate objects as needed.
//! ops::add(&mut doc, &DotPath::parse("user.age"), text::parse("25").unwrap());
//!
//! // Delete one and re-render the document.
//! ops::del(&mut doc, &DotPath::parse("user.name"));
//! assert_eq!(text::render_document(&doc), "{\n  \"user\": {\n    \"age\": 25\n  }\n}");
//! ```

pub mod ops;
pub mod path;
pub mod text;
mod value;

pub use path::DotPath;
pub use text::ParseError;
pub use value::{JsonObject, JsonValue, Number};
