//! Dotted path expressions.
//!
//! A path like `a.b.0.c` addresses one element of a JSON tree. Segments are
//! produced by splitting on `.` with no trimming and no escaping, so a
//! literal dot cannot appear inside a segment. Every string is a legal path;
//! the empty string is the single empty-string segment.

use std::fmt;

/// A parsed dotted path. The final segment is held separately because every
/// editing verb treats it differently from the parent chain.
#[derive(Clone, Debug, PartialEq)]
pub struct DotPath {
    parents: Vec<String>,
    last: String,
}

impl DotPath {
    /// Parses a raw dotted path. Infallible: any input is a legal path.
    pub fn parse(raw: &str) -> Self {
        let mut segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        // split() yields at least one segment, even for "".
        let last = segments.pop().unwrap_or_default();
        DotPath {
            parents: segments,
            last,
        }
    }

    /// The segments leading to the parent of the addressed element.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// The final segment: the key or index the verbs act on.
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Total number of segments, final one included.
    pub fn len(&self) -> usize {
        self.parents.len() + 1
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for parent in &self.parents {
            write!(f, "{}.", parent)?;
        }
        write!(f, "{}", self.last)
    }
}
