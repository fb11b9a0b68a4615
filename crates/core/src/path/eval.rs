//! Path navigation over JsonValue trees.
//!
//! Two resolution modes:
//! - [`find`] / [`find_mut`]: read-only lookup, `None` on the first mismatch
//! - [`ensure`]: materializing creation, inserting missing containers on the
//!   way down (used by `add`)

use crate::value::{JsonObject, JsonValue};

/// Interprets `segment` as an index into an array of length `len`: the
/// segment must be all decimal digits and the index strictly in bounds.
pub(crate) fn array_index(segment: &str, len: usize) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let idx: usize = segment.parse().ok()?;
    (idx < len).then_some(idx)
}

/// Walks `segments` down from `root`, read-only. Returns the addressed node,
/// or `None` at the first missing key, out-of-range index, or scalar in the
/// way; remaining segments are not examined. An empty segment list addresses
/// the root itself.
pub fn find<'a>(root: &'a JsonValue, segments: &[String]) -> Option<&'a JsonValue> {
    let mut cur = root;
    for segment in segments {
        cur = match cur {
            JsonValue::Object(obj) => obj.get(segment)?,
            JsonValue::Array(items) => {
                let idx = array_index(segment, items.len())?;
                &items[idx]
            }
            _ => return None,
        };
    }
    Some(cur)
}

/// Mutable twin of [`find`], for the verbs that edit in place.
pub fn find_mut<'a>(root: &'a mut JsonValue, segments: &[String]) -> Option<&'a mut JsonValue> {
    let mut cur = root;
    for segment in segments {
        cur = match cur {
            JsonValue::Object(obj) => obj.get_mut(segment)?,
            JsonValue::Array(items) => {
                let idx = array_index(segment, items.len())?;
                &mut items[idx]
            }
            _ => return None,
        };
    }
    Some(cur)
}

/// Walks `segments` down from `root`, creating what is missing:
/// - a missing object key gets an empty object inserted;
/// - on arrays, an existing index descends into it, while a non-numeric or
///   out-of-range segment APPENDS a fresh empty object and descends into
///   that — the requested index is not honored positionally (contract);
/// - a scalar in the way stops the walk with `None` (a path cannot be
///   materialized through a scalar).
///
/// Returns the final container node, i.e. the parent of the element the
/// caller is about to write.
pub fn ensure<'a>(root: &'a mut JsonValue, segments: &[String]) -> Option<&'a mut JsonValue> {
    let mut cur = root;
    for segment in segments {
        cur = match cur {
            JsonValue::Object(obj) => {
                obj.get_or_insert(segment, JsonValue::Object(JsonObject::new()))
            }
            JsonValue::Array(items) => match array_index(segment, items.len()) {
                Some(idx) => &mut items[idx],
                None => {
                    items.push(JsonValue::Object(JsonObject::new()));
                    let last = items.len() - 1;
                    &mut items[last]
                }
            },
            _ => return None,
        };
    }
    Some(cur)
}
