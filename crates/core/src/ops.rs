//! The four editing verbs: get, replace, add, del.
//!
//! Each verb resolves the parent chain of the path and then applies its own
//! policy to the final segment. Misses are never errors: a verb that finds
//! nothing to do reports that and leaves the tree alone, and the caller
//! still serializes whatever state the tree is in.

use crate::path::eval::{array_index, ensure, find, find_mut};
use crate::path::DotPath;
use crate::value::JsonValue;

/// Resolves `path` and returns the addressed value, or `None` when any part
/// of the path does not resolve.
pub fn get<'a>(root: &'a JsonValue, path: &DotPath) -> Option<&'a JsonValue> {
    let parent = find(root, path.parents())?;
    match parent {
        JsonValue::Object(obj) => obj.get(path.last()),
        JsonValue::Array(items) => {
            let idx = array_index(path.last(), items.len())?;
            Some(&items[idx])
        }
        _ => None,
    }
}

/// Overwrites the value at `path` with `value`. Replace never creates: the
/// parent chain must resolve and the final key or index must already exist.
/// Returns whether the tree was written to.
pub fn replace(root: &mut JsonValue, path: &DotPath, value: JsonValue) -> bool {
    let Some(parent) = find_mut(root, path.parents()) else {
        return false;
    };
    match parent {
        JsonValue::Object(obj) => match obj.get_mut(path.last()) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        },
        JsonValue::Array(items) => match array_index(path.last(), items.len()) {
            Some(idx) => {
                items[idx] = value;
                true
            }
            None => false,
        },
        _ => false,
    }
}

/// Sets `path` to `value`, materializing missing parent containers on the
/// way down (see [`ensure`] for the array append rule). The write itself
/// only happens when the materialized parent is an object; anything else is
/// a no-op. Returns whether the tree was written to.
pub fn add(root: &mut JsonValue, path: &DotPath, value: JsonValue) -> bool {
    let Some(parent) = ensure(root, path.parents()) else {
        return false;
    };
    match parent {
        JsonValue::Object(obj) => {
            obj.insert(path.last().to_string(), value);
            true
        }
        _ => false,
    }
}

/// Removes the element at `path`: an object key, or an in-range array index
/// (later elements shift left). Returns whether anything was removed.
pub fn del(root: &mut JsonValue, path: &DotPath) -> bool {
    let Some(parent) = find_mut(root, path.parents()) else {
        return false;
    };
    match parent {
        JsonValue::Object(obj) => obj.remove(path.last()).is_some(),
        JsonValue::Array(items) => match array_index(path.last(), items.len()) {
            Some(idx) => {
                items.remove(idx);
                true
            }
            None => false,
        },
        _ => false,
    }
}
