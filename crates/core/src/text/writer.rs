//! Rendering JsonValue trees back to JSON text.
//!
//! Two modes, matching the two verb families:
//! - document mode: the whole tree, always pretty-printed with a 2-space indent
//! - value mode: a single resolved value; containers honor the pretty flag,
//!   scalars render bare (strings without quotes) for shell-friendly output

use crate::value::{JsonObject, JsonValue, Number};

const INDENT: &str = "  ";

/// Renders the whole document tree, always pretty-printed.
pub fn render_document(root: &JsonValue) -> String {
    let mut out = String::new();
    write_value(&mut out, root, true, 0);
    out
}

/// Renders a single resolved value for `get` output. Containers render as
/// JSON, pretty when asked; scalars render as their bare textual form.
pub fn render_value(value: &JsonValue, pretty: bool) -> String {
    match value {
        // Bare string: no quotes, no escaping.
        JsonValue::String(s) => s.clone(),
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => {
            let mut out = String::new();
            write_value(&mut out, value, false, 0);
            out
        }
        JsonValue::Array(_) | JsonValue::Object(_) => {
            let mut out = String::new();
            write_value(&mut out, value, pretty, 0);
            out
        }
    }
}

fn write_value(out: &mut String, value: &JsonValue, pretty: bool, depth: usize) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Number(n) => write_number(out, n),
        JsonValue::String(s) => write_string(out, s),
        JsonValue::Array(items) => write_array(out, items, pretty, depth),
        JsonValue::Object(obj) => write_object(out, obj, pretty, depth),
    }
}

fn write_number(out: &mut String, n: &Number) {
    match n {
        Number::Int(i) => out.push_str(&i.to_string()),
        // {:?} keeps ".0" on integral floats, so 1.0 does not collapse to 1.
        Number::Float(f) => out.push_str(&format!("{:?}", f)),
    }
}

fn write_array(out: &mut String, items: &[JsonValue], pretty: bool, depth: usize) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    if pretty {
        out.push_str("[\n");
        for (i, item) in items.iter().enumerate() {
            push_indent(out, depth + 1);
            write_value(out, item, true, depth + 1);
            if i + 1 < items.len() {
                out.push(',');
            }
            out.push('\n');
        }
        push_indent(out, depth);
        out.push(']');
    } else {
        out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_value(out, item, false, 0);
        }
        out.push(']');
    }
}

fn write_object(out: &mut String, obj: &JsonObject, pretty: bool, depth: usize) {
    if obj.is_empty() {
        out.push_str("{}");
        return;
    }
    if pretty {
        out.push_str("{\n");
        let len = obj.len();
        for (i, (key, value)) in obj.iter().enumerate() {
            push_indent(out, depth + 1);
            write_string(out, key);
            out.push_str(": ");
            write_value(out, value, true, depth + 1);
            if i + 1 < len {
                out.push(',');
            }
            out.push('\n');
        }
        push_indent(out, depth);
        out.push('}');
    } else {
        out.push('{');
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_string(out, key);
            out.push(':');
            write_value(out, value, false, 0);
        }
        out.push('}');
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
