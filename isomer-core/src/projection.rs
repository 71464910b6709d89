//! Depth-bounded canonical projection of values.
//!
//! A projection is a compact JSON-like string fingerprint used as the
//! matching key for unordered comparison. Object fields are sorted by name
//! so the projection never depends on enumeration order, and objects nested
//! deeper than the depth bound render as `{}` with their fields omitted
//! entirely. Arrays are transparent to the depth bound.

use std::fmt::Write;

use serde_json::Value;

/// Projects a value to its depth-bounded canonical string.
///
/// Pure and total: identical values always project to identical strings for
/// a fixed `max_depth`. With `max_depth = 0` only scalar data survives; each
/// additional level admits one more layer of object fields.
pub fn project(value: &Value, max_depth: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, max_depth);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, max_depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item, depth, max_depth);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            if depth < max_depth {
                let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
                entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
                for (i, (name, field)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    write_string(out, name.as_str());
                    out.push(':');
                    write_value(out, field, depth + 1, max_depth);
                }
            }
            out.push('}');
        }
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
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
