//! Indented JSON rendering with optional colors

use serde_json::Value as JsonValue;

use super::terminal::{colors, Palette};

/// Indentation width, matching `serde_json::to_string_pretty`
const INDENT: usize = 2;

/// Pretty-print `value`. With a plain palette the result is identical to
/// `serde_json::to_string_pretty`.
pub fn format_json(value: &JsonValue, palette: &Palette) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, palette);
    out
}

fn write_value(out: &mut String, value: &JsonValue, depth: usize, palette: &Palette) {
    match value {
        JsonValue::Null => out.push_str(&palette.bold("null", colors::GREY)),
        JsonValue::Bool(b) => out.push_str(&palette.colorize(&b.to_string(), colors::ORANGE)),
        JsonValue::Number(n) => out.push_str(&palette.number(&n.to_string())),
        JsonValue::String(s) => out.push_str(&palette.value(&quote(s))),
        JsonValue::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                write_value(out, item, depth + 1, palette);
            }
            newline(out, depth);
            out.push(']');
        }
        JsonValue::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                out.push_str(&palette.key(&quote(key)));
                out.push_str(": ");
                write_value(out, item, depth + 1, palette);
            }
            newline(out, depth);
            out.push('}');
        }
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(depth * INDENT));
}

/// JSON string literal with escapes
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}
