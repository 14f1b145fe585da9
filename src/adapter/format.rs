use std::fmt::Write;

use serde_json::Value;

use crate::domain::Message;

/// Character limit applied when deriving a title from a formatted message.
pub const TITLE_LIMIT: usize = 100;

/// Render a payload into the message string sent to the notifier.
///
/// JSON-capable payloads contribute their JSON verbatim, structural payloads
/// are dumped verbosely and plain text passes through untouched. Exception
/// payloads never reach the formatter through `Logger::log`; called directly,
/// they fall back to their display form.
pub fn format_message(message: &Message) -> String {
    match message {
        Message::Exception(exception) => exception.to_string(),
        Message::Json(payload) => payload.to_json(),
        Message::Structured(payload) => dump_value(&payload.to_structure()),
        Message::Value(value) => dump_value(value),
        Message::Text(text) => text.clone(),
    }
}

/// Verbose, human-readable dump of a structural value: one key/value pair per
/// line, nested structures indented. Not a compact serialization.
pub fn dump_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    let pad = "    ".repeat(indent + 1);
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (key, entry) in map {
                out.push_str(&pad);
                let _ = write!(out, "{key:?}: ");
                write_value(out, entry, indent + 1);
                out.push_str(",\n");
            }
            out.push_str(&"    ".repeat(indent));
            out.push('}');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for entry in items {
                out.push_str(&pad);
                write_value(out, entry, indent + 1);
                out.push_str(",\n");
            }
            out.push_str(&"    ".repeat(indent));
            out.push(']');
        }
        // Scalars render as their JSON form (null, true, 1, "text")
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}

/// Truncate to at most `limit` characters, appending `...` when something was
/// cut. Safe on multi-byte input.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
