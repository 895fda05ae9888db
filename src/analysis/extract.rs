//! Marker-based split of a model reply into its CSV and JSON parts.
//!
//! The split is purely textual: the first literal `CSV` and `JSON` in the reply
//! decide the boundaries, even when those words occur inside the data itself.

pub const CSV_MARKER: &str = "CSV";
pub const JSON_MARKER: &str = "JSON";

/// Text between the first `CSV` marker and the next `JSON` marker, trimmed.
///
/// Empty when the reply has no `CSV` marker. Without a later `JSON` marker the
/// whole remainder after `CSV` is returned.
pub fn extract_csv(reply: &str) -> &str {
    let Some(start) = reply.find(CSV_MARKER) else {
        return "";
    };
    let rest = &reply[start + CSV_MARKER.len()..];
    let end = rest.find(JSON_MARKER).unwrap_or(rest.len());
    rest[..end].trim()
}

/// Text after the first `JSON` marker, trimmed. Empty when there is none.
pub fn extract_json(reply: &str) -> &str {
    match reply.find(JSON_MARKER) {
        Some(start) => reply[start + JSON_MARKER.len()..].trim(),
        None => "",
    }
}
