// text.rs — Display-string truncation.
//
// Truncation is character-based, never byte-based, so multi-byte UTF-8
// content is never split mid-code-point.

/// Marker appended to truncated text.
const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_length` characters.
///
/// Text at or under the limit is returned unchanged. Longer text is cut to
/// `max_length - 3` characters followed by `"..."`, so the output is exactly
/// `max_length` characters long. A `max_length` under 4 leaves no room for
/// the marker; the text is hard-cut to `max_length` characters instead.
/// This function never panics.
///
/// # Example
///
/// ```
/// use keel_common::truncate_text;
///
/// assert_eq!(truncate_text("Hello World", 8), "Hello...");
/// assert_eq!(truncate_text("Hi", 10), "Hi");
/// ```
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    if max_length <= ELLIPSIS.len() {
        return text.chars().take(max_length).collect();
    }
    let prefix: String = text.chars().take(max_length - ELLIPSIS.len()).collect();
    format!("{}{}", prefix, ELLIPSIS)
}
