//! String helpers shared by the formatter and log statements.

/// Shorten `s` to at most `max_bytes`, backing up to the previous UTF-8
/// character boundary. Used to keep log lines about long queries readable.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Returns `Some(trimmed)` when the value has visible content.
///
/// Upstream sources hand back `""` for missing fields as often as they omit
/// them, so both collapse to `None`.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
