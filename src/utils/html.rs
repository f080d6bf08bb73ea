//! HTML escaping for user-entered values

use std::borrow::Cow;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Escape a value, substituting `-` when it is blank
pub fn escape_or_dash(input: &str) -> Cow<'_, str> {
    if input.trim().is_empty() {
        Cow::Borrowed("-")
    } else {
        escape(input)
    }
}
