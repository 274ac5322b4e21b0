//! Link URL sanitizing.
//!
//! A URL is kept when it starts with an allowed scheme (`http`, `https`, `ftp`, `ftps`,
//! `mailto`), with something that cannot start a scheme (`/`, `#`, `?`, a digit, ...), or with a
//! scheme-like run of letters that is not actually followed by `:`. Anything else, most notably
//! `javascript:`, becomes [`UNSAFE_URL_FALLBACK`].
//!
//! This blocks script injection through the `href` attribute. It is not a URL validator:
//! malformed URLs with a safe scheme pass through unchanged.

use regex::Regex;
use ryu_js::Buffer;
use serde_json::Value;
use std::sync::OnceLock;

/// Returned in place of an unsafe URL.
pub const UNSAFE_URL_FALLBACK: &str = "#";

// Case folding is restricted to ASCII so that non-ASCII letters (e.g. U+017F) are never treated
// as scheme characters.
fn safe_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(?i-u:https?|ftps?|mailto):|[^a-zA-Z]|[a-zA-Z+.\-]+(?:[^a-zA-Z+.:\-]|$))")
            .expect("valid regex")
    })
}

/// Characters browsers ignore when sniffing a scheme (`java\tscript:`).
fn is_attribute_whitespace(ch: char) -> bool {
    matches!(ch,
        '\u{0000}'..='\u{0020}'
        | '\u{00A0}'
        | '\u{1680}'
        | '\u{180E}'
        | '\u{2000}'..='\u{2029}'
        | '\u{205F}'
        | '\u{3000}'
    )
}

fn strip_attribute_whitespace(url: &str) -> String {
    url.chars().filter(|&ch| !is_attribute_whitespace(ch)).collect()
}

/// Returns `true` if `url` is safe to put into an `href`.
pub fn is_safe_url(url: &str) -> bool {
    safe_url_regex().is_match(&strip_attribute_whitespace(url))
}

/// Returns `url` unchanged if it is safe, [`UNSAFE_URL_FALLBACK`] otherwise.
///
/// The check runs on a copy with whitespace and control characters removed, but the returned
/// string is always the original input.
pub fn ensure_safe_url(url: &str) -> String {
    if is_safe_url(url) {
        return url.to_string();
    }
    tracing::debug!(url, "replacing unsafe link url");
    UNSAFE_URL_FALLBACK.to_string()
}

/// [`ensure_safe_url`] for loosely typed input (for example a value read from config or a
/// clipboard payload), converted to a string the way JavaScript's `String(value)` does.
///
/// `null` becomes the string `"null"`, which is a bare scheme-like word and therefore kept.
pub fn ensure_safe_url_value(url: &Value) -> String {
    ensure_safe_url(&to_js_string(url))
}

/// JavaScript `String(value)` for JSON values.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Buffer::new().format(f).to_string(),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // `Array.prototype.join` renders null and undefined elements as empty strings.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
