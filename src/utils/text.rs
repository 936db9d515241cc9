use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_SPACING_REGEX: Regex = Regex::new(r"\s*(<[^>]+>)\s*").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize markup whitespace so two renderings can be compared.
///
/// Whitespace around tags is dropped and any remaining run of whitespace
/// becomes a single space. Nothing in this crate normalizes its own output,
/// so use this when comparing markup.
pub fn normalize_html(html: &str) -> String {
    let html = TAG_SPACING_REGEX.replace_all(html, "$1");
    let html = WHITESPACE_REGEX.replace_all(&html, " ");
    html.trim().to_string()
}
