//! XML text escaping for generated package parts.
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::fmt::Write;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// Control characters XML 1.0 cannot carry (everything below U+0020 except
/// tab, line feed and carriage return) are written as `_xHHHH_`, the OOXML
/// escape for them.
///
/// # Examples
///
/// ```
/// use md2pptx::ooxml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
pub fn escape_xml(s: &str) -> String {
    let escaped = XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]);
    if !escaped.contains(is_restricted_char) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for c in escaped.chars() {
        if is_restricted_char(c) {
            // Infallible for String
            let _ = write!(out, "_x{:04X}_", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}

fn is_restricted_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}')
}
