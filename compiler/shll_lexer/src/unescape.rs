//! Literal values from token text.

/// Value of a string token: quotes removed and each `\"` resolved to `"`.
/// Every other backslash is kept as written.
///
/// ```
/// assert_eq!(shll_lexer::string_value(r#""say \"hi\"\n""#), r#"say "hi"\n"#);
/// ```
pub fn string_value(text: &str) -> String {
    let inner = strip_delimiters(text, '"');
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'"') {
            chars.next();
            value.push('"');
        } else {
            value.push(ch);
        }
    }
    value
}

/// Payload of a character token: the text between the quotes, unresolved.
pub fn char_payload(text: &str) -> &str {
    strip_delimiters(text, '\'')
}

fn strip_delimiters(text: &str, quote: char) -> &str {
    let inner = text.strip_prefix(quote).unwrap_or(text);
    inner.strip_suffix(quote).unwrap_or(inner)
}
