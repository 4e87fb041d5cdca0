//! Text escaping for element bodies and attribute values.

/// Escape text for use inside an element body.
///
/// Replaces `&`, `<` and `>` with their entity references. Each input
/// character is mapped exactly once, so entity references produced here are
/// never escaped again.
///
/// # Examples
///
/// ```
/// use sx_markup::escape_body;
///
/// assert_eq!(escape_body("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_body(r#""quoted""#), r#""quoted""#);
/// ```
pub fn escape_body(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        push_body_char(&mut result, c);
    }
    result
}

/// Escape text for use inside a double-quoted attribute value.
///
/// Applies the [`escape_body`] rules and additionally replaces `'` with
/// `&#39;` and `"` with `&quot;`.
///
/// # Examples
///
/// ```
/// use sx_markup::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"<&>'""#), "&lt;&amp;&gt;&#39;&quot;");
/// ```
pub fn escape_attribute(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' => result.push_str("&#39;"),
            '"' => result.push_str("&quot;"),
            _ => push_body_char(&mut result, c),
        }
    }
    result
}

fn push_body_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(c),
    }
}
