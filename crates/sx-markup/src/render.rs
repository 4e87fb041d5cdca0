//! Value to markup conversion.

use crate::escape::escape_body;
use crate::markup::Markup;
use crate::value::Value;

/// Render a value to markup.
///
/// - `Null` becomes empty markup
/// - `Markup` is returned as-is
/// - lists are rendered element by element and concatenated
/// - anything else is converted with [`Value::display_text`] and escaped
///
/// # Examples
///
/// ```
/// use sx_markup::{Markup, Value, render};
///
/// assert_eq!(render("a & b").as_str(), "a &amp; b");
/// assert_eq!(render(Markup::raw("<b>x</b>")).as_str(), "<b>x</b>");
/// assert_eq!(render(vec![Value::from(1), Value::Null, Value::from("2")]).as_str(), "12");
/// ```
pub fn render(value: impl Into<Value>) -> Markup {
    match value.into() {
        Value::Null => Markup::empty(),
        Value::Markup(markup) => markup,
        Value::List(items) => {
            let mut html = String::new();
            render_list_into(items, &mut html);
            Markup::raw(html)
        }
        leaf => Markup::raw(escape_body(&leaf.display_text())),
    }
}

/// Render children into an existing buffer.
pub(crate) fn render_into(value: Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::Markup(markup) => out.push_str(markup.as_str()),
        Value::List(items) => render_list_into(items, out),
        leaf => out.push_str(&escape_body(&leaf.display_text())),
    }
}

fn render_list_into(items: Vec<Value>, out: &mut String) {
    for item in items {
        render_into(item, out);
    }
}
