//! Finished HTML fragments.

use std::fmt;

/// A finished fragment of HTML.
///
/// The payload is final: it has already been escaped where needed and is
/// never escaped or parsed again by the renderer. Embedding a `Markup` inside
/// another node copies its text verbatim.
///
/// `Markup::raw` is the only way to introduce unescaped text, so the caller
/// is responsible for its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Markup(String);

impl Markup {
    /// Wrap text that is already valid markup.
    ///
    /// # Examples
    ///
    /// ```
    /// use sx_markup::{Markup, render};
    ///
    /// let doctype = Markup::raw("<!DOCTYPE html>");
    /// assert_eq!(render(doctype).as_str(), "<!DOCTYPE html>");
    /// ```
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Markup with an empty payload.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// The HTML text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the markup and return the HTML text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Markup: Send, Sync);

    #[test]
    fn test_display_is_payload() {
        let markup = Markup::raw("<b>bold</b>");
        assert_eq!(markup.to_string(), "<b>bold</b>");
        assert_eq!(markup.as_str(), "<b>bold</b>");
    }

    #[test]
    fn test_empty() {
        let markup = Markup::empty();
        assert!(markup.is_empty());
        assert_eq!(markup.len(), 0);
        assert_eq!(markup, Markup::default());
    }

    #[test]
    fn test_into_string() {
        let html: String = Markup::raw("<br/>").into();
        assert_eq!(html, "<br/>");
    }
}
