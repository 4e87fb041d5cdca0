//! Props passed to elements and components.

use indexmap::IndexMap;

use crate::value::Value;

/// Reserved prop name carrying nested content.
pub const CHILDREN: &str = "children";

/// Named values passed to a node, plus its children.
///
/// Attributes keep insertion order, which is also the order they are written
/// out for tags. Children live in a separate field: setting a prop named
/// [`CHILDREN`] stores the value there, so children are never written as an
/// HTML attribute.
///
/// # Examples
///
/// ```
/// use sx_markup::{Props, Value};
///
/// let props = Props::new()
///     .with("class", "note")
///     .with("children", "text");
///
/// assert_eq!(props.len(), 1);
/// assert_eq!(props.children(), &Value::from("text"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    attributes: IndexMap<String, Value>,
    children: Value,
}

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Props::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`Props::set_children`].
    #[must_use]
    pub fn with_children(mut self, children: impl Into<Value>) -> Self {
        self.children = children.into();
        self
    }

    /// Set a prop, returning the previous value if there was one.
    ///
    /// Replacing an existing attribute keeps its original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        if name == CHILDREN {
            let previous = std::mem::replace(&mut self.children, value);
            return (!previous.is_null()).then_some(previous);
        }
        self.attributes.insert(name, value)
    }

    /// Replace the children.
    pub fn set_children(&mut self, children: impl Into<Value>) {
        self.children = children.into();
    }

    /// Look up a prop by name. [`CHILDREN`] returns the children.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        if name == CHILDREN {
            return Some(&self.children);
        }
        self.attributes.get(name)
    }

    /// Display text of a prop, or an empty string if it is not set.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.get(name)
            .map(|value| value.display_text().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn children(&self) -> &Value {
        &self.children
    }

    /// Take the children, leaving [`Value::Null`] in their place.
    pub fn take_children(&mut self) -> Value {
        std::mem::take(&mut self.children)
    }

    #[must_use]
    pub fn into_children(self) -> Value {
        self.children
    }

    /// Attributes in insertion order. Children are not included.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of attributes, not counting children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (name, value) in iter {
            props.set(name, value);
        }
        props
    }
}

impl<K, V> Extend<(K, V)> for Props
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
