//! Renderable values.
//!
//! [`Value`] is what children and prop values are made of. Conversions from
//! the common Rust types are provided so call sites can pass strings,
//! numbers, options and vectors directly.

use std::borrow::Cow;

use crate::markup::Markup;

/// A value that can be rendered as a child or used as a prop.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    /// No value. Renders as nothing.
    #[default]
    Null,
    /// Finished markup, inserted verbatim.
    Markup(Markup),
    /// A sequence, rendered element by element.
    List(Vec<Value>),
    /// Plain text, escaped on render.
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the text of a [`Value::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Unescaped display text of the value.
    ///
    /// This is the conversion used for attribute values and for leaf
    /// children before escaping:
    ///
    /// - `Null` is empty
    /// - `Markup` is its HTML text
    /// - `List` joins the text of its elements with `,`
    /// - `Int` and `Bool` use their standard form
    /// - `Float` uses the shortest round-trip form, with `NaN`, `Infinity`,
    ///   `-Infinity`, and `0` for negative zero
    ///
    /// # Examples
    ///
    /// ```
    /// use sx_markup::Value;
    ///
    /// assert_eq!(Value::from(1.0).display_text(), "1");
    /// assert_eq!(Value::from(vec![1, 2, 3]).display_text(), "1,2,3");
    /// assert_eq!(Value::from(()).display_text(), "");
    /// ```
    #[must_use]
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Markup(markup) => Cow::Borrowed(markup.as_str()),
            Self::List(items) => Cow::Owned(
                items
                    .iter()
                    .map(Value::display_text)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Self::Text(text) => Cow::Borrowed(text),
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Float(n) => Cow::Owned(float_text(*n)),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }
}

#[allow(clippy::float_cmp)]
fn float_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if value == 0.0 {
        // Covers -0.0 as well.
        "0".to_owned()
    } else {
        value.to_string()
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Markup> for Value {
    fn from(markup: Markup) -> Self {
        Self::Markup(markup)
    }
}

impl From<&Markup> for Value {
    fn from(markup: &Markup) -> Self {
        Self::Markup(markup.clone())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(text: Cow<'_, str>) -> Self {
        Self::Text(text.into_owned())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! from_lossless_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )+
    };
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Int)
                }
            }
        )+
    };
}

from_wide_int!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "serde")]
mod de {
    use std::fmt;

    use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};

    use super::Value;

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("null, a boolean, a number, a string or a sequence")
        }

        fn visit_unit<E>(self) -> Result<Value, E> {
            Ok(Value::Null)
        }

        fn visit_none<E>(self) -> Result<Value, E> {
            Ok(Value::Null)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
            Value::deserialize(deserializer)
        }

        fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
            Ok(Value::Bool(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
            Ok(Value::Int(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
            Ok(Value::from(v))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
            Ok(Value::Float(v))
        }

        fn visit_str<E>(self, v: &str) -> Result<Value, E> {
            Ok(Value::from(v))
        }

        fn visit_string<E>(self, v: String) -> Result<Value, E> {
            Ok(Value::Text(v))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element()? {
                items.push(item);
            }
            Ok(Value::List(items))
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Value: Send, Sync);

    #[test]
    fn test_absent_values_are_null() {
        assert!(Value::from(()).is_null());
        assert!(Value::from(None::<&str>).is_null());
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_option_some_converts_inner() {
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_owned()));
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }

    #[test]
    fn test_display_text_leaves() {
        assert_eq!(Value::from("a<b").display_text(), "a<b");
        assert_eq!(Value::from(123).display_text(), "123");
        assert_eq!(Value::from(-7_i64).display_text(), "-7");
        assert_eq!(Value::from(true).display_text(), "true");
        assert_eq!(Value::from(false).display_text(), "false");
        assert_eq!(Value::from('x').display_text(), "x");
    }

    #[test]
    fn test_display_text_floats() {
        assert_eq!(Value::from(1.5).display_text(), "1.5");
        assert_eq!(Value::from(2.0).display_text(), "2");
        assert_eq!(Value::from(-0.0).display_text(), "0");
        assert_eq!(Value::from(f64::NAN).display_text(), "NaN");
        assert_eq!(Value::from(f64::INFINITY).display_text(), "Infinity");
        assert_eq!(Value::from(f64::NEG_INFINITY).display_text(), "-Infinity");
    }

    #[test]
    fn test_display_text_list_joins_with_commas() {
        let value = Value::from(vec![Value::from(1), Value::from(vec!["a", "b"]), Value::Null]);
        assert_eq!(value.display_text(), "1,a,b,");
    }

    #[test]
    fn test_display_text_markup_is_payload() {
        assert_eq!(Value::from(Markup::raw("<i>x</i>")).display_text(), "<i>x</i>");
    }

    #[test]
    fn test_wide_ints_fall_back_to_text() {
        assert_eq!(Value::from(42_usize), Value::Int(42));
        assert_eq!(
            Value::from(u64::MAX),
            Value::Text("18446744073709551615".to_owned())
        );
    }

    #[test]
    fn test_collect_into_list() {
        let value: Value = (1..=3).collect();
        assert_eq!(value, Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
        assert_eq!(value.as_list().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("t").as_text(), Some("t"));
        assert_eq!(Value::from(5).as_int(), Some(5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(5).as_text(), None);
    }
}
