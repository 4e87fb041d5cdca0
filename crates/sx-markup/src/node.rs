//! Node construction: tags and components.

use std::fmt::{self, Write};

use crate::escape::escape_attribute;
use crate::markup::Markup;
use crate::props::Props;
use crate::render::{render, render_into};
use crate::value::Value;

/// Elements that never have a body or closing tag.
///
/// <https://html.spec.whatwg.org/multipage/syntax.html#void-elements>
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns `true` if `tag` is a void element.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// A function from props to renderable output.
///
/// Implemented for every `Fn(Props) -> R` where `R` converts into a
/// [`Value`], so components usually return [`Markup`] but may also return
/// lists or plain values. Whatever they return is passed through
/// [`render`].
///
/// Children arrive unrendered in [`Props::children`]; a component decides
/// whether and where to render them.
pub trait Component {
    fn invoke(&self, props: Props) -> Value;
}

impl<F, R> Component for F
where
    F: Fn(Props) -> R,
    R: Into<Value>,
{
    fn invoke(&self, props: Props) -> Value {
        self(props).into()
    }
}

/// What a node renders as: a literal tag or a component.
#[derive(Clone, Copy)]
pub enum NodeType<'a> {
    Tag(&'a str),
    Component(&'a dyn Component),
}

impl<'a> NodeType<'a> {
    /// Groups children without adding markup of its own.
    pub const FRAGMENT: NodeType<'static> = NodeType::Component(&fragment);

    /// Use a component as the node type.
    pub fn component<C: Component>(component: &'a C) -> Self {
        Self::Component(component)
    }
}

impl<'a> From<&'a str> for NodeType<'a> {
    fn from(tag: &'a str) -> Self {
        Self::Tag(tag)
    }
}

impl<'a> From<&'a String> for NodeType<'a> {
    fn from(tag: &'a String) -> Self {
        Self::Tag(tag)
    }
}

impl<'a> From<&'a dyn Component> for NodeType<'a> {
    fn from(component: &'a dyn Component) -> Self {
        Self::Component(component)
    }
}

impl fmt::Debug for NodeType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
        }
    }
}

/// Render the children of `props` without any surrounding markup.
///
/// # Examples
///
/// ```
/// use sx_markup::{NodeType, h, props};
///
/// let page = h!(NodeType::FRAGMENT, props!(), h!("h1", props!(), "A"), h!("p", props!(), "B"));
/// assert_eq!(page.as_str(), "<h1>A</h1><p>B</p>");
/// ```
pub fn fragment(props: Props) -> Markup {
    render(props.into_children())
}

/// Build a node.
///
/// - a component is invoked with `props` and `children` set to the given
///   list; its result is rendered
/// - a void tag renders as `<tag attrs/>` and ignores `children`
/// - any other tag renders as `<tag attrs>children</tag>`
///
/// Attribute values are escaped; attribute names are written as given.
/// Children already present in `props` are replaced by `children`.
///
/// # Examples
///
/// ```
/// use sx_markup::{Props, Value, construct};
///
/// let html = construct("div", Props::new().with("class", "x"), vec![Value::from("a")]);
/// assert_eq!(html.as_str(), r#"<div class="x">a</div>"#);
///
/// assert_eq!(construct("br", Props::new(), vec![Value::from("ignored")]).as_str(), "<br/>");
/// ```
pub fn construct<'a>(node: impl Into<NodeType<'a>>, props: Props, children: Vec<Value>) -> Markup {
    match node.into() {
        NodeType::Component(component) => {
            let props = props.with_children(Value::List(children));
            render(component.invoke(props))
        }
        NodeType::Tag(tag) if is_void_element(tag) => {
            let mut html = String::with_capacity(tag.len() + 3);
            html.push('<');
            html.push_str(tag);
            write_attributes(&props, &mut html);
            html.push_str("/>");
            Markup::raw(html)
        }
        NodeType::Tag(tag) => {
            let mut html = String::with_capacity(tag.len() * 2 + 5);
            html.push('<');
            html.push_str(tag);
            write_attributes(&props, &mut html);
            html.push('>');
            render_into(Value::List(children), &mut html);
            write!(html, "</{tag}>").unwrap();
            Markup::raw(html)
        }
    }
}

fn write_attributes(props: &Props, out: &mut String) {
    for (name, value) in props.attributes() {
        write!(
            out,
            r#" {name}="{}""#,
            escape_attribute(&value.display_text())
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_void_element_set() {
        assert_eq!(VOID_ELEMENTS.len(), 14);
        for tag in ["br", "img", "wbr", "meta", "link"] {
            assert!(is_void_element(tag));
        }
        for tag in ["div", "p", "BR", "template", ""] {
            assert!(!is_void_element(tag));
        }
    }

    #[test]
    fn test_void_elements_drop_children() {
        for tag in VOID_ELEMENTS {
            let html = construct(*tag, Props::new(), vec![Value::from("body"), Value::from(1)]);
            assert_eq!(html.as_str(), format!("<{tag}/>"));
        }
    }

    #[test]
    fn test_void_element_with_attributes() {
        let props = Props::new()
            .with("rel", "stylesheet")
            .with("href", "https://example.com/index.css");
        assert_eq!(
            construct("link", props, Vec::new()).as_str(),
            r#"<link rel="stylesheet" href="https://example.com/index.css"/>"#
        );
    }

    #[test]
    fn test_regular_tag_without_props() {
        assert_eq!(construct("div", Props::new(), Vec::new()).as_str(), "<div></div>");
    }

    #[test]
    fn test_attribute_values_escaped() {
        let props = Props::new().with("data-x", "<&>'\"");
        assert_eq!(
            construct("div", props, Vec::new()).as_str(),
            r#"<div data-x="&lt;&amp;&gt;&#39;&quot;"></div>"#
        );
    }

    #[test]
    fn test_attribute_values_use_display_text() {
        let props = Props::new()
            .with("tabindex", 0)
            .with("hidden", true)
            .with("empty", ())
            .with("coords", vec![1, 2]);
        assert_eq!(
            construct("div", props, Vec::new()).as_str(),
            r#"<div tabindex="0" hidden="true" empty="" coords="1,2"></div>"#
        );
    }

    #[test]
    fn test_children_in_props_are_not_attributes() {
        let props = Props::new().with("id", "a").with_children("stale");
        assert_eq!(
            construct("p", props, vec![Value::from("fresh")]).as_str(),
            r#"<p id="a">fresh</p>"#
        );
    }

    #[test]
    fn test_absent_children_skipped() {
        let html = construct(
            "div",
            Props::new(),
            vec![Value::from(None::<&str>), Value::from("a"), Value::from(()), Value::from(1)],
        );
        assert_eq!(html.as_str(), "<div>a1</div>");
    }

    #[test]
    fn test_component_receives_props_and_children() {
        let title = |props: Props| {
            construct("h1", Props::new(), vec![props.get("text").cloned().unwrap_or_default()])
        };
        let html = construct(
            NodeType::component(&title),
            Props::new().with("text", "Hi"),
            Vec::new(),
        );
        assert_eq!(html.as_str(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_component_children_are_unrendered_list() {
        let inspect = |props: Props| {
            let count = props.children().as_list().map_or(0, <[Value]>::len);
            Value::from(count)
        };
        let html = construct(
            NodeType::component(&inspect),
            Props::new(),
            vec![Value::from("<a>"), Value::Null],
        );
        assert_eq!(html.as_str(), "2");
    }

    #[test]
    fn test_component_may_return_list() {
        let pair = |_props: Props| vec![Value::from("a"), Value::from(Markup::raw("<hr/>"))];
        let html = construct(NodeType::component(&pair), Props::new(), Vec::new());
        assert_eq!(html.as_str(), "a<hr/>");
    }

    #[test]
    fn test_fragment_concatenates_children() {
        let children = vec![
            Value::from(construct("h1", Props::new(), vec![Value::from("A")])),
            Value::from(construct("p", Props::new(), vec![Value::from("B")])),
        ];
        assert_eq!(
            construct(NodeType::FRAGMENT, Props::new(), children).as_str(),
            "<h1>A</h1><p>B</p>"
        );
    }

    #[test]
    fn test_node_type_debug() {
        assert_eq!(format!("{:?}", NodeType::from("div")), r#"Tag("div")"#);
        assert_eq!(format!("{:?}", NodeType::FRAGMENT), "Component(..)");
    }
}
