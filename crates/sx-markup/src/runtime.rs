//! Entry points for generated component calls.
//!
//! Two calling conventions are supported and produce identical output:
//!
//! - [`h`] takes props and a separate list of children (the [`h!`](crate::h!)
//!   macro accepts the children as trailing arguments)
//! - [`jsx`] takes a single [`Props`] whose `children` field holds the
//!   content, either one value or a list

use crate::markup::Markup;
use crate::node::{NodeType, construct};
use crate::props::Props;
use crate::value::Value;

/// Render a node from props and a list of children.
pub fn h<'a>(node: impl Into<NodeType<'a>>, props: Props, children: Vec<Value>) -> Markup {
    construct(node, props, children)
}

/// Render a node from props carrying their own children.
///
/// A `List` in the `children` field is used as the child list; any other
/// value, including `Null`, becomes a one-element list.
///
/// # Examples
///
/// ```
/// use sx_markup::{Props, jsx};
///
/// let props = Props::new().with("class", "x").with("children", vec!["a", "b"]);
/// assert_eq!(jsx("div", props).as_str(), r#"<div class="x">ab</div>"#);
/// ```
pub fn jsx<'a>(node: impl Into<NodeType<'a>>, mut props: Props) -> Markup {
    let children = match props.take_children() {
        Value::List(children) => children,
        single => vec![single],
    };
    construct(node, props, children)
}

/// Same as [`jsx`]; used for nodes with static child lists.
pub fn jsxs<'a>(node: impl Into<NodeType<'a>>, props: Props) -> Markup {
    jsx(node, props)
}

/// Same as [`jsx`]. Development builds of generated code call this name.
pub fn jsx_dev<'a>(node: impl Into<NodeType<'a>>, props: Props) -> Markup {
    jsx(node, props)
}
