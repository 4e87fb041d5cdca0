/// Render a node with children given as trailing arguments.
///
/// Each child is converted with [`Value::from`](crate::Value), so strings,
/// numbers, options, vectors and [`Markup`](crate::Markup) can be mixed
/// freely. Props default to empty when only the node is given.
///
/// ```
/// use sx_markup::{h, props};
///
/// let html = h!("div", props!("class" => "x"), "one", " ", 2, None::<&str>);
/// assert_eq!(html.as_str(), r#"<div class="x">one 2</div>"#);
/// assert_eq!(h!("hr").as_str(), "<hr/>");
/// ```
#[macro_export]
macro_rules! h {
    ($node:expr) => {
        $crate::h($node, $crate::Props::new(), ::std::vec::Vec::new())
    };
    ($node:expr, $props:expr $(, $child:expr)* $(,)?) => {
        $crate::h($node, $props, ::std::vec![$($crate::Value::from($child)),*])
    };
}

/// Build [`Props`](crate::Props) from `name => value` pairs.
///
/// A `"children"` entry is stored as the children, not as an attribute.
///
/// ```
/// use sx_markup::props;
///
/// let props = props!("href" => "/", "children" => "Home");
/// assert_eq!(props.len(), 1);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Props::new()$(.with($name, $value))+
    };
}
