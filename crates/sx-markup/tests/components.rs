//! End-to-end rendering of element trees and components.

use pretty_assertions::assert_eq;
use sx_markup::{Markup, NodeType, Props, Value, h, jsx, props, render};

#[test]
fn test_single_element() {
    assert_eq!(h!("div", props!(), "Hello, world!").as_str(), "<div>Hello, world!</div>");
}

#[test]
fn test_nested_elements() {
    let html = h!(
        "main",
        props!(),
        h!("h1", props!(), "Title"),
        h!(
            "section",
            props!(),
            h!("h2", props!(), "Section"),
            h!("p", props!(), "Paragraph"),
        ),
    );
    assert_eq!(
        html.as_str(),
        "<main><h1>Title</h1><section><h2>Section</h2><p>Paragraph</p></section></main>"
    );
}

#[test]
fn test_void_elements() {
    assert_eq!(h!("br").as_str(), "<br/>");
    assert_eq!(h!("br", props!(), "ignored").as_str(), "<br/>");
    assert_eq!(
        h!(
            "link",
            props!("rel" => "stylesheet", "href" => "https://example.com/index.css")
        )
        .as_str(),
        r#"<link rel="stylesheet" href="https://example.com/index.css"/>"#
    );
}

#[test]
fn test_attribute_values_are_escaped() {
    let html = h!("div", props!("data-strange" => "<(){}&'\">"));
    assert_eq!(
        html.as_str(),
        r#"<div data-strange="&lt;(){}&amp;&#39;&quot;&gt;"></div>"#
    );
}

#[test]
fn test_child_kinds() {
    assert_eq!(h!("div", props!(), 123).as_str(), "<div>123</div>");
    assert_eq!(h!("div", props!(), ()).as_str(), "<div></div>");
    assert_eq!(h!("div", props!(), None::<String>).as_str(), "<div></div>");
    assert_eq!(h!("div", props!(), "").as_str(), "<div></div>");
    assert_eq!(h!("div", props!(), Markup::raw("Hello")).as_str(), "<div>Hello</div>");
    assert_eq!(h!("div", props!(), vec![1, 2, 3]).as_str(), "<div>123</div>");
}

#[test]
fn test_multiple_children_of_varying_types() {
    let html = h!("div", props!(), "one", (), " ", 2);
    assert_eq!(html.as_str(), "<div>one 2</div>");
}

#[test]
fn test_textual_children_are_escaped() {
    let html = h!("div", props!(), "\"<&>\"", "'<&>'", "\"\"");
    assert_eq!(html.as_str(), r#"<div>"&lt;&amp;&gt;"'&lt;&amp;&gt;'""</div>"#);
}

#[test]
fn test_raw_markup_is_not_escaped() {
    let html = h!("div", props!(), Markup::raw("<span>Ampersand: &amp;</span>"));
    assert_eq!(html.as_str(), "<div><span>Ampersand: &amp;</span></div>");
}

#[test]
fn test_component_with_props() {
    let title = |props: Props| h!("h1", props!(), props.get("text").cloned());
    assert_eq!(
        h!(NodeType::component(&title), props!("text" => "Hello, world!")).as_str(),
        "<h1>Hello, world!</h1>"
    );
}

#[test]
fn test_component_with_children() {
    let title = |props: Props| h!("h1", props!(), props.into_children());
    assert_eq!(
        h!(NodeType::component(&title), props!(), "Hello, world!").as_str(),
        "<h1>Hello, world!</h1>"
    );
}

#[test]
fn test_component_with_props_and_children() {
    let header = |mut props: Props| {
        let children = props.take_children();
        match props.get("level").and_then(Value::as_int) {
            Some(1) => h!("h1", props!(), children),
            Some(2) => h!("h2", props!(), children),
            _ => h!("h3", props!(), children),
        }
    };
    let header = NodeType::component(&header);

    let html = h!(
        "div",
        props!(),
        h!(header, props!("level" => 1), "H1"),
        h!(header, props!("level" => 2), "H2"),
        h!(header, props!("level" => 3), "H3"),
    );
    assert_eq!(html.as_str(), "<div><h1>H1</h1><h2>H2</h2><h3>H3</h3></div>");
}

#[test]
fn test_nested_components() {
    let my_div = |props: Props| h!("div", props!("class" => "custom"), props.into_children());
    let my_div = NodeType::component(&my_div);

    let html = h!(
        my_div,
        props!(),
        h!("h1", props!(), "Header"),
        h!(my_div, props!(), "Some stuff: ", h!("span", props!(), "stuff")),
    );
    assert_eq!(
        html.as_str(),
        r#"<div class="custom"><h1>Header</h1><div class="custom">Some stuff: <span>stuff</span></div></div>"#
    );
}

#[test]
fn test_top_level_fragment() {
    let html = h!(
        NodeType::FRAGMENT,
        props!(),
        h!("h1", props!(), "Title"),
        h!("p", props!(), "Some text"),
    );
    assert_eq!(html.as_str(), "<h1>Title</h1><p>Some text</p>");
}

#[test]
fn test_nested_fragments() {
    let html = h!(
        NodeType::FRAGMENT,
        props!(),
        h!("h1", props!(), "Title"),
        h!(
            NodeType::FRAGMENT,
            props!(),
            h!("p", props!(), "Paragraph 1"),
            h!("p", props!(), "Paragraph 2"),
        ),
    );
    assert_eq!(html.as_str(), "<h1>Title</h1><p>Paragraph 1</p><p>Paragraph 2</p>");
}

#[test]
fn test_single_object_convention_tree() {
    let my_div = |props: Props| jsx("div", props!("class" => "custom", "children" => props.into_children()));
    let html = jsx(
        NodeType::component(&my_div),
        props!(
            "children" => vec![
                jsx("h1", props!("children" => "Header")),
                jsx("br", Props::new()),
            ]
        ),
    );
    assert_eq!(html.as_str(), r#"<div class="custom"><h1>Header</h1><br/></div>"#);
}

#[test]
fn test_list_built_from_iterator() {
    let items = ["a", "b<", "c"];
    let html = h!(
        "ul",
        props!(),
        items
            .iter()
            .map(|item| h!("li", props!(), *item))
            .collect::<Value>(),
    );
    assert_eq!(html.as_str(), "<ul><li>a</li><li>b&lt;</li><li>c</li></ul>");
}

#[test]
fn test_rendered_output_is_final() {
    let inner = h!("b", props!(), "&");
    let outer = render(vec![Value::from(inner.clone()), Value::from(inner)]);
    assert_eq!(outer.as_str(), "<b>&amp;</b><b>&amp;</b>");
    assert_eq!(render(Markup::raw(outer.as_str())), outer);
}

#[test]
fn test_independent_renders_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || h!("p", props!("data-i" => i), i).into_string())
        })
        .collect();
    let pages: Vec<String> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert_eq!(
        pages,
        [
            r#"<p data-i="0">0</p>"#,
            r#"<p data-i="1">1</p>"#,
            r#"<p data-i="2">2</p>"#,
            r#"<p data-i="3">3</p>"#,
        ]
    );
}
