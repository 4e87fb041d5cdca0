//! Server-side component rendering to HTML strings.
//!
//! Nodes are either literal tags or components (functions from [`Props`] to
//! a renderable [`Value`]). Rendering produces a [`Markup`]: finished HTML
//! text that is never escaped again, so markup can be composed freely
//! without double escaping. There is no virtual DOM and nothing is diffed;
//! output is produced once.
//!
//! # Example
//!
//! ```
//! use sx_markup::{Markup, NodeType, Props, h, props};
//!
//! let header = |props: Props| {
//!     let tag = if props.text("level") == "1" { "h1" } else { "h2" };
//!     h!(tag, props!(), props.into_children())
//! };
//!
//! let page = h!(
//!     "main",
//!     props!("class" => "content"),
//!     h!(NodeType::component(&header), props!("level" => 1), "Title & more"),
//!     h!("p", props!(), "Body"),
//!     Markup::raw("<!-- end -->"),
//! );
//!
//! assert_eq!(
//!     page.as_str(),
//!     r#"<main class="content"><h1>Title &amp; more</h1><p>Body</p><!-- end --></main>"#
//! );
//! ```

#[macro_use]
mod macros;
mod escape;
mod markup;
mod node;
mod props;
mod render;
mod runtime;
mod value;

pub use escape::{escape_attribute, escape_body};
pub use markup::Markup;
pub use node::{Component, NodeType, VOID_ELEMENTS, construct, fragment, is_void_element};
pub use props::{CHILDREN, Props};
pub use render::render;
pub use runtime::{h, jsx, jsx_dev, jsxs};
pub use value::Value;
