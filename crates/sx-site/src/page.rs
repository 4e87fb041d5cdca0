//! Page model and the layout components that wrap page content.
//!
//! The layout is assembled from plain tags and components: a document shell
//! with `<head>`, a navigation list linking every page, the page body inside
//! `<main>`, and an optional footer.

use sx_config::SiteConfig;
use sx_markup::{Markup, NodeType, Props, Value, h, props};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// A page to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    /// Output path relative to the site root (e.g., "page-1.html").
    pub url: String,
    /// Page body, inserted verbatim into `<main>`.
    pub content: Markup,
}

/// Navigation entry derived from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub url: String,
}

impl From<&Page> for NavItem {
    fn from(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            url: page.url.clone(),
        }
    }
}

/// Site-wide layout options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// `lang` attribute of `<html>`.
    pub lang: Option<String>,
    /// Footer text. The footer is omitted when unset.
    pub footer: Option<String>,
    /// Stylesheet URLs linked from `<head>`.
    pub stylesheets: Vec<String>,
}

impl From<&SiteConfig> for LayoutOptions {
    fn from(site: &SiteConfig) -> Self {
        Self {
            lang: site.lang.clone(),
            footer: site.footer.clone(),
            stylesheets: site.stylesheets.clone(),
        }
    }
}

/// Navigation list. The current page is plain text, other pages are links.
pub(crate) fn navigation(nav_items: &[NavItem], current_url: &str) -> Markup {
    let entries = nav_items
        .iter()
        .map(|item| {
            let entry = if item.url == current_url {
                Value::from(item.title.as_str())
            } else {
                h!("a", props!("href" => item.url.as_str()), item.title.as_str()).into()
            };
            h!("li", props!(), entry)
        })
        .collect::<Value>();

    h!("nav", props!(), h!("ul", props!(), entries))
}

fn footer(text: &str) -> Markup {
    h!("footer", props!(), text)
}

fn stylesheet_links(stylesheets: &[String]) -> Value {
    stylesheets
        .iter()
        .map(|href| h!("link", props!("rel" => "stylesheet", "href" => href.as_str())))
        .collect()
}

/// Render a complete HTML document for `page`.
pub(crate) fn render_page(page: &Page, nav_items: &[NavItem], options: &LayoutOptions) -> Markup {
    let layout = |mut props: Props| {
        let children = props.take_children();
        let url = props.text("url");
        let html_props = options
            .lang
            .as_deref()
            .map_or_else(Props::new, |lang| props!("lang" => lang));

        h!(
            NodeType::FRAGMENT,
            props!(),
            Markup::raw(DOCTYPE),
            h!(
                "html",
                html_props,
                h!(
                    "head",
                    props!(),
                    h!("meta", props!("charset" => "utf-8")),
                    h!(
                        "meta",
                        props!(
                            "name" => "viewport",
                            "content" => "width=device-width, initial-scale=1",
                        )
                    ),
                    h!("title", props!(), props.get("title").cloned()),
                    stylesheet_links(&options.stylesheets),
                ),
                h!(
                    "body",
                    props!(),
                    navigation(nav_items, &url),
                    h!("main", props!(), children),
                    options.footer.as_deref().map(footer),
                ),
            ),
        )
    };

    h!(
        NodeType::component(&layout),
        props!("title" => page.title.as_str(), "url" => page.url.as_str()),
        &page.content,
    )
}
