// src/page/html.rs
// =============================================================================
// Extracts links and visible text from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative URLs to absolute URLs
//
// Rust concepts:
// - Iterators: walking every node of the parsed tree
// - Option<T>: links that cannot be resolved are simply skipped
// =============================================================================

use scraper::{Html, Node, Selector};
use url::Url;

use super::PageParser;

// Elements whose text is never shown to a reader
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

// Elements that start a new line of text. Inline elements (b, i, sub, a, span,
// ...) are not listed, so "foo<b>bar</b>" reads as one word.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "caption", "dd", "details",
    "div", "dl", "dt", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "head", "header", "hr", "html", "li", "main", "nav", "ol", "option", "p", "pre",
    "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr", "ul",
    "fieldset", "legend",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl PageParser for HtmlParser {
    // Extracts all http(s) links from HTML content
    //
    // Example:
    //   html = "<a href='/docs'>Docs</a>"
    //   base_url = "https://example.com"
    //   result = ["https://example.com/docs"]
    fn extract_links(&self, raw: &str, base_url: &str) -> Vec<String> {
        let mut links = Vec::new();

        // If the base URL is invalid we can't resolve relative links
        let base = match Url::parse(base_url) {
            Ok(url) => url,
            Err(_) => return links,
        };

        let document = Html::parse_document(raw);
        let selector = Selector::parse("a[href]").expect("`a[href]` is a valid selector");

        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(&base, href) {
                    links.push(absolute_url);
                }
            }
        }

        links
    }

    // Collects every text node outside script/style/... into one string
    //
    // Text nodes are walked in document order. A space goes between two of
    // them only when a block element starts or ends in between, so
    // "<li>one</li><li>two</li>" gives two words and "H<sub>2</sub>O" one.
    fn extract_text(&self, raw: &str) -> String {
        let document = Html::parse_document(raw);
        let mut text = String::new();
        let mut last_block = None;
        let mut at_boundary = false;

        for node in document.tree.root().descendants() {
            let chunk = match node.value() {
                Node::Text(chunk) => chunk,
                Node::Element(element) => {
                    let name = element.name();
                    if BLOCK_ELEMENTS.contains(&name) || HIDDEN_ELEMENTS.contains(&name) {
                        at_boundary = true;
                    }
                    continue;
                }
                _ => continue,
            };

            let hidden = node
                .ancestors()
                .any(|ancestor| element_in(ancestor.value(), &HIDDEN_ELEMENTS));
            if hidden {
                continue;
            }

            // Nearest enclosing block; a change means we crossed a block edge
            let block = node
                .ancestors()
                .find(|ancestor| element_in(ancestor.value(), BLOCK_ELEMENTS))
                .map(|ancestor| ancestor.id());

            if at_boundary || block != last_block {
                text.push(' ');
            }
            text.push_str(chunk);

            last_block = block;
            at_boundary = false;
        }

        text
    }
}

fn element_in(node: &Node, names: &[&str]) -> bool {
    match node {
        Node::Element(element) => names.contains(&element.name()),
        _ => false,
    }
}

// Resolves a link (possibly relative) to an absolute http(s) URL
//
// Skips anchors and special protocols, and drops the #fragment so that
// "page" and "page#section" are the same page.
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    url.set_fragment(None);

    Some(url.to_string())
}
