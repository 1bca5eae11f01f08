//! Page snapshots.
//!
//! A [`PageDocument`] is an owned, parsed copy of a page's DOM together with
//! the URL it was captured from. Parsers take it by value, so a caller that
//! needs the document afterwards hands over a clone.

mod rendered;

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

pub use rendered::rendered_text;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("hardcoded selector is valid"));

static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("hardcoded selector is valid"));

static OG_SITE_NAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:site_name"]"#).expect("hardcoded selector is valid")
});

static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("hardcoded selector is valid")
});

/// An owned snapshot of a page's DOM and its URL.
#[derive(Debug, Clone)]
pub struct PageDocument {
    url: String,
    html: Html,
}

impl PageDocument {
    /// Parses a full HTML document captured from `url`.
    #[must_use]
    pub fn parse(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            html: Html::parse_document(html),
        }
    }

    /// Parses an HTML fragment as a standalone document.
    ///
    /// The fragment ends up inside a synthesized `<body>`, the same way a
    /// browser's `DOMParser` treats `text/html` input.
    #[must_use]
    pub fn from_fragment(url: impl Into<String>, fragment: &str) -> Self {
        Self::parse(url, fragment)
    }

    /// The URL the snapshot was captured from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The parsed tree.
    #[must_use]
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Serializes the whole document back to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.html.html()
    }

    /// The `<body>` element, if the document has one.
    #[must_use]
    pub fn body(&self) -> Option<ElementRef<'_>> {
        self.html.select(&BODY).next()
    }

    /// The document title: text of the first `<title>`, with whitespace
    /// stripped and collapsed. Empty when there is no title.
    #[must_use]
    pub fn title(&self) -> String {
        self.html
            .select(&TITLE)
            .next()
            .map(|title| {
                title
                    .text()
                    .flat_map(str::split_ascii_whitespace)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// The `lang` attribute of the root element, if present and non-empty.
    #[must_use]
    pub fn language(&self) -> Option<String> {
        self.html
            .root_element()
            .value()
            .attr("lang")
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .map(String::from)
    }

    /// The `content` of the first element matching `selector`, if non-empty.
    #[must_use]
    pub fn meta_content(&self, selector: &Selector) -> Option<String> {
        self.html
            .select(selector)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(String::from)
    }

    /// The Open Graph site name (`meta[property="og:site_name"]`).
    #[must_use]
    pub fn og_site_name(&self) -> Option<String> {
        self.meta_content(&OG_SITE_NAME)
    }

    /// The meta description (`meta[name="description"]`).
    #[must_use]
    pub fn meta_description(&self) -> Option<String> {
        self.meta_content(&META_DESCRIPTION)
    }

    /// The rendered text of the body, or an empty string without a body.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.body().map(rendered_text).unwrap_or_default()
    }
}
