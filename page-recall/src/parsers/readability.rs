//! Article extraction with `dom_smoothie`'s readability port.

use dom_smoothie::{Article, Config, Readability};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::document::PageDocument;
use crate::errors::ParseError;
use crate::extract::{build_metadata, DocumentParser, MetadataHints, PageContent, ReadabilityConfig};
use crate::text::normalize_whitespace;

/// `href` attributes that are empty or whitespace-only. The engine would
/// resolve these against the page URL.
static EMPTY_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(<a\b[^>]*?)\s+href\s*=\s*"\s*""#).expect("valid regex"));

/// Removes empty `href` attributes from anchors so they stay target-less.
fn strip_empty_hrefs(html: &str) -> String {
    EMPTY_HREF.replace_all(html, "$1").into_owned()
}

/// Extracts the main article of a page as HTML.
///
/// Fails when no article is found or the article is empty. The returned
/// content is the article's HTML with whitespace normalized.
#[derive(Debug, Clone, Default)]
pub struct ReadabilityParser {
    config: ReadabilityConfig,
}

impl ReadabilityParser {
    /// Creates a parser with the given engine settings.
    #[must_use]
    pub fn new(config: ReadabilityConfig) -> Self {
        Self { config }
    }

    /// The engine settings.
    #[must_use]
    pub fn config(&self) -> &ReadabilityConfig {
        &self.config
    }

    fn engine_config(&self) -> Config {
        Config {
            char_threshold: self.config.min_char_count,
            keep_classes: self.config.keep_classes,
            max_elements_to_parse: self.config.max_elements_to_parse,
            ..Default::default()
        }
    }

    fn article(&self, document: &PageDocument) -> Result<Article, ParseError> {
        let html = strip_empty_hrefs(&document.to_html());
        let mut readability =
            Readability::new(html.as_str(), Some(document.url()), Some(self.engine_config()))
                .map_err(ParseError::no_article)?;
        readability.parse().map_err(ParseError::no_article)
    }
}

impl DocumentParser for ReadabilityParser {
    fn name(&self) -> &str {
        "readability"
    }

    fn parse(&self, document: PageDocument) -> Result<PageContent, ParseError> {
        let article = self.article(&document)?;
        let content = article.content.to_string();
        if content.trim().is_empty() {
            return Err(ParseError::EmptyContent);
        }

        let hints = MetadataHints::none()
            .with_title(&article.title)
            .with_site_name(article.site_name.as_deref())
            .with_excerpt(article.excerpt.as_deref());
        let metadata = build_metadata(&document, hints);
        debug!(url = %metadata.url, title = %metadata.title, "Readability found an article");

        Ok(PageContent::new(metadata, normalize_whitespace(&content)))
    }
}
