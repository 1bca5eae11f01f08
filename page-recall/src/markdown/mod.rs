//! HTML to Markdown conversion.
//!
//! [`MarkdownConverter`] wraps an [`htmd`] converter with:
//! - [`MarkdownOptions`] for output style (headings, bullets, fences, links)
//! - a removal list of tag names skipped with their subtrees
//! - replacement [`Rule`]s keyed by tag name, which take over from the
//!   built-in handlers for those tags
//!
//! `htmd` converters are single-threaded, so one is built per conversion from
//! the stored settings.

mod options;

pub use htmd::Element;
pub use options::{BulletListMarker, CodeBlockFence, CodeBlockStyle, HeadingStyle, LinkStyle, MarkdownOptions};

use htmd::HtmlToMarkdown;
use std::fmt;
use std::sync::Arc;
use tracing::debug_span;

use crate::errors::RecallError;

/// Replacement function for a [`Rule`].
///
/// Receives the element with its already converted content. Returning `None`
/// leaves the element out of the output.
pub type Handler = Arc<dyn Fn(Element<'_>) -> Option<String> + Send + Sync>;

/// A custom replacement rule for a set of tag names.
#[derive(Clone)]
pub struct Rule {
    name: String,
    tags: Vec<String>,
    handler: Handler,
}

impl Rule {
    /// Creates a rule applying `handler` to the given tag names.
    pub fn new<F>(name: impl Into<String>, tags: &[&str], handler: F) -> Self
    where
        F: Fn(Element<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            tags: tags.iter().map(|tag| tag.to_ascii_lowercase()).collect(),
            handler: Arc::new(handler),
        }
    }

    /// The rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the rule applies to `tag`.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Converts HTML to Markdown.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: MarkdownOptions,
    removed: Vec<String>,
    rules: Vec<Rule>,
}

impl MarkdownConverter {
    /// Creates a converter with the given options, no removals and no rules.
    #[must_use]
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            options,
            removed: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Drops elements with these tag names, including their subtrees.
    #[must_use]
    pub fn remove<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref().to_ascii_lowercase();
            if !self.removed.contains(&tag) {
                self.removed.push(tag);
            }
        }
        self
    }

    /// Adds a replacement rule for its tags, replacing the built-in handling.
    #[must_use]
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The converter options.
    #[must_use]
    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Whether elements named `tag` are removed.
    #[must_use]
    pub fn is_removed(&self, tag: &str) -> bool {
        self.removed.iter().any(|removed| removed == tag)
    }

    /// The custom rules, in the order they were added.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn build(&self) -> HtmlToMarkdown {
        let mut builder = HtmlToMarkdown::builder()
            .options(self.options.to_htmd())
            .skip_tags(self.removed.iter().map(String::as_str).collect());
        for rule in &self.rules {
            let handler = Arc::clone(&rule.handler);
            builder = builder.add_handler(
                rule.tags.iter().map(String::as_str).collect(),
                move |element: Element<'_>| handler(element),
            );
        }
        builder.build()
    }

    /// Converts `html` to Markdown.
    pub fn convert(&self, html: &str) -> Result<String, RecallError> {
        let _span = debug_span!("markdown_convert", len = html.len()).entered();
        self.build()
            .convert(html)
            .map_err(|err| RecallError::Conversion(err.to_string()))
    }
}
