//! Output style options for the Markdown converter.

use htmd::options;
use serde::{Deserialize, Serialize};

/// How headings are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyle {
    /// `# Heading`
    #[default]
    Atx,
    /// Underlined with `=` / `-` for levels 1 and 2.
    Setext,
}

/// Marker for unordered list items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletListMarker {
    /// `-`
    #[default]
    Dash,
    /// `*`
    Asterisk,
}

/// How `<pre><code>` blocks are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeBlockStyle {
    /// Four-space indentation.
    Indented,
    /// Fenced with [`CodeBlockFence`].
    #[default]
    Fenced,
}

/// Fence used for fenced code blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeBlockFence {
    /// ```` ``` ````
    #[default]
    Backticks,
    /// `~~~`
    Tildes,
}

/// How links are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// `[text](url)`
    #[default]
    Inlined,
    /// `[text][1]` with the reference list appended to the output.
    Referenced,
}

/// Output style for [`MarkdownConverter`](super::MarkdownConverter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownOptions {
    /// Heading style.
    #[serde(default)]
    pub heading_style: HeadingStyle,
    /// Marker for unordered list items.
    #[serde(default)]
    pub bullet_list_marker: BulletListMarker,
    /// Code block style.
    #[serde(default)]
    pub code_block_style: CodeBlockStyle,
    /// Fence for fenced code blocks.
    #[serde(default)]
    pub code_block_fence: CodeBlockFence,
    /// Link style.
    #[serde(default)]
    pub link_style: LinkStyle,
}

impl MarkdownOptions {
    /// Creates options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading style.
    #[must_use]
    pub fn with_heading_style(mut self, style: HeadingStyle) -> Self {
        self.heading_style = style;
        self
    }

    /// Sets the bullet marker.
    #[must_use]
    pub fn with_bullet_list_marker(mut self, marker: BulletListMarker) -> Self {
        self.bullet_list_marker = marker;
        self
    }

    /// Sets the code block style.
    #[must_use]
    pub fn with_code_block_style(mut self, style: CodeBlockStyle) -> Self {
        self.code_block_style = style;
        self
    }

    /// Sets the code fence.
    #[must_use]
    pub fn with_code_block_fence(mut self, fence: CodeBlockFence) -> Self {
        self.code_block_fence = fence;
        self
    }

    /// Sets the link style.
    #[must_use]
    pub fn with_link_style(mut self, style: LinkStyle) -> Self {
        self.link_style = style;
        self
    }

    /// The equivalent `htmd` options.
    #[must_use]
    pub fn to_htmd(&self) -> options::Options {
        options::Options {
            heading_style: match self.heading_style {
                HeadingStyle::Atx => options::HeadingStyle::Atx,
                HeadingStyle::Setext => options::HeadingStyle::Setex,
            },
            bullet_list_marker: match self.bullet_list_marker {
                BulletListMarker::Dash => options::BulletListMarker::Dash,
                BulletListMarker::Asterisk => options::BulletListMarker::Asterisk,
            },
            code_block_style: match self.code_block_style {
                CodeBlockStyle::Indented => options::CodeBlockStyle::Indented,
                CodeBlockStyle::Fenced => options::CodeBlockStyle::Fenced,
            },
            code_block_fence: match self.code_block_fence {
                CodeBlockFence::Backticks => options::CodeBlockFence::Backticks,
                CodeBlockFence::Tildes => options::CodeBlockFence::Tildes,
            },
            link_style: match self.link_style {
                LinkStyle::Inlined => options::LinkStyle::Inlined,
                LinkStyle::Referenced => options::LinkStyle::Referenced,
            },
            ..Default::default()
        }
    }
}
