//! Fixture pages.

use crate::document::PageDocument;

/// URL of [`ARTICLE_PAGE`].
pub const ARTICLE_URL: &str = "https://notes.example.org/posts/ownership";

/// Text that only appears inside the article body of [`ARTICLE_PAGE`].
pub const ARTICLE_MARKER: &str = "borrow checker";

/// Text that only appears in the navigation of [`ARTICLE_PAGE`].
pub const NAV_MARKER: &str = "Subscribe";

/// Text that only appears in the footer of [`ARTICLE_PAGE`].
pub const FOOTER_MARKER: &str = "Copyright";

/// A blog post with navigation, a sidebar and a footer around one article.
pub const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Understanding Ownership</title>
  <meta property="og:site_name" content="Rust Notes">
  <meta name="description" content="How ownership, borrowing and lifetimes fit together.">
  <style>body { font-family: serif; }</style>
  <script>window.analytics = [];</script>
</head>
<body>
  <header class="site-header">
    <nav class="menu">
      <a href="/">Home</a>
      <a href="/archive">Archive</a>
      <a href="/subscribe">Subscribe</a>
    </nav>
  </header>
  <main>
    <article class="post">
      <h1>Understanding Ownership</h1>
      <p>Ownership is the set of rules that governs how a program manages memory. Every value
      has a single owner, and when the owner goes out of scope, the value is dropped. There is no
      garbage collector running in the background, and there is no manual call to free memory.</p>
      <p>References let code use a value without taking ownership of it. The borrow checker makes
      sure that, at any given time, there is either one mutable reference or any number of shared
      references, and that every reference is valid for as long as it is used.</p>
      <h2>Moves and copies</h2>
      <p>Assigning a heap-allocated value to another variable moves it, which means the original
      binding can no longer be used. Types that live entirely on the stack, such as integers and
      booleans, implement a marker trait that makes assignment copy the bits instead.</p>
      <p>Lifetimes describe how long references stay valid. Most of the time, the compiler infers
      them, but when a function returns a reference derived from its arguments, the signature has to
      spell out which argument the result borrows from.</p>
      <ul>
        <li>Each value has an owner.</li>
        <li>There can only be one owner at a time.</li>
        <li>When the owner goes out of scope, the value is dropped.</li>
      </ul>
    </article>
  </main>
  <footer class="site-footer">
    <p>Copyright 2024 Rust Notes. All rights reserved.</p>
  </footer>
</body>
</html>"#;

/// URL of [`EMPTY_PAGE`].
pub const EMPTY_URL: &str = "https://example.com/empty";

/// A titled page with an empty body.
pub const EMPTY_PAGE: &str =
    "<!DOCTYPE html><html><head><title>Empty</title></head><body></body></html>";

/// URL of [`LINK_HUB_PAGE`].
pub const LINK_HUB_URL: &str = "https://example.com/links";

/// A page made almost entirely of short link lists, one without a target.
pub const LINK_HUB_PAGE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head><title>Links</title></head>
<body>
  <h1>Links</h1>
  <ul>
    <li><a href="/a">Alpha</a></li>
    <li><a href="/b">Beta</a></li>
    <li><a href="">Gamma</a></li>
  </ul>
</body>
</html>"#;

/// [`ARTICLE_PAGE`] parsed.
#[must_use]
pub fn article_document() -> PageDocument {
    PageDocument::parse(ARTICLE_URL, ARTICLE_PAGE)
}

/// [`EMPTY_PAGE`] parsed.
#[must_use]
pub fn empty_document() -> PageDocument {
    PageDocument::parse(EMPTY_URL, EMPTY_PAGE)
}

/// [`LINK_HUB_PAGE`] parsed.
#[must_use]
pub fn link_hub_document() -> PageDocument {
    PageDocument::parse(LINK_HUB_URL, LINK_HUB_PAGE)
}
