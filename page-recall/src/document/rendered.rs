//! Rendered-text computation, an approximation of the DOM's `innerText`.
//!
//! Hidden and non-rendered elements contribute nothing, whitespace collapses
//! the way CSS `white-space: normal` does, block boundaries turn into line
//! breaks (two around paragraphs) and table cells are separated by tabs.

use scraper::node::Node;
use scraper::ElementRef;

/// Elements whose contents are never rendered.
const NOT_RENDERED: &[&str] = &[
    "head", "title", "meta", "link", "base", "script", "style", "noscript", "template",
    "iframe", "object", "embed", "param", "source", "track", "datalist", "area", "map",
];

/// Elements that start and end on their own line.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "center", "dd", "details",
    "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend", "li",
    "main", "menu", "nav", "ol", "pre", "section", "summary", "table", "tr", "ul",
];

/// Elements whose whitespace is preserved.
const PREFORMATTED: &[&str] = &["pre", "textarea", "listing", "plaintext", "xmp"];

#[derive(Debug)]
enum Piece {
    /// Collapsible text.
    Text(String),
    /// Text emitted as-is (preformatted runs, `<br>`, cell separators).
    Literal(String),
    /// A required line break count at a block boundary.
    Break(usize),
}

/// Returns the rendered text of `root` and its descendants.
#[must_use]
pub fn rendered_text(root: ElementRef<'_>) -> String {
    let mut pieces = Vec::new();
    collect(root, false, &mut pieces);
    assemble(&pieces)
}

fn collect(element: ElementRef<'_>, in_pre: bool, pieces: &mut Vec<Piece>) {
    let name = element.value().name();
    if is_hidden(element) {
        return;
    }
    if name == "br" {
        pieces.push(Piece::Literal("\n".to_string()));
        return;
    }

    let in_pre = in_pre || PREFORMATTED.contains(&name);
    let breaks = required_breaks(name);
    if breaks > 0 {
        pieces.push(Piece::Break(breaks));
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if in_pre {
                    pieces.push(Piece::Literal(text.replace("\r\n", "\n")));
                } else {
                    pieces.push(Piece::Text(collapse(text)));
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect(child, in_pre, pieces);
                }
            }
            _ => {}
        }
    }

    if is_cell(name) && next_cell_sibling(element) {
        pieces.push(Piece::Literal("\t".to_string()));
    }
    if breaks > 0 {
        pieces.push(Piece::Break(breaks));
    }
}

fn assemble(pieces: &[Piece]) -> String {
    let mut out = String::new();
    let mut pending = 0usize;

    for piece in pieces {
        let (text, collapsible) = match piece {
            Piece::Break(count) => {
                pending = pending.max(*count);
                continue;
            }
            Piece::Text(text) => (text.as_str(), true),
            Piece::Literal(text) => (text.as_str(), false),
        };
        if text.is_empty() {
            continue;
        }

        let at_line_start = pending > 0 || out.is_empty() || out.ends_with(is_collapsed_space);
        if collapsible && at_line_start && text.trim_matches(' ').is_empty() {
            continue;
        }

        if pending > 0 {
            trim_trailing_spaces(&mut out);
            if !out.is_empty() {
                out.extend(std::iter::repeat('\n').take(pending));
            }
            pending = 0;
        }

        if collapsible && at_line_start {
            out.push_str(text.trim_start_matches(' '));
        } else {
            out.push_str(text);
        }
    }

    trim_trailing_spaces(&mut out);
    out
}

fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0c') {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

fn trim_trailing_spaces(out: &mut String) {
    let len = out.trim_end_matches(' ').len();
    out.truncate(len);
}

fn is_collapsed_space(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\t')
}

fn required_breaks(name: &str) -> usize {
    if name == "p" {
        2
    } else if BLOCK_ELEMENTS.contains(&name) {
        1
    } else {
        0
    }
}

fn is_cell(name: &str) -> bool {
    matches!(name, "td" | "th")
}

fn next_cell_sibling(element: ElementRef<'_>) -> bool {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .any(|sibling| is_cell(sibling.value().name()))
}

fn is_hidden(element: ElementRef<'_>) -> bool {
    let value = element.value();
    if NOT_RENDERED.contains(&value.name()) || value.attr("hidden").is_some() {
        return true;
    }
    value.attr("style").is_some_and(|style| {
        let style: String = style.chars().filter(|c| !c.is_whitespace()).collect();
        style.to_ascii_lowercase().contains("display:none")
    })
}

#[cfg(test)]
mod tests {
    use crate::document::PageDocument;
    use pretty_assertions::assert_eq;

    fn body_text(html: &str) -> String {
        PageDocument::parse("https://example.com/", html).body_text()
    }

    #[test]
    fn test_blocks_and_paragraphs() {
        let text = body_text(
            "<body><h1>Title</h1><p>Para one.</p><p>Para <b>two</b>.</p>\
             <ul><li>A</li><li>B</li></ul></body>",
        );
        assert_eq!(text, "Title\n\nPara one.\n\nPara two.\n\nA\nB");
    }

    #[test]
    fn test_whitespace_collapses_across_inline_boundaries() {
        let text = body_text("<body><div>  hello \n\n  <span> big </span>   world  </div></body>");
        assert_eq!(text, "hello big world");
    }

    #[test]
    fn test_inter_block_whitespace_is_dropped() {
        let text = body_text("<body><div>a</div>\n   <div>b</div></body>");
        assert_eq!(text, "a\nb");
    }

    #[test]
    fn test_hidden_and_script_content_excluded() {
        let text = body_text(
            "<body><p>Visible</p><script>var x = 1;</script><style>p{}</style>\
             <div hidden>secret</div><div style=\"display: none\">also secret</div></body>",
        );
        assert_eq!(text, "Visible");
    }

    #[test]
    fn test_preformatted_whitespace_kept() {
        let text = body_text("<body><pre>fn main() {\n    run();\n}</pre></body>");
        assert_eq!(text, "fn main() {\n    run();\n}");
    }

    #[test]
    fn test_line_break_and_table_cells() {
        let text = body_text(
            "<body><div>one<br>two</div><table><tr><td>a</td><td>b</td></tr></table></body>",
        );
        assert_eq!(text, "one\ntwo\na\tb");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(body_text("<html><head><title>T</title></head><body></body></html>"), "");
        assert_eq!(body_text("<body>   \n\t </body>"), "");
    }
}
