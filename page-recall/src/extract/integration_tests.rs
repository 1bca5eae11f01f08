//! End-to-end extraction over the fixture pages.

#[cfg(test)]
mod tests {
    use crate::errors::ParseError;
    use crate::extract::{ExtractionPath, ExtractorConfig, PageContent, PageExtractor, PageMetadata};
    use crate::parsers::{MarkdownParser, PlainTextParser};
    use crate::testing::{fixtures, FailingParser, StaticParser};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_page_keeps_only_the_article() {
        let report = PageExtractor::default().extract_with_report(fixtures::article_document());

        assert_eq!(report.primary_error, None);
        assert_eq!(report.path, ExtractionPath::Fragment);
        assert!(report.content_ratio.is_some_and(|ratio| ratio >= 0.2));

        let page = report.page;
        assert!(page.content.contains(fixtures::ARTICLE_MARKER));
        assert!(!page.content.contains(fixtures::NAV_MARKER));
        assert!(!page.content.contains(fixtures::FOOTER_MARKER));
        assert!(!page.content.contains('<'));
        assert_eq!(page.metadata.url, fixtures::ARTICLE_URL);
        assert_eq!(page.metadata.site_name, "Rust Notes");
        assert_eq!(page.metadata.language.as_deref(), Some("en"));
        assert!(page.metadata.description.is_some());
    }

    #[test]
    fn test_article_page_full_page_path_drops_chrome() {
        let primary = StaticParser::new(PageContent::new(
            PageMetadata::new(fixtures::ARTICLE_URL, "Understanding Ownership"),
            "<p>too short</p>",
        ));
        let extractor = PageExtractor::new(primary, PlainTextParser::new(), MarkdownParser::default());

        let report = extractor.extract_with_report(fixtures::article_document());
        assert_eq!(report.path, ExtractionPath::FullPage);
        assert!(report.page.content.starts_with("# Understanding Ownership\n"));
        assert!(report.page.content.contains(fixtures::ARTICLE_MARKER));
        assert!(report
            .page
            .content
            .lines()
            .any(|line| line.starts_with('-') && line.ends_with("Each value has an owner.")));
        assert!(!report.page.content.contains(fixtures::NAV_MARKER));
        assert!(!report.page.content.contains(fixtures::FOOTER_MARKER));
    }

    #[test]
    fn test_empty_body_is_deterministic() {
        let extractor = PageExtractor::default();
        let first = extractor.extract_with_report(fixtures::empty_document());
        let second = extractor.extract_with_report(fixtures::empty_document());

        assert_eq!(first.path, ExtractionPath::FullPage);
        assert_eq!(first.original_length, 0);
        assert_eq!(first.page.content, "");
        assert_eq!(first.page.metadata.title, "Empty");
        assert_eq!(first.page.metadata.site_name, "Empty");
        assert_eq!(first.page, second.page);
    }

    #[test]
    fn test_readability_failure_uses_plain_text() {
        let extractor = PageExtractor::new(
            FailingParser::new(ParseError::no_article("no candidates")),
            PlainTextParser::new(),
            MarkdownParser::default(),
        );

        let report = extractor.extract_with_report(fixtures::link_hub_document());
        assert_eq!(report.primary_error, Some(ParseError::no_article("no candidates")));
        assert_eq!(report.path, ExtractionPath::Fragment);
        // Plain text reparsed as HTML keeps no line structure.
        assert_eq!(
            report.page.content.split_whitespace().collect::<Vec<_>>(),
            vec!["Links", "Alpha", "Beta", "Gamma"]
        );
        assert_eq!(report.page.metadata.title, "Links");
        assert_eq!(report.page.metadata.language.as_deref(), Some("fr"));
    }

    #[test]
    fn test_link_hub_drops_link_without_target() {
        let report = PageExtractor::default().extract_with_report(fixtures::link_hub_document());
        let content = &report.page.content;
        assert!(content.contains("[Alpha](https://example.com/a)"), "{content}");
        assert!(content.contains("[Beta](https://example.com/b)"), "{content}");
        assert!(!content.contains("Gamma"), "{content}");
        assert!(!content.contains(fixtures::LINK_HUB_URL), "{content}");
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let extractor = PageExtractor::default();
        let first = extractor.extract(fixtures::article_document());
        let second = extractor.extract(fixtures::article_document());
        assert_eq!(first, second);
    }

    #[test]
    fn test_content_is_always_normalized() {
        let extractor = PageExtractor::default();
        for document in [
            fixtures::article_document(),
            fixtures::empty_document(),
            fixtures::link_hub_document(),
        ] {
            let page = extractor.extract(document);
            assert_eq!(page.content, crate::text::normalize_whitespace(&page.content));
            assert!(!page.metadata.url.is_empty());
            assert!(!page.metadata.title.is_empty());
        }
    }

    #[test]
    fn test_configured_extractor() {
        let config = ExtractorConfig::from_json(r#"{"min_content_ratio": 0.0}"#).unwrap();
        let extractor = PageExtractor::from_config(&config).unwrap();
        let report = extractor.extract_with_report(fixtures::link_hub_document());
        assert_eq!(report.path, ExtractionPath::Fragment);
    }
}
