//! Whitespace normalization shared by every parser.

use regex::Regex;
use std::sync::LazyLock;

static LINE_ENDINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("hardcoded regex is valid"));

static HORIZONTAL_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("hardcoded regex is valid"));

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("hardcoded regex is valid"));

/// Normalizes whitespace in text content.
///
/// Applied in this order, since each step can create input for the next:
/// 1. Line endings become `\n`
/// 2. Runs of spaces and tabs collapse to a single space
/// 3. Runs of two or more newlines collapse to a single newline
/// 4. Leading and trailing whitespace is trimmed
///
/// The function is total and idempotent.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let text = LINE_ENDINGS.replace_all(text, "\n");
    let text = HORIZONTAL_RUNS.replace_all(&text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n");
    text.trim().to_string()
}
