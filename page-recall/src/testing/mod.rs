//! Testing utilities for page extraction.
//!
//! This module provides:
//! - Fixture pages with known article, navigation and footer text
//! - Mock parsers that record what they were handed

pub mod fixtures;
mod mocks;

pub use mocks::{FailingParser, StaticParser};
