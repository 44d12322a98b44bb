//! Tolerant structural-document handle over fetched markup.
//!
//! The armory does not emit valid HTML, so parsing is strictly best-effort:
//! [`Document::parse`] never fails, and structure that cannot be resolved
//! simply yields no query matches. Downstream extractors are the single
//! place where absence gets a meaning (empty field, empty slot, or an
//! extraction error, depending on the contract).
//!
//! Queries are CSS selectors run through the `scraper` crate's html5ever
//! DOM. Extracted text is whitespace-collapsed so formatting artifacts in
//! the markup never leak into output records.

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// A parsed, queryable markup document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse markup into a queryable document. Never fails; malformed input
    /// degrades to whatever structure the parser could recover.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Run a structural query, returning matches in document order.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = Selector::parse(css)
            .map_err(|e| Error::Extraction(format!("invalid structural path '{css}': {e}")))?;
        Ok(self.html.select(&selector).collect())
    }

    /// Collapsed text of the first match for `css`, if any match exists.
    pub fn first_text(&self, css: &str) -> Result<Option<String>> {
        Ok(self.select(css)?.first().map(text_of))
    }

    /// The document title, whitespace-collapsed.
    pub fn title(&self) -> Option<String> {
        self.first_text("title").ok().flatten()
    }
}

/// Collapsed text content of an element: entity-decoded, whitespace-only
/// nodes discarded, runs of whitespace folded to single spaces.
#[must_use]
pub fn text_of(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
