//! Structural extraction: turning parsed documents into typed records.
//!
//! Every function in the submodules is pure over a [`Document`]: no network,
//! no cache, so extraction rules are testable against synthetic markup.
//! The structural paths and sentinel values live in [`selectors`] as a
//! single declarative table rather than being scattered through the getters.
//!
//! Absence policy, applied uniformly:
//!
//! - an optional scalar with no query match becomes the empty string
//! - a paired slot whose raw text equals its sentinel becomes empty
//!   (name and value both)
//! - elements the contract *requires* (roster total count, gem display
//!   name, statistic lookups) raise instead

pub mod character;
pub mod equipment;
pub mod glyphs;
pub mod guild;
pub mod selectors;
pub mod statistics;

use crate::document::{Document, text_of};
use crate::{Error, Result};
use scraper::{ElementRef, Selector};

/// Collapsed texts of every match for `css`, in document order.
pub(crate) fn texts(doc: &Document, css: &str) -> Result<Vec<String>> {
    Ok(doc.select(css)?.iter().map(text_of).collect())
}

/// Collapsed text of the first match, or empty when nothing matches.
pub(crate) fn text_or_empty(doc: &Document, css: &str) -> Result<String> {
    Ok(doc.first_text(css)?.unwrap_or_default())
}

/// Run a structural query scoped to one element's subtree.
pub(crate) fn select_in<'a>(element: &ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = Selector::parse(css)
        .map_err(|e| Error::Extraction(format!("invalid structural path '{css}': {e}")))?;
    Ok(element.select(&selector).collect())
}

/// Collapsed text of the first match inside `element`, or empty.
pub(crate) fn text_in(element: &ElementRef<'_>, css: &str) -> Result<String> {
    Ok(select_in(element, css)?.first().map(text_of).unwrap_or_default())
}

/// Normalize one slot of a paired field against its sentinel.
///
/// The upstream renders an intentionally-unset slot as a literal placeholder
/// (`"No profession"`, `"Talents"`). A sentinel slot is reported with both
/// name and value empty; the other slot of the pair is unaffected, so all
/// four unset combinations fall out of applying this per slot.
pub(crate) fn normalize_sentinel_slot(
    name: String,
    value: String,
    sentinel: &str,
) -> (String, String) {
    if name == sentinel {
        (String::new(), String::new())
    } else {
        (name, value)
    }
}
