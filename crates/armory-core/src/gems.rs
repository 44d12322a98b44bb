//! Dependent resolution of socketed gems.
//!
//! Items only carry *references* to their gems; the display name lives on
//! each gem's own item page, one HTTP round-trip per socket. Gem pages are
//! immutable once created, so they are fetched with [`Freshness::Pinned`]:
//! any cached copy is good forever, which keeps repeat lookups of popular
//! gems entirely local.

use crate::cache::Freshness;
use crate::document::Document;
use crate::extract::selectors;
use crate::fetcher::Fetcher;
use crate::pages::Pages;
use crate::{Error, Result};

/// Resolve each gem reference to its display name, preserving socket order.
///
/// A reference that fails to resolve (bad URL, or a page without a usable
/// title) fails the whole list. There is no per-gem skip: a silently short
/// gem list would misreport the item (see DESIGN.md).
pub(crate) async fn resolve_gems(
    fetcher: &Fetcher,
    pages: &Pages,
    gem_refs: &[String],
) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(gem_refs.len());
    for href in gem_refs {
        let resource = pages.item(href)?;
        let markup = fetcher
            .fetch(&resource.url, &resource.key, Freshness::Pinned)
            .await?;
        let name = gem_name(&markup).ok_or_else(|| {
            Error::Extraction(format!("gem page '{}' carries no display name", resource.key))
        })?;
        names.push(name);
    }
    Ok(names)
}

/// The gem's display name: first segment of the page title.
fn gem_name(markup: &str) -> Option<String> {
    let doc = Document::parse(markup);
    let title = doc.title()?;
    let name = title
        .split(selectors::TITLE_SEPARATOR)
        .next()?
        .trim()
        .to_string();
    (!name.is_empty()).then_some(name)
}
