//! Glyph extraction from the primary talent page.

use super::{selectors, text_in};
use crate::document::Document;
use crate::types::{Glyph, GlyphKind};
use crate::Result;

/// Extract every equipped glyph, walking the three category columns in
/// their fixed page order (major, minor, prime).
///
/// Only filled sockets carry an anchor; empty glyph sockets simply don't
/// appear. The item id is the trailing path segment of the glyph's href.
pub fn glyphs(doc: &Document) -> Result<Vec<Glyph>> {
    let mut out = Vec::new();
    for kind in GlyphKind::ALL {
        for anchor in doc.select(&selectors::glyph_links(kind.as_str()))? {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let name = text_in(&anchor, selectors::GLYPH_NAME)?;
            if name.is_empty() {
                continue;
            }
            out.push(Glyph {
                name,
                kind,
                url: href.to_string(),
                item_id: trailing_segment(href),
            });
        }
    }
    Ok(out)
}

fn trailing_segment(href: &str) -> String {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
