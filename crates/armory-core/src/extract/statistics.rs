//! Field extraction for statistic category pages.
//!
//! Statistic pages carry a flat name/value list (`dt`/`dd`) with no stable
//! keys, so the only lookup available is a linear scan by display name. The
//! value lives at the same ordinal position as the matched name.

use super::{selectors, texts};
use crate::document::Document;
use crate::{Error, Result};

/// Value of the statistic whose trimmed name equals `name` exactly.
///
/// Asking for a name the page does not list is a caller contract violation:
/// it raises [`Error::StatisticNotFound`] rather than returning empty.
pub fn statistic_value(doc: &Document, name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidArgument { field: "statistic" });
    }
    let names = texts(doc, selectors::STATISTIC_NAMES)?;
    let index = names
        .iter()
        .position(|candidate| candidate.trim() == name.trim())
        .ok_or_else(|| Error::StatisticNotFound(name.to_string()))?;

    let values = texts(doc, selectors::STATISTIC_VALUES)?;
    values
        .get(index)
        .cloned()
        .ok_or_else(|| Error::Extraction(format!("statistic '{name}' has no aligned value")))
}

/// Every statistic name on the page, in document order.
pub fn statistic_names(doc: &Document) -> Result<Vec<String>> {
    texts(doc, selectors::STATISTIC_NAMES)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn statistic_page() -> Document {
        Document::parse(
            r#"<div id="statistics-list">
                <dl><dt>Number of hugs</dt><dd>17</dd></dl>
                <dl><dt>  Beverages consumed  </dt><dd>2,113</dd></dl>
                <dl><dt>Total deaths</dt><dd>388</dd></dl>
            </div>"#,
        )
    }

    #[test]
    fn test_lookup_returns_value_at_matching_ordinal() {
        let doc = statistic_page();
        assert_eq!(statistic_value(&doc, "Number of hugs").unwrap(), "17");
        assert_eq!(statistic_value(&doc, "Total deaths").unwrap(), "388");
    }

    #[test]
    fn test_lookup_compares_trimmed_names() {
        let doc = statistic_page();
        assert_eq!(
            statistic_value(&doc, "Beverages consumed").unwrap(),
            "2,113"
        );
    }

    #[test]
    fn test_unknown_name_raises() {
        let doc = statistic_page();
        assert!(matches!(
            statistic_value(&doc, "Pets owned"),
            Err(Error::StatisticNotFound(_))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            statistic_value(&statistic_page(), ""),
            Err(Error::InvalidArgument { field: "statistic" })
        ));
    }

    #[test]
    fn test_all_names_in_document_order() {
        assert_eq!(
            statistic_names(&statistic_page()).unwrap(),
            vec!["Number of hugs", "Beverages consumed", "Total deaths"]
        );
    }
}
