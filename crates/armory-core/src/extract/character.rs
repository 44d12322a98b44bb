//! Field extraction for the character summary page.

use super::{normalize_sentinel_slot, selectors, text_or_empty, texts};
use crate::document::Document;
use crate::types::{CharacterSummary, Profession, Professions, StatPair, TalentTree, Talents};
use crate::{Error, Result};

/// Extract every single-page field of the character summary.
///
/// Scalar fields the markup does not expose come back empty rather than
/// failing; the pairs follow the sentinel rules below.
pub fn summary(doc: &Document) -> Result<CharacterSummary> {
    Ok(CharacterSummary {
        level: text_or_empty(doc, selectors::LEVEL)?,
        class: text_or_empty(doc, selectors::CLASS)?,
        race: text_or_empty(doc, selectors::RACE)?,
        achievement_points: text_or_empty(doc, selectors::ACHIEVEMENT_POINTS)?,
        health: text_or_empty(doc, selectors::HEALTH)?,
        power: text_or_empty(doc, selectors::POWER)?,
        item_level: text_or_empty(doc, selectors::ITEM_LEVEL)?,
        professions: professions(doc)?,
        talents: talents(doc)?,
    })
}

/// Both profession slots.
///
/// A slot rendered with the `"No profession"` placeholder is reported with
/// empty name and level. Each slot is normalized independently, so any of
/// the four unset combinations comes out right.
pub fn professions(doc: &Document) -> Result<Professions> {
    let (first, second) = pair(
        doc,
        selectors::PROFESSION_NAMES,
        selectors::PROFESSION_VALUES,
        selectors::PROFESSION_SENTINEL,
    )?;
    Ok(Professions {
        first: Profession {
            name: first.0,
            level: first.1,
        },
        second: Profession {
            name: second.0,
            level: second.1,
        },
    })
}

/// Both talent trees, with the `"Talents"` placeholder normalized away.
pub fn talents(doc: &Document) -> Result<Talents> {
    let (first, second) = pair(
        doc,
        selectors::TALENT_NAMES,
        selectors::TALENT_BUILDS,
        selectors::TALENT_SENTINEL,
    )?;
    Ok(Talents {
        first: TalentTree {
            name: first.0,
            points: first.1,
        },
        second: TalentTree {
            name: second.0,
            points: second.1,
        },
    })
}

/// Named statistic lookup on the character page, keyed by the element's
/// `data-id`.
///
/// Asking for a key the page does not carry is a contract violation and
/// raises [`Error::StatisticNotFound`].
pub fn stat(doc: &Document, key: &str) -> Result<StatPair> {
    if key.is_empty() {
        return Err(Error::InvalidArgument { field: "stat" });
    }
    let name = doc.first_text(&selectors::stat_name(key))?;
    let value = doc.first_text(&selectors::stat_value(key))?;
    match (name, value) {
        (Some(name), Some(value)) => Ok(StatPair { name, value }),
        _ => Err(Error::StatisticNotFound(key.to_string())),
    }
}

/// Query both slots of a paired field and normalize each against the
/// sentinel. Missing matches degrade to empty strings first, then the
/// sentinel rule applies.
fn pair(
    doc: &Document,
    names_path: &str,
    values_path: &str,
    sentinel: &str,
) -> Result<((String, String), (String, String))> {
    let names = texts(doc, names_path)?;
    let values = texts(doc, values_path)?;
    let slot = |i: usize| {
        normalize_sentinel_slot(
            names.get(i).cloned().unwrap_or_default(),
            values.get(i).cloned().unwrap_or_default(),
            sentinel,
        )
    };
    Ok((slot(0), slot(1)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn talent_page(first: &str, second: &str) -> Document {
        Document::parse(&format!(
            r#"<div>
                <span class="name-build"><span class="name">{first}</span><span class="build">8/31/2</span></span>
                <span class="name-build"><span class="name">{second}</span><span class="build">0/2/12</span></span>
            </div>"#
        ))
    }

    #[test]
    fn test_talents_both_unset() {
        let talents = talents(&talent_page("Talents", "Talents")).unwrap();
        assert_eq!(talents.first, TalentTree::default());
        assert_eq!(talents.second, TalentTree::default());
    }

    #[test]
    fn test_talents_first_unset() {
        let talents = talents(&talent_page("Talents", "Woo")).unwrap();
        assert_eq!(talents.first, TalentTree::default());
        assert_eq!(talents.second.name, "Woo");
        assert_eq!(talents.second.points, "0/2/12");
    }

    #[test]
    fn test_talents_second_unset() {
        let talents = talents(&talent_page("Woo", "Talents")).unwrap();
        assert_eq!(talents.first.name, "Woo");
        assert_eq!(talents.first.points, "8/31/2");
        assert_eq!(talents.second, TalentTree::default());
    }

    #[test]
    fn test_talents_neither_unset() {
        let talents = talents(&talent_page("Woo", "Bar")).unwrap();
        assert_eq!(talents.first.name, "Woo");
        assert_eq!(talents.second.name, "Bar");
        assert_eq!(talents.second.points, "0/2/12");
    }

    fn profession_page(first: &str, second: &str) -> Document {
        Document::parse(&format!(
            r#"<div class="profile-sidebar">
                <span class="profession-details">
                    <span class="name">{first}</span><span class="value">525</span>
                </span>
                <span class="profession-details">
                    <span class="name">{second}</span><span class="value">430</span>
                </span>
            </div>"#
        ))
    }

    #[test]
    fn test_professions_sentinel_blanks_whole_slot() {
        let professions =
            professions(&profession_page("No profession", "Herbalism")).unwrap();
        assert_eq!(professions.first, Profession::default());
        assert_eq!(professions.second.name, "Herbalism");
        assert_eq!(professions.second.level, "430");
    }

    #[test]
    fn test_professions_both_set() {
        let professions = professions(&profession_page("Alchemy", "Herbalism")).unwrap();
        assert_eq!(professions.first.name, "Alchemy");
        assert_eq!(professions.first.level, "525");
    }

    #[test]
    fn test_professions_missing_markup_degrades_to_empty() {
        let professions = professions(&Document::parse("<div></div>")).unwrap();
        assert_eq!(professions.first, Profession::default());
        assert_eq!(professions.second, Profession::default());
    }

    #[test]
    fn test_summary_scalars() {
        let doc = Document::parse(
            r##"<div class="profile-info">
                <span class="level">85</span>
                <a class="class" href="#">Mage</a>
                <a class="race" href="#">Blood Elf</a>
                <div class="achievements"><a href="#">7,825</a></div>
                <ul><li class="health"><span class="value">124,321</span></li>
                    <li id="summary-power"><span class="value">21,762</span></li></ul>
                <span class="item-level"><strong>359</strong></span>
            </div>"##,
        );
        let summary = summary(&doc).unwrap();
        assert_eq!(summary.level, "85");
        assert_eq!(summary.class, "Mage");
        assert_eq!(summary.race, "Blood Elf");
        assert_eq!(summary.achievement_points, "7,825");
        assert_eq!(summary.health, "124,321");
        assert_eq!(summary.power, "21,762");
        assert_eq!(summary.item_level, "359");
    }

    #[test]
    fn test_summary_missing_fields_are_empty_not_errors() {
        let summary = summary(&Document::parse("<html><body></body></html>")).unwrap();
        assert_eq!(summary.level, "");
        assert_eq!(summary.class, "");
        assert_eq!(summary.item_level, "");
    }

    #[test]
    fn test_stat_lookup() {
        let doc = Document::parse(
            r#"<ul>
                <li data-id="strength"><span class="name">Strength</span><span class="value">92</span></li>
                <li data-id="spellhaste"><span class="name">Haste</span><span class="value">12.48%</span></li>
            </ul>"#,
        );
        let stat = stat(&doc, "spellhaste").unwrap();
        assert_eq!(stat.name, "Haste");
        assert_eq!(stat.value, "12.48%");
    }

    #[test]
    fn test_stat_lookup_miss_raises() {
        let doc = Document::parse("<ul></ul>");
        assert!(matches!(
            stat(&doc, "strength"),
            Err(Error::StatisticNotFound(_))
        ));
    }

    #[test]
    fn test_stat_empty_key_rejected_before_querying() {
        let doc = Document::parse("<ul></ul>");
        assert!(matches!(
            stat(&doc, ""),
            Err(Error::InvalidArgument { field: "stat" })
        ));
    }
}
