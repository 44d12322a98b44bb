//! The declarative field table: logical field → structural path → sentinel.
//!
//! The armory's markup schema is externally owned. It is assumed stable but
//! is known to occasionally omit fields, so these paths are the *only* place
//! the schema is spelled out; every getter goes through this table. When the
//! upstream moves an element, the fix is one line here.

/// Character level badge.
pub const LEVEL: &str = "span.level";
/// Class link in the character header.
pub const CLASS: &str = "a.class";
/// Race link in the character header.
pub const RACE: &str = "a.race";
/// Achievement point total.
pub const ACHIEVEMENT_POINTS: &str = "div.achievements a";
/// Health value in the vitals bar.
pub const HEALTH: &str = "li.health span.value";
/// Power (mana, rage, ...) value in the vitals bar.
pub const POWER: &str = "li#summary-power span.value";
/// Average equipped item level.
pub const ITEM_LEVEL: &str = "span.item-level strong";

/// Profession slot names, two matches in page order.
pub const PROFESSION_NAMES: &str = "span.profession-details span.name";
/// Profession skill levels, two matches in page order.
pub const PROFESSION_VALUES: &str = "span.profession-details span.value";
/// Placeholder the upstream renders for an unset profession slot.
pub const PROFESSION_SENTINEL: &str = "No profession";

/// Talent tree names, two matches in page order.
pub const TALENT_NAMES: &str = "span.name-build span.name";
/// Talent point distributions, two matches in page order.
pub const TALENT_BUILDS: &str = "span.name-build span.build";
/// Placeholder the upstream renders for a tree with no talents selected.
pub const TALENT_SENTINEL: &str = "Talents";

/// Name half of a named character-page statistic, by `data-id`.
#[must_use]
pub fn stat_name(key: &str) -> String {
    format!("li[data-id=\"{key}\"] span.name")
}

/// Value half of a named character-page statistic, by `data-id`.
#[must_use]
pub fn stat_value(key: &str) -> String {
    format!("li[data-id=\"{key}\"] span.value")
}

/// One equipment slot container, by fixed slot position.
#[must_use]
pub fn equipment_slot(slot: u8) -> String {
    format!("div#summary-inventory div[data-slot=\"{slot}\"]")
}

/// Item name within an equipment slot.
pub const ITEM_NAME: &str = "span.name";
/// Item level within an equipment slot.
pub const ITEM_SLOT_LEVEL: &str = "span.item-level";
/// Enchant description within an equipment slot.
pub const ITEM_ENCHANT: &str = "span.enchant";
/// Socketed gem references within an equipment slot, in socket order.
pub const ITEM_GEM_LINKS: &str = "a.gem";

/// Separator in item-page titles; the display name is the first segment.
pub const TITLE_SEPARATOR: &str = " - ";

/// Glyph anchor within one category column of the talent page.
#[must_use]
pub fn glyph_links(kind: &str) -> String {
    format!("div.character-glyphs-column.glyphs-{kind} ul li.filled a")
}

/// Glyph name within a glyph anchor.
pub const GLYPH_NAME: &str = "span.name";

/// Roster table body; the first one on the page holds the member rows.
pub const ROSTER_BODY: &str = "tbody";
/// One roster row.
pub const ROSTER_ROW: &str = "tr";
/// Cells of a roster row. Fixed layout: name, race, class, level, rank.
pub const ROSTER_CELL: &str = "td";
/// Column index of the member name.
pub const ROSTER_NAME_CELL: usize = 0;
/// Column index of the level.
pub const ROSTER_LEVEL_CELL: usize = 3;
/// Column index of the rank.
pub const ROSTER_RANK_CELL: usize = 4;
/// Total member count on the roster summary view.
pub const ROSTER_TOTAL: &str = "strong.results-total";

/// Guild level on the perks page; perks `p1..p(level-1)` are unlocked.
pub const GUILD_LEVEL: &str = "span.level strong";

/// One unlocked perk by ordinal.
#[must_use]
pub fn perk(index: u32) -> String {
    format!("li#p{index} div strong")
}

/// Weekly contributor names on the guild summary page.
pub const CONTRIBUTOR_NAMES: &str = "td.name a";

/// Statistic names on a statistic category page, in document order.
pub const STATISTIC_NAMES: &str = "dl dt";
/// Statistic values, positionally aligned with [`STATISTIC_NAMES`].
pub const STATISTIC_VALUES: &str = "dl dd";
