//! Core data types for extracted armory records.
//!
//! Everything here is a read-only projection of fetched markup at request
//! time. Records are never mutated after construction; re-fetching a page
//! produces a new value.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of fixed equipment positions on a character.
pub const EQUIPMENT_SLOTS: usize = 19;

/// A validated (server, character) pair.
///
/// Construction fails with [`Error::InvalidArgument`] when either part is
/// empty; no network or cache access happens before this check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRef {
    server: String,
    name: String,
}

impl CharacterRef {
    /// Validate and build a character reference.
    pub fn new(server: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let server = server.into();
        let name = name.into();
        if server.is_empty() {
            return Err(Error::InvalidArgument { field: "server" });
        }
        if name.is_empty() {
            return Err(Error::InvalidArgument { field: "character" });
        }
        Ok(Self { server, name })
    }

    /// Server (realm) name.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Character name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A validated (server, guild) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRef {
    server: String,
    guild: String,
}

impl GuildRef {
    /// Validate and build a guild reference.
    pub fn new(server: impl Into<String>, guild: impl Into<String>) -> Result<Self> {
        let server = server.into();
        let guild = guild.into();
        if server.is_empty() {
            return Err(Error::InvalidArgument { field: "server" });
        }
        if guild.is_empty() {
            return Err(Error::InvalidArgument { field: "guild" });
        }
        Ok(Self { server, guild })
    }

    /// Server (realm) name.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Guild name.
    #[must_use]
    pub fn guild(&self) -> &str {
        &self.guild
    }
}

/// Character gender as exposed by the roster page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Gender id `0`.
    Male,
    /// Gender id `1`.
    Female,
    /// Id missing or unparseable.
    Unknown,
}

impl Gender {
    /// Map the upstream's single-character gender id.
    #[must_use]
    pub const fn from_id(id: char) -> Self {
        match id {
            '0' => Self::Male,
            '1' => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// One profession slot. An unset slot has empty `name` and `level`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    /// Profession name, empty when unset.
    pub name: String,
    /// Skill level as displayed, empty when unset.
    pub level: String,
}

/// The character's two profession slots, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professions {
    /// First profession slot.
    pub first: Profession,
    /// Second profession slot.
    pub second: Profession,
}

/// One talent tree slot. An unset slot has empty `name` and `points`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentTree {
    /// Tree name, empty when no talents are selected for this tree.
    pub name: String,
    /// Point distribution as displayed (e.g. `31/2/8`), empty when unset.
    pub points: String,
}

/// The character's two talent trees, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talents {
    /// First talent tree.
    pub first: TalentTree,
    /// Second talent tree.
    pub second: TalentTree,
}

/// A named statistic from the character summary page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPair {
    /// Display name of the statistic.
    pub name: String,
    /// Display value of the statistic.
    pub value: String,
}

/// Single-page character fields.
///
/// Scalar fields hold the upstream's display text; a field the markup did
/// not expose is the empty string rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Character level.
    pub level: String,
    /// Class name.
    pub class: String,
    /// Race name.
    pub race: String,
    /// Achievement point total.
    pub achievement_points: String,
    /// Health pool.
    pub health: String,
    /// Power pool (mana, rage, ...).
    pub power: String,
    /// Average equipped item level.
    pub item_level: String,
    /// Both profession slots.
    pub professions: Professions,
    /// Both talent trees.
    pub talents: Talents,
}

/// Full character aggregate, including the secondary-page data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Single-page summary fields.
    pub summary: CharacterSummary,
    /// Gender, resolved from the guild roster page when a guild is known.
    pub gender: Gender,
    /// All 19 equipment slots, in slot order.
    pub items: Vec<EquippedItem>,
    /// Equipped glyphs across all three categories.
    pub glyphs: Vec<Glyph>,
}

/// One equipment slot.
///
/// Slots are positional: index `i` of the containing sequence is always
/// equipment position `i`. A slot with nothing equipped is the empty-slot
/// marker produced by [`EquippedItem::empty`]: all fields blank, which is
/// distinct from a populated record whose optional fields are blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    /// Equipment position, `0..=18`.
    pub slot: u8,
    /// Item name; empty for an empty slot.
    pub name: String,
    /// Item level as displayed; empty when absent.
    pub item_level: String,
    /// Enchant description; empty when absent.
    pub enchant: String,
    /// Display names of socketed gems, in socket order.
    pub gems: Vec<String>,
}

impl EquippedItem {
    /// The explicit empty-slot marker for `slot`.
    #[must_use]
    pub fn empty(slot: u8) -> Self {
        Self {
            slot,
            ..Self::default()
        }
    }

    /// True when nothing is equipped in this slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// One guild roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRosterEntry {
    /// Member name.
    pub name: String,
    /// Guild rank, when requested and present.
    pub rank: Option<String>,
    /// Character level, when the roster row carried a parseable one.
    pub level: Option<u32>,
}

/// Glyph category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    /// Major glyph.
    Major,
    /// Minor glyph.
    Minor,
    /// Prime glyph.
    Prime,
}

impl GlyphKind {
    /// All categories, in the order the talent page lays them out.
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Prime];

    /// The category slug used in the page's class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Prime => "prime",
        }
    }
}

/// One equipped glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// Glyph name.
    pub name: String,
    /// Category column the glyph was found in.
    pub kind: GlyphKind,
    /// Href of the glyph's item page.
    pub url: String,
    /// Upstream item id, the trailing segment of `url`.
    pub item_id: String,
}

/// Row selection options for a guild roster query.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterFilter {
    /// Also extract each member's guild rank.
    pub with_rank: bool,
    /// Keep only rows whose level equals this value.
    pub level: Option<u32>,
}
