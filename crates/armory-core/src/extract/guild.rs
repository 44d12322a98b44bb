//! Field extraction for guild pages: roster rows, perks, contributors.

use super::{select_in, selectors, texts};
use crate::document::{Document, text_of};
use crate::types::{Gender, GuildRosterEntry, RosterFilter};
use crate::{Error, Result};

/// Fixed upstream roster page size.
pub const PAGE_CAPACITY: u32 = 100;

/// The guild summary page lists this many weekly contributors.
pub const MAX_CONTRIBUTORS: usize = 5;

/// Number of roster pages needed for `total` members.
#[must_use]
pub const fn page_count(total: u32) -> u32 {
    total.div_ceil(PAGE_CAPACITY)
}

/// Total member count from the roster summary view.
///
/// This field is required by the pagination contract; its absence is an
/// extraction failure, not an empty guild.
pub fn total_members(doc: &Document) -> Result<u32> {
    let text = doc
        .first_text(selectors::ROSTER_TOTAL)?
        .ok_or_else(|| Error::Extraction("guild roster total member count not found".into()))?;
    text.replace(',', "")
        .parse()
        .map_err(|_| Error::Extraction(format!("unparseable roster member count '{text}'")))
}

/// Member rows of one roster page, in document order.
///
/// The level filter applies per row, before the rank cell is read, so a
/// filtered-out row never contributes a rank lookup. The rank is the
/// trailing character of the rank cell (the upstream renders rank icons with
/// a numeric suffix).
pub fn roster_rows(doc: &Document, filter: RosterFilter) -> Result<Vec<GuildRosterEntry>> {
    let mut entries = Vec::new();
    for row in member_rows(doc)? {
        let cells = select_in(&row, selectors::ROSTER_CELL)?;
        let Some(name_cell) = cells.get(selectors::ROSTER_NAME_CELL) else {
            continue;
        };
        let name = text_of(name_cell);
        if name.is_empty() {
            continue;
        }

        let level = cells
            .get(selectors::ROSTER_LEVEL_CELL)
            .map(text_of)
            .and_then(|t| t.parse().ok());
        if let Some(wanted) = filter.level {
            if level != Some(wanted) {
                continue;
            }
        }

        let rank = if filter.with_rank {
            cells
                .get(selectors::ROSTER_RANK_CELL)
                .map(text_of)
                .and_then(|t| t.chars().next_back())
                .map(String::from)
        } else {
            None
        };

        entries.push(GuildRosterEntry { name, rank, level });
    }
    Ok(entries)
}

/// Gender of `character`, resolved from their roster row's portrait image.
///
/// The character page does not expose gender at all; the only trace is the
/// portrait URL on the roster, whose fifth-from-last character is the gender
/// id. An absent member or an unparseable URL yields [`Gender::Unknown`].
pub fn gender(doc: &Document, character: &str) -> Result<Gender> {
    let wanted = character.to_lowercase();
    for row in member_rows(doc)? {
        let cells = select_in(&row, selectors::ROSTER_CELL)?;
        let Some(name_cell) = cells.get(selectors::ROSTER_NAME_CELL) else {
            continue;
        };
        if text_of(name_cell).to_lowercase() != wanted {
            continue;
        }
        let id = select_in(&row, "img")?
            .first()
            .and_then(|img| img.value().attr("src"))
            .and_then(|src| src.chars().rev().nth(4));
        return Ok(id.map_or(Gender::Unknown, Gender::from_id));
    }
    Ok(Gender::Unknown)
}

/// Unlocked guild perks, in unlock order.
///
/// Perks are laid out as `p1..pN`; a guild of level `L` has perks
/// `p1..p(L-1)` unlocked.
pub fn perks(doc: &Document) -> Result<Vec<String>> {
    let level: u32 = doc
        .first_text(selectors::GUILD_LEVEL)?
        .ok_or_else(|| Error::Extraction("guild level not found on perks page".into()))?
        .parse()
        .map_err(|_| Error::Extraction("unparseable guild level".into()))?;

    let mut perks = Vec::new();
    for index in 1..level {
        if let Some(perk) = doc.first_text(&selectors::perk(index))? {
            perks.push(perk);
        }
    }
    Ok(perks)
}

/// The top weekly contributors from the guild summary page, at most
/// [`MAX_CONTRIBUTORS`].
pub fn top_contributors(doc: &Document) -> Result<Vec<String>> {
    let mut names = texts(doc, selectors::CONTRIBUTOR_NAMES)?;
    names.truncate(MAX_CONTRIBUTORS);
    Ok(names)
}

/// Rows of the first table body on the page; the roster table is always the
/// first one.
fn member_rows<'a>(doc: &'a Document) -> Result<Vec<scraper::ElementRef<'a>>> {
    match doc.select(selectors::ROSTER_BODY)?.first() {
        Some(body) => select_in(body, selectors::ROSTER_ROW),
        None => Ok(Vec::new()),
    }
}
