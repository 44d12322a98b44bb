//! The public client: one entry point per armory query.
//!
//! [`ArmoryClient`] owns the configuration, the page/key builders, and the
//! cache-aware fetcher. Every operation follows the same pipeline (build
//! the resource, fetch cache-first, parse, extract), and sub-fetches
//! (roster pages, gems) run sequentially so the documented orderings (page
//! order, socket order) hold by construction.
//!
//! ```rust,no_run
//! use armory_core::{ArmoryClient, ArmoryConfig, CharacterRef, Result};
//!
//! # async fn run() -> Result<()> {
//! let client = ArmoryClient::new(ArmoryConfig::load()?)?;
//! let character = CharacterRef::new("Eitrigg", "Kastang")?;
//! let summary = client.character_summary(&character).await?;
//! println!("{} is a level {} {}", character.name(), summary.level, summary.class);
//! # Ok(())
//! # }
//! ```

use crate::cache::{CacheStore, Freshness};
use crate::config::ArmoryConfig;
use crate::document::Document;
use crate::extract;
use crate::extract::guild::page_count;
use crate::fetcher::Fetcher;
use crate::gems;
use crate::pages::{Pages, Resource};
use crate::types::{
    CharacterProfile, CharacterRef, CharacterSummary, EquippedItem, Gender, Glyph,
    GuildRosterEntry, GuildRef, RosterFilter, StatPair,
};
use crate::{Error, Result};
use tracing::info;

/// Cache-aware client for character and guild queries.
pub struct ArmoryClient {
    config: ArmoryConfig,
    pages: Pages,
    fetcher: Fetcher,
}

impl ArmoryClient {
    /// Build a client from configuration, opening (or creating) the cache
    /// directory.
    pub fn new(config: ArmoryConfig) -> Result<Self> {
        let pages = Pages::new(&config.character_base_url, &config.guild_base_url)?;
        let cache = CacheStore::new(&config.cache_dir)?;
        let fetcher = Fetcher::new(cache, config.policy)?;
        Ok(Self {
            config,
            pages,
            fetcher,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ArmoryConfig {
        &self.config
    }

    /// All single-page character fields.
    pub async fn character_summary(&self, character: &CharacterRef) -> Result<CharacterSummary> {
        let markup = self.page(&self.pages.character(character)?).await?;
        extract::character::summary(&Document::parse(&markup))
    }

    /// One named statistic from the character page, by `data-id` key.
    pub async fn stat(&self, character: &CharacterRef, key: &str) -> Result<StatPair> {
        if key.is_empty() {
            return Err(Error::InvalidArgument { field: "stat" });
        }
        let markup = self.page(&self.pages.character(character)?).await?;
        extract::character::stat(&Document::parse(&markup), key)
    }

    /// All 19 equipment slots with gems resolved to display names.
    ///
    /// Each socketed gem costs one sub-fetch, served from the pinned cache
    /// after its first resolution.
    pub async fn equipped_items(&self, character: &CharacterRef) -> Result<Vec<EquippedItem>> {
        let markup = self.page(&self.pages.character(character)?).await?;
        let slots = extract::equipment::item_slots(&Document::parse(&markup))?;

        let mut items = Vec::with_capacity(slots.len());
        for slot in slots {
            if slot.is_empty() {
                items.push(EquippedItem::empty(slot.slot));
                continue;
            }
            let gems = gems::resolve_gems(&self.fetcher, &self.pages, &slot.gem_refs).await?;
            items.push(EquippedItem {
                slot: slot.slot,
                name: slot.name,
                item_level: slot.item_level,
                enchant: slot.enchant,
                gems,
            });
        }
        Ok(items)
    }

    /// Every glyph equipped on the character's primary spec.
    pub async fn glyphs(&self, character: &CharacterRef) -> Result<Vec<Glyph>> {
        let markup = self.page(&self.pages.talents(character)?).await?;
        extract::glyphs::glyphs(&Document::parse(&markup))
    }

    /// Value of a named statistic from a statistic category page.
    pub async fn statistic(
        &self,
        character: &CharacterRef,
        category: u32,
        name: &str,
    ) -> Result<String> {
        let markup = self.page(&self.pages.statistic(character, category)?).await?;
        extract::statistics::statistic_value(&Document::parse(&markup), name)
    }

    /// Every statistic name in a category, in page order.
    pub async fn statistic_names(
        &self,
        character: &CharacterRef,
        category: u32,
    ) -> Result<Vec<String>> {
        let markup = self.page(&self.pages.statistic(character, category)?).await?;
        extract::statistics::statistic_names(&Document::parse(&markup))
    }

    /// The full guild roster, across however many pages it spans.
    ///
    /// Fetches the summary view for the total member count, then walks
    /// pages `1..=ceil(total/100)` in order. Each page is its own cache
    /// entry; rows keep page-then-document order. The optional level filter
    /// drops rows during extraction, per page.
    pub async fn guild_roster(
        &self,
        guild: &GuildRef,
        filter: RosterFilter,
    ) -> Result<Vec<GuildRosterEntry>> {
        let summary = self.page(&self.pages.roster_summary(guild)?).await?;
        let total = extract::guild::total_members(&Document::parse(&summary))?;
        let page_total = page_count(total);
        info!(
            "guild '{}': {total} members across {page_total} roster page(s)",
            guild.guild()
        );

        let mut entries = Vec::new();
        for page in 1..=page_total {
            let markup = self.page(&self.pages.roster_page(guild, page)?).await?;
            let mut rows = extract::guild::roster_rows(&Document::parse(&markup), filter)?;
            entries.append(&mut rows);
        }
        Ok(entries)
    }

    /// Unlocked guild perks, in unlock order.
    pub async fn guild_perks(&self, guild: &GuildRef) -> Result<Vec<String>> {
        let markup = self.page(&self.pages.perks(guild)?).await?;
        extract::guild::perks(&Document::parse(&markup))
    }

    /// The guild's top weekly contributors (at most five).
    pub async fn top_weekly_contributors(&self, guild: &GuildRef) -> Result<Vec<String>> {
        let markup = self.page(&self.pages.guild_summary(guild)?).await?;
        extract::guild::top_contributors(&Document::parse(&markup))
    }

    /// Gender of a guild member, read off the roster page.
    ///
    /// The character page itself never exposes gender; the portrait URL on
    /// the roster is the only trace of it.
    pub async fn gender(&self, guild: &GuildRef, character: &str) -> Result<Gender> {
        if character.is_empty() {
            return Err(Error::InvalidArgument { field: "character" });
        }
        let markup = self.page(&self.pages.roster_summary(guild)?).await?;
        extract::guild::gender(&Document::parse(&markup), character)
    }

    /// The full character aggregate: summary, equipment (gems resolved),
    /// glyphs, and, when a guild is given, gender.
    pub async fn character_profile(
        &self,
        character: &CharacterRef,
        guild: Option<&GuildRef>,
    ) -> Result<CharacterProfile> {
        let summary = self.character_summary(character).await?;
        let items = self.equipped_items(character).await?;
        let glyphs = self.glyphs(character).await?;
        let gender = match guild {
            Some(guild) => self.gender(guild, character.name()).await?,
            None => Gender::Unknown,
        };
        Ok(CharacterProfile {
            summary,
            gender,
            items,
            glyphs,
        })
    }

    async fn page(&self, resource: &Resource) -> Result<String> {
        self.fetcher
            .fetch(&resource.url, &resource.key, Freshness::ByAge)
            .await
    }
}
