//! URL templates and cache-key naming for every fetchable resource.
//!
//! A [`Resource`] bundles the two halves of a resource's identity: the
//! upstream URL and the deterministic cache key derived from the same
//! parameters. Keys follow a fixed naming convention (resource type +
//! identity + page/category number) so the same logical resource always maps
//! to the same cache file.

use crate::types::{CharacterRef, GuildRef};
use crate::{Error, Result};
use url::Url;

/// A fetchable resource: upstream URL plus its cache key.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Fully built upstream URL.
    pub url: Url,
    /// Deterministic cache key for this resource.
    pub key: String,
}

/// Builds [`Resource`]s from configured base URLs.
///
/// Character and guild names are percent-encoded into URL path segments;
/// cache keys keep the raw names (the cache layer rejects keys that would
/// escape its directory).
pub struct Pages {
    character_base: Url,
    guild_base: Url,
}

impl Pages {
    /// Parse the configured base URLs.
    pub fn new(character_base_url: &str, guild_base_url: &str) -> Result<Self> {
        Ok(Self {
            character_base: parse_base(character_base_url)?,
            guild_base: parse_base(guild_base_url)?,
        })
    }

    /// Character summary page: `<base>/<server>/<name>/simple`.
    pub fn character(&self, character: &CharacterRef) -> Result<Resource> {
        Ok(Resource {
            url: join(
                &self.character_base,
                &[character.server(), character.name(), "simple"],
            )?,
            key: format!("{}.html", character.name()),
        })
    }

    /// Primary talent page, which also carries the glyph columns.
    pub fn talents(&self, character: &CharacterRef) -> Result<Resource> {
        Ok(Resource {
            url: join(
                &self.character_base,
                &[character.server(), character.name(), "talent", "primary"],
            )?,
            key: format!("talents_{}.html", character.name()),
        })
    }

    /// Statistic category page: `<base>/<server>/<name>/statistic/<category>`.
    pub fn statistic(&self, character: &CharacterRef, category: u32) -> Result<Resource> {
        Ok(Resource {
            url: join(
                &self.character_base,
                &[
                    character.server(),
                    character.name(),
                    "statistic",
                    &category.to_string(),
                ],
            )?,
            key: format!("{}_{}.html", category, character.name()),
        })
    }

    /// Guild roster summary view (first page, no page parameter).
    pub fn roster_summary(&self, guild: &GuildRef) -> Result<Resource> {
        Ok(Resource {
            url: join(&self.guild_base, &[guild.server(), guild.guild(), "roster"])?,
            key: format!("{}_roster.html", guild.guild()),
        })
    }

    /// One roster page of at most 100 rows. Pages are numbered from 1 and
    /// each page is an independent cache entry.
    pub fn roster_page(&self, guild: &GuildRef, page: u32) -> Result<Resource> {
        let mut url = join(&self.guild_base, &[guild.server(), guild.guild(), "roster"])?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(Resource {
            url,
            key: format!("{}_roster_p{page}.html", guild.guild()),
        })
    }

    /// Guild perks page.
    pub fn perks(&self, guild: &GuildRef) -> Result<Resource> {
        Ok(Resource {
            url: join(&self.guild_base, &[guild.server(), guild.guild(), "perk"])?,
            key: format!("{}_perks.html", guild.guild()),
        })
    }

    /// Guild summary page (weekly contributor list).
    pub fn guild_summary(&self, guild: &GuildRef) -> Result<Resource> {
        Ok(Resource {
            url: join(&self.guild_base, &[guild.server(), guild.guild()])?,
            key: format!("{}_contrib.html", guild.guild()),
        })
    }

    /// Item page for a gem reference found in equipment markup.
    ///
    /// `href` may be absolute or site-relative; it is resolved against the
    /// character base URL. The cache key is derived from the reference's
    /// trailing path segment (the upstream item id), so the same gem id maps
    /// to one cache entry no matter which item referenced it.
    pub fn item(&self, href: &str) -> Result<Resource> {
        let url = self
            .character_base
            .join(href)
            .map_err(|e| Error::InvalidUrl(format!("gem reference '{href}': {e}")))?;
        let id = trailing_segment(&url)
            .ok_or_else(|| Error::InvalidUrl(format!("gem reference '{href}' has no item id")))?;
        Ok(Resource {
            key: format!("item_{id}.html"),
            url,
        })
    }
}

fn parse_base(base: &str) -> Result<Url> {
    let url =
        Url::parse(base).map_err(|e| Error::InvalidUrl(format!("base URL '{base}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(format!(
            "base URL '{base}' cannot carry path segments"
        )));
    }
    Ok(url)
}

fn join(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut parts = url
            .path_segments_mut()
            .map_err(|()| Error::InvalidUrl(format!("base URL '{base}' is opaque")))?;
        // Drop the empty segment a trailing slash leaves behind, then extend.
        parts.pop_if_empty();
        parts.extend(segments);
    }
    Ok(url)
}

fn trailing_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|s| !s.is_empty())
        .next_back()
        .map(str::to_string)
}
