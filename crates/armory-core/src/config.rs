//! Configuration for the armory scraping pipeline.
//!
//! Configuration is an immutable value constructed once at startup and passed
//! into [`ArmoryClient`](crate::ArmoryClient). There are no process-wide
//! globals: everything the fetcher and cache need travels inside
//! [`ArmoryConfig`].
//!
//! ## Example Configuration File
//!
//! ```toml
//! [urls]
//! character = "http://us.battle.net/wow/en/character/"
//! guild = "http://us.battle.net/wow/en/guild/"
//!
//! [cache]
//! dir = "/var/cache/armory"
//! # Seconds a cached page stays fresh. Negative disables caching entirely;
//! # every request then hits the upstream, which risks being rate limited.
//! max_age_secs = 18000
//!
//! [fetch]
//! max_retries = 5
//! retry_backoff_ms = 500
//! ```
//!
//! ## Loading
//!
//! ```rust,no_run
//! use armory_core::ArmoryConfig;
//!
//! let config = ArmoryConfig::load()?;
//! println!("cache dir: {}", config.cache_dir.display());
//! # Ok::<(), armory_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default character-page prefix (US armory).
///
/// The European armory works by swapping `us` for `eu`.
pub const DEFAULT_CHARACTER_BASE_URL: &str = "http://us.battle.net/wow/en/character/";

/// Default guild-page prefix (US armory).
pub const DEFAULT_GUILD_BASE_URL: &str = "http://us.battle.net/wow/en/guild/";

/// Default cache lifetime: five hours.
///
/// Anything >= one hour is reasonable. Short lifetimes multiply request
/// volume against an upstream that bans clients exceeding its request quota.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(18_000);

/// Default number of retries for empty-but-successful responses.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default delay between empty-response retries.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// How long a cache entry stays fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxAge {
    /// Entries never count as fresh; every request re-fetches.
    Disabled,
    /// Entries are fresh while younger than the given duration.
    Ttl(Duration),
}

impl MaxAge {
    /// Build from a signed seconds value; negative means disabled.
    ///
    /// This mirrors the upstream configuration convention where `-1` turns
    /// caching off.
    #[must_use]
    pub fn from_secs(secs: i64) -> Self {
        if secs < 0 {
            Self::Disabled
        } else {
            Self::Ttl(Duration::from_secs(secs.unsigned_abs()))
        }
    }
}

/// Retry and freshness policy applied by the fetcher.
#[derive(Debug, Clone, Copy)]
pub struct FetchPolicy {
    /// Freshness window for cached pages.
    pub max_age: MaxAge,
    /// How many times an empty response body is re-requested.
    pub max_retries: u32,
    /// Delay between empty-response retries.
    pub retry_backoff: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            max_age: MaxAge::Ttl(DEFAULT_MAX_AGE),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}

/// Immutable process-wide configuration for the armory client.
///
/// Constructed once (from defaults, a TOML file, or builder-style field
/// assignment in tests) and handed to [`ArmoryClient`](crate::ArmoryClient).
#[derive(Debug, Clone)]
pub struct ArmoryConfig {
    /// Prefix for character pages, ending in a trailing slash.
    pub character_base_url: String,
    /// Prefix for guild pages, ending in a trailing slash.
    pub guild_base_url: String,
    /// Directory holding one cache file per fetched resource.
    pub cache_dir: PathBuf,
    /// Freshness and retry policy.
    pub policy: FetchPolicy,
}

impl ArmoryConfig {
    /// Build a configuration with default URLs and policy rooted at the
    /// given cache directory.
    #[must_use]
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            character_base_url: DEFAULT_CHARACTER_BASE_URL.to_string(),
            guild_base_url: DEFAULT_GUILD_BASE_URL.to_string(),
            cache_dir: cache_dir.into(),
            policy: FetchPolicy::default(),
        }
    }

    /// Load configuration from the default locations.
    ///
    /// Resolution order for the cache directory:
    ///
    /// 1. `ARMORY_CACHE_DIR` environment variable
    /// 2. `dir` in the config file, if a config file exists
    /// 3. the platform cache directory (e.g. `~/.cache/armory` on Linux)
    /// 4. `~/.armory/cache` when the platform directories cannot be resolved
    ///
    /// The config file is looked up at `$ARMORY_CONFIG` or
    /// `<platform config dir>/armory/config.toml`; a missing file is not an
    /// error, defaults apply.
    pub fn load() -> Result<Self> {
        let file = Self::config_file_path()
            .filter(|p| p.exists())
            .map(|p| Self::read_file(&p))
            .transpose()?
            .unwrap_or_default();
        Self::from_file(file)
    }

    /// Load configuration from an explicit TOML file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::from_file(Self::read_file(path)?)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Storage(format!("failed to read config {}: {e}", path.display())))?;
        Ok(toml::from_str(&contents)?)
    }

    fn from_file(file: ConfigFile) -> Result<Self> {
        let cache_dir = match std::env::var("ARMORY_CACHE_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => file.cache.dir.map_or_else(Self::default_cache_dir, Ok)?,
        };

        Ok(Self {
            character_base_url: file
                .urls
                .character
                .unwrap_or_else(|| DEFAULT_CHARACTER_BASE_URL.to_string()),
            guild_base_url: file
                .urls
                .guild
                .unwrap_or_else(|| DEFAULT_GUILD_BASE_URL.to_string()),
            cache_dir,
            policy: FetchPolicy {
                max_age: file
                    .cache
                    .max_age_secs
                    .map_or(MaxAge::Ttl(DEFAULT_MAX_AGE), MaxAge::from_secs),
                max_retries: file.fetch.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
                retry_backoff: file
                    .fetch
                    .retry_backoff_ms
                    .map_or(DEFAULT_RETRY_BACKOFF, Duration::from_millis),
            },
        })
    }

    fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ARMORY_CONFIG") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        directories::ProjectDirs::from("", "", "armory")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn default_cache_dir() -> Result<PathBuf> {
        if let Some(dirs) = directories::ProjectDirs::from("", "", "armory") {
            return Ok(dirs.cache_dir().to_path_buf());
        }
        let base = directories::BaseDirs::new()
            .ok_or_else(|| Error::Storage("failed to determine home directory".into()))?;
        Ok(base.home_dir().join(".armory").join("cache"))
    }
}

/// On-disk TOML shape. All sections and fields optional; missing values
/// fall back to the defaults above.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(default)]
    urls: UrlsSection,
    #[serde(default)]
    cache: CacheSection,
    #[serde(default)]
    fetch: FetchSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct UrlsSection {
    character: Option<String>,
    guild: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct CacheSection {
    dir: Option<PathBuf>,
    max_age_secs: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct FetchSection {
    max_retries: Option<u32>,
    retry_backoff_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArmoryConfig::with_cache_dir("/tmp/armory-test");
        assert_eq!(config.character_base_url, DEFAULT_CHARACTER_BASE_URL);
        assert_eq!(config.guild_base_url, DEFAULT_GUILD_BASE_URL);
        assert_eq!(config.policy.max_retries, 5);
        assert_eq!(config.policy.retry_backoff, Duration::from_millis(500));
        assert_eq!(config.policy.max_age, MaxAge::Ttl(Duration::from_secs(18_000)));
    }

    #[test]
    fn test_negative_max_age_disables_caching() {
        assert_eq!(MaxAge::from_secs(-1), MaxAge::Disabled);
        assert_eq!(MaxAge::from_secs(0), MaxAge::Ttl(Duration::ZERO));
        assert_eq!(MaxAge::from_secs(3600), MaxAge::Ttl(Duration::from_secs(3600)));
    }

    #[test]
    fn test_config_file_parse() {
        let file: ConfigFile = toml::from_str(
            r#"
            [urls]
            character = "http://eu.battle.net/wow/en/character/"

            [cache]
            max_age_secs = -1

            [fetch]
            max_retries = 2
            retry_backoff_ms = 10
            "#,
        )
        .unwrap();
        let config = ArmoryConfig::from_file(file).unwrap();
        assert_eq!(
            config.character_base_url,
            "http://eu.battle.net/wow/en/character/"
        );
        assert_eq!(config.guild_base_url, DEFAULT_GUILD_BASE_URL);
        assert_eq!(config.policy.max_age, MaxAge::Disabled);
        assert_eq!(config.policy.max_retries, 2);
        assert_eq!(config.policy.retry_backoff, Duration::from_millis(10));
    }
}
