//! Local filesystem cache for fetched armory pages.
//!
//! One file per logical resource, named by its cache key, under a configured
//! directory. Freshness is derived from the file modification timestamp:
//! no sidecar metadata, no explicit deletion (entries expire passively by
//! growing stale).
//!
//! Two freshness modes exist:
//!
//! - [`Freshness::ByAge`]: an entry is fresh while younger than
//!   [`MaxAge::Ttl`](crate::MaxAge); [`MaxAge::Disabled`](crate::MaxAge)
//!   makes every entry stale.
//! - [`Freshness::Pinned`]: mere existence counts as fresh, regardless of
//!   age or policy. Used for immutable sub-resources (gem pages) that never
//!   change after creation, so re-fetching them is pure waste.

use crate::config::{FetchPolicy, MaxAge};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Freshness mode for a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Fresh while younger than the policy's max age.
    ByAge,
    /// Fresh as long as an entry exists. For immutable resources.
    Pinned,
}

/// Keyed, overwrite-only file storage with mtime-based freshness.
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Open (creating if necessary) a cache rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| Error::Storage(format!("failed to create cache directory: {e}")))?;
        Ok(Self { root })
    }

    /// Root directory of this cache.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True iff an entry exists for `key` and is fresh under `policy` in the
    /// given mode.
    pub fn is_fresh(&self, key: &str, policy: &FetchPolicy, freshness: Freshness) -> Result<bool> {
        self.is_fresh_at(key, policy, freshness, SystemTime::now())
    }

    /// Freshness check against an explicit `now`, so the age window is
    /// testable without real clocks.
    pub fn is_fresh_at(
        &self,
        key: &str,
        policy: &FetchPolicy,
        freshness: Freshness,
        now: SystemTime,
    ) -> Result<bool> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(false);
        }

        // Pinned entries never expire, even with caching disabled.
        if freshness == Freshness::Pinned {
            return Ok(true);
        }

        let max_age = match policy.max_age {
            MaxAge::Disabled => return Ok(false),
            MaxAge::Ttl(d) => d,
        };

        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| Error::Storage(format!("failed to stat cache entry '{key}': {e}")))?;

        // A modification time in the future (clock skew) counts as age zero.
        let age = now.duration_since(modified).unwrap_or_default();
        Ok(age <= max_age)
    }

    /// Read an entry's content, or `None` when no entry exists.
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| Error::Storage(format!("failed to read cache entry '{key}': {e}")))
    }

    /// Write an entry, unconditionally overwriting any previous content.
    ///
    /// Writes go through a temp file and rename so a reader never observes a
    /// half-written page.
    pub fn write(&self, key: &str, content: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, content)
            .map_err(|e| Error::Storage(format!("failed to write cache entry '{key}': {e}")))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| Error::Storage(format!("failed to commit cache entry '{key}': {e}")))?;
        debug!("cached {} bytes under '{}'", content.len(), key);
        Ok(())
    }

    /// When the entry for `key` was last written, if it exists.
    pub fn last_fetched_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| Error::Storage(format!("failed to stat cache entry '{key}': {e}")))?;
        Ok(Some(DateTime::<Utc>::from(modified)))
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.root.join(key))
    }

    /// Keys are produced internally from resource identity, but validate at
    /// the boundary anyway: an empty key is a contract violation and path
    /// separators would escape the cache root.
    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidArgument { field: "cache key" });
        }
        if key.contains("..") || key.contains('/') || key.contains('\\') || key.contains('\0') {
            return Err(Error::Storage(format!(
                "invalid cache key '{key}': contains path characters"
            )));
        }
        Ok(())
    }
}
