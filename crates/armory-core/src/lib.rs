//! # armory-core
//!
//! Core functionality for armory - a cache-aware scraper for game-profile
//! pages.
//!
//! This crate turns the semi-structured HTML of a third-party armory site
//! into typed character and guild records, while keeping request volume low
//! through a time-based local page cache. The upstream rate-limits (and
//! eventually bans) chatty clients, so the cache is not an optimization;
//! it is part of the contract.
//!
//! ## Architecture
//!
//! The pipeline has the same shape for every query:
//!
//! - **`cache`**: one file per logical resource, freshness by mtime
//! - **`fetcher`**: cache-first fetch with an empty-body retry budget
//! - **`document`**: tolerant structural-document handle (never fails to parse)
//! - **`extract`**: declarative selector table + pure per-area extractors
//! - **`client`**: the public operations, including roster pagination and
//!   dependent gem resolution
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use armory_core::{ArmoryClient, ArmoryConfig, GuildRef, RosterFilter, Result};
//!
//! # async fn run() -> Result<()> {
//! let client = ArmoryClient::new(ArmoryConfig::load()?)?;
//! let guild = GuildRef::new("Eitrigg", "We Know")?;
//! let roster = client.guild_roster(&guild, RosterFilter::default()).await?;
//! println!("{} members", roster.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. Malformed markup is never an
//! error (missing optional fields degrade to empty values), while missing
//! *required* structure (roster total count, statistic lookups) raises, and
//! bad arguments are rejected before any network or cache access.

/// Local page cache with mtime-based freshness
pub mod cache;
/// The public armory client
pub mod client;
/// Immutable configuration and fetch policy
pub mod config;
/// Tolerant structural-document handle
pub mod document;
/// Error types and result alias
pub mod error;
/// Structural extraction of typed records
pub mod extract;
/// Cache-aware HTTP fetching with empty-body retries
pub mod fetcher;
/// Dependent gem-name resolution
mod gems;
/// URL templates and cache-key naming
pub mod pages;
/// Core data types for extracted records
pub mod types;

// Re-export commonly used types
pub use cache::{CacheStore, Freshness};
pub use client::ArmoryClient;
pub use config::{ArmoryConfig, FetchPolicy, MaxAge};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use types::*;
