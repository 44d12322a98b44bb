//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cache-aware scraper for armory character and guild pages.
#[derive(Debug, Parser)]
#[command(name = "armory", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long, global = true, env = "ARMORY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the cache directory
    #[arg(long, global = true, env = "ARMORY_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per armory query.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full character profile: summary, equipment, glyphs, gender
    Character {
        /// Server (realm) name
        server: String,
        /// Character name
        name: String,
        /// Guild to resolve gender from (it only appears on roster pages)
        #[arg(long)]
        guild: Option<String>,
    },
    /// The 19 equipment slots with gems resolved
    Items {
        /// Server (realm) name
        server: String,
        /// Character name
        name: String,
    },
    /// Equipped glyphs from the primary talent page
    Glyphs {
        /// Server (realm) name
        server: String,
        /// Character name
        name: String,
    },
    /// One named statistic from the character page, by data-id key
    Stat {
        /// Server (realm) name
        server: String,
        /// Character name
        name: String,
        /// Statistic key, e.g. `strength` or `spellhaste`
        key: String,
    },
    /// Look up a statistic by display name within a category page
    Statistic {
        /// Server (realm) name
        server: String,
        /// Character name
        name: String,
        /// Statistic category page number, e.g. 130
        category: u32,
        /// Statistic display name, e.g. "Beverages consumed"
        stat: String,
    },
    /// List every statistic name in a category
    StatNames {
        /// Server (realm) name
        server: String,
        /// Character name
        name: String,
        /// Statistic category page number
        category: u32,
    },
    /// Guild roster across all pages
    Roster {
        /// Server (realm) name
        server: String,
        /// Guild name
        guild: String,
        /// Include each member's guild rank
        #[arg(long)]
        ranks: bool,
        /// Keep only members of this level
        #[arg(long)]
        level: Option<u32>,
    },
    /// Unlocked guild perks
    Perks {
        /// Server (realm) name
        server: String,
        /// Guild name
        guild: String,
    },
    /// Top weekly guild contributors
    Contributors {
        /// Server (realm) name
        server: String,
        /// Guild name
        guild: String,
    },
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_roster_flags_parse() {
        let cli = Cli::parse_from([
            "armory", "roster", "Eitrigg", "We Know", "--ranks", "--level", "85",
        ]);
        match cli.command {
            Commands::Roster {
                guild,
                ranks,
                level,
                ..
            } => {
                assert_eq!(guild, "We Know");
                assert!(ranks);
                assert_eq!(level, Some(85));
            },
            other => panic!("unexpected command {other:?}"),
        }
    }
}
