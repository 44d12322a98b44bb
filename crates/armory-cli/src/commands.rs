//! Subcommand implementations: build the refs, run the query, print JSON.

use crate::cli::Commands;
use crate::output::print_json;
use anyhow::Result;
use armory_core::{ArmoryClient, CharacterRef, GuildRef, RosterFilter};

/// Dispatch a parsed subcommand against the client.
pub async fn execute(client: &ArmoryClient, command: Commands) -> Result<()> {
    match command {
        Commands::Character {
            server,
            name,
            guild,
        } => {
            let character = CharacterRef::new(&server, name)?;
            let guild = guild
                .map(|g| GuildRef::new(&server, g))
                .transpose()?;
            let profile = client
                .character_profile(&character, guild.as_ref())
                .await?;
            print_json(&profile)
        },
        Commands::Items { server, name } => {
            let character = CharacterRef::new(server, name)?;
            print_json(&client.equipped_items(&character).await?)
        },
        Commands::Glyphs { server, name } => {
            let character = CharacterRef::new(server, name)?;
            print_json(&client.glyphs(&character).await?)
        },
        Commands::Stat { server, name, key } => {
            let character = CharacterRef::new(server, name)?;
            print_json(&client.stat(&character, &key).await?)
        },
        Commands::Statistic {
            server,
            name,
            category,
            stat,
        } => {
            let character = CharacterRef::new(server, name)?;
            let value = client.statistic(&character, category, &stat).await?;
            print_json(&serde_json::json!({ "name": stat, "value": value }))
        },
        Commands::StatNames {
            server,
            name,
            category,
        } => {
            let character = CharacterRef::new(server, name)?;
            print_json(&client.statistic_names(&character, category).await?)
        },
        Commands::Roster {
            server,
            guild,
            ranks,
            level,
        } => {
            let guild = GuildRef::new(server, guild)?;
            let filter = RosterFilter {
                with_rank: ranks,
                level,
            };
            print_json(&client.guild_roster(&guild, filter).await?)
        },
        Commands::Perks { server, guild } => {
            let guild = GuildRef::new(server, guild)?;
            print_json(&client.guild_perks(&guild).await?)
        },
        Commands::Contributors { server, guild } => {
            let guild = GuildRef::new(server, guild)?;
            print_json(&client.top_weekly_contributors(&guild).await?)
        },
    }
}
