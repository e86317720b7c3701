//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use relay_telegram::RelayConfig;

#[derive(Parser)]
#[command(name = "anon-relay")]
#[command(about = "Anonymous message relay bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay bot (config from env; flags override BOT_TOKEN and ADMIN_ID).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        admin_id: Option<i64>,
    },
    /// Print the author profile stored for an operator-side copy id.
    Lookup {
        admin_copy_id: i32,
        #[arg(long)]
        database_url: Option<String>,
    },
}

/// Load RelayConfig from environment; provided values override BOT_TOKEN and ADMIN_ID.
pub fn load_config(token: Option<String>, admin_id: Option<i64>) -> Result<RelayConfig> {
    Ok(RelayConfig::load(token, admin_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = Cli::parse_from(["anon-relay", "run", "--token", "t", "--admin-id", "42"]);
        match cli.command {
            Commands::Run { token, admin_id } => {
                assert_eq!(token.as_deref(), Some("t"));
                assert_eq!(admin_id, Some(42));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::parse_from(["anon-relay", "lookup", "555"]);
        assert!(matches!(
            cli.command,
            Commands::Lookup {
                admin_copy_id: 555,
                database_url: None
            }
        ));
    }
}
