//! anon-relay: anonymous message relay bot. Config from env (.env loaded first) and optional CLI args.

use anyhow::Result;
use clap::Parser;
use relay_cli::{load_config, lookup, run_relay, Cli, Commands};
use relay_telegram::DEFAULT_DATABASE_URL;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, admin_id } => {
            let config = load_config(token, admin_id)?;
            run_relay(config).await
        }
        Commands::Lookup {
            admin_copy_id,
            database_url,
        } => {
            let database_url = database_url
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
            match lookup(admin_copy_id, &database_url).await? {
                Some(profile) => println!("{}", profile),
                None => println!("No record for admin copy id {}", admin_copy_id),
            }
            Ok(())
        }
    }
}
