//! Startup: logging, components, handler chain, then the long-polling dispatcher.

use anyhow::{Context, Result};
use relay::render_profile;
use relay_core::init_tracing;
use relay_telegram::{run_dispatcher, RelayConfig};
use storage::{CorrelationStore, SqliteCorrelationStore};
use tracing::{info, instrument};

use crate::components::{build_components, build_handler_chain};

/// Main entry: init logging, open the store, assemble the chain, then poll until Ctrl-C.
#[instrument(skip(config), fields(operator_id = config.operator_id))]
pub async fn run_relay(config: RelayConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        log_file = %config.log_file,
        "Initializing relay"
    );

    let components = build_components(&config).await?;
    let handler_chain = build_handler_chain(
        components.transport.clone(),
        components.store.clone(),
        components.settings,
    );
    let bot = components.transport.inner().clone();

    info!(handlers = handler_chain.len(), "Relay started");
    run_dispatcher(bot, handler_chain).await?;

    components.store.close().await;
    Ok(())
}

/// Renders the stored author profile for `admin_copy_id`, or `None` when nothing was recorded.
pub async fn lookup(admin_copy_id: i32, database_url: &str) -> Result<Option<String>> {
    let store = SqliteCorrelationStore::new(database_url)
        .await
        .with_context(|| format!("Failed to open correlation store at {}", database_url))?;
    let record = store.get(admin_copy_id).await;
    store.close().await;
    Ok(record?.as_ref().map(render_profile))
}
