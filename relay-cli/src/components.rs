//! Component factory: builds RelayComponents from config. Isolates assembly logic from the runner.

use std::sync::Arc;

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use relay::{LoggingHandler, RelayEngine, RelaySettings, RevealHandler, StartCommandHandler};
use relay_core::Transport;
use relay_telegram::{RelayConfig, TelegramTransport};
use storage::{CorrelationStore, SqliteCorrelationStore};
use tracing::{info, instrument};

/// Long-lived dependencies shared by every event task.
pub struct RelayComponents {
    pub store: Arc<SqliteCorrelationStore>,
    pub transport: Arc<TelegramTransport>,
    pub settings: RelaySettings,
}

/// Opens the correlation store and creates the Telegram transport.
#[instrument(skip(config), fields(database_url = %config.database_url))]
pub async fn build_components(config: &RelayConfig) -> Result<RelayComponents> {
    let store = SqliteCorrelationStore::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to open correlation store at {}", config.database_url))?;
    info!("Correlation store ready");

    Ok(RelayComponents {
        store: Arc::new(store),
        transport: Arc::new(TelegramTransport::new(config.build_bot())),
        settings: RelaySettings::new(config.operator_id),
    })
}

/// Chain order: logging, /start and commands, relay engine, reveal button.
pub fn build_handler_chain(
    transport: Arc<dyn Transport>,
    store: Arc<dyn CorrelationStore>,
    settings: RelaySettings,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartCommandHandler::new(transport.clone())))
        .add_handler(Arc::new(RelayEngine::new(
            transport.clone(),
            store.clone(),
            settings,
        )))
        .add_handler(Arc::new(RevealHandler::new(transport, store, settings)))
}
