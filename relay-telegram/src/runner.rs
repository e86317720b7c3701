//! Dispatcher runner: converts teloxide messages and callback queries to core events and passes them
//! to the HandlerChain, one spawned task per event.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::{InboundEvent, ToCoreCallback, ToCoreMessage};
use teloxide::{dispatching::UpdateFilterExt, prelude::*};
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Runs the long-polling dispatcher until Ctrl-C.
///
/// Each update is handled on its own task so a slow Telegram call for one sender never holds up
/// another; teloxide keeps per-chat delivery order.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Connected to Telegram");
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let wrapper = TelegramMessageWrapper(&msg);
    if !wrapper.has_author() {
        debug!(chat_id = msg.chat.id.0, "Skipping message without a human author");
        return Ok(());
    }
    spawn_chain(chain, InboundEvent::Message(wrapper.to_core()));
    Ok(())
}

async fn on_callback(query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    spawn_chain(chain, InboundEvent::Callback(TelegramCallbackWrapper(&query).to_core()));
    Ok(())
}

fn spawn_chain(chain: HandlerChain, event: InboundEvent) {
    tokio::spawn(async move {
        if let Err(e) = chain.handle(&event).await {
            error!(error = %e, kind = event.kind(), user_id = event.user().id, "Handler chain failed");
        }
    });
}
