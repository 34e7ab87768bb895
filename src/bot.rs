//! Bot initialization and runtime setup.
//!
//! Loads the monitored domain list, wires the services together and hands
//! them to the Discord gateway client.

use crate::application::services::{BotService, DomainStore, LinkRewriter};
use crate::config::Config;
use crate::discord;
use crate::infrastructure::persistence::JsonFileDomainRepository;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Runs the bot with the given configuration.
///
/// Initializes:
/// - Panic logging for background tasks
/// - Domain list from [`Config::domains_file`]
/// - Link rewriter and command service
/// - Discord gateway client
///
/// # Errors
///
/// Returns an error if:
/// - The domain list can be neither read nor created
/// - Login to Discord fails
/// - The gateway connection stops
pub async fn run(config: Config) -> Result<()> {
    install_panic_logger();

    let repository = Arc::new(JsonFileDomainRepository::new(&config.domains_file));
    let store = DomainStore::load(repository)
        .await
        .with_context(|| format!("Failed to load {}", config.domains_file.display()))?;
    tracing::info!(
        count = store.list().await.len(),
        "Monitored domains ready"
    );

    let rewriter =
        LinkRewriter::new(config.archive_prefix.clone()).with_flavor_text(config.flavor_text);
    let service = BotService::new(Arc::new(store), rewriter).with_message_logging(config.log_messages);

    discord::run(&config.discord_token, Arc::new(service)).await
}

/// Routes panics from any task through `tracing` so that failures not tied
/// to a single command still show up in the logs.
///
/// The previous hook still runs afterwards. A panic inside an event handler
/// only ends that handler's task; the gateway client keeps running.
fn install_panic_logger() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Unhandled panic: {}", info);
        previous(info);
    }));
}
