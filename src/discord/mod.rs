//! Discord adapter.
//!
//! Connects the platform-independent services to the Discord gateway via
//! `serenity`:
//!
//! - [`commands`] - Slash command registration and interaction parsing
//! - [`handler`] - Gateway event handler (ready, interactions, messages)
//!
//! [`run`] builds the gateway client and blocks until it stops.

pub mod commands;
pub mod handler;

pub use handler::Handler;

use crate::application::services::BotService;
use crate::domain::repositories::DomainRepository;
use anyhow::{Context, Result};
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

/// Gateway intents needed to read guild messages and receive commands.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Logs in with `token` and processes events until the connection ends.
///
/// # Errors
///
/// Returns an error if the client cannot be built, if authentication
/// fails, or if the gateway connection stops.
pub async fn run<R: DomainRepository + 'static>(
    token: &str,
    service: Arc<BotService<R>>,
) -> Result<()> {
    let mut client = Client::builder(token, intents())
        .event_handler(Handler::new(service))
        .await
        .context("Failed to build Discord gateway client")?;

    client
        .start()
        .await
        .context("Discord gateway client stopped")
}
