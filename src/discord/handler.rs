//! Gateway event handler.

use serenity::all::{
    Command, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, EventHandler, Interaction, Message, Ready,
};
use serenity::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

use super::commands::{create_commands, invoker_of, parse_interaction};
use crate::application::services::{BotService, CommandReply, IncomingMessage};
use crate::domain::command::CommandParseError;
use crate::domain::repositories::DomainRepository;

/// Forwards Discord events to the [`BotService`].
pub struct Handler<R: DomainRepository> {
    service: Arc<BotService<R>>,
    commands_registered: AtomicBool,
}

impl<R: DomainRepository> Handler<R> {
    pub fn new(service: Arc<BotService<R>>) -> Self {
        Self {
            service,
            commands_registered: AtomicBool::new(false),
        }
    }

    /// Returns true for the first caller only, so slash commands are
    /// registered once per process rather than on every reconnect.
    fn claim_registration(&self) -> bool {
        self.commands_registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    async fn respond(&self, ctx: &Context, command: &CommandInteraction, reply: CommandReply) {
        let message = CreateInteractionResponseMessage::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral);

        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            error!(command = %command.data.name, "Failed to respond to command: {}", e);
        }
    }
}

#[async_trait]
impl<R: DomainRepository + 'static> EventHandler for Handler<R> {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.tag());

        if !self.claim_registration() {
            return;
        }

        match Command::set_global_commands(&ctx.http, create_commands()).await {
            Ok(commands) => info!(count = commands.len(), "Slash commands registered"),
            Err(e) => {
                error!("Failed to register slash commands: {}", e);
                // Retry on the next ready event.
                self.commands_registered.store(false, Ordering::Release);
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let invoker = invoker_of(&command);
        let reply = match parse_interaction(&command) {
            Ok(parsed) => self.service.handle_command(parsed, &invoker).await,
            Err(CommandParseError::UnknownCommand(name)) => {
                warn!(command = %name, user = %invoker.tag, "Unknown command");
                return;
            }
            Err(e) => self.service.reject_invocation(&e.to_string(), &invoker),
        };

        self.respond(&ctx, &command, reply).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let incoming = IncomingMessage {
            author_tag: msg.author.tag(),
            author_is_bot: msg.author.bot,
            channel: msg.channel_id.to_string(),
            content: msg.content.clone(),
        };

        let Some(reply) = self.service.handle_message(&incoming).await else {
            return;
        };

        if let Err(e) = msg.reply(&ctx.http, reply).await {
            error!(channel = %msg.channel_id, "Failed to send archive reply: {}", e);
        }
    }
}
