//! Command dispatch and passive link watching.

use crate::application::services::{DomainStore, LinkRewriter};
use crate::domain::command::{BotCommand, Invoker};
use crate::domain::entities::{AddOutcome, RemoveOutcome};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const FORBIDDEN_REPLY: &str = "⛔ You need the **Administrator** permission to use this command.";
pub const INTERNAL_ERROR_REPLY: &str = "⚠️ An unexpected error occurred.";
pub const EMPTY_LIST_PLACEHOLDER: &str = "_(none yet)_";

/// A reply to a command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub content: String,
    /// Visible only to the invoker.
    pub ephemeral: bool,
}

impl CommandReply {
    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }

    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }
}

/// A chat message seen by the link watcher.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub author_tag: String,
    pub author_is_bot: bool,
    pub channel: String,
    pub content: String,
}

/// Ties the domain store and the link rewriter to the bot's two entry
/// points: slash commands and ordinary messages.
pub struct BotService<R: DomainRepository> {
    store: Arc<DomainStore<R>>,
    rewriter: LinkRewriter,
    log_messages: bool,
}

impl<R: DomainRepository> BotService<R> {
    pub fn new(store: Arc<DomainStore<R>>, rewriter: LinkRewriter) -> Self {
        Self {
            store,
            rewriter,
            log_messages: false,
        }
    }

    /// Logs the content of every inbound message at debug level.
    pub fn with_message_logging(mut self, enabled: bool) -> Self {
        self.log_messages = enabled;
        self
    }

    pub fn store(&self) -> &Arc<DomainStore<R>> {
        &self.store
    }

    pub fn rewriter(&self) -> &LinkRewriter {
        &self.rewriter
    }

    /// Runs a command and always produces a reply.
    ///
    /// Administrator-only commands from non-administrators are refused
    /// before touching the store. Errors become user-facing replies; only
    /// internal errors are logged at error level.
    pub async fn handle_command(&self, command: BotCommand, invoker: &Invoker) -> CommandReply {
        let name = command.name();

        match self.authorize_and_execute(command, invoker).await {
            Ok(reply) => reply,
            Err(AppError::Validation { message, details }) => {
                info!(command = name, user = %invoker.tag, %details, "Rejected input: {message}");
                CommandReply::private(format!("❌ {message}"))
            }
            Err(AppError::Forbidden { details, .. }) => {
                info!(command = name, user = %invoker.tag, %details, "Denied command for non-admin");
                CommandReply::private(FORBIDDEN_REPLY)
            }
            Err(e) => {
                error!(
                    command = name,
                    user = %invoker.tag,
                    code = e.code(),
                    details = %e.details(),
                    "Error handling command: {e}"
                );
                CommandReply::private(INTERNAL_ERROR_REPLY)
            }
        }
    }

    async fn authorize_and_execute(
        &self,
        command: BotCommand,
        invoker: &Invoker,
    ) -> Result<CommandReply, AppError> {
        if command.requires_admin() && !invoker.is_admin {
            return Err(AppError::forbidden(
                "Administrator permission required",
                json!({ "guild": invoker.guild_id }),
            ));
        }

        match command {
            BotCommand::AddDomain { domain } => match self.store.add(&domain).await? {
                AddOutcome::Added(d) => {
                    info!(domain = %d, user = %invoker.tag, "adddomain: added");
                    Ok(CommandReply::private(format!("✅ Added **{d}**")))
                }
                AddOutcome::AlreadyPresent(d) => {
                    info!(domain = %d, user = %invoker.tag, "adddomain: already exists");
                    Ok(CommandReply::private(format!("🔔 **{d}** is already monitored.")))
                }
            },
            BotCommand::RemoveDomain { domain } => match self.store.remove(&domain).await? {
                RemoveOutcome::Removed(d) => {
                    info!(domain = %d, user = %invoker.tag, "removedomain: removed");
                    Ok(CommandReply::private(format!("🗑️ Removed **{d}**")))
                }
                RemoveOutcome::NotFound(d) => {
                    info!(domain = %d, user = %invoker.tag, "removedomain: not found");
                    Ok(CommandReply::private(format!("⚠️ **{d}** wasn't on the list.")))
                }
            },
            BotCommand::ListDomains => {
                info!(user = %invoker.tag, "listdomains requested");
                let domains = self.store.list().await;
                let list = if domains.is_empty() {
                    EMPTY_LIST_PLACEHOLDER.to_string()
                } else {
                    domains.join(", ")
                };
                Ok(CommandReply::private(format!("📋 **Monitored domains:** {list}")))
            }
            BotCommand::Archive { url } => {
                let link = self.rewriter.archive(&url).inspect_err(|_| {
                    info!(url = %url, user = %invoker.tag, "archive: invalid URL");
                })?;
                info!(url = %url, user = %invoker.tag, "archive requested");
                Ok(CommandReply::public(link.rewritten))
            }
        }
    }

    /// Scans a message for monitored links.
    ///
    /// Returns the reply to send, or `None` when the author is a bot, the
    /// message is empty, or no link points at a monitored domain.
    pub async fn handle_message(&self, message: &IncomingMessage) -> Option<String> {
        if message.author_is_bot || message.content.is_empty() {
            return None;
        }

        if self.log_messages {
            debug!(
                author = %message.author_tag,
                channel = %message.channel,
                content = %message.content,
                "Message received"
            );
        }

        let domains = self.store.snapshot().await;
        let links = self.rewriter.extract_and_rewrite(&message.content, &domains);
        if links.is_empty() {
            return None;
        }

        info!(
            count = links.len(),
            author = %message.author_tag,
            channel = %message.channel,
            "Auto-archiving links"
        );
        self.rewriter.render_reply(&links)
    }

    /// Reports an unparseable interaction back to the user.
    pub fn reject_invocation(&self, reason: &str, invoker: &Invoker) -> CommandReply {
        warn!(user = %invoker.tag, reason, "Could not parse command");
        CommandReply::private(format!("❌ {reason}"))
    }
}
