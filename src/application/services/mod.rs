//! Business logic services for the application layer.

pub mod bot_service;
pub mod domain_store;
pub mod link_rewriter;

pub use bot_service::{BotService, CommandReply, IncomingMessage};
pub use domain_store::DomainStore;
pub use link_rewriter::{DEFAULT_ARCHIVE_PREFIX, LinkRewriter};
