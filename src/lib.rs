//! # Archive Link Bot
//!
//! A Discord bot that watches channels for links to administrator-curated
//! "monitored" domains and replies with archive mirror links for them.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Monitored domains, link values, command model
//! - **Application Layer** ([`application`]) - Domain store, link rewriter, command dispatch
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file persistence
//! - **Discord Layer** ([`discord`]) - Gateway event handler and slash commands
//!
//! ## Features
//!
//! - Sub-domain aware matching (`example.com` covers `blog.example.com`)
//! - Links are rewritten exactly as typed, prefix plus original text
//! - Administrator-only domain management commands
//! - Public `/archive` command for any URL
//! - Domain list survives restarts and recovers from a corrupt file
//!
//! ## Quick Start
//!
//! ```bash
//! export DISCORD_TOKEN="..."
//! export DOMAINS_FILE="./domains.json"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod bot;
pub mod config;
pub mod discord;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BotService, CommandReply, DomainStore, IncomingMessage, LinkRewriter,
    };
    pub use crate::domain::command::{BotCommand, Invoker};
    pub use crate::domain::entities::{AddOutcome, DomainSet, RemoveOutcome, RewrittenLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonFileDomainRepository;
}
