//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a platform-independent API
//! for the Discord adapter and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::domain_store::DomainStore`] - Monitored domain list with persistence
//! - [`services::link_rewriter::LinkRewriter`] - Link matching and archive rewriting
//! - [`services::bot_service::BotService`] - Command dispatch and passive link watching

pub mod services;
