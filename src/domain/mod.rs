//! Domain layer containing business entities and logic.
//!
//! Independent of the chat platform and of the storage backend.
//!
//! # Architecture
//!
//! - [`entities`] - Monitored domains and link values
//! - [`repositories`] - Storage trait definitions
//! - [`command`] - Bot command model and registration schema
//!
//! # Link Rewriting Flow
//!
//! 1. The Discord adapter receives a message
//! 2. [`crate::utils::url_extractor`] finds URL literals in its text
//! 3. Each host is checked against an [`entities::DomainSet`]
//! 4. Matches become [`entities::RewrittenLink`] values and are sent back

pub mod command;
pub mod entities;
pub mod repositories;
