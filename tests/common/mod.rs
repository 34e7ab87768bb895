#![allow(dead_code)]

use archive_link_bot::application::services::{BotService, DomainStore, LinkRewriter};
use archive_link_bot::domain::command::Invoker;
use archive_link_bot::infrastructure::persistence::JsonFileDomainRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_PREFIX: &str = "https://archive.test/newest/";

pub fn domains_path(dir: &TempDir) -> PathBuf {
    dir.path().join("domains.json")
}

pub fn write_domains_file(dir: &TempDir, contents: &str) {
    std::fs::write(domains_path(dir), contents).unwrap();
}

pub fn read_domains_file(dir: &TempDir) -> String {
    std::fs::read_to_string(domains_path(dir)).unwrap()
}

/// Opens a store over the `domains.json` inside `dir`, as the bot does at startup.
pub async fn open_store(dir: &TempDir) -> Arc<DomainStore<JsonFileDomainRepository>> {
    let repository = Arc::new(JsonFileDomainRepository::new(domains_path(dir)));
    Arc::new(DomainStore::load(repository).await.unwrap())
}

pub async fn create_test_service(dir: &TempDir) -> BotService<JsonFileDomainRepository> {
    let store = open_store(dir).await;
    BotService::new(store, LinkRewriter::new(TEST_PREFIX))
}

pub fn admin() -> Invoker {
    Invoker {
        tag: "moderator#0001".to_string(),
        is_admin: true,
        guild_id: Some(1),
    }
}

pub fn member() -> Invoker {
    Invoker {
        tag: "member#0002".to_string(),
        is_admin: false,
        guild_id: Some(1),
    }
}
