mod common;

use archive_link_bot::application::services::bot_service::{
    EMPTY_LIST_PLACEHOLDER, FORBIDDEN_REPLY,
};
use archive_link_bot::domain::command::BotCommand;
use tempfile::TempDir;

fn add(domain: &str) -> BotCommand {
    BotCommand::AddDomain {
        domain: domain.to_string(),
    }
}

fn remove(domain: &str) -> BotCommand {
    BotCommand::RemoveDomain {
        domain: domain.to_string(),
    }
}

#[tokio::test]
async fn test_admin_can_manage_domains() {
    let dir = TempDir::new().unwrap();
    let service = common::create_test_service(&dir).await;
    let admin = common::admin();

    let added = service.handle_command(add("Example.com"), &admin).await;
    assert_eq!(added.content, "✅ Added **example.com**");
    assert!(added.ephemeral);

    let again = service.handle_command(add("www.example.com"), &admin).await;
    assert_eq!(again.content, "🔔 **example.com** is already monitored.");

    service.handle_command(add("news.org"), &admin).await;
    let listed = service
        .handle_command(BotCommand::ListDomains, &admin)
        .await;
    assert_eq!(
        listed.content,
        "📋 **Monitored domains:** example.com, news.org"
    );

    let removed = service.handle_command(remove("example.com"), &admin).await;
    assert_eq!(removed.content, "🗑️ Removed **example.com**");

    let missing = service.handle_command(remove("example.com"), &admin).await;
    assert_eq!(missing.content, "⚠️ **example.com** wasn't on the list.");

    assert_eq!(
        common::read_domains_file(&dir),
        "[\n  \"news.org\"\n]\n"
    );
}

#[tokio::test]
async fn test_non_admin_is_refused_and_store_untouched() {
    let dir = TempDir::new().unwrap();
    let service = common::create_test_service(&dir).await;
    let member = common::member();

    for command in [add("example.com"), remove("example.com"), BotCommand::ListDomains] {
        let reply = service.handle_command(command, &member).await;
        assert_eq!(reply.content, FORBIDDEN_REPLY);
        assert!(reply.ephemeral);
    }

    assert!(service.store().list().await.is_empty());
    assert_eq!(common::read_domains_file(&dir), "[]\n");
}

#[tokio::test]
async fn test_empty_list_uses_placeholder() {
    let dir = TempDir::new().unwrap();
    let service = common::create_test_service(&dir).await;

    let reply = service
        .handle_command(BotCommand::ListDomains, &common::admin())
        .await;

    assert_eq!(
        reply.content,
        format!("📋 **Monitored domains:** {}", EMPTY_LIST_PLACEHOLDER)
    );
}

#[tokio::test]
async fn test_invalid_domain_reports_validation_message() {
    let dir = TempDir::new().unwrap();
    let service = common::create_test_service(&dir).await;

    let reply = service
        .handle_command(add("https://example.com/page"), &common::admin())
        .await;

    assert!(reply.content.starts_with("❌ "));
    assert!(reply.ephemeral);
    assert!(service.store().list().await.is_empty());
}

#[tokio::test]
async fn test_archive_is_public_and_open_to_everyone() {
    let dir = TempDir::new().unwrap();
    let service = common::create_test_service(&dir).await;

    let reply = service
        .handle_command(
            BotCommand::Archive {
                url: "https://unmonitored.net/story".to_string(),
            },
            &common::member(),
        )
        .await;

    assert_eq!(
        reply.content,
        format!("{}https://unmonitored.net/story", common::TEST_PREFIX)
    );
    assert!(!reply.ephemeral);
}

#[tokio::test]
async fn test_archive_rejects_invalid_url() {
    let dir = TempDir::new().unwrap();
    let service = common::create_test_service(&dir).await;

    let reply = service
        .handle_command(
            BotCommand::Archive {
                url: "not a url".to_string(),
            },
            &common::member(),
        )
        .await;

    assert_eq!(reply.content, "❌ Invalid URL.");
    assert!(reply.ephemeral);
}
