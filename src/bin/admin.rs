//! CLI administration tool for archive-link-bot.
//!
//! Manages the monitored domain list without the bot running, using the
//! same file and normalization rules as the bot's slash commands.
//!
//! # Usage
//!
//! ```bash
//! # List monitored domains
//! cargo run --bin archive-admin -- domains list
//!
//! # Add a domain
//! cargo run --bin archive-admin -- domains add example.com
//!
//! # Remove a domain (asks for confirmation)
//! cargo run --bin archive-admin -- domains remove example.com
//!
//! # Check whether a link would be rewritten
//! cargo run --bin archive-admin -- check https://blog.example.com/post
//! ```
//!
//! # Environment Variables
//!
//! - `DOMAINS_FILE` (optional): domain list location, overridden by `--file`
//! - `ARCHIVE_PREFIX` (optional): rewrite prefix used by `check`

use archive_link_bot::application::services::{DomainStore, LinkRewriter};
use archive_link_bot::config::Config;
use archive_link_bot::domain::entities::{AddOutcome, RemoveOutcome};
use archive_link_bot::infrastructure::persistence::JsonFileDomainRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing archive-link-bot.
#[derive(Parser)]
#[command(name = "archive-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Domain list file (defaults to DOMAINS_FILE or ./domains.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage monitored domains
    Domains {
        #[command(subcommand)]
        action: DomainAction,
    },

    /// Show whether a URL would be rewritten and how
    Check {
        /// Full URL to test
        url: String,
    },
}

/// Domain management subcommands.
#[derive(Subcommand)]
enum DomainAction {
    /// List all monitored domains
    List,

    /// Add a domain to the monitored list
    Add {
        /// Domain name (e.g., "example.com")
        domain: String,
    },

    /// Remove a domain from the monitored list
    Remove {
        /// Domain name (e.g., "example.com")
        domain: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

type Store = DomainStore<JsonFileDomainRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli.file.unwrap_or_else(Config::load_domains_file);
    let repository = Arc::new(JsonFileDomainRepository::new(&path));
    let store = DomainStore::load(repository)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;

    match cli.command {
        Commands::Domains { action } => handle_domain_action(action, &store).await?,
        Commands::Check { url } => check_url(&store, &url).await?,
    }

    Ok(())
}

/// Dispatches domain management commands.
async fn handle_domain_action(action: DomainAction, store: &Store) -> Result<()> {
    match action {
        DomainAction::List => list_domains(store).await,
        DomainAction::Add { domain } => add_domain(store, &domain).await,
        DomainAction::Remove { domain, yes } => remove_domain(store, &domain, yes).await,
    }
}

/// Lists monitored domains in stored order.
///
/// # Output Format
///
/// ```text
/// 📋 Monitored Domains
///
///   1   example.com
///   2   news.example.org
///
///   Total: 2
/// ```
async fn list_domains(store: &Store) -> Result<()> {
    println!("{}", "📋 Monitored Domains".bright_blue().bold());
    println!();

    let domains = store.list().await;

    if domains.is_empty() {
        println!("{}", "  No domains monitored yet".yellow());
        println!();
        println!(
            "  Add one with: {} archive-admin -- domains add example.com",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    for (i, domain) in domains.iter().enumerate() {
        println!(
            "  {:<3} {}",
            (i + 1).to_string().bright_black(),
            domain.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        domains.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn add_domain(store: &Store, domain: &str) -> Result<()> {
    let outcome = store
        .add(domain)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add domain: {}", e))?;

    match outcome {
        AddOutcome::Added(d) => {
            println!("{} {}", "✅ Added".green().bold(), d.to_string().cyan());
        }
        AddOutcome::AlreadyPresent(d) => {
            println!(
                "{} {}",
                "🔔 Already monitored:".yellow(),
                d.to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Removes a domain with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Reports domains that are not on the list without touching the file
async fn remove_domain(store: &Store, domain: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Stop monitoring {}?", domain))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let outcome = store
        .remove(domain)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove domain: {}", e))?;

    match outcome {
        RemoveOutcome::Removed(d) => {
            println!("{} {}", "🗑️  Removed".green().bold(), d.to_string().cyan());
        }
        RemoveOutcome::NotFound(d) => {
            println!(
                "{} {}",
                "⚠️  Not on the list:".yellow(),
                d.to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Shows how the bot would treat a link posted in chat and what `/archive`
/// would return for it.
async fn check_url(store: &Store, url: &str) -> Result<()> {
    let rewriter = LinkRewriter::new(Config::load_archive_prefix());
    let domains = store.snapshot().await;

    let link = rewriter
        .archive(url)
        .map_err(|e| anyhow::anyhow!("{}: {}", e, url))?;
    let monitored = !rewriter.extract_and_rewrite(url, &domains).is_empty();

    println!("{}", "🔍 Link check".bright_blue().bold());
    println!();
    println!("  URL:       {}", url.bright_white());
    if monitored {
        println!("  Monitored: {}", "YES".green().bold());
    } else {
        println!("  Monitored: {}", "NO".bright_black());
    }
    println!("  Archive:   {}", link.rewritten.bright_yellow());
    println!();

    Ok(())
}
