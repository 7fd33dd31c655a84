//! CLI administration tool for snaplink.
//!
//! Operates directly on the registry document, without requiring the HTTP
//! server to be running.
//!
//! # Usage
//!
//! ```bash
//! # Create a link
//! cargo run --bin snaplink-admin -- create https://example.com --alias docs
//!
//! # List all links
//! cargo run --bin snaplink-admin -- list
//!
//! # Analytics for one link
//! cargo run --bin snaplink-admin -- stats docs
//!
//! # Check the registry document
//! cargo run --bin snaplink-admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (optional): registry document path (default: `data/urls.json`)
//!
//! Writes are serialized within this process only; avoid running `create`
//! while the server is handling traffic on the same file.

use snaplink::application::services::{AnalyticsService, LinkService};
use snaplink::domain::analytics::{ACTIVE_DAYS_WINDOW, last_active_days};
use snaplink::domain::repositories::RegistryStorage;
use snaplink::infrastructure::persistence::JsonFileStorage;
use snaplink::infrastructure::user_agent::WootheeClassifier;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing snaplink.
#[derive(Parser)]
#[command(name = "snaplink-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Registry document (overrides `DATA_FILE`)
    #[arg(long, global = true)]
    data_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Create {
        /// Target URL
        url: String,

        /// Custom short identifier
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// List all links
    List,

    /// Show analytics for a link
    Stats {
        /// Short identifier
        short_id: String,
    },

    /// Load the registry and report totals
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let data_file = cli
        .data_file
        .or_else(|| std::env::var("DATA_FILE").ok())
        .unwrap_or_else(|| "data/urls.json".to_string());

    let storage = Arc::new(JsonFileStorage::new(&data_file));
    let links = Arc::new(LinkService::new(
        storage.clone(),
        Arc::new(WootheeClassifier::new()),
    ));

    match cli.command {
        Commands::Create { url, alias } => create_link(&links, url, alias).await?,
        Commands::List => list_links(&links).await?,
        Commands::Stats { short_id } => show_stats(links, &short_id).await?,
        Commands::Check => check_registry(storage.as_ref(), &data_file).await?,
    }

    Ok(())
}

/// Creates a link and prints its identifier.
async fn create_link(
    links: &LinkService<JsonFileStorage>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let link = links
        .create_link(url, alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Short ID: {}", link.short_id.bright_yellow().bold());
    println!("  Target:   {}", link.original_url.cyan());
    println!(
        "  Created:  {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Lists all links with click counts.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Short ID     Clicks   Created            Target
///   ──────────────────────────────────────────────────────────────
///   abc123       12       2024-01-15 10:30   https://example.com
/// ```
async fn list_links(links: &LinkService<JsonFileStorage>) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let summaries = links
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if summaries.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} snaplink-admin -- create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<18} {}",
        "Short ID".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &summaries {
        println!(
            "  {:<12} {:<8} {:<18} {}",
            link.short_id.cyan(),
            link.click_count.to_string().bright_white(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        summaries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays analytics for one link.
///
/// Shows:
/// - Total clicks
/// - Clicks over the last active days
/// - Top browsers
/// - Recent clicks
async fn show_stats(links: Arc<LinkService<JsonFileStorage>>, short_id: &str) -> Result<()> {
    println!("{}", "📊 Link Analytics".bright_blue().bold());
    println!();

    let view = AnalyticsService::new(links)
        .summarize(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load analytics: {}", e))?;

    println!("  Short ID:     {}", view.short_id.cyan());
    println!("  Target:       {}", view.original_url);
    println!(
        "  Total clicks: {}",
        view.total_clicks.to_string().bright_white().bold()
    );
    println!();

    println!("{}", "  Clicks by day:".bright_white().bold());
    let days = last_active_days(&view.clicks_by_day, ACTIVE_DAYS_WINDOW);
    if days.is_empty() {
        println!("    {}", "no clicks yet".bright_black());
    }
    for (day, count) in days {
        println!("    {}  {}", day.bright_black(), count);
    }
    println!();

    println!("{}", "  Top browsers:".bright_white().bold());
    for (browser, count) in &view.top_browsers {
        println!("    {:<20} {}", browser.cyan(), count);
    }
    println!();

    println!("{}", "  Recent clicks:".bright_white().bold());
    for click in &view.recent_clicks {
        println!(
            "    {}  {:<15} {:<12} {:<10} {}",
            click
                .timestamp
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            click.source_address.as_deref().unwrap_or("-"),
            click.browser,
            click.device_type,
            click.referer.bright_black()
        );
    }
    println!();

    Ok(())
}

/// Loads the registry document and reports totals.
async fn check_registry(storage: &dyn RegistryStorage, data_file: &str) -> Result<()> {
    println!("{}", "🔍 Checking registry...".bright_blue().bold());
    println!();

    let registry = storage
        .load()
        .await
        .with_context(|| format!("Failed to load {}", data_file))?;

    println!("{}", "✅ Registry is valid".green().bold());
    println!();
    println!("  File:   {}", data_file.cyan());
    println!(
        "  Links:  {}",
        registry.len().to_string().bright_white().bold()
    );
    println!(
        "  Clicks: {}",
        registry.total_clicks().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
