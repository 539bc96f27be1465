//! CLI administration tool for cat-gif.
//!
//! Inspects and maintains the Redis store backing the page without going
//! through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show hit/miss counters and the cached count
//! cargo run --bin admin -- stats
//!
//! # List cached GIF URLs, most recent first
//! cargo run --bin admin -- cache list
//!
//! # Drop the cached GIF list (counters are kept)
//! cargo run --bin admin -- cache clear
//!
//! # Check the Redis connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST` / `REDIS_PORT` / `REDIS_PASSWORD` / `REDIS_DB` (required)
//! - `REDIS_KEY_PREFIX` (optional)

use cat_gif::config::{Config, mask_connection_string};
use cat_gif::domain::entities::{Counter, RECENT_GIFS_BOUND};
use cat_gif::domain::repositories::GifStore;
use cat_gif::infrastructure::store::RedisGifStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing the cat-gif store.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show cache hit / API call counters
    Stats,

    /// Manage the cached GIF list
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Check the Redis connection
    Check,
}

/// Cached list subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// List cached GIF URLs
    List,

    /// Remove every cached GIF URL
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    let store = RedisGifStore::connect(redis_url, &config.redis_key_prefix)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {}",
                mask_connection_string(redis_url)
            )
        })?;

    match cli.command {
        Commands::Stats => handle_stats(&store).await?,
        Commands::Cache { action } => match action {
            CacheAction::List => list_cached(&store).await?,
            CacheAction::Clear { yes } => clear_cached(&store, yes).await?,
        },
        Commands::Check => check(&store, redis_url).await?,
    }

    Ok(())
}

/// Displays counters and the cached count.
///
/// Hit rate is cache hits over all served GIFs.
async fn handle_stats(store: &impl GifStore) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let cache_hits = store.counter(Counter::CacheHits).await?;
    let api_calls = store.counter(Counter::ApiCalls).await?;
    let cached = store.recent_len().await?;

    println!(
        "  Cache hits:  {}",
        cache_hits.to_string().bright_green().bold()
    );
    println!(
        "  API calls:   {}",
        api_calls.to_string().bright_green().bold()
    );
    println!(
        "  Cached GIFs: {}/{}",
        cached.to_string().bright_green().bold(),
        RECENT_GIFS_BOUND
    );

    let total = cache_hits + api_calls;
    if total > 0 {
        let rate = cache_hits as f64 / total as f64 * 100.0;
        println!(
            "  Hit rate:    {}",
            format!("{:.1}%", rate).bright_white().bold()
        );
    }
    println!();

    Ok(())
}

/// Lists cached GIF URLs, head (most recent push) first.
///
/// # Output Format
///
/// ```text
/// 🐈 Cached GIFs
///
///   #   URL
///   ────────────────────────────────────────
///   1   https://cataas.com/cat/gif
/// ```
async fn list_cached(store: &impl GifStore) -> Result<()> {
    println!("{}", "🐈 Cached GIFs".bright_blue().bold());
    println!();

    let recent = store.recent().await?;

    if recent.is_empty() {
        println!("{}", "  Cache is empty".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {}",
        "#".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for (i, url) in recent.iter().enumerate() {
        println!("  {:<3} {}", (i + 1).to_string().bright_black(), url.cyan());
    }

    println!();
    println!(
        "  Total: {}",
        recent.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Removes the cached list after confirmation. Counters are kept.
async fn clear_cached(store: &impl GifStore, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Clear cached GIFs".bright_blue().bold());
    println!();

    let cached = store.recent_len().await?;
    if cached == 0 {
        println!("{}", "  Cache is already empty".yellow());
        return Ok(());
    }

    println!("  Cached GIFs: {}", cached.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove all cached GIFs?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    store.clear_recent().await?;

    println!();
    println!("{}", "✅ Cache cleared".green().bold());
    println!();

    Ok(())
}

/// Pings Redis and reports the result.
async fn check(store: &impl GifStore, redis_url: &str) -> Result<()> {
    println!("{}", "🔌 Redis connection".bright_blue().bold());
    println!();
    println!("  URL: {}", mask_connection_string(redis_url).bright_black());

    if store.health_check().await {
        println!("  Status: {}", "OK".green().bold());
        println!();
        Ok(())
    } else {
        println!("  Status: {}", "UNREACHABLE".red().bold());
        println!();
        anyhow::bail!("Redis did not answer PING")
    }
}
