//! CLI administration tool for shorten-me.
//!
//! Talks to the same Redis store as the server, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check store connection
//! cargo run --bin admin -- check
//!
//! # Look up a key
//! cargo run --bin admin -- get 3fa9c1
//!
//! # Create a link from the command line
//! cargo run --bin admin -- shorten https://example.com/page --base-url https://sho.rt
//! ```
//!
//! # Environment Variables
//!
//! Uses the server's store settings: `REDIS_URL` (or `REDIS_HOST` and friends),
//! `STORE_KEY_PREFIX`, `STORE_TIMEOUT_MS`, `STORE_RETRY_ATTEMPTS`, `KEY_MAX_ATTEMPTS`.
//! The in-memory store is process-local, so Redis is required here.

use shorten_me::application::services::LinkService;
use shorten_me::config::{self, Config};
use shorten_me::domain::entities::ShortKey;
use shorten_me::domain::repositories::LinkStore;
use shorten_me::infrastructure::store::RedisStore;
use shorten_me::web::forms::{CreateLinkForm, UrlValidation, validate_url_field};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use url::Url;

/// CLI tool for managing shorten-me.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Check store connection
    Check,

    /// Show the target URL stored under a key
    Get {
        /// Six-character short key
        key: String,
    },

    /// Create a short link
    Shorten {
        /// Absolute URL to shorten
        url: String,

        /// Origin the short link is served from
        #[arg(short, long, default_value = "http://localhost:3000")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = connect(&config).await?;

    match cli.command {
        Commands::Check => handle_check(store.as_ref()).await?,
        Commands::Get { key } => handle_get(store, &key).await?,
        Commands::Shorten { url, base_url } => {
            handle_shorten(store, config.key_max_attempts, &url, &base_url).await?
        }
    }

    Ok(())
}

/// Connects to the configured Redis store.
async fn connect(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL (or REDIS_HOST) must be set")?;

    let store = RedisStore::connect(redis_url, config.redis_store_options())
        .await
        .context("Failed to connect to Redis")?;

    Ok(Arc::new(store))
}

/// Pings the store.
async fn handle_check(store: &dyn LinkStore) -> Result<()> {
    println!("{}", "🔍 Checking store connection...".bright_blue().bold());

    if store.health_check().await {
        println!("{}", "✅ Store is reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}

/// Prints the target stored under `key`.
///
/// # Output Format
///
/// ```text
/// 🔗 3fa9c1 → https://example.com/page
/// ```
async fn handle_get(store: Arc<dyn LinkStore>, key: &str) -> Result<()> {
    let key: ShortKey = key.parse()?;
    let service = LinkService::new(store, 1);

    match service.resolve(&key).await? {
        Some(target) => {
            println!("🔗 {} → {}", key.to_string().cyan(), target.bright_white());
        }
        None => {
            println!("{}", format!("⚠️  No link stored under {}", key).yellow());
        }
    }

    Ok(())
}

/// Validates `url`, allocates a key and prints the short link.
async fn handle_shorten(
    store: Arc<dyn LinkStore>,
    max_attempts: usize,
    url: &str,
    base_url: &str,
) -> Result<()> {
    let target = match validate_url_field(&CreateLinkForm {
        url: url.to_string(),
    }) {
        UrlValidation::Valid(target) => target,
        UrlValidation::Invalid(reason) => anyhow::bail!(reason),
    };

    let origin = Url::parse(base_url).context("Invalid --base-url")?;

    let service = LinkService::new(store, max_attempts);
    let key = service.create_key(&target).await?;
    let short_url = LinkService::short_url(&origin, &key)?;

    println!("{}", "✅ Short link created!".green().bold());
    println!();
    println!("  Target: {}", target.as_str().bright_black());
    println!("  Short:  {}", short_url.as_str().bright_yellow().bold());
    println!();

    Ok(())
}
