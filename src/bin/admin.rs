//! CLI administration tool for travel-listings.
//!
//! Provides commands for managing API tokens and checking the database
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token
//! cargo run --bin admin -- token create --name "Staging"
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Staging"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required): HMAC key; must match the server's

use travel_listings::application::services::AuthService;
use travel_listings::domain::repositories::TokenRepository;
use travel_listings::infrastructure::persistence::PgTokenRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rand::Rng;
use rand::distr::Alphanumeric;
use sqlx::PgPool;
use std::sync::Arc;

/// Length of auto-generated raw API tokens.
const TOKEN_LENGTH: usize = 40;

/// CLI tool for managing travel-listings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Token name (e.g., "Production API", "Mobile App")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token by name
    Revoke {
        /// Token name to revoke
        name: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo: Arc<dyn TokenRepository> = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    let signing_secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;
    let auth = AuthService::new(repo.clone(), signing_secret);

    match action {
        TokenAction::Create { name, yes } => create_token(repo, &auth, name, yes).await?,
        TokenAction::List => list_tokens(repo).await?,
        TokenAction::Revoke { name } => revoke_token(repo, name).await?,
    }

    Ok(())
}

/// Creates a new API token and prints the raw value once.
async fn create_token(
    repo: Arc<dyn TokenRepository>,
    auth: &AuthService,
    name: Option<String>,
    yes: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .interact_text()
            .context("Failed to read token name")?,
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create token '{}'?", name))
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            println!("{}", "Aborted".yellow());
            return Ok(());
        }
    }

    let raw_token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect();

    let token_hash = auth.hash_token(&raw_token);

    let token = repo.insert(&name, &token_hash).await?;

    println!("{}", "Token created".green().bold());
    println!("  Name: {}", token.name);
    println!("  Token: {}", raw_token.cyan());
    println!(
        "{}",
        "Store this token now; only its hash is kept in the database.".yellow()
    );

    Ok(())
}

/// Prints all stored tokens.
async fn list_tokens(repo: Arc<dyn TokenRepository>) -> Result<()> {
    let tokens = repo.list().await?;

    if tokens.is_empty() {
        println!("{}", "No tokens found".yellow());
        return Ok(());
    }

    for token in tokens {
        let status = if token.is_revoked() {
            "revoked".red()
        } else {
            "active".green()
        };

        let last_used = token
            .last_used_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "{} [{}] created {} last used {}",
            token.name.bold(),
            status,
            token.created_at.to_rfc3339(),
            last_used
        );
    }

    Ok(())
}

/// Revokes a token by name.
async fn revoke_token(repo: Arc<dyn TokenRepository>, name: String) -> Result<()> {
    let revoked = repo.revoke(&name).await?;

    if revoked {
        println!("{} '{}'", "Revoked token".green(), name);
    } else {
        println!("{} '{}'", "No active token named".red(), name);
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let one: i32 = sqlx::query_scalar("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            if one == 1 {
                println!("{}", "Database connection OK".green().bold());
            }
        }
    }

    Ok(())
}
