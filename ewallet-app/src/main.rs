//! # E-Wallet Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository adapter and password hasher
//! - Create the wallet and signup services
//! - Run one operator command

mod cli;
mod config;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ewallet_hex::{SignupRequestMapper, SignupService, WalletService};
use ewallet_repo::{BcryptPasswordHasher, build_repo};

use crate::cli::Cli;
use crate::config::{Config, LogFormat};

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,ewallet_app=debug,ewallet_hex=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;
    tracing::info!(backend = repo.backend(), "repository ready");

    let hasher = BcryptPasswordHasher::new(config.bcrypt_cost);
    let wallets = WalletService::new(repo.clone());
    let signup = SignupService::new(repo.clone(), SignupRequestMapper::new(hasher, repo));

    let output = cli::run(cli.command, &wallets, &signup).await?;
    println!("{}", output);

    Ok(())
}
