//! Market Seeder — Entry Point
//!
//! Runs the seeding pipeline once and exits. Intended to be
//! scheduled externally (cron, systemd timer, k8s CronJob).
//!
//! Wiring sequence:
//! 1. Load `.env` (if present) and config.toml (if present)
//! 2. Init tracing (JSON structured logging)
//! 3. Load secrets from env vars (RPC_URL, CONTRACT_ADDRESS, PRIVATE_KEY, OPENAI_API_KEY)
//! 4. Connect the signing RPC provider and validate the market contract
//! 5. Create the CoinGecko feed and the chat-completion client
//! 6. Execute one SeedingRun inside a `seed_run` span
//! 7. Exit 0 on success or skip, 1 on any error

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use market_seeder::adapters::api::client::build_http_client;
use market_seeder::adapters::api::completions::{CompletionConfig, OpenAiClient};
use market_seeder::adapters::chain::{ChainProvider, MarketContract};
use market_seeder::adapters::feeds::CoinGeckoFeed;
use market_seeder::config::{self, AppConfig, Secrets};
use market_seeder::usecases::seeding_run::{RunOutcome, RunSettings, SeedingRun};

#[tokio::main]
async fn main() -> ExitCode {
    // ── 1. Load .env and configuration ──────────────────────
    let dotenv = dotenvy::dotenv();
    let config = config::loader::load();

    // ── 2. Initialize structured JSON logging ───────────────
    let log_level = config
        .as_ref()
        .map(|c| c.bot.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_tracing(&log_level);

    if let Err(e) = &dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to read .env file");
        }
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        name = %config.bot.name,
        version = env!("CARGO_PKG_VERSION"),
        dry_run = config.bot.dry_run,
        "Starting market seeder"
    );

    // ── 3-6. Wire adapters and run once ─────────────────────
    let span = info_span!("seed_run", run_id = %Uuid::new_v4());
    match run(&config).instrument(span).await {
        Ok(outcome) => {
            info!(?outcome, "Run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "Seeding run failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .json()
        .init();
}

/// Build every adapter from config + secrets and execute one run.
async fn run(config: &AppConfig) -> Result<RunOutcome> {
    let secrets = Secrets::from_env().context("Failed to load secrets from env")?;
    info!(secrets = ?secrets, "Secrets loaded");

    let http = build_http_client(Duration::from_secs(config.api.timeout_seconds))?;

    let chain = Arc::new(
        ChainProvider::connect(&secrets, config.api.expected_chain_id)
            .await
            .context("Failed to connect chain provider")?,
    );
    let registry = Arc::new(
        MarketContract::new(chain, secrets.contract_address)
            .await
            .context("Failed to bind market contract")?,
    );

    let prices = Arc::new(CoinGeckoFeed::new(http.clone(), config.api.price_url.clone()));
    let completion = Arc::new(OpenAiClient::new(
        http,
        secrets.completion_api_key.clone(),
        CompletionConfig {
            url: config.api.completion_url.clone(),
            model: config.proposals.model.clone(),
            temperature: config.proposals.temperature,
        },
    ));

    SeedingRun::new(registry, prices, completion, RunSettings::from_config(config))
        .execute()
        .await
}
