mod classifier;
mod config;
mod eligibility;
mod errors;
mod generation;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classifier::{CareerClassifier, RemoteClassifier, RuleBasedClassifier};
use crate::config::Config;
use crate::generation::dataset::{
    assemble, read_csv_file, write_csv_file, DEFAULT_DATASET_SEED, DEFAULT_RECORD_COUNT,
};
use crate::generation::profile_generator::ProfileGenerator;
use crate::generation::summary::{log_summary, summarize};
use crate::routes::build_router;
use crate::state::AppState;

/// Career path eligibility engine and synthetic dataset generator
#[derive(Parser)]
#[command(name = "career-engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,

    /// Assemble a labeled dataset and write it as CSV
    Generate {
        /// Number of student records
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECORD_COUNT)]
        records: usize,

        /// RNG seed (defaults to CAREER_SEED, then 42)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file (defaults to DATASET_PATH)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reload a dataset CSV, validate every row, and log its summary
    Summarize {
        /// Input file (defaults to DATASET_PATH)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Generate {
            records,
            seed,
            output,
        } => {
            let seed = seed.or(config.seed).unwrap_or(DEFAULT_DATASET_SEED);
            let output = output.unwrap_or(config.dataset_path);
            tokio::task::spawn_blocking(move || generate(records, seed, output))
                .await
                .context("dataset generation task panicked")?
        }
        Command::Summarize { input } => {
            let input = input.unwrap_or(config.dataset_path);
            let dataset = read_csv_file(&input)
                .with_context(|| format!("failed to load dataset from {}", input.display()))?;
            log_summary(&summarize(&dataset));
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting career-engine API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize classifier (rule-based unless an external endpoint is configured)
    let classifier: Arc<dyn CareerClassifier> = match &config.classifier_url {
        Some(url) => {
            let remote = RemoteClassifier::new(url.clone())?;
            info!("Classifier backend: remote ({})", remote.url());
            Arc::new(remote)
        }
        None => {
            info!("Classifier backend: rules");
            Arc::new(RuleBasedClassifier)
        }
    };

    let state = AppState::new(config.clone(), classifier, ProfileGenerator::default());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn generate(records: usize, seed: u64, output: PathBuf) -> Result<()> {
    info!("Seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let dataset = assemble(&ProfileGenerator::default(), records, &mut rng)?;
    write_csv_file(&output, &dataset)
        .with_context(|| format!("failed to write dataset to {}", output.display()))?;

    log_summary(&summarize(&dataset));
    Ok(())
}
