use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_DATASET_PATH: &str = "career_recommendation_dataset.csv";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Seed for the shared RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub dataset_path: PathBuf,
    /// External inference endpoint. When unset the rule-based classifier is used.
    pub classifier_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed: optional_env("CAREER_SEED")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("CAREER_SEED must be an unsigned 64-bit integer")?,
            dataset_path: optional_env("DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH)),
            classifier_url: optional_env("CLASSIFIER_URL"),
        })
    }
}

/// Returns the variable's value, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
