//! Axum route handlers for the Generation API.

use std::path::{Component, Path, PathBuf};

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::dataset::{assemble, write_csv_file, DEFAULT_DATASET_SEED};
use crate::generation::summary::{summarize, DatasetSummary};
use crate::models::profile::LabeledProfile;
use crate::state::AppState;

/// Upper bound on profiles returned inline by one request.
const MAX_INLINE_PROFILES: usize = 1000;
/// Upper bound on records assembled by one dataset request.
const MAX_DATASET_RECORDS: usize = 1_000_000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateProfilesRequest {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct GenerateProfilesResponse {
    pub profiles: Vec<LabeledProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssembleDatasetRequest {
    pub records: usize,
    /// Falls back to CAREER_SEED, then to the default dataset seed.
    pub seed: Option<u64>,
    /// Bare file name, written next to DATASET_PATH. Falls back to DATASET_PATH.
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssembleDatasetResponse {
    pub path: PathBuf,
    pub seed: u64,
    pub summary: DatasetSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profiles/generate
///
/// Generates and labels profiles with the shared random source.
pub async fn handle_generate_profiles(
    State(state): State<AppState>,
    Json(request): Json<GenerateProfilesRequest>,
) -> Result<Json<GenerateProfilesResponse>, AppError> {
    if request.count == 0 || request.count > MAX_INLINE_PROFILES {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_INLINE_PROFILES}"
        )));
    }

    let count = request.count;
    let profiles = tokio::task::spawn_blocking(move || {
        let mut rng = state.rng()?;
        assemble(&state.generator, count, &mut *rng)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("profile task failed: {e}")))??;

    Ok(Json(GenerateProfilesResponse { profiles }))
}

/// POST /api/v1/datasets
///
/// Assembles a dataset with its own seeded RNG, writes the CSV, and returns
/// the summary statistics. Runs on the blocking pool.
pub async fn handle_assemble_dataset(
    State(state): State<AppState>,
    Json(request): Json<AssembleDatasetRequest>,
) -> Result<Json<AssembleDatasetResponse>, AppError> {
    if request.records == 0 || request.records > MAX_DATASET_RECORDS {
        return Err(AppError::Validation(format!(
            "records must be between 1 and {MAX_DATASET_RECORDS}"
        )));
    }

    let seed = request
        .seed
        .or(state.config.seed)
        .unwrap_or(DEFAULT_DATASET_SEED);
    let path = output_path(&state.config.dataset_path, request.file_name.as_deref())?;
    let generator = state.generator.clone();
    let records = request.records;

    let (path, summary) = tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::seed_from_u64(seed);
        let dataset = assemble(&generator, records, &mut rng)?;
        write_csv_file(&path, &dataset)?;
        Ok::<_, AppError>((path, summarize(&dataset)))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("dataset task failed: {e}")))??;

    info!(
        records = summary.total_records,
        seed,
        path = %path.display(),
        "dataset assembled"
    );

    Ok(Json(AssembleDatasetResponse {
        path,
        seed,
        summary,
    }))
}

/// Resolves the CSV destination. A caller-supplied name must be a single
/// plain path component; it lands in the directory of `dataset_path`.
fn output_path(dataset_path: &Path, file_name: Option<&str>) -> Result<PathBuf, AppError> {
    let Some(name) = file_name else {
        return Ok(dataset_path.to_path_buf());
    };

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(bare)), None) if !name.contains(['/', '\\']) => Ok(dataset_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(bare)),
        _ => Err(AppError::Validation(format!(
            "file_name '{name}' must be a bare file name"
        ))),
    }
}
