//! Axum route handlers for the Career catalog and Eligibility API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::eligibility::resolver::{resolve, Resolution};
use crate::eligibility::rules::RuleGroup;
use crate::errors::AppError;
use crate::models::career::{CareerPath, Cluster};
use crate::models::profile::{ProfileSubmission, StudentProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerEntry {
    pub career_path: CareerPath,
    pub cluster: Cluster,
    pub rule_group: RuleGroup,
    pub requirement: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub careers: Vec<CareerEntry>,
}

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    pub profile: StudentProfile,
    pub resolution: Resolution,
}

/// GET /api/v1/careers
pub async fn handle_list_careers() -> Json<CatalogResponse> {
    let careers = CareerPath::CATALOG
        .iter()
        .map(|career| {
            let rule_group = RuleGroup::for_career(*career);
            CareerEntry {
                career_path: *career,
                cluster: career.cluster(),
                rule_group,
                requirement: rule_group.requirement(),
            }
        })
        .collect();

    Json(CatalogResponse { careers })
}

/// POST /api/v1/eligibility
///
/// Validates a front-end submission, then returns the derived profile, the full
/// qualifying set, and one resolved label.
pub async fn handle_check_eligibility(
    State(state): State<AppState>,
    Json(submission): Json<ProfileSubmission>,
) -> Result<Json<EligibilityResponse>, AppError> {
    let profile = StudentProfile::try_from(submission)?;
    let resolution = {
        let mut rng = state.rng()?;
        resolve(&profile, &mut *rng)
    };

    Ok(Json(EligibilityResponse {
        profile,
        resolution,
    }))
}
