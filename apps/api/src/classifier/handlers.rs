use axum::{extract::State, Json};
use serde::Serialize;

use crate::classifier::{CareerProbability, Prediction};
use crate::errors::AppError;
use crate::models::profile::{ProfileSubmission, StudentProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub average_performance: f64,
    pub prediction: Prediction,
    pub top: Vec<CareerProbability>,
}

/// POST /api/v1/predict
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(submission): Json<ProfileSubmission>,
) -> Result<Json<PredictResponse>, AppError> {
    let profile = StudentProfile::try_from(submission)?;
    let prediction = state.classifier.classify(&profile).await?;

    Ok(Json(PredictResponse {
        average_performance: profile.average_performance(),
        top: prediction.top(3),
        prediction,
    }))
}
