use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// An empty qualifying set is not an error: the resolver falls back instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid grade: {0}")]
    InvalidGrade(String),

    #[error("Invalid subject selection: {0}")]
    InvalidSubjectSelection(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidGrade(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_GRADE", msg.clone())
            }
            AppError::InvalidSubjectSelection(msg) => (
                StatusCode::BAD_REQUEST,
                "INVALID_SUBJECT_SELECTION",
                msg.clone(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Classifier(msg) => {
                tracing::error!("Classifier error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "CLASSIFIER_ERROR",
                    "The career classifier could not produce a prediction".to_string(),
                )
            }
            AppError::Dataset(msg) => {
                tracing::error!("Dataset error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "DATASET_ERROR", msg.clone())
            }
            AppError::Csv(e) => {
                tracing::error!("CSV error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATASET_ERROR",
                    "The dataset file could not be read or written".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grade_maps_to_bad_request() {
        let response = AppError::InvalidGrade("'G'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_subject_selection_maps_to_bad_request() {
        let response =
            AppError::InvalidSubjectSelection("expected 4".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_classifier_maps_to_bad_gateway() {
        let response = AppError::Classifier("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
