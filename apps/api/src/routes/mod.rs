pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::classifier;
use crate::eligibility;
use crate::generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog + eligibility
        .route(
            "/api/v1/careers",
            get(eligibility::handlers::handle_list_careers),
        )
        .route(
            "/api/v1/eligibility",
            post(eligibility::handlers::handle_check_eligibility),
        )
        // Classifier
        .route("/api/v1/predict", post(classifier::handlers::handle_predict))
        // Synthetic data
        .route(
            "/api/v1/profiles/generate",
            post(generation::handlers::handle_generate_profiles),
        )
        .route(
            "/api/v1/datasets",
            post(generation::handlers::handle_assemble_dataset),
        )
        .with_state(state)
}
