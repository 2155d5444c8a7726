//! Career Classifier: pluggable, trait-based predictor over the profile schema.
//!
//! Default: `RuleBasedClassifier` (derived from the eligibility rules, deterministic).
//! Optional: `RemoteClassifier` (forwards the profile to an external inference endpoint).
//!
//! `AppState` holds an `Arc<dyn CareerClassifier>`, chosen at startup via `CLASSIFIER_URL`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::eligibility::resolver::FALLBACK_CAREERS;
use crate::eligibility::rules::qualifying_set;
use crate::errors::AppError;
use crate::models::career::CareerPath;
use crate::models::profile::StudentProfile;

pub mod client;
pub mod handlers;

pub use client::RemoteClassifier;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all classifier backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProbability {
    pub career_path: CareerPath,
    pub probability: f64,
}

/// A predicted label plus a probability for every path in the catalog,
/// listed in catalog order and summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: CareerPath,
    pub probabilities: Vec<CareerProbability>,
    pub backend: String, // "rules" | "remote"
}

impl Prediction {
    /// Builds a prediction from raw per-path weights. Missing paths get zero;
    /// the label is the heaviest path, ties going to the earlier catalog entry.
    pub fn from_weights(
        weights: impl Fn(CareerPath) -> f64,
        backend: &str,
    ) -> Result<Self, AppError> {
        let raw: Vec<(CareerPath, f64)> = CareerPath::CATALOG
            .iter()
            .map(|c| (*c, weights(*c)))
            .collect();

        if raw.iter().any(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(AppError::Classifier(
                "probabilities must be finite and non-negative".to_string(),
            ));
        }
        let total: f64 = raw.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(AppError::Classifier(
                "probability distribution has no mass".to_string(),
            ));
        }

        let probabilities: Vec<CareerProbability> = raw
            .into_iter()
            .map(|(career_path, w)| CareerProbability {
                career_path,
                probability: w / total,
            })
            .collect();

        let mut label = probabilities[0].career_path;
        let mut best = probabilities[0].probability;
        for entry in &probabilities[1..] {
            if entry.probability > best {
                best = entry.probability;
                label = entry.career_path;
            }
        }

        Ok(Prediction {
            label,
            probabilities,
            backend: backend.to_string(),
        })
    }

    /// The `n` most probable paths, highest first.
    pub fn top(&self, n: usize) -> Vec<CareerProbability> {
        let mut ranked = self.probabilities.clone();
        ranked.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.career_path.cmp(&b.career_path))
        });
        ranked.truncate(n);
        ranked
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The classifier trait. Implement this to swap backends without touching the
/// endpoint or handler code.
#[async_trait]
pub trait CareerClassifier: Send + Sync {
    async fn classify(&self, profile: &StudentProfile) -> Result<Prediction, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedClassifier: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Spreads probability uniformly over the qualifying set, or over the fallback
/// careers when nothing qualifies. No randomness, no network.
pub struct RuleBasedClassifier;

#[async_trait]
impl CareerClassifier for RuleBasedClassifier {
    async fn classify(&self, profile: &StudentProfile) -> Result<Prediction, AppError> {
        classify_by_rules(profile)
    }
}

fn classify_by_rules(profile: &StudentProfile) -> Result<Prediction, AppError> {
    let qualifying = qualifying_set(profile);
    let support: &[CareerPath] = if qualifying.is_empty() {
        &FALLBACK_CAREERS
    } else {
        &qualifying
    };

    Prediction::from_weights(
        |career| if support.contains(&career) { 1.0 } else { 0.0 },
        "rules",
    )
}
