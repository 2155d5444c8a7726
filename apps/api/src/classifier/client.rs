//! Remote classifier: forwards profiles to an external inference service.
//!
//! The request body is the profile in the dataset's column naming, so the
//! service sees exactly the features it was trained on. Expected response:
//! `{"prediction": "<career>", "probabilities": {"<career>": p, ...}}`.
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classifier::{CareerClassifier, Prediction};
use crate::errors::AppError;
use crate::models::career::CareerPath;
use crate::models::profile::StudentProfile;

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Feature record sent to the inference service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    #[serde(rename = "Gender")]
    pub gender: &'static str,
    #[serde(rename = "Math_Grade")]
    pub math_grade: f64,
    #[serde(rename = "English_Grade")]
    pub english_grade: f64,
    #[serde(rename = "Kiswahili_Grade")]
    pub kiswahili_grade: f64,
    #[serde(rename = "Subject_4")]
    pub subject_4: &'static str,
    #[serde(rename = "Subject_5")]
    pub subject_5: &'static str,
    #[serde(rename = "Subject_6")]
    pub subject_6: &'static str,
    #[serde(rename = "Subject_7")]
    pub subject_7: &'static str,
    #[serde(rename = "Grade_4")]
    pub grade_4: f64,
    #[serde(rename = "Grade_5")]
    pub grade_5: f64,
    #[serde(rename = "Grade_6")]
    pub grade_6: f64,
    #[serde(rename = "Grade_7")]
    pub grade_7: f64,
    #[serde(rename = "Took_All_Sciences")]
    pub took_all_sciences: bool,
    #[serde(rename = "Average_Performance")]
    pub average_performance: f64,
}

impl From<&StudentProfile> for FeatureRecord {
    fn from(p: &StudentProfile) -> Self {
        let [s4, s5, s6, s7] = *p.optional_subjects();
        FeatureRecord {
            gender: p.gender().name(),
            math_grade: p.math().points(),
            english_grade: p.english().points(),
            kiswahili_grade: p.kiswahili().points(),
            subject_4: s4.subject.name(),
            subject_5: s5.subject.name(),
            subject_6: s6.subject.name(),
            subject_7: s7.subject.name(),
            grade_4: s4.grade.points(),
            grade_5: s5.grade.points(),
            grade_6: s6.grade.points(),
            grade_7: s7.grade.points(),
            took_all_sciences: p.took_all_sciences(),
            average_performance: p.average_performance(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoteResponse {
    prediction: String,
    probabilities: HashMap<String, f64>,
}

impl RemoteResponse {
    /// Validates names against the catalog and normalizes the distribution.
    fn into_prediction(self) -> Result<Prediction, AppError> {
        let label: CareerPath = self
            .prediction
            .parse()
            .map_err(|e| AppError::Classifier(format!("unknown predicted label: {e}")))?;

        let mut weights: HashMap<CareerPath, f64> = HashMap::new();
        for (name, p) in self.probabilities {
            let career: CareerPath = name
                .parse()
                .map_err(|e| AppError::Classifier(format!("unknown class in distribution: {e}")))?;
            weights.insert(career, p);
        }

        let mut prediction = Prediction::from_weights(
            |career| weights.get(&career).copied().unwrap_or(0.0),
            "remote",
        )?;
        // The service's own label wins over the arg-max of its distribution.
        prediction.label = label;
        Ok(prediction)
    }
}

/// HTTP client for the external inference endpoint.
/// Retries on 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct RemoteClassifier {
    client: Client,
    url: String,
}

impl RemoteClassifier {
    pub fn new(url: String) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Classifier(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call(&self, record: &FeatureRecord) -> Result<RemoteResponse, AppError> {
        let mut last_error: Option<AppError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Classifier call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&self.url).json(record).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AppError::Classifier(format!("request failed: {e}")));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Classifier returned {}: {}", status, body);
                last_error = Some(AppError::Classifier(format!("status {status}: {body}")));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::Classifier(format!("status {status}: {body}")));
            }

            let parsed: RemoteResponse = response
                .json()
                .await
                .map_err(|e| AppError::Classifier(format!("malformed response: {e}")))?;

            debug!(prediction = %parsed.prediction, "classifier call succeeded");
            return Ok(parsed);
        }

        Err(last_error.unwrap_or_else(|| {
            AppError::Classifier(format!("no response after {MAX_RETRIES} attempts"))
        }))
    }
}

#[async_trait]
impl CareerClassifier for RemoteClassifier {
    async fn classify(&self, profile: &StudentProfile) -> Result<Prediction, AppError> {
        let record = FeatureRecord::from(profile);
        self.call(&record).await?.into_prediction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grade::Grade::*;
    use crate::models::profile::fixtures::profile;
    use crate::models::subject::Subject::*;

    fn response(prediction: &str, probabilities: &[(&str, f64)]) -> RemoteResponse {
        RemoteResponse {
            prediction: prediction.to_string(),
            probabilities: probabilities
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn test_feature_record_uses_dataset_columns() {
        let p = profile(
            [A, B, C],
            [(ComputerScience, B), (Physics, A), (History, E), (Religion, F)],
        );
        let json = serde_json::to_value(FeatureRecord::from(&p)).unwrap();
        assert_eq!(json["Gender"], "Female");
        assert_eq!(json["Math_Grade"], 4.0);
        assert_eq!(json["Subject_4"], "Computer Science");
        assert_eq!(json["Grade_6"], 0.5);
        assert_eq!(json["Took_All_Sciences"], false);
        assert!(json.get("Career_Path").is_none());
    }

    #[test]
    fn test_response_is_normalized() {
        let prediction = response("Law", &[("Law", 2.0), ("Music", 1.0), ("Tourism", 1.0)])
            .into_prediction()
            .unwrap();
        assert_eq!(prediction.label, CareerPath::Law);
        assert_eq!(prediction.backend, "remote");
        assert_eq!(prediction.probabilities.len(), CareerPath::CATALOG.len());
        let law = prediction
            .probabilities
            .iter()
            .find(|p| p.career_path == CareerPath::Law)
            .unwrap();
        assert!((law.probability - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_label_is_classifier_error() {
        let err = response("Astronaut", &[("Law", 1.0)]).into_prediction().unwrap_err();
        assert!(matches!(err, AppError::Classifier(_)));
    }

    #[test]
    fn test_unknown_class_in_distribution_is_error() {
        let err = response("Law", &[("Law", 0.5), ("Agriculture", 0.5)])
            .into_prediction()
            .unwrap_err();
        assert!(matches!(err, AppError::Classifier(_)));
    }

    #[test]
    fn test_client_keeps_url() {
        let classifier = RemoteClassifier::new("http://localhost:9000/predict".to_string()).unwrap();
        assert_eq!(classifier.url(), "http://localhost:9000/predict");
    }
}
