use std::sync::{Arc, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::classifier::CareerClassifier;
use crate::config::Config;
use crate::errors::AppError;
use crate::generation::profile_generator::ProfileGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable classifier. Default: RuleBasedClassifier. Remote when CLASSIFIER_URL is set.
    pub classifier: Arc<dyn CareerClassifier>,
    pub generator: Arc<ProfileGenerator>,
    /// Shared random source, seeded from CAREER_SEED when set.
    /// Locked only around synchronous core calls, never across an await.
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(
        config: Config,
        classifier: Arc<dyn CareerClassifier>,
        generator: ProfileGenerator,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            classifier,
            generator: Arc::new(generator),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn rng(&self) -> Result<MutexGuard<'_, StdRng>, AppError> {
        self.rng
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("random source lock poisoned")))
    }
}
