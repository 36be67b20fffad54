// Career prediction pipeline: artifact loading, feature encoding, classifier
// inference and skill-gap analysis. Synchronous and CPU-only; callers on the
// async runtime go through `assessments::service::run_prediction`.

pub mod artifacts;
pub mod classifier;
pub mod encoder;
pub mod gap;
pub mod mock;
pub mod models;
pub mod predictor;

#[cfg(test)]
pub mod testing;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::prediction::artifacts::{ArtifactError, ArtifactSet};
use crate::prediction::mock::MockPredictor;
use crate::prediction::predictor::{CareerPredictor, ModelPredictor, PredictionStrategy};

/// Builds the predictor named by config. With `cache_artifacts` the artifact
/// set is loaded here, so a missing artifact fails startup rather than the
/// first request.
pub fn build_predictor(
    strategy: PredictionStrategy,
    artifact_dir: &Path,
    cache_artifacts: bool,
) -> Result<Arc<dyn CareerPredictor>, ArtifactError> {
    match strategy {
        PredictionStrategy::Mock => {
            warn!("Using mock career predictor; recommendations are fixed sample data");
            Ok(Arc::new(MockPredictor))
        }
        PredictionStrategy::Model if cache_artifacts => {
            let artifacts = ArtifactSet::load(artifact_dir)?;
            info!("Model predictor ready (artifacts cached)");
            Ok(Arc::new(ModelPredictor::cached(Arc::new(artifacts))))
        }
        PredictionStrategy::Model => {
            info!(
                "Model predictor ready (artifacts reloaded per call from {})",
                artifact_dir.display()
            );
            Ok(Arc::new(ModelPredictor::reloading(artifact_dir)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::testing::{assessment, sample_artifacts, write_artifacts};
    use tempfile::TempDir;

    #[test]
    fn test_mock_strategy_needs_no_artifacts() {
        let dir = TempDir::new().unwrap();
        let predictor = build_predictor(PredictionStrategy::Mock, dir.path(), true).unwrap();
        assert_eq!(predictor.strategy(), PredictionStrategy::Mock);
        assert_eq!(predictor.predict(&assessment(&["SQL"]), 5).unwrap().len(), 5);
    }

    #[test]
    fn test_cached_model_fails_fast_on_empty_dir() {
        let dir = TempDir::new().unwrap();
        let err = build_predictor(PredictionStrategy::Model, dir.path(), true)
            .err()
            .unwrap();
        assert!(matches!(err, ArtifactError::Missing { .. }));
    }

    #[test]
    fn test_reloading_model_defers_load_to_predict() {
        let dir = TempDir::new().unwrap();
        let predictor = build_predictor(PredictionStrategy::Model, dir.path(), false).unwrap();
        assert!(predictor.predict(&assessment(&["SQL"]), 5).is_err());

        write_artifacts(dir.path(), &sample_artifacts());
        let results = predictor.predict(&assessment(&["SQL"]), 5).unwrap();
        assert_eq!(results.len(), 3);
    }
}
