//! Career predictor: pluggable, trait-based ranking of careers for an
//! assessment.
//!
//! `ModelPredictor` runs the trained classifier; `MockPredictor` (see
//! [`crate::prediction::mock`]) returns a fixed deterministic ranking. The
//! strategy is picked once at startup from config and carried in `AppState`
//! as `Arc<dyn CareerPredictor>`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::prediction::artifacts::{ArtifactError, ArtifactSet};
use crate::prediction::classifier::{Classifier, ModelError};
use crate::prediction::encoder::LabelEncoder;
use crate::prediction::gap::{analyze_skill_gap, round2};
use crate::prediction::models::{Assessment, ConfidenceLevel, PredictionResult};

pub const DEFAULT_TOP_K: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Errors & strategy selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("prediction failed: {0}")]
    Failed(#[from] ModelError),

    #[error("prediction task aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStrategy {
    Model,
    Mock,
}

impl PredictionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionStrategy::Model => "model",
            PredictionStrategy::Mock => "mock",
        }
    }
}

impl fmt::Display for PredictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "model" => Ok(PredictionStrategy::Model),
            "mock" => Ok(PredictionStrategy::Mock),
            other => Err(format!("unknown prediction strategy '{other}' (expected 'model' or 'mock')")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks careers for one assessment. Synchronous and CPU-bound; implementors
/// hold no mutable state, so one instance serves concurrent calls.
///
/// Either the full ranked list is returned or an error, never a partial list.
pub trait CareerPredictor: Send + Sync {
    fn strategy(&self) -> PredictionStrategy;

    fn predict(
        &self,
        assessment: &Assessment,
        top_k: usize,
    ) -> Result<Vec<PredictionResult>, PredictionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ModelPredictor
// ────────────────────────────────────────────────────────────────────────────

enum ArtifactSource {
    Cached(Arc<ArtifactSet>),
    Directory(PathBuf),
}

/// Runs the trained classifier. Artifacts are either loaded once and shared,
/// or re-read from disk on every call.
pub struct ModelPredictor {
    source: ArtifactSource,
}

impl ModelPredictor {
    pub fn cached(artifacts: Arc<ArtifactSet>) -> Self {
        Self {
            source: ArtifactSource::Cached(artifacts),
        }
    }

    pub fn reloading(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: ArtifactSource::Directory(dir.into()),
        }
    }

    fn artifacts(&self) -> Result<Arc<ArtifactSet>, ArtifactError> {
        match &self.source {
            ArtifactSource::Cached(set) => Ok(Arc::clone(set)),
            ArtifactSource::Directory(dir) => ArtifactSet::load(dir).map(Arc::new),
        }
    }
}

impl CareerPredictor for ModelPredictor {
    fn strategy(&self) -> PredictionStrategy {
        PredictionStrategy::Model
    }

    fn predict(
        &self,
        assessment: &Assessment,
        top_k: usize,
    ) -> Result<Vec<PredictionResult>, PredictionError> {
        let artifacts = self.artifacts()?;

        let features = artifacts.feature_encoder().encode(assessment);
        let ranked = rank_careers(
            &artifacts.model,
            &artifacts.label_encoder,
            &features,
            top_k,
        )?;

        let gap = analyze_skill_gap(&artifacts.skill_vocabulary, &assessment.skill_set());
        debug!(
            "Ranked {} careers, skill completeness {}%",
            ranked.len(),
            gap.completeness_percent
        );

        Ok(ranked
            .into_iter()
            .zip(1..)
            .map(|(career, rank)| PredictionResult {
                match_score: round2(career.probability * 100.0),
                confidence_level: ConfidenceLevel::from_probability(career.probability),
                career_name: career.career_name,
                rank,
                matching_skills: gap.matching_skills.clone(),
                missing_skills: gap.missing_skills.clone(),
                completeness_percent: gap.completeness_percent,
            })
            .collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCareer {
    pub career_name: String,
    pub probability: f64,
}

/// Orders careers by predicted probability, highest first, and keeps `top_k`.
///
/// The sort is stable, so equal probabilities keep the classifier's class
/// order. A classifier without probability output yields its single best class
/// with probability 1.0.
pub fn rank_careers(
    classifier: &dyn Classifier,
    labels: &LabelEncoder,
    features: &[f64],
    top_k: usize,
) -> Result<Vec<RankedCareer>, ModelError> {
    let mut scored: Vec<(usize, f64)> = if classifier.supports_probability() {
        classifier
            .predict_proba(features)?
            .into_iter()
            .enumerate()
            .collect()
    } else {
        vec![(classifier.predict(features)?, 1.0)]
    };

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(top_k);

    scored
        .into_iter()
        .map(|(class, probability)| {
            let name = labels
                .inverse_transform(class)
                .ok_or(ModelError::UnknownClass(class))?;
            Ok(RankedCareer {
                career_name: name.to_string(),
                probability,
            })
        })
        .collect()
}
