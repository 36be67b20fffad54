//! Artifact store: loads the classifier, encoders and vocabularies produced
//! by the offline training job.
//!
//! All artifacts are JSON files co-located in one directory. Every file except
//! the interest vocabulary and interest encoder is required; a missing
//! required file aborts the load with [`ArtifactError::Missing`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::prediction::classifier::{Classifier, ModelError, TrainedModel};
use crate::prediction::encoder::{FeatureEncoder, LabelEncoder, CATEGORICAL_FEATURES};

pub const TRAINED_MODEL: &str = "trained_model.json";
pub const LABEL_ENCODER: &str = "label_encoder.json";
pub const EDUCATION_ENCODER: &str = "education_encoder.json";
pub const WORK_STYLE_ENCODER: &str = "work_style_encoder.json";
pub const SKILLS_LIST: &str = "skills_list.json";
pub const INTERESTS_LIST: &str = "interests_list.json";
pub const INTEREST_ENCODER: &str = "interest_encoder.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("required artifact '{name}' not found at {}", path.display())]
    Missing { name: &'static str, path: PathBuf },

    #[error("failed to read artifact '{name}': {source}")]
    Io {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("artifact '{name}' is malformed: {reason}")]
    Malformed { name: &'static str, reason: String },
}

/// One matched set of training artifacts. Immutable once loaded; share it
/// across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub model: TrainedModel,
    pub label_encoder: LabelEncoder,
    pub education_encoder: LabelEncoder,
    pub work_style_encoder: LabelEncoder,
    pub skill_vocabulary: Vec<String>,
    pub interest_vocabulary: Option<Vec<String>>,
    pub interest_encoder: Option<LabelEncoder>,
}

impl ArtifactSet {
    /// Loads and cross-checks the artifact set stored in `dir`.
    ///
    /// Required artifacts are located before any is parsed, so a missing file
    /// is reported even when another one is also malformed.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        for name in [
            TRAINED_MODEL,
            LABEL_ENCODER,
            EDUCATION_ENCODER,
            WORK_STYLE_ENCODER,
            SKILLS_LIST,
        ] {
            let path = dir.join(name);
            if !path.is_file() {
                return Err(ArtifactError::Missing { name, path });
            }
        }

        let set = ArtifactSet {
            model: read_required(dir, TRAINED_MODEL)?,
            label_encoder: read_required(dir, LABEL_ENCODER)?,
            education_encoder: read_required(dir, EDUCATION_ENCODER)?,
            work_style_encoder: read_required(dir, WORK_STYLE_ENCODER)?,
            skill_vocabulary: read_required(dir, SKILLS_LIST)?,
            interest_vocabulary: read_optional(dir, INTERESTS_LIST)?,
            interest_encoder: read_optional(dir, INTEREST_ENCODER)?,
        };
        set.validate()?;

        info!(
            "Loaded artifacts from {}: {} model, {} careers, {} skills",
            dir.display(),
            set.model.kind(),
            set.label_encoder.len(),
            set.skill_vocabulary.len()
        );
        Ok(set)
    }

    /// Checks that the model, label encoder and skill vocabulary agree on shape.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        self.model.validate().map_err(|e| malformed(TRAINED_MODEL, e))?;

        if self.label_encoder.is_empty() {
            return Err(ArtifactError::Malformed {
                name: LABEL_ENCODER,
                reason: "no career classes".to_string(),
            });
        }
        if self.model.n_classes() != self.label_encoder.len() {
            return Err(ArtifactError::Malformed {
                name: TRAINED_MODEL,
                reason: format!(
                    "model predicts {} classes but the label encoder has {}",
                    self.model.n_classes(),
                    self.label_encoder.len()
                ),
            });
        }

        let expected = CATEGORICAL_FEATURES + self.skill_vocabulary.len();
        if self.model.n_features() != expected {
            return Err(ArtifactError::Malformed {
                name: TRAINED_MODEL,
                reason: format!(
                    "model expects {} features but the skill vocabulary implies {}",
                    self.model.n_features(),
                    expected
                ),
            });
        }
        Ok(())
    }

    pub fn feature_encoder(&self) -> FeatureEncoder<'_> {
        FeatureEncoder {
            education: &self.education_encoder,
            work_style: &self.work_style_encoder,
            interest_vocabulary: self.interest_vocabulary.as_deref(),
            interest: self.interest_encoder.as_ref(),
            skill_vocabulary: &self.skill_vocabulary,
        }
    }
}

fn malformed(name: &'static str, err: ModelError) -> ArtifactError {
    ArtifactError::Malformed {
        name,
        reason: err.to_string(),
    }
}

fn read_required<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Result<T, ArtifactError> {
    let path = dir.join(name);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ArtifactError::Missing { name, path })
        }
        Err(source) => return Err(ArtifactError::Io { name, source }),
    };
    serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Malformed {
        name,
        reason: e.to_string(),
    })
}

fn read_optional<T: DeserializeOwned>(
    dir: &Path,
    name: &'static str,
) -> Result<Option<T>, ArtifactError> {
    match read_required(dir, name) {
        Ok(value) => Ok(Some(value)),
        Err(ArtifactError::Missing { .. }) => {
            debug!("Optional artifact {name} not present");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::classifier::TreeNode;
    use crate::prediction::testing::{sample_artifacts, write_artifacts};
    use tempfile::TempDir;

    #[test]
    fn test_load_round_trips_written_set() {
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path(), &sample_artifacts());

        let set = ArtifactSet::load(dir.path()).unwrap();
        assert_eq!(set.label_encoder.len(), 3);
        assert_eq!(set.skill_vocabulary.len(), 3);
        assert!(set.interest_vocabulary.is_some());
        assert!(set.interest_encoder.is_some());
    }

    #[test]
    fn test_missing_classifier_is_artifact_missing() {
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path(), &sample_artifacts());
        fs::remove_file(dir.path().join(TRAINED_MODEL)).unwrap();

        match ArtifactSet::load(dir.path()) {
            Err(ArtifactError::Missing { name, path }) => {
                assert_eq!(name, TRAINED_MODEL);
                assert_eq!(path, dir.path().join(TRAINED_MODEL));
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_every_required_artifact_is_enforced() {
        for name in [
            TRAINED_MODEL,
            LABEL_ENCODER,
            EDUCATION_ENCODER,
            WORK_STYLE_ENCODER,
            SKILLS_LIST,
        ] {
            let dir = TempDir::new().unwrap();
            write_artifacts(dir.path(), &sample_artifacts());
            fs::remove_file(dir.path().join(name)).unwrap();

            let err = ArtifactSet::load(dir.path()).unwrap_err();
            assert!(
                matches!(err, ArtifactError::Missing { name: missing, .. } if missing == name),
                "{name}: got {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_is_reported_before_malformed() {
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path(), &sample_artifacts());
        fs::write(dir.path().join(LABEL_ENCODER), b"not json").unwrap();
        fs::remove_file(dir.path().join(SKILLS_LIST)).unwrap();

        let err = ArtifactSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { name: SKILLS_LIST, .. }));
    }

    #[test]
    fn test_optional_interest_artifacts_may_be_absent() {
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path(), &sample_artifacts());
        fs::remove_file(dir.path().join(INTERESTS_LIST)).unwrap();
        fs::remove_file(dir.path().join(INTEREST_ENCODER)).unwrap();

        let set = ArtifactSet::load(dir.path()).unwrap();
        assert!(set.interest_vocabulary.is_none());
        assert!(set.interest_encoder.is_none());
        assert!(set.feature_encoder().interest_vocabulary.is_none());
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path(), &sample_artifacts());
        fs::write(dir.path().join(EDUCATION_ENCODER), b"{\"classes\": 7}").unwrap();

        let err = ArtifactSet::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Malformed {
                name: EDUCATION_ENCODER,
                ..
            }
        ));
    }

    #[test]
    fn test_vocabulary_width_mismatch_is_malformed() {
        let mut set = sample_artifacts();
        set.skill_vocabulary.push("Excel".to_string());

        let err = set.validate().unwrap_err();
        assert!(err.to_string().contains("features"), "{err}");
    }

    #[test]
    fn test_class_count_mismatch_is_malformed() {
        let mut set = sample_artifacts();
        set.label_encoder = LabelEncoder::fit(["Only Career"]);

        let err = set.validate().unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Malformed {
                name: TRAINED_MODEL,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_leaf_count_is_malformed_on_load() {
        let mut set = sample_artifacts();
        if let TrainedModel::DecisionTree(tree) = &mut set.model {
            tree.nodes[2] = TreeNode::Leaf {
                counts: vec![-1.0, 1.0, 2.0],
            };
        }
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path(), &set);

        let err = ArtifactSet::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Malformed {
                name: TRAINED_MODEL,
                ..
            }
        ));
        assert!(err.to_string().contains("invalid count"), "{err}");
    }
}
