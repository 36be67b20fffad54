//! Feature encoding: turns a raw [`Assessment`] into the fixed-length numeric
//! vector the classifier was trained on.
//!
//! Layout: `[education, work_style, interest, skill_1 .. skill_N]`, skills in
//! vocabulary order. Unseen categorical values encode as `0` and are logged,
//! never surfaced as errors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::prediction::models::Assessment;

/// Number of categorical columns preceding the skill bits.
pub const CATEGORICAL_FEATURES: usize = 3;

/// String label ↔ integer code mapping fixed at training time. The code of a
/// label is its index in `classes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Sorted, de-duplicated classes, the way the training job fits encoders.
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn inverse_transform(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}

/// Borrowed view over the encoding artifacts of one loaded set. The skill
/// vocabulary and encoders must come from the same training run.
#[derive(Debug, Clone, Copy)]
pub struct FeatureEncoder<'a> {
    pub education: &'a LabelEncoder,
    pub work_style: &'a LabelEncoder,
    pub interest_vocabulary: Option<&'a [String]>,
    pub interest: Option<&'a LabelEncoder>,
    pub skill_vocabulary: &'a [String],
}

impl<'a> FeatureEncoder<'a> {
    pub fn n_features(&self) -> usize {
        CATEGORICAL_FEATURES + self.skill_vocabulary.len()
    }

    pub fn encode(&self, assessment: &Assessment) -> Vec<f64> {
        let mut features = Vec::with_capacity(self.n_features());
        features.push(encode_or_zero(
            self.education,
            &assessment.education,
            "education",
        ) as f64);
        features.push(encode_or_zero(
            self.work_style,
            &assessment.work_style,
            "work_style",
        ) as f64);
        features.push(self.encode_interest(assessment.primary_interest()) as f64);

        let user_skills: HashSet<&str> = assessment.skill_set();
        features.extend(self.skill_vocabulary.iter().map(|skill| {
            if user_skills.contains(skill.as_str()) {
                1.0
            } else {
                0.0
            }
        }));
        features
    }

    /// Every interest fallback encodes as 0 and is logged with its reason.
    fn encode_interest(&self, interest: Option<&str>) -> usize {
        match self.resolve_interest(interest) {
            Ok(code) => code,
            Err(reason) => {
                warn!(
                    field = "interest",
                    value = interest.unwrap_or_default(),
                    %reason,
                    "interest encoding fallback, encoding as 0"
                );
                0
            }
        }
    }

    /// Resolves the first interest through the dedicated interest encoder, but
    /// only when it belongs to the loaded interest vocabulary.
    fn resolve_interest(&self, interest: Option<&str>) -> Result<usize, InterestFallback> {
        let value = interest.ok_or(InterestFallback::NoInterest)?;
        let vocabulary = self
            .interest_vocabulary
            .ok_or(InterestFallback::NoVocabulary)?;
        if !vocabulary.iter().any(|v| v == value) {
            return Err(InterestFallback::NotInVocabulary);
        }
        let encoder = self.interest.ok_or(InterestFallback::NoEncoder)?;
        encoder.transform(value).ok_or(InterestFallback::Unseen)
    }
}

/// Why an interest could not be resolved to a trained code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterestFallback {
    NoInterest,
    NoVocabulary,
    NotInVocabulary,
    NoEncoder,
    Unseen,
}

impl std::fmt::Display for InterestFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InterestFallback::NoInterest => "no interest given",
            InterestFallback::NoVocabulary => "interest vocabulary not loaded",
            InterestFallback::NotInVocabulary => "interest not in vocabulary",
            InterestFallback::NoEncoder => "interest encoder not loaded",
            InterestFallback::Unseen => "interest unseen by encoder",
        })
    }
}

fn encode_or_zero(encoder: &LabelEncoder, value: &str, field: &'static str) -> usize {
    match encoder.transform(value) {
        Some(code) => code,
        None => {
            warn!(field, value, "unseen categorical value, encoding as 0");
            0
        }
    }
}
