use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One user's self-reported assessment, as fed into the prediction pipeline.
///
/// `skills` is de-duplicated but keeps submission order (the mock strategy
/// echoes the first few back); the encoder treats it as a set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assessment {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education: String,
    pub work_style: String,
}

impl Assessment {
    pub fn new(
        skills: Vec<String>,
        interests: Vec<String>,
        education: impl Into<String>,
        work_style: impl Into<String>,
    ) -> Self {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self {
            skills,
            interests,
            education: education.into(),
            work_style: work_style.into(),
        }
    }

    pub fn skill_set(&self) -> HashSet<&str> {
        self.skills.iter().map(String::as_str).collect()
    }

    /// Only the first interest feeds the model; an empty list means no interest.
    pub fn primary_interest(&self) -> Option<&str> {
        self.interests.first().map(String::as_str)
    }
}

/// Four-bucket qualitative label derived from a predicted probability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    /// Lower bounds are inclusive: 0.8 / 0.6 / 0.4.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            ConfidenceLevel::VeryHigh
        } else if probability >= 0.6 {
            ConfidenceLevel::High
        } else if probability >= 0.4 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryHigh => "Very High",
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Moderate => "Moderate",
            ConfidenceLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ranked career match. This shape is what the persistence and API
/// layers store and serve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub career_name: String,
    pub match_score: f64, // 0 – 100, 2 decimals
    pub confidence_level: ConfidenceLevel,
    pub rank: u32, // 1-based
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>, // at most 10
    pub completeness_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_confidence_boundaries_are_inclusive() {
        assert_eq!(ConfidenceLevel::from_probability(1.0), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_probability(0.8), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_probability(0.79999), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_probability(0.6), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_probability(0.59999), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_probability(0.4), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_probability(0.39999), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_probability(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confidence_serializes_with_display_labels() {
        let json = serde_json::to_string(&ConfidenceLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
        let parsed: ConfidenceLevel = serde_json::from_str("\"Moderate\"").unwrap();
        assert_eq!(parsed, ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::Low.to_string(), "Low");
    }

    #[test]
    fn test_new_dedups_skills_preserving_order() {
        let a = Assessment::new(
            strings(&["SQL", "Programming", "SQL", "Figma"]),
            strings(&["Analytics"]),
            "Bachelor's Degree",
            "Remote",
        );
        assert_eq!(a.skills, strings(&["SQL", "Programming", "Figma"]));
        assert_eq!(a.skill_set().len(), 3);
    }

    #[test]
    fn test_primary_interest_takes_first_only() {
        let a = Assessment::new(vec![], strings(&["Analytics", "Security"]), "", "");
        assert_eq!(a.primary_interest(), Some("Analytics"));

        let empty = Assessment::new(vec![], vec![], "", "");
        assert_eq!(empty.primary_interest(), None);
    }
}
