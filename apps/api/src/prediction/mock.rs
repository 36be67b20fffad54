use crate::prediction::models::{Assessment, ConfidenceLevel, PredictionResult};
use crate::prediction::predictor::{CareerPredictor, PredictionError, PredictionStrategy};

struct MockCareer {
    name: &'static str,
    match_score: f64,
    confidence_level: ConfidenceLevel,
    echoed_skills: usize,
    missing_skills: [&'static str; 2],
    completeness_percent: f64,
}

const MOCK_CAREERS: [MockCareer; 5] = [
    MockCareer {
        name: "Software Developer",
        match_score: 92.0,
        confidence_level: ConfidenceLevel::VeryHigh,
        echoed_skills: 3,
        missing_skills: ["Git", "SQL"],
        completeness_percent: 60.0,
    },
    MockCareer {
        name: "Data Scientist",
        match_score: 85.0,
        confidence_level: ConfidenceLevel::High,
        echoed_skills: 2,
        missing_skills: ["Machine Learning", "Statistics"],
        completeness_percent: 40.0,
    },
    MockCareer {
        name: "UX/UI Designer",
        match_score: 78.0,
        confidence_level: ConfidenceLevel::High,
        echoed_skills: 2,
        missing_skills: ["Figma", "User Research"],
        completeness_percent: 50.0,
    },
    MockCareer {
        name: "Web Developer",
        match_score: 72.0,
        confidence_level: ConfidenceLevel::Moderate,
        echoed_skills: 1,
        missing_skills: ["JavaScript", "React"],
        completeness_percent: 45.0,
    },
    MockCareer {
        name: "Product Manager",
        match_score: 68.0,
        confidence_level: ConfidenceLevel::Moderate,
        echoed_skills: 1,
        missing_skills: ["Product Strategy", "Agile"],
        completeness_percent: 50.0,
    },
];

/// Deterministic stand-in for the trained model: always the same five careers,
/// echoing the first few submitted skills as matches. Used when no artifact set
/// is deployed.
pub struct MockPredictor;

impl CareerPredictor for MockPredictor {
    fn strategy(&self) -> PredictionStrategy {
        PredictionStrategy::Mock
    }

    fn predict(
        &self,
        assessment: &Assessment,
        top_k: usize,
    ) -> Result<Vec<PredictionResult>, PredictionError> {
        Ok(MOCK_CAREERS
            .iter()
            .take(top_k)
            .zip(1..)
            .map(|(career, rank)| PredictionResult {
                career_name: career.name.to_string(),
                match_score: career.match_score,
                confidence_level: career.confidence_level,
                rank,
                matching_skills: assessment
                    .skills
                    .iter()
                    .take(career.echoed_skills)
                    .cloned()
                    .collect(),
                missing_skills: career.missing_skills.iter().map(|s| s.to_string()).collect(),
                completeness_percent: career.completeness_percent,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::testing::{assessment, strings};

    #[test]
    fn test_mock_returns_fixed_ranking() {
        let results = MockPredictor
            .predict(&assessment(&["Programming", "SQL", "Figma", "Excel"]), 5)
            .unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.career_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Software Developer",
                "Data Scientist",
                "UX/UI Designer",
                "Web Developer",
                "Product Manager"
            ]
        );
        assert_eq!(results[0].matching_skills, strings(&["Programming", "SQL", "Figma"]));
        assert_eq!(results[1].matching_skills, strings(&["Programming", "SQL"]));
        assert_eq!(results[4].matching_skills, strings(&["Programming"]));
        assert_eq!(results[2].missing_skills, strings(&["Figma", "User Research"]));
        assert_eq!(results[3].confidence_level, ConfidenceLevel::Moderate);
    }

    #[test]
    fn test_mock_is_deterministic() {
        let a = assessment(&["SQL"]);
        assert_eq!(
            MockPredictor.predict(&a, 5).unwrap(),
            MockPredictor.predict(&a, 5).unwrap()
        );
    }

    #[test]
    fn test_mock_respects_top_k() {
        let results = MockPredictor.predict(&assessment(&["SQL"]), 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].rank, 2);
        assert_eq!(results[0].matching_skills, strings(&["SQL"]));
    }

    #[test]
    fn test_mock_with_no_skills() {
        let results = MockPredictor.predict(&assessment(&[]), 5).unwrap();
        assert!(results.iter().all(|r| r.matching_skills.is_empty()));
        assert_eq!(MockPredictor.strategy(), PredictionStrategy::Mock);
    }
}
