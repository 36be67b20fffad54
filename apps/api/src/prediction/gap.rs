//! Skill-gap analysis: coverage of the user's skills over the trained skill
//! vocabulary. The same analysis is attached to every ranked career.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const MAX_MISSING_SKILLS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGap {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub completeness_percent: f64,
}

/// Splits the vocabulary into skills the user has and skills they lack, both
/// in vocabulary order. Missing skills are capped at [`MAX_MISSING_SKILLS`];
/// completeness is computed over the full vocabulary.
pub fn analyze_skill_gap(vocabulary: &[String], user_skills: &HashSet<&str>) -> SkillGap {
    let (matching, missing): (Vec<&String>, Vec<&String>) = vocabulary
        .iter()
        .partition(|skill| user_skills.contains(skill.as_str()));

    SkillGap {
        completeness_percent: completeness_percent(matching.len(), vocabulary.len()),
        matching_skills: matching.into_iter().cloned().collect(),
        missing_skills: missing
            .into_iter()
            .take(MAX_MISSING_SKILLS)
            .cloned()
            .collect(),
    }
}

/// `100 * matched / max(1, vocabulary_size)`, rounded to 2 decimals.
pub fn completeness_percent(matched: usize, vocabulary_size: usize) -> f64 {
    round2(100.0 * matched as f64 / vocabulary_size.max(1) as f64)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gap_in_vocabulary_order() {
        let vocabulary = vocab(&["Programming", "SQL", "Figma"]);
        let user: HashSet<&str> = ["Programming"].into_iter().collect();

        let gap = analyze_skill_gap(&vocabulary, &user);
        assert_eq!(gap.matching_skills, vocab(&["Programming"]));
        assert_eq!(gap.missing_skills, vocab(&["SQL", "Figma"]));
        assert_eq!(gap.completeness_percent, 33.33);
    }

    #[test]
    fn test_missing_skills_capped_at_ten() {
        let vocabulary: Vec<String> = (0..50).map(|i| format!("skill-{i:02}")).collect();
        let user = HashSet::new();

        let gap = analyze_skill_gap(&vocabulary, &user);
        assert_eq!(gap.missing_skills.len(), MAX_MISSING_SKILLS);
        assert_eq!(gap.missing_skills[0], "skill-00");
        assert_eq!(gap.missing_skills[9], "skill-09");
        assert!(gap.matching_skills.is_empty());
        assert_eq!(gap.completeness_percent, 0.0);
    }

    #[test]
    fn test_user_skills_outside_vocabulary_ignored() {
        let vocabulary = vocab(&["SQL", "Excel"]);
        let user: HashSet<&str> = ["SQL", "Juggling"].into_iter().collect();

        let gap = analyze_skill_gap(&vocabulary, &user);
        assert_eq!(gap.matching_skills, vocab(&["SQL"]));
        assert_eq!(gap.completeness_percent, 50.0);
    }

    #[test]
    fn test_completeness_exact_values() {
        assert_eq!(completeness_percent(3, 10), 30.0);
        assert_eq!(completeness_percent(1, 3), 33.33);
        assert_eq!(completeness_percent(2, 3), 66.67);
        assert_eq!(completeness_percent(10, 10), 100.0);
    }

    #[test]
    fn test_completeness_empty_vocabulary_does_not_divide_by_zero() {
        assert_eq!(completeness_percent(0, 0), 0.0);
        let gap = analyze_skill_gap(&[], &HashSet::new());
        assert_eq!(gap.completeness_percent, 0.0);
        assert!(gap.missing_skills.is_empty());
    }

    #[test]
    fn test_completeness_monotonic_in_matches() {
        let mut previous = -1.0;
        for matched in 0..=17 {
            let pct = completeness_percent(matched, 17);
            assert!(pct > previous, "{pct} should exceed {previous}");
            previous = pct;
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(91.23456), 91.23);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0), 100.0);
    }
}
