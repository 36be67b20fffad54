//! Shared fixtures for pipeline tests.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::prediction::artifacts::{
    ArtifactSet, EDUCATION_ENCODER, INTERESTS_LIST, INTEREST_ENCODER, LABEL_ENCODER, SKILLS_LIST,
    TRAINED_MODEL, WORK_STYLE_ENCODER,
};
use crate::prediction::classifier::{DecisionTree, TrainedModel, TreeNode};
use crate::prediction::encoder::LabelEncoder;
use crate::prediction::models::Assessment;

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Three careers over the vocabulary `[Programming, SQL, Figma]`.
///
/// Feature layout: `[education, work_style, interest, Programming, SQL, Figma]`.
/// - Figma → UX/UI Designer 0.9
/// - Programming (no Figma) → Software Developer 0.8
/// - neither → Data Scientist 0.6, then a 0.2 / 0.2 tie
pub fn sample_artifacts() -> ArtifactSet {
    let model = TrainedModel::DecisionTree(DecisionTree {
        n_features: 6,
        n_classes: 3,
        nodes: vec![
            TreeNode::Split {
                feature: 5,
                threshold: 0.5,
                left: 1,
                right: 4,
            },
            TreeNode::Split {
                feature: 3,
                threshold: 0.5,
                left: 2,
                right: 3,
            },
            TreeNode::Leaf {
                counts: vec![6.0, 2.0, 2.0],
            },
            TreeNode::Leaf {
                counts: vec![1.0, 8.0, 1.0],
            },
            TreeNode::Leaf {
                counts: vec![0.0, 1.0, 9.0],
            },
        ],
    });

    let interests = strings(&["Technology & Innovation", "Arts & Design", "Analytics"]);

    ArtifactSet {
        model,
        label_encoder: LabelEncoder::fit(["Data Scientist", "Software Developer", "UX/UI Designer"]),
        education_encoder: LabelEncoder::fit(["Bachelor's Degree", "Master's Degree", "PhD"]),
        work_style_encoder: LabelEncoder::fit(["Hybrid", "Office", "Remote"]),
        skill_vocabulary: strings(&["Programming", "SQL", "Figma"]),
        interest_encoder: Some(LabelEncoder::fit(interests.iter().cloned())),
        interest_vocabulary: Some(interests),
    }
}

pub fn write_artifacts(dir: &Path, set: &ArtifactSet) {
    write_json(dir, TRAINED_MODEL, &set.model);
    write_json(dir, LABEL_ENCODER, &set.label_encoder);
    write_json(dir, EDUCATION_ENCODER, &set.education_encoder);
    write_json(dir, WORK_STYLE_ENCODER, &set.work_style_encoder);
    write_json(dir, SKILLS_LIST, &set.skill_vocabulary);
    if let Some(interests) = &set.interest_vocabulary {
        write_json(dir, INTERESTS_LIST, interests);
    }
    if let Some(encoder) = &set.interest_encoder {
        write_json(dir, INTEREST_ENCODER, encoder);
    }
}

fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) {
    let bytes = serde_json::to_vec_pretty(value).unwrap();
    fs::write(dir.join(name), bytes).unwrap();
}

pub fn assessment(skills: &[&str]) -> Assessment {
    Assessment::new(
        strings(skills),
        strings(&["Technology & Innovation", "Analytics"]),
        "Bachelor's Degree",
        "Remote",
    )
}
