use serde::{Deserialize, Serialize};

use crate::prediction::models::Assessment;

const MIN_SKILLS: usize = 3;
const MAX_SKILLS: usize = 20;
const MIN_INTERESTS: usize = 2;
const MAX_INTERESTS: usize = 10;
const MAX_FIELD_LEN: usize = 100;

/// Raw assessment as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentSubmission {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education: String,
    pub work_style: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validates a submission and normalizes it into an [`Assessment`].
///
/// Entries are trimmed and skills de-duplicated before the count limits are
/// checked. All violations are collected, not just the first.
pub fn validate_submission(submission: AssessmentSubmission) -> Result<Assessment, Vec<FieldError>> {
    let mut errors = Vec::new();

    let skills = clean_list(&submission.skills, "skills", &mut errors);
    let interests = clean_list(&submission.interests, "interests", &mut errors);
    let assessment = Assessment::new(
        skills,
        interests,
        clean_text(&submission.education, "education", &mut errors),
        clean_text(&submission.work_style, "work_style", &mut errors),
    );

    check_count(assessment.skills.len(), MIN_SKILLS, MAX_SKILLS, "skills", &mut errors);
    check_count(
        assessment.interests.len(),
        MIN_INTERESTS,
        MAX_INTERESTS,
        "interests",
        &mut errors,
    );

    if errors.is_empty() {
        Ok(assessment)
    } else {
        Err(errors)
    }
}

/// Joins field errors into one message for `AppError::Validation`.
pub fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn clean_list(items: &[String], field: &'static str, errors: &mut Vec<FieldError>) -> Vec<String> {
    let mut cleaned = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if item.is_empty() {
            errors.push(FieldError {
                field,
                message: "Entries must not be blank".to_string(),
            });
        } else if item.chars().count() > MAX_FIELD_LEN {
            errors.push(FieldError {
                field,
                message: format!("Entries must be at most {MAX_FIELD_LEN} characters"),
            });
        } else {
            cleaned.push(item.to_string());
        }
    }
    cleaned
}

fn clean_text(value: &str, field: &'static str, errors: &mut Vec<FieldError>) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError {
            field,
            message: "This field is required".to_string(),
        });
    } else if value.chars().count() > MAX_FIELD_LEN {
        errors.push(FieldError {
            field,
            message: format!("Must be at most {MAX_FIELD_LEN} characters"),
        });
    }
    value.to_string()
}

fn check_count(
    count: usize,
    min: usize,
    max: usize,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) {
    if count < min {
        errors.push(FieldError {
            field,
            message: format!("Please select at least {min} {field}"),
        });
    } else if count > max {
        errors.push(FieldError {
            field,
            message: format!("Maximum {max} {field} allowed"),
        });
    }
}
