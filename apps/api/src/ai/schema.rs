//! Input and output schemas of the three AI operations.
//!
//! Inputs are validated before dispatch (field-level messages); outputs are validated
//! after the model answers, and any violation rejects the whole response.

use serde::{Deserialize, Serialize};

/// A field-level validation failure, reported inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Checks a structured model response against its schema.
pub trait OutputSchema {
    fn check(&self) -> Result<(), String>;
}

fn require_min_len(errors: &mut Vec<FieldError>, field: &str, value: &str, min: usize, message: &str) {
    if value.trim().chars().count() < min {
        errors.push(FieldError::new(field, message));
    }
}

fn finalize(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;
pub const MIN_RESUME_CHARS: usize = 100;
pub const MIN_KEY_QUALIFICATIONS_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Enthusiastic,
    Formal,
    Creative,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterInput {
    pub job_description: String,
    /// Free-form resume text. Empty means "use the session's resume".
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub tone: Tone,
    pub key_qualifications: String,
}

impl CoverLetterInput {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_min_len(
            &mut errors,
            "jobDescription",
            &self.job_description,
            MIN_JOB_DESCRIPTION_CHARS,
            "Please provide a more detailed job description.",
        );
        require_min_len(
            &mut errors,
            "resume",
            &self.resume,
            MIN_RESUME_CHARS,
            "Please provide a more detailed resume.",
        );
        require_min_len(
            &mut errors,
            "keyQualifications",
            &self.key_qualifications,
            MIN_KEY_QUALIFICATIONS_CHARS,
            "Please list at least one key qualification.",
        );
        finalize(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub cover_letter: String,
}

impl OutputSchema for CoverLetter {
    fn check(&self) -> Result<(), String> {
        if self.cover_letter.trim().is_empty() {
            return Err("coverLetter is empty".to_string());
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume review
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    /// Empty means "use the session's resume".
    #[serde(default)]
    pub resume_text: String,
}

impl ReviewInput {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_min_len(
            &mut errors,
            "resumeText",
            &self.resume_text,
            MIN_RESUME_CHARS,
            "Please paste your full resume for an accurate review.",
        );
        finalize(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedScore {
    pub writing_style: f64,
    pub clarity: f64,
    pub impact: f64,
    pub structure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReview {
    pub score: f64,
    pub strengths: String,
    pub areas_for_improvement: String,
    pub actionable_suggestions: String,
    pub detailed_score: DetailedScore,
}

fn check_score(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be within 0..=100, got {value}"))
    }
}

impl OutputSchema for ResumeReview {
    fn check(&self) -> Result<(), String> {
        check_score("score", self.score)?;
        let d = &self.detailed_score;
        check_score("detailedScore.writingStyle", d.writing_style)?;
        check_score("detailedScore.clarity", d.clarity)?;
        check_score("detailedScore.impact", d.impact)?;
        check_score("detailedScore.structure", d.structure)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview preparation
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_TOPIC_CHARS: usize = 3;
pub const MIN_QA_PAIRS: usize = 5;
pub const MAX_QA_PAIRS: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewInput {
    pub topic: String,
    /// Only steers the model away from repeats; results are not deduplicated.
    #[serde(default)]
    pub existing_questions: Vec<String>,
}

impl InterviewInput {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_min_len(
            &mut errors,
            "topic",
            &self.topic,
            MIN_TOPIC_CHARS,
            "Please provide a topic for the interview questions.",
        );
        finalize(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestions {
    pub qa_pairs: Vec<QaPair>,
}

impl OutputSchema for InterviewQuestions {
    fn check(&self) -> Result<(), String> {
        let n = self.qa_pairs.len();
        if !(MIN_QA_PAIRS..=MAX_QA_PAIRS).contains(&n) {
            return Err(format!(
                "expected {MIN_QA_PAIRS}-{MAX_QA_PAIRS} qaPairs, got {n}"
            ));
        }
        if let Some(i) = self
            .qa_pairs
            .iter()
            .position(|p| p.question.trim().is_empty() || p.answer.trim().is_empty())
        {
            return Err(format!("qaPairs[{i}] has an empty question or answer"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(score: f64, impact: f64) -> ResumeReview {
        ResumeReview {
            score,
            strengths: "Clear layout".to_string(),
            areas_for_improvement: "Quantify results".to_string(),
            actionable_suggestions: "Add metrics".to_string(),
            detailed_score: DetailedScore {
                writing_style: 70.0,
                clarity: 80.0,
                impact,
                structure: 90.0,
            },
        }
    }

    fn pairs(n: usize) -> InterviewQuestions {
        InterviewQuestions {
            qa_pairs: (0..n)
                .map(|i| QaPair {
                    question: format!("Q{i}?"),
                    answer: format!("A{i}."),
                })
                .collect(),
        }
    }

    #[test]
    fn test_cover_letter_input_reports_every_short_field() {
        let input = CoverLetterInput {
            job_description: "short".to_string(),
            resume: "tiny".to_string(),
            tone: Tone::Formal,
            key_qualifications: "Rust".to_string(),
        };
        let errors = input.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["jobDescription", "resume", "keyQualifications"]);
    }

    #[test]
    fn test_cover_letter_input_accepts_boundary_lengths() {
        let input = CoverLetterInput {
            job_description: "j".repeat(MIN_JOB_DESCRIPTION_CHARS),
            resume: "r".repeat(MIN_RESUME_CHARS),
            tone: Tone::default(),
            key_qualifications: "k".repeat(MIN_KEY_QUALIFICATIONS_CHARS),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_tone_wire_names() {
        let tone: Tone = serde_json::from_str("\"Enthusiastic\"").unwrap();
        assert_eq!(tone, Tone::Enthusiastic);
        assert!(serde_json::from_str::<Tone>("\"Sarcastic\"").is_err());
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_review_input_counts_trimmed_chars() {
        let padded = ReviewInput {
            resume_text: format!("   {}   ", "x".repeat(99)),
        };
        assert!(padded.validate().is_err());
    }

    #[test]
    fn test_review_scores_must_be_in_range() {
        assert!(review(85.0, 60.0).check().is_ok());
        assert!(review(0.0, 100.0).check().is_ok());
        assert!(review(101.0, 60.0).check().is_err());
        assert!(review(50.0, -1.0).check().is_err());
        assert!(review(f64::NAN, 50.0).check().is_err());
    }

    #[test]
    fn test_review_rejects_simple_feedback_shape() {
        let simple = r#"{"score": 70, "feedback": "Looks fine"}"#;
        assert!(serde_json::from_str::<ResumeReview>(simple).is_err());
    }

    #[test]
    fn test_review_parses_camel_case_and_integer_scores() {
        let json = r#"{
            "score": 78,
            "strengths": "Concise",
            "areasForImprovement": "Impact",
            "actionableSuggestions": "Use numbers",
            "detailedScore": {"writingStyle": 80, "clarity": 75, "impact": 60, "structure": 90}
        }"#;
        let parsed: ResumeReview = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.score, 78.0);
        assert_eq!(parsed.detailed_score.structure, 90.0);
    }

    #[test]
    fn test_interview_pair_count_bounds() {
        assert!(pairs(4).check().is_err());
        assert!(pairs(5).check().is_ok());
        assert!(pairs(10).check().is_ok());
        assert!(pairs(11).check().is_err());
    }

    #[test]
    fn test_interview_rejects_blank_answers() {
        let mut out = pairs(6);
        out.qa_pairs[3].answer = "  ".to_string();
        assert!(out.check().unwrap_err().contains("qaPairs[3]"));
    }

    #[test]
    fn test_interview_topic_minimum() {
        let short = InterviewInput {
            topic: "AI".to_string(),
            existing_questions: vec![],
        };
        assert_eq!(short.validate().unwrap_err()[0].field, "topic");
    }
}
