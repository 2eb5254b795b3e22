//! The three AI operations: validate input, build the prompt, call the backend and
//! check the structured answer before anything is shown.

use thiserror::Error;
use tracing::{info, warn};

use super::prompts::*;
use super::schema::{
    CoverLetter, CoverLetterInput, InterviewInput, InterviewQuestions, OutputSchema,
    ResumeReview, ReviewInput,
};
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{complete_json, LlmError, ModelBackend};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model backend failed: {0}")]
    Backend(#[from] LlmError),

    #[error("model output did not match the expected schema: {0}")]
    Schema(String),
}

fn system_prompt(role: &str) -> String {
    format!("{role} {JSON_ONLY_SYSTEM}")
}

async fn run<T>(
    backend: &dyn ModelBackend,
    operation: &'static str,
    prompt: &str,
    role: &str,
) -> Result<T, GenerationError>
where
    T: serde::de::DeserializeOwned + OutputSchema,
{
    let output: T = complete_json(backend, prompt, &system_prompt(role))
        .await
        .map_err(|e| {
            warn!(operation, error = %e, "AI generation failed");
            e
        })?;
    output.check().map_err(|reason| {
        warn!(operation, %reason, "AI output rejected");
        GenerationError::Schema(reason)
    })?;
    info!(operation, "AI generation succeeded");
    Ok(output)
}

/// Caller is expected to have run [`CoverLetterInput::validate`].
pub async fn generate_cover_letter(
    backend: &dyn ModelBackend,
    input: &CoverLetterInput,
) -> Result<CoverLetter, GenerationError> {
    let tone = format!("{:?}", input.tone).to_lowercase();
    let prompt = fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("tone", tone.as_str()),
            ("key_qualifications", input.key_qualifications.as_str()),
            ("job_description", input.job_description.as_str()),
            ("resume", input.resume.as_str()),
        ],
    );
    run(backend, "cover_letter", &prompt, COVER_LETTER_SYSTEM).await
}

pub async fn review_resume(
    backend: &dyn ModelBackend,
    input: &ReviewInput,
) -> Result<ResumeReview, GenerationError> {
    let prompt = fill_template(REVIEW_PROMPT_TEMPLATE, &[("resume_text", input.resume_text.as_str())]);
    run(backend, "review", &prompt, REVIEW_SYSTEM).await
}

pub async fn prepare_for_interview(
    backend: &dyn ModelBackend,
    input: &InterviewInput,
) -> Result<InterviewQuestions, GenerationError> {
    let existing = if input.existing_questions.is_empty() {
        String::new()
    } else {
        let list: Vec<String> = input
            .existing_questions
            .iter()
            .map(|q| format!("- {q}"))
            .collect();
        format!("{EXISTING_QUESTIONS_PREAMBLE}{}\n", list.join("\n"))
    };
    let prompt = fill_template(
        INTERVIEW_PROMPT_TEMPLATE,
        &[
            ("topic", input.topic.as_str()),
            ("existing_questions", existing.as_str()),
        ],
    );
    run(backend, "interview_prep", &prompt, INTERVIEW_SYSTEM).await
}
