//! Axum route handlers for the AI gateway.
//!
//! Each call runs through the session's request slot for that operation: a newer
//! dispatch supersedes an older one, and only the newest result is recorded.

use std::future::Future;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::gateway::{
    generate_cover_letter, prepare_for_interview, review_resume, GenerationError,
};
use super::schema::{
    CoverLetter, CoverLetterInput, InterviewInput, InterviewQuestions, QaPair, ResumeReview,
    ReviewInput,
};
use crate::errors::AppError;
use crate::resume::handlers::session_not_found;
use crate::session::store::InterviewSheet;
use crate::session::{Landing, RequestSlot, Session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct MoreQuestionsRequest {
    /// Falls back to the topic of the current sheet.
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrepResponse {
    pub added: Vec<QaPair>,
    pub sheet: InterviewSheet,
}

// ────────────────────────────────────────────────────────────────────────────
// Lifecycle plumbing
// ────────────────────────────────────────────────────────────────────────────

/// Runs `call` under a fresh ticket of `slot` and lands its outcome.
///
/// `on_landed` runs under the same lock as the landing, only for a current success.
async fn dispatch<T, R>(
    state: &AppState,
    id: Uuid,
    slot: fn(&mut Session) -> &mut RequestSlot<T>,
    call: impl Future<Output = Result<T, GenerationError>>,
    on_landed: impl FnOnce(&mut Session, &T) -> R,
) -> Result<(T, R), AppError>
where
    T: Clone,
{
    let ticket = state
        .sessions
        .with_session(id, |session| {
            let slot = slot(session);
            if slot.is_in_flight() {
                debug!(session_id = %id, "superseding in-flight request");
            }
            slot.begin()
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    let outcome = call.await;

    state
        .sessions
        .with_session(id, move |session: &mut Session| -> Result<(T, R), AppError> {
            let recorded = outcome.as_ref().map(T::clone).map_err(ToString::to_string);
            match slot(session).complete(ticket, recorded) {
                Landing::Superseded => {
                    warn!(session_id = %id, ?ticket, "stale AI response ignored");
                    Err(AppError::Conflict(
                        "Superseded by a newer request".to_string(),
                    ))
                }
                Landing::Landed => {
                    let value = outcome?;
                    let extra = on_landed(session, &value);
                    Ok((value, extra))
                }
            }
        })
        .await
        .ok_or_else(|| session_not_found(id))?
}

async fn session_resume_text(state: &AppState, id: Uuid) -> Result<String, AppError> {
    state
        .sessions
        .with_session(id, |session| session.editor.resume.to_plain_text())
        .await
        .ok_or_else(|| session_not_found(id))
}

fn ignore<T>(_: &mut Session, _: &T) {}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/cover-letter
///
/// An empty `resume` uses the session's current resume.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut input): Json<CoverLetterInput>,
) -> Result<Json<CoverLetter>, AppError> {
    let resume_text = session_resume_text(&state, id).await?;
    if input.resume.trim().is_empty() {
        input.resume = resume_text;
    }
    input.validate().map_err(AppError::InvalidInput)?;

    let call = generate_cover_letter(state.llm.as_ref(), &input);
    let (letter, ()) = dispatch(&state, id, Session::cover_letter_slot, call, ignore).await?;
    Ok(Json(letter))
}

/// POST /api/v1/sessions/:id/review
///
/// An empty `resumeText` reviews the session's current resume.
pub async fn handle_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut input): Json<ReviewInput>,
) -> Result<Json<ResumeReview>, AppError> {
    let resume_text = session_resume_text(&state, id).await?;
    if input.resume_text.trim().is_empty() {
        input.resume_text = resume_text;
    }
    run_review(&state, id, input).await
}

/// POST /api/v1/sessions/:id/review/upload
///
/// Multipart form with a `file` field holding a PDF resume.
pub async fn handle_review_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ResumeReview>, AppError> {
    let mut pdf: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            pdf = Some(bytes);
            break;
        }
    }
    let pdf = pdf.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let resume_text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Validation(format!("Could not read text from PDF: {e}")))?;

    run_review(&state, id, ReviewInput { resume_text }).await
}

async fn run_review(
    state: &AppState,
    id: Uuid,
    input: ReviewInput,
) -> Result<Json<ResumeReview>, AppError> {
    input.validate().map_err(AppError::InvalidInput)?;
    let call = review_resume(state.llm.as_ref(), &input);
    let (review, ()) = dispatch(state, id, Session::review_slot, call, ignore).await?;
    Ok(Json(review))
}

/// POST /api/v1/sessions/:id/interview-prep
///
/// Starts a new question sheet for the topic, replacing the previous one.
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<InterviewInput>,
) -> Result<Json<InterviewPrepResponse>, AppError> {
    input.validate().map_err(AppError::InvalidInput)?;
    let topic = input.topic.trim().to_string();
    let call = prepare_for_interview(state.llm.as_ref(), &input);
    let (questions, sheet) = dispatch(
        &state,
        id,
        Session::interview_slot,
        call,
        |session, out: &InterviewQuestions| {
            session.interview_sheet = InterviewSheet {
                topic,
                qa_pairs: out.qa_pairs.clone(),
            };
            session.interview_sheet.clone()
        },
    )
    .await?;
    Ok(Json(InterviewPrepResponse {
        added: questions.qa_pairs,
        sheet,
    }))
}

/// POST /api/v1/sessions/:id/interview-prep/more
///
/// Asks for questions not already on the sheet and appends them. Results are not
/// deduplicated.
pub async fn handle_interview_more(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MoreQuestionsRequest>,
) -> Result<Json<InterviewPrepResponse>, AppError> {
    let (sheet_topic, existing_questions) = state
        .sessions
        .with_session(id, |session| {
            (
                session.interview_sheet.topic.clone(),
                session.interview_sheet.questions(),
            )
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    let input = InterviewInput {
        topic: request.topic.unwrap_or(sheet_topic),
        existing_questions,
    };
    input.validate().map_err(AppError::InvalidInput)?;

    let call = prepare_for_interview(state.llm.as_ref(), &input);
    let (questions, sheet) = dispatch(
        &state,
        id,
        Session::interview_slot,
        call,
        |session, out: &InterviewQuestions| {
            let sheet = &mut session.interview_sheet;
            if sheet.topic.is_empty() {
                sheet.topic = input.topic.trim().to_string();
            }
            sheet.qa_pairs.extend(out.qa_pairs.iter().cloned());
            sheet.clone()
        },
    )
    .await?;
    Ok(Json(InterviewPrepResponse {
        added: questions.qa_pairs,
        sheet,
    }))
}
