//! Axum route handlers for PDF export.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;
use uuid::Uuid;

use super::surface::resolve;
use super::{export_surface, DocumentKind};
use crate::errors::AppError;
use crate::resume::handlers::session_not_found;
use crate::state::AppState;

/// POST /api/v1/sessions/:id/export/resume
pub async fn handle_export_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    run_export(&state, id, DocumentKind::Resume).await
}

/// POST /api/v1/sessions/:id/export/interview-prep
pub async fn handle_export_interview_prep(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    run_export(&state, id, DocumentKind::InterviewPrep).await
}

/// Snapshots the surface under the busy flag, then captures outside the session lock.
async fn run_export(state: &AppState, id: Uuid, kind: DocumentKind) -> Result<Response, AppError> {
    let (_guard, surface) = state
        .sessions
        .with_session(id, |session| {
            let flag = match kind {
                DocumentKind::Resume => &session.resume_export,
                DocumentKind::InterviewPrep => &session.interview_export,
            };
            let guard = flag.try_acquire().ok_or_else(|| {
                AppError::Conflict(format!("{} export already in progress", kind.filename()))
            })?;
            let surface = resolve(session, kind.surface())?;
            Ok::<_, AppError>((guard, surface))
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    let bytes = export_surface(state.capture.as_ref(), &surface).await?;
    info!(session_id = %id, file = kind.filename(), "export delivered");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", kind.filename()),
            ),
        ],
        bytes,
    )
        .into_response())
}
