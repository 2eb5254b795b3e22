//! Axum route handlers for sessions, the form editor and the live preview.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{self, html, Document, TemplateKind};
use crate::resume::{EditorAction, EditorState};
use crate::session::SessionView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    #[serde(flatten)]
    pub session: SessionView,
    pub expires_in_secs: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActionQuery {
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub state: EditorState,
    pub document: Document,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
}

pub(crate) fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session,
            expires_in_secs: state.config.session_ttl_secs,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .view(id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// POST /api/v1/sessions/:id/actions
///
/// Applies one form edit and returns the new state with its re-rendered preview.
/// Removing the last entry of a section needs `?force=true`.
pub async fn handle_apply_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActionQuery>,
    Json(action): Json<EditorAction>,
) -> Result<Json<ActionResponse>, AppError> {
    let next = state
        .sessions
        .with_session(id, |session| {
            if !query.force && session.editor.removes_last_entry(&action) {
                return Err(AppError::Conflict(
                    "Refusing to remove the last entry of a section; pass force=true".to_string(),
                ));
            }
            session.editor = session.editor.apply(&action);
            Ok(session.editor.clone())
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    if let EditorAction::SelectTemplate { template } = &action {
        info!(session_id = %id, template = template.as_str(), "template selected");
    }

    let document = render::render(&next.resume, next.template);
    debug!(
        session_id = %id,
        template = next.template.as_str(),
        columns = document.columns.len(),
        "preview re-rendered"
    );
    Ok(Json(ActionResponse {
        state: next,
        document,
    }))
}

async fn preview_document(
    state: &AppState,
    id: Uuid,
    query: &PreviewQuery,
) -> Result<Document, AppError> {
    let editor = state
        .sessions
        .with_session(id, |session| session.editor.clone())
        .await
        .ok_or_else(|| session_not_found(id))?;
    let template = match query.template.as_deref() {
        Some(name) => name.parse::<TemplateKind>().map_err(AppError::Validation)?,
        None => editor.template,
    };
    Ok(render::render(&editor.resume, template))
}

/// GET /api/v1/sessions/:id/preview?template=
///
/// `template` previews another layout without changing the session's selection.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<Document>, AppError> {
    preview_document(&state, id, &query).await.map(Json)
}

/// GET /api/v1/sessions/:id/preview.html?template=
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let document = preview_document(&state, id, &query).await?;
    let page = html::to_html(&document).map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(page))
}
