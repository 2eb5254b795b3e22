use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use super::lifecycle::{BusyFlag, RequestSlot, RequestState};
use crate::ai::schema::{CoverLetter, InterviewQuestions, QaPair, ResumeReview};
use crate::resume::EditorState;

/// The running list of interview questions shown on the prep page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSheet {
    pub topic: String,
    pub qa_pairs: Vec<QaPair>,
}

impl InterviewSheet {
    pub fn questions(&self) -> Vec<String> {
        self.qa_pairs.iter().map(|p| p.question.clone()).collect()
    }
}

/// One editing session: the authoritative editor state plus the lifecycle of every
/// suspending operation started from it.
#[derive(Debug)]
pub struct Session {
    pub editor: EditorState,
    pub created_at: DateTime<Utc>,
    last_active: Instant,
    pub cover_letter: RequestSlot<CoverLetter>,
    pub review: RequestSlot<ResumeReview>,
    pub interview: RequestSlot<InterviewQuestions>,
    pub interview_sheet: InterviewSheet,
    pub resume_export: BusyFlag,
    pub interview_export: BusyFlag,
}

impl Session {
    fn new() -> Self {
        Self {
            editor: EditorState::default(),
            created_at: Utc::now(),
            last_active: Instant::now(),
            cover_letter: RequestSlot::default(),
            review: RequestSlot::default(),
            interview: RequestSlot::default(),
            interview_sheet: InterviewSheet::default(),
            resume_export: BusyFlag::default(),
            interview_export: BusyFlag::default(),
        }
    }

    pub fn cover_letter_slot(&mut self) -> &mut RequestSlot<CoverLetter> {
        &mut self.cover_letter
    }

    pub fn review_slot(&mut self) -> &mut RequestSlot<ResumeReview> {
        &mut self.review
    }

    pub fn interview_slot(&mut self) -> &mut RequestSlot<InterviewQuestions> {
        &mut self.interview
    }

    pub fn view(&self, id: Uuid) -> SessionView {
        SessionView {
            session_id: id,
            created_at: self.created_at,
            state: self.editor.clone(),
            cover_letter: self.cover_letter.state().clone(),
            review: self.review.state().clone(),
            interview_prep: self.interview.state().clone(),
            interview_sheet: self.interview_sheet.clone(),
            exporting: ExportFlags {
                resume: self.resume_export.is_busy(),
                interview_prep: self.interview_export.is_busy(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFlags {
    pub resume: bool,
    pub interview_prep: bool,
}

/// Serializable snapshot of a [`Session`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: EditorState,
    pub cover_letter: RequestState<CoverLetter>,
    pub review: RequestState<ResumeReview>,
    pub interview_prep: RequestState<InterviewQuestions>,
    pub interview_sheet: InterviewSheet,
    pub exporting: ExportFlags,
}

/// In-memory session map shared by all handlers. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session holding the seed resume and the default template.
    pub async fn create(&self) -> SessionView {
        let id = Uuid::new_v4();
        let session = Session::new();
        let view = session.view(id);
        self.sessions.write().await.insert(id, session);
        info!(session_id = %id, "session created");
        view
    }

    pub async fn view(&self, id: Uuid) -> Option<SessionView> {
        self.sessions.read().await.get(&id).map(|s| s.view(id))
    }

    /// Runs `f` against the session under the write lock and marks it active.
    pub async fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_active = Instant::now();
        Some(f(session))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "session discarded");
        }
        removed
    }

    /// Drops sessions idle for longer than `ttl`. Returns how many were dropped.
    pub async fn reap_idle(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now.duration_since(s.last_active) <= ttl);
        let reaped = before - sessions.len();
        if reaped > 0 {
            info!(reaped, remaining = sessions.len(), "idle sessions reaped");
        } else {
            debug!(remaining = sessions.len(), "no idle sessions");
        }
        reaped
    }
}

/// Periodically reaps idle sessions until the runtime shuts down.
pub fn spawn_reaper(store: SessionStore, ttl: Duration, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            store.reap_idle(ttl).await;
        }
    })
}
