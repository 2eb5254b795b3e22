pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai;
use crate::export::handlers as export;
use crate::resume::handlers as editor;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions and the form editor
        .route("/api/v1/sessions", post(editor::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(editor::handle_get_session).delete(editor::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/actions",
            post(editor::handle_apply_action),
        )
        // Live preview
        .route("/api/v1/sessions/:id/preview", get(editor::handle_preview))
        .route(
            "/api/v1/sessions/:id/preview.html",
            get(editor::handle_preview_html),
        )
        // Export
        .route(
            "/api/v1/sessions/:id/export/resume",
            post(export::handle_export_resume),
        )
        .route(
            "/api/v1/sessions/:id/export/interview-prep",
            post(export::handle_export_interview_prep),
        )
        // AI gateway
        .route(
            "/api/v1/sessions/:id/cover-letter",
            post(ai::handle_cover_letter),
        )
        .route("/api/v1/sessions/:id/review", post(ai::handle_review))
        .route(
            "/api/v1/sessions/:id/review/upload",
            post(ai::handle_review_upload),
        )
        .route(
            "/api/v1/sessions/:id/interview-prep",
            post(ai::handle_interview_prep),
        )
        .route(
            "/api/v1/sessions/:id/interview-prep/more",
            post(ai::handle_interview_more),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tokio::sync::Notify;
    use tower::ServiceExt;

    use super::*;
    use crate::ai::gateway::tests::{qa_json, FakeBackend};
    use crate::config::Config;
    use crate::export::capture::{Raster, SurfaceCapture};
    use crate::export::surface::Surface;
    use crate::export::tests::FixedCapture;
    use crate::export::ExportError;
    use crate::llm_client::{LlmError, ModelBackend};
    use crate::session::SessionStore;

    const REVIEW_JSON: &str = r#"{"score":82,"strengths":"Clear impact","areasForImprovement":"Summary is generic",
        "actionableSuggestions":"Quantify the API work",
        "detailedScore":{"writingStyle":80,"clarity":85,"impact":75,"structure":90}}"#;

    fn config() -> Config {
        Config {
            anthropic_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            session_ttl_secs: 3600,
            llm_max_attempts: 1,
            capture_command: "wkhtmltoimage".to_string(),
            capture_scale: 1,
        }
    }

    fn app_with(llm: Arc<dyn ModelBackend>, capture: Arc<dyn SurfaceCapture>) -> (Router, AppState) {
        let state = AppState {
            sessions: SessionStore::new(),
            llm,
            capture,
            config: config(),
        };
        (build_router(state.clone()), state)
    }

    fn app(answer: &str) -> (Router, AppState) {
        app_with(
            Arc::new(FakeBackend::answering(answer)),
            Arc::new(FixedCapture {
                width: 100,
                height: 300,
            }),
        )
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_session(app: &Router) -> String {
        let response = send(app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["sessionId"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app("{}");
        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "careerdesk-api");
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;

        let response = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["state"]["template"], "default");
        assert_eq!(body["state"]["resume"]["experience"][0]["id"], "exp1");

        let response = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_edit_then_preview_reflects_change() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;
        let action = json!({
            "type": "update_entry_field",
            "section": "experience",
            "id": "exp1",
            "field": "description",
            "value": "- Did X\n- Did Y"
        });
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/actions"),
            Some(action),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["state"]["resume"]["experience"][0]["description"], "- Did X\n- Did Y");

        let response = send(
            &app,
            "GET",
            &format!("/api/v1/sessions/{id}/preview.html?template=classic"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<li>Did X</li>"));
        assert!(html.contains("<li>Did Y</li>"));
    }

    #[tokio::test]
    async fn test_template_switch_preserves_resume() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;
        let before = json_body(send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await).await;
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/actions"),
            Some(json!({"type": "select_template", "template": "modern"})),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["state"]["template"], "modern");
        assert_eq!(body["state"]["resume"], before["state"]["resume"]);
        assert_eq!(body["document"]["layout"], "sidebar");
    }

    #[tokio::test]
    async fn test_actions_after_template_switch_render_with_the_new_layout() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/actions");
        send(&app, "POST", &uri, Some(json!({"type": "select_template", "template": "classic"}))).await;

        let response = send(&app, "POST", &uri, Some(json!({"type": "add_entry", "section": "skills"}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["state"]["template"], "classic");
        assert_eq!(body["document"]["layout"], "centered");

        let skill_ids: Vec<&Value> = body["state"]["resume"]["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|skill| &skill["id"])
            .collect();
        let skills = body["document"]["columns"][0]["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .find(|block| block["title"] == "Skills")
            .unwrap();
        let source_ids: Vec<&Value> = skills["body"]["sources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|source| &source["id"])
            .collect();
        assert_eq!(skill_ids.len(), 7);
        assert_eq!(source_ids, skill_ids);
    }

    #[tokio::test]
    async fn test_unknown_template_is_rejected() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;
        let response = send(
            &app,
            "GET",
            &format!("/api/v1/sessions/{id}/preview?template=fancy"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_removing_last_entry_requires_force() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;
        let action = json!({"type": "remove_entry", "section": "education", "id": "edu1"});
        let uri = format!("/api/v1/sessions/{id}/actions");
        let response = send(&app, "POST", &uri, Some(action.clone())).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = send(&app, "POST", &format!("{uri}?force=true"), Some(action)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["state"]["resume"]["education"], json!([]));
    }

    #[tokio::test]
    async fn test_review_defaults_to_session_resume() {
        let backend = Arc::new(FakeBackend::answering(REVIEW_JSON));
        let (app, state) = app_with(
            backend.clone(),
            Arc::new(FixedCapture {
                width: 10,
                height: 10,
            }),
        );
        let id = create_session(&app).await;
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/review"),
            Some(json!({})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["score"], 82.0);
        assert_eq!(body["detailedScore"]["impact"], 75.0);
        assert!(backend.last_prompt().contains("Jane Doe"));

        let uuid = id.parse().unwrap();
        let view = state.sessions.view(uuid).await.unwrap();
        assert_eq!(
            serde_json::to_value(&view.review).unwrap()["status"],
            "succeeded"
        );
    }

    #[tokio::test]
    async fn test_short_cover_letter_input_never_reaches_backend() {
        let backend = Arc::new(FakeBackend::answering(r#"{"coverLetter":"x"}"#));
        let (app, _) = app_with(
            backend.clone(),
            Arc::new(FixedCapture {
                width: 10,
                height: 10,
            }),
        );
        let id = create_session(&app).await;
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/cover-letter"),
            Some(json!({"jobDescription": "too short", "keyQualifications": "Rust"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|f| f["field"].as_str())
            .collect();
        assert_eq!(fields, vec!["jobDescription", "keyQualifications"]);
        assert!(backend.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_clears_loading_state() {
        let (app, state) = app_with(
            Arc::new(FakeBackend::failing(500)),
            Arc::new(FixedCapture {
                width: 10,
                height: 10,
            }),
        );
        let id = create_session(&app).await;
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/interview-prep"),
            Some(json!({"topic": "System Design"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let view = state.sessions.view(id.parse().unwrap()).await.unwrap();
        assert_eq!(
            serde_json::to_value(&view.interview_prep).unwrap()["status"],
            "failed"
        );
    }

    #[tokio::test]
    async fn test_interview_more_appends_to_sheet() {
        let (app, _) = app(&qa_json(5, "System Design"));
        let id = create_session(&app).await;
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/interview-prep"),
            Some(json!({"topic": "System Design"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["sheet"]["qaPairs"].as_array().unwrap().len(), 5);

        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/interview-prep/more"),
            Some(json!({})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["added"].as_array().unwrap().len(), 5);
        assert_eq!(body["sheet"]["topic"], "System Design");
        assert_eq!(body["sheet"]["qaPairs"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_export_resume_returns_paginated_pdf() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/export/resume"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[tokio::test]
    async fn test_export_interview_prep_without_questions_is_not_found() {
        let (app, _) = app("{}");
        let id = create_session(&app).await;
        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/export/interview-prep"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "SURFACE_NOT_FOUND");
    }

    /// Blocks every capture until released, so an export can be held in flight.
    struct GatedCapture {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl SurfaceCapture for GatedCapture {
        async fn capture(&self, _surface: &Surface) -> Result<Raster, ExportError> {
            self.entered.notify_one();
            self.release.notified().await;
            Raster::new(4, 4, vec![0; 48])
        }
    }

    #[tokio::test]
    async fn test_second_export_while_busy_is_rejected() {
        let capture = Arc::new(GatedCapture {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let (app, state) = app_with(Arc::new(FakeBackend::answering("{}")), capture.clone());
        let id = create_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/export/resume");

        let first = tokio::spawn({
            let app = app.clone();
            let uri = uri.clone();
            async move { send(&app, "POST", &uri, None).await }
        });
        capture.entered.notified().await;

        let view = state.sessions.view(id.parse().unwrap()).await.unwrap();
        assert!(view.exporting.resume);
        let second = send(&app, "POST", &uri, None).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);

        capture.release.notify_one();
        let first = first.await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let bytes = to_bytes(first.into_body(), usize::MAX).await.unwrap();
        assert_eq!(lopdf::Document::load_mem(&bytes).unwrap().get_pages().len(), 1);

        let view = state.sessions.view(id.parse().unwrap()).await.unwrap();
        assert!(!view.exporting.resume);
    }

    /// Answers the first call only after the second one has finished.
    struct SlowFirstBackend {
        calls: std::sync::atomic::AtomicUsize,
        second_done: Notify,
    }

    #[async_trait]
    impl ModelBackend for SlowFirstBackend {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call == 0 {
                self.second_done.notified().await;
                Ok(qa_json(5, "old"))
            } else {
                Ok(qa_json(6, "new"))
            }
        }
    }

    #[tokio::test]
    async fn test_stale_ai_response_is_superseded() {
        let backend = Arc::new(SlowFirstBackend {
            calls: std::sync::atomic::AtomicUsize::new(0),
            second_done: Notify::new(),
        });
        let (app, state) = app_with(
            backend.clone(),
            Arc::new(FixedCapture {
                width: 10,
                height: 10,
            }),
        );
        let id = create_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/interview-prep");

        let first = tokio::spawn({
            let app = app.clone();
            let uri = uri.clone();
            async move { send(&app, "POST", &uri, Some(json!({"topic": "Rust"}))).await }
        });
        while backend.calls.load(std::sync::atomic::Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let second = send(&app, "POST", &uri, Some(json!({"topic": "Rust"}))).await;
        assert_eq!(second.status(), StatusCode::OK);
        backend.second_done.notify_one();

        let first = first.await.unwrap();
        assert_eq!(first.status(), StatusCode::CONFLICT);

        let view = state.sessions.view(id.parse().unwrap()).await.unwrap();
        assert_eq!(view.interview_sheet.qa_pairs.len(), 6);
        assert!(view.interview_sheet.qa_pairs[0].question.starts_with("new"));
    }
}
