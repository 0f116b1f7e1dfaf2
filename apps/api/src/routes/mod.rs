pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::parsing::handlers as parse_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Parsing
        .route(
            "/api/v1/resumes",
            post(parse_handlers::handle_upload)
                .get(parse_handlers::handle_list)
                .delete(parse_handlers::handle_clear),
        )
        .route("/api/v1/resumes/text", post(parse_handlers::handle_parse_text))
        // Search & analytics
        .route("/api/v1/resumes/search", get(search_handlers::handle_search))
        .route(
            "/api/v1/resumes/analytics",
            get(search_handlers::handle_analytics),
        )
        // Export
        .route(
            "/api/v1/resumes/export/csv",
            post(export_handlers::handle_export_csv),
        )
        .route(
            "/api/v1/resumes/export/json",
            post(export_handlers::handle_export_json),
        )
        .route(
            "/api/v1/resumes/search/export",
            post(export_handlers::handle_export_search),
        )
        .route(
            "/api/v1/resumes/analytics/export",
            post(export_handlers::handle_export_analytics),
        )
        .route("/api/v1/resumes/:id", get(parse_handlers::handle_get))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_state(export_dir: &std::path::Path) -> AppState {
        AppState::new(Config {
            port: 0,
            rust_log: "info".into(),
            export_dir: export_dir.to_path_buf(),
            max_files: 2,
            max_upload_mb: 1,
            phone_pattern: None,
        })
        .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    async fn seed(state: &AppState) {
        let app = build_router(state.clone());
        for (name, text) in [
            ("jane.pdf", "jane@x.io\nSkills: Python, SQL, Git\nEducation: BSc"),
            ("raj.pdf", "Python developer\nWorked at Acme"),
            ("bad.pdf", "PDF error: unexpected EOF"),
        ] {
            let (status, _) = send(
                app.clone(),
                post_json("/api/v1/resumes/text", json!({"file_name": name, "raw_text": text})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(build_router(test_state(dir.path())), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["parsed_resumes"], 0);
    }

    #[tokio::test]
    async fn test_parse_text_builds_record() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let (status, body) = send(
            build_router(state.clone()),
            post_json(
                "/api/v1/resumes/text",
                json!({
                    "file_name": "jane.pdf",
                    "raw_text": "Contact: jane.doe@example.com, +91 9876543210.\nSkills: Python, SQL.\nEducation: B.Tech CS.\nExperience: Intern at Acme."
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["successful"], 1);
        let record = &body["records"][0];
        assert_eq!(record["contact"]["email"], "jane.doe@example.com");
        assert_eq!(record["skills"], json!(["python", "sql"]));
        assert_eq!(record["summary"]["education_lines"], 1);
        assert_eq!(record["summary"]["experience_lines"], 1);
        assert_eq!(state.store.len().await, 1);
    }

    #[tokio::test]
    async fn test_parse_text_requires_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            build_router(test_state(dir.path())),
            post_json("/api/v1/resumes/text", json!({"file_name": " ", "raw_text": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_ranks_and_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed(&state).await;

        let (status, body) = send(
            build_router(state.clone()),
            get("/api/v1/resumes/search?skill=PY"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], 2);
        assert_eq!(body["matches"][0]["file_info"]["name"], "jane.pdf");
        assert_eq!(body["matches"][0]["matched_skills"][0]["match_type"], "partial");

        let (_, body) = send(
            build_router(state),
            get("/api/v1/resumes/search?skill=py&partial_match=false"),
        )
        .await;
        assert_eq!(body["found"], 0);
    }

    #[tokio::test]
    async fn test_search_empty_skill() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed(&state).await;
        let (status, body) = send(build_router(state), get("/api/v1/resumes/search")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], 0);
    }

    #[tokio::test]
    async fn test_analytics() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed(&state).await;
        let (_, body) = send(build_router(state), get("/api/v1/resumes/analytics")).await;
        assert_eq!(body["total"], 3);
        assert_eq!(body["successful"], 2);
        assert_eq!(body["total_skills"], 4);
    }

    #[tokio::test]
    async fn test_get_list_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed(&state).await;

        let (_, list) = send(build_router(state.clone()), get("/api/v1/resumes")).await;
        assert_eq!(list.as_array().unwrap().len(), 3);
        assert_eq!(list[2]["error"], "PDF error: unexpected EOF");

        let id = list[0]["id"].as_str().unwrap().to_string();
        let (status, one) = send(
            build_router(state.clone()),
            get(&format!("/api/v1/resumes/{id}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(one["file_info"]["name"], "jane.pdf");

        let (status, _) = send(
            build_router(state.clone()),
            get(&format!("/api/v1/resumes/{}", uuid::Uuid::new_v4())),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, cleared) = send(
            build_router(state.clone()),
            Request::delete("/api/v1/resumes").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(cleared["removed"], 3);
        assert_eq!(state.store.len().await, 0);
    }

    #[tokio::test]
    async fn test_exports() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let (status, body) = send(
            build_router(state.clone()),
            Request::post("/api/v1/resumes/export/csv").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "NOTHING_TO_EXPORT");

        seed(&state).await;

        let (status, body) = send(
            build_router(state.clone()),
            Request::post("/api/v1/resumes/export/csv").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exported"], 2);
        assert_eq!(body["failed"], 1);

        let (_, body) = send(
            build_router(state.clone()),
            Request::post("/api/v1/resumes/export/json").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(body["exported"], 3);

        let (_, body) = send(
            build_router(state.clone()),
            Request::post("/api/v1/resumes/search/export?skill=sql")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(body["exported"], 1);

        let (status, body) = send(
            build_router(state),
            Request::post("/api/v1/resumes/analytics/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exported"], 2);
        assert_eq!(body["failed"], 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 4);
    }

    #[tokio::test]
    async fn test_upload_multipart() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let boundary = "XBOUNDARY";
        let mut body = String::new();
        for name in ["a.txt", "b.pdf", "c.docx"] {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\nContent-Type: application/octet-stream\r\n\r\nnot a real document\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        let request = Request::post("/api/v1/resumes")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, body) = send(build_router(state.clone()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["skipped"], 1);
        assert_eq!(body["successful"], 0);
        assert_eq!(body["records"][0]["error"], "Unsupported file type!");
        assert!(body["records"][1]["error"]
            .as_str()
            .unwrap()
            .starts_with("PDF error:"));
        assert_eq!(state.store.len().await, 2);
    }

    #[tokio::test]
    async fn test_upload_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );
        let request = Request::post("/api/v1/resumes")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, _) = send(build_router(test_state(dir.path())), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
