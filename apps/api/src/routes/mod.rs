pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analyses::handlers as analyses;
use crate::errors::AppError;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless scoring
        .route("/api/v1/ats/analyze", post(scoring::handle_analyze))
        // Recorded analyses (quota-limited)
        .route(
            "/api/v1/resumes/:id/ats-analyses",
            get(analyses::handle_analysis_history).post(analyses::handle_record_analysis),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;

    fn app(max_attempts: u32) -> Router {
        let config = Config {
            max_ats_attempts: max_attempts,
            ..Config::default()
        };
        build_router(AppState::new(&config))
    }

    fn contact_only_body() -> Value {
        json!({
            "content": {
                "personalInfo": {
                    "firstName": "",
                    "lastName": "",
                    "email": "jane@example.com",
                    "phone": "555-0100",
                    "location": ""
                },
                "summary": "",
                "experience": [],
                "education": [],
                "skills": []
            }
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(5), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "ats-api");
    }

    #[tokio::test]
    async fn test_analyze_returns_feedback() {
        let (status, body) =
            send(app(5), "POST", "/api/v1/ats/analyze", Some(contact_only_body())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall"]["score"], 31);
        assert_eq!(body["sections"]["format"]["score"], 35);
        assert_eq!(body["sections"]["content"]["score"], 55);
        assert_eq!(body["sections"]["length"]["wordCount"], 0);
    }

    #[tokio::test]
    async fn test_analyze_with_job_description() {
        let mut body = contact_only_body();
        body["content"]["summary"] = json!("Rust engineer building axum services");
        body["job_description"] = json!("Rust rust axum tokio");

        let (status, feedback) = send(app(5), "POST", "/api/v1/ats/analyze", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(feedback["sections"]["keywords"]["found"], json!(["rust", "axum"]));
        assert_eq!(feedback["sections"]["keywords"]["missing"], json!(["tokio"]));
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() {
        let (status, body) = send(
            app(5),
            "POST",
            "/api/v1/ats/analyze",
            Some(json!({ "content": { "experience": "not a list" } })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_record_and_list_analyses() {
        let app = app(5);
        let uri = format!("/api/v1/resumes/{}/ats-analyses", Uuid::new_v4());

        let (status, created) =
            send(app.clone(), "POST", &uri, Some(contact_only_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["score"], 31);

        let (status, history) = send(app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(history["attempts_used"], 1);
        assert_eq!(history["attempts_remaining"], 4);
        assert_eq!(history["latest_score"], 31);
        assert_eq!(history["analyses"].as_array().unwrap().len(), 1);
        assert_eq!(history["analyses"][0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_quota_rejects_extra_attempts() {
        let app = app(1);
        let uri = format!("/api/v1/resumes/{}/ats-analyses", Uuid::new_v4());

        let (status, _) = send(app.clone(), "POST", &uri, Some(contact_only_body())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(app, "POST", &uri, Some(contact_only_body())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "QUOTA_EXCEEDED");
        assert_eq!(
            body["error"]["message"],
            "Maximum ATS analysis attempts reached"
        );
    }

    #[tokio::test]
    async fn test_stateless_analyze_does_not_consume_quota() {
        let app = app(1);
        let id = Uuid::new_v4();

        let (status, _) = send(
            app.clone(),
            "POST",
            "/api/v1/ats/analyze",
            Some(contact_only_body()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let uri = format!("/api/v1/resumes/{id}/ats-analyses");
        let (_, history) = send(app, "GET", &uri, None).await;
        assert_eq!(history["attempts_used"], 0);
        assert_eq!(history["latest_score"], Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = send(app(5), "GET", "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
