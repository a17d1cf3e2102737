//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use intranet_api::AppState;
use intranet_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Temporary docs root; dropped with the app
    pub docs_dir: TempDir,
}

/// A decoded test response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestApp {
    /// Create a new test application with an empty docs directory and
    /// an unreachable gateway.
    pub fn new() -> Self {
        let docs_dir = tempfile::tempdir().expect("Failed to create docs tempdir");

        let mut config = AppConfig::default();
        config.docs.root_dir = docs_dir.path().to_string_lossy().into_owned();
        config.gateway.base_url = "http://127.0.0.1:9".to_string();
        config.gateway.request_timeout_seconds = 2;
        config.gateway.connect_timeout_seconds = 1;

        let cookie_name = config.auth.cookie_name.clone();
        let state = AppState::new(config).expect("Failed to build app state");

        Self {
            router: intranet_api::build_router(state),
            cookie_name,
            docs_dir,
        }
    }

    /// Write a markdown document under the docs root.
    pub fn write_doc(&self, rel: &str, contents: &str) {
        let path = self.docs_dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create doc directory");
        }
        std::fs::write(path, contents).expect("Failed to write doc");
    }

    /// A structurally valid token whose expiry is `offset_seconds` from now.
    pub fn token_with_exp(offset_seconds: i64) -> String {
        let exp = chrono::Utc::now().timestamp() + offset_seconds;
        Self::token_from_payload(&format!(r#"{{"sub":"tester","exp":{exp}}}"#))
    }

    /// A structurally valid token around an arbitrary JSON payload.
    pub fn token_from_payload(payload: &str) -> String {
        let encode = |part: &str| URL_SAFE_NO_PAD.encode(part.as_bytes());
        format!(
            "{}.{}.{}",
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            encode(payload),
            encode("signature")
        )
    }

    /// Issue a request, optionally with the session cookie attached.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(
                header::COOKIE,
                format!("{}={}", self.cookie_name, token),
            );
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}
