//! Backend gateway HTTP client.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use intranet_core::config::gateway::GatewayConfig;
use intranet_core::error::{AppError, ErrorKind};
use intranet_core::result::AppResult;

use crate::error::GatewayError;

/// A binary payload fetched from the gateway, with the upstream content
/// headers needed to relay it.
#[derive(Debug, Clone)]
pub struct BinaryDownload {
    /// Raw body bytes.
    pub bytes: Bytes,
    /// Upstream `Content-Type`, when present.
    pub content_type: Option<String>,
    /// Upstream `Content-Disposition`, when present.
    pub content_disposition: Option<String>,
}

/// HTTP client for the backend gateway.
///
/// One instance is shared by all handlers. Every request carries the
/// session token twice — `Authorization: Bearer` and the session
/// cookie — because the gateway authenticates some routes by header and
/// others by cookie.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
    cookie_name: String,
    /// Longer deadline for multipart uploads and binary downloads.
    transfer_timeout: Duration,
}

impl GatewayClient {
    /// Creates a client from gateway configuration.
    pub fn new(config: &GatewayConfig, cookie_name: impl Into<String>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build gateway HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cookie_name: cookie_name.into(),
            transfer_timeout: Duration::from_secs(config.transfer_timeout_seconds),
        })
    }

    /// GET a JSON endpoint.
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> Result<Value, GatewayError> {
        let builder = self.http.get(self.url(path)).query(query);
        self.send_json(self.authed(builder, token)).await
    }

    /// POST a JSON body.
    pub async fn post_json(
        &self,
        path: &str,
        body: &Value,
        token: &str,
    ) -> Result<Value, GatewayError> {
        let builder = self.http.post(self.url(path)).json(body);
        self.send_json(self.authed(builder, token)).await
    }

    /// PUT a JSON body.
    pub async fn put_json(
        &self,
        path: &str,
        body: &Value,
        token: &str,
    ) -> Result<Value, GatewayError> {
        let builder = self.http.put(self.url(path)).json(body);
        self.send_json(self.authed(builder, token)).await
    }

    /// POST a multipart form (email endpoints with attachments).
    pub async fn post_multipart(
        &self,
        path: &str,
        form: Form,
        token: &str,
    ) -> Result<Value, GatewayError> {
        let builder = self
            .http
            .post(self.url(path))
            .multipart(form)
            .timeout(self.transfer_timeout);
        self.send_json(self.authed(builder, token)).await
    }

    /// GET a binary payload (generated PDF documents).
    pub async fn get_bytes(&self, path: &str, token: &str) -> Result<BinaryDownload, GatewayError> {
        let builder = self
            .http
            .get(self.url(path))
            .timeout(self.transfer_timeout);
        let response = check_status(self.authed(builder, token).send().await?).await?;

        let content_type = header_string(&response, CONTENT_TYPE);
        let content_disposition = header_string(&response, CONTENT_DISPOSITION);

        let bytes = response.bytes().await?;
        debug!(path, bytes = bytes.len(), "Downloaded binary from gateway");

        Ok(BinaryDownload {
            bytes,
            content_type,
            content_disposition,
        })
    }

    /// Joins a relative path onto the configured base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attaches the session token as bearer header and cookie.
    fn authed(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(COOKIE, format!("{}={}", self.cookie_name, token))
    }

    /// Sends a request and parses the response body as JSON.
    ///
    /// Empty bodies become `null` rather than a decode error; the
    /// logout endpoint answers with no body at all.
    async fn send_json(&self, builder: RequestBuilder) -> Result<Value, GatewayError> {
        let response = check_status(builder.send().await?).await?;

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Reads a response header as an owned string, if present and valid.
fn header_string(response: &Response, name: reqwest::header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

/// Turns non-success responses into [`GatewayError::Status`], pulling
/// the upstream `message`/`error` field out of the body when possible.
async fn check_status(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Gateway error")
                .to_string()
        });

    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> GatewayClient {
        let config = GatewayConfig {
            base_url: base_url.to_string(),
            ..GatewayConfig::default()
        };
        GatewayClient::new(&config, "intranet-token").unwrap()
    }

    #[test]
    fn test_url_join_normalizes_slashes() {
        let client = client_for("http://gateway:4000/");
        assert_eq!(
            client.url("/loans/pending"),
            "http://gateway:4000/loans/pending"
        );
        assert_eq!(client.url("clients"), "http://gateway:4000/clients");
    }
}
