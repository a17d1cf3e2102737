//! Generated-document handlers — pending queue, batch generation,
//! listings, and binary download of individual PDFs.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use intranet_core::error::AppError;

use crate::dto::response::{ApiResponse, NeverDownloadedResponse, PaginationInfo};
use crate::extractors::AuthToken;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentQuery {
    /// Document to download.
    pub document_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeverDownloadedQuery {
    /// Filter by owner.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// Filter by loan.
    #[serde(rename = "loanId")]
    pub loan_id: Option<String>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoansWithDocumentsQuery {
    /// Optional loan status filter.
    pub status: Option<String>,
}

/// GET /api/dash/pdfs/pending-documents
pub async fn pending_documents(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let data = state
        .gateway
        .get_json("pdfs/pending-documents", &[], &token)
        .await?;

    Ok(Json(ApiResponse::ok(data)))
}

/// POST /api/dash/pdfs/generate-all-pending
pub async fn generate_all_pending(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<Json<Value>, AppError> {
    let data = state
        .gateway
        .post_json("pdfs/generate-pending", &json!({}), &token)
        .await?;

    Ok(Json(data))
}

/// GET /api/dash/pdfs/document
///
/// Streams a generated PDF back to the browser with the gateway's
/// content headers, marked uncacheable so stale documents never stick
/// in a shared proxy.
pub async fn download_document(
    State(state): State<AppState>,
    token: AuthToken,
    Query(query): Query<DocumentQuery>,
) -> Result<Response, AppError> {
    let Some(document_id) = query.document_id.filter(|id| !id.is_empty()) else {
        return Err(AppError::validation("document_id is required"));
    };

    let download = state
        .gateway
        .get_bytes(&format!("pdfs/document/{document_id}"), &token)
        .await?;

    let content_type = download
        .content_type
        .as_deref()
        .and_then(|v| HeaderValue::from_str(v).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));
    let content_disposition = download
        .content_disposition
        .as_deref()
        .and_then(|v| HeaderValue::from_str(v).ok())
        .unwrap_or_else(|| HeaderValue::from_static("attachment"));

    let headers = [
        (header::CONTENT_TYPE, content_type),
        (header::CONTENT_DISPOSITION, content_disposition),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ),
        (header::PRAGMA, HeaderValue::from_static("no-cache")),
        (header::EXPIRES, HeaderValue::from_static("0")),
    ];

    Ok((headers, download.bytes).into_response())
}

/// GET /api/dash/pdfs/never-downloaded
///
/// Documents generated but never fetched by anyone, reshaped into the
/// `{ data, pagination }` envelope the dashboard table expects.
pub async fn never_downloaded(
    State(state): State<AppState>,
    token: AuthToken,
    Query(query): Query<NeverDownloadedQuery>,
) -> Result<Json<NeverDownloadedResponse>, AppError> {
    let limit = query.limit.unwrap_or(10);

    let mut params = Vec::new();
    if let Some(user_id) = &query.user_id {
        params.push(("userId", user_id.clone()));
    }
    if let Some(loan_id) = &query.loan_id {
        params.push(("loanId", loan_id.clone()));
    }
    params.push(("page", query.page.unwrap_or(1).to_string()));
    params.push(("limit", limit.to_string()));

    let data = state
        .gateway
        .get_json("pdfs/never-downloaded", &params, &token)
        .await?;

    Ok(Json(NeverDownloadedResponse {
        data: data.get("documents").cloned().unwrap_or_else(|| json!([])),
        pagination: PaginationInfo {
            total: data.get("total").cloned().unwrap_or(Value::Null),
            total_pages: data.get("totalPages").cloned().unwrap_or(Value::Null),
            current_page: data.get("currentPage").cloned().unwrap_or(Value::Null),
            limit,
        },
    }))
}

/// GET /api/dash/pdfs/loans-with-documents
pub async fn loans_with_documents(
    State(state): State<AppState>,
    token: AuthToken,
    Query(query): Query<LoansWithDocumentsQuery>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let mut params = Vec::new();
    if let Some(status) = query.status.filter(|s| !s.is_empty()) {
        params.push(("status", status));
    }

    let data = state
        .gateway
        .get_json("pdfs/loans-with-documents", &params, &token)
        .await?;

    Ok(Json(ApiResponse::ok(data)))
}
