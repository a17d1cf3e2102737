//! Response DTOs.
//!
//! The envelopes mirror what the dashboard frontend already consumes;
//! a few endpoints (backups, batch document generation) relay the
//! gateway body untouched and need no DTO at all.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard success response wrapper: `{ "success": true, "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success wrapper with a human-readable message (email endpoints).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentResponse {
    /// Always `true` here.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
    /// Backend payload describing what was sent.
    pub data: Value,
}

/// Bare success flag (logout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the request was successful.
    pub success: bool,
}

/// Paginated disbursed-loans envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisbursedResponse {
    /// Whether the request was successful.
    pub success: bool,
    /// Loans in this page.
    pub data: Value,
    /// Total loan count.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    #[serde(rename = "pageSize")]
    pub page_size: u64,
    /// Total pages.
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

/// Pagination block for document listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Total item count.
    pub total: Value,
    /// Total pages.
    #[serde(rename = "totalPages")]
    pub total_pages: Value,
    /// Current page.
    #[serde(rename = "currentPage")]
    pub current_page: Value,
    /// Items per page.
    pub limit: u64,
}

/// Never-downloaded documents envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeverDownloadedResponse {
    /// Documents in this page.
    pub data: Value,
    /// Pagination info.
    pub pagination: PaginationInfo,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
