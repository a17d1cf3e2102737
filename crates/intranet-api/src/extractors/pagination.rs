//! Pagination query parameters.

use serde::Deserialize;

use intranet_core::error::AppError;
use intranet_core::result::AppResult;

/// Query parameters for paginated dashboard endpoints.
///
/// Defaults are applied per endpoint (the dashboard uses different page
/// sizes per view), so the raw values stay optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
    /// Free-text search filter.
    pub search: Option<String>,
}

impl PaginationParams {
    /// Rejects non-positive pagination values.
    pub fn validate(&self) -> AppResult<()> {
        if self.page == Some(0) || self.page_size == Some(0) {
            return Err(AppError::validation("Invalid pagination parameters"));
        }
        Ok(())
    }

    /// Requested page, defaulting to the first.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }

    /// Requested page size, with the endpoint's own default.
    pub fn page_size_or(&self, default: u64) -> u64 {
        self.page_size.unwrap_or(default)
    }

    /// Trimmed search term, if a non-empty one was given.
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
