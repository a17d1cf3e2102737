//! Loan handlers — pending queue, detail lookup, disbursement.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use intranet_core::error::AppError;

use crate::dto::response::{ApiResponse, DisbursedResponse};
use crate::extractors::{AuthToken, PaginationParams};
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct LoanInfoQuery {
    /// Loan to look up.
    pub loan_id: Option<String>,
    /// Owner of the loan.
    pub user_id: Option<String>,
}

/// GET /api/dash/active
///
/// Paginated queue of loans pending disbursement.
pub async fn pending_loans(
    State(state): State<AppState>,
    token: AuthToken,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    pagination.validate()?;

    let query = [
        ("page", pagination.page().to_string()),
        ("pageSize", pagination.page_size_or(5).to_string()),
    ];
    let data = state
        .gateway
        .get_json("loans/pending", &query, &token)
        .await?;

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/dash/loan
pub async fn loan_info(
    State(state): State<AppState>,
    token: AuthToken,
    Query(params): Query<LoanInfoQuery>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let (Some(loan_id), Some(user_id)) = (params.loan_id, params.user_id) else {
        return Err(AppError::validation("loan_id and user_id are required"));
    };

    let data = state
        .gateway
        .get_json(&format!("loans/{user_id}/{loan_id}/info"), &[], &token)
        .await?;

    Ok(Json(ApiResponse::ok(data)))
}

/// PUT /api/dash/loan/{loan_id}/disburse
pub async fn disburse_loan(
    State(state): State<AppState>,
    token: AuthToken,
    Path(loan_id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    if loan_id.is_empty() {
        return Err(AppError::validation("loan_id is required"));
    }

    let data = state
        .gateway
        .put_json(&format!("loans/{loan_id}/disburse"), &json!({}), &token)
        .await?;
    reject_failed_body(&data)?;

    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/dash/loan/disbursed
///
/// Paginated, searchable list of already-disbursed loans. The backend
/// may omit `totalPages`; it is recomputed here either way.
pub async fn disbursed_loans(
    State(state): State<AppState>,
    token: AuthToken,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<DisbursedResponse>, AppError> {
    pagination.validate()?;

    let page = pagination.page();
    let page_size = pagination.page_size_or(6);

    let mut query = vec![
        ("page", page.to_string()),
        ("pageSize", page_size.to_string()),
    ];
    if let Some(search) = pagination.search() {
        query.push(("search", search.to_string()));
    }

    let data = state
        .gateway
        .get_json("loans/disbursed", &query, &token)
        .await?;
    reject_failed_body(&data)?;

    let total = data.get("total").and_then(Value::as_u64).unwrap_or(0);

    Ok(Json(DisbursedResponse {
        success: true,
        data: data.get("data").cloned().unwrap_or_else(|| json!([])),
        total,
        page,
        page_size,
        total_pages: total.div_ceil(page_size),
    }))
}

/// Some gateway endpoints answer 200 with `{ "success": false }` in the
/// body; surface those as gateway failures too.
fn reject_failed_body(data: &Value) -> Result<(), AppError> {
    if data.get("success") == Some(&Value::Bool(false)) {
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Gateway reported a failure");
        return Err(AppError::gateway(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_failed_body() {
        assert!(reject_failed_body(&json!({"success": true, "data": []})).is_ok());
        assert!(reject_failed_body(&json!({"data": []})).is_ok());

        let err = reject_failed_body(&json!({"success": false, "error": "no funds"})).unwrap_err();
        assert_eq!(err.message, "no funds");
    }
}
