//! Client management handlers — lookup, listing, and updates.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

use intranet_core::error::AppError;

use crate::dto::request::ClientUpdateRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthToken, PaginationParams};
use crate::state::AppState;

/// Fields never forwarded on update: server-managed or sensitive.
const PROTECTED_FIELDS: [&str; 4] = ["id", "password", "createdAt", "updatedAt"];

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSelector {
    /// When present, fetch this single client instead of a page.
    pub client_id: Option<String>,
}

/// GET /api/dash/clients
///
/// With `client_id`: fetches that client. Otherwise returns a paginated
/// listing with an optional search filter.
pub async fn list_clients(
    State(state): State<AppState>,
    token: AuthToken,
    Query(selector): Query<ClientSelector>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    pagination.validate()?;

    let data = match selector.client_id {
        Some(client_id) => {
            state
                .gateway
                .get_json(&format!("clients/{client_id}"), &[], &token)
                .await?
        }
        None => {
            let mut query = vec![
                ("page", pagination.page().to_string()),
                ("pageSize", pagination.page_size_or(10).to_string()),
            ];
            if let Some(search) = pagination.search() {
                query.push(("search", search.to_string()));
            }

            state.gateway.get_json("clients", &query, &token).await?
        }
    };

    Ok(Json(ApiResponse::ok(data)))
}

/// PUT /api/dash/clients
///
/// Forwards a client update, stripping fields the backend manages
/// itself (and the password, which is never editable from here).
pub async fn update_client(
    State(state): State<AppState>,
    token: AuthToken,
    Json(req): Json<ClientUpdateRequest>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let Some(client) = req.client.as_object() else {
        return Err(AppError::validation("Client data is required"));
    };

    let client_id = match client.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(AppError::validation("Client data is required")),
    };

    let mut update = client.clone();
    for field in PROTECTED_FIELDS {
        update.remove(field);
    }

    let data = state
        .gateway
        .put_json(
            &format!("clients/{client_id}"),
            &Value::Object(update),
            &token,
        )
        .await?;

    Ok(Json(ApiResponse::ok(data)))
}
