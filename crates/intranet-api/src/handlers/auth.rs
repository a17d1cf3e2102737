//! Auth handlers — session lookup and logout.
//!
//! The intranet has no login endpoint: the backend gateway sets the
//! session cookie, and these handlers only relay or revoke it.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use serde_json::{Value, json};

use intranet_core::error::AppError;

use crate::dto::response::{ApiResponse, StatusResponse};
use crate::extractors::AuthToken;
use crate::state::AppState;

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let data = state
        .gateway
        .get_json("auth/me/intranet", &[], &token)
        .await?;

    Ok(Json(ApiResponse::ok(data)))
}

/// POST /api/auth/logout
///
/// Asks the gateway to revoke the token, then clears the session cookie
/// on the response.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    token: AuthToken,
) -> Result<(CookieJar, Json<StatusResponse>), AppError> {
    state
        .gateway
        .post_json("auth/logout/intranet", &json!({}), &token)
        .await?;

    let cleared = jar.remove(
        Cookie::build((state.config.auth.cookie_name.clone(), "")).path("/"),
    );

    Ok((cleared, Json(StatusResponse { success: true })))
}
