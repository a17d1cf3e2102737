//! Documentation catalog handler.

use axum::Json;
use axum::extract::State;

use intranet_core::error::AppError;
use intranet_docs::catalog::DocsIndex;

use crate::state::AppState;

/// GET /api/docs
///
/// Rebuilds the catalog from the docs directory on every call and
/// returns the flat sorted list plus the grouped-by-section view.
pub async fn docs_index(State(state): State<AppState>) -> Result<Json<DocsIndex>, AppError> {
    let index = state.docs.build().await?;
    Ok(Json(index))
}
