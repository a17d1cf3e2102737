//! Route definitions for the intranet HTTP API.
//!
//! All routes are organized by dashboard domain and mounted under
//! `/api`, mirroring the paths the frontend already calls. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_request_size_bytes as usize;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(docs_routes())
        .merge(auth_routes())
        .merge(client_routes())
        .merge(loan_routes())
        .merge(backup_routes())
        .merge(document_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Health check (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Documentation catalog (no auth required)
fn docs_routes() -> Router<AppState> {
    Router::new().route("/docs", get(handlers::docs::docs_index))
}

/// Session endpoints: me, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Client lookup, updates, and outbound email
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/dash/clients", get(handlers::clients::list_clients))
        .route("/dash/clients", put(handlers::clients::update_client))
        .route(
            "/dash/clients/contact",
            post(handlers::mail::send_contact_email),
        )
        .route(
            "/dash/clients/announce",
            post(handlers::mail::send_announcement_email),
        )
}

/// Loan queue, detail, and disbursement
fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/dash/active", get(handlers::loans::pending_loans))
        .route("/dash/loan", get(handlers::loans::loan_info))
        .route(
            "/dash/loan/disbursed",
            get(handlers::loans::disbursed_loans),
        )
        .route(
            "/dash/loan/{loan_id}/disburse",
            put(handlers::loans::disburse_loan),
        )
}

/// Database backup administration
fn backup_routes() -> Router<AppState> {
    Router::new()
        .route("/dash/backup", get(handlers::backups::list_backups))
        .route("/dash/backup", post(handlers::backups::create_backup))
        .route(
            "/dash/backup/restore",
            post(handlers::backups::restore_backup),
        )
        .route(
            "/dash/backup/download",
            get(handlers::backups::download_backup),
        )
}

/// Generated PDF documents
fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/dash/pdfs/pending-documents",
            get(handlers::documents::pending_documents),
        )
        .route(
            "/dash/pdfs/generate-all-pending",
            post(handlers::documents::generate_all_pending),
        )
        .route(
            "/dash/pdfs/document",
            get(handlers::documents::download_document),
        )
        .route(
            "/dash/pdfs/never-downloaded",
            get(handlers::documents::never_downloaded),
        )
        .route(
            "/dash/pdfs/loans-with-documents",
            get(handlers::documents::loans_with_documents),
        )
}
