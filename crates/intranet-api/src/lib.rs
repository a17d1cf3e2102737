//! # intranet-api
//!
//! HTTP API layer for the lending intranet built on Axum.
//!
//! Provides the REST endpoints the dashboard frontend consumes: thin
//! forwarding handlers over the backend gateway, the documentation
//! catalog endpoint, middleware (CORS, logging, body limits), extractors,
//! and DTOs.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
