//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::AuthToken;
pub use pagination::PaginationParams;
