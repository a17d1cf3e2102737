//! # intranet-proxy
//!
//! HTTP client for the external backend gateway.
//!
//! The intranet holds no business data of its own: clients, loans,
//! backups, and generated documents all live behind the gateway API.
//! This crate owns the single outbound HTTP client, re-attaches the
//! session token to every forwarded request (as both a bearer header
//! and the session cookie), and turns upstream failures into typed
//! errors the API layer can translate to response statuses.

pub mod client;
pub mod error;

pub use client::{BinaryDownload, GatewayClient};
pub use error::GatewayError;
