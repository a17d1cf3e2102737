//! Integration test harness.
//!
//! Drives the full router in-process via `tower::ServiceExt`. The
//! backend gateway is configured to an unreachable address: everything
//! that must work without it (docs catalog, token rejection, request
//! validation) is exercised end to end, and forwarding paths are
//! asserted up to the outbound call.

mod helpers;

mod auth_test;
mod dash_test;
mod docs_test;
