//! # intranet-auth
//!
//! Session token inspection for the lending intranet.
//!
//! The intranet never issues or signs tokens: the backend gateway does
//! both. This crate only decides whether the token a request carries is
//! worth forwarding — structurally a compact three-segment token whose
//! payload is not obviously expired.

pub mod token;

pub use token::{Claims, TokenInspector};
