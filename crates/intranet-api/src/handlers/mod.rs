//! Route handlers organized by dashboard domain.

pub mod auth;
pub mod backups;
pub mod clients;
pub mod docs;
pub mod documents;
pub mod health;
pub mod loans;
pub mod mail;
