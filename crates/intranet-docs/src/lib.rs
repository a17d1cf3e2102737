//! # intranet-docs
//!
//! Markdown documentation catalog for the lending intranet.
//!
//! Scans a directory tree of markdown files with YAML front matter and
//! produces a display-ready structure: a flat list sorted by section
//! rank, then section name, then explicit order, then title, plus the
//! same documents grouped by section in that order. The catalog is
//! rebuilt from scratch on every call; nothing is cached between
//! requests.

pub mod catalog;
pub mod document;
pub mod front_matter;

pub use catalog::{DocsCatalog, DocsIndex};
pub use document::{Document, GroupedDocs};
