//! YAML front matter extraction.
//!
//! A document may open with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Desembolsos
//! section: modulos
//! order: 2
//! ---
//! body text...
//! ```
//!
//! Everything in the block is optional; a file without front matter is
//! all body.

use serde::Deserialize;

use intranet_core::error::{AppError, ErrorKind};
use intranet_core::result::AppResult;

/// Metadata keys recognized in a document's front matter.
///
/// Unknown keys are ignored. All fields are optional; fallbacks are
/// applied by the catalog, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub order: Option<u32>,
    pub section: Option<String>,
    pub subsection: Option<String>,
    pub level: Option<u32>,
    pub parent: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub section_order: Option<u32>,
}

/// Splits a raw file into its front matter block and body.
///
/// Returns `(None, raw)` when the file does not open with a `---` line
/// or the block is never closed; the whole file is body then.
pub fn split(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw
        .strip_prefix("---")
        .and_then(|r| r.strip_prefix("\r\n").or_else(|| r.strip_prefix('\n')))
    else {
        return (None, raw);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(block), body);
        }
        offset += line.len();
    }

    (None, raw)
}

/// Parses a front matter block, treating an empty block as all-defaults.
pub fn parse(block: &str, slug: &str) -> AppResult<FrontMatter> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    serde_yaml::from_str(block).map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Invalid front matter in '{slug}'"),
            e,
        )
    })
}
