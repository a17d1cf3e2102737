//! Documentation catalog configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Settings for the markdown documentation catalog.
///
/// The section rank table drives display ordering only; it carries no
/// access-control meaning. Sections missing from the table sort last
/// with `default_rank`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Root directory scanned for markdown files, relative to the
    /// working directory. Created on first use if absent.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    /// Display rank per section name (lowercased lookup key).
    #[serde(default = "default_section_ranks")]
    pub section_ranks: HashMap<String, u32>,
    /// Rank assigned to sections absent from the table.
    #[serde(default = "default_rank")]
    pub default_rank: u32,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            section_ranks: default_section_ranks(),
            default_rank: default_rank(),
        }
    }
}

fn default_root_dir() -> String {
    "docs".to_string()
}

fn default_rank() -> u32 {
    999
}

fn default_section_ranks() -> HashMap<String, u32> {
    [
        ("arquitectura", 1),
        ("infraestructura", 2),
        ("seguridad", 3),
        ("base de datos", 4),
        ("modulos", 5),
        ("api rest", 6),
        ("herramientas y utilidades", 7),
        ("pruebas", 8),
        ("monitoreo y mantenimiento", 9),
        ("procedimientos operativos", 10),
        ("consideraciones legales", 11),
    ]
    .into_iter()
    .map(|(name, rank)| (name.to_string(), rank))
    .collect()
}
