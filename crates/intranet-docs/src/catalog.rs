//! Documentation catalog builder.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use intranet_core::config::docs::DocsConfig;
use intranet_core::error::{AppError, ErrorKind};
use intranet_core::result::AppResult;
use serde::Serialize;

use crate::document::{Document, GroupedDocs};
use crate::front_matter;

/// File extension recognized as a documentation page.
const MARKDOWN_EXT: &str = ".md";

/// Explicit-order sentinel for documents that do not declare one.
const DEFAULT_ORDER: u32 = 999;

/// Complete catalog output: the flat sorted list plus the same
/// documents grouped by section.
#[derive(Debug, Clone, Serialize)]
pub struct DocsIndex {
    /// All documents in display order.
    pub docs: Vec<Document>,
    /// Documents grouped by section, in the same display order.
    pub grouped: GroupedDocs,
}

/// Builds the documentation catalog from a directory of markdown files.
///
/// Every call re-reads the directory tree from scratch; the catalog
/// keeps no state between invocations and is safe to share across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct DocsCatalog {
    /// Root directory scanned for documents.
    root: PathBuf,
    /// Display rank per lowercased section name.
    section_ranks: HashMap<String, u32>,
    /// Rank for sections absent from the table.
    default_rank: u32,
}

impl DocsCatalog {
    /// Creates a catalog from configuration.
    pub fn new(config: &DocsConfig) -> Self {
        let section_ranks = config
            .section_ranks
            .iter()
            .map(|(name, rank)| (name.to_lowercase(), *rank))
            .collect();

        Self {
            root: PathBuf::from(&config.root_dir),
            section_ranks,
            default_rank: config.default_rank,
        }
    }

    /// Scans the docs tree and returns the sorted, grouped catalog.
    ///
    /// The root directory is created if it does not exist yet. Any
    /// filesystem failure aborts the whole build; no partial catalog is
    /// ever returned.
    pub async fn build(&self) -> AppResult<DocsIndex> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Filesystem,
                format!("Failed to create docs root: {}", self.root.display()),
                e,
            )
        })?;

        let mut docs = Vec::new();
        let mut pending = vec![(self.root.clone(), String::new())];

        while let Some((dir, rel)) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Filesystem,
                    format!("Failed to read docs directory: {}", dir.display()),
                    e,
                )
            })?;

            while let Some(entry) = entries.next_entry().await.map_err(|e| {
                AppError::with_source(ErrorKind::Filesystem, "Failed to read directory entry", e)
            })? {
                let file_type = entry.file_type().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Filesystem, "Failed to stat entry", e)
                })?;
                let name = entry.file_name().to_string_lossy().into_owned();

                if file_type.is_dir() {
                    let child_rel = if rel.is_empty() {
                        name
                    } else {
                        format!("{rel}/{name}")
                    };
                    pending.push((entry.path(), child_rel));
                } else if let Some(stem) = name.strip_suffix(MARKDOWN_EXT) {
                    let raw = fs::read_to_string(entry.path()).await.map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Filesystem,
                            format!("Failed to read document: {}", entry.path().display()),
                            e,
                        )
                    })?;
                    docs.push(self.build_document(&raw, &rel, stem)?);
                }
            }
        }

        docs.sort_by(display_order);
        let grouped = GroupedDocs::from_sorted(&docs);

        debug!(
            documents = docs.len(),
            sections = grouped.len(),
            "Documentation catalog built"
        );

        Ok(DocsIndex { docs, grouped })
    }

    /// Assembles a [`Document`] from raw file text and its location.
    fn build_document(&self, raw: &str, parent_path: &str, stem: &str) -> AppResult<Document> {
        let slug = if parent_path.is_empty() {
            stem.to_string()
        } else {
            format!("{parent_path}/{stem}")
        };

        let (block, body) = front_matter::split(raw);
        let meta = match block {
            Some(block) => front_matter::parse(block, &slug)?,
            None => Default::default(),
        };

        let section = meta
            .section
            .filter(|s| !s.is_empty())
            .or_else(|| (!parent_path.is_empty()).then(|| parent_path.to_string()))
            .unwrap_or_else(|| "general".to_string());

        let level = meta.level.unwrap_or_else(|| {
            if parent_path.is_empty() {
                1
            } else {
                parent_path.split('/').count() as u32 + 1
            }
        });

        let parent = meta
            .parent
            .filter(|p| !p.is_empty())
            .or_else(|| (!parent_path.is_empty()).then(|| parent_path.to_string()));

        let section_rank = meta
            .section_order
            .unwrap_or_else(|| self.rank_of(&section));

        Ok(Document {
            slug,
            title: meta.title.unwrap_or_else(|| stem.to_string()),
            content: body.to_string(),
            order: meta.order.unwrap_or(DEFAULT_ORDER),
            section,
            subsection: meta.subsection,
            level,
            parent,
            icon: meta.icon,
            description: meta.description,
            section_rank,
        })
    }

    /// Display rank of a section: table lookup by lowercased name, else
    /// the configured sentinel.
    fn rank_of(&self, section: &str) -> u32 {
        self.section_ranks
            .get(&section.to_lowercase())
            .copied()
            .unwrap_or(self.default_rank)
    }
}

/// Total display order: section rank, then section name, then explicit
/// order, then title.
fn display_order(a: &Document, b: &Document) -> Ordering {
    a.section_rank
        .cmp(&b.section_rank)
        .then_with(|| a.section.cmp(&b.section))
        .then_with(|| a.order.cmp(&b.order))
        .then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write_doc(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    fn catalog_for(root: &Path) -> DocsCatalog {
        let config = DocsConfig {
            root_dir: root.to_string_lossy().into_owned(),
            ..DocsConfig::default()
        };
        DocsCatalog::new(&config)
    }

    #[tokio::test]
    async fn test_missing_root_is_created_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("does-not-exist-yet");

        let index = catalog_for(&root).build().await.unwrap();

        assert!(index.docs.is_empty());
        assert!(index.grouped.is_empty());
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_ranked_sections_come_before_unranked() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "intro.md",
            "---\ntitle: Intro\nsection: arquitectura\n---\nx\n",
        );
        write_doc(
            dir.path(),
            "first.md",
            "---\ntitle: First\nsection: custom\norder: 1\n---\nx\n",
        );
        write_doc(
            dir.path(),
            "second.md",
            "---\ntitle: Second\nsection: custom\norder: 2\n---\nx\n",
        );

        let index = catalog_for(dir.path()).build().await.unwrap();

        let titles: Vec<&str> = index.docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Intro", "First", "Second"]);
        assert_eq!(index.docs[0].section_rank, 1);
        assert_eq!(index.docs[1].section_rank, 999);
    }

    #[tokio::test]
    async fn test_title_breaks_order_ties() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "b.md",
            "---\ntitle: B\nsection: pruebas\norder: 1\n---\nx\n",
        );
        write_doc(
            dir.path(),
            "a.md",
            "---\ntitle: A\nsection: pruebas\norder: 1\n---\nx\n",
        );

        let index = catalog_for(dir.path()).build().await.unwrap();

        let titles: Vec<&str> = index.docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_grouped_keys_follow_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "z.md",
            "---\ntitle: Z\nsection: custom\n---\nx\n",
        );
        write_doc(
            dir.path(),
            "a.md",
            "---\ntitle: A\nsection: arquitectura\n---\nx\n",
        );

        let index = catalog_for(dir.path()).build().await.unwrap();

        let sections: Vec<&str> = index.grouped.sections().collect();
        assert_eq!(sections, ["arquitectura", "custom"]);

        // The JSON object must iterate in that same order.
        let json = serde_json::to_string(&index.grouped).unwrap();
        let arquitectura = json.find("\"arquitectura\"").unwrap();
        let custom = json.find("\"custom\"").unwrap();
        assert!(arquitectura < custom);
    }

    #[tokio::test]
    async fn test_subdirectory_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "guias/backup/restore.md", "No front matter\n");

        let index = catalog_for(dir.path()).build().await.unwrap();

        let doc = &index.docs[0];
        assert_eq!(doc.slug, "guias/backup/restore");
        assert_eq!(doc.title, "restore");
        assert_eq!(doc.section, "guias/backup");
        assert_eq!(doc.parent.as_deref(), Some("guias/backup"));
        assert_eq!(doc.level, 3);
        assert_eq!(doc.order, 999);
        assert_eq!(doc.content, "No front matter\n");
    }

    #[tokio::test]
    async fn test_document_rank_override_merges_into_one_group() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "pinned.md",
            "---\ntitle: Pinned\nsection: custom\nsectionOrder: 1\n---\nx\n",
        );
        write_doc(
            dir.path(),
            "plain.md",
            "---\ntitle: Plain\nsection: custom\n---\nx\n",
        );
        write_doc(
            dir.path(),
            "seg.md",
            "---\ntitle: Seg\nsection: seguridad\n---\nx\n",
        );

        let index = catalog_for(dir.path()).build().await.unwrap();

        // The override pulls "Pinned" ahead of the ranked section, but
        // both custom documents end up in a single group.
        let titles: Vec<&str> = index.docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Pinned", "Seg", "Plain"]);
        let sections: Vec<&str> = index.grouped.sections().collect();
        assert_eq!(sections, ["custom", "seguridad"]);
        assert_eq!(index.grouped.get("custom").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_non_markdown_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "notes.txt", "not a doc\n");
        write_doc(dir.path(), "real.md", "---\ntitle: Real\n---\nx\n");

        let index = catalog_for(dir.path()).build().await.unwrap();
        assert_eq!(index.docs.len(), 1);
        assert_eq!(index.docs[0].title, "Real");
    }

    #[tokio::test]
    async fn test_rebuild_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "uno.md",
            "---\ntitle: Uno\nsection: modulos\norder: 2\n---\nx\n",
        );
        write_doc(
            dir.path(),
            "dos.md",
            "---\ntitle: Dos\nsection: modulos\norder: 1\n---\nx\n",
        );
        write_doc(dir.path(), "extra/tres.md", "Body only\n");

        let catalog = catalog_for(dir.path());
        let first = serde_json::to_string(&catalog.build().await.unwrap()).unwrap();
        let second = serde_json::to_string(&catalog.build().await.unwrap()).unwrap();

        assert_eq!(first, second);
    }
}
