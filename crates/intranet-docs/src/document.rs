//! Catalog document model and section grouping.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single documentation page, ready for rendering.
///
/// Field names serialize in the camelCase shape the dashboard frontend
/// consumes. Optional fields absent from the front matter are omitted
/// from the JSON entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Identifier derived from the file's relative path, without the
    /// markdown extension.
    pub slug: String,
    /// Display title (front matter `title`, else the file stem).
    pub title: String,
    /// Markdown body, front matter stripped.
    pub content: String,
    /// Explicit ordering within a section.
    pub order: u32,
    /// Section this document belongs to.
    pub section: String,
    /// Optional subsection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    /// Nesting level (1 at the root, path depth + 1 below).
    pub level: u32,
    /// Optional parent reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Optional icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Optional short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Effective section rank used for display ordering.
    #[serde(rename = "sectionOrder")]
    pub section_rank: u32,
}

/// Documents grouped by section, preserving the order in which each
/// section first appears in the globally sorted list.
///
/// Serializes as a JSON object keyed by section name. A plain map type
/// would re-sort the keys, so the pairs are kept in an order-preserving
/// vector and emitted as a map by hand.
#[derive(Debug, Clone, Default)]
pub struct GroupedDocs(Vec<(String, Vec<Document>)>);

impl GroupedDocs {
    /// Groups an already-sorted document list by section.
    ///
    /// Sections appear in the order they are first seen in the sorted
    /// list, and members keep their sorted positions. A section can be
    /// non-contiguous in the flat list when individual documents carry
    /// their own rank override; its members still land in one group.
    pub fn from_sorted(docs: &[Document]) -> Self {
        let mut groups: Vec<(String, Vec<Document>)> = Vec::new();

        for doc in docs {
            match groups.iter_mut().find(|(section, _)| *section == doc.section) {
                Some((_, members)) => members.push(doc.clone()),
                None => groups.push((doc.section.clone(), vec![doc.clone()])),
            }
        }

        Self(groups)
    }

    /// Section names in display order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(section, _)| section.as_str())
    }

    /// Documents of a single section.
    pub fn get(&self, section: &str) -> Option<&[Document]> {
        self.0
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, members)| members.as_slice())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog produced no sections at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for GroupedDocs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (section, members) in &self.0 {
            map.serialize_entry(section, members)?;
        }
        map.end()
    }
}
