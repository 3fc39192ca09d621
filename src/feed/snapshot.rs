//! Keyed render snapshot.
//!
//! Section keys are `Section::id`. Item keys are scoped to their section,
//! so two sections may reuse an item id without colliding. Diffing looks
//! at keys only: a changed title under an unchanged key is not reported.

use std::collections::{HashMap, HashSet};

use crate::model::{ImageScale, Item, Section};

/// Identity of an item inside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    pub section: String,
    pub item: String,
}

impl ItemKey {
    pub fn new(section: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            item: item.into(),
        }
    }
}

/// One section of a snapshot: its key, header and ordered item keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSection {
    pub key: String,
    pub header: String,
    pub items_total: i64,
    pub items_to_show: i64,
    pub item_keys: Vec<ItemKey>,
}

/// Ordered, keyed representation of the renderable sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    sections: Vec<SnapshotSection>,
    items: HashMap<ItemKey, Item>,
}

/// Per-item data handed to a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRenderData {
    pub title: String,
    pub image_url: String,
}

/// Request to re-render a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub snapshot: Snapshot,
    /// Always false: updates are applied without animation.
    pub animate: bool,
}

/// Key-level difference between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub inserted_sections: Vec<String>,
    pub removed_sections: Vec<String>,
    pub inserted_items: Vec<ItemKey>,
    pub removed_items: Vec<ItemKey>,
}

impl SnapshotDiff {
    pub fn is_empty(&self) -> bool {
        self.inserted_sections.is_empty()
            && self.removed_sections.is_empty()
            && self.inserted_items.is_empty()
            && self.removed_items.is_empty()
    }
}

impl Snapshot {
    /// Build a snapshot, preserving section and item order.
    ///
    /// Duplicate section ids and duplicate item ids within a section keep
    /// their first occurrence.
    pub fn from_sections(sections: &[Section]) -> Self {
        let mut seen_sections = HashSet::new();
        let mut snapshot = Snapshot::default();

        for section in sections {
            if !seen_sections.insert(section.id.as_str()) {
                tracing::warn!(section = %section.id, "Duplicate section id dropped from snapshot");
                continue;
            }

            let mut item_keys = Vec::with_capacity(section.items.len());
            for item in &section.items {
                let key = ItemKey::new(&section.id, &item.id);
                if snapshot.items.contains_key(&key) {
                    tracing::warn!(
                        section = %section.id,
                        item = %item.id,
                        "Duplicate item id dropped from snapshot"
                    );
                    continue;
                }
                snapshot.items.insert(key.clone(), item.clone());
                item_keys.push(key);
            }

            snapshot.sections.push(SnapshotSection {
                key: section.id.clone(),
                header: section.header.clone(),
                items_total: section.items_total,
                items_to_show: section.items_to_show,
                item_keys,
            });
        }

        snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[SnapshotSection] {
        &self.sections
    }

    pub fn section_keys(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.key.as_str()).collect()
    }

    /// Item ids of one section in display order.
    pub fn item_ids(&self, section_key: &str) -> Option<Vec<&str>> {
        self.sections
            .iter()
            .find(|s| s.key == section_key)
            .map(|s| s.item_keys.iter().map(|k| k.item.as_str()).collect())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, key: &ItemKey) -> Option<&Item> {
        self.items.get(key)
    }

    /// Title and chosen image URL for one cell.
    pub fn render_item(&self, key: &ItemKey, scale: ImageScale) -> Option<ItemRenderData> {
        self.items.get(key).map(|item| ItemRenderData {
            title: item.title.clone(),
            image_url: item.image.url(scale).to_string(),
        })
    }

    /// Keys present in `self` but not in `previous`, and vice versa.
    pub fn diff(&self, previous: &Snapshot) -> SnapshotDiff {
        let old_sections: HashSet<&str> = previous.sections.iter().map(|s| s.key.as_str()).collect();
        let new_sections: HashSet<&str> = self.sections.iter().map(|s| s.key.as_str()).collect();

        SnapshotDiff {
            inserted_sections: self
                .sections
                .iter()
                .filter(|s| !old_sections.contains(s.key.as_str()))
                .map(|s| s.key.clone())
                .collect(),
            removed_sections: previous
                .sections
                .iter()
                .filter(|s| !new_sections.contains(s.key.as_str()))
                .map(|s| s.key.clone())
                .collect(),
            inserted_items: self
                .ordered_item_keys()
                .filter(|k| !previous.items.contains_key(*k))
                .cloned()
                .collect(),
            removed_items: previous
                .ordered_item_keys()
                .filter(|k| !self.items.contains_key(*k))
                .cloned()
                .collect(),
        }
    }

    fn ordered_item_keys(&self) -> impl Iterator<Item = &ItemKey> {
        self.sections.iter().flat_map(|s| s.item_keys.iter())
    }
}
