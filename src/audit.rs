/*!
 * Session audit log of submitted translations.
 *
 * Entries are immutable once recorded and the log only grows at the front,
 * so index 0 is always the most recent submission.
 */

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use uuid::Uuid;

use crate::categories::{CategoryField, Profile};

/// One submitted translation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    id: Uuid,
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    categories: BTreeMap<CategoryField, String>,
    format: String,
    source_chars: usize,
}

impl AuditLogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        categories: BTreeMap<CategoryField, String>,
        format: impl Into<String>,
        source_chars: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            categories,
            format: format.into(),
            source_chars,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Resolved label of a field, `None` if the field was not part of the submission
    pub fn label(&self, field: CategoryField) -> Option<&str> {
        self.categories.get(&field).map(String::as_str)
    }

    pub fn categories(&self) -> &BTreeMap<CategoryField, String> {
        &self.categories
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn source_chars(&self) -> usize {
        self.source_chars
    }

    /// One line for the history panel: local time, then `Label: value` pairs
    /// in the profile's field order
    pub fn summary(&self, profile: Profile) -> String {
        let time = self.timestamp.with_timezone(&Local).format("%H:%M:%S");
        let fields: Vec<String> = profile
            .fields()
            .into_iter()
            .filter_map(|field| {
                self.label(field)
                    .map(|label| format!("{}: {}", field.label(), label))
            })
            .collect();
        format!("{}  {}  [{}]", time, fields.join(" | "), self.format)
    }
}

/// Newest-first, append-only list of entries
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: VecDeque<AuditLogEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry as the newest
    pub fn record(&mut self, entry: AuditLogEntry) {
        self.entries.push_front(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, where 0 is the newest
    pub fn get(&self, index: usize) -> Option<&AuditLogEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&AuditLogEntry> {
        self.entries.front()
    }

    /// Entries from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &AuditLogEntry> {
        self.entries.iter()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let entries: Vec<&AuditLogEntry> = self.entries.iter().collect();
        serde_json::to_string_pretty(&entries)
    }
}
