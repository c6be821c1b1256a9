// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use tokio::fs;
use uuid::Uuid;

use crate::{DisplayTemplate, Error, MemorialRecord};

/// The store version written by this crate.
pub const CURRENT_STORE_VERSION: u32 = 2;

/// Persisted memorial records.
///
/// Older layouts are migrated once when parsed, so the rest of the crate only ever sees
/// normalized [`MemorialRecord`]s.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MemorialStore {
    /// Layout version, always [`CURRENT_STORE_VERSION`] after parsing.
    pub version: u32,

    /// The records, in display order.
    pub records: Vec<MemorialRecord>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum StoreRaw {
    Versioned {
        version: u32,
        records: Vec<MemorialRecord>,
    },
    Legacy(Vec<LegacyRecord>),
}

/// Version 1 records: a bare array without ids or templates.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyRecord {
    name: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    is_male: Option<bool>,
    #[serde(default)]
    hebrew_date: Option<String>,
}

impl From<LegacyRecord> for MemorialRecord {
    fn from(legacy: LegacyRecord) -> Self {
        MemorialRecord {
            id: String::new(),
            name: legacy.name,
            is_male: legacy.is_male,
            date_of_death: legacy.date.filter(|d| !d.trim().is_empty()),
            hebrew_date_of_death: legacy.hebrew_date,
            display_template: DisplayTemplate::Simple,
            photo_url: None,
            tribute: None,
        }
    }
}

impl MemorialStore {
    /// Creates a store at the current version.
    pub fn new(records: Vec<MemorialRecord>) -> Self {
        Self {
            version: CURRENT_STORE_VERSION,
            records,
        }
    }

    /// Parses a store, migrating older layouts.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        let records = match serde_json::from_str(s)? {
            StoreRaw::Versioned { version, records } if version == CURRENT_STORE_VERSION => {
                records
            }
            StoreRaw::Versioned { version, .. } => {
                return Err(Error::UnsupportedStoreVersion(version));
            }
            StoreRaw::Legacy(records) => {
                tracing::warn!(count = records.len(), "migrating legacy memorial store");
                records.into_iter().map(MemorialRecord::from).collect()
            }
        };

        Ok(Self::new(assign_ids(records)))
    }

    /// Serializes the store as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and migrates the store at `path`.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).await.map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let store = Self::from_json(&content)?;
        tracing::debug!(count = store.records.len(), "loaded memorial records");
        Ok(store)
    }

    /// Writes the store to `path` in the current layout.
    #[tracing::instrument(skip(self))]
    pub async fn save(&self, path: &Path) -> Result<(), Error> {
        let content = self.to_json()?;
        fs::write(path, content).await.map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })
    }
}

/// Reads the records of the store at `path`.
pub async fn load_records(path: &Path) -> Result<Vec<MemorialRecord>, Error> {
    MemorialStore::load(path).await.map(|store| store.records)
}

/// Gives every record a unique, non-blank id.
fn assign_ids(mut records: Vec<MemorialRecord>) -> Vec<MemorialRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in &mut records {
        if record.id.trim().is_empty() || !seen.insert(record.id.clone()) {
            if !record.id.trim().is_empty() {
                tracing::warn!(id = %record.id, "duplicate memorial id, assigning a new one");
            }
            record.id = Uuid::new_v4().to_string();
            seen.insert(record.id.clone());
        }
    }
    records
}
