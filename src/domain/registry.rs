//! Insertion-ordered mapping from short identifier to link record.
//!
//! The registry is the whole persisted document. It serializes as a single
//! JSON object keyed by short identifier, with keys in insertion order:
//!
//! ```json
//! {
//!   "abc123": {
//!     "originalUrl": "https://example.com",
//!     "createdAt": "2024-01-01T10:00:00Z",
//!     "clickCount": 1,
//!     "clickLog": [ { "timestamp": "...", "browser": "Chrome", ... } ]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::entities::{LinkRecord, LinkSummary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    records: Vec<LinkRecord>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, short_id: &str) -> bool {
        self.index.contains_key(short_id)
    }

    pub fn get(&self, short_id: &str) -> Option<&LinkRecord> {
        self.index.get(short_id).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, short_id: &str) -> Option<&mut LinkRecord> {
        self.index.get(short_id).map(|&i| &mut self.records[i])
    }

    /// Appends a record.
    ///
    /// Returns the record back as `Err` if its short identifier is taken;
    /// existing records are never replaced.
    pub fn insert(&mut self, record: LinkRecord) -> Result<(), LinkRecord> {
        if self.contains(&record.short_id) {
            return Err(record);
        }

        self.index.insert(record.short_id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LinkRecord> {
        self.records.iter()
    }

    pub fn summaries(&self) -> Vec<LinkSummary> {
        self.records.iter().map(LinkRecord::summary).collect()
    }

    pub fn total_clicks(&self) -> u64 {
        self.records.iter().map(LinkRecord::click_count).sum()
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.short_id, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Registry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = Registry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping short identifiers to link records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Registry, A::Error> {
        let mut registry = Registry::new();

        while let Some((short_id, mut record)) = access.next_entry::<String, LinkRecord>()? {
            if !record.is_consistent() {
                return Err(de::Error::custom(format!(
                    "link '{}' has clickCount {} but {} logged clicks",
                    short_id,
                    record.click_count(),
                    record.click_log().len()
                )));
            }

            record.short_id = short_id;
            if let Err(duplicate) = registry.insert(record) {
                return Err(de::Error::custom(format!(
                    "duplicate short identifier '{}'",
                    duplicate.short_id
                )));
            }
        }

        Ok(registry)
    }
}
