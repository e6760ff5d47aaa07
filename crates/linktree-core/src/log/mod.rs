//! Lookup side of the resource log: what has been fetched, keyed by URL.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::Representation;
use crate::{Error, Result};


pub const SUB_TYPE_JSON: &str = "json";
pub const KIND_PROPERTY_DESCRIPTION: &str = "property-description";

fn default_sub_type() -> String {
    SUB_TYPE_JSON.to_string()
}

/// Lookup key for the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceSpecification {
    pub url: String,
    pub sub_type: String,
}

impl ResourceSpecification {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sub_type: default_sub_type(),
        }
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = sub_type.into();
        self
    }
}

impl From<&str> for ResourceSpecification {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

/// A previously fetched representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub url: String,
    #[serde(default = "default_sub_type")]
    pub sub_type: String,
    /// Representation kind tag, e.g. `object` or `property-description`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub obj: Option<Representation>,
}

impl LogEntry {
    pub fn new(url: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sub_type: default_sub_type(),
            kind: kind.into(),
            obj: None,
        }
    }

    pub fn with_obj(mut self, obj: Representation) -> Self {
        self.obj = Some(obj);
        self
    }

    pub fn spec(&self) -> ResourceSpecification {
        ResourceSpecification {
            url: self.url.clone(),
            sub_type: self.sub_type.clone(),
        }
    }
}

pub trait ResourceLog {
    /// Most recent entry for `spec`. `None` is an ordinary answer.
    fn find_by(&self, spec: &ResourceSpecification) -> Option<&LogEntry>;
}

/// Append-only in-memory log. Later entries for the same specification shadow earlier ones.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    entries: Vec<LogEntry>,
    latest: FxHashMap<ResourceSpecification, usize>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: LogEntry) {
        let idx = self.entries.len();
        self.latest.insert(entry.spec(), idx);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a JSON array of entries, in log order.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_array() {
            return Err(Error::InvalidSnapshot {
                message: "resource log must be a JSON array of entries".to_string(),
            });
        }
        let entries: Vec<LogEntry> = serde_json::from_value(value)?;
        Ok(entries.into_iter().collect())
    }
}

impl FromIterator<LogEntry> for EventStore {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        let mut store = Self::new();
        for entry in iter {
            store.add(entry);
        }
        store
    }
}

impl ResourceLog for EventStore {
    fn find_by(&self, spec: &ResourceSpecification) -> Option<&LogEntry> {
        let idx = *self.latest.get(spec)?;
        self.entries.get(idx)
    }
}

impl ResourceLog for [LogEntry] {
    fn find_by(&self, spec: &ResourceSpecification) -> Option<&LogEntry> {
        self.iter()
            .rev()
            .find(|e| e.url == spec.url && e.sub_type == spec.sub_type)
    }
}
