use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::DataLoadError;

/// One dataset record. The source format keys the description as `"d"`;
/// any other metadata in the record is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogEntry {
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Code → description mapping. Codes are stored uppercase, in the order
/// the dataset lists them; every lookup normalizes its argument the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosisCatalog {
    entries: Vec<(String, CatalogEntry)>,
    index: HashMap<String, usize>,
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

impl DiagnosisCatalog {
    /// A catalog that answers every lookup with "not found".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a dataset of the form `{"I63": {"d": "Mozkový infarkt"}, ...}`.
    ///
    /// Two keys that only differ in case name the same code and are
    /// rejected as [`DataLoadError::DuplicateCode`].
    pub fn from_json(json: &str) -> Result<Self, DataLoadError> {
        // serde_json keeps document order (`preserve_order`)
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut catalog = Self::default();
        for (code, value) in raw {
            let entry: CatalogEntry = serde_json::from_value(value)?;
            if let Err(code) = catalog.insert(&code, entry) {
                return Err(DataLoadError::DuplicateCode(code));
            }
        }
        Ok(catalog)
    }

    /// Append `code` unless its normalized form is already present, in
    /// which case the normalized code is handed back.
    fn insert(&mut self, code: &str, entry: CatalogEntry) -> Result<(), String> {
        let code = normalize(code);
        if self.index.contains_key(&code) {
            return Err(code);
        }
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push((code, entry));
        Ok(())
    }

    fn entry(&self, code: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&normalize(code))
            .map(|&position| &self.entries[position].1)
    }

    /// Description for `code`, matched case-insensitively. `None` covers
    /// both unknown codes and records without a description.
    pub fn describe(&self, code: &str) -> Option<&str> {
        self.entry(code)
            .and_then(|entry| entry.description.as_deref())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(&normalize(code))
    }

    /// Every loaded code, in dataset order.
    pub fn all_codes(&self) -> Vec<&str> {
        self.entries.iter().map(|(code, _)| code.as_str()).collect()
    }

    /// Up to `limit` codes starting with `prefix` (case-insensitive), in
    /// catalog order. An empty prefix matches everything.
    pub fn complete(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = normalize(prefix);
        self.entries
            .iter()
            .filter(|(code, _)| code.starts_with(&prefix))
            .take(limit)
            .map(|(code, _)| code.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keeps the first entry for each normalized code.
impl FromIterator<(String, CatalogEntry)> for DiagnosisCatalog {
    fn from_iter<T: IntoIterator<Item = (String, CatalogEntry)>>(iter: T) -> Self {
        let mut catalog = Self::default();
        for (code, entry) in iter {
            if let Err(code) = catalog.insert(&code, entry) {
                tracing::warn!(code = %code, "duplicate diagnosis code ignored");
            }
        }
        catalog
    }
}
