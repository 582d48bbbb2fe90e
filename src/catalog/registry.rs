//! Miniature registry: runs the makers and indexes their records by key

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::error::CatalogError;

use super::makers::Maker;
use super::miniature::Miniature;
use super::naming::{kind_for_maker, MAKER_PREFIX};

/// A miniature together with the metadata the catalog assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Snake-case name of the producing maker
    pub kind: String,
    /// Unique key, `<kind>_<index>`
    pub key: String,
    #[serde(flatten)]
    pub miniature: Miniature,
}

impl CatalogEntry {
    /// Format the entry using the given display options
    pub fn fmt_with(&self, config: &DisplayConfig) -> String {
        let parts = [
            ("kind", format!("\"{}\"", self.kind)),
            ("key", self.key.clone()),
            ("material", config.label(self.miniature.material.label())),
            ("paint", config.label(self.miniature.paint.label())),
            ("built", config.label(self.miniature.built.label())),
        ];
        let body = parts
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\t");
        format!("{{ {} }}", body)
    }
}

/// TOML document listing entries as an array of `[[miniature]]` tables
#[derive(Serialize)]
struct TomlExport<'a> {
    miniature: Vec<&'a CatalogEntry>,
}

/// Serialize entries to TOML
pub fn entries_to_toml<'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry>,
) -> Result<String, toml::ser::Error> {
    toml::to_string(&TomlExport {
        miniature: entries.into_iter().collect(),
    })
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt_with(&DisplayConfig::default()))
    }
}

/// Read-only catalog of every miniature the makers produced
///
/// Entries keep maker declaration order, then the order each maker yielded them.
#[derive(Debug, Default)]
pub struct MiniatureDb {
    entries: Vec<CatalogEntry>,
    by_key: HashMap<String, usize>,
}

impl MiniatureDb {
    /// Run every maker and register what it yields
    ///
    /// Makers whose name lacks [`MAKER_PREFIX`] are not producers and are skipped.
    /// Keys are numbered per maker, starting at zero.
    pub fn build(makers: &[Maker]) -> Result<Self, CatalogError> {
        let mut db = Self::default();

        for maker in makers {
            let Some(kind) = kind_for_maker(maker.name) else {
                warn!(
                    maker = maker.name,
                    "skipping maker without '{}' prefix", MAKER_PREFIX
                );
                continue;
            };

            let mut count = 0usize;
            for (index, miniature) in maker.produce().enumerate() {
                let entry = CatalogEntry {
                    kind: kind.clone(),
                    key: format!("{}_{}", kind, index),
                    miniature: miniature?,
                };
                db.insert(entry)?;
                count += 1;
            }
            debug!(kind = %kind, count, "registered maker");
        }

        Ok(db)
    }

    fn insert(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if self.by_key.contains_key(&entry.key) {
            return Err(CatalogError::duplicate(entry.key));
        }
        debug!(key = %entry.key, "registered miniature");
        self.by_key.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Result<&CatalogEntry, CatalogError> {
        self.by_key
            .get(key)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| CatalogError::not_found(key))
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// All entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Entries produced by one maker, in yield order
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Distinct kinds in registration order
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if kinds.last() != Some(&entry.kind.as_str()) {
                kinds.push(&entry.kind);
            }
        }
        kinds
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MiniatureDb {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
