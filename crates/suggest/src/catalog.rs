//! Food catalogs loaded from JSON.

use crate::{FoodEntry, SuggestionRanker};
use chrono::{DateTime, Utc};
use meallog_core::validation::{ValidationResult, Validator};
use meallog_core::{Error, ErrorCode, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered collection of food entries.
///
/// Order matters: entries that tie on match tier and frequency are suggested
/// in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<FoodEntry>,
}

impl Catalog {
    /// Wraps entries without validating them.
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        Self { entries }
    }

    /// Parses a JSON array of entries and validates it.
    ///
    /// # Errors
    /// `CatalogParseError` for malformed JSON, `InvalidEntry` for blank ids or names.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads and validates a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)
            .context(format!("Loading catalog {}", path.display()))?;

        tracing::debug!(path = %path.display(), entries = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Checks every entry, collecting all problems.
    pub fn validation(&self) -> ValidationResult {
        let mut validator = Validator::new().warn_if("catalog", self.is_empty(), "Catalog is empty");
        for (i, entry) in self.entries.iter().enumerate() {
            validator = validator
                .required(&format!("entries[{i}].id"), &entry.id)
                .required(&format!("entries[{i}].name"), &entry.name);
        }
        validator.validate()
    }

    /// Validates every entry.
    pub fn validate(&self) -> Result<()> {
        self.validation()
            .to_result_with(ErrorCode::InvalidEntry)
            .with_suggestion("Every food entry needs a non-empty id and name")
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with the given id.
    pub fn get(&self, id: &str) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Notes that the food with `id` was logged at `at`.
    ///
    /// Bumps the first matching entry's frequency and sets its last-used time.
    /// Returns false if no entry has that id.
    pub fn record_use(&mut self, id: &str, at: DateTime<Utc>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.frequency = entry.frequency.saturating_add(1);
                entry.last_used = Some(at);
                true
            }
            None => false,
        }
    }

    /// Suggestions for `query` using a configured ranker.
    pub fn suggest(&self, ranker: &SuggestionRanker, query: &str) -> Vec<&FoodEntry> {
        ranker.rank(query, &self.entries)
    }
}

impl AsRef<[FoodEntry]> for Catalog {
    fn as_ref(&self) -> &[FoodEntry] {
        &self.entries
    }
}

impl From<Vec<FoodEntry>> for Catalog {
    fn from(entries: Vec<FoodEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<FoodEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = FoodEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FoodEntry;
    type IntoIter = std::slice::Iter<'a, FoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
