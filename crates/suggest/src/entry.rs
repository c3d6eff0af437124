//! Catalog records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A food the family has logged before.
///
/// Only `name` takes part in matching; `frequency` orders matches.
/// `category` and `last_used` are carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    /// Stable identifier of the logical food item
    pub id: String,
    /// Display label, matched case-insensitively
    pub name: String,
    /// Optional tag such as "breakfast"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// How often this food has been logged
    #[serde(default)]
    pub frequency: u32,
    /// When this food was last logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl FoodEntry {
    /// Creates an entry with zero frequency and no category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            frequency: 0,
            last_used: None,
        }
    }

    /// Sets the usage frequency.
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the last-used timestamp.
    pub fn with_last_used(mut self, at: DateTime<Utc>) -> Self {
        self.last_used = Some(at);
        self
    }
}
