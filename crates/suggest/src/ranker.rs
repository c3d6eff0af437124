//! Configured ranking front end.

use crate::rank::rank_with;
use crate::FoodEntry;
use meallog_core::config::SuggestConfig;
use meallog_core::Result;

/// Ranks suggestions with validated settings.
///
/// Settings are checked once in [`SuggestionRanker::new`]; ranking itself
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuggestionRanker {
    config: SuggestConfig,
}

impl SuggestionRanker {
    /// Creates a ranker, rejecting out-of-range settings.
    ///
    /// # Errors
    /// Returns an `InvalidConfigValue` error naming every bad field.
    pub fn new(config: SuggestConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            limit = config.limit,
            min_query_chars = config.min_query_chars,
            "Suggestion ranker configured"
        );
        Ok(Self { config })
    }

    /// The settings this ranker was built with.
    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Ranks with the configured limit.
    pub fn rank<'a>(&self, query: &str, catalog: &'a [FoodEntry]) -> Vec<&'a FoodEntry> {
        self.rank_with_limit(query, catalog, self.config.limit)
    }

    /// Ranks with a per-call limit.
    pub fn rank_with_limit<'a>(
        &self,
        query: &str,
        catalog: &'a [FoodEntry],
        limit: usize,
    ) -> Vec<&'a FoodEntry> {
        rank_with(query, catalog, limit, self.config.min_query_chars)
    }
}
