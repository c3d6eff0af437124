//! Food-name autocomplete for meal logging.
//!
//! This crate provides:
//! - Prefix-then-substring ranking with frequency ordering
//! - A validated, configurable [`SuggestionRanker`]
//! - JSON-backed food [`Catalog`] with in-memory usage tracking
//! - [`AutocompleteSession`] for applying a picked suggestion to a text input
//! - WASM bindings for browser usage (feature `wasm`)
//!
//! # Example
//!
//! ```
//! use meallog_suggest::{rank, FoodEntry};
//!
//! let catalog = vec![
//!     FoodEntry::new("1", "banana").with_frequency(12),
//!     FoodEntry::new("2", "banana pancakes").with_frequency(8),
//!     FoodEntry::new("3", "pancakes").with_frequency(15),
//! ];
//!
//! let names: Vec<&str> = rank("pan", &catalog, 5).iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["pancakes", "banana pancakes"]);
//! ```

mod catalog;
mod entry;
mod rank;
mod ranker;
pub mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::Catalog;
pub use entry::FoodEntry;
pub use rank::{
    clamp_limit, clamp_limit_f64, match_tier, normalize_query, normalize_query_with, rank,
    MatchTier,
};
pub use ranker::SuggestionRanker;
pub use session::AutocompleteSession;

pub use meallog_core::config::{SuggestConfig, MIN_QUERY_CHARS};
pub use meallog_core::{Error, Result};
