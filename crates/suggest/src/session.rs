//! Autocomplete state for a food-name text input.
//!
//! The session owns what the input shows: the typed text, the current
//! suggestion list, and whether that list is open. Picking a suggestion
//! writes its name into the text, notifies the listener once, and closes the
//! list in the same step, so a stale list is never visible.
//!
//! ```
//! use meallog_suggest::{AutocompleteSession, FoodEntry};
//!
//! let catalog = vec![FoodEntry::new("1", "Oatmeal").with_frequency(4)];
//! let mut session = AutocompleteSession::default();
//!
//! session.on_text_change("oat", &catalog);
//! assert!(session.is_visible());
//!
//! let picked = session.select(0).unwrap();
//! assert_eq!(picked.id, "1");
//! assert_eq!(session.text(), "Oatmeal");
//! assert!(!session.is_visible());
//! ```

use crate::{FoodEntry, SuggestionRanker};
use std::fmt;

type SelectionListener = Box<dyn FnMut(&FoodEntry)>;

/// Text input state with a dismissible suggestion list.
#[derive(Default)]
pub struct AutocompleteSession {
    ranker: SuggestionRanker,
    text: String,
    suggestions: Vec<FoodEntry>,
    visible: bool,
    listener: Option<SelectionListener>,
}

impl AutocompleteSession {
    /// Creates an empty session ranking with `ranker`.
    pub fn new(ranker: SuggestionRanker) -> Self {
        Self {
            ranker,
            ..Self::default()
        }
    }

    /// Registers the callback invoked once per selection. Replaces any earlier one.
    pub fn on_select(&mut self, listener: impl FnMut(&FoodEntry) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Stores the new text and refreshes suggestions from `catalog`.
    ///
    /// The list is shown only when it has at least one entry.
    pub fn on_text_change(&mut self, text: impl Into<String>, catalog: &[FoodEntry]) -> &[FoodEntry] {
        self.text = text.into();
        self.suggestions = self
            .ranker
            .rank(&self.text, catalog)
            .into_iter()
            .cloned()
            .collect();
        self.visible = !self.suggestions.is_empty();
        &self.suggestions
    }

    /// Applies the suggestion at `index`.
    ///
    /// Returns `None` and changes nothing when `index` is out of range or the
    /// list is closed.
    pub fn select(&mut self, index: usize) -> Option<FoodEntry> {
        if !self.visible || index >= self.suggestions.len() {
            return None;
        }
        let entry = self.suggestions.swap_remove(index);
        self.apply(entry)
    }

    /// Applies the first visible suggestion with the given id.
    pub fn select_id(&mut self, id: &str) -> Option<FoodEntry> {
        let index = self.suggestions.iter().position(|e| e.id == id)?;
        self.select(index)
    }

    fn apply(&mut self, entry: FoodEntry) -> Option<FoodEntry> {
        self.text.clone_from(&entry.name);
        self.dismiss();

        tracing::debug!(id = %entry.id, name = %entry.name, "Suggestion selected");
        if let Some(listener) = self.listener.as_mut() {
            listener(&entry);
        }
        Some(entry)
    }

    /// Closes and clears the list without touching the text.
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
        self.visible = false;
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Suggestions currently shown, empty when closed.
    pub fn suggestions(&self) -> &[FoodEntry] {
        if self.visible { &self.suggestions[..] } else { &[] }
    }

    /// Whether the suggestion list is open.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl fmt::Debug for AutocompleteSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteSession")
            .field("ranker", &self.ranker)
            .field("text", &self.text)
            .field("suggestions", &self.suggestions)
            .field("visible", &self.visible)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
