//! Ranking of catalog entries against a typed query.

use crate::FoodEntry;
use meallog_core::config::MIN_QUERY_CHARS;
use unicode_segmentation::UnicodeSegmentation;

/// Catalogs at least this large are filtered on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 2048;

/// How a name matched the query. Earlier variants rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Name starts with the query
    Prefix,
    /// Name contains the query somewhere after the start
    Substring,
}

/// Trim and lower-case a query, or `None` if it is too short to suggest for.
pub fn normalize_query(query: &str) -> Option<String> {
    normalize_query_with(query, MIN_QUERY_CHARS)
}

/// Like [`normalize_query`] with a custom minimum length in characters.
///
/// Trimming strips Unicode whitespace and the byte-order mark U+FEFF. Length
/// is counted in grapheme clusters, not UTF-16 code units, so `"🍌"` and
/// `"e\u{301}"` are each one character and too short to suggest for.
pub fn normalize_query_with(query: &str, min_chars: usize) -> Option<String> {
    let trimmed = query.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.graphemes(true).count() < min_chars {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Classify `name` against an already-normalized query.
pub fn match_tier(name: &str, normalized_query: &str) -> Option<MatchTier> {
    let name = name.to_lowercase();
    if name.starts_with(normalized_query) {
        Some(MatchTier::Prefix)
    } else if name.contains(normalized_query) {
        Some(MatchTier::Substring)
    } else {
        None
    }
}

/// Rank catalog entries for an autocomplete query.
///
/// Entries whose name contains the trimmed query (case-insensitive) are
/// returned prefix matches first, then by descending frequency. Entries equal
/// on both keys keep their catalog order. At most `limit` entries are returned.
///
/// Queries shorter than two characters after trimming, and a `limit` of zero,
/// return nothing.
///
/// # Example
/// ```
/// use meallog_suggest::{rank, FoodEntry};
///
/// let catalog = vec![
///     FoodEntry::new("1", "banana").with_frequency(12),
///     FoodEntry::new("2", "banana bread").with_frequency(5),
/// ];
/// assert_eq!(rank("BAN ", &catalog, 1)[0].name, "banana");
/// assert!(rank("b", &catalog, 5).is_empty());
/// ```
pub fn rank<'a>(query: &str, catalog: &'a [FoodEntry], limit: usize) -> Vec<&'a FoodEntry> {
    rank_with(query, catalog, limit, MIN_QUERY_CHARS)
}

pub(crate) fn rank_with<'a>(
    query: &str,
    catalog: &'a [FoodEntry],
    limit: usize,
    min_chars: usize,
) -> Vec<&'a FoodEntry> {
    if limit == 0 {
        return Vec::new();
    }
    let Some(needle) = normalize_query_with(query, min_chars) else {
        return Vec::new();
    };

    let mut matches = collect_matches(&needle, catalog);

    // sort_by is stable, so catalog order survives for equal keys
    matches.sort_by(|(tier_a, a), (tier_b, b)| {
        tier_a
            .cmp(tier_b)
            .then_with(|| b.frequency.cmp(&a.frequency))
    });

    let matched = matches.len();
    matches.truncate(limit);

    tracing::trace!(
        query = %needle,
        catalog = catalog.len(),
        matched,
        returned = matches.len(),
        "Ranked suggestions"
    );

    matches.into_iter().map(|(_, entry)| entry).collect()
}

fn collect_matches<'a>(needle: &str, catalog: &'a [FoodEntry]) -> Vec<(MatchTier, &'a FoodEntry)> {
    #[cfg(feature = "parallel")]
    {
        if catalog.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            // indexed collect keeps catalog order
            return catalog
                .par_iter()
                .filter_map(|entry| match_tier(&entry.name, needle).map(|tier| (tier, entry)))
                .collect();
        }
    }

    catalog
        .iter()
        .filter_map(|entry| match_tier(&entry.name, needle).map(|tier| (tier, entry)))
        .collect()
}

/// Convert a signed limit from an untyped boundary into a result count.
///
/// Zero and negative values mean "no results".
pub fn clamp_limit(raw: i64) -> usize {
    if raw <= 0 {
        0
    } else {
        usize::try_from(raw).unwrap_or(usize::MAX)
    }
}

/// Convert a floating limit (e.g. from JavaScript) into a result count.
///
/// NaN, zero, and negative values mean "no results"; fractions round down.
pub fn clamp_limit_f64(raw: f64) -> usize {
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= usize::MAX as f64 {
        usize::MAX
    } else {
        raw.floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<FoodEntry> {
        vec![
            FoodEntry::new("1", "banana").with_frequency(12),
            FoodEntry::new("2", "banana pancakes").with_frequency(8),
            FoodEntry::new("3", "banana bread").with_frequency(5),
            FoodEntry::new("4", "pancakes").with_frequency(15),
        ]
    }

    fn names<'a>(entries: &[&'a FoodEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_prefix_matches_by_frequency() {
        let catalog = catalog();
        assert_eq!(
            names(&rank("ban", &catalog, 5)),
            ["banana", "banana pancakes", "banana bread"]
        );
    }

    #[test]
    fn test_prefix_tier_beats_frequency() {
        let catalog = catalog();
        assert_eq!(names(&rank("pan", &catalog, 5)), ["pancakes", "banana pancakes"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let catalog = catalog();
        assert_eq!(names(&rank("banana", &catalog, 2)), ["banana", "banana pancakes"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(rank("xyz", &catalog(), 5).is_empty());
    }

    #[test]
    fn test_short_query() {
        assert!(rank("b", &catalog(), 5).is_empty());
        assert!(rank(" b  ", &catalog(), 5).is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_query() {
        assert!(rank("", &catalog(), 5).is_empty());
        assert!(rank("   ", &catalog(), 5).is_empty());
        assert!(rank("\t\n", &catalog(), 5).is_empty());
    }

    #[test]
    fn test_zero_limit() {
        assert!(rank("ban", &catalog(), 0).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(rank("banana", &[], 5).is_empty());
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let catalog = vec![FoodEntry::new("1", "Greek Yogurt").with_frequency(2)];
        assert_eq!(names(&rank("  gREEK ", &catalog, 5)), ["Greek Yogurt"]);
        assert_eq!(names(&rank("YOG", &catalog, 5)), ["Greek Yogurt"]);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let catalog = catalog();
        assert_eq!(names(&rank("a p", &catalog, 5)), ["banana pancakes"]);
    }

    #[test]
    fn test_equal_keys_keep_catalog_order() {
        let catalog = vec![
            FoodEntry::new("a", "rice bowl").with_frequency(3),
            FoodEntry::new("b", "rice cakes").with_frequency(3),
            FoodEntry::new("c", "fried rice").with_frequency(9),
            FoodEntry::new("d", "rice noodles").with_frequency(3),
        ];
        let ids: Vec<&str> = rank("rice", &catalog, 10).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "d", "c"]);
    }

    #[test]
    fn test_duplicates_ranked_independently() {
        let catalog = vec![
            FoodEntry::new("1", "toast").with_frequency(1),
            FoodEntry::new("2", "toast").with_frequency(7),
        ];
        let ids: Vec<&str> = rank("toast", &catalog, 5).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_fewer_matches_than_limit() {
        let catalog = catalog();
        assert_eq!(rank("bread", &catalog, 10).len(), 1);
    }

    #[test]
    fn test_match_tier() {
        assert_eq!(match_tier("Pancakes", "pan"), Some(MatchTier::Prefix));
        assert_eq!(match_tier("Banana Pancakes", "pan"), Some(MatchTier::Substring));
        assert_eq!(match_tier("Toast", "pan"), None);
        assert!(MatchTier::Prefix < MatchTier::Substring);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  BaN "), Some("ban".to_string()));
        assert_eq!(normalize_query(" x "), None);
        assert_eq!(normalize_query_with("abc", 4), None);
        assert_eq!(normalize_query_with("abcd", 4), Some("abcd".to_string()));
    }

    #[test]
    fn test_normalize_counts_graphemes() {
        // "e" + combining acute accent is one character on screen
        assert_eq!(normalize_query("e\u{301}"), None);
        assert_eq!(normalize_query("\u{1f34c}"), None);
        assert!(normalize_query("ca").is_some());
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(normalize_query("\u{feff} La\u{feff}"), Some("la".to_string()));
        assert_eq!(normalize_query("\u{feff}b"), None);

        let catalog = vec![FoodEntry::new("1", "cafe\u{301} latte").with_frequency(3)];
        assert_eq!(names(&rank("\u{feff}la", &catalog, 5)), ["cafe\u{301} latte"]);
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(-3), 0);
        assert_eq!(clamp_limit(0), 0);
        assert_eq!(clamp_limit(4), 4);
    }

    #[test]
    fn test_clamp_limit_f64() {
        assert_eq!(clamp_limit_f64(f64::NAN), 0);
        assert_eq!(clamp_limit_f64(-1.5), 0);
        assert_eq!(clamp_limit_f64(0.9), 0);
        assert_eq!(clamp_limit_f64(2.7), 2);
        assert_eq!(clamp_limit_f64(f64::INFINITY), usize::MAX);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_large_catalog_matches_sequential_order() {
        let catalog: Vec<FoodEntry> = (0..PARALLEL_THRESHOLD * 2)
            .map(|i| {
                let name = if i % 3 == 0 { format!("soup {i}") } else { format!("hot soup {i}") };
                FoodEntry::new(i.to_string(), name).with_frequency((i % 7) as u32)
            })
            .collect();

        let ranked = rank("soup", &catalog, catalog.len());
        let expected: Vec<&FoodEntry> = {
            let mut all: Vec<(MatchTier, &FoodEntry)> = catalog
                .iter()
                .filter_map(|e| match_tier(&e.name, "soup").map(|t| (t, e)))
                .collect();
            all.sort_by(|(ta, a), (tb, b)| ta.cmp(tb).then_with(|| b.frequency.cmp(&a.frequency)));
            all.into_iter().map(|(_, e)| e).collect()
        };
        assert_eq!(ranked, expected);
    }
}
