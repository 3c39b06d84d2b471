//! Card filtering, search and autocomplete.

use crate::types::{Card, GRAMMAR_CATEGORY};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Value of a filter drop-down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a drop-down value where `"all"` selects everything.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => Self::All,
            other => Self::Only(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(value) => value,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Search text plus category and level filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub search: String,
    pub category: Selection,
    pub level: Selection,
}

impl Query {
    /// Build a query from raw UI values.
    pub fn new(search: &str, category: &str, level: &str) -> Self {
        Self {
            search: search.to_string(),
            category: Selection::parse(category),
            level: Selection::parse(level),
        }
    }

    /// Whether a single card passes all three predicates.
    pub fn matches(&self, card: &Card) -> bool {
        self.matches_with(card, &self.needle())
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    fn matches_with(&self, card: &Card, needle: &str) -> bool {
        self.matches_category(card) && self.matches_level(card) && matches_search(card, needle)
    }

    fn matches_category(&self, card: &Card) -> bool {
        match &self.category {
            Selection::All => true,
            Selection::Only(category) if category == GRAMMAR_CATEGORY => card.is_grammar(),
            Selection::Only(category) => card
                .usages()
                .iter()
                .any(|u| u.category.as_deref() == Some(category.as_str())),
        }
    }

    // Grammar cards have no level, so any specific level excludes them.
    fn matches_level(&self, card: &Card) -> bool {
        match &self.level {
            Selection::All => true,
            Selection::Only(level) => card.level() == Some(level.as_str()),
        }
    }
}

/// `needle` must already be trimmed and lowercased.
fn matches_search(card: &Card, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(card.identity())
        || card.usages().iter().any(|u| {
            u.meaning.values().any(contains)
                || u.notes.as_ref().is_some_and(|n| n.values().any(contains))
                || u.form_values().any(contains)
        })
}

/// Cards matching the query, borrowed, in input order.
pub fn filter<'a>(cards: &'a [Card], query: &Query) -> Vec<&'a Card> {
    let needle = query.needle();
    cards
        .iter()
        .filter(|card| query.matches_with(card, &needle))
        .collect()
}

/// Cards matching the query, in input order.
pub fn query(cards: &[Card], query: &Query) -> Vec<Card> {
    filter(cards, query).into_iter().cloned().collect()
}

/// Autocomplete candidates containing `text`, drawn from every word and form
/// in the dataset.
///
/// The order of the result is unspecified.
pub fn suggest(cards: &[Card], text: &str, limit: usize) -> Vec<String> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    cards
        .iter()
        .filter_map(Card::as_lexical)
        .flat_map(|card| {
            std::iter::once(card.word.as_str())
                .chain(card.usages.iter().flat_map(|u| u.form_values()))
        })
        .filter(|candidate| !candidate.is_empty() && seen.insert(*candidate))
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Sorted category options: every usage category, plus `grammar` when the
/// dataset has grammar cards.
pub fn categories(cards: &[Card]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for card in cards {
        match card {
            Card::Grammar(_) => {
                set.insert(GRAMMAR_CATEGORY);
            }
            Card::Lexical(l) => set.extend(l.usages.iter().filter_map(|u| u.category.as_deref())),
        }
    }
    set.into_iter().map(str::to_string).collect()
}

/// Sorted distinct levels.
pub fn levels(cards: &[Card]) -> Vec<String> {
    cards
        .iter()
        .filter_map(Card::level)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
