//! Canonical card types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category derived for every grammar card.
pub const GRAMMAR_CATEGORY: &str = "grammar";

/// Locale used when a requested translation is missing.
pub const FALLBACK_LOCALE: &str = "en";

/// Text keyed by language code.
///
/// Legacy plain strings are stored under [`FALLBACK_LOCALE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a legacy plain string as `{ "en": value }`.
    pub fn plain(value: impl Into<String>) -> Self {
        let mut text = Self::new();
        text.insert(FALLBACK_LOCALE, value);
        text
    }

    pub fn insert(&mut self, locale: impl Into<String>, value: impl Into<String>) {
        self.0.insert(locale.into(), value.into());
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Resolve for display: requested locale, then "en", then empty.
    pub fn resolve(&self, locale: &str) -> &str {
        self.get(locale)
            .or_else(|| self.get(FALLBACK_LOCALE))
            .unwrap_or("")
    }

    /// All translations regardless of locale.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

/// One row of a forms or conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub form: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<LocalizedText>,
}

impl FormEntry {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            example: None,
            translation: None,
        }
    }
}

/// Named form entries in dataset order (form name or pronoun -> entry).
pub type FormTable = Vec<(String, FormEntry)>;

/// One sense / part of speech of a lexical card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub primary: bool,
    pub meaning: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forms: FormTable,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conjugation: FormTable,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl Usage {
    /// Every `form` value from both the forms and conjugation tables.
    pub fn form_values(&self) -> impl Iterator<Item = &str> {
        self.forms
            .iter()
            .chain(self.conjugation.iter())
            .map(|(_, entry)| entry.form.as_str())
    }
}

/// A grammar-point card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarCard {
    pub title: String,
    pub description: String,
    pub example: String,
}

/// A word card with one or more usages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalCard {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default)]
    pub usages: Vec<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyphenation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
}

impl LexicalCard {
    /// The usage treated as primary: the first one marked, else the first one.
    pub fn primary_usage(&self) -> Option<&Usage> {
        self.usages
            .iter()
            .find(|u| u.primary)
            .or_else(|| self.usages.first())
    }

    /// Usages with the primary one moved to the front, others in order.
    pub fn usages_primary_first(&self) -> Vec<&Usage> {
        let primary = self.primary_usage();
        let mut ordered: Vec<&Usage> = primary.into_iter().collect();
        ordered.extend(
            self.usages
                .iter()
                .filter(|u| !primary.is_some_and(|p| std::ptr::eq(*u, p))),
        );
        ordered
    }
}

/// Canonical flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Card {
    Grammar(GrammarCard),
    Lexical(LexicalCard),
}

impl Card {
    /// Word for lexical cards, title for grammar cards.
    pub fn identity(&self) -> &str {
        match self {
            Self::Grammar(g) => &g.title,
            Self::Lexical(l) => &l.word,
        }
    }

    /// Category used for filtering and coloring.
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Grammar(_) => Some(GRAMMAR_CATEGORY),
            Self::Lexical(l) => l.primary_usage().and_then(|u| u.category.as_deref()),
        }
    }

    /// Top-level level. Grammar cards never have one.
    pub fn level(&self) -> Option<&str> {
        match self {
            Self::Grammar(_) => None,
            Self::Lexical(l) => l.level.as_deref(),
        }
    }

    pub fn audio(&self) -> Option<&str> {
        match self {
            Self::Grammar(_) => None,
            Self::Lexical(l) => l.audio.as_deref(),
        }
    }

    pub fn is_grammar(&self) -> bool {
        matches!(self, Self::Grammar(_))
    }

    pub fn as_lexical(&self) -> Option<&LexicalCard> {
        match self {
            Self::Lexical(l) => Some(l),
            Self::Grammar(_) => None,
        }
    }

    /// Usages of the card; empty for grammar cards.
    pub fn usages(&self) -> &[Usage] {
        match self {
            Self::Lexical(l) => &l.usages,
            Self::Grammar(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usage(category: &str, primary: bool) -> Usage {
        Usage {
            category: Some(category.to_string()),
            primary,
            ..Usage::default()
        }
    }

    #[test]
    fn resolve_falls_back_to_english_then_empty() {
        let mut text = LocalizedText::plain("house");
        text.insert("nl", "huis");
        assert_eq!(text.resolve("nl"), "huis");
        assert_eq!(text.resolve("fr"), "house");

        let mut dutch_only = LocalizedText::new();
        dutch_only.insert("nl", "huis");
        assert_eq!(dutch_only.resolve("fr"), "");
        assert_eq!(LocalizedText::new().resolve("en"), "");
    }

    #[test]
    fn primary_usage_is_first_marked() {
        let card = LexicalCard {
            word: "lopen".into(),
            usages: vec![usage("noun", false), usage("verb", true), usage("adverb", true)],
            ..LexicalCard::default()
        };
        assert_eq!(card.primary_usage().unwrap().category.as_deref(), Some("verb"));
    }

    #[test]
    fn primary_usage_defaults_to_first() {
        let card = LexicalCard {
            word: "lopen".into(),
            usages: vec![usage("noun", false), usage("verb", false)],
            ..LexicalCard::default()
        };
        assert_eq!(card.primary_usage().unwrap().category.as_deref(), Some("noun"));
        assert!(LexicalCard::default().primary_usage().is_none());
    }

    #[test]
    fn usages_primary_first_keeps_others_in_order() {
        let card = LexicalCard {
            word: "x".into(),
            usages: vec![usage("a", false), usage("b", false), usage("c", true)],
            ..LexicalCard::default()
        };
        let order: Vec<_> = card
            .usages_primary_first()
            .iter()
            .map(|u| u.category.clone().unwrap())
            .collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn category_is_derived() {
        let grammar = Card::Grammar(GrammarCard {
            title: "De/het".into(),
            ..GrammarCard::default()
        });
        assert_eq!(grammar.category(), Some(GRAMMAR_CATEGORY));
        assert_eq!(grammar.level(), None);

        let lexical = Card::Lexical(LexicalCard {
            word: "huis".into(),
            usages: vec![usage("noun", false)],
            ..LexicalCard::default()
        });
        assert_eq!(lexical.category(), Some("noun"));
    }

    #[test]
    fn card_serializes_with_type_tag() {
        let card = Card::Grammar(GrammarCard {
            title: "Inversion".into(),
            ..GrammarCard::default()
        });
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["type"], "grammar");
        assert_eq!(json["title"], "Inversion");
    }
}
