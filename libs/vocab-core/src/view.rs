//! Language-agnostic view models for the front and back of a card.
//!
//! Views are ordered lists of sections. Turning them into markup is the
//! caller's job.

use crate::types::{Card, FormTable, GrammarCard, LexicalCard, Usage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Translation tables: locale -> key -> text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable(HashMap<String, HashMap<String, String>>);

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `{ "en": { "key": "text" }, ... }` document.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn insert(&mut self, locale: &str, key: &str, text: &str) {
        self.0
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.0.get(locale)?.get(key).map(String::as_str)
    }

    /// Display label for `key`; falls back to the key itself, capitalized.
    pub fn label(&self, locale: &str, key: &str) -> String {
        self.get(locale, key)
            .map(str::to_string)
            .unwrap_or_else(|| capitalize(key))
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    /// Available locales, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.0.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One block of a card view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Heading {
        text: String,
    },
    Field {
        label: String,
        value: String,
    },
    List {
        label: String,
        items: Vec<String>,
    },
    Table {
        label: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Display structure for one side of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Lowercased category, used for coloring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    pub sections: Vec<Section>,
}

impl ViewModel {
    fn for_card(card: &Card) -> Self {
        Self {
            category: card.category().map(str::to_lowercase),
            audio: card.audio().map(str::to_string),
            sections: Vec::new(),
        }
    }

    fn heading(&mut self, text: impl Into<String>) {
        self.sections.push(Section::Heading { text: text.into() });
    }

    /// Adds a field unless `value` is empty.
    fn field(&mut self, label: String, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.sections.push(Section::Field { label, value });
        }
    }

    fn list(&mut self, label: String, items: &[String]) {
        if !items.is_empty() {
            self.sections.push(Section::List {
                label,
                items: items.to_vec(),
            });
        }
    }
}

/// Front of a card: the word (with article) or the grammar title.
pub fn front_view(card: &Card, locale: &str, t: &LocaleTable) -> ViewModel {
    let mut view = ViewModel::for_card(card);
    match card {
        Card::Grammar(g) => view.heading(g.title.as_str()),
        Card::Lexical(l) => {
            view.heading(l.word.as_str());
            view.field(t.label(locale, "article"), l.article.clone().unwrap_or_default());
            view.field(
                t.label(locale, "hyphenation"),
                l.hyphenation.clone().unwrap_or_default(),
            );
        }
    }
    view
}

/// Back of a card: meanings, forms, conjugation, examples and notes.
pub fn back_view(card: &Card, locale: &str, t: &LocaleTable) -> ViewModel {
    let mut view = ViewModel::for_card(card);
    match card {
        Card::Grammar(g) => grammar_back(&mut view, g, locale, t),
        Card::Lexical(l) => lexical_back(&mut view, l, locale, t),
    }
    view
}

/// Summary shown in the card list.
pub fn list_item_view(card: &Card, locale: &str, t: &LocaleTable) -> ViewModel {
    let mut view = ViewModel::for_card(card);
    match card {
        Card::Grammar(g) => {
            view.heading(g.title.as_str());
            view.field(t.label(locale, "description"), g.description.as_str());
        }
        Card::Lexical(l) => {
            match &l.article {
                Some(article) => view.heading(format!("{} {}", article, l.word)),
                None => view.heading(l.word.as_str()),
            }
            let meaning = l
                .primary_usage()
                .map(|u| u.meaning.resolve(locale))
                .unwrap_or_default();
            view.field(t.label(locale, "meaning"), meaning);
            view.field(t.label(locale, "level"), l.level.clone().unwrap_or_default());
        }
    }
    view
}

fn grammar_back(view: &mut ViewModel, card: &GrammarCard, locale: &str, t: &LocaleTable) {
    view.heading(card.title.as_str());
    view.field(t.label(locale, "description"), card.description.as_str());
    view.field(t.label(locale, "example"), card.example.as_str());
}

fn lexical_back(view: &mut ViewModel, card: &LexicalCard, locale: &str, t: &LocaleTable) {
    view.heading(card.word.as_str());
    view.field(t.label(locale, "level"), card.level.clone().unwrap_or_default());

    for (idx, usage) in card.usages_primary_first().into_iter().enumerate() {
        usage_sections(view, usage, idx == 0, locale, t);
    }

    view.field(t.label(locale, "synonyms"), card.synonyms.join(", "));
    view.field(t.label(locale, "antonyms"), card.antonyms.join(", "));
    view.field(t.label(locale, "derived"), card.derived_words.join(", "));
    view.field(
        t.label(locale, "etymology"),
        card.etymology.clone().unwrap_or_default(),
    );
}

fn usage_sections(view: &mut ViewModel, usage: &Usage, primary: bool, locale: &str, t: &LocaleTable) {
    let mut heading = match (&usage.category, &usage.title) {
        (Some(category), Some(title)) => format!("{} ({})", title, t.label(locale, category)),
        (Some(category), None) => t.label(locale, category),
        (None, Some(title)) => title.clone(),
        (None, None) => String::new(),
    };
    if primary {
        if !heading.is_empty() {
            heading.push(' ');
        }
        heading.push_str(&t.label(locale, "primary"));
    }
    if !heading.is_empty() {
        view.heading(heading);
    }

    view.field(t.label(locale, "meaning"), usage.meaning.resolve(locale));
    view.field(t.label(locale, "article"), usage.article.clone().unwrap_or_default());
    view.field(t.label(locale, "gender"), usage.gender.clone().unwrap_or_default());

    if !usage.forms.is_empty() {
        let columns = vec![
            t.label(locale, "form"),
            t.label(locale, "value"),
            t.label(locale, "example"),
        ];
        form_table(view, t.label(locale, "forms"), columns, &usage.forms, locale, t, true);
    }
    if !usage.conjugation.is_empty() {
        let columns = vec![
            t.label(locale, "pronoun"),
            t.label(locale, "form"),
            t.label(locale, "example"),
        ];
        form_table(
            view,
            t.label(locale, "conjugation"),
            columns,
            &usage.conjugation,
            locale,
            t,
            false,
        );
    }

    view.list(t.label(locale, "examples"), &usage.examples);

    if let Some(notes) = &usage.notes {
        view.field(t.label(locale, "notes"), notes.resolve(locale));
    }
}

/// Form rows: name, form, example, and a translation column when any row has one.
/// Form names are translated; pronouns are shown as-is.
fn form_table(
    view: &mut ViewModel,
    label: String,
    mut columns: Vec<String>,
    table: &FormTable,
    locale: &str,
    t: &LocaleTable,
    translate_names: bool,
) {
    let with_translation = table.iter().any(|(_, entry)| entry.translation.is_some());

    if with_translation {
        columns.push(t.label(locale, "translation"));
    }

    let rows = table
        .iter()
        .map(|(name, entry)| {
            let name = if translate_names {
                t.label(locale, name)
            } else {
                name.clone()
            };
            let mut row = vec![
                name,
                entry.form.clone(),
                entry.example.clone().unwrap_or_default(),
            ];
            if with_translation {
                row.push(
                    entry
                        .translation
                        .as_ref()
                        .map(|tr| tr.resolve(locale).to_string())
                        .unwrap_or_default(),
                );
            }
            row
        })
        .collect();

    view.sections.push(Section::Table {
        label,
        columns,
        rows,
    });
}
