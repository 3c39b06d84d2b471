//! Normalizer for raw card records.
//!
//! Accepted shapes:
//! ```json
//! { "type": "grammar", "title": "...", "description": "...", "example": "..." }
//! { "word": "huis", "level": "A1", "usages": [{ "category": "noun", "meaning": { "en": "house" } }] }
//! { "word": "lopen", "meaning": "to walk", "forms": { "past": { "form": "liep" } } }
//! { "front": { "word": "huis" }, "back": { "level": "A1", "meanings": ["house"] }, "pos_cards": [...] }
//! ```

use crate::error::{NormalizeError, Result};
use crate::types::{Card, FormEntry, FormTable, GrammarCard, LexicalCard, LocalizedText, Usage};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level keys that, without a `usages`/`pos_cards` array, describe a single usage.
const FLAT_USAGE_KEYS: &[&str] = &[
    "meaning",
    "forms",
    "conjugation",
    "category",
    "part_of_speech",
    "pos_type",
    "article",
    "notes",
    "examples",
];

/// Locale of the `dutch_meaning` field in `pos_cards` entries.
const DUTCH_LOCALE: &str = "nl";

type Object = Map<String, Value>;

/// Normalize one raw record into a canonical card.
pub fn normalize(raw: &Value) -> Result<Card> {
    let record = raw
        .as_object()
        .ok_or_else(|| NormalizeError::malformed("record is not an object"))?;
    let front = record.get("front").and_then(Value::as_object);
    let back = record.get("back").and_then(Value::as_object);

    let has_identity = present(record, "word")
        || present(record, "title")
        || front.is_some_and(|f| present(f, "word"));
    let has_body = ["usages", "pos_cards", "forms"]
        .iter()
        .any(|key| present(record, key));
    if !has_identity && !has_body {
        return Err(NormalizeError::malformed(
            "record has no word, title, usages, pos_cards or forms",
        ));
    }

    if text(record, "type").as_deref() == Some("grammar") {
        return Ok(Card::Grammar(grammar_card(record)));
    }
    Ok(Card::Lexical(lexical_card(record, front, back)))
}

/// A record dropped by [`normalize_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Position of the record in the input array.
    pub index: usize,
    pub reason: String,
}

/// Outcome of normalizing a whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub cards: Vec<Card>,
    pub skipped: Vec<SkippedRecord>,
}

impl NormalizeReport {
    /// Number of records the report was built from.
    pub fn total(&self) -> usize {
        self.cards.len() + self.skipped.len()
    }
}

/// Normalize every record, skipping malformed ones instead of failing the batch.
pub fn normalize_all(records: &[Value]) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    for (index, raw) in records.iter().enumerate() {
        match normalize(raw) {
            Ok(card) => report.cards.push(card),
            Err(NormalizeError::Malformed { reason }) => {
                report.skipped.push(SkippedRecord { index, reason })
            }
        }
    }
    report
}

fn grammar_card(record: &Object) -> GrammarCard {
    GrammarCard {
        title: text(record, "title")
            .or_else(|| text(record, "word"))
            .unwrap_or_default(),
        description: text(record, "description").unwrap_or_default(),
        example: text(record, "example").unwrap_or_default(),
    }
}

fn lexical_card(record: &Object, front: Option<&Object>, back: Option<&Object>) -> LexicalCard {
    let from_front = |key: &str| front.and_then(|f| text(f, key));
    let from_back = |key: &str| back.and_then(|b| text(b, key));
    let list_from_back = |key: &str| {
        let list = string_list(record.get(key));
        if list.is_empty() {
            string_list(back.and_then(|b| b.get(key)))
        } else {
            list
        }
    };

    let mut usages = usages(record);
    let meanings = list_from_back("meanings");
    if !meanings.is_empty() {
        if usages.is_empty() {
            usages.push(Usage {
                primary: true,
                ..Usage::default()
            });
        }
        let target = usages.iter().position(|u| u.primary).unwrap_or(0);
        let meaning = &mut usages[target].meaning;
        if meaning.get("en").is_none() {
            meaning.insert("en", meanings.join(", "));
        }
    }

    LexicalCard {
        word: text(record, "word")
            .or_else(|| from_front("word"))
            .or_else(|| text(record, "title"))
            .unwrap_or_default(),
        level: text(record, "level").or_else(|| from_back("level")),
        usages,
        article: from_front("article"),
        hyphenation: text(record, "hyphenation").or_else(|| from_front("hyphenation")),
        audio: text(record, "audio")
            .or_else(|| text(record, "audio_file"))
            .or_else(|| from_front("audio"))
            .or_else(|| from_front("audio_file")),
        synonyms: list_from_back("synonyms"),
        antonyms: list_from_back("antonyms"),
        derived_words: list_from_back("derived_words"),
        etymology: text(record, "etymology").or_else(|| from_back("etymology")),
    }
}

/// Collect usages from `usages`, legacy `pos_cards`, or the flat top-level fields.
fn usages(record: &Object) -> Vec<Usage> {
    let nested = record
        .get("usages")
        .and_then(Value::as_array)
        .or_else(|| record.get("pos_cards").and_then(Value::as_array));

    let mut usages: Vec<Usage> = match nested {
        Some(entries) => entries
            .iter()
            .filter_map(Value::as_object)
            .map(usage)
            .collect(),
        None if FLAT_USAGE_KEYS.iter().any(|key| present(record, key)) => {
            let mut synthesized = usage(record);
            synthesized.primary = true;
            vec![synthesized]
        }
        None => Vec::new(),
    };

    // At most one usage keeps the flag; the first marked one wins.
    let mut seen_primary = false;
    for u in &mut usages {
        if u.primary {
            u.primary = !seen_primary;
            seen_primary = true;
        }
    }
    usages
}

fn usage(entry: &Object) -> Usage {
    let mut meaning = localized(entry.get("meaning")).unwrap_or_default();
    if let Some(dutch) = text(entry, "dutch_meaning") {
        if meaning.get(DUTCH_LOCALE).is_none() {
            meaning.insert(DUTCH_LOCALE, dutch);
        }
    }

    let forms = match entry.get("forms") {
        Some(forms) if !forms.is_null() => form_table(forms),
        _ => entry.get("key_forms").map(form_table).unwrap_or_default(),
    };

    Usage {
        category: text(entry, "category")
            .or_else(|| text(entry, "part_of_speech"))
            .or_else(|| text(entry, "pos_type")),
        primary: entry
            .get("primary")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        meaning,
        title: text(entry, "pos_title").or_else(|| text(entry, "usage_title")),
        article: text(entry, "article"),
        gender: text(entry, "gender"),
        notes: localized(entry.get("notes")),
        forms,
        conjugation: entry.get("conjugation").map(form_table).unwrap_or_default(),
        examples: string_list(entry.get("examples")),
    }
}

/// Build a form table from an object, keeping document order.
/// Rows without a `form` are dropped.
fn form_table(value: &Value) -> FormTable {
    let Some(object) = value.as_object() else {
        return FormTable::new();
    };

    object
        .iter()
        .filter_map(|(name, entry)| {
            let entry = match entry {
                Value::String(form) => FormEntry::new(form.as_str()),
                Value::Object(fields) => FormEntry {
                    form: text(fields, "form")?,
                    example: text(fields, "example"),
                    translation: localized(fields.get("translation")),
                },
                _ => return None,
            };
            Some((name.clone(), entry))
        })
        .collect()
}

fn localized(value: Option<&Value>) -> Option<LocalizedText> {
    match value? {
        Value::String(s) => Some(LocalizedText::plain(s.as_str())),
        Value::Object(map) => {
            let mut text = LocalizedText::new();
            for (locale, value) in map {
                if let Some(s) = value.as_str() {
                    text.insert(locale.as_str(), s);
                }
            }
            Some(text)
        }
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn text(object: &Object, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn present(object: &Object, key: &str) -> bool {
    object.get(key).is_some_and(|v| !v.is_null())
}
