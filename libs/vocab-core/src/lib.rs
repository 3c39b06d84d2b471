//! Core vocabulary flashcard library shared by the viewer application.
//!
//! Provides:
//! - Normalizer for the loosely-structured JSON card shapes
//! - Query engine (category/level/search filtering, autocomplete)
//! - Date-seeded daily review selection
//! - Language-agnostic view models for card fronts and backs
//! - Shared types (Card, Usage, FormEntry, LocalizedText, etc.)

pub mod daily;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;
pub mod view;

pub use daily::{daily_subset, date_seed, hash_code, DEFAULT_DAILY_COUNT};
pub use dataset::{load_cards, parse_dataset};
pub use error::{DatasetError, NormalizeError, Result};
pub use normalize::{normalize, normalize_all, NormalizeReport, SkippedRecord};
pub use query::{categories, filter, levels, query, suggest, Query, Selection, DEFAULT_SUGGESTION_LIMIT};
pub use types::{Card, FormEntry, FormTable, GrammarCard, LexicalCard, LocalizedText, Usage, GRAMMAR_CATEGORY};
pub use view::{back_view, front_view, list_item_view, LocaleTable, Section, ViewModel};
