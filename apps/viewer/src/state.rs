//! Application state.
//!
//! One value holds everything the viewer shows. Every transition consumes the
//! current state and returns the next one; derived views are recomputed from
//! the immutable card snapshot rather than patched.

use crate::audio::{play_logged, AudioPlayer};
use crate::config::Config;
use chrono::NaiveDate;
use std::sync::Arc;
use vocab_core::{
    back_view, categories, daily_subset, front_view, levels, list_item_view, suggest, Card,
    LocaleTable, NormalizeReport, Query, Selection, SkippedRecord, ViewModel,
};

/// Daily review subset and the day it was drawn for.
#[derive(Debug, Clone)]
struct DailyReview {
    date: NaiveDate,
    cards: Arc<[Card]>,
}

/// Global application state.
#[derive(Debug, Clone)]
pub struct AppState {
    cards: Arc<[Card]>,
    skipped: Arc<[SkippedRecord]>,
    locales: Arc<LocaleTable>,
    locale: String,
    query: Query,
    filtered: Arc<[Card]>,
    daily: Option<DailyReview>,
    /// Index into the visible cards of the open flashcard.
    open: Option<usize>,
    flipped: bool,
    daily_count: usize,
    suggestion_limit: usize,
}

impl AppState {
    pub fn new(report: NormalizeReport, locales: LocaleTable, config: &Config) -> Self {
        let cards: Arc<[Card]> = report.cards.into();
        Self {
            filtered: cards.clone(),
            cards,
            skipped: report.skipped.into(),
            locales: Arc::new(locales),
            locale: config.default_locale.clone(),
            query: Query::default(),
            daily: None,
            open: None,
            flipped: false,
            daily_count: config.daily_count,
            suggestion_limit: config.suggestion_limit,
        }
    }

    // === Transitions ===

    /// Replace the whole query and recompute the filtered cards.
    pub fn with_query(self, query: Query) -> Self {
        let filtered: Arc<[Card]> = vocab_core::query(&self.cards, &query).into();
        tracing::debug!(
            search = %query.search,
            category = query.category.as_str(),
            level = query.level.as_str(),
            "Filtered {} of {} cards",
            filtered.len(),
            self.cards.len()
        );
        Self {
            query,
            filtered,
            open: None,
            flipped: false,
            ..self
        }
    }

    pub fn with_search(self, search: &str) -> Self {
        let query = Query {
            search: search.to_string(),
            ..self.query.clone()
        };
        self.with_query(query)
    }

    pub fn with_category(self, category: &str) -> Self {
        let query = Query {
            category: Selection::parse(category),
            ..self.query.clone()
        };
        self.with_query(query)
    }

    pub fn with_level(self, level: &str) -> Self {
        let query = Query {
            level: Selection::parse(level),
            ..self.query.clone()
        };
        self.with_query(query)
    }

    /// Switch display language. Filters are unchanged; views re-render.
    pub fn with_locale(self, locale: &str) -> Self {
        if !self.locales.has_locale(locale) {
            tracing::debug!("No translations for locale {}, using fallbacks", locale);
        }
        Self {
            locale: locale.to_string(),
            ..self
        }
    }

    /// Install a translation table that finished loading after first render.
    pub fn with_locales(self, locales: LocaleTable) -> Self {
        Self {
            locales: Arc::new(locales),
            ..self
        }
    }

    /// Toggle between the daily review for `today` and the filtered list.
    pub fn toggle_daily(self, today: NaiveDate) -> Self {
        let daily = match self.daily {
            Some(_) => None,
            None => Some(DailyReview {
                date: today,
                cards: daily_subset(&self.cards, today, self.daily_count).into(),
            }),
        };
        Self {
            daily,
            open: None,
            flipped: false,
            ..self
        }
    }

    /// Open the flashcard at `index` of the visible cards, front side up.
    pub fn open(self, index: usize) -> Self {
        let open = (index < self.visible().len()).then_some(index);
        Self {
            open,
            flipped: false,
            ..self
        }
    }

    pub fn close(self) -> Self {
        Self {
            open: None,
            flipped: false,
            ..self
        }
    }

    /// Close the open flashcard and stop its audio.
    pub fn close_with_audio(self, player: &dyn AudioPlayer) -> Self {
        player.stop();
        self.close()
    }

    /// Move the open flashcard by `delta`, wrapping at both ends.
    pub fn navigate(self, delta: isize) -> Self {
        let len = self.visible().len();
        let Some(current) = self.open else {
            return self;
        };
        if len == 0 {
            return self.close();
        }
        let len = len as isize;
        let next = (current as isize + delta.rem_euclid(len)).rem_euclid(len) as usize;
        Self {
            open: Some(next),
            flipped: false,
            ..self
        }
    }

    pub fn flip(self) -> Self {
        let flipped = self.open.is_some() && !self.flipped;
        Self { flipped, ..self }
    }

    // === Accessors ===

    /// The full card snapshot.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Records dropped while loading.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    pub fn is_daily(&self) -> bool {
        self.daily.is_some()
    }

    pub fn daily_date(&self) -> Option<NaiveDate> {
        self.daily.as_ref().map(|d| d.date)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Cards currently listed: the daily review if active, else the filtered cards.
    pub fn visible(&self) -> &[Card] {
        match &self.daily {
            Some(daily) => &daily.cards,
            None => &self.filtered,
        }
    }

    /// The open flashcard.
    pub fn current(&self) -> Option<&Card> {
        self.open.and_then(|i| self.visible().get(i))
    }

    /// Position of the open flashcard, e.g. `"3 / 12"`.
    pub fn progress(&self) -> Option<String> {
        self.open
            .map(|i| format!("{} / {}", i + 1, self.visible().len()))
    }

    /// Autocomplete candidates from the whole dataset.
    pub fn suggestions(&self, text: &str) -> Vec<String> {
        suggest(&self.cards, text, self.suggestion_limit)
    }

    pub fn category_options(&self) -> Vec<String> {
        categories(&self.cards)
    }

    pub fn level_options(&self) -> Vec<String> {
        levels(&self.cards)
    }

    /// Label for a UI string in the current locale.
    pub fn label(&self, key: &str) -> String {
        self.locales.label(&self.locale, key)
    }

    /// List summaries of the visible cards.
    pub fn list_views(&self) -> Vec<ViewModel> {
        self.visible()
            .iter()
            .map(|card| list_item_view(card, &self.locale, &self.locales))
            .collect()
    }

    /// The open flashcard, on whichever side is up.
    pub fn current_view(&self) -> Option<ViewModel> {
        let card = self.current()?;
        Some(if self.flipped {
            back_view(card, &self.locale, &self.locales)
        } else {
            front_view(card, &self.locale, &self.locales)
        })
    }

    /// Play the open card's audio. Failures are logged only.
    pub fn play_current_audio(&self, player: &dyn AudioPlayer) -> bool {
        match self.current().and_then(Card::audio) {
            Some(source) => play_logged(player, source),
            None => false,
        }
    }
}
