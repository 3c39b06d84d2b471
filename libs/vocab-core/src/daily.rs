//! Daily review selection.
//!
//! A date-seeded shuffle: every card is keyed by a rolling hash of its
//! identity with the date appended, the deck is sorted by that key and the
//! first `n` cards are taken. The same date always yields the same subset
//! for a given card set.

use crate::types::Card;
use chrono::NaiveDate;

/// Default number of cards in a daily review.
pub const DEFAULT_DAILY_COUNT: usize = 10;

/// Date formatted as `YYYYMMDD`.
pub fn date_seed(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// 32-bit rolling polynomial hash (`h * 31 + c`) over UTF-16 code units,
/// wrapping like a signed 32-bit integer.
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Pick `n` cards for the given day.
pub fn daily_subset(cards: &[Card], date: NaiveDate, n: usize) -> Vec<Card> {
    let seed = date_seed(date);
    let mut keyed: Vec<(i32, &Card)> = cards
        .iter()
        .map(|card| (hash_code(&format!("{}{}", card.identity(), seed)), card))
        .collect();

    // Stable: cards with equal keys keep their original order.
    keyed.sort_by_key(|(key, _)| *key);

    keyed
        .into_iter()
        .take(n)
        .map(|(_, card)| card.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GrammarCard, LexicalCard};
    use pretty_assertions::assert_eq;

    fn word(w: &str) -> Card {
        Card::Lexical(LexicalCard {
            word: w.to_string(),
            ..LexicalCard::default()
        })
    }

    fn deck(size: usize) -> Vec<Card> {
        (0..size).map(|i| word(&format!("woord{}", i))).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hash_code() {
        assert_eq!(hash_code(""), 0);
        assert_eq!(hash_code("a"), 97);
        assert_eq!(hash_code("ab"), 97 * 31 + 98);
        assert_eq!(hash_code("hello"), 99162322);
        // Overflows wrap to negative values.
        assert_eq!(hash_code("hello world"), 1794106052);
        assert_eq!(hash_code("flashcards"), -1191613069);
    }

    #[test]
    fn test_hash_code_uses_utf16_units() {
        assert_eq!(hash_code("é"), 233);
        assert_eq!(hash_code("😀"), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn test_date_seed() {
        assert_eq!(date_seed(date(2024, 1, 1)), "20240101");
        assert_eq!(date_seed(date(2025, 12, 31)), "20251231");
    }

    #[test]
    fn same_date_same_subset() {
        let cards = deck(50);
        let first = daily_subset(&cards, date(2024, 1, 1), DEFAULT_DAILY_COUNT);
        let second = daily_subset(&cards, date(2024, 1, 1), DEFAULT_DAILY_COUNT);
        assert_eq!(first, second);
    }

    #[test]
    fn seed_changes_subset() {
        // The seed only offsets every key by the same amount, so the subset
        // moves once enough keys wrap past i32::MAX.
        let cards = deck(50);
        let before = daily_subset(&cards, date(2024, 1, 1), DEFAULT_DAILY_COUNT);
        let after = daily_subset(&cards, date(2124, 1, 1), DEFAULT_DAILY_COUNT);
        assert_ne!(before, after);
    }

    #[test]
    fn returns_min_of_n_and_len() {
        let cards = deck(5);
        assert_eq!(daily_subset(&cards, date(2024, 1, 1), 10).len(), 5);
        assert_eq!(daily_subset(&cards, date(2024, 1, 1), 3).len(), 3);
        assert!(daily_subset(&[], date(2024, 1, 1), 10).is_empty());
    }

    #[test]
    fn ties_keep_original_order() {
        let grammar = Card::Grammar(GrammarCard {
            title: "huis".into(),
            ..GrammarCard::default()
        });
        let cards = vec![word("huis"), grammar.clone(), word("huis")];
        let subset = daily_subset(&cards, date(2024, 1, 1), 3);
        assert_eq!(subset, cards);
    }

    #[test]
    fn subset_is_sorted_by_seeded_hash() {
        let cards = deck(20);
        let day = date(2024, 3, 15);
        let seed = date_seed(day);
        let subset = daily_subset(&cards, day, 20);
        let keys: Vec<i32> = subset
            .iter()
            .map(|c| hash_code(&format!("{}{}", c.identity(), seed)))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}
