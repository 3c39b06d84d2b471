//! Dataset and translation loading.

use crate::error::{LoadError, Result, ViewerError};
use std::path::Path;
use vocab_core::{load_cards, LocaleTable, NormalizeReport};

/// Read and normalize the card dataset.
///
/// Malformed records are skipped and logged; any read or document error is
/// returned as [`ViewerError::DatasetLoad`].
pub async fn load_dataset(path: &Path) -> Result<NormalizeReport> {
    let dataset_error = |source: LoadError| ViewerError::DatasetLoad {
        path: path.display().to_string(),
        source,
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| dataset_error(e.into()))?;
    let report = load_cards(&content).map_err(|e| dataset_error(e.into()))?;

    tracing::info!(
        "Loaded {} flashcards from {}",
        report.cards.len(),
        path.display()
    );
    for skipped in &report.skipped {
        tracing::warn!(
            index = skipped.index,
            reason = %skipped.reason,
            "Skipping malformed flashcard"
        );
    }
    if !report.skipped.is_empty() {
        tracing::warn!(
            "Skipped {} of {} records",
            report.skipped.len(),
            report.total()
        );
    }

    Ok(report)
}

/// Read a translation table.
pub async fn load_locales(path: &Path) -> Result<LocaleTable> {
    let locale_error = |source: LoadError| ViewerError::LocaleLoad {
        path: path.display().to_string(),
        source,
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| locale_error(e.into()))?;
    let table = LocaleTable::from_json(&content).map_err(|e| locale_error(e.into()))?;

    tracing::info!(
        "Loaded translations for {:?} from {}",
        table.locales(),
        path.display()
    );
    Ok(table)
}

/// Read a translation table, falling back to an empty one.
///
/// A missing or broken table is not fatal: labels use their fallbacks.
pub async fn load_locales_or_default(path: Option<&Path>) -> LocaleTable {
    let Some(path) = path else {
        return LocaleTable::new();
    };
    match load_locales(path).await {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!("{}; continuing with default labels", e);
            LocaleTable::new()
        }
    }
}
