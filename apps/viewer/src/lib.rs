//! Vocabulary flashcard viewer.
//!
//! Host-side glue around `vocab-core`: configuration, logging, dataset and
//! translation loading, the application state value and HTML rendering of
//! card views.

pub mod audio;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod render;
pub mod state;

pub use audio::{AudioError, AudioPlayer};
pub use config::Config;
pub use error::{LoadError, Result, ViewerError};
pub use render::{render_card, render_list, render_suggestions, Side};
pub use state::AppState;

/// Load the dataset and translations and build the initial state.
///
/// Both files are read concurrently. A dataset failure aborts; a translation
/// failure only falls back to default labels.
pub async fn start(config: Config) -> anyhow::Result<AppState> {
    tracing::info!("Loading flashcards from {}", config.dataset_path.display());

    let (report, locales) = tokio::join!(
        loader::load_dataset(&config.dataset_path),
        loader::load_locales_or_default(config.locales_path.as_deref()),
    );
    let report = report?;

    let state = AppState::new(report, locales, &config);
    tracing::info!(
        "Displaying {} cards ({} skipped)",
        state.visible().len(),
        state.skipped().len()
    );
    Ok(state)
}

/// Read configuration from the environment, set up logging, then [`start`].
pub async fn run() -> anyhow::Result<AppState> {
    let config = Config::from_env();
    logging::init();
    start(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("vocab-start-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_start_with_missing_translations() {
        let dataset = temp_path();
        std::fs::write(
            &dataset,
            r#"{ "cards": [{ "word": "huis", "meaning": "house" }, { "word": "boom" }] }"#,
        )
        .unwrap();

        let config = Config {
            dataset_path: dataset.clone(),
            locales_path: Some(temp_path()),
            ..Config::default()
        };
        let state = start(config).await.unwrap();
        std::fs::remove_file(&dataset).ok();

        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.label("meaning"), "Meaning");
    }

    #[tokio::test]
    async fn test_start_fails_without_dataset() {
        let config = Config {
            dataset_path: temp_path(),
            ..Config::default()
        };
        let err = start(config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ViewerError>(),
            Some(ViewerError::DatasetLoad { .. })
        ));
    }
}
