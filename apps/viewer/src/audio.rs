//! Audio playback seam.
//!
//! Playback itself belongs to the host (browser audio element, native
//! player); the viewer only hands it a source and logs failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio source not found: {0}")]
    NotFound(String),

    #[error("playback failed: {0}")]
    Playback(String),
}

/// Plays pronunciation audio for a card.
pub trait AudioPlayer: Send + Sync {
    /// Start playing `source`, replacing anything already playing.
    fn play(&self, source: &str) -> Result<(), AudioError>;

    /// Stop the current playback, if any.
    fn stop(&self) {}
}

/// Play `source`, logging instead of returning failures.
pub fn play_logged(player: &dyn AudioPlayer, source: &str) -> bool {
    match player.play(source) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(source, error = %e, "Audio play failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPlayer {
        played: Mutex<Vec<String>>,
    }

    impl AudioPlayer for RecordingPlayer {
        fn play(&self, source: &str) -> Result<(), AudioError> {
            if source.is_empty() {
                return Err(AudioError::NotFound(source.to_string()));
            }
            self.played.lock().unwrap().push(source.to_string());
            Ok(())
        }
    }

    #[test]
    fn play_logged_reports_outcome() {
        let player = RecordingPlayer::default();
        assert!(play_logged(&player, "huis.mp3"));
        assert!(!play_logged(&player, ""));
        assert_eq!(*player.played.lock().unwrap(), vec!["huis.mp3".to_string()]);
    }
}
