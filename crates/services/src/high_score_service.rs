use std::sync::Arc;

use quiz_core::model::HighScore;
use storage::repository::KeyValueStore;
use tracing::{debug, warn};

use crate::error::HighScoreError;

/// Key the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "quiz.high_score";

/// Reads and writes the persisted high score.
#[derive(Clone)]
pub struct HighScoreService {
    store: Arc<dyn KeyValueStore>,
}

impl HighScoreService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored high score, or zero if none has been recorded.
    ///
    /// A stored value that does not parse is logged and treated as zero.
    ///
    /// # Errors
    ///
    /// Returns `HighScoreError::Storage` if the store cannot be read.
    pub async fn load(&self) -> Result<HighScore, HighScoreError> {
        let Some(raw) = self.store.get(HIGH_SCORE_KEY).await? else {
            return Ok(HighScore::default());
        };

        match raw.parse::<HighScore>() {
            Ok(score) => Ok(score),
            Err(err) => {
                warn!(%err, "ignoring unreadable stored high score");
                Ok(HighScore::default())
            }
        }
    }

    /// Persist `score` as the new high score.
    ///
    /// # Errors
    ///
    /// Returns `HighScoreError::Storage` if the store cannot be written.
    pub async fn save(&self, score: HighScore) -> Result<(), HighScoreError> {
        self.store.set(HIGH_SCORE_KEY, &score.to_string()).await?;
        debug!(score = score.value(), "high score saved");
        Ok(())
    }

    /// Forget the stored high score.
    ///
    /// # Errors
    ///
    /// Returns `HighScoreError::Storage` if the store cannot be written.
    pub async fn reset(&self) -> Result<(), HighScoreError> {
        self.store.remove(HIGH_SCORE_KEY).await?;
        Ok(())
    }
}
