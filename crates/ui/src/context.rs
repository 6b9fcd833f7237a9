use std::sync::Arc;

use quiz_core::model::{HighScore, QuestionBank, QuizSettings};
use services::{Celebration, HighScoreService, QuizController, QuizSession};

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> QuestionBank;
    fn settings(&self) -> QuizSettings;

    fn high_scores(&self) -> Arc<HighScoreService>;
    /// High score read from storage before the window opened.
    fn stored_high_score(&self) -> HighScore;
}

#[derive(Clone)]
pub struct AppContext {
    bank: QuestionBank,
    settings: QuizSettings,
    high_scores: Arc<HighScoreService>,
    stored_high_score: HighScore,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            settings: app.settings(),
            high_scores: app.high_scores(),
            stored_high_score: app.stored_high_score(),
        }
    }

    #[must_use]
    pub fn high_scores(&self) -> Arc<HighScoreService> {
        Arc::clone(&self.high_scores)
    }

    /// A fresh controller over the configured bank, not yet started.
    #[must_use]
    pub fn quiz_controller(&self, celebration: Arc<dyn Celebration>) -> QuizController {
        let mut session = QuizSession::new(self.bank.clone(), &self.settings);
        if self.settings.shuffle_on_start() {
            session.restart(&mut rand::rng());
        }
        QuizController::new(
            session,
            self.high_scores(),
            self.stored_high_score,
            celebration,
        )
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
