use std::sync::Arc;

use quiz_core::model::{HighScore, QuizResult};
use rand::Rng;
use tracing::{debug, error, info};

use super::countdown::CountdownTick;
use super::session::{Advance, QuizSession};
use super::surface::{
    Celebration, CelebrationBurst, LOAD_ERROR_MESSAGE, Meter, OptionMark, QuizSurface, Section,
    TextSlot,
};
use crate::high_score_service::HighScoreService;

/// User or timer events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Continue,
    Tick,
    Restart,
}

/// Drives a `QuizSession` and renders every transition into a `QuizSurface`.
///
/// The high score is read once by the caller and cached here; it is written
/// back only when a finished session beats it.
pub struct QuizController {
    session: QuizSession,
    high_scores: Arc<HighScoreService>,
    high_score: HighScore,
    celebration: Arc<dyn Celebration>,
}

impl QuizController {
    #[must_use]
    pub fn new(
        session: QuizSession,
        high_scores: Arc<HighScoreService>,
        high_score: HighScore,
        celebration: Arc<dyn Celebration>,
    ) -> Self {
        Self {
            session,
            high_scores,
            high_score,
            celebration,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    /// Show the question view and render the first question.
    pub fn start(&mut self, surface: &mut dyn QuizSurface) {
        surface.set_visible(Section::Question, true);
        surface.set_visible(Section::Results, false);
        surface.set_visible(Section::HighScoreBanner, false);
        self.load_question(surface);
    }

    /// Apply a single intent.
    pub async fn dispatch(&mut self, intent: QuizIntent, surface: &mut dyn QuizSurface) {
        match intent {
            QuizIntent::Select(index) => {
                self.select_option(index, surface);
            }
            QuizIntent::Continue => self.next_question(surface).await,
            QuizIntent::Tick => self.tick(surface).await,
            QuizIntent::Restart => {
                let mut rng = rand::rng();
                self.restart(&mut rng, surface);
            }
        }
    }

    /// Render the question at the current index and start its countdown.
    ///
    /// Returns `false` and shows the inline error if there is no such question.
    pub fn load_question(&mut self, surface: &mut dyn QuizSurface) -> bool {
        let total = self.session.total();
        let number = self.session.current_index() + 1;
        let budget = self.session.countdown().budget();

        let question = match self.session.load_question() {
            Ok(question) => question,
            Err(err) => {
                error!(%err, "failed to load question");
                surface.replace_options(&[]);
                surface.set_visible(Section::Continue, false);
                surface.set_visible(Section::Countdown, false);
                surface.show_error(LOAD_ERROR_MESSAGE);
                return false;
            }
        };

        surface.set_text(TextSlot::Prompt, question.prompt());
        surface.replace_options(question.options());
        surface.set_visible(Section::Continue, false);

        surface.set_text(TextSlot::CurrentNumber, &number.to_string());
        surface.set_text(TextSlot::TotalNumber, &total.to_string());
        surface.set_meter(Meter::QuizProgress, progress_percent(number, total));

        surface.set_visible(Section::Countdown, true);
        surface.set_text(TextSlot::CountdownSeconds, &budget.to_string());
        surface.set_meter(Meter::Countdown, 100.0);
        true
    }

    /// Lock in an answer. Returns `false` if the selection was ignored.
    pub fn select_option(&mut self, index: usize, surface: &mut dyn QuizSurface) -> bool {
        let Some(reveal) = self.session.select_option(index) else {
            debug!(index, "selection ignored");
            return false;
        };

        surface.set_visible(Section::Countdown, false);

        let option_count = self
            .session
            .current_question()
            .map_or(0, |question| question.options().len());
        for i in 0..option_count {
            let mark = if i == reveal.correct {
                Some(OptionMark::Correct)
            } else if i == reveal.selected {
                Some(OptionMark::Incorrect)
            } else {
                None
            };
            surface.set_option_state(i, true, mark);
        }

        surface.set_visible(Section::Continue, true);
        true
    }

    /// Score the current question and either load the next one or finish.
    pub async fn next_question(&mut self, surface: &mut dyn QuizSurface) {
        match self.session.next_question() {
            Ok(Advance::Next) => {
                self.load_question(surface);
            }
            Ok(Advance::Finished(result)) => self.finalize_session(result, surface).await,
            Err(err) => debug!(%err, "next question ignored"),
        }
    }

    /// Advance the countdown by one second; on expiry move on as unanswered.
    pub async fn tick(&mut self, surface: &mut dyn QuizSurface) {
        match self.session.tick() {
            CountdownTick::Idle => {}
            CountdownTick::Running { remaining } => {
                surface.set_text(TextSlot::CountdownSeconds, &remaining.to_string());
                surface.set_meter(Meter::Countdown, self.session.countdown().percent_remaining());
            }
            CountdownTick::Expired => {
                surface.set_text(TextSlot::CountdownSeconds, "0");
                surface.set_meter(Meter::Countdown, 0.0);
                info!(
                    question = self.session.current_index(),
                    "countdown expired; question left unanswered"
                );
                self.next_question(surface).await;
            }
        }
    }

    /// Shuffle the questions and start over from the first one.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: &mut dyn QuizSurface) {
        self.session.restart(rng);
        info!(questions = self.session.total(), "quiz restarted");
        self.start(surface);
    }

    async fn finalize_session(&mut self, result: QuizResult, surface: &mut dyn QuizSurface) {
        surface.set_visible(Section::Countdown, false);
        surface.set_visible(Section::Continue, false);
        surface.set_visible(Section::Question, false);
        surface.set_visible(Section::Results, true);

        surface.set_text(TextSlot::Score, &result.score().to_string());
        surface.set_text(TextSlot::Total, &result.total().to_string());
        surface.set_text(TextSlot::Percentage, &result.percentage().to_string());
        surface.set_text(TextSlot::Feedback, result.tier().message());

        info!(
            score = result.score(),
            total = result.total(),
            percentage = result.percentage(),
            "quiz finished"
        );

        if self.high_score.is_beaten_by(result.score()) {
            let new_high = HighScore::new(result.score());
            if let Err(err) = self.high_scores.save(new_high).await {
                error!(%err, "failed to persist high score");
            }
            info!(previous = self.high_score.value(), new = new_high.value(), "new high score");
            self.high_score = new_high;
            surface.set_text(TextSlot::HighScore, &new_high.to_string());
            surface.set_visible(Section::HighScoreBanner, true);
        }

        if result.is_perfect() {
            self.celebration.celebrate(CelebrationBurst::PERFECT_SCORE);
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn progress_percent(number: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    number as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_share_of_total() {
        assert!((progress_percent(3, 6) - 50.0).abs() < f64::EPSILON);
        assert!((progress_percent(6, 6) - 100.0).abs() < f64::EPSILON);
        assert!(progress_percent(1, 0).abs() < f64::EPSILON);
    }
}
