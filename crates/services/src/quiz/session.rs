use quiz_core::model::{Question, QuestionBank, QuizResult, QuizSettings};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::countdown::{Countdown, CountdownTick};
use crate::error::SessionError;

//
// ─── PHASES AND OUTCOMES ───────────────────────────────────────────────────────
//

/// Where a session is in its per-question cycle.
///
/// `Loading → AwaitingAnswer → Answered → (more?) Loading : Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    AwaitingAnswer,
    Answered,
    Finished,
}

/// What the user picked and which option was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerReveal {
    pub selected: usize,
    pub correct: usize,
}

impl AnswerReveal {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }
}

/// Result of moving past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Another question is waiting to be loaded.
    Next,
    /// That was the last question.
    Finished(QuizResult),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one quiz attempt.
///
/// All transitions are pure; rendering is the controller's job.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    selected: Option<usize>,
    countdown: Countdown,
    phase: QuizPhase,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank, settings: &QuizSettings) -> Self {
        Self {
            questions: bank.into_questions(),
            current: 0,
            score: 0,
            selected: None,
            countdown: Countdown::new(settings.seconds_per_question()),
            phase: QuizPhase::Loading,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// The final result, once the session has finished.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.is_finished()
            .then(|| QuizResult::new(self.score, self.total_u32()))
    }

    /// Prepare the question at the current index and start its countdown.
    ///
    /// Any running countdown is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestion` if the index has no question. Score and
    /// index are left untouched and no countdown runs.
    pub fn load_question(&mut self) -> Result<&Question, SessionError> {
        self.countdown.cancel();
        self.selected = None;

        if self.current >= self.questions.len() {
            self.phase = QuizPhase::Loading;
            return Err(SessionError::NoQuestion {
                index: self.current,
            });
        }

        self.countdown.start();
        self.phase = QuizPhase::AwaitingAnswer;
        Ok(&self.questions[self.current])
    }

    /// Record the user's pick for the current question.
    ///
    /// Returns `None` without changing anything unless the session is awaiting
    /// an answer and `index` names an option of the current question.
    pub fn select_option(&mut self, index: usize) -> Option<AnswerReveal> {
        if self.phase != QuizPhase::AwaitingAnswer {
            return None;
        }

        let correct = {
            let question = self.questions.get(self.current)?;
            question.option(index)?;
            question.correct_index()
        };

        self.selected = Some(index);
        self.countdown.cancel();
        self.phase = QuizPhase::Answered;
        debug!(question = self.current, selected = index, correct, "option selected");

        Some(AnswerReveal {
            selected: index,
            correct,
        })
    }

    /// Score the current question and move to the next one.
    ///
    /// An unanswered question never scores.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once finished, or
    /// `SessionError::NotReady` if no question is loaded.
    pub fn next_question(&mut self) -> Result<Advance, SessionError> {
        match self.phase {
            QuizPhase::Finished => return Err(SessionError::Completed),
            QuizPhase::Loading => return Err(SessionError::NotReady),
            QuizPhase::AwaitingAnswer | QuizPhase::Answered => {}
        }

        let answered_correctly = self
            .current_question()
            .zip(self.selected)
            .is_some_and(|(question, selected)| question.is_correct(selected));
        if answered_correctly {
            self.score += 1;
        }

        self.countdown.cancel();
        self.selected = None;
        self.current += 1;

        if self.current < self.questions.len() {
            self.phase = QuizPhase::Loading;
            debug!(next = self.current, score = self.score, "advancing");
            return Ok(Advance::Next);
        }

        self.phase = QuizPhase::Finished;
        Ok(Advance::Finished(QuizResult::new(self.score, self.total_u32())))
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> CountdownTick {
        self.countdown.tick()
    }

    /// Shuffle the question order and return to the first question.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.countdown.cancel();
        self.phase = QuizPhase::Loading;
    }

    fn total_u32(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }
}
