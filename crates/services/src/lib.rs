#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod high_score_service;
pub mod quiz;

pub use error::{BankLoadError, HighScoreError, SessionError};
pub use high_score_service::{HIGH_SCORE_KEY, HighScoreService};

pub use quiz::{
    Advance, AnswerReveal, Celebration, CelebrationBurst, Countdown, CountdownTick,
    LOAD_ERROR_MESSAGE, Meter, OptionMark, QuizController, QuizIntent, QuizPhase,
    QuizSession, QuizSurface, Section, TextSlot,
};
