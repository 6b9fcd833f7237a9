use thiserror::Error;

/// Per-question countdown budget used when nothing else is configured.
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;

const MAX_SECONDS_PER_QUESTION: u32 = 3600;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("seconds per question must be between 1 and {max}, got {value}")]
    InvalidSecondsPerQuestion { value: u32, max: u32 },
}

/// Runtime knobs for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    seconds_per_question: u32,
    shuffle_on_start: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            shuffle_on_start: false,
        }
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSecondsPerQuestion` if the budget is zero
    /// or longer than an hour.
    pub fn new(seconds_per_question: u32, shuffle_on_start: bool) -> Result<Self, SettingsError> {
        if !(1..=MAX_SECONDS_PER_QUESTION).contains(&seconds_per_question) {
            return Err(SettingsError::InvalidSecondsPerQuestion {
                value: seconds_per_question,
                max: MAX_SECONDS_PER_QUESTION,
            });
        }
        Ok(Self {
            seconds_per_question,
            shuffle_on_start,
        })
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    #[must_use]
    pub fn shuffle_on_start(&self) -> bool {
        self.shuffle_on_start
    }
}
