mod bank;
mod question;
mod result;
mod score;
mod settings;

pub use bank::{BankError, QuestionBank};
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use result::{FeedbackTier, QuizResult, percentage};
pub use score::{HighScore, HighScoreParseError};
pub use settings::{DEFAULT_SECONDS_PER_QUESTION, QuizSettings, SettingsError};
