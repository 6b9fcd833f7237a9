//! Seams between the quiz controller and the outside world.

/// Message shown in the question area when the current question cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading question. Check the question bank.";

/// Sections of the screen that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Question,
    Results,
    Countdown,
    HighScoreBanner,
    Continue,
}

/// Named text nodes the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Prompt,
    CurrentNumber,
    TotalNumber,
    CountdownSeconds,
    Score,
    Total,
    Percentage,
    Feedback,
    HighScore,
}

/// Width-driven progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meter {
    QuizProgress,
    Countdown,
}

/// Visual state tag applied to an option after an answer is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionMark {
    Correct,
    Incorrect,
}

impl OptionMark {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }
}

/// Presentation surface the controller renders into.
///
/// Option controls are identified by their position in the last list passed
/// to `replace_options`. Wiring activation (pointer and key) back to the
/// controller is the implementor's job.
pub trait QuizSurface {
    fn set_text(&mut self, slot: TextSlot, text: &str);

    /// `percent` is in `0.0..=100.0`.
    fn set_meter(&mut self, meter: Meter, percent: f64);

    /// Drop every option control and create one enabled, unmarked control per label.
    fn replace_options(&mut self, labels: &[String]);

    fn set_option_state(&mut self, index: usize, disabled: bool, mark: Option<OptionMark>);

    fn set_visible(&mut self, section: Section, visible: bool);

    /// Replace the question area with an inline error message.
    fn show_error(&mut self, message: &str);
}

/// Parameters for the perfect-score confetti burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelebrationBurst {
    pub particle_count: u32,
    pub spread: u32,
    pub origin_y: f64,
}

impl CelebrationBurst {
    pub const PERFECT_SCORE: Self = Self {
        particle_count: 300,
        spread: 160,
        origin_y: 0.6,
    };
}

/// Fire-and-forget visual flourish.
pub trait Celebration: Send + Sync {
    fn celebrate(&self, burst: CelebrationBurst);
}
