mod controller;
mod countdown;
mod session;
mod surface;

// Public API of the quiz subsystem.
pub use controller::{QuizController, QuizIntent};
pub use countdown::{Countdown, CountdownTick};
pub use session::{Advance, AnswerReveal, QuizPhase, QuizSession};
pub use surface::{
    Celebration, CelebrationBurst, LOAD_ERROR_MESSAGE, Meter, OptionMark,
    QuizSurface, Section, TextSlot,
};
