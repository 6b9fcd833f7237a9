mod quiz;
mod results;
mod scripts;

pub use quiz::{DomCelebration, QuizView};

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;
