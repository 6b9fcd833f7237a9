mod quiz;

pub use quiz::{DomCelebration, QuizView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
