use thiserror::Error;

use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered collection of questions a session walks through.
///
/// An empty bank is allowed; the session surfaces it as a render-time error
/// instead of refusing to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate every draft in order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` for the first draft that fails validation.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| BankError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { questions })
    }

    /// The stock JavaScript fundamentals bank.
    #[must_use]
    pub fn builtin() -> Self {
        let drafts = vec![
            QuestionDraft::new(
                "What does 'let' declare in JavaScript?",
                ["A constant value", "A changeable variable", "A function", "An array"],
                1,
            ),
            QuestionDraft::new(
                "Which is the strict equality operator?",
                ["==", "=", "===", "!="],
                2,
            ),
            QuestionDraft::new(
                "What is the purpose of a for loop?",
                [
                    "To declare variables",
                    "To repeat code a set number of times",
                    "To handle events",
                    "To style elements",
                ],
                1,
            ),
            QuestionDraft::new(
                "How do you select an element by ID in the DOM?",
                ["querySelector", "getElementById", "createElement", "appendChild"],
                1,
            ),
            QuestionDraft::new(
                "What is a closure in JavaScript?",
                [
                    "A function inside another function that has access to its outer scope",
                    "A way to close HTML tags",
                    "An object that stores key-value pairs",
                    "A method to terminate a loop",
                ],
                0,
            ),
            QuestionDraft::new(
                "What does the 'async' keyword do in JavaScript?",
                [
                    "Pauses the code until the user clicks a button",
                    "Allows the use of 'await' and returns a promise",
                    "Runs a function faster than normal",
                    "Stops the program when an error occurs",
                ],
                1,
            ),
        ];

        // Covered by `builtin_bank_is_valid`.
        Self::from_drafts(drafts).unwrap_or_default()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 6);
        assert_eq!(bank.get(1).unwrap().correct_option(), "===");
        assert_eq!(bank.get(4).unwrap().correct_index(), 0);
    }

    #[test]
    fn from_drafts_reports_failing_index() {
        let drafts = vec![
            QuestionDraft::new("Q1", ["a", "b", "c", "d"], 0),
            QuestionDraft::new("Q2", ["a", "b", "c", "d"], 9),
        ];

        let err = QuestionBank::from_drafts(drafts).unwrap_err();
        assert!(matches!(err, BankError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn drafts_deserialize_from_json() {
        let raw = r#"[{"prompt":"Q","options":["a","b","c","d"],"correct_index":3}]"#;
        let drafts: Vec<QuestionDraft> = serde_json::from_str(raw).unwrap();
        let bank = QuestionBank::from_drafts(drafts).unwrap();
        assert_eq!(bank.get(0).unwrap().correct_option(), "d");
    }

    #[test]
    fn empty_bank_is_representable() {
        let bank = QuestionBank::default();
        assert!(bank.is_empty());
        assert!(bank.get(0).is_none());
    }
}
