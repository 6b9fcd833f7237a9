//! Loading question banks from JSON files.
//!
//! A bank file is a JSON array of objects with `prompt`, `options` and
//! `correct_index` fields.

use std::path::Path;

use quiz_core::model::{QuestionBank, QuestionDraft};
use tracing::info;

use crate::error::BankLoadError;

/// Parse and validate a bank from JSON text.
///
/// # Errors
///
/// Returns `BankLoadError::Json` for malformed JSON and
/// `BankLoadError::Invalid` for the first question that fails validation.
pub fn parse_bank(raw: &str) -> Result<QuestionBank, BankLoadError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
    Ok(QuestionBank::from_drafts(drafts)?)
}

/// Read, parse and validate a bank file.
///
/// # Errors
///
/// Returns `BankLoadError::Io` if the file cannot be read, otherwise the
/// errors of [`parse_bank`].
pub fn load_bank_file(path: impl AsRef<Path>) -> Result<QuestionBank, BankLoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| BankLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = parse_bank(&raw)?;
    info!(path = %path.display(), questions = bank.len(), "loaded question bank");
    Ok(bank)
}
