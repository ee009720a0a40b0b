//! Raw form buffers.
//!
//! The four buffers mirror the text inputs one-to-one. They carry no record
//! identity; selection lives in the controller.

use crate::model::cast::{CastDraft, CastRecord, CastValidationError};

/// Text currently held by the four form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub store_name: String,
    pub person_name: String,
    pub age_text: String,
    pub note: String,
}

impl FormFields {
    pub fn new(
        store_name: impl Into<String>,
        person_name: impl Into<String>,
        age_text: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            store_name: store_name.into(),
            person_name: person_name.into(),
            age_text: age_text.into(),
            note: note.into(),
        }
    }

    /// Buffers populated from a stored record.
    ///
    /// Age renders as decimal text (empty when absent); a missing note renders empty.
    pub fn from_record(record: &CastRecord) -> Self {
        Self {
            store_name: record.store_name.clone(),
            person_name: record.person_name.clone(),
            age_text: record.age.map(|age| age.to_string()).unwrap_or_default(),
            note: record.note_text().to_string(),
        }
    }

    /// Converts buffers into a validated draft.
    ///
    /// Every buffer is trimmed first. An unparseable age is dropped silently.
    ///
    /// # Errors
    /// - Returns `CastValidationError` when a required name is empty.
    pub fn to_draft(&self) -> Result<CastDraft, CastValidationError> {
        let draft = CastDraft::new(
            self.store_name.trim(),
            self.person_name.trim(),
            parse_age(&self.age_text),
            Some(self.note.trim().to_string()),
        );
        draft.validate()?;
        Ok(draft)
    }
}

/// Parses age text made only of decimal digits.
///
/// Full-width digits (`０`..`９`, as typed through a Japanese IME) count as
/// digits. Empty text, signs, decimal points, other characters and values
/// beyond `i64::MAX` all yield `None`.
pub fn parse_age(text: &str) -> Option<i64> {
    let digits: String = text.trim().chars().map(fold_full_width_digit).collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn fold_full_width_digit(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (c as u32 - 0xFF10) as u8),
        other => other,
    }
}
