//! Cast record model.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - `store_name` and `person_name` are non-empty after trimming.
//! - An empty note is represented as `None`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier for one cast.
pub type CastId = i64;

/// One persisted cast as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    pub id: CastId,
    pub store_name: String,
    pub person_name: String,
    pub age: Option<i64>,
    pub note: Option<String>,
}

impl CastRecord {
    /// Note text for display, empty when absent.
    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// Field values for a create or a full overwrite.
///
/// The store persists drafts as given; callers validate first. An age built
/// through `parse_age` is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CastDraft {
    pub store_name: String,
    pub person_name: String,
    pub age: Option<i64>,
    pub note: Option<String>,
}

impl CastDraft {
    /// Builds a draft, folding an empty note into `None`.
    pub fn new(
        store_name: impl Into<String>,
        person_name: impl Into<String>,
        age: Option<i64>,
        note: Option<String>,
    ) -> Self {
        Self {
            store_name: store_name.into(),
            person_name: person_name.into(),
            age,
            note: note.filter(|value| !value.is_empty()),
        }
    }

    /// Checks the required-name invariant.
    ///
    /// # Errors
    /// - `MissingStoreName` / `MissingPersonName` when a name is blank.
    pub fn validate(&self) -> Result<(), CastValidationError> {
        if self.store_name.trim().is_empty() {
            return Err(CastValidationError::MissingStoreName);
        }
        if self.person_name.trim().is_empty() {
            return Err(CastValidationError::MissingPersonName);
        }
        Ok(())
    }
}

/// Required-field violations for a cast draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastValidationError {
    MissingStoreName,
    MissingPersonName,
}

impl Display for CastValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStoreName => write!(f, "store_name is required"),
            Self::MissingPersonName => write!(f, "person_name is required"),
        }
    }
}

impl Error for CastValidationError {}
