//! Form/list controller.
//!
//! # Responsibility
//! - Track which record the form is bound to (`Idle` or `Editing`).
//! - Turn add / update / delete / clear into store calls.
//! - Reload and re-render the full record list after every mutation.
//!
//! # Invariants
//! - "No selection" is `None`; any store-assigned id, including `0`, can be selected.
//! - A rejected action never mutates the store or the form buffers.
//! - Every successful mutation is followed by a full reload.

use crate::labels;
use crate::model::cast::{CastId, CastRecord, CastValidationError};
use crate::model::form::FormFields;
use crate::repo::cast_repo::{CastRepository, RepoError};
use crate::view::{first_line_for_record, record_index_for_line, render_lines};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ControllerResult<T> = Result<T, ControllerError>;

/// The two form states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No bound record; the form describes a new cast.
    Idle,
    /// Bound to one stored cast.
    Editing(CastId),
}

/// User-triggered form actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
    Clear,
}

impl Action {
    fn event_name(self) -> &'static str {
        match self {
            Self::Add => "form_add",
            Self::Update => "form_update",
            Self::Delete => "form_delete",
            Self::Clear => "form_clear",
        }
    }
}

/// Severity of a dialog shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    Question,
}

/// Dialog content handed to the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title,
            message: message.into(),
        }
    }

    /// The delete confirmation question.
    pub fn confirm_delete() -> Self {
        Self::new(
            NoticeKind::Question,
            labels::CONFIRM_TITLE,
            labels::CONFIRM_DELETE_MESSAGE,
        )
    }
}

/// Yes/no confirmation source, typically a blocking dialog.
pub trait Confirm {
    fn confirm(&mut self, notice: &Notice) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&Notice) -> bool,
{
    fn confirm(&mut self, notice: &Notice) -> bool {
        self(notice)
    }
}

/// Controller action failure.
#[derive(Debug)]
pub enum ControllerError {
    /// A required form field is empty.
    Validation(CastValidationError),
    /// Update or delete was requested while `Idle`.
    NoSelection(Action),
    /// Store-level failure, not recovered locally.
    Repo(RepoError),
}

impl ControllerError {
    /// Dialog the front-end shows for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Validation(_) => Notice::new(
                NoticeKind::Warning,
                labels::MISSING_INPUT_TITLE,
                labels::MISSING_INPUT_MESSAGE,
            ),
            Self::NoSelection(Action::Delete) => Notice::new(
                NoticeKind::Info,
                labels::NO_SELECTION_TITLE,
                labels::NO_SELECTION_DELETE_MESSAGE,
            ),
            Self::NoSelection(_) => Notice::new(
                NoticeKind::Info,
                labels::NO_SELECTION_TITLE,
                labels::NO_SELECTION_UPDATE_MESSAGE,
            ),
            Self::Repo(err) => Notice::new(
                NoticeKind::Error,
                labels::STORE_ERROR_TITLE,
                err.to_string(),
            ),
        }
    }
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoSelection(action) => write!(f, "{action:?} requires a selected record"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NoSelection(_) => None,
        }
    }
}

impl From<CastValidationError> for ControllerError {
    fn from(value: CastValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(CastId),
    /// The user declined the confirmation; nothing changed.
    Declined,
}

/// Stateful view over a cast store.
pub struct FormController<R: CastRepository> {
    repo: R,
    selected_id: Option<CastId>,
    records: Vec<CastRecord>,
    lines: Vec<String>,
}

impl<R: CastRepository> FormController<R> {
    /// Creates an `Idle` controller with an empty list. Call `refresh` to load.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            selected_id: None,
            records: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Initializes the store schema and loads the first list.
    pub fn open(repo: R) -> ControllerResult<Self> {
        repo.initialize()?;
        let mut controller = Self::new(repo);
        controller.refresh()?;
        Ok(controller)
    }

    pub fn state(&self) -> FormState {
        match self.selected_id {
            Some(id) => FormState::Editing(id),
            None => FormState::Idle,
        }
    }

    pub fn selected_id(&self) -> Option<CastId> {
        self.selected_id
    }

    /// Records from the last reload, in display order.
    pub fn records(&self) -> &[CastRecord] {
        &self.records
    }

    /// Rendered list lines from the last reload.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First rendered line of the selected record, when it is still listed.
    pub fn selected_line(&self) -> Option<usize> {
        let id = self.selected_id?;
        self.records
            .iter()
            .position(|record| record.id == id)
            .map(first_line_for_record)
    }

    /// Reloads every record from the store and re-renders the list.
    pub fn refresh(&mut self) -> ControllerResult<()> {
        self.records = self.repo.list_all()?;
        self.lines = render_lines(&self.records);
        Ok(())
    }

    /// Binds the form to the record owning rendered line `line_index`.
    ///
    /// Returns `false` and changes nothing when the line is past the list.
    pub fn select_line(&mut self, line_index: usize, fields: &mut FormFields) -> bool {
        let Some(record) = self.records.get(record_index_for_line(line_index)) else {
            return false;
        };
        self.selected_id = Some(record.id);
        *fields = FormFields::from_record(record);
        true
    }

    /// Back to `Idle` with empty buffers.
    pub fn clear(&mut self, fields: &mut FormFields) {
        self.selected_id = None;
        *fields = FormFields::default();
        info!(
            "event={} module=controller status=ok",
            Action::Clear.event_name()
        );
    }

    /// Creates a cast from the buffers, ignoring any selection.
    ///
    /// On success the form returns to `Idle` and the buffers are emptied.
    pub fn add(&mut self, fields: &mut FormFields) -> ControllerResult<CastId> {
        let result = self.try_add(fields);
        log_outcome(Action::Add, &result);
        let id = result?;
        self.clear(fields);
        self.refresh()?;
        Ok(id)
    }

    /// Overwrites the selected cast with the buffers. Stays `Editing`.
    pub fn update(&mut self, fields: &FormFields) -> ControllerResult<CastId> {
        let result = self.try_update(fields);
        log_outcome(Action::Update, &result);
        let id = result?;
        self.refresh()?;
        Ok(id)
    }

    /// Deletes the selected cast after confirmation.
    ///
    /// On confirmation the form returns to `Idle` and the buffers are emptied;
    /// on decline nothing changes.
    pub fn delete(
        &mut self,
        fields: &mut FormFields,
        confirm: &mut impl Confirm,
    ) -> ControllerResult<DeleteOutcome> {
        let result = self.try_delete(confirm);
        log_outcome(Action::Delete, &result);
        let outcome = result?;
        if let DeleteOutcome::Deleted(_) = outcome {
            self.clear(fields);
            self.refresh()?;
        }
        Ok(outcome)
    }

    fn try_add(&self, fields: &FormFields) -> ControllerResult<CastId> {
        let draft = fields.to_draft()?;
        Ok(self.repo.create(&draft)?)
    }

    fn try_update(&self, fields: &FormFields) -> ControllerResult<CastId> {
        let id = self
            .selected_id
            .ok_or(ControllerError::NoSelection(Action::Update))?;
        let draft = fields.to_draft()?;
        self.repo.update(id, &draft)?;
        Ok(id)
    }

    fn try_delete(&self, confirm: &mut impl Confirm) -> ControllerResult<DeleteOutcome> {
        let id = self
            .selected_id
            .ok_or(ControllerError::NoSelection(Action::Delete))?;
        if !confirm.confirm(&Notice::confirm_delete()) {
            return Ok(DeleteOutcome::Declined);
        }
        self.repo.delete(id)?;
        Ok(DeleteOutcome::Deleted(id))
    }
}

fn log_outcome<T: std::fmt::Debug>(action: Action, result: &ControllerResult<T>) {
    match result {
        Ok(value) => info!(
            "event={} module=controller status=ok result={value:?}",
            action.event_name()
        ),
        Err(ControllerError::Repo(err)) => error!(
            "event={} module=controller status=error error={err}",
            action.event_name()
        ),
        Err(err) => warn!(
            "event={} module=controller status=rejected reason={err}",
            action.event_name()
        ),
    }
}
