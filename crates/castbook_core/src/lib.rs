//! Core domain logic for Castbook.
//! Owns the cast store and the form/list controller; front-ends only render.

pub mod labels;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging};
pub use model::cast::{CastDraft, CastId, CastRecord, CastValidationError};
pub use model::form::{parse_age, FormFields};
pub use repo::cast_repo::{
    CastRepository, RepoError, RepoResult, SqliteCastStore, SCHEMA_VERSION,
};
pub use service::form_controller::{
    Action, Confirm, ControllerError, ControllerResult, DeleteOutcome, FormController, FormState,
    Notice, NoticeKind,
};
pub use view::{line_kind, record_index_for_line, render_lines, LineKind, LINES_PER_RECORD};
