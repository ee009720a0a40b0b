//! Cast domain model.
//!
//! # Responsibility
//! - Define the persisted cast record and its write-side draft.
//! - Define the raw form buffers and their conversion into a draft.
//!
//! # Invariants
//! - Every persisted cast has non-empty `store_name` and `person_name`.
//! - `note` is `None` rather than an empty string.

pub mod cast;
pub mod form;
