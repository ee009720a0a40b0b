//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the cast store contract used by the form controller.
//! - Isolate SQLite query details from controller orchestration.
//!
//! # Invariants
//! - Stores persist drafts as given; validation belongs to callers.
//! - Read paths reject invalid persisted rows instead of masking them.

pub mod cast_repo;
