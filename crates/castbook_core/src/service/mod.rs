//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into form-level actions.
//! - Keep front-ends decoupled from storage details.

pub mod form_controller;
