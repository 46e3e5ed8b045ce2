//! Random sentence generation from part-of-speech word lists.
//!
//! This crate provides the sentence composition pipeline, including:
//! - A read-only word store indexed by part of speech
//! - Probability gates driven by an injectable random source
//! - Simplistic subject-verb agreement
//! - Phrase builders and fixed sentence templates
//!
//! Dictionary loading goes through crate-private I/O helpers; callers only
//! see the high-level [`model::generator::Generator`] API.

/// Errors shared by the loader and the composer.
pub mod error;

/// Word store, gates, phrase builders and the line composer.
pub mod model;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Result, VerbisizerError};
