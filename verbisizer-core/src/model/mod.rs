//! Top-level module for the sentence generation system.
//!
//! This module provides a template-driven line composer, including:
//! - A part-of-speech dictionary (`WordStore`)
//! - Probability gates over an injectable random source (`RandomSource`)
//! - Subject-verb agreement (`conjugate`)
//! - Phrase builders and sentence templates
//! - A high-level generation interface (`Generator`)

/// High-level interface composing lines from a loaded dictionary.
///
/// Gates optional elements, builds phrases and fills a random template.
pub mod generator;

/// Generation parameters (line count and inclusion gates).
///
/// Loadable from partial TOML files.
pub mod generation_config;

/// Part-of-speech categories and the read-only dictionary.
pub mod word_store;

/// Random source abstraction and the probability gate.
pub mod probability;

/// Verb agreement against a fixed set of plural subjects.
pub mod conjugator;

/// Noun, subject and preposition phrase builders.
pub mod phrase;

/// Fixed sentence templates and the parts they are filled with.
pub mod template;
