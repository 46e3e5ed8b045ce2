use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, VerbisizerError};

/// Parameters controlling line generation.
///
/// Each probability feeds a gate (see [`decide`](super::probability::decide)),
/// so `0.0` always includes the element and `1.0` practically never does.
/// Values are not range-checked: out-of-range numbers simply saturate.
///
/// Deserializes from partial TOML; absent keys take the defaults and
/// unknown keys are rejected:
///
/// ```toml
/// lines = 4
/// include_adverb = 0.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
	/// Number of lines produced by a run.
	pub lines: usize,

	/// Gate for the subject and its verb.
	pub include_subject: f64,

	/// Gate for the adverb.
	pub include_adverb: f64,

	/// Gate for the adjective inside the preposition phrase.
	pub include_adjective_with_preposition: f64,

	/// Gate for the adjective in front of a subject noun.
	pub include_adjective_with_noun: f64,

	/// Gate for the article in front of a subject noun.
	pub include_article_with_noun: f64,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			lines: 10,
			include_subject: 0.5,
			include_adverb: 0.2,
			include_adjective_with_preposition: 0.5,
			include_adjective_with_noun: 0.5,
			include_article_with_noun: 0.3,
		}
	}
}

impl GenerationConfig {
	/// Parses a config from TOML text.
	///
	/// # Errors
	/// Returns [`VerbisizerError::ConfigSyntax`] if the text is not valid
	/// TOML, a value has the wrong type or a key is unknown.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		Self::parse(text).map_err(VerbisizerError::ConfigSyntax)
	}

	/// Loads a config from a TOML file.
	///
	/// # Errors
	/// Returns [`VerbisizerError::Config`] naming `path` if the file cannot be
	/// read or parsed.
	pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		fs::read_to_string(path)
			.map_err(|e| e.to_string())
			.and_then(|text| Self::parse(&text))
			.map_err(|message| VerbisizerError::Config { path: path.to_path_buf(), message })
	}

	fn parse(text: &str) -> std::result::Result<Self, String> {
		toml::from_str(text).map_err(|e| e.to_string())
	}
}
