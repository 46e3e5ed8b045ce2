use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::word_store::WordCategory;

/// Errors raised while loading dictionaries or composing lines.
///
/// Every variant is fatal for the current run: there is no fallback word
/// and no partial dictionary.
#[derive(Debug, Error)]
pub enum VerbisizerError {
	/// One or more expected word files are absent from the word directory.
	#[error("missing word files in {}: {}", dir.display(), files.join(", "))]
	MissingWordFiles {
		dir: PathBuf,
		files: Vec<String>,
	},

	/// A word file exists but could not be read.
	#[error("failed to read word file {}: {source}", path.display())]
	ReadWordFile {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A category has no words to pick from.
	#[error("no words loaded for {0}")]
	EmptyCategory(WordCategory),

	/// Generation config text is not valid.
	#[error("invalid config: {0}")]
	ConfigSyntax(String),

	/// A generation config file could not be read or parsed.
	#[error("invalid config file {}: {message}", path.display())]
	Config {
		path: PathBuf,
		message: String,
	},
}

impl VerbisizerError {
	/// Returns `true` for the errors raised while loading the word store.
	pub fn is_load_error(&self) -> bool {
		matches!(self, Self::MissingWordFiles { .. } | Self::ReadWordFile { .. })
	}
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, VerbisizerError>;
