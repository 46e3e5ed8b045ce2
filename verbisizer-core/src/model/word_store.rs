use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{debug, warn};

use super::probability::RandomSource;
use crate::error::{Result, VerbisizerError};
use crate::io::{normalize_folder, read_trimmed_lines};

/// Part of speech a word list is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
	Adjective,
	Adverb,
	Noun,
	Pronoun,
	Preposition,
	Verb,
}

impl WordCategory {
	/// Every category, in dictionary file order.
	pub const ALL: [WordCategory; 6] = [
		WordCategory::Adjective,
		WordCategory::Adverb,
		WordCategory::Noun,
		WordCategory::Pronoun,
		WordCategory::Preposition,
		WordCategory::Verb,
	];

	/// Lowercase singular name, e.g. `"noun"`.
	pub fn name(self) -> &'static str {
		match self {
			WordCategory::Adjective => "adjective",
			WordCategory::Adverb => "adverb",
			WordCategory::Noun => "noun",
			WordCategory::Pronoun => "pronoun",
			WordCategory::Preposition => "preposition",
			WordCategory::Verb => "verb",
		}
	}

	/// Dictionary file name for this category, e.g. `"nouns.txt"`.
	pub fn file_name(self) -> String {
		format!("{}s.txt", self.name())
	}
}

impl fmt::Display for WordCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Read-only dictionary mapping each [`WordCategory`] to its word list.
///
/// Built once, before any generation, then only read. Word order follows
/// file order but carries no meaning: selection is uniform.
///
/// ## Invariants
/// - A store produced by [`WordStore::load`] has an entry for every category
/// - Entries are never mutated after construction
#[derive(Debug, Clone, Default)]
pub struct WordStore {
	words: HashMap<WordCategory, Vec<String>>,
}

impl WordStore {
	/// Loads the six dictionary files from `dir`.
	///
	/// # Behavior
	/// - Expects `adjectives.txt`, `adverbs.txt`, `nouns.txt`, `pronouns.txt`,
	///   `prepositions.txt` and `verbs.txt` directly inside `dir`.
	/// - Every line is trimmed; blank lines are kept as empty words.
	/// - `"."` and `"./"` resolve to the current directory.
	///
	/// # Errors
	/// - [`VerbisizerError::MissingWordFiles`] listing every absent file.
	///   Nothing is read if any file is missing.
	/// - [`VerbisizerError::ReadWordFile`] if a file exists but cannot be read.
	pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
		let folder = normalize_folder(dir);

		let missing: Vec<String> = WordCategory::ALL
			.iter()
			.map(|category| category.file_name())
			.filter(|file| !folder.join(file).is_file())
			.collect();
		if !missing.is_empty() {
			return Err(VerbisizerError::MissingWordFiles { dir: folder, files: missing });
		}

		let mut words = HashMap::new();
		for category in WordCategory::ALL {
			let path = folder.join(category.file_name());
			let list = read_trimmed_lines(&path)
				.map_err(|source| VerbisizerError::ReadWordFile { path: path.clone(), source })?;

			let blanks = list.iter().filter(|word| word.is_empty()).count();
			if blanks > 0 {
				warn!(
					"{} contains {} blank {} entries; they may be picked as empty words",
					path.display(),
					blanks,
					category
				);
			}
			debug!("loaded {} {} words from {}", list.len(), category, path.display());

			words.insert(category, list);
		}

		Ok(Self { words })
	}

	/// Builds a store from in-memory word lists.
	///
	/// Categories absent from `entries` stay empty and fail on [`WordStore::pick`].
	/// A category given twice keeps its last list.
	pub fn from_words<I, W, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = (WordCategory, W)>,
		W: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let words = entries
			.into_iter()
			.map(|(category, list)| (category, list.into_iter().map(Into::into).collect()))
			.collect();
		Self { words }
	}

	/// Returns the word list of a category, empty if none was loaded.
	pub fn words(&self, category: WordCategory) -> &[String] {
		self.words.get(&category).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Picks one word of `category`, uniformly at random.
	///
	/// # Errors
	/// Returns [`VerbisizerError::EmptyCategory`] if the category has no words.
	pub fn pick<S: RandomSource + ?Sized>(&self, category: WordCategory, source: &mut S) -> Result<&str> {
		let list = self.words(category);
		if list.is_empty() {
			return Err(VerbisizerError::EmptyCategory(category));
		}
		Ok(&list[source.next_index(list.len())])
	}
}
