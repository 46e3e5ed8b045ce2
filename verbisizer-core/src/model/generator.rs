use std::path::Path;

use log::trace;

use super::conjugator::conjugate;
use super::generation_config::GenerationConfig;
use super::phrase;
use super::probability::{RandomSource, decide};
use super::template::{LineParts, Template};
use super::word_store::{WordCategory, WordStore};
use crate::error::Result;

/// High-level line composer over a read-only [`WordStore`].
///
/// # Responsibilities
/// - Own the dictionary for the lifetime of the run
/// - Gate the optional sentence elements
/// - Assemble the parts into a randomly chosen [`Template`]
///
/// Lines share no state besides the dictionary, so every call to
/// [`Generator::compose_line`] is independent.
#[derive(Debug, Clone)]
pub struct Generator {
	words: WordStore,
}

impl Generator {
	/// Wraps an already built word store.
	pub fn new(words: WordStore) -> Self {
		Self { words }
	}

	/// Loads the six dictionary files from `dir` and wraps them.
	///
	/// # Errors
	/// See [`WordStore::load`].
	pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
		Ok(Self::new(WordStore::load(dir)?))
	}

	/// Read-only access to the dictionary.
	pub fn words(&self) -> &WordStore {
		&self.words
	}

	/// Builds the parts of one line and picks its template.
	///
	/// # Behavior
	/// Draws from `source` in this order:
	/// 1. Preposition-adjective gate, then the preposition phrase words.
	/// 2. Subject gate. When open: noun-adjective gate, article gate, the
	///    subject itself, then a verb conjugated against it.
	/// 3. Adverb gate, then the adverb when open.
	/// 4. The template.
	///
	/// # Errors
	/// Returns [`VerbisizerError::EmptyCategory`](crate::VerbisizerError::EmptyCategory)
	/// as soon as a required category has no words.
	pub fn compose_parts<S: RandomSource + ?Sized>(
		&self,
		config: &GenerationConfig,
		source: &mut S,
	) -> Result<(Template, LineParts)> {
		let with_adjective = decide(config.include_adjective_with_preposition, source);
		let preposition = phrase::preposition_phrase(&self.words, with_adjective, source)?;

		let (subject, verb) = if decide(config.include_subject, source) {
			let with_adjective = decide(config.include_adjective_with_noun, source);
			let with_article = decide(config.include_article_with_noun, source);
			let subject = phrase::subject(&self.words, with_adjective, with_article, source)?;
			let verb = conjugate(&subject, self.words.pick(WordCategory::Verb, source)?);
			(Some(subject), Some(verb))
		} else {
			(None, None)
		};

		let adverb = if decide(config.include_adverb, source) {
			Some(self.words.pick(WordCategory::Adverb, source)?.to_owned())
		} else {
			None
		};

		let template = Template::choose(source);

		Ok((template, LineParts { subject, verb, adverb, preposition }))
	}

	/// Composes one trimmed line.
	///
	/// # Errors
	/// See [`Generator::compose_parts`].
	pub fn compose_line<S: RandomSource + ?Sized>(&self, config: &GenerationConfig, source: &mut S) -> Result<String> {
		let (template, parts) = self.compose_parts(config, source)?;
		let line = template.render(&parts);
		trace!("{:?} -> {:?}", template, line);
		Ok(line)
	}

	/// Composes `config.lines` independent lines and collects them.
	///
	/// Holds every line in memory; callers printing large runs should call
	/// [`Generator::compose_line`] in a loop instead. Stops at the first
	/// error; no partial output is returned.
	pub fn generate<S: RandomSource + ?Sized>(&self, config: &GenerationConfig, source: &mut S) -> Result<Vec<String>> {
		(0..config.lines).map(|_| self.compose_line(config, source)).collect()
	}
}
