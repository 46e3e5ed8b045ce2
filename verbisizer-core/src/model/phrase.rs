use super::probability::RandomSource;
use super::word_store::{WordCategory, WordStore};
use crate::error::Result;

/// Article used in front of decorated nouns.
pub const ARTICLE: &str = "the";

/// Builds a noun phrase: `[the] [adjective] noun`.
///
/// When both are requested the article always comes before the adjective.
/// Draws the adjective (if any) before the noun.
pub fn descriptive_noun<S: RandomSource + ?Sized>(
	words: &WordStore,
	with_adjective: bool,
	with_article: bool,
	source: &mut S,
) -> Result<String> {
	let mut parts: Vec<&str> = Vec::with_capacity(3);

	if with_article {
		parts.push(ARTICLE);
	}
	if with_adjective {
		parts.push(words.pick(WordCategory::Adjective, source)?);
	}
	parts.push(words.pick(WordCategory::Noun, source)?);

	Ok(parts.join(" "))
}

/// Builds a preposition phrase: `preposition the [adjective] noun`.
///
/// The article is unconditional here.
pub fn preposition_phrase<S: RandomSource + ?Sized>(
	words: &WordStore,
	with_adjective: bool,
	source: &mut S,
) -> Result<String> {
	let mut parts: Vec<&str> = Vec::with_capacity(4);

	parts.push(words.pick(WordCategory::Preposition, source)?);
	parts.push(ARTICLE);
	if with_adjective {
		parts.push(words.pick(WordCategory::Adjective, source)?);
	}
	parts.push(words.pick(WordCategory::Noun, source)?);

	Ok(parts.join(" "))
}

/// Builds a sentence subject.
///
/// Flips a fair coin (`next_index(2)`): `0` builds a [`descriptive_noun`]
/// with the given decorations, `1` picks a single pronoun. Only the chosen
/// branch draws words.
pub fn subject<S: RandomSource + ?Sized>(
	words: &WordStore,
	with_adjective: bool,
	with_article: bool,
	source: &mut S,
) -> Result<String> {
	match source.next_index(2) {
		0 => descriptive_noun(words, with_adjective, with_article, source),
		_ => Ok(words.pick(WordCategory::Pronoun, source)?.to_owned()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::VerbisizerError;
	use crate::model::probability::tests::ScriptedSource;

	fn store() -> WordStore {
		WordStore::from_words([
			(WordCategory::Adjective, vec!["quick", "lazy"]),
			(WordCategory::Noun, vec!["fox", "dog"]),
			(WordCategory::Pronoun, vec!["it", "they"]),
			(WordCategory::Preposition, vec!["over", "under"]),
		])
	}

	#[test]
	fn descriptive_noun_orders_article_then_adjective() {
		let words = store();
		let cases: [(bool, bool, Vec<usize>, &str); 4] = [
			(false, false, vec![1], "dog"),
			(false, true, vec![0], "the fox"),
			(true, false, vec![1, 0], "lazy fox"),
			(true, true, vec![0, 1], "the quick dog"),
		];
		for (adjective, article, indices, expected) in cases {
			let mut source = ScriptedSource::new(&[], &indices);
			assert_eq!(descriptive_noun(&words, adjective, article, &mut source).unwrap(), expected);
			assert!(source.is_exhausted());
		}
	}

	#[test]
	fn preposition_phrase_always_has_article() {
		let words = store();

		let mut source = ScriptedSource::new(&[], &[1, 0]);
		assert_eq!(preposition_phrase(&words, false, &mut source).unwrap(), "under the fox");

		let mut source = ScriptedSource::new(&[], &[0, 1, 1]);
		assert_eq!(preposition_phrase(&words, true, &mut source).unwrap(), "over the lazy dog");
		assert!(source.is_exhausted());
	}

	#[test]
	fn subject_coin_selects_branch() {
		let words = store();

		let mut source = ScriptedSource::new(&[], &[0, 0, 1]);
		assert_eq!(subject(&words, true, true, &mut source).unwrap(), "the quick dog");
		assert!(source.is_exhausted());

		let mut source = ScriptedSource::new(&[], &[1, 1]);
		assert_eq!(subject(&words, true, true, &mut source).unwrap(), "they");
		assert!(source.is_exhausted());
	}

	#[test]
	fn missing_noun_fails() {
		let words = WordStore::from_words([(WordCategory::Preposition, vec!["over"])]);
		let mut source = ScriptedSource::new(&[], &[0]);
		assert!(matches!(
			preposition_phrase(&words, false, &mut source),
			Err(VerbisizerError::EmptyCategory(WordCategory::Noun))
		));
	}
}
