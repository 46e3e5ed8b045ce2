//! End-to-end generation from dictionaries on disk.

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;
use verbisizer_core::VerbisizerError;
use verbisizer_core::model::generation_config::GenerationConfig;
use verbisizer_core::model::generator::Generator;
use verbisizer_core::model::word_store::{WordCategory, WordStore};

/// Writes one dictionary file per category.
fn word_dir(entries: &[(&str, &str)]) -> TempDir {
	let dir = tempfile::tempdir().expect("Failed to create temp dir");
	for (file, contents) in entries {
		fs::write(dir.path().join(file), contents).expect("Failed to write word file");
	}
	dir
}

fn single_word_dir() -> TempDir {
	word_dir(&[
		("adjectives.txt", "quick\n"),
		("adverbs.txt", "quietly\n"),
		("nouns.txt", "fox\n"),
		("pronouns.txt", "it\n"),
		("prepositions.txt", "over\n"),
		("verbs.txt", "jump\n"),
	])
}

fn rich_dir() -> TempDir {
	word_dir(&[
		("adjectives.txt", "quick\nlazy\nbrown\n"),
		("adverbs.txt", "quietly\nboldly\n"),
		("nouns.txt", "fox\ndog\nriver\n"),
		("pronouns.txt", "it\nthey\nsome\nhe\n"),
		("prepositions.txt", "over\nunder\nbeside\n"),
		("verbs.txt", "jump\nrun\nsing\n"),
	])
}

fn load(dir: &Path) -> Generator {
	Generator::from_dir(dir).expect("Failed to load word store")
}

#[test]
fn only_preposition_phrase_when_subject_and_adverb_are_shut() {
	let dir = single_word_dir();
	let generator = load(dir.path());
	let config = GenerationConfig { lines: 200, include_subject: 1.0, include_adverb: 1.0, ..Default::default() };
	let mut rng = StdRng::seed_from_u64(1);

	let lines = generator.generate(&config, &mut rng).unwrap();
	assert_eq!(lines.len(), 200);
	for line in &lines {
		assert!(line == "over the quick fox" || line == "over the fox", "unexpected line {line:?}");
	}
	assert!(lines.iter().any(|l| l == "over the quick fox"));
	assert!(lines.iter().any(|l| l == "over the fox"));
}

#[test]
fn everything_open_builds_full_sentences() {
	let dir = single_word_dir();
	let generator = load(dir.path());
	let config = GenerationConfig {
		lines: 300,
		include_subject: 0.0,
		include_adverb: 0.0,
		include_adjective_with_preposition: 0.0,
		include_adjective_with_noun: 0.0,
		include_article_with_noun: 0.0,
	};
	let mut rng = StdRng::seed_from_u64(2);

	let expected = [
		"the quick fox jumps quietly over the quick fox",
		"quietly the quick fox jumps over the quick fox",
		"over the quick fox the quick fox jumps quietly",
		"it jumps quietly over the quick fox",
		"quietly it jumps over the quick fox",
		"over the quick fox it jumps quietly",
	];
	for line in generator.generate(&config, &mut rng).unwrap() {
		assert!(expected.contains(&line.as_str()), "unexpected line {line:?}");
	}
}

#[test]
fn every_line_contains_exactly_one_preposition() {
	let dir = rich_dir();
	let generator = load(dir.path());
	let prepositions = generator.words().words(WordCategory::Preposition).to_vec();
	let config = GenerationConfig { lines: 1_000, ..Default::default() };
	let mut rng = StdRng::seed_from_u64(3);

	for line in generator.generate(&config, &mut rng).unwrap() {
		assert!(!line.is_empty());
		let count = line.split(' ').filter(|w| prepositions.iter().any(|p| p == w)).count();
		assert_eq!(count, 1, "line {line:?}");
	}
}

#[test]
fn same_seed_same_lines() {
	let dir = rich_dir();
	let generator = load(dir.path());
	let config = GenerationConfig { lines: 50, ..Default::default() };

	let first = generator.generate(&config, &mut StdRng::seed_from_u64(77)).unwrap();
	let second = generator.generate(&config, &mut StdRng::seed_from_u64(77)).unwrap();
	assert_eq!(first, second);
}

#[test]
fn picks_stay_within_loaded_lists() {
	let dir = rich_dir();
	let store = WordStore::load(dir.path()).unwrap();
	let mut rng = StdRng::seed_from_u64(4);

	for category in WordCategory::ALL {
		for _ in 0..100 {
			let word = store.pick(category, &mut rng).unwrap();
			assert!(store.words(category).iter().any(|w| w == word));
		}
	}
}

#[test]
fn missing_directory_is_a_load_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = Generator::from_dir(dir.path().join("nowhere")).unwrap_err();
	match err {
		VerbisizerError::MissingWordFiles { files, .. } => assert_eq!(files.len(), 6),
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn empty_adverb_file_fails_only_when_an_adverb_is_needed() {
	let dir = single_word_dir();
	fs::write(dir.path().join("adverbs.txt"), "").unwrap();
	let generator = load(dir.path());
	let mut rng = StdRng::seed_from_u64(5);

	let shut = GenerationConfig { lines: 20, include_adverb: 1.0, ..Default::default() };
	assert_eq!(generator.generate(&shut, &mut rng).unwrap().len(), 20);

	let open = GenerationConfig { lines: 1, include_adverb: 0.0, ..Default::default() };
	assert!(matches!(
		generator.generate(&open, &mut rng),
		Err(VerbisizerError::EmptyCategory(WordCategory::Adverb))
	));
}
