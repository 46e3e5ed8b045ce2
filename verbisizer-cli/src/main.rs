use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use verbisizer_core::model::generation_config::GenerationConfig;
use verbisizer_core::model::generator::Generator;
use verbisizer_core::model::probability::RandomSource;

/// Run the verbisizer: print random sentences built from word lists
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
	/// The base directory where the dictionary files are stored. The following
	/// files should be available: adjectives.txt, adverbs.txt, nouns.txt,
	/// pronouns.txt, prepositions.txt, verbs.txt
	#[arg(value_name = "WORDDIR")]
	worddir: PathBuf,

	/// TOML file with generation settings; explicit flags take precedence
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// The number of lines to be verbisized [default: 10]
	#[arg(long, value_name = "N")]
	lines: Option<usize>,

	/// Likelihood of including a random subject & associated verb in the line [default: 0.5]
	#[arg(long, value_name = "P", allow_negative_numbers = true)]
	include_subject: Option<f64>,

	/// Likelihood of including an adverb in the line [default: 0.2]
	#[arg(long, value_name = "P", allow_negative_numbers = true)]
	include_adverb: Option<f64>,

	/// Likelihood of including an adjective with the preposition [default: 0.5]
	#[arg(long, value_name = "P", allow_negative_numbers = true)]
	include_adjective_with_preposition: Option<f64>,

	/// Likelihood of prefixing the subject noun with an adjective (if generated) [default: 0.5]
	#[arg(long, value_name = "P", allow_negative_numbers = true)]
	include_adjective_with_noun: Option<f64>,

	/// Likelihood of prefixing the subject noun with the article "the" (if generated) [default: 0.3]
	#[arg(long, value_name = "P", allow_negative_numbers = true)]
	include_article_with_noun: Option<f64>,

	/// Seed for reproducible output
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,
}

impl Cli {
	/// Resolves the generation settings.
	///
	/// Built-in defaults, then the config file (if any), then explicit flags.
	fn generation_config(&self) -> Result<GenerationConfig, Box<dyn std::error::Error>> {
		let mut config = match &self.config {
			Some(path) => GenerationConfig::from_toml_file(path)?,
			None => GenerationConfig::default(),
		};

		if let Some(lines) = self.lines {
			config.lines = lines;
		}
		if let Some(p) = self.include_subject {
			config.include_subject = p;
		}
		if let Some(p) = self.include_adverb {
			config.include_adverb = p;
		}
		if let Some(p) = self.include_adjective_with_preposition {
			config.include_adjective_with_preposition = p;
		}
		if let Some(p) = self.include_adjective_with_noun {
			config.include_adjective_with_noun = p;
		}
		if let Some(p) = self.include_article_with_noun {
			config.include_article_with_noun = p;
		}

		Ok(config)
	}
}

/// Writes `config.lines` lines to `out`, each as soon as it is composed.
///
/// Lines written before a failure stay written.
fn write_lines<S, W>(
	generator: &Generator,
	config: &GenerationConfig,
	source: &mut S,
	out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
	S: RandomSource + ?Sized,
	W: Write,
{
	for _ in 0..config.lines {
		let line = generator.compose_line(config, source)?;
		writeln!(out, "{line}")?;
	}
	out.flush()?;
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();

	let config = match cli.generation_config() {
		Ok(config) => config,
		Err(e) => {
			error!("{e}");
			process::exit(1);
		}
	};

	// Missing dictionaries are a usage problem: show the help and bail out
	let generator = match Generator::from_dir(&cli.worddir) {
		Ok(generator) => generator,
		Err(e) => {
			error!("{e}");
			Cli::command().print_help()?;
			process::exit(1);
		}
	};

	let mut out = io::stdout().lock();
	let written = match cli.seed {
		Some(seed) => write_lines(&generator, &config, &mut StdRng::seed_from_u64(seed), &mut out),
		None => write_lines(&generator, &config, &mut rand::rng(), &mut out),
	};
	if let Err(e) = written {
		error!("{e}");
		process::exit(1);
	}

	Ok(())
}
