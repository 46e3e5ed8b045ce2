use super::probability::RandomSource;

/// Parts of a line before template substitution.
///
/// Optional parts stay `None` until rendering, where they become empty
/// strings. `verb` is present exactly when `subject` is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineParts {
	pub subject: Option<String>,
	pub verb: Option<String>,
	pub adverb: Option<String>,
	pub preposition: String,
}

/// Fixed sentence shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
	/// `{subject} {verb} {adverb} {preposition}`
	SubjectFirst,
	/// `{adverb} {subject} {verb} {preposition}`
	AdverbFirst,
	/// `{preposition} {subject} {verb} {adverb}`
	PrepositionFirst,
}

impl Template {
	pub const ALL: [Template; 3] = [Template::SubjectFirst, Template::AdverbFirst, Template::PrepositionFirst];

	/// Picks a template uniformly at random.
	pub fn choose<S: RandomSource + ?Sized>(source: &mut S) -> Self {
		Self::ALL[source.next_index(Self::ALL.len())]
	}

	/// Substitutes `parts` into the template.
	///
	/// Placeholders are separated by single spaces. Absent parts leave their
	/// separators behind; only leading and trailing whitespace is trimmed,
	/// inner runs of spaces are kept.
	pub fn render(self, parts: &LineParts) -> String {
		let subject = parts.subject.as_deref().unwrap_or_default();
		let verb = parts.verb.as_deref().unwrap_or_default();
		let adverb = parts.adverb.as_deref().unwrap_or_default();
		let preposition = parts.preposition.as_str();

		let line = match self {
			Template::SubjectFirst => format!("{subject} {verb} {adverb} {preposition}"),
			Template::AdverbFirst => format!("{adverb} {subject} {verb} {preposition}"),
			Template::PrepositionFirst => format!("{preposition} {subject} {verb} {adverb}"),
		};
		line.trim().to_owned()
	}
}
