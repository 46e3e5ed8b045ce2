/// Subjects that take the base verb form.
///
/// Membership is exact and case-sensitive: `"They"` is not in the set.
pub const PLURAL_SUBJECTS: [&str; 17] = [
	"all", "few", "I", "many", "most", "none", "others", "ours", "several", "some", "theirs", "these",
	"they", "those", "we", "you", "yours",
];

/// Returns `true` if `subject` takes the base verb form.
pub fn is_plural_subject(subject: &str) -> bool {
	PLURAL_SUBJECTS.contains(&subject)
}

/// Conjugates `verb` to agree with `subject`.
///
/// Subjects in [`PLURAL_SUBJECTS`] keep the verb unchanged; any other
/// subject is treated as third person singular and gets a literal `"s"`.
///
/// Irregular suffixes are not handled (`"address"` becomes `"addresss"`).
pub fn conjugate(subject: &str, verb: &str) -> String {
	if is_plural_subject(subject) {
		verb.to_owned()
	} else {
		format!("{verb}s")
	}
}
