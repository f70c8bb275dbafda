use serde::*;

/// A canonical course identifier.
///
/// Uppercase subject token plus uppercase alphanumeric course number, rendered
/// `PSTAT-120A`. Two spellings that normalize to the same `CourseCode` are the same
/// course. Mainly used as an index into [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CourseCode {
	subject: String,
	number: String,
}

/// Subjects ending in this letter are writing-emphasis variants of a base subject.
const ALIAS_SUFFIX: char = 'W';

impl CourseCode {
	pub fn new(subject: &str, number: &str) -> crate::Result<Self> {
		let subject = subject.trim().to_ascii_uppercase();
		let number = number.trim().to_ascii_uppercase();

		if subject.len() < 2 || !subject.chars().all(|c| c.is_ascii_alphabetic()) {
			return Err(crate::Error::Parse(format!("invalid subject token: {:?}", subject)));
		}
		let starts_with_digit = number.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false);
		if !starts_with_digit || !number.chars().all(|c| c.is_ascii_alphanumeric()) {
			return Err(crate::Error::Parse(format!("invalid course number: {:?}", number)));
		}

		Ok(CourseCode { subject, number })
	}

	/// Parses loose spellings such as `"PSTAT 120A"`, `"PSTAT-120A"` or `"pstat120a"`.
	pub fn parse(text: &str) -> crate::Result<Self> {
		let text = text.trim();
		let split = text.find(|c: char| c.is_ascii_digit())
			.ok_or_else(|| crate::Error::Parse(format!("course code has no number: {:?}", text)))?;
		let (subject, number) = text.split_at(split);
		Self::new(subject.trim_end_matches(|c| c == ' ' || c == '-'), number)
	}

	pub fn subject(&self) -> &str {
		&self.subject
	}

	pub fn number(&self) -> &str {
		&self.number
	}

	/// The same number under the base subject, when this subject carries the
	/// writing-emphasis suffix.
	///
	/// `PSTATW-120A` folds to `PSTAT-120A`; subjects without the suffix (or whose stem
	/// would drop below two letters) return `None`.
	pub fn base_alias(&self) -> Option<CourseCode> {
		let stem = self.subject.strip_suffix(ALIAS_SUFFIX)?;
		if stem.len() < 2 {
			return None;
		}
		Some(CourseCode { subject: stem.to_string(), number: self.number.clone() })
	}

	/// Human-facing spelling with a space instead of the canonical separator, e.g. `PSTAT 120A`.
	pub fn label(&self) -> String {
		format!("{} {}", self.subject, self.number)
	}
}

impl TryFrom<String> for CourseCode {
	type Error = crate::Error;
	fn try_from(value: String) -> Result<Self, Self::Error> { Self::parse(&value) }
}

impl TryFrom<&str> for CourseCode {
	type Error = crate::Error;
	fn try_from(value: &str) -> Result<Self, Self::Error> { Self::parse(value) }
}

impl std::cmp::Ord for CourseCode {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		match self.subject.cmp(&other.subject) {
			core::cmp::Ordering::Equal => {}
			ord => return ord,
		}
		self.number.cmp(&other.number)
	}
}

impl std::cmp::PartialOrd for CourseCode {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl std::fmt::Display for CourseCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}-{}", self.subject, self.number)
	}
}
