//! Iterators for easier handling of catalog entries.

use super::CourseEntry;

/* Names based on standard iterator names */

pub struct SubjectMatches<'a, I>
where I: Iterator<Item = &'a CourseEntry> {
	underlying: I,
	subject: String,
}

impl<'a, I> Iterator for SubjectMatches<'a, I>
where I: Iterator<Item = &'a CourseEntry> {
	type Item = &'a CourseEntry;
	fn next(&mut self) -> Option<Self::Item> {
		for entry in self.underlying.by_ref() {
			if entry.subject == self.subject {
				return Some(entry)
			}
		}
		None
	}
}

pub trait SubjectMatchesExt<'a>: Iterator<Item = &'a CourseEntry> {
	/// Filters entries to a single subject. The subject is normalized before matching.
	fn subject_matches(self, subject: &str) -> SubjectMatches<'a, Self> where Self: Sized;
}

impl<'a, I: Iterator<Item = &'a CourseEntry>> SubjectMatchesExt<'a> for I {
	fn subject_matches(self, subject: &str) -> SubjectMatches<'a, Self> where Self: Sized {
		SubjectMatches { underlying: self, subject: subject.trim().to_ascii_uppercase() }
	}
}

pub struct WithPrerequisites<'a, I>
where I: Iterator<Item = &'a CourseEntry> {
	underlying: I,
}

impl<'a, I> Iterator for WithPrerequisites<'a, I>
where I: Iterator<Item = &'a CourseEntry> {
	type Item = &'a CourseEntry;
	fn next(&mut self) -> Option<Self::Item> {
		for entry in self.underlying.by_ref() {
			if entry.prerequisites_raw.is_some() {
				return Some(entry)
			}
		}
		None
	}
}

pub trait WithPrerequisitesExt<'a>: Iterator<Item = &'a CourseEntry> {
	/// Filters entries to those carrying prerequisite prose.
	fn with_prerequisites(self) -> WithPrerequisites<'a, Self> where Self: Sized;
}

impl<'a, I: Iterator<Item = &'a CourseEntry>> WithPrerequisitesExt<'a> for I {
	fn with_prerequisites(self) -> WithPrerequisites<'a, Self> where Self: Sized {
		WithPrerequisites { underlying: self }
	}
}
