//! Course-mention scanning over free prerequisite prose.
//!
//! Catalog prerequisite text is unstructured ("MATH 3B with a grade of C or better, or
//! instructor permission"). Scanning approximates it as a flat conjunction of every
//! course code mentioned; "either/or" wording and grade minimums are not reconstructed.

use std::collections::HashSet;

use super::{Catalog, CourseCode};

/// Finds course-code mentions in free text and canonicalizes them against a catalog.
pub struct PrereqScanner {
	pattern: regex::Regex,
}

impl Default for PrereqScanner {
	fn default() -> Self { Self::new() }
}

impl PrereqScanner {
	pub fn new() -> Self {
		PrereqScanner {
			/* Subject token, optional separator, course number with up to two trailing letters. */
			pattern: regex::Regex::new(r"\b([A-Z]{2,8})[ \-]?([0-9]{1,3}[A-Z]{0,2})\b")
				.expect("course mention pattern failed to compile."),
		}
	}

	/// Returns every catalog course mentioned in `text`, canonicalized.
	///
	/// A textual match only counts if the catalog resolves it, directly or through the
	/// writing-emphasis subject alias in either direction. Membership filtering is what
	/// rejects accidental matches such as grade tokens or codes from other institutions.
	pub fn scan(&self, text: &str, catalog: &Catalog) -> HashSet<CourseCode> {
		let mut found = HashSet::new();

		for caps in self.pattern.captures_iter(text) {
			let candidate = match CourseCode::new(&caps[1], &caps[2]) {
				Ok(c) => c,
				Err(_) => continue,
			};
			if let Some(canonical) = catalog.resolve(&candidate) {
				found.insert(canonical.clone());
				continue;
			}
			/* The text may spell a writing variant while the catalog holds the base course. */
			if let Some(base) = candidate.base_alias() {
				if let Some(canonical) = catalog.resolve(&base) {
					found.insert(canonical.clone());
				}
			}
		}

		found
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn catalog() -> Catalog {
		Catalog::generate_from_records(&[
			serde_json::json!({"subject": "MATH", "number": "3B", "title": "Calculus", "units": "4"}),
			serde_json::json!({"subject": "MATH", "number": "4A", "title": "Linear Algebra", "units": "4"}),
			serde_json::json!({"subject": "PSTAT", "number": "120A", "title": "Probability", "units": "4"}),
			serde_json::json!({"subject": "ECONW", "number": "101", "title": "Economics Writing", "units": "4"}),
		])
	}

	fn scan(text: &str) -> Vec<String> {
		let mut v: Vec<String> = PrereqScanner::new().scan(text, &catalog()).iter().map(|c| c.to_string()).collect();
		v.sort();
		v
	}

	#[test]
	fn scan_finds_mentions_in_prose() {
		assert_eq!(scan("MATH 3B and MATH 4A, each with a grade of C or better."), vec!["MATH-3B", "MATH-4A"]);
	}

	#[test]
	fn scan_rejects_codes_outside_the_catalog() {
		assert_eq!(scan("MATH 3B; or AP Calculus BC score of 4; or CHEM 109A."), vec!["MATH-3B"]);
	}

	#[test]
	fn scan_rejects_grade_tokens() {
		assert!(scan("A GPA 3 or above is required.").is_empty());
	}

	#[test]
	fn scan_folds_writing_spelling_to_catalog_entry() {
		assert_eq!(scan("MATHW 3B or consent of instructor."), vec!["MATH-3B"]);
	}

	#[test]
	fn scan_resolves_base_spelling_to_writing_entry() {
		assert_eq!(scan("ECON 101 recommended."), vec!["ECONW-101"]);
	}

	#[test]
	fn scan_accepts_dashed_and_compact_spellings() {
		assert_eq!(scan("PSTAT-120A or PSTAT120A."), vec!["PSTAT-120A"]);
	}

	#[test]
	fn scan_ignores_lowercase_prose() {
		assert!(scan("open to majors only; see the math department page.").is_empty());
	}
}
