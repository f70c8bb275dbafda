use serde::*;

/// A single course catalog entry.
///
/// Fields mirror the scraped record shape. Entries are owned by
/// [`Catalog`](super::Catalog) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
	pub subject: String,
	pub number: String,
	pub title: String,
	/// Unit value collapsed from the catalog's string form, see [`parse_units`].
	pub units: u32,
	/// Free prerequisite prose exactly as scraped, or `None` when the course has none.
	pub prerequisites_raw: Option<String>,
	pub description: Option<String>,
}

/// Collapses a catalog unit string to a single number.
///
/// Catalog strings are `"4"` in the common case but may carry a range such as `"2-4"`.
/// The first two embedded integers are read and the larger one wins; strings with no
/// digits at all give 0.
pub fn parse_units(raw: &str) -> u32 {
	let mut best = 0u32;
	let mut seen = 0;
	let mut run = String::new();
	for c in raw.chars().chain(std::iter::once(' ')) {
		if c.is_ascii_digit() {
			run.push(c);
			continue;
		}
		if run.is_empty() {
			continue;
		}
		best = best.max(run.parse().unwrap_or(0));
		run.clear();
		seen += 1;
		if seen == 2 {
			break;
		}
	}
	best
}
