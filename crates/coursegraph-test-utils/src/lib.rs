//! Various helper functions for testing
//!
//! Helpers panic on malformed fixture data, the fixtures are part of the test suite.

use coursegraph::{Catalog, CourseGraphOptions};
use coursegraph::requirements::MajorDocument;

/// Catalog fixture spanning MATH, CMPSC, PSTAT and ECON, including a writing-emphasis
/// subject and a range-valued unit string.
pub fn get_catalog() -> Catalog {
	Catalog::generate_from_json(include_str!("../test-data/catalog-small.json"))
		.expect("fixture catalog failed to generate")
}

/// Requirement document exercising every grammar variant against [`get_catalog`].
pub fn get_major_document() -> MajorDocument {
	let v: serde_json::Value = serde_json::from_str(include_str!("../test-data/major-statistics.json"))
		.expect("fixture major document isn't valid JSON");
	MajorDocument::read_from_json(&v).expect("fixture major document failed to read")
}

/// Builds a single catalog record value for ad-hoc catalogs.
pub fn record(subject: &str, number: &str, title: &str, units: &str, prerequisites: Option<&str>) -> serde_json::Value {
	serde_json::json!({
		"subject": subject,
		"number": number,
		"title": title,
		"units": units,
		"prerequisites_raw": prerequisites,
	})
}

/// A scratch data directory for cache tests.
///
/// Keep the `TempDir` alive as long as the options, dropping it removes the directory.
pub fn scratch_options() -> (tempfile::TempDir, CourseGraphOptions) {
	let dir = tempfile::tempdir().expect("failed to create scratch directory");
	let mut options = CourseGraphOptions::default();
	assert!(options.set_data_dir(dir.path().to_path_buf()));
	(dir, options)
}
