//! # The course catalog
//!
//! [`Catalog`] indexes scraped course records under canonical [`CourseCode`]s.
//! Writing-emphasis subjects (trailing `W`) are additionally reachable through their
//! base-subject spelling so that catalog text and requirement documents which disagree
//! on the spelling still land on the same entry.

mod course_code;
pub use course_code::CourseCode;

mod entry;
pub use entry::CourseEntry;

pub mod prereq;
pub use prereq::PrereqScanner;

pub mod iterator;

mod import;
mod generation;

use std::collections::HashMap;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
	entries: HashMap<CourseCode, CourseEntry>,
	aliases: HashMap<CourseCode, CourseCode>,
}

impl Catalog {
	/// Gets the entry for `code`, following the writing-emphasis alias when needed.
	pub fn get(&self, code: &CourseCode) -> Option<&CourseEntry> {
		self.entries.get(code)
			.or_else(|| self.aliases.get(code).and_then(|c| self.entries.get(c)))
	}

	/// Canonicalizes `code` against the catalog.
	///
	/// Returns the identity the course is actually stored under, so aliased spellings
	/// collapse onto their real entry. `None` when the catalog doesn't know the course
	/// at all.
	pub fn resolve(&self, code: &CourseCode) -> Option<&CourseCode> {
		if let Some((canonical, _)) = self.entries.get_key_value(code) {
			return Some(canonical)
		}
		self.aliases.get(code)
	}

	pub fn contains(&self, code: &CourseCode) -> bool {
		self.resolve(code).is_some()
	}

	pub fn codes(&self) -> impl Iterator<Item = &CourseCode> {
		self.entries.keys()
	}

	pub fn entries(&self) -> impl Iterator<Item = &CourseEntry> {
		self.entries.values()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Serializes the catalog into the data directory for later sessions.
	pub fn save_to_disk(&self, options: &crate::CourseGraphOptions) -> crate::Result<()> {
		let data = bincode::serialize(self)?;
		std::fs::write(Self::cache_path(options), data)?;
		Ok(())
	}

	/// Loads a catalog previously written by [`Catalog::save_to_disk`].
	pub fn load_from_disk(options: &crate::CourseGraphOptions) -> crate::Result<Catalog> {
		let data = std::fs::read(Self::cache_path(options))?;
		Ok(bincode::deserialize(&data)?)
	}

	fn cache_path(options: &crate::CourseGraphOptions) -> std::path::PathBuf {
		options.data_dir().join("catalog.bin")
	}
}
