//! # Major requirement documents
//!
//! A major's degree requirements are a forest of requirement trees under a closed
//! grammar, see [`RequirementNode`]. Documents are curated data so importing is strict;
//! a malformed or unknown block fails its document.
//!
//! # Usage
//! 1. Read each document with [`MajorDocument::read_from_json`].
//! 1. Look one up with [`find_major`] using its slug.
//! 1. Collect its [`SeedSets`] and hand them to [`graph`](crate::graph) building.

pub mod node;
pub use node::RequirementNode;
pub use node::GroupOperator;
pub use node::CourseSequence;
pub use node::ChooseFrom;
pub use node::EitherArm;

mod import;

mod walker;
pub use walker::SeedSets;

use serde::{Serialize, Deserialize};

/// One major's parsed requirement document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorDocument {
	pub major_name: String,
	pub requirements: Vec<RequirementNode>,
}

impl MajorDocument {
	/// The identity this major is addressed by, see [`slugify`].
	pub fn slug(&self) -> String {
		slugify(&self.major_name)
	}
}

/// Lowercases a major name and collapses every non-alphanumeric run into a single `-`.
pub fn slugify(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	for c in name.chars() {
		if c.is_ascii_alphanumeric() {
			out.push(c.to_ascii_lowercase());
		} else if !out.is_empty() && !out.ends_with('-') {
			out.push('-');
		}
	}
	while out.ends_with('-') {
		out.pop();
	}
	out
}

/// Finds the document whose slug matches `slug`.
pub fn find_major<'a>(documents: &'a [MajorDocument], slug: &str) -> crate::Result<&'a MajorDocument> {
	documents.iter()
		.find(|d| d.slug() == slug)
		.ok_or_else(|| crate::Error::MajorNotFound(slug.to_string()))
}
