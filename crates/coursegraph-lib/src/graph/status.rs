//! Completion-driven status recomputation.

use std::collections::HashSet;

use petgraph::prelude::*;

use super::{CourseGraph, CourseStatus};
use crate::catalog::{Catalog, CourseCode};

/// The set of courses a student has already completed.
///
/// Treated as an immutable snapshot; statuses derive from whatever the set holds at
/// recomputation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionSet {
	completed: HashSet<CourseCode>,
}

impl CompletionSet {
	pub fn new(codes: impl IntoIterator<Item = CourseCode>) -> Self {
		CompletionSet { completed: codes.into_iter().collect() }
	}

	/// Canonicalizes raw course-identifier strings into a completion set.
	///
	/// Transcript data is not assumed normalized. Each string is parsed leniently and
	/// resolved through the catalog, including the writing-emphasis alias; codes the
	/// catalog doesn't know are kept as parsed, while unparseable strings are dropped
	/// with a warning.
	pub fn from_raw(raw: &[String], catalog: &Catalog) -> Self {
		let mut completed = HashSet::new();
		for text in raw {
			let code = match CourseCode::parse(text) {
				Ok(code) => code,
				Err(e) => {
					log::warn!("ignoring unrecognised completion {:?}: {}", text, e);
					continue
				}
			};
			let code = match catalog.resolve(&code) {
				Some(canonical) => canonical.clone(),
				None => code.base_alias()
					.and_then(|base| catalog.resolve(&base).cloned())
					.unwrap_or(code),
			};
			completed.insert(code);
		}
		CompletionSet { completed }
	}

	pub fn contains(&self, code: &CourseCode) -> bool {
		self.completed.contains(code)
	}

	pub fn insert(&mut self, code: CourseCode) -> bool {
		self.completed.insert(code)
	}

	pub fn remove(&mut self, code: &CourseCode) -> bool {
		self.completed.remove(code)
	}

	pub fn len(&self) -> usize {
		self.completed.len()
	}

	pub fn is_empty(&self) -> bool {
		self.completed.is_empty()
	}
}

impl CourseGraph {
	/// Recomputes every course's status and remaining-prerequisite count.
	///
	/// A pure function of the graph and `completions`: every node is rewritten on every
	/// call rather than patched incrementally, so no stale status survives a change in
	/// either direction. Unlock counts are structural and stay untouched.
	pub fn recompute_status(&mut self, completions: &CompletionSet) {
		let indices: Vec<NodeIndex> = self.graph.node_indices().collect();
		for index in indices {
			if completions.contains(&self.graph[index].code) {
				self.graph[index].status = CourseStatus::Completed;
				self.graph[index].remaining_prerequisites = 0;
				continue
			}
			let remaining = self.graph.neighbors_directed(index, Incoming)
				.filter(|p| !completions.contains(&self.graph[*p].code))
				.count();
			self.graph[index].status = if remaining == 0 { CourseStatus::Available } else { CourseStatus::Locked };
			self.graph[index].remaining_prerequisites = remaining;
		}
	}
}
