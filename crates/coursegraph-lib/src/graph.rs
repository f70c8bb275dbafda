//! # Prerequisite dependency graphs
//!
//! A [`CourseGraph`] covers every course one major can require, directly or through
//! chains of prerequisites. Edges point from a prerequisite to the course requiring it
//! and are the single source of truth for prerequisite information; remaining counts,
//! unlock counts and summary listings all derive from the edge set.
//!
//! Prerequisite edges come from scanned catalog prose, so they approximate "either/or"
//! wording as a flat conjunction. See [`crate::catalog::prereq`].
//!
//! # Usage
//! 1. Collect the major's [`SeedSets`](crate::requirements::SeedSets).
//! 1. Build with [`GraphBuilder`], which also assigns tiers and unlock counts.
//! 1. Call [`CourseGraph::recompute_status`] whenever the completion set changes.
//! 1. Export per-course records with [`CourseGraph::summaries`].

mod closure;
pub use closure::prerequisite_closure;

mod tier;

mod builder;
pub use builder::GraphBuilder;

mod status;
pub use status::CompletionSet;

use std::collections::{HashMap, HashSet};

use petgraph::prelude::*;
use serde::{Serialize, Deserialize};

use crate::catalog::CourseCode;

/// Division a course belongs to within a major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
	Lower,
	Upper,
	Elective,
}

/// Availability of a course under the current completion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
	Completed,
	Available,
	Locked,
}

/// Node payload of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseNode {
	pub code: CourseCode,
	pub title: String,
	pub units: u32,
	pub division: Division,
	/// Longest-path depth from a prerequisite-free course.
	pub tier: u32,
	pub status: CourseStatus,
	/// Prerequisites not yet satisfied by the completion set.
	pub remaining_prerequisites: usize,
	/// How many graph courses list this one as a prerequisite. Fixed at build time.
	pub unlocks: usize,
}

/// The prerequisite dependency graph of one major.
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
	graph: StableDiGraph<CourseNode, ()>,
	nodes: HashMap<CourseCode, NodeIndex>,
}

impl CourseGraph {
	pub fn len(&self) -> usize {
		self.graph.node_count()
	}

	pub fn is_empty(&self) -> bool {
		self.graph.node_count() == 0
	}

	pub fn contains(&self, code: &CourseCode) -> bool {
		self.nodes.contains_key(code)
	}

	pub fn node(&self, code: &CourseCode) -> Option<&CourseNode> {
		self.nodes.get(code).map(|index| &self.graph[*index])
	}

	pub fn codes(&self) -> impl Iterator<Item = &CourseCode> {
		self.nodes.keys()
	}

	pub fn tier_of(&self, code: &CourseCode) -> Option<u32> {
		self.node(code).map(|n| n.tier)
	}

	pub fn status_of(&self, code: &CourseCode) -> Option<CourseStatus> {
		self.node(code).map(|n| n.status)
	}

	/// In-graph prerequisites of `code`, in code order.
	pub fn prerequisites_of(&self, code: &CourseCode) -> Vec<CourseCode> {
		let index = match self.nodes.get(code) {
			Some(index) => *index,
			None => return Vec::new(),
		};
		let mut prerequisites: Vec<CourseCode> = self.graph.neighbors_directed(index, Incoming)
			.map(|p| self.graph[p].code.clone())
			.collect();
		prerequisites.sort();
		prerequisites
	}

	/// Graph courses listing `code` as a prerequisite, in code order.
	pub fn unlocked_by(&self, code: &CourseCode) -> Vec<CourseCode> {
		let index = match self.nodes.get(code) {
			Some(index) => *index,
			None => return Vec::new(),
		};
		let mut dependents: Vec<CourseCode> = self.graph.neighbors_directed(index, Outgoing)
			.map(|d| self.graph[d].code.clone())
			.collect();
		dependents.sort();
		dependents
	}

	/// Filters raw target spellings down to courses this graph contains.
	///
	/// Order follows the input and duplicates collapse onto their first mention.
	/// Unparseable spellings and courses outside the graph are dropped silently; a
	/// target list is a request for highlighting, not data to validate.
	pub fn known_targets(&self, targets: &[String]) -> Vec<CourseCode> {
		let mut seen = HashSet::new();
		let mut known = Vec::new();
		for text in targets {
			let code = match CourseCode::parse(text) {
				Ok(code) => code,
				Err(_) => continue,
			};
			let code = if self.nodes.contains_key(&code) {
				code
			} else {
				match code.base_alias().filter(|base| self.nodes.contains_key(base)) {
					Some(base) => base,
					None => continue,
				}
			};
			if seen.insert(code.clone()) {
				known.push(code);
			}
		}
		known
	}

	/// Per-course export records, in code order.
	pub fn summaries(&self) -> Vec<CourseSummary> {
		let mut summaries: Vec<CourseSummary> = self.graph.node_indices()
			.map(|index| {
				let node = &self.graph[index];
				let prerequisites: Vec<String> = self.prerequisites_of(&node.code)
					.iter()
					.map(|c| c.to_string())
					.collect();
				CourseSummary {
					id: node.code.to_string(),
					label: node.code.label(),
					title: node.title.clone(),
					units: node.units,
					tier: node.tier,
					status: node.status,
					prerequisite_count: prerequisites.len(),
					prerequisites,
					unlocks_count: node.unlocks,
					division: node.division,
				}
			})
			.collect();
		summaries.sort_by(|a, b| a.id.cmp(&b.id));
		summaries
	}
}

/// One exported record per course, shaped for visualization collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
	pub id: String,
	pub label: String,
	pub title: String,
	pub units: u32,
	pub tier: u32,
	pub status: CourseStatus,
	pub prerequisites: Vec<String>,
	#[serde(rename = "unlocksCount")]
	pub unlocks_count: usize,
	#[serde(rename = "prerequisiteCount")]
	pub prerequisite_count: usize,
	pub division: Division,
}
