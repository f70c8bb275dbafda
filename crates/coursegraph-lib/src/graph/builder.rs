//! Graph construction from seed sets.

use std::collections::HashMap;

use petgraph::prelude::*;

use super::closure::prerequisite_closure;
use super::{tier, CompletionSet, CourseGraph, CourseNode, CourseStatus, Division};
use crate::catalog::{Catalog, CourseCode, PrereqScanner};
use crate::requirements::SeedSets;

/// Builds the [`CourseGraph`] for one major.
pub struct GraphBuilder<'db> {
	catalog: &'db Catalog,
	scanner: PrereqScanner,
	seeds: SeedSets,
}

impl<'db> GraphBuilder<'db> {
	pub fn new(catalog: &'db Catalog) -> Self {
		GraphBuilder {
			catalog,
			scanner: PrereqScanner::new(),
			seeds: SeedSets::default(),
		}
	}

	pub fn seeds(mut self, seeds: SeedSets) -> Self {
		self.seeds = seeds;
		self
	}

	/// Expands the seed sets to their closures and assembles the graph.
	///
	/// The returned graph already carries tiers, unlock counts and the statuses for an
	/// empty completion set.
	pub fn build(self) -> CourseGraph {
		let lower = prerequisite_closure(&self.seeds.lower, self.catalog, &self.scanner);
		let upper = prerequisite_closure(&self.seeds.upper, self.catalog, &self.scanner);
		let elective = prerequisite_closure(&self.seeds.elective, self.catalog, &self.scanner);

		/* A course pulled in by several closures takes the strongest division,
		 * lower over upper over elective. */
		let mut division = HashMap::<CourseCode, Division>::new();
		for (closure, div) in [(&lower, Division::Lower), (&upper, Division::Upper), (&elective, Division::Elective)] {
			for code in closure {
				division.entry(code.clone()).or_insert(div);
			}
		}

		/* Insertion in code order keeps node indices, and with them traversal order and
		 * any cycle-break placement, stable across runs. */
		let mut codes: Vec<CourseCode> = division.keys().cloned().collect();
		codes.sort();

		let mut graph = StableDiGraph::<CourseNode, ()>::default();
		let mut nodes = HashMap::<CourseCode, NodeIndex>::new();
		for code in &codes {
			let entry = match self.catalog.get(code) {
				Some(entry) => entry,
				None => {
					log::debug!("course {} has no catalog entry, leaving it out of the graph", code);
					continue
				}
			};
			let index = graph.add_node(CourseNode {
				code: code.clone(),
				title: entry.title.clone(),
				units: entry.units,
				division: division[code],
				tier: 0,
				status: CourseStatus::Available,
				remaining_prerequisites: 0,
				unlocks: 0,
			});
			nodes.insert(code.clone(), index);
		}

		for code in &codes {
			let target = match nodes.get(code) {
				Some(index) => *index,
				None => continue,
			};
			let raw = match self.catalog.get(code).and_then(|e| e.prerequisites_raw.as_ref()) {
				Some(raw) => raw,
				None => continue,
			};
			let mut prerequisites: Vec<CourseCode> = self.scanner.scan(raw, self.catalog).into_iter().collect();
			prerequisites.sort();
			for prerequisite in prerequisites {
				if prerequisite == *code {
					log::debug!("{} names itself as a prerequisite, skipping the self edge", code);
					continue
				}
				if let Some(source) = nodes.get(&prerequisite) {
					graph.add_edge(*source, target, ());
				}
			}
		}

		let mut built = CourseGraph { graph, nodes };

		/* Unlock counts are structural, fixed once at build time. */
		let indices: Vec<NodeIndex> = built.graph.node_indices().collect();
		for index in indices {
			let unlocks = built.graph.neighbors_directed(index, Outgoing).count();
			built.graph[index].unlocks = unlocks;
		}

		tier::assign_tiers(&mut built.graph);
		built.recompute_status(&CompletionSet::default());
		built
	}
}
