//! Longest-path tier assignment.

use std::collections::{HashMap, HashSet};

use petgraph::prelude::*;

use super::CourseNode;

/// Recursion ceiling for pathological prerequisite chains.
const DEPTH_CEILING: usize = 2000;

/// Assigns every course its longest-path depth from a prerequisite-free course.
///
/// depth(c) is 0 when c has no in-graph prerequisites, otherwise 1 plus the maximum
/// depth over them. Cyclic prerequisite data is invalid but must not hang the build:
/// reaching a course that is still on the traversal stack breaks the cycle by treating
/// it as depth 0 at that point, and the recursion ceiling forces depth 0 with a logged
/// diagnostic instead of overflowing the stack.
pub(super) fn assign_tiers(graph: &mut StableDiGraph<CourseNode, ()>) {
	let mut memo = HashMap::new();
	let mut on_stack = HashSet::new();

	let indices: Vec<NodeIndex> = graph.node_indices().collect();
	for index in &indices {
		depth_of(*index, graph, &mut memo, &mut on_stack, 0);
	}
	for (index, depth) in memo {
		graph[index].tier = depth;
	}
}

fn depth_of(
	index: NodeIndex,
	graph: &StableDiGraph<CourseNode, ()>,
	memo: &mut HashMap<NodeIndex, u32>,
	on_stack: &mut HashSet<NodeIndex>,
	recursion: usize,
) -> u32 {
	if let Some(depth) = memo.get(&index) {
		return *depth
	}
	/* Hitting a course already on the stack means the data has a cycle; break it here
	 * at depth 0 without memoizing the forced value. */
	if on_stack.contains(&index) {
		log::warn!("prerequisite cycle through {}, breaking at depth 0", graph[index].code);
		return 0
	}
	if recursion >= DEPTH_CEILING {
		log::warn!("prerequisite chain deeper than {} at {}, forcing depth 0", DEPTH_CEILING, graph[index].code);
		return 0
	}

	on_stack.insert(index);
	let mut deepest = None;
	for prerequisite in graph.neighbors_directed(index, Incoming) {
		let depth = depth_of(prerequisite, graph, memo, on_stack, recursion + 1);
		deepest = Some(deepest.map_or(depth, |d: u32| d.max(depth)));
	}
	on_stack.remove(&index);

	let depth = deepest.map_or(0, |d| d + 1);
	memo.insert(index, depth);
	depth
}
