//! Transitive prerequisite closure.

use std::collections::HashSet;

use crate::catalog::{Catalog, CourseCode, PrereqScanner};

/// Expands `seeds` with everything reachable through prerequisite mentions.
///
/// Iterative depth-first walk over an explicit work stack. The visited set only grows
/// and the catalog is finite, so the walk terminates even on cyclic prerequisite data.
/// Seeds are members of their own closure; seeds the catalog doesn't know stay in the
/// result but contribute no prerequisites.
pub fn prerequisite_closure(seeds: &HashSet<CourseCode>, catalog: &Catalog, scanner: &PrereqScanner) -> HashSet<CourseCode> {
	let mut visited = HashSet::new();
	let mut stack: Vec<CourseCode> = seeds.iter()
		.map(|code| catalog.resolve(code).cloned().unwrap_or_else(|| code.clone()))
		.collect();

	while let Some(code) = stack.pop() {
		if !visited.insert(code.clone()) {
			continue
		}
		let entry = match catalog.get(&code) {
			Some(entry) => entry,
			None => continue,
		};
		let raw = match &entry.prerequisites_raw {
			Some(raw) => raw,
			None => continue,
		};
		for prerequisite in scanner.scan(raw, catalog) {
			if !visited.contains(&prerequisite) {
				stack.push(prerequisite);
			}
		}
	}

	visited
}
