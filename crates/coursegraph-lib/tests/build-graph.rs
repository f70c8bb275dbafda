use std::collections::HashSet;

use coursegraph::Catalog;
use coursegraph::CourseCode;
use coursegraph::catalog::PrereqScanner;
use coursegraph::graph::{CompletionSet, CourseStatus, Division, GraphBuilder};
use coursegraph::requirements::SeedSets;

fn code(text: &str) -> CourseCode {
	CourseCode::parse(text).unwrap()
}

fn codes(texts: &[&str]) -> HashSet<CourseCode> {
	texts.iter().map(|t| code(t)).collect()
}

#[test]
fn build_graph_for_the_statistics_major() {
	let catalog = coursegraph_test_utils::get_catalog();
	let document = coursegraph_test_utils::get_major_document();
	assert_eq!(document.slug(), "statistics-and-data-science");

	let seeds = SeedSets::collect(&document).unwrap();
	assert_eq!(seeds.lower, codes(&["MATH 3A", "MATH 3B", "MATH 4A", "PSTAT 10", "CMPSC 8", "CMPSC 16"]));
	assert_eq!(seeds.upper, codes(&["PSTAT 120A", "PSTAT 120B", "PSTAT 160A"]));
	assert_eq!(seeds.elective, codes(&["ECON 10A"]));

	let graph = GraphBuilder::new(&catalog).seeds(seeds).build();
	assert_eq!(graph.len(), 11);

	/* ECON 1 enters only as a prerequisite of a prerequisite. */
	assert!(graph.contains(&code("ECON 1")));
	/* Catalog entries nothing requires stay out. */
	assert!(!graph.contains(&code("ENGR 101")));
	assert!(!graph.contains(&code("PSTATW 100")));

	/* ECON 10A is elective-seeded but an upper-division course requires it. */
	assert_eq!(graph.node(&code("ECON 10A")).unwrap().division, Division::Upper);
	assert_eq!(graph.node(&code("MATH 4A")).unwrap().division, Division::Lower);
	assert_eq!(graph.node(&code("PSTAT 160A")).unwrap().division, Division::Upper);

	/* Tier is the longest prerequisite path, not the shortest. */
	assert_eq!(graph.tier_of(&code("MATH 3A")), Some(0));
	assert_eq!(graph.tier_of(&code("MATH 4A")), Some(2));
	assert_eq!(graph.tier_of(&code("PSTAT 120A")), Some(3));
	assert_eq!(graph.tier_of(&code("PSTAT 120B")), Some(4));
	assert_eq!(graph.tier_of(&code("PSTAT 160A")), Some(4));

	assert_eq!(
		graph.prerequisites_of(&code("PSTAT 160A")),
		vec![code("CMPSC 8"), code("ECON 10A"), code("PSTAT 120A")]
	);
	assert_eq!(graph.unlocked_by(&code("MATH 4A")), vec![code("PSTAT 120A"), code("PSTAT 120B")]);
	assert_eq!(graph.node(&code("MATH 4A")).unwrap().unlocks, 2);
	assert_eq!(graph.node(&code("PSTAT 120B")).unwrap().unlocks, 0);
}

#[test]
fn graph_contains_every_scanned_prerequisite() {
	let catalog = coursegraph_test_utils::get_catalog();
	let document = coursegraph_test_utils::get_major_document();
	let seeds = SeedSets::collect(&document).unwrap();
	let graph = GraphBuilder::new(&catalog).seeds(seeds).build();

	let scanner = PrereqScanner::new();
	for course in graph.codes() {
		let entry = catalog.get(course).unwrap();
		if let Some(raw) = &entry.prerequisites_raw {
			for prerequisite in scanner.scan(raw, &catalog) {
				assert!(
					graph.contains(&prerequisite),
					"{} requires {} but the graph doesn't contain it", course, prerequisite
				);
			}
		}
	}
}

#[test]
fn statuses_follow_the_completion_set() {
	let catalog = Catalog::generate_from_records(&[
		coursegraph_test_utils::record("MATH", "3A", "Calculus I", "4", None),
		coursegraph_test_utils::record("MATH", "3B", "Calculus II", "4", Some("MATH 3A")),
		coursegraph_test_utils::record("CMPSC", "24", "Problem Solving II", "4", Some("MATH 3B")),
	]);
	let mut seeds = SeedSets::default();
	seeds.upper.insert(code("CMPSC 24"));

	let mut graph = GraphBuilder::new(&catalog).seeds(seeds).build();
	assert_eq!(graph.len(), 3);
	assert_eq!(graph.tier_of(&code("MATH 3A")), Some(0));
	assert_eq!(graph.tier_of(&code("MATH 3B")), Some(1));
	assert_eq!(graph.tier_of(&code("CMPSC 24")), Some(2));

	/* Fresh graphs carry statuses for an empty completion set. */
	assert_eq!(graph.status_of(&code("MATH 3A")), Some(CourseStatus::Available));
	assert_eq!(graph.status_of(&code("MATH 3B")), Some(CourseStatus::Locked));
	assert_eq!(graph.status_of(&code("CMPSC 24")), Some(CourseStatus::Locked));

	let completions = CompletionSet::from_raw(&["math 3a".to_string()], &catalog);
	graph.recompute_status(&completions);
	assert_eq!(graph.status_of(&code("MATH 3A")), Some(CourseStatus::Completed));
	assert_eq!(graph.status_of(&code("MATH 3B")), Some(CourseStatus::Available));
	assert_eq!(graph.status_of(&code("CMPSC 24")), Some(CourseStatus::Locked));
	assert_eq!(graph.node(&code("CMPSC 24")).unwrap().remaining_prerequisites, 1);
	assert_eq!(graph.node(&code("MATH 3B")).unwrap().remaining_prerequisites, 0);
}

#[test]
fn summaries_are_ordered_and_shaped_for_export() {
	let catalog = coursegraph_test_utils::get_catalog();
	let document = coursegraph_test_utils::get_major_document();
	let seeds = SeedSets::collect(&document).unwrap();
	let graph = GraphBuilder::new(&catalog).seeds(seeds).build();

	let summaries = graph.summaries();
	assert_eq!(summaries.len(), graph.len());
	assert!(summaries.windows(2).all(|w| w[0].id < w[1].id));

	let value = serde_json::to_value(&summaries).unwrap();
	assert_eq!(value[0]["id"], "CMPSC-16");
	assert_eq!(value[0]["label"], "CMPSC 16");
	assert_eq!(value[0]["status"], "locked");
	assert_eq!(value[0]["division"], "lower");
	assert_eq!(value[0]["prerequisiteCount"], 1);
	assert_eq!(value[0]["unlocksCount"], 0);
	assert_eq!(value[0]["prerequisites"][0], "CMPSC-8");
}

#[test]
fn known_targets_filter_against_the_node_set() {
	let catalog = coursegraph_test_utils::get_catalog();
	let document = coursegraph_test_utils::get_major_document();
	let seeds = SeedSets::collect(&document).unwrap();
	let graph = GraphBuilder::new(&catalog).seeds(seeds).build();

	let targets = vec![
		"pstat 120a".to_string(),
		"PSTAT-120A".to_string(),
		"ENGR 101".to_string(),
		"not a course".to_string(),
		"MATH 3B".to_string(),
	];
	assert_eq!(graph.known_targets(&targets), vec![code("PSTAT 120A"), code("MATH 3B")]);
}
