//! Seed collection from a major's requirement forest.

use std::collections::HashSet;

use super::MajorDocument;
use super::node::*;
use crate::catalog::CourseCode;

/// Division context a requirement subtree is walked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
	Lower,
	Upper,
}

/// Clues in a group's id or title override the inherited context.
fn classify(id: Option<&str>, title: Option<&str>) -> Option<Context> {
	let mut text = String::new();
	if let Some(id) = id {
		text.push_str(id);
		text.push(' ');
	}
	if let Some(title) = title {
		text.push_str(title);
	}
	let text: String = text.chars()
		.map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
		.collect();

	if text.contains("upper") {
		return Some(Context::Upper)
	}
	if ["lower", "prep", "premajor", "pre major"].iter().any(|marker| text.contains(marker)) {
		return Some(Context::Lower)
	}
	None
}

/// The per-major seed sets, before prerequisite expansion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedSets {
	pub lower: HashSet<CourseCode>,
	pub upper: HashSet<CourseCode>,
	pub elective: HashSet<CourseCode>,
}

impl SeedSets {
	/// Walks a major's requirement forest and partitions every referenced course.
	///
	/// Firm requirements (courses, lists, sequences) land in the set of their context.
	/// Courses inside choose pools count as electives when the context is upper
	/// division, and as ordinary lower-division seeds otherwise. A course an explicit
	/// upper-division requirement names never stays elective.
	pub fn collect(document: &MajorDocument) -> crate::Result<SeedSets> {
		let mut seeds = SeedSets::default();
		for node in &document.requirements {
			seeds.visit(node, Context::Lower)?;
		}
		seeds.elective.retain(|code| !seeds.upper.contains(code));
		Ok(seeds)
	}

	fn visit(&mut self, node: &RequirementNode, context: Context) -> crate::Result<()> {
		match node {
			RequirementNode::Group { id, title, children, .. } => {
				let context = classify(id.as_deref(), title.as_deref()).unwrap_or(context);
				for child in children {
					self.visit(child, context)?;
				}
			}
			RequirementNode::Course(code) => {
				self.context_set(context).insert(code.clone());
			}
			RequirementNode::CourseList(codes) => {
				let set = self.context_set(context);
				for code in codes {
					set.insert(code.clone());
				}
			}
			RequirementNode::Sequence(sequence) => {
				let codes = sequence.codes()?;
				let set = self.context_set(context);
				for code in codes {
					set.insert(code);
				}
			}
			RequirementNode::ChooseOne { from, .. } => self.visit_pool(from, context),
			RequirementNode::ChooseUnits { from, .. } => self.visit_pool(from, context),
			/* Picking a sequence still commits to whole courses, so options keep the
			 * firm-requirement routing rather than the pool routing. */
			RequirementNode::ChooseOneSequence { options } => {
				for sequence in options {
					let codes = sequence.codes()?;
					let set = self.context_set(context);
					for code in codes {
						set.insert(code);
					}
				}
			}
		}
		Ok(())
	}

	fn visit_pool(&mut self, from: &ChooseFrom, context: Context) {
		match from {
			ChooseFrom::Courses(codes) => {
				let set = self.pool_set(context);
				for code in codes {
					set.insert(code.clone());
				}
			}
			ChooseFrom::Subject(subject) => {
				log::debug!("not expanding subject-wide pool {}", subject);
			}
			ChooseFrom::Either(arms) => {
				for arm in arms {
					match arm {
						EitherArm::Courses(codes) => {
							let set = self.pool_set(context);
							for code in codes {
								set.insert(code.clone());
							}
						}
						EitherArm::Reference(id) => {
							log::warn!("skipping cross-referenced requirement {:?}, references are not expanded", id);
						}
					}
				}
			}
		}
	}

	fn context_set(&mut self, context: Context) -> &mut HashSet<CourseCode> {
		match context {
			Context::Lower => &mut self.lower,
			Context::Upper => &mut self.upper,
		}
	}

	fn pool_set(&mut self, context: Context) -> &mut HashSet<CourseCode> {
		match context {
			Context::Lower => &mut self.lower,
			Context::Upper => &mut self.elective,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn collect(doc: serde_json::Value) -> SeedSets {
		SeedSets::collect(&MajorDocument::read_from_json(&doc).unwrap()).unwrap()
	}

	fn code(text: &str) -> CourseCode {
		CourseCode::parse(text).unwrap()
	}

	#[test] fn walker_upper_marker_switches_context() { assert_eq!(classify(Some("upper-division"), None), Some(Context::Upper)) }
	#[test] fn walker_preparation_title_is_lower() { assert_eq!(classify(None, Some("Preparation for the Major")), Some(Context::Lower)) }
	#[test] fn walker_unmarked_groups_inherit() { assert_eq!(classify(Some("core"), Some("Core Courses")), None) }

	#[test]
	fn walker_routes_choose_pools_by_context() {
		let seeds = collect(serde_json::json!({
			"program": {"major_name": "Test"},
			"requirements": [
				{"type": "requirement_group", "id": "prep-for-major", "children": [
					{"type": "choose_one", "from": ["CMPSC 8", "CMPSC 16"]}
				]},
				{"type": "requirement_group", "id": "upper-division", "children": [
					{"type": "course", "code": "PSTAT 120A"},
					{"type": "choose_one", "from": ["PSTAT 160A", "PSTAT 120A"]}
				]}
			]
		}));
		assert!(seeds.lower.contains(&code("CMPSC 8")));
		assert!(seeds.lower.contains(&code("CMPSC 16")));
		assert!(seeds.upper.contains(&code("PSTAT 120A")));
		assert_eq!(seeds.elective, HashSet::from([code("PSTAT 160A")]));
	}

	#[test]
	fn walker_sequence_options_keep_their_context() {
		let seeds = collect(serde_json::json!({
			"program": {"major_name": "Test"},
			"requirements": [
				{"type": "requirement_group", "id": "upper-division", "children": [
					{"type": "choose_one_sequence", "options": [
						{"subject": "MATH", "numbers": ["104A", "104B"]}
					]}
				]}
			]
		}));
		assert!(seeds.upper.contains(&code("MATH 104A")));
		assert!(seeds.upper.contains(&code("MATH 104B")));
		assert!(seeds.elective.is_empty());
	}

	#[test]
	fn walker_skips_subject_pools_and_references() {
		let seeds = collect(serde_json::json!({
			"program": {"major_name": "Test"},
			"requirements": [
				{"type": "requirement_group", "id": "upper-division", "children": [
					{"type": "choose_units", "units": 8, "from": {"subject": "PSTAT"}},
					{"type": "choose_units", "units": 8, "from": {"either": [
						{"courses": ["ECON 10A"]},
						{"ref_requirement_id": "other-block"}
					]}}
				]}
			]
		}));
		assert_eq!(seeds.elective, HashSet::from([code("ECON 10A")]));
		assert!(seeds.upper.is_empty());
	}

	#[test]
	fn walker_nested_groups_override_inherited_context() {
		let seeds = collect(serde_json::json!({
			"program": {"major_name": "Test"},
			"requirements": [
				{"type": "requirement_group", "title": "Major Requirements", "children": [
					{"type": "requirement_group", "title": "Preparation for the Major", "children": [
						{"type": "course", "code": "MATH 3A"}
					]},
					{"type": "requirement_group", "title": "Upper Division Requirements", "children": [
						{"type": "course", "code": "MATH 104A"}
					]}
				]}
			]
		}));
		assert!(seeds.lower.contains(&code("MATH 3A")));
		assert!(seeds.upper.contains(&code("MATH 104A")));
	}
}
