//! Functions and methods for reading requirement documents from JSON.
//!
//! Unlike catalog import this is strict: a requirement document is curated data, and a
//! shape we don't recognise fails the whole document rather than being skipped.

use super::*;
use crate::catalog::CourseCode;

impl MajorDocument {
	/// Creates a `MajorDocument` from one requirement document value.
	pub fn read_from_json(v: &serde_json::Value) -> crate::Result<Self> {
		use crate::Error::Parse;

		let major_name = v.get("program").and_then(|p| p.get("major_name"))
			.or_else(|| v.get("major_name"))
			.and_then(|x| x.as_str())
			.ok_or_else(|| Parse("major document has no major_name".to_string()))?
			.trim()
			.to_string();

		let requirements = v.get("requirements").and_then(|x| x.as_array())
			.ok_or_else(|| Parse("major document has no requirements array".to_string()))?
			.iter()
			.map(RequirementNode::read_from_json)
			.collect::<crate::Result<Vec<_>>>()?;

		Ok(MajorDocument { major_name, requirements })
	}
}

impl RequirementNode {
	/// Creates a `RequirementNode` from its JSON form, recursively.
	pub fn read_from_json(v: &serde_json::Value) -> crate::Result<Self> {
		use crate::Error::Parse;

		let tag = v.get("type").and_then(|x| x.as_str())
			.ok_or_else(|| Parse(format!("requirement node has no type tag: {}", v)))?;

		match tag {
			"requirement_group" => {
				let id = v.get("id").and_then(|x| x.as_str()).map(str::to_string);
				let title = v.get("title").and_then(|x| x.as_str()).map(str::to_string);
				let operator = match v.get("operator").and_then(|x| x.as_str()) {
					None => GroupOperator::And,
					Some(s) if s.eq_ignore_ascii_case("and") => GroupOperator::And,
					Some(s) if s.eq_ignore_ascii_case("or") => GroupOperator::Or,
					Some(s) => return Err(Parse(format!("unknown group operator: {:?}", s))),
				};
				let children = v.get("children").and_then(|x| x.as_array())
					.ok_or_else(|| Parse("requirement group has no children array".to_string()))?
					.iter()
					.map(RequirementNode::read_from_json)
					.collect::<crate::Result<Vec<_>>>()?;
				Ok(RequirementNode::Group { id, title, operator, children })
			}
			"course" => {
				Ok(RequirementNode::Course(course_ref_from_json(v)?))
			}
			"course_list" => {
				let courses = v.get("courses").and_then(|x| x.as_array())
					.ok_or_else(|| Parse("course list has no courses array".to_string()))?
					.iter()
					.map(course_ref_from_json)
					.collect::<crate::Result<Vec<_>>>()?;
				Ok(RequirementNode::CourseList(courses))
			}
			"course_sequence" => {
				Ok(RequirementNode::Sequence(sequence_from_json(v)?))
			}
			/* choose_courses is the multi-pick spelling of the same block. */
			"choose_one" | "choose_courses" => {
				let count = v.get("count").and_then(|x| x.as_u64()).map(|n| n as u32);
				let from = v.get("from")
					.ok_or_else(|| Parse("choose block has no from specification".to_string()))?;
				Ok(RequirementNode::ChooseOne { count, from: choose_from_from_json(from)? })
			}
			"choose_units" => {
				let units = v.get("units").and_then(|x| x.as_u64())
					.ok_or_else(|| Parse("choose_units block has no unit quota".to_string()))? as u32;
				let from = v.get("from")
					.ok_or_else(|| Parse("choose block has no from specification".to_string()))?;
				Ok(RequirementNode::ChooseUnits { units, from: choose_from_from_json(from)? })
			}
			"choose_one_sequence" => {
				let options = v.get("options").and_then(|x| x.as_array())
					.ok_or_else(|| Parse("choose_one_sequence has no options array".to_string()))?
					.iter()
					.map(sequence_from_json)
					.collect::<crate::Result<Vec<_>>>()?;
				Ok(RequirementNode::ChooseOneSequence { options })
			}
			other => Err(crate::Error::UnknownRequirement(other.to_string())),
		}
	}
}

fn string_or_number(v: &serde_json::Value) -> Option<String> {
	match v {
		serde_json::Value::String(s) => Some(s.clone()),
		serde_json::Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}

/// Reads a course reference, either a spelled-out string or a subject/number object.
fn course_ref_from_json(v: &serde_json::Value) -> crate::Result<CourseCode> {
	use crate::Error::Parse;
	match v {
		serde_json::Value::String(s) => CourseCode::parse(s),
		serde_json::Value::Object(o) => {
			if let Some(code) = o.get("code").and_then(|x| x.as_str()) {
				return CourseCode::parse(code)
			}
			let subject = o.get("subject").and_then(|x| x.as_str())
				.ok_or_else(|| Parse(format!("course reference has no subject: {}", v)))?;
			let number = o.get("number").and_then(string_or_number)
				.ok_or_else(|| Parse(format!("course reference has no number: {}", v)))?;
			CourseCode::new(subject, &number)
		}
		_ => Err(Parse(format!("course reference must be a string or object: {}", v))),
	}
}

fn sequence_from_json(v: &serde_json::Value) -> crate::Result<CourseSequence> {
	use crate::Error::Parse;
	let subject = v.get("subject").and_then(|x| x.as_str())
		.ok_or_else(|| Parse(format!("course sequence has no subject: {}", v)))?;
	let numbers = v.get("numbers").and_then(|x| x.as_array())
		.ok_or_else(|| Parse(format!("course sequence has no numbers array: {}", v)))?
		.iter()
		.map(|n| string_or_number(n).ok_or_else(|| Parse(format!("sequence number must be a string or number: {}", n))))
		.collect::<crate::Result<Vec<_>>>()?;

	let sequence = CourseSequence { subject: subject.trim().to_ascii_uppercase(), numbers };
	/* Validate the cross product now so a bad number fails the document, not a later walk. */
	sequence.codes()?;
	Ok(sequence)
}

fn choose_from_from_json(v: &serde_json::Value) -> crate::Result<ChooseFrom> {
	use crate::Error::Parse;
	match v {
		serde_json::Value::Array(items) => {
			let courses = items.iter().map(course_ref_from_json).collect::<crate::Result<Vec<_>>>()?;
			Ok(ChooseFrom::Courses(courses))
		}
		serde_json::Value::String(subject) => {
			Ok(ChooseFrom::Subject(subject.trim().to_ascii_uppercase()))
		}
		serde_json::Value::Object(o) => {
			if let Some(courses) = o.get("courses").and_then(|x| x.as_array()) {
				let courses = courses.iter().map(course_ref_from_json).collect::<crate::Result<Vec<_>>>()?;
				return Ok(ChooseFrom::Courses(courses))
			}
			if let Some(arms) = o.get("either").and_then(|x| x.as_array()) {
				let arms = arms.iter().map(either_arm_from_json).collect::<crate::Result<Vec<_>>>()?;
				return Ok(ChooseFrom::Either(arms))
			}
			if let Some(subject) = o.get("subject").and_then(|x| x.as_str()) {
				return Ok(ChooseFrom::Subject(subject.trim().to_ascii_uppercase()))
			}
			Err(Parse(format!("unrecognised from specification: {}", v)))
		}
		_ => Err(Parse(format!("unrecognised from specification: {}", v))),
	}
}

fn either_arm_from_json(v: &serde_json::Value) -> crate::Result<EitherArm> {
	use crate::Error::Parse;
	match v {
		serde_json::Value::Array(items) => {
			let courses = items.iter().map(course_ref_from_json).collect::<crate::Result<Vec<_>>>()?;
			Ok(EitherArm::Courses(courses))
		}
		serde_json::Value::Object(o) => {
			if let Some(courses) = o.get("courses").and_then(|x| x.as_array()) {
				let courses = courses.iter().map(course_ref_from_json).collect::<crate::Result<Vec<_>>>()?;
				return Ok(EitherArm::Courses(courses))
			}
			if let Some(id) = o.get("ref_requirement_id").and_then(|x| x.as_str()) {
				return Ok(EitherArm::Reference(id.to_string()))
			}
			Err(Parse(format!("unrecognised either arm: {}", v)))
		}
		_ => Err(Parse(format!("unrecognised either arm: {}", v))),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn read(v: serde_json::Value) -> crate::Result<RequirementNode> {
		RequirementNode::read_from_json(&v)
	}

	#[test]
	fn import_reads_both_course_shapes() {
		assert!(matches!(read(serde_json::json!({"type": "course", "subject": "PSTAT", "number": "10"})).unwrap(), RequirementNode::Course(_)));
		assert!(matches!(read(serde_json::json!({"type": "course", "code": "PSTAT 10"})).unwrap(), RequirementNode::Course(_)));
	}

	#[test]
	fn import_reads_numeric_course_numbers() {
		let node = read(serde_json::json!({"type": "course", "subject": "CMPSC", "number": 8})).unwrap();
		match node {
			RequirementNode::Course(code) => assert_eq!(code.to_string(), "CMPSC-8"),
			other => panic!("expected a course node, got {:?}", other),
		}
	}

	#[test]
	fn import_rejects_unknown_type_tags() {
		assert!(matches!(
			read(serde_json::json!({"type": "choose_area", "from": []})),
			Err(crate::Error::UnknownRequirement(_))
		));
	}

	#[test]
	fn import_defaults_group_operator_to_and() {
		let node = read(serde_json::json!({"type": "requirement_group", "children": []})).unwrap();
		assert!(matches!(node, RequirementNode::Group { operator: GroupOperator::And, .. }));
	}

	#[test]
	fn import_rejects_unknown_group_operators() {
		assert!(read(serde_json::json!({"type": "requirement_group", "operator": "XOR", "children": []})).is_err());
	}

	#[test]
	fn import_reads_choose_from_shapes() {
		let flat = read(serde_json::json!({"type": "choose_one", "from": ["MATH 3A", {"subject": "MATH", "number": "3B"}]})).unwrap();
		assert!(matches!(flat, RequirementNode::ChooseOne { from: ChooseFrom::Courses(ref c), .. } if c.len() == 2));

		let wrapped = read(serde_json::json!({"type": "choose_one", "from": {"courses": ["MATH 3A"]}})).unwrap();
		assert!(matches!(wrapped, RequirementNode::ChooseOne { from: ChooseFrom::Courses(_), .. }));

		let either = read(serde_json::json!({"type": "choose_units", "units": 8, "from": {"either": [
			{"courses": ["ECON 10A"]},
			{"ref_requirement_id": "upper-electives"}
		]}})).unwrap();
		match either {
			RequirementNode::ChooseUnits { from: ChooseFrom::Either(arms), .. } => {
				assert!(matches!(arms[0], EitherArm::Courses(_)));
				assert!(matches!(arms[1], EitherArm::Reference(_)));
			}
			other => panic!("expected an either pool, got {:?}", other),
		}

		let subject = read(serde_json::json!({"type": "choose_units", "units": 4, "from": {"subject": "pstat"}})).unwrap();
		assert!(matches!(subject, RequirementNode::ChooseUnits { from: ChooseFrom::Subject(ref s), .. } if s == "PSTAT"));
	}

	#[test]
	fn import_choose_units_requires_a_quota() {
		assert!(read(serde_json::json!({"type": "choose_units", "from": ["MATH 3A"]})).is_err());
	}

	#[test]
	fn import_bad_node_fails_the_whole_document() {
		let doc = serde_json::json!({
			"program": {"major_name": "Statistics"},
			"requirements": [
				{"type": "course", "code": "PSTAT 10"},
				{"type": "mystery_block"}
			]
		});
		assert!(MajorDocument::read_from_json(&doc).is_err());
	}

	#[test]
	fn import_reads_the_document_envelope() {
		let doc = serde_json::json!({
			"program": {"major_name": " Statistics and Data Science "},
			"requirements": []
		});
		assert_eq!(MajorDocument::read_from_json(&doc).unwrap().major_name, "Statistics and Data Science");
	}
}
