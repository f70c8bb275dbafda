//! Functions and methods for reading catalog types from JSON.

use super::*;

impl CourseEntry {
	/// Creates a `CourseEntry` from a scraped catalog record, together with its
	/// canonical code.
	pub fn read_from_json(v: &serde_json::Value) -> crate::Result<(CourseCode, Self)> {
		use crate::Error::Parse;

		/* Required Fields */
		let subject = v.get("subject").and_then(|x| x.as_str())
			.ok_or_else(|| Parse("subject missing from catalog record".to_string()))?;
		let number = v.get("number").and_then(|x| x.as_str())
			.ok_or_else(|| Parse("number missing from catalog record".to_string()))?;
		let title = v.get("title").and_then(|x| x.as_str())
			.ok_or_else(|| Parse("title missing from catalog record".to_string()))?;

		let code = CourseCode::new(subject, number)?;

		/* Optional Fields */
		let units = match v.get("units") {
			Some(serde_json::Value::String(s)) => entry::parse_units(s),
			Some(serde_json::Value::Number(n)) => entry::parse_units(&n.to_string()),
			_ => 0,
		};
		let prerequisites_raw = v.get("prerequisites_raw").or_else(|| v.get("prerequisites"))
			.and_then(|x| x.as_str())
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty());
		let description = v.get("description").and_then(|x| x.as_str())
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty());

		let entry = CourseEntry {
			subject: code.subject().to_string(),
			number: code.number().to_string(),
			title: title.trim().to_string(),
			units,
			prerequisites_raw,
			description,
		};

		Ok((code, entry))
	}
}
