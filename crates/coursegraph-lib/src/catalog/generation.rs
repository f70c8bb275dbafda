//! Catalog creation from scraped course dumps.

use super::*;

impl Catalog {
	/// Creates a catalog from scraped course records.
	///
	/// Records that can't be read are skipped with a warning so one malformed course
	/// doesn't invalidate the rest of the dump.
	pub fn generate_from_records(records: &[serde_json::Value]) -> Catalog {
		let mut entries = HashMap::<CourseCode, CourseEntry>::new();

		for (i, record) in records.iter().enumerate() {
			match CourseEntry::read_from_json(record) {
				Ok((code, entry)) => {
					if let Some(old) = entries.insert(code.clone(), entry) {
						log::warn!("duplicate catalog entry for {}, replacing {:?}", code, old.title);
					}
				}
				Err(e) => {
					log::warn!("couldn't process catalog record {}: {}", i, e);
				}
			}
		}

		/* Writing-emphasis subjects are also reachable under their base subject,
		 * unless a real entry already claims that code. */
		let mut aliases = HashMap::<CourseCode, CourseCode>::new();
		for code in entries.keys() {
			if let Some(base) = code.base_alias() {
				if !entries.contains_key(&base) {
					aliases.insert(base, code.clone());
				}
			}
		}

		Catalog { entries, aliases }
	}

	/// Creates a catalog from a JSON dump, a flat array of course records.
	pub fn generate_from_json(json: &str) -> crate::Result<Catalog> {
		let v: serde_json::Value = serde_json::from_str(json)?;
		let records = v.as_array()
			.ok_or_else(|| crate::Error::Parse("catalog dump must be a JSON array".to_string()))?;
		Ok(Self::generate_from_records(records))
	}
}
