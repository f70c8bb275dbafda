//! The requirement grammar.

use serde::{Serialize, Deserialize};
use crate::catalog::CourseCode;

/// A node of a major's requirement tree.
///
/// The grammar is deliberately closed: consumers match exhaustively, and the importer
/// rejects unknown document shapes outright instead of skipping them, since a silently
/// dropped block understates a major's requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequirementNode {
	/// AND/OR over child requirements.
	Group {
		id: Option<String>,
		title: Option<String>,
		operator: GroupOperator,
		children: Vec<RequirementNode>,
	},
	/// A single required course.
	Course(CourseCode),
	/// Every listed course is required.
	CourseList(Vec<CourseCode>),
	/// A subject crossed with an ordered list of numbers, all required.
	Sequence(CourseSequence),
	/// A fixed number of picks from a pool. `count` is `None` when the document
	/// doesn't name one.
	ChooseOne {
		count: Option<u32>,
		from: ChooseFrom,
	},
	/// A unit quota filled from a pool.
	ChooseUnits {
		units: u32,
		from: ChooseFrom,
	},
	/// One whole sequence taken from a list of sequence options.
	ChooseOneSequence {
		options: Vec<CourseSequence>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupOperator {
	And,
	Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSequence {
	pub subject: String,
	pub numbers: Vec<String>,
}

impl CourseSequence {
	/// Crosses the subject with each number to produce concrete codes.
	pub fn codes(&self) -> crate::Result<Vec<CourseCode>> {
		self.numbers.iter().map(|n| CourseCode::new(&self.subject, n)).collect()
	}
}

/// The pool specification of a choose block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChooseFrom {
	/// An explicit course pool.
	Courses(Vec<CourseCode>),
	/// Any course under a subject. Recorded but never expanded; a whole subject is
	/// too wide a net to treat as requirements.
	Subject(String),
	/// Alternative pools.
	Either(Vec<EitherArm>),
}

/// One alternative inside [`ChooseFrom::Either`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EitherArm {
	Courses(Vec<CourseCode>),
	/// A cross-reference to another requirement block by id. Kept for reporting but
	/// never expanded, the referenced set is not guessed at.
	Reference(String),
}
