//! # coursegraph
//!
//! A library for turning scraped university course catalogs and major requirement
//! documents into prerequisite dependency graphs.
//!
//! The usual pipeline:
//! 1. Generate a [`Catalog`] from a scraped dump, or load a cached one.
//! 1. Read the major's [`MajorDocument`] and collect its seed sets.
//! 1. Build the major's [`CourseGraph`], then recompute statuses whenever the set of
//!    completed courses changes.

pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::CourseGraphOptions;

pub mod catalog;
pub use catalog::Catalog;
pub use catalog::CourseCode;

pub mod requirements;
pub use requirements::MajorDocument;

pub mod graph;
pub use graph::CourseGraph;
