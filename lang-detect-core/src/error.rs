use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the detection library.
#[derive(Error, Debug)]
pub enum DetectError {
	/// Training was requested for a label outside the fixed language set.
	///
	/// Raised before the store is touched, so a rejected session leaves
	/// the store file unchanged.
	#[error("unknown language '{label}': only englisch, französisch and deutsch are supported")]
	InvalidLanguage { label: String },

	/// Classification was attempted against a store with no trained data.
	#[error("the profile store holds no trained data")]
	NotTrained,

	/// A store file operation failed.
	#[error(transparent)]
	Store(#[from] StoreError),
}

/// Errors raised at the profile store boundary.
///
/// A missing store file is not an error (loading it yields an empty
/// store); these cover genuine I/O failures.
#[derive(Error, Debug)]
pub enum StoreError {
	#[error("failed to read profile store {path}: {source}")]
	Unreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write profile store {path}: {source}")]
	Unwritable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// A store line that could not be parsed and was skipped during load.
///
/// Skipped lines are recoverable: the rest of the store still loads, and
/// the skipped ones are reported back to the caller as warnings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MalformedLine {
	/// 1-based line number in the store file.
	pub line_number: usize,
	/// Why the line was rejected.
	pub reason: String,
}

impl fmt::Display for MalformedLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "line {}: {}", self.line_number, self.reason)
	}
}
