use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DetectError;

/// The fixed set of languages known to the detector.
///
/// The variant order is significant: it defines the column order of the
/// persisted store file and the tie-break order of the classifier.
///
/// ## Invariants
/// - The set is closed; unrecognized labels are rejected at parse time
///   instead of growing a new profile column.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Language {
	#[serde(rename = "englisch")]
	Englisch,
	#[serde(rename = "französisch")]
	Franzoesisch,
	#[serde(rename = "deutsch")]
	Deutsch,
}

impl Language {
	/// All known languages, in the fixed store and tie-break order.
	pub const ALL: [Language; 3] = [Language::Englisch, Language::Franzoesisch, Language::Deutsch];

	/// Number of known languages.
	pub const COUNT: usize = Self::ALL.len();

	/// Position of this language in [`Language::ALL`].
	pub(crate) fn index(self) -> usize {
		match self {
			Language::Englisch => 0,
			Language::Franzoesisch => 1,
			Language::Deutsch => 2,
		}
	}

	/// The label used for user input and console output.
	pub fn label(self) -> &'static str {
		match self {
			Language::Englisch => "englisch",
			Language::Franzoesisch => "französisch",
			Language::Deutsch => "deutsch",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Language {
	type Err = DetectError;

	/// Parses a user-supplied language label.
	///
	/// Labels are matched after trimming and lowercasing; anything outside
	/// the fixed set is rejected with [`DetectError::InvalidLanguage`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"englisch" => Ok(Language::Englisch),
			"französisch" => Ok(Language::Franzoesisch),
			"deutsch" => Ok(Language::Deutsch),
			_ => Err(DetectError::InvalidLanguage { label: s.trim().to_owned() }),
		}
	}
}

/// Outcome of a classification.
///
/// `Unknown` is a sentinel, not an error: it is returned when the sample
/// yields no digraphs to compare against the store.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Detection {
	Language(Language),
	Unknown,
}

impl fmt::Display for Detection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Detection::Language(language) => write!(f, "{language}"),
			Detection::Unknown => f.write_str("unbekannt"),
		}
	}
}
