use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ordered pair of adjacent characters taken from case-folded,
/// letter-only text.
///
/// ## Invariants
/// - Always exactly two characters.
/// - Lowercase when produced by [`extract`]; digraphs read back from a
///   store file are taken as stored.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Digraph([char; 2]);

impl Digraph {
	/// Builds a digraph from two adjacent characters.
	pub fn new(first: char, second: char) -> Self {
		Self([first, second])
	}
}

impl fmt::Display for Digraph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.0[0], self.0[1])
	}
}

impl FromStr for Digraph {
	type Err = String;

	/// Parses a two-character digraph identifier.
	///
	/// # Errors
	/// Returns an error for any other length.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		match (chars.next(), chars.next(), chars.next()) {
			(Some(first), Some(second), None) => Ok(Self([first, second])),
			_ => Err(format!("expected exactly two characters, got '{s}'")),
		}
	}
}

/// Digraph counts extracted from one text sample.
///
/// Created fresh per extraction, consumed by the trainer or classifier,
/// then discarded.
///
/// ## Invariants
/// - All stored counts are >= 1; unseen digraphs are simply absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
	counts: HashMap<Digraph, u32>,
}

impl FrequencyTable {
	/// Records one occurrence of `digraph`.
	fn add(&mut self, digraph: Digraph) {
		*self.counts.entry(digraph).or_insert(0) += 1;
	}

	/// Number of occurrences recorded for `digraph` (0 if never seen).
	pub fn count(&self, digraph: Digraph) -> u32 {
		self.counts.get(&digraph).copied().unwrap_or(0)
	}

	/// Sum of all recorded counts.
	pub fn total(&self) -> u32 {
		self.counts.values().sum()
	}

	/// Number of distinct digraphs recorded.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// True if no digraph was recorded.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(digraph, count)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (Digraph, u32)> + '_ {
		self.counts.iter().map(|(digraph, count)| (*digraph, *count))
	}
}

/// Extracts digraph frequencies from a raw text sample.
///
/// - Keeps only alphabetic characters; everything else (spaces, digits,
///   punctuation) is dropped rather than replaced, so adjacent words
///   fuse together.
/// - Case-folds the remaining characters to lowercase.
/// - Slides a two-character window with stride 1 over the result and
///   counts each digraph it covers.
///
/// Texts with fewer than two letters yield an empty table. Pure and
/// deterministic; never fails.
pub fn extract(text: &str) -> FrequencyTable {
	let letters: Vec<char> = text
		.chars()
		.filter(|c| c.is_alphabetic())
		.flat_map(|c| c.to_lowercase())
		.collect();

	let mut table = FrequencyTable::default();
	for window in letters.windows(2) {
		table.add(Digraph::new(window[0], window[1]));
	}
	table
}
