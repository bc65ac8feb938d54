use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::extractor::Digraph;
use super::profile::LanguageWeights;
use crate::error::{MalformedLine, StoreError};
use crate::language::Language;

/// Separator between the digraph and its accumulators in a store line.
const FIELD_SEPARATOR: char = ':';

/// Number of fractional digits written for each accumulator.
const PRECISION: usize = 4;

/// The persisted mapping from digraph to per-language accumulators.
///
/// This is the single durable artifact of the detector. It is loaded
/// whole at the start of a session, mutated in memory by training, and
/// written back whole at the end.
///
/// ## Responsibilities
/// - Own the in-memory digraph rows between load and save
/// - Parse and serialize the line-oriented store file
/// - Hand out rows to the trainer and classifier
///
/// ## Invariants
/// - Every row carries an accumulator for every language in the fixed set
/// - Rows iterate in digraph order, so saved files are deterministic
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProfileStore {
	entries: BTreeMap<Digraph, LanguageWeights>,
}

/// A loaded store together with the lines that had to be skipped.
#[derive(Debug)]
pub struct LoadOutcome {
	pub store: ProfileStore,
	pub warnings: Vec<MalformedLine>,
}

impl ProfileStore {
	/// True if no digraph has been trained yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of digraph rows in the store.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// The accumulator row for `digraph`, if it has ever been observed.
	pub fn get(&self, digraph: Digraph) -> Option<&LanguageWeights> {
		self.entries.get(&digraph)
	}

	/// The accumulator row for `digraph`, created zero-valued for every
	/// language on first sighting.
	pub(crate) fn row_mut(&mut self, digraph: Digraph) -> &mut LanguageWeights {
		self.entries.entry(digraph).or_default()
	}

	/// Iterates over `(digraph, row)` pairs in digraph order.
	pub fn rows(&self) -> impl Iterator<Item = (Digraph, &LanguageWeights)> {
		self.entries.iter().map(|(digraph, weights)| (*digraph, weights))
	}

	/// Creates an empty store file at `path` if none exists yet.
	///
	/// Idempotent. An empty file is sufficient: digraphs unseen by the
	/// store default to zero everywhere, so pre-seeding would not change
	/// any result.
	pub fn ensure_exists<P: AsRef<Path>>(path: P) -> Result<(), StoreError> {
		let path = path.as_ref();
		if path.exists() {
			return Ok(());
		}
		debug!(path = %path.display(), "creating empty profile store");
		fs::write(path, "").map_err(|source| StoreError::Unwritable { path: path.to_owned(), source })
	}

	/// Loads a store from `path`.
	///
	/// # Behavior
	/// - A missing file yields an empty store, not an error; callers that
	///   need trained data must check [`ProfileStore::is_empty`].
	/// - Lines that do not parse are skipped, logged at WARN and collected
	///   into [`LoadOutcome::warnings`]; the rest of the file still loads.
	/// - Blank lines are ignored silently.
	///
	/// # Errors
	/// Returns [`StoreError::Unreadable`] for genuine I/O failures
	/// (permissions, hardware), as opposed to the file being absent.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadOutcome, StoreError> {
		let path = path.as_ref();
		let contents = match fs::read_to_string(path) {
			Ok(contents) => contents,
			Err(source) if source.kind() == ErrorKind::NotFound => {
				debug!(path = %path.display(), "no profile store on disk, starting empty");
				return Ok(LoadOutcome { store: ProfileStore::default(), warnings: Vec::new() });
			}
			Err(source) => {
				return Err(StoreError::Unreadable { path: path.to_owned(), source });
			}
		};

		let mut store = ProfileStore::default();
		let mut warnings = Vec::new();
		for (index, line) in contents.lines().enumerate() {
			if line.trim().is_empty() {
				continue;
			}
			match Self::parse_line(line) {
				Ok((digraph, weights)) => {
					store.entries.insert(digraph, weights);
				}
				Err(reason) => {
					let malformed = MalformedLine { line_number: index + 1, reason };
					warn!(path = %path.display(), "skipping malformed store {malformed}");
					warnings.push(malformed);
				}
			}
		}

		Ok(LoadOutcome { store, warnings })
	}

	/// Parses one `<digraph>: <acc>, <acc>, <acc>` line.
	///
	/// Accumulators are read in the fixed language order. Columns beyond
	/// the fixed set are ignored; a missing column or a non-numeric value
	/// rejects the line.
	fn parse_line(line: &str) -> Result<(Digraph, LanguageWeights), String> {
		let (digraph, accumulators) = line
			.split_once(FIELD_SEPARATOR)
			.ok_or_else(|| format!("missing '{FIELD_SEPARATOR}' separator"))?;

		let digraph = Digraph::from_str(digraph.trim())?;

		let mut weights = LanguageWeights::default();
		let mut fields = accumulators.split(',');
		for language in Language::ALL {
			let field = fields
				.next()
				.ok_or_else(|| format!("missing accumulator for {language}"))?
				.trim();
			let value: f64 = field
				.parse()
				.map_err(|_| format!("non-numeric accumulator '{field}' for {language}"))?;
			weights.add(language, value);
		}

		Ok((digraph, weights))
	}

	/// Serializes every row as one line, overwriting the whole file.
	///
	/// Accumulators are written with [`PRECISION`] fractional digits in
	/// the fixed language order, so a following [`ProfileStore::load`]
	/// reproduces the store within `1e-4` per accumulator. Rows are
	/// written in digraph order.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
		let path = path.as_ref();

		let mut contents = String::new();
		for (digraph, weights) in &self.entries {
			let accumulators: Vec<String> = weights
				.iter()
				.map(|(_, value)| format!("{:.*}", PRECISION, value))
				.collect();
			contents.push_str(&format!("{digraph}{FIELD_SEPARATOR} {}\n", accumulators.join(", ")));
		}

		fs::write(path, contents).map_err(|source| StoreError::Unwritable { path: path.to_owned(), source })
	}
}
