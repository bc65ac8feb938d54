use tracing::debug;

use super::extractor::FrequencyTable;
use super::store::ProfileStore;
use crate::language::Language;

/// Folds one extracted sample into the store for `language`.
///
/// # Behavior
/// - Computes each digraph's relative frequency within the sample
///   (`count / total`).
/// - Rows for digraphs the store has never seen start at zero for every
///   language in the fixed set.
/// - Adds the relative frequency onto the accumulator for `language`.
///   Contributions from earlier sessions are never overwritten or
///   averaged, so accumulators grow with the number of sessions.
///
/// # Notes
/// - An empty table is a no-op, not an error.
/// - Only the in-memory store is mutated; persisting it afterwards is
///   the caller's responsibility.
pub fn train(table: &FrequencyTable, language: Language, store: &mut ProfileStore) {
	let total = table.total();
	if total == 0 {
		debug!("nothing to train: sample yielded no digraphs");
		return;
	}

	let total = f64::from(total);
	for (digraph, count) in table.iter() {
		let relative_frequency = f64::from(count) / total;
		store.row_mut(digraph).add(language, relative_frequency);
	}
}
