use super::extractor::FrequencyTable;
use super::store::ProfileStore;
use crate::error::DetectError;
use crate::language::{Detection, Language};

/// Scores a sample against every trained profile and picks the closest.
///
/// # Behavior
/// - Derives the observed distribution (`count / total`) from `table`.
/// - For each language, sums `|observed - accumulator|` over the sample's
///   digraphs, skipping digraphs the store has never seen (missing
///   reference rows contribute nothing rather than penalizing the score).
/// - Returns the language with the smallest sum: the L1 distance between
///   the observed distribution and each profile, restricted to
///   overlapping digraphs. Ties resolve to the first language in
///   [`Language::ALL`] order; no randomization.
///
/// # Errors
/// Returns [`DetectError::NotTrained`] if the store is empty; an empty
/// store must never produce a language guess.
///
/// # Notes
/// - A sample with no digraphs yields [`Detection::Unknown`].
pub fn classify(table: &FrequencyTable, store: &ProfileStore) -> Result<Detection, DetectError> {
	if store.is_empty() {
		return Err(DetectError::NotTrained);
	}

	let total = table.total();
	if total == 0 {
		return Ok(Detection::Unknown);
	}
	let total = f64::from(total);

	let mut best: Option<(Language, f64)> = None;
	for language in Language::ALL {
		let mut difference = 0.0;
		for (digraph, count) in table.iter() {
			if let Some(weights) = store.get(digraph) {
				let observed = f64::from(count) / total;
				difference += (observed - weights.get(language)).abs();
			}
		}

		// Strict comparison keeps the earlier language on equal scores
		match best {
			Some((_, smallest)) if difference >= smallest => {}
			_ => best = Some((language, difference)),
		}
	}

	// The language set is never empty, so a best match always exists
	Ok(best.map_or(Detection::Unknown, |(language, _)| Detection::Language(language)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::extractor::extract;
	use crate::model::trainer::train;
	use pretty_assertions::assert_eq;

	fn trained_store() -> ProfileStore {
		let mut store = ProfileStore::default();
		train(&extract("the quick brown fox"), Language::Englisch, &mut store);
		train(&extract("der schnelle braune fuchs"), Language::Deutsch, &mut store);
		store
	}

	#[test]
	fn empty_store_reports_not_trained() {
		let table = extract("hello");
		let result = classify(&table, &ProfileStore::default());
		assert!(matches!(result, Err(DetectError::NotTrained)));
	}

	#[test]
	fn degenerate_input_is_unknown() {
		let table = extract("42!");
		assert_eq!(classify(&table, &trained_store()).unwrap(), Detection::Unknown);
	}

	#[test]
	fn unseen_digraphs_tie_break_to_the_first_language() {
		// Neither "xy" nor "yz" exists in the store, so every language
		// scores a difference of zero and the fixed order decides
		let table = extract("xyz");
		let detection = classify(&table, &trained_store()).unwrap();
		assert_eq!(detection, Detection::Language(Language::Englisch));
	}

	#[test]
	fn equal_profiles_resolve_to_the_fixed_order() {
		let table = extract("aab");
		let mut store = ProfileStore::default();
		train(&table, Language::Englisch, &mut store);
		train(&table, Language::Franzoesisch, &mut store);
		train(&table, Language::Deutsch, &mut store);

		let detection = classify(&extract("aab"), &store).unwrap();
		assert_eq!(detection, Detection::Language(Language::Englisch));
	}

	#[test]
	fn picks_the_language_with_smallest_l1_distance() {
		// Shared digraphs of "thelazydog" with the store: th, he (english
		// profile) and el (german profile). Observed probability is 1/9
		// each, giving distances 9/45 = 0.2 (englisch), 1/3 (französisch)
		// and 18/63 = 0.2857 (deutsch)
		let detection = classify(&extract("the lazy dog"), &trained_store()).unwrap();
		assert_eq!(detection, Detection::Language(Language::Englisch));
	}

	#[test]
	fn a_sample_close_to_the_german_profile_is_german() {
		// Every digraph of "schnellebraune" was trained for deutsch, so
		// its distance is far below the english and french ones
		let detection = classify(&extract("schnelle braune"), &trained_store()).unwrap();
		assert_eq!(detection, Detection::Language(Language::Deutsch));
	}
}
