use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Per-language accumulators for a single digraph.
///
/// One slot per language in the fixed set, in [`Language::ALL`] order, so
/// every digraph row always carries a value for every language.
///
/// The values are running sums of relative within-sample frequencies, one
/// contribution per training session. They are not probabilities: their
/// scale grows with the number of sessions trained for each language.
///
/// ## Invariants
/// - Exactly [`Language::COUNT`] slots, zero-initialized.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct LanguageWeights([f64; Language::COUNT]);

impl LanguageWeights {
	/// Accumulator value for `language`.
	pub fn get(&self, language: Language) -> f64 {
		self.0[language.index()]
	}

	/// Adds `delta` onto the accumulator for `language`.
	pub fn add(&mut self, language: Language, delta: f64) {
		self.0[language.index()] += delta;
	}

	/// Iterates over `(language, accumulator)` pairs in the fixed order.
	pub fn iter(&self) -> impl Iterator<Item = (Language, f64)> + '_ {
		Language::ALL.iter().map(|language| (*language, self.get(*language)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn rows_start_at_zero_for_every_language() {
		let weights = LanguageWeights::default();
		for language in Language::ALL {
			assert_eq!(weights.get(language), 0.0);
		}
	}

	#[test]
	fn adding_is_cumulative_and_per_language() {
		let mut weights = LanguageWeights::default();
		weights.add(Language::Deutsch, 0.25);
		weights.add(Language::Deutsch, 0.25);
		assert_eq!(weights.get(Language::Deutsch), 0.5);
		assert_eq!(weights.get(Language::Englisch), 0.0);
		assert_eq!(weights.get(Language::Franzoesisch), 0.0);
	}

	#[test]
	fn iteration_follows_the_fixed_order() {
		let mut weights = LanguageWeights::default();
		weights.add(Language::Franzoesisch, 1.0);
		let languages: Vec<Language> = weights.iter().map(|(language, _)| language).collect();
		assert_eq!(languages, Language::ALL.to_vec());
	}
}
