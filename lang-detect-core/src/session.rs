use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{DetectError, MalformedLine};
use crate::language::{Detection, Language};
use crate::model::classifier::classify;
use crate::model::extractor::extract;
use crate::model::store::ProfileStore;
use crate::model::trainer::train;

/// One training or classification session against a store file.
///
/// # Responsibilities
/// - Hold the store path configuration; no process-wide state
/// - Wire extractor, trainer, classifier and store together
/// - Load the store fresh at the start of an operation and, for
///   training, save it once at the end
///
/// # Notes
/// - Sessions are strictly sequential. Concurrent processes writing the
///   same store file are not protected against: the last writer wins.
pub struct Session {
	store_path: PathBuf,
}

/// What a training run did, beyond succeeding.
#[derive(Debug)]
pub struct TrainingReport {
	/// Language the sample was credited to.
	pub language: Language,
	/// Number of distinct digraphs observed in the sample.
	pub distinct_digraphs: usize,
	/// Store lines skipped while loading.
	pub warnings: Vec<MalformedLine>,
}

/// Classification result together with load diagnostics.
#[derive(Debug)]
pub struct ClassificationReport {
	/// The closest language, or the unknown sentinel.
	pub detection: Detection,
	/// Store lines skipped while loading.
	pub warnings: Vec<MalformedLine>,
}

impl Session {
	/// Creates a session bound to the given store file path.
	pub fn new<P: AsRef<Path>>(store_path: P) -> Self {
		Self { store_path: store_path.as_ref().to_owned() }
	}

	/// Path of the store file this session reads and writes.
	pub fn store_path(&self) -> &Path {
		&self.store_path
	}

	/// Creates the store file if it is missing. Idempotent.
	pub fn ensure_store_exists(&self) -> Result<(), DetectError> {
		ProfileStore::ensure_exists(&self.store_path)?;
		Ok(())
	}

	/// Runs a full training session: parse the label, load the store,
	/// extract the sample, train, save.
	///
	/// # Errors
	/// - [`DetectError::InvalidLanguage`] if `label` is outside the fixed
	///   set; rejected before the store file is touched.
	/// - [`DetectError::Store`] if the store cannot be read or written.
	pub fn run_training(&self, label: &str, sample: &str) -> Result<TrainingReport, DetectError> {
		let language = Language::from_str(label)?;

		let outcome = ProfileStore::load(&self.store_path)?;
		let mut store = outcome.store;

		let table = extract(sample);
		debug!(language = %language, digraphs = table.len(), "training on sample");
		train(&table, language, &mut store);
		store.save(&self.store_path)?;

		info!(language = %language, store = %self.store_path.display(), "training session saved");
		Ok(TrainingReport {
			language,
			distinct_digraphs: table.len(),
			warnings: outcome.warnings,
		})
	}

	/// Runs a classification session: load the store, extract the sample,
	/// score it against every profile.
	///
	/// # Errors
	/// - [`DetectError::NotTrained`] if the store holds no trained data.
	/// - [`DetectError::Store`] if the store cannot be read.
	pub fn run_classification(&self, sample: &str) -> Result<ClassificationReport, DetectError> {
		let outcome = ProfileStore::load(&self.store_path)?;
		let table = extract(sample);
		let detection = classify(&table, &outcome.store)?;

		debug!(detection = %detection, "classification finished");
		Ok(ClassificationReport { detection, warnings: outcome.warnings })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::fs;

	fn session_in(dir: &tempfile::TempDir) -> Session {
		Session::new(dir.path().join("store.txt"))
	}

	#[test]
	fn end_to_end_training_and_classification() {
		let dir = tempfile::tempdir().unwrap();
		let session = session_in(&dir);

		session.run_training("englisch", "the quick brown fox").unwrap();
		session.run_training("deutsch", "der schnelle braune fuchs").unwrap();

		// "thelazydog" shares th and he with the english profile and el
		// with the german one; the english L1 distance (0.2) beats the
		// german (0.2857) and french (0.3333) ones
		let report = session.run_classification("the lazy dog").unwrap();
		assert_eq!(report.detection, Detection::Language(Language::Englisch));
	}

	#[test]
	fn invalid_language_leaves_the_store_untouched() {
		let dir = tempfile::tempdir().unwrap();
		let session = session_in(&dir);

		session.run_training("englisch", "the quick brown fox").unwrap();
		let before = fs::read(session.store_path()).unwrap();

		let err = session.run_training("spanisch", "hola mundo").unwrap_err();
		assert!(matches!(err, DetectError::InvalidLanguage { .. }));

		let after = fs::read(session.store_path()).unwrap();
		assert_eq!(before, after);
	}

	#[test]
	fn classification_without_training_data_reports_not_trained() {
		let dir = tempfile::tempdir().unwrap();
		let session = session_in(&dir);

		// Missing store file
		let err = session.run_classification("the lazy dog").unwrap_err();
		assert!(matches!(err, DetectError::NotTrained));

		// Present but empty store file
		session.ensure_store_exists().unwrap();
		let err = session.run_classification("the lazy dog").unwrap_err();
		assert!(matches!(err, DetectError::NotTrained));
	}

	#[test]
	fn training_reports_the_distinct_digraph_count() {
		let dir = tempfile::tempdir().unwrap();
		let session = session_in(&dir);

		// "thequickbrownfox": 16 letters, 15 digraphs, all distinct
		let report = session.run_training("englisch", "the quick brown fox").unwrap();
		assert_eq!(report.language, Language::Englisch);
		assert_eq!(report.distinct_digraphs, 15);
	}

	#[test]
	fn degenerate_training_input_still_succeeds_without_rows() {
		let dir = tempfile::tempdir().unwrap();
		let session = session_in(&dir);

		let report = session.run_training("deutsch", "12345").unwrap();
		assert_eq!(report.distinct_digraphs, 0);
		assert_eq!(fs::read_to_string(session.store_path()).unwrap(), "");
	}

	#[test]
	fn load_warnings_surface_in_reports() {
		let dir = tempfile::tempdir().unwrap();
		let session = session_in(&dir);
		fs::write(session.store_path(), "th: 0.5000, 0.0000, 0.0000\nbroken\n").unwrap();

		let report = session.run_classification("this").unwrap();
		assert_eq!(report.warnings.len(), 1);
		assert_eq!(report.warnings[0].line_number, 2);
		assert_eq!(report.detection, Detection::Language(Language::Englisch));
	}
}
