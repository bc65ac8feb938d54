//! Core statistical model for digraph-based language detection.
//!
//! The model works on adjacent letter pairs (digraphs): a sample is
//! reduced to digraph frequencies, training folds those frequencies into
//! per-language profiles, and classification scores a sample against
//! every profile to pick the closest one.

/// Scores a frequency table against the stored profiles (L1 distance).
pub mod classifier;

/// Digraph and frequency-table types plus text-to-digraph extraction.
pub mod extractor;

/// Per-digraph accumulator rows, one slot per language in the fixed set.
pub mod profile;

/// The digraph-to-accumulators mapping and its line-oriented file format.
///
/// Handles loading (lenient, line-by-line), saving (whole-file
/// overwrite) and first-run initialization.
pub mod store;

/// Folds extracted frequencies into the store for one language.
pub mod trainer;
