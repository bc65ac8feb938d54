//! Digraph-frequency language detection library.
//!
//! This crate identifies the language of a short text sample by comparing
//! its character-pair (digraph) frequencies against trained per-language
//! profiles. It provides:
//! - Digraph extraction from raw text
//! - A line-oriented, file-backed profile store
//! - Incremental training of per-language profiles
//! - L1-distance classification against the stored profiles
//!
//! The statistical core is deterministic and side-effect free; all file
//! handling is confined to the profile store and the session facade.

/// Error kinds shared across the crate.
pub mod error;

/// The fixed language set and the classification outcome type.
pub mod language;

/// Core statistical model (extraction, profiles, store, training, scoring).
pub mod model;

/// High-level one-shot operations for shell frontends.
///
/// Wires the store, trainer and classifier together so a caller only
/// supplies labels and raw text.
pub mod session;
