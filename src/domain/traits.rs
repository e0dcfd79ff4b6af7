// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CorpusLoader implements CorpusSource
//   - A future CsvLoader could also implement CorpusSource
//   - The application layer only sees CorpusSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::sentence::LabeledSentence;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce labelled training sentences.
///
/// Implementations:
///   - CorpusLoader → reads .tsv files from a directory,
///     or serves the built-in demo corpus
pub trait CorpusSource {
    /// Load all available (sentence, label) pairs from this source.
    fn load_all(&self) -> Result<Vec<LabeledSentence>>;
}
