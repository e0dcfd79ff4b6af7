// ============================================================
// Layer 3 — LabeledSentence Domain Type
// ============================================================
// Represents one training example: a sentence and its binary
// sentiment label. This is a plain data struct with almost no
// behaviour — the raw material the whole pipeline runs on.
//
// Using #[derive(Debug, Clone, Serialize, Deserialize)] gives us:
//   - Debug: lets us print the struct with {:?}
//   - Clone: lets us make copies of the struct
//   - Serialize/Deserialize: lets us save/load as JSON
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A single (sentence, label) pair.
/// The label is 1 for positive sentiment and 0 for negative —
/// the same 0/1 encoding the loss function consumes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSentence {
    /// The raw sentence text, before any cleaning or tokenisation
    pub text: String,

    /// Binary sentiment label: 1 = positive, 0 = negative
    pub label: u8,
}

impl LabeledSentence {
    /// Create a new LabeledSentence.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    ///
    /// Example:
    ///   let s = LabeledSentence::new("i love this movie", 1);
    pub fn new(text: impl Into<String>, label: u8) -> Self {
        Self { text: text.into(), label }
    }

    /// Returns true when the label marks positive sentiment
    pub fn is_positive(&self) -> bool {
        self.label == 1
    }
}
