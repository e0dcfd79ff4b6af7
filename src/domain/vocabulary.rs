// ============================================================
// Layer 3 — Vocabulary Domain Type
// ============================================================
// The word → index mapping at the centre of the pipeline.
//
// How it is built:
//   - Collect every distinct whitespace-delimited token across
//     all training sentences
//   - Assign each one an integer index
//
// Because the vocabulary is built from the same sentences that
// are later encoded, every word of a training sentence is
// guaranteed to have an index. Unknown words only appear at
// prediction time, and map to the reserved <unk> entry.
//
// Index layout:
//   0          → <pad>  (fills short sentences up to max_seq_len)
//   1          → <unk>  (any word not seen during training)
//   2..        → corpus words, assigned in sorted order
//
// Words are stored in a BTreeMap and indexed in sorted order so
// the same corpus always produces the same mapping — the index a
// word gets must not change between the train and predict runs
// that share a checkpoint.
//
// Reference: Rust Book §8 (Collections)

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Index reserved for the padding token
pub const PAD_INDEX: usize = 0;
/// Index reserved for words never seen during training
pub const UNK_INDEX: usize = 1;
/// First index handed out to a real corpus word
const FIRST_WORD_INDEX: usize = 2;

/// The mapping from distinct training tokens to integer indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    index: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from already-cleaned sentences.
    ///
    /// Tokens are exactly the whitespace-delimited words —
    /// no further splitting, so "movie." and "movie" are
    /// distinct tokens if both occur in the corpus.
    pub fn build(sentences: &[String]) -> Self {
        // BTreeMap doubles as the distinct-token set and keeps
        // the words sorted for deterministic index assignment.
        let mut index: BTreeMap<String, usize> = BTreeMap::new();
        for sentence in sentences {
            for word in sentence.split_whitespace() {
                index.entry(word.to_string()).or_insert(0);
            }
        }

        for (next_id, (_, slot)) in index.iter_mut().enumerate() {
            *slot = FIRST_WORD_INDEX + next_id;
        }

        Self { index }
    }

    /// Encode a sentence as a sequence of vocabulary indices.
    /// Words not in the vocabulary map to UNK_INDEX.
    pub fn encode(&self, sentence: &str) -> Vec<usize> {
        sentence
            .split_whitespace()
            .map(|w| self.index.get(w).copied().unwrap_or(UNK_INDEX))
            .collect()
    }

    /// Look up the index of a single word, if it was seen in training
    pub fn lookup(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Number of entries the embedding table needs —
    /// corpus words plus the two reserved slots.
    pub fn len(&self) -> usize {
        self.index.len() + FIRST_WORD_INDEX
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The distinct corpus words, in index order (reserved slots excluded)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|w| w.as_str())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn corpus() -> Vec<String> {
        vec![
            "i love this movie".to_string(),
            "i hate this movie".to_string(),
            "what a wonderful film".to_string(),
        ]
    }

    #[test]
    fn test_contains_exactly_the_distinct_tokens() {
        let sentences = corpus();
        let vocab     = Vocabulary::build(&sentences);

        let expected: BTreeSet<String> = sentences
            .iter()
            .flat_map(|s| s.split_whitespace())
            .map(String::from)
            .collect();

        let got: BTreeSet<String> = vocab.words().map(String::from).collect();
        assert_eq!(got, expected);
        // BTreeSet equality already implies no duplicates,
        // but check the count explicitly too: 9 distinct words
        assert_eq!(vocab.words().count(), 9);
    }

    #[test]
    fn test_training_sentence_encodes_to_known_indices() {
        let sentences = corpus();
        let vocab     = Vocabulary::build(&sentences);

        for sentence in &sentences {
            for &id in &vocab.encode(sentence) {
                // Every index must belong to a real corpus word —
                // never <unk>, never out of table range
                assert_ne!(id, UNK_INDEX);
                assert!(id < vocab.len());
            }
        }
    }

    #[test]
    fn test_unknown_word_maps_to_unk() {
        let vocab = Vocabulary::build(&corpus());
        let ids   = vocab.encode("i love spaghetti");
        assert_eq!(ids[2], UNK_INDEX);
        // known words around it still resolve normally
        assert_ne!(ids[0], UNK_INDEX);
        assert_ne!(ids[1], UNK_INDEX);
    }

    #[test]
    fn test_same_corpus_same_indices() {
        let a = Vocabulary::build(&corpus());
        let b = Vocabulary::build(&corpus());
        assert_eq!(a.encode("i love this movie"), b.encode("i love this movie"));
    }

    #[test]
    fn test_len_includes_reserved_slots() {
        let vocab = Vocabulary::build(&corpus());
        assert_eq!(vocab.len(), 9 + 2);
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = Vocabulary::build(&[]);
        assert!(vocab.is_empty());
        assert!(vocab.encode("").is_empty());
    }
}
