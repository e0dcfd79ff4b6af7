use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::vocabulary::{Vocabulary, PAD_INDEX};

/// One fully tokenised and padded training sample.
/// token_ids and pad_mask always have length max_seq_len;
/// the mask is 1 for real tokens and 0 for padding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceSample {
    pub token_ids: Vec<u32>,
    pub pad_mask:  Vec<u32>,
    pub label:     u8,
}

impl SentenceSample {
    /// Encode one cleaned sentence against the vocabulary,
    /// truncating to max_seq_len and padding the remainder.
    /// Returns None when the sentence has no tokens at all.
    pub fn encode(
        vocab:       &Vocabulary,
        sentence:    &str,
        label:       u8,
        max_seq_len: usize,
    ) -> Option<Self> {
        let mut token_ids: Vec<u32> = vocab
            .encode(sentence)
            .into_iter()
            .map(|id| id as u32)
            .collect();
        if token_ids.is_empty() {
            return None;
        }
        token_ids.truncate(max_seq_len);

        let mut pad_mask = vec![1u32; token_ids.len()];
        while token_ids.len() < max_seq_len {
            token_ids.push(PAD_INDEX as u32);
            pad_mask.push(0);
        }

        Some(Self { token_ids, pad_mask, label })
    }

    /// Number of real (non-padding) tokens in this sample
    pub fn token_count(&self) -> usize {
        self.pad_mask.iter().filter(|&&m| m == 1).count()
    }
}

pub struct SentimentDataset {
    samples: Vec<SentenceSample>,
}

impl SentimentDataset {
    pub fn new(samples: Vec<SentenceSample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<SentenceSample> for SentimentDataset {
    fn get(&self, index: usize) -> Option<SentenceSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::build(&["i love this movie".to_string()])
    }

    #[test]
    fn test_pads_to_max_seq_len() {
        let s = SentenceSample::encode(&vocab(), "i love this movie", 1, 8).unwrap();
        assert_eq!(s.token_ids.len(), 8);
        assert_eq!(s.pad_mask.len(), 8);
        assert_eq!(s.token_count(), 4);
        assert_eq!(&s.pad_mask[..4], &[1, 1, 1, 1]);
        assert_eq!(&s.pad_mask[4..], &[0, 0, 0, 0]);
        assert!(s.token_ids[4..].iter().all(|&id| id == PAD_INDEX as u32));
    }

    #[test]
    fn test_truncates_long_sentences() {
        let s = SentenceSample::encode(&vocab(), "i love this movie", 1, 2).unwrap();
        assert_eq!(s.token_ids.len(), 2);
        assert_eq!(s.token_count(), 2);
    }

    #[test]
    fn test_empty_sentence_is_rejected() {
        assert!(SentenceSample::encode(&vocab(), "", 0, 8).is_none());
    }

    #[test]
    fn test_dataset_get_and_len() {
        let samples: Vec<SentenceSample> = [("i love this movie", 1), ("i hate this movie", 0)]
            .iter()
            .filter_map(|(t, l)| SentenceSample::encode(&vocab(), t, *l, 8))
            .collect();
        let dataset = SentimentDataset::new(samples);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(0).unwrap().label, 1);
        assert!(dataset.get(2).is_none());
    }
}
