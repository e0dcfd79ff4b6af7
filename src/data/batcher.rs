// ============================================================
// Layer 4 — Sentence Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<SentenceSample>
// into tensors for the model.
//
// What is a Batcher?
//   A Batcher takes a list of individual samples and stacks
//   them into a single batch tensor, so the backend processes
//   many samples in one forward pass.
//
// How batching works here:
//   Input:  Vec of N SentenceSamples, each with sequences of length S
//   Output: SentenceBatch with tensors of shape [N, S]
//
//   We flatten all token_ids into one long Vec, then reshape:
//   [s1_t1, s1_t2, ..., s1_tS, s2_t1, ..., sN_tS] → [N, S]
//
// Why is this easy here?
//   Because all sequences are already padded to the same length
//   in SentenceSample. If they weren't, we'd need dynamic
//   padding here.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::SentenceSample;

// ─── SentenceBatch ────────────────────────────────────────────────────────────
/// A batch of sentence samples ready for the model forward pass.
/// All tensors have batch_size as their first dimension.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct SentenceBatch<B: Backend> {
    /// Token ID sequences — shape: [batch_size, seq_len]
    /// Each row is one sample's token_ids
    pub token_ids: Tensor<B, 2, Int>,

    /// Padding masks — shape: [batch_size, seq_len]
    /// 1 = real token, 0 = padding
    pub pad_mask: Tensor<B, 2, Int>,

    /// Ground truth labels — shape: [batch_size]
    /// One 0/1 integer per sample
    pub labels: Tensor<B, 1, Int>,
}

// ─── SentenceBatcher ──────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct backend device.
#[derive(Clone, Debug)]
pub struct SentenceBatcher<B: Backend> {
    /// The device to create tensors on
    pub device: B::Device,
}

impl<B: Backend> SentenceBatcher<B> {
    /// Create a new batcher for the given device
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes SentenceBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch of samples.
impl<B: Backend> Batcher<SentenceSample, SentenceBatch<B>> for SentenceBatcher<B> {
    /// Convert a Vec of SentenceSamples into a single SentenceBatch.
    ///
    /// Steps:
    ///   1. Flatten all token_ids into one Vec<i32>
    ///   2. Create a 1D tensor from the flat Vec
    ///   3. Reshape to [batch_size, seq_len]
    ///   4. Repeat for pad_mask
    ///   5. Create a 1D tensor for the labels
    fn batch(&self, items: Vec<SentenceSample>) -> SentenceBatch<B> {
        let batch_size = items.len();
        // All sequences have the same length (pre-padded)
        let seq_len    = items[0].token_ids.len();

        // ── Flatten token_ids ─────────────────────────────────────────────────
        // We go from Vec<Vec<u32>> to Vec<i32> (Burn uses i32 for Int tensors)
        // by iterating over samples and their tokens in order
        let ids_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.token_ids.iter().map(|&x| x as i32))
            .collect();

        // ── Flatten pad_mask ──────────────────────────────────────────────────
        let mask_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.pad_mask.iter().map(|&x| x as i32))
            .collect();

        // ── Collect labels ────────────────────────────────────────────────────
        // One scalar value per sample, not a sequence
        let labels: Vec<i32> = items
            .iter()
            .map(|s| s.label as i32)
            .collect();

        // ── Create tensors ────────────────────────────────────────────────────
        // Tensor::from_ints creates a 1D tensor from a slice,
        // then .reshape() gives it the correct 2D shape [batch, seq]

        let token_ids = Tensor::<B, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let pad_mask = Tensor::<B, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        // Labels stay as a 1D tensor [batch_size]
        let labels = Tensor::<B, 1, Int>::from_ints(
            labels.as_slice(), &self.device
        );

        SentenceBatch {
            token_ids,
            pad_mask,
            labels,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocabulary::Vocabulary;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_batch_shapes() {
        let vocab = Vocabulary::build(&[
            "i love this movie".to_string(),
            "i hate this movie".to_string(),
        ]);
        let samples: Vec<SentenceSample> = [("i love this movie", 1u8), ("i hate this movie", 0u8)]
            .iter()
            .map(|(t, l)| SentenceSample::encode(&vocab, t, *l, 6).unwrap())
            .collect();

        let batcher = SentenceBatcher::<TestBackend>::new(Default::default());
        let batch   = batcher.batch(samples);

        assert_eq!(batch.token_ids.dims(), [2, 6]);
        assert_eq!(batch.pad_mask.dims(),  [2, 6]);
        assert_eq!(batch.labels.dims(),    [2]);
    }
}
