// ============================================================
// Layer 5 — Predictor
// ============================================================
use anyhow::Result;
use burn::prelude::*;

use crate::data::dataset::SentenceSample;
use crate::domain::vocabulary::Vocabulary;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{SentimentModel, SentimentModelConfig};

type InferBackend = burn::backend::NdArray;

/// The result of scoring one sentence.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Probability that the sentence is positive, in [0, 1]
    pub probability: f32,
}

impl Prediction {
    /// The predicted class, thresholded at 0.5
    pub fn is_positive(&self) -> bool {
        self.probability > 0.5
    }

    pub fn label_name(&self) -> &'static str {
        if self.is_positive() { "positive" } else { "negative" }
    }
}

pub struct Predictor {
    model:       SentimentModel<InferBackend>,
    vocab:       Vocabulary,
    max_seq_len: usize,
    device:      burn::backend::ndarray::NdArrayDevice,
}

impl Predictor {
    /// Rebuild the trained model from the saved config and weights.
    /// The vocabulary decides the embedding table size, so the same
    /// vocabulary used in training must be passed in here.
    pub fn from_checkpoint(
        ckpt_manager: &CheckpointManager,
        vocab:        Vocabulary,
    ) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let cfg    = ckpt_manager.load_config()?;

        let model_cfg = SentimentModelConfig::new(vocab.len(), cfg.embed_dim);
        let model: SentimentModel<InferBackend> = model_cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;
        tracing::info!("Model loaded from checkpoint");

        Ok(Self { model, vocab, max_seq_len: cfg.max_seq_len, device })
    }

    /// Score one already-cleaned sentence.
    /// Words never seen in training fall back to the <unk> index.
    pub fn predict(&self, sentence: &str) -> Result<Prediction> {
        let sample = SentenceSample::encode(&self.vocab, sentence, 0, self.max_seq_len)
            .ok_or_else(|| anyhow::anyhow!("Sentence contains no tokens: '{sentence}'"))?;

        // Build a batch of one: [1, max_seq_len]
        let ids_flat: Vec<i32> = sample.token_ids.iter().map(|&x| x as i32).collect();
        let mask_flat: Vec<i32> = sample.pad_mask.iter().map(|&x| x as i32).collect();

        let token_ids = Tensor::<InferBackend, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device,
        ).reshape([1, self.max_seq_len]);
        let pad_mask = Tensor::<InferBackend, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device,
        ).reshape([1, self.max_seq_len]);

        // Forward pass → one logit → sigmoid probability
        let logits      = self.model.forward(token_ids, pad_mask);
        let probability = burn::tensor::activation::sigmoid(logits)
            .into_scalar()
            .elem::<f32>();

        tracing::debug!("'{}' → p(positive)={:.4}", sentence, probability);

        Ok(Prediction { probability })
    }
}
