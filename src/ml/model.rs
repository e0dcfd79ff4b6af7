use burn::{
    nn::{
        loss::BinaryCrossEntropyLossConfig,
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::backend::AutodiffBackend,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct SentimentModelConfig {
    pub vocab_size: usize,
    pub embed_dim:  usize,
}

impl SentimentModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SentimentModel<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embed_dim).init(device);
        let output    = LinearConfig::new(self.embed_dim, 1).init(device);
        SentimentModel { embedding, output }
    }
}

#[derive(Module, Debug)]
pub struct SentimentModel<B: Backend> {
    pub embedding: Embedding<B>,
    pub output:    Linear<B>,
}

impl<B: Backend> SentimentModel<B> {
    /// token_ids, pad_mask: [batch, seq_len] → logits: [batch]
    pub fn forward(
        &self,
        token_ids: Tensor<B, 2, Int>,
        pad_mask:  Tensor<B, 2, Int>,
    ) -> Tensor<B, 1> {
        let [batch_size, _seq_len] = token_ids.dims();

        let embedded = self.embedding.forward(token_ids); // [batch, seq, dim]

        // Mean-pool over real tokens only: zero out padding rows, sum over
        // the sequence axis, divide by the per-sentence token count.
        let mask   = pad_mask.float();                               // [batch, seq]
        let masked = embedded * mask.clone().unsqueeze_dim::<3>(2);  // [batch, seq, dim]
        let summed = masked.sum_dim(1);                              // [batch, 1, dim]
        let counts = mask.sum_dim(1).clamp_min(1.0);                 // [batch, 1]

        let [_, _, dim] = summed.dims();
        let pooled = summed.reshape([batch_size, dim]) / counts;     // [batch, dim]

        // Single logit per sentence; sigmoid is applied by the loss
        // during training and by the predictor at inference time.
        let logits = self.output.forward(pooled);                    // [batch, 1]
        logits.reshape([batch_size])
    }

    pub fn forward_loss(
        &self,
        token_ids: Tensor<B, 2, Int>,
        pad_mask:  Tensor<B, 2, Int>,
        labels:    Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 1>)
    where
        B: AutodiffBackend,
    {
        let logits = self.forward(token_ids, pad_mask);
        let bce = BinaryCrossEntropyLossConfig::new()
            .with_logits(true)
            .init(&logits.device());
        let loss = bce.forward(logits.clone(), labels);
        (loss, logits)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::optim::{AdamConfig, GradientsParams, Optimizer};

    use burn::data::dataloader::batcher::Batcher as _;

    use crate::data::batcher::SentenceBatcher;
    use crate::data::dataset::SentenceSample;
    use crate::domain::vocabulary::Vocabulary;

    type TestBackend = burn::backend::Autodiff<burn::backend::NdArray>;

    fn tiny_corpus() -> Vec<(String, u8)> {
        vec![
            ("i love this movie".to_string(),   1),
            ("a wonderful film".to_string(),    1),
            ("the acting was brilliant".to_string(), 1),
            ("i hate this movie".to_string(),   0),
            ("a terrible film".to_string(),     0),
            ("the acting was awful".to_string(), 0),
        ]
    }

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model  = SentimentModelConfig::new(20, 8).init::<TestBackend>(&device);

        let ids  = Tensor::<TestBackend, 2, Int>::zeros([3, 5], &device);
        let mask = Tensor::<TestBackend, 2, Int>::ones([3, 5], &device);
        let logits = model.forward(ids, mask);

        assert_eq!(logits.dims(), [3]);
    }

    #[test]
    fn test_learns_training_examples() {
        // After enough optimisation steps on a tiny corpus, each training
        // sentence must score on the same side of 0.5 as its own label.
        let device = Default::default();

        let corpus = tiny_corpus();
        let texts: Vec<String> = corpus.iter().map(|(t, _)| t.clone()).collect();
        let vocab  = Vocabulary::build(&texts);

        let samples: Vec<SentenceSample> = corpus
            .iter()
            .map(|(t, l)| SentenceSample::encode(&vocab, t, *l, 8).unwrap())
            .collect();

        let batcher = SentenceBatcher::<TestBackend>::new(device);
        let batch   = batcher.batch(samples);

        let mut model = SentimentModelConfig::new(vocab.len(), 8).init::<TestBackend>(&device);
        let mut optim = AdamConfig::new().init();

        for _ in 0..300 {
            let (loss, _) = model.forward_loss(
                batch.token_ids.clone(),
                batch.pad_mask.clone(),
                batch.labels.clone(),
            );
            let grads = GradientsParams::from_grads(loss.backward(), &model);
            model = optim.step(5e-2, model, grads);
        }

        let logits = model.forward(batch.token_ids.clone(), batch.pad_mask.clone());
        let probs: Vec<f32> = burn::tensor::activation::sigmoid(logits)
            .into_data()
            .to_vec()
            .unwrap();

        for (prob, (text, label)) in probs.iter().zip(corpus.iter()) {
            if *label == 1 {
                assert!(*prob > 0.5, "'{text}' scored {prob}, expected > 0.5");
            } else {
                assert!(*prob < 0.5, "'{text}' scored {prob}, expected < 0.5");
            }
        }
    }
}
