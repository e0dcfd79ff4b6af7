// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Scores one sentence with a previously trained model:
//   1. Load the saved vocabulary (same indices as training)
//   2. Rebuild the model from config + checkpoint weights
//   3. Clean the sentence exactly like the training data
//   4. Return the sigmoid probability of the positive class

use anyhow::Result;

use crate::data::preprocessor::Preprocessor;
use crate::infra::{checkpoint::CheckpointManager, vocab_store::VocabStore};
use crate::ml::predictor::{Prediction, Predictor};

pub struct PredictUseCase {
    preprocessor: Preprocessor,
    predictor:    Predictor,
}

impl PredictUseCase {
    pub fn new(checkpoint_dir: String) -> Result<Self> {
        let vocab_store = VocabStore::new(&checkpoint_dir);
        let vocab       = vocab_store.load()?;
        let ckpt        = CheckpointManager::new(&checkpoint_dir);
        let predictor   = Predictor::from_checkpoint(&ckpt, vocab)?;
        Ok(Self { preprocessor: Preprocessor::new(), predictor })
    }

    /// Clean the sentence with the same preprocessor used in
    /// training, then score it. Cleaning must match or the
    /// vocabulary lookup would see words training never saw
    /// (e.g. "Movie" instead of "movie").
    pub fn predict(&self, sentence: &str) -> Result<Prediction> {
        let cleaned = self.preprocessor.clean(sentence);
        self.predictor.predict(&cleaned)
    }
}
