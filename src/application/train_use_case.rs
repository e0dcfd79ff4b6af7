// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load labelled sentences    (Layer 4 - data)
//   Step 2: Clean the text             (Layer 4 - data)
//   Step 3: Build / load vocabulary    (Layer 6 - infra)
//   Step 4: Encode training samples    (Layer 4 - data)
//   Step 5: Split train/validation     (Layer 4 - data)
//   Step 6: Build datasets             (Layer 4 - data)
//   Step 7: Save config                (Layer 6 - infra)
//   Step 8: Run training loop          (Layer 5 - ml)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::CorpusLoader,
    preprocessor::Preprocessor,
    dataset::SentenceSample,
    dataset::SentimentDataset,
    splitter::split_train_val,
};
use crate::domain::traits::CorpusSource;
use crate::ml::trainer::run_training;
use crate::infra::{
    vocab_store::VocabStore,
    checkpoint::CheckpointManager,
};

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run.
// Serialisable so it can be saved to disk and reloaded for inference.
// The #[derive(Serialize, Deserialize)] macros from serde handle
// reading/writing this struct to JSON automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_dir:       String,
    pub checkpoint_dir: String,
    pub max_seq_len:    usize,
    pub batch_size:     usize,
    pub epochs:         usize,
    pub lr:             f64,
    pub embed_dim:      usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_dir:       "data/corpus".to_string(),
            checkpoint_dir: "checkpoints".to_string(),
            max_seq_len:    16,
            batch_size:     4,
            epochs:         200,
            lr:             1e-2,
            embed_dim:      16,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load all labelled sentences ───────────────────────────────
        // CorpusLoader reads .tsv files, or serves the demo corpus
        tracing::info!("Loading corpus from '{}'", cfg.data_dir);
        let loader    = CorpusLoader::new(&cfg.data_dir);
        let raw       = loader.load_all()?;
        tracing::info!("Loaded {} labelled sentences", raw.len());

        // ── Step 2: Clean / normalise text ────────────────────────────────────
        // Removes odd whitespace and control chars, lowercases.
        // Sentences that clean down to nothing are dropped.
        let preprocessor = Preprocessor::new();
        let cleaned: Vec<(String, u8)> = raw
            .iter()
            .map(|s| (preprocessor.clean(&s.text), s.label))
            .filter(|(text, _)| !text.is_empty())
            .collect();

        // ── Step 3: Build / load vocabulary ───────────────────────────────────
        // If a vocabulary was already built and saved, load it.
        // Otherwise collect the distinct tokens of the cleaned corpus.
        let texts: Vec<String> = cleaned.iter().map(|(t, _)| t.clone()).collect();
        let vocab_store = VocabStore::new(&cfg.checkpoint_dir);
        let vocab       = vocab_store.load_or_build(&texts)?;

        // ── Step 4: Encode training samples ───────────────────────────────────
        // Each sentence becomes a fixed-length sequence of
        // vocabulary indices plus a padding mask.
        let samples: Vec<SentenceSample> = cleaned
            .iter()
            .filter_map(|(text, label)| {
                let sample = SentenceSample::encode(&vocab, text, *label, cfg.max_seq_len);
                if let Some(ref s) = sample {
                    tracing::debug!("tokenised '{}' → {:?}", text, s.token_ids);
                }
                sample
            })
            .collect();
        tracing::info!("Built {} training samples", samples.len());

        anyhow::ensure!(
            !samples.is_empty(),
            "Corpus produced no usable samples — check '{}'",
            cfg.data_dir
        );

        // ── Step 5: Train / validation split (80/20) ──────────────────────────
        // Shuffle and split so the model is evaluated on unseen data
        let (train_samples, val_samples) = split_train_val(samples, 0.8);
        tracing::info!(
            "Split: {} train, {} validation",
            train_samples.len(),
            val_samples.len()
        );

        // ── Step 6: Build Burn datasets ───────────────────────────────────────
        // SentimentDataset implements Burn's Dataset trait so the
        // DataLoader can call .get(index) and .len() on it
        let train_dataset = SentimentDataset::new(train_samples);
        let val_dataset   = SentimentDataset::new(val_samples);

        // ── Step 7: Save config for inference ─────────────────────────────────
        // The predictor needs to know the model architecture to rebuild it
        let ckpt_manager = CheckpointManager::new(&cfg.checkpoint_dir);
        ckpt_manager.save_config(cfg)?;

        // ── Step 8: Run training loop (Layer 5) ───────────────────────────────
        run_training(cfg, vocab.len(), train_dataset, val_dataset, ckpt_manager)?;

        Ok(())
    }
}
