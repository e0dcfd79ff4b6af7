// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Manages vocabulary building, saving, and loading.
//
// The word → index assignment made at training time is baked
// into the embedding table (row i belongs to word i), so the
// predict command MUST see the identical mapping. The store
// persists the vocabulary as JSON next to the checkpoints and
// reloads it for inference.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::vocabulary::Vocabulary;

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load existing vocabulary or build a new one from the
    /// cleaned training sentences
    pub fn load_or_build(&self, sentences: &[String]) -> Result<Vocabulary> {
        let path = self.dir.join("vocabulary.json");
        if path.exists() {
            tracing::info!("Loading existing vocabulary from disk");
            self.load()
        } else {
            tracing::info!("Building new vocabulary from {} sentences", sentences.len());
            self.build_and_save(sentences)
        }
    }

    /// Load a previously saved vocabulary from its JSON file
    pub fn load(&self) -> Result<Vocabulary> {
        let path = self.dir.join("vocabulary.json");
        let json = std::fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read vocabulary from '{}'. \
                     Make sure you have run 'train' before 'predict'.",
                    path.display()
                )
            })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Build the vocabulary from the corpus and write it to disk
    fn build_and_save(&self, sentences: &[String]) -> Result<Vocabulary> {
        std::fs::create_dir_all(&self.dir).ok();

        let vocab = Vocabulary::build(sentences);

        let path = self.dir.join("vocabulary.json");
        std::fs::write(&path, serde_json::to_string_pretty(&vocab)?)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        tracing::info!(
            "Vocabulary built with {} distinct words, saved to '{}'",
            vocab.words().count(),
            path.display()
        );

        Ok(vocab)
    }
}
