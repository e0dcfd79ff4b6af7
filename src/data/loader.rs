// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads labelled sentences from a directory of .tsv files.
//
// File format — one example per line:
//   1<TAB>i love this movie
//   0<TAB>what a terrible film
//
// The label must be 0 or 1; everything after the first tab is
// the sentence. Malformed lines are skipped with a warning so
// one bad line never aborts a training run.
//
// If the directory does not exist at all, the loader falls
// back to a small built-in demo corpus so the tutorial can be
// run end-to-end with no data preparation (demo mode).
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::sentence::LabeledSentence;
use crate::domain::traits::CorpusSource;

/// Loads all .tsv files from a given directory.
/// Implements the CorpusSource trait from Layer 3.
pub struct CorpusLoader {
    /// Path to the directory containing .tsv files
    dir: String,
}

impl CorpusLoader {
    /// Create a new CorpusLoader pointed at a directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Implement the CorpusSource trait so the application layer
/// can call load_all() without knowing about the file format
impl CorpusSource for CorpusLoader {
    fn load_all(&self) -> Result<Vec<LabeledSentence>> {
        let dir = Path::new(&self.dir);

        // No data directory → run on the built-in demo corpus
        // rather than crashing. This keeps `train` flagless.
        if !dir.exists() {
            tracing::warn!(
                "Corpus directory '{}' does not exist — using the built-in demo corpus",
                self.dir
            );
            return Ok(demo_corpus());
        }

        let mut sentences = Vec::new();

        // Walk every entry in the directory
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir))?
        {
            let entry = entry?;
            let path  = entry.path();

            // Only process files with the .tsv extension
            if path.extension().and_then(|e| e.to_str()) == Some("tsv") {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Cannot read '{}'", path.display()))?;

                let before = sentences.len();
                for (line_no, line) in content.lines().enumerate() {
                    match parse_line(line) {
                        Some(s) => sentences.push(s),
                        // Log a warning but continue — don't fail on one bad line
                        None if !line.trim().is_empty() => {
                            tracing::warn!(
                                "Skipping malformed line {} in '{}'",
                                line_no + 1,
                                path.display()
                            );
                        }
                        None => {}
                    }
                }

                tracing::debug!(
                    "Loaded {} examples from '{}'",
                    sentences.len() - before,
                    path.display()
                );
            }
        }

        // An existing-but-empty directory also falls back to the
        // demo corpus — training on zero sentences is never useful.
        if sentences.is_empty() {
            tracing::warn!(
                "No usable examples under '{}' — using the built-in demo corpus",
                self.dir
            );
            return Ok(demo_corpus());
        }

        tracing::info!("Successfully loaded {} labelled sentences", sentences.len());
        Ok(sentences)
    }
}

/// Parse one `label<TAB>sentence` line.
/// Returns None for blank lines, missing tabs, bad labels,
/// or empty sentences.
fn parse_line(line: &str) -> Option<LabeledSentence> {
    let (label, text) = line.split_once('\t')?;
    let label: u8 = label.trim().parse().ok()?;
    if label > 1 {
        return None;
    }
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(LabeledSentence::new(text, label))
}

/// The built-in demo corpus — a dozen short movie-review style
/// sentences, half positive and half negative. Small enough to
/// train in seconds, varied enough to show the model learning.
pub fn demo_corpus() -> Vec<LabeledSentence> {
    vec![
        LabeledSentence::new("i love this movie", 1),
        LabeledSentence::new("what a wonderful film", 1),
        LabeledSentence::new("an excellent and moving story", 1),
        LabeledSentence::new("the acting was brilliant", 1),
        LabeledSentence::new("a joy from start to finish", 1),
        LabeledSentence::new("absolutely fantastic direction and music", 1),
        LabeledSentence::new("i hate this movie", 0),
        LabeledSentence::new("what a terrible film", 0),
        LabeledSentence::new("a boring and predictable story", 0),
        LabeledSentence::new("the acting was awful", 0),
        LabeledSentence::new("a complete waste of time", 0),
        LabeledSentence::new("absolutely dreadful pacing and dialogue", 0),
    ]
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let s = parse_line("1\ti love this movie").unwrap();
        assert_eq!(s.label, 1);
        assert_eq!(s.text, "i love this movie");
        assert!(s.is_positive());
    }

    #[test]
    fn test_parse_rejects_bad_label() {
        assert!(parse_line("2\tsome sentence").is_none());
        assert!(parse_line("yes\tsome sentence").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_tab_or_text() {
        assert!(parse_line("1 some sentence").is_none());
        assert!(parse_line("0\t   ").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_missing_dir_falls_back_to_demo_corpus() {
        let loader    = CorpusLoader::new("no/such/dir");
        let sentences = loader.load_all().unwrap();
        assert!(!sentences.is_empty());
    }

    #[test]
    fn test_demo_corpus_is_balanced_and_binary() {
        let corpus = demo_corpus();
        let positives = corpus.iter().filter(|s| s.is_positive()).count();
        assert_eq!(positives * 2, corpus.len());
        assert!(corpus.iter().all(|s| s.label <= 1));
    }
}
