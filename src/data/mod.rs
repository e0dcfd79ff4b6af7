// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw labelled sentences
// all the way to tensor batches ready for the training loop.
//
// The pipeline flows in this order:
//
//   .tsv files (label<TAB>sentence)
//       │
//       ▼
//   CorpusLoader       → reads files, or serves the demo corpus
//       │
//       ▼
//   Preprocessor       → cleans text (whitespace, case, encoding)
//       │
//       ▼
//   Vocabulary         → converts words to token ID numbers
//       │
//       ▼
//   SentimentDataset   → implements Burn's Dataset trait
//       │
//       ▼
//   SentenceBatcher    → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader         → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Loads labelled sentences from .tsv files (or the demo corpus)
pub mod loader;

/// Cleans and normalises raw sentence text
pub mod preprocessor;

/// Implements Burn's Dataset trait for padded sentence samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Shuffles and splits data into train/validation sets
pub mod splitter;
