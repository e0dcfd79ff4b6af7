// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `predict`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Every flag has a default, so `sentiment-classifier train`
// works with no arguments at all on the built-in demo corpus.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the sentiment classifier on labelled sentences
    Train(TrainArgs),

    /// Score a sentence using a trained checkpoint
    Predict(PredictArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Directory containing .tsv files with `label<TAB>sentence` lines.
    /// If the directory does not exist, a built-in demo corpus is used.
    #[arg(long, default_value = "data/corpus")]
    pub data_dir: String,

    /// Directory to save checkpoints, config and vocabulary
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Maximum number of tokens per sentence (longer sentences are
    /// truncated, shorter ones padded)
    #[arg(long, default_value_t = 16)]
    pub max_seq_len: usize,

    /// Number of samples processed together in one forward pass
    #[arg(long, default_value_t = 4)]
    pub batch_size: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 200)]
    pub epochs: usize,

    /// How fast the model learns — too high causes instability,
    /// too low causes slow convergence
    #[arg(long, default_value_t = 1e-2)]
    pub lr: f64,

    /// Size of the learned vector attached to each vocabulary word
    #[arg(long, default_value_t = 16)]
    pub embed_dim: usize,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_dir:       a.data_dir,
            checkpoint_dir: a.checkpoint_dir,
            max_seq_len:    a.max_seq_len,
            batch_size:     a.batch_size,
            epochs:         a.epochs,
            lr:             a.lr,
            embed_dim:      a.embed_dim,
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// The sentence to classify
    #[arg(long)]
    pub sentence: String,

    /// Directory where checkpoints were saved during training
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,
}
