// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`   — builds a vocabulary and trains the classifier
//   2. `predict` — loads a checkpoint and scores one sentence
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, TrainArgs, PredictArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "sentiment-classifier",
    version = "0.1.0",
    about = "Train a tiny embedding-based sentiment classifier, then score sentences."
)]
pub struct Cli {
    /// The subcommand to run (train or predict)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Train(args)   => self.run_train(args.clone()),
            Commands::Predict(args) => self.run_predict(args.clone()),
        }
    }

    /// Handles the `train` subcommand.
    /// Converts CLI args into a TrainConfig and hands off to Layer 2.
    fn run_train(&self, args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training on corpus in: {}", args.data_dir);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = TrainUseCase::new(args.into());
        use_case.execute()?;

        println!("Training complete. Checkpoint saved.");
        Ok(())
    }

    /// Handles the `predict` subcommand.
    /// Loads the model from checkpoint and prints the predicted probability.
    fn run_predict(&self, args: PredictArgs) -> Result<()> {
        use crate::application::predict_use_case::PredictUseCase;

        // Build the use case with the checkpoint directory path
        let use_case = PredictUseCase::new(args.checkpoint_dir.clone())?;

        // Run inference and print the result
        let prediction = use_case.predict(&args.sentence)?;
        println!(
            "\nSentiment: {} (p(positive) = {:.4})",
            prediction.label_name(),
            prediction.probability
        );
        Ok(())
    }
}
