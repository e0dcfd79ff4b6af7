// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records training metrics to a CSV file after each epoch.
//
// Why log metrics to CSV?
//   - Easy to open in Excel or Google Sheets
//   - Can plot learning curves to diagnose training issues
//   - Provides a permanent record of each training run
//
// Metrics recorded per epoch:
//   - epoch:      the epoch number (1, 2, 3, ...)
//   - train_loss: average binary cross-entropy on training set
//   - val_loss:   average binary cross-entropy on validation set
//   - val_acc:    fraction of validation labels predicted correctly
//
// Output file: checkpoints/metrics.csv
//
// Example CSV output:
//   epoch,train_loss,val_loss,val_acc
//   1,0.712400,0.698200,0.500000
//   2,0.651900,0.644800,0.500000
//   ...
//
// How to read the metrics:
//   - Loss should decrease each epoch (model is learning)
//   - If val_loss increases while train_loss decreases → overfitting
//   - val_acc should climb towards 1.0 on the tiny demo corpus
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Average binary cross-entropy over all training batches.
    /// Lower is better. Random initialisation gives ~ln(2) ≈ 0.693
    pub train_loss: f64,

    /// Average binary cross-entropy on the validation set.
    /// Should track train_loss — divergence indicates overfitting
    pub val_loss: f64,

    /// Fraction of validation sentences classified correctly
    /// Range: [0.0, 1.0] — 1.0 means every label was right
    pub val_acc: f64,
}

impl EpochMetrics {
    /// Create a new EpochMetrics record
    pub fn new(epoch: usize, train_loss: f64, val_loss: f64, val_acc: f64) -> Self {
        Self { epoch, train_loss, val_loss, val_acc }
    }

    /// Returns true if this epoch improved over the previous best val_loss
    pub fn is_improvement(&self, best_val_loss: f64) -> bool {
        self.val_loss < best_val_loss
    }
}

/// Logs epoch metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());

        // Create directory if it doesn't exist
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        // Write CSV header only if file is new
        // This allows appending to an existing log across runs
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            // Write the header row
            writeln!(f, "epoch,train_loss,val_loss,val_acc")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row in the CSV.
    ///
    /// Uses OpenOptions with append=true so we add to the file
    /// without overwriting previous epochs.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        // Open in append mode — adds to end of file
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        // Write one CSV row with 6 decimal places for each metric
        writeln!(
            f,
            "{},{:.6},{:.6},{:.6}",
            m.epoch,
            m.train_loss,
            m.val_loss,
            m.val_acc,
        )?;

        Ok(())
    }

    /// Return the path to the metrics CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_improvement() {
        let m = EpochMetrics::new(2, 0.45, 0.43, 0.8);
        // 0.43 < 0.5 → this is an improvement
        assert!(m.is_improvement(0.5));
        // 0.43 is NOT less than 0.4 → not an improvement
        assert!(!m.is_improvement(0.4));
    }
}
