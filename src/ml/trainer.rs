// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full train + validation loop using Burn's DataLoader and Adam.
//
// Backend insight:
//   - Training uses TrainBackend (Autodiff<NdArray>) for gradients
//   - model.valid() returns the model on EvalBackend (NdArray)
//   - Validation batcher must also use EvalBackend
//   - Dropout-free model, so valid() only strips autodiff overhead
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    nn::loss::BinaryCrossEntropyLossConfig,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::SentenceBatcher, dataset::SentimentDataset};
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{SentimentModel, SentimentModelConfig};

type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;
type EvalBackend  = burn::backend::NdArray;

pub fn run_training(
    cfg:           &TrainConfig,
    vocab_size:    usize,
    train_dataset: SentimentDataset,
    val_dataset:   SentimentDataset,
    ckpt_manager:  CheckpointManager,
) -> Result<()> {
    let device = burn::backend::ndarray::NdArrayDevice::default();
    tracing::info!("Using ndarray device: {:?}", device);
    train_loop(cfg, vocab_size, train_dataset, val_dataset, ckpt_manager, device)
}

fn train_loop(
    cfg:           &TrainConfig,
    vocab_size:    usize,
    train_dataset: SentimentDataset,
    val_dataset:   SentimentDataset,
    ckpt_manager:  CheckpointManager,
    device:        burn::backend::ndarray::NdArrayDevice,
) -> Result<()> {

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = SentimentModelConfig::new(vocab_size, cfg.embed_dim);
    let mut model: SentimentModel<TrainBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: {} embedding rows, embed_dim={}",
        vocab_size, cfg.embed_dim
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // ── Training data loader (AutodiffBackend) ────────────────────────────────
    let train_batcher = SentenceBatcher::<TrainBackend>::new(device);
    let train_loader  = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(42)
        .num_workers(1)
        .build(train_dataset);

    // ── Validation data loader (EvalBackend — no autodiff overhead) ───────────
    let val_batcher = SentenceBatcher::<EvalBackend>::new(device);
    let val_loader  = DataLoaderBuilder::new(val_batcher)
        .batch_size(cfg.batch_size)
        .num_workers(1)
        .build(val_dataset);

    // ── Metrics CSV ───────────────────────────────────────────────────────────
    let metrics_logger = MetricsLogger::new(&cfg.checkpoint_dir)?;

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {

        // ── Training phase ────────────────────────────────────────────────────
        let mut train_loss_sum = 0.0f64;
        let mut train_batches  = 0usize;

        for batch in train_loader.iter() {
            let (loss, _) = model.forward_loss(
                batch.token_ids,
                batch.pad_mask,
                batch.labels,
            );

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            train_loss_sum += loss_val;
            train_batches  += 1;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_train_loss = if train_batches > 0 {
            train_loss_sum / train_batches as f64
        } else { f64::NAN };

        // ── Validation phase ──────────────────────────────────────────────────
        // model.valid() → SentimentModel<EvalBackend>
        let model_valid = model.valid();

        let mut val_loss_sum  = 0.0f64;
        let mut val_batches   = 0usize;
        let mut correct       = 0usize;
        let mut total_samples = 0usize;

        for batch in val_loader.iter() {
            let logits = model_valid.forward(
                batch.token_ids.clone(),
                batch.pad_mask.clone(),
            );

            let bce = BinaryCrossEntropyLossConfig::new()
                .with_logits(true)
                .init(&logits.device());
            let batch_loss: f64 = bce
                .forward(logits.clone(), batch.labels.clone())
                .into_scalar().elem::<f64>();
            val_loss_sum += batch_loss;
            val_batches  += 1;

            // Threshold the sigmoid probability at 0.5 and compare
            // with the 0/1 labels
            let preds = burn::tensor::activation::sigmoid(logits)
                .greater_elem(0.5)
                .int();

            total_samples += batch.labels.dims()[0];

            let batch_correct: i64 = preds
                .equal(batch.labels)
                .int().sum().into_scalar().elem::<i64>();
            correct += batch_correct as usize;
        }

        let avg_val_loss = if val_batches   > 0 { val_loss_sum / val_batches as f64 } else { f64::NAN };
        let val_acc      = if total_samples > 0 { correct as f64 / total_samples as f64 } else { 0.0 };

        println!(
            "Epoch {:>3}/{} | train_loss={:.4} | val_loss={:.4} | val_acc={:.1}%",
            epoch, cfg.epochs, avg_train_loss, avg_val_loss, val_acc * 100.0,
        );

        metrics_logger.log(&EpochMetrics::new(epoch, avg_train_loss, avg_val_loss, val_acc))?;

        ckpt_manager.save_model(&model, epoch)?;
        tracing::debug!("Checkpoint saved for epoch {}", epoch);
    }

    tracing::info!("Training complete!");
    Ok(())
}
