// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the data layer's tensor batching.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - Other layers are testable without a tensor backend
//   - The model architecture is clearly separated from
//     data loading and application logic
//
// What's in this layer:
//
//   model.rs     — The classifier architecture
//                  • Embedding table (one row per vocabulary word)
//                  • Mean pooling over non-padding tokens
//                  • Linear projection to a single logit
//                  • Binary cross-entropy loss (with logits)
//
//   trainer.rs   — The training loop
//                  Handles forward pass, loss computation,
//                  backward pass, Adam optimiser step,
//                  validation metrics and checkpoint saving
//                  per epoch
//
//   predictor.rs — The inference engine
//                  Loads a checkpoint, encodes a sentence,
//                  runs the model, applies the sigmoid and
//                  reports the positive-class probability
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Kingma & Ba (2015) Adam

/// Embedding + mean-pool + linear classifier architecture
pub mod model;

/// Full training loop with validation and checkpointing
pub mod trainer;

/// Inference engine — loads checkpoint and scores sentences
pub mod predictor;
