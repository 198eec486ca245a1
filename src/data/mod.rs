// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a raw text file to integer tensor batches.
//
// The pipeline flows in this order:
//
//   <split>.txt
//       │
//       ▼
//   TextCorpus          → reads the file once, yields lines
//       │
//       ▼
//   build_vocabulary    → counts tokens, prunes by min_word_count,
//       │                 freezes the Vocabulary (train split only)
//       ▼
//   encode_corpus       → flat ID stream, <eos> after every line
//       │
//       ▼
//   slice_windows       → offset-by-one (src, tgt) windows,
//       │                 tail that can't fill a batch dropped
//       ▼
//   WindowedCorpusDataset → implements Burn's Dataset trait
//       │
//       ▼
//   WindowBatcher       → collate + pad into [N, max_len] tensors
//       │
//       ▼
//   DataLoader          → feeds batches to the training loop
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Reads line-oriented text corpora from disk
pub mod loader;

/// Frequency-pruned vocabulary construction
pub mod vocab_builder;

/// Text → flat token-ID stream
pub mod encoder;

/// Flat stream → (src, tgt) windows
pub mod windowing;

/// Implements Burn's Dataset trait over the windows
pub mod dataset;

/// Right-padding of variable-length windows into grids
pub mod collate;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Split name → dataset → DataLoader
pub mod pipeline;
