// ============================================================
// Layer 4 — Loader Assembly
// ============================================================
// Glue between a split name and a ready-to-iterate DataLoader:
//
//   "<data_dir>/<split>.txt"
//       │  TextCorpus::open
//       ▼
//   vocab given?  ── no ──▶ build_vocabulary (this split is the
//       │                   vocabulary source)
//       ▼ yes
//   WindowedCorpusDataset::new(&corpus, &vocab, L, B)
//       │
//       ▼  build_loader
//   DataLoader<WindowBatch<B>>
//
// Loading is single-threaded; the dataset is immutable after
// construction so the loader only ever reads from it.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use std::{path::PathBuf, sync::Arc};

use burn::{
    data::dataloader::{DataLoader, DataLoaderBuilder},
    prelude::*,
};

use crate::application::prepare_use_case::DataLoaderConfig;
use crate::data::{
    batcher::{WindowBatch, WindowBatcher},
    dataset::WindowedCorpusDataset,
    loader::TextCorpus,
    vocab_builder::build_vocabulary,
};
use crate::domain::vocabulary::Vocabulary;
use crate::error::Result;

/// A split's dataset, plus the vocabulary if this split built it.
pub struct SplitData {
    pub dataset: WindowedCorpusDataset,
    /// `Some` only when no vocabulary was passed in
    pub vocab:   Option<Vocabulary>,
}

/// `<data_dir>/<split>.txt`
pub fn split_path(data_dir: &str, split: &str) -> PathBuf {
    PathBuf::from(data_dir).join(format!("{split}.txt"))
}

/// Read and window one split.
///
/// With `vocab == None` the split is the vocabulary source: tokens are
/// counted, pruned by `min_word_count`, and the built vocabulary is
/// handed back in `SplitData::vocab`. Otherwise the given frozen
/// vocabulary is only read.
pub fn build_split(
    cfg:   &DataLoaderConfig,
    split: &str,
    vocab: Option<&Vocabulary>,
) -> Result<SplitData> {
    let path   = split_path(&cfg.data_dir, split);
    let corpus = TextCorpus::open(&path)?;
    tracing::info!("Loaded split '{}' ({} lines)", split, corpus.line_count());

    match vocab {
        Some(vocab) => {
            let dataset =
                WindowedCorpusDataset::new(&corpus, vocab, cfg.window_length, cfg.batch_size)?;
            Ok(SplitData { dataset, vocab: None })
        }
        None => {
            let vocab = build_vocabulary(&corpus, cfg.min_word_count)?;
            let dataset =
                WindowedCorpusDataset::new(&corpus, &vocab, cfg.window_length, cfg.batch_size)?;
            Ok(SplitData { dataset, vocab: Some(vocab) })
        }
    }
}

/// Wrap `dataset` in a DataLoader producing padded tensor batches.
pub fn build_loader<B: Backend>(
    dataset: WindowedCorpusDataset,
    cfg:     &DataLoaderConfig,
    device:  B::Device,
) -> Arc<dyn DataLoader<WindowBatch<B>>> {
    let builder = DataLoaderBuilder::new(WindowBatcher::<B>::new(device))
        .batch_size(cfg.batch_size);

    let builder = if cfg.shuffle {
        builder.shuffle(cfg.seed)
    } else {
        builder
    };

    builder.build(dataset)
}
