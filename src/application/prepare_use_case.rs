// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the data preparation for every split in order:
//
//   Step 1: Validate the configuration
//   Step 2: First split (train)  → count, prune, build vocabulary,
//                                  encode, window
//   Step 3: Remaining splits     → encode + window through the SAME
//                                  frozen vocabulary
//   Step 4: Wrap each split in a DataLoader and walk it once so the
//           reported batch counts are what a training loop would see
//
// The vocabulary is owned here and only lent out by reference,
// so every split observes identical ID assignments.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §4 (Datasets and Dataloaders)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::dataset::{DatasetStats, WindowedCorpusDataset};
use crate::data::pipeline::{build_loader, build_split};
use crate::domain::vocabulary::Vocabulary;
use crate::error::DataError;

type PrepareBackend = burn::backend::NdArray;

// ─── Data Loader Configuration ───────────────────────────────────────────────
// Serialisable so it can be read from the `data_loader` section of a
// JSON config file. `seq_len` is accepted as an older name for
// `window_length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLoaderConfig {
    /// Directory holding `<split>.txt` files
    pub data_dir:       String,
    #[serde(alias = "seq_len")]
    pub window_length:  usize,
    pub batch_size:     usize,
    pub min_word_count: usize,
    pub shuffle:        bool,
    pub seed:           u64,
    /// Split names; the first one is the vocabulary source
    pub splits:         Vec<String>,
}

impl Default for DataLoaderConfig {
    fn default() -> Self {
        Self {
            data_dir:       "data".to_string(),
            window_length:  20,
            batch_size:     32,
            min_word_count: 5,
            shuffle:        false,
            seed:           42,
            splits:         vec!["train".to_string(), "valid".to_string()],
        }
    }
}

impl DataLoaderConfig {
    pub fn validate(&self) -> Result<(), DataError> {
        for (name, value) in [
            ("window_length", self.window_length),
            ("batch_size", self.batch_size),
            ("min_word_count", self.min_word_count),
        ] {
            if value == 0 {
                return Err(DataError::InvalidConfig(format!("{name} must be positive")));
            }
        }
        if self.splits.is_empty() {
            return Err(DataError::InvalidConfig("at least one split is required".to_string()));
        }
        Ok(())
    }

    /// The split whose corpus the vocabulary is built from.
    pub fn vocab_split(&self) -> &str {
        &self.splits[0]
    }
}

// ─── Report ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub split:        String,
    pub stats:        DatasetStats,
    /// Batches actually produced by one pass of the DataLoader
    pub batches_seen: usize,
    pub rows_seen:    usize,
}

#[derive(Debug)]
pub struct PrepareReport {
    pub vocab:  Vocabulary,
    pub splits: Vec<SplitReport>,
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: DataLoaderConfig,
}

impl PrepareUseCase {
    pub fn new(config: DataLoaderConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareReport> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Vocabulary source split ──────────────────────────────────────────
        let vocab_split = cfg.vocab_split();
        let first = build_split(cfg, vocab_split, None)
            .with_context(|| format!("Preparing split '{vocab_split}'"))?;
        let vocab = first
            .vocab
            .context("vocabulary source split did not return a vocabulary")?;
        tracing::info!("Vocabulary size (ntoken): {}", vocab.size());

        let mut reports = vec![run_split(cfg, vocab_split, first.dataset)];

        // ── Remaining splits reuse the frozen vocabulary ─────────────────────
        for split in &cfg.splits[1..] {
            let data = build_split(cfg, split, Some(&vocab))
                .with_context(|| format!("Preparing split '{split}'"))?;
            reports.push(run_split(cfg, split, data.dataset));
        }

        Ok(PrepareReport { vocab, splits: reports })
    }
}

/// Walk one split's DataLoader once and record what came out.
fn run_split(
    cfg:     &DataLoaderConfig,
    split:   &str,
    dataset: WindowedCorpusDataset,
) -> SplitReport {
    let stats  = dataset.stats();
    let loader = build_loader::<PrepareBackend>(dataset, cfg, Default::default());

    let mut batches_seen = 0usize;
    let mut rows_seen    = 0usize;
    for batch in loader.iter() {
        batches_seen += 1;
        rows_seen    += batch.src_lengths.len();
    }

    tracing::debug!("Split '{}': {} batches, {} rows", split, batches_seen, rows_seen);

    SplitReport {
        split: split.to_string(),
        stats,
        batches_seen,
        rows_seen,
    }
}
