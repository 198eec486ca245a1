//! Data preparation for word-level next-token language models.
//!
//! Builds a frequency-pruned [`Vocabulary`](domain::vocabulary::Vocabulary)
//! from a training corpus, turns each split into offset-by-one
//! `(src, tgt)` windows, and pads sampled windows into Burn tensor
//! batches.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

pub use application::prepare_use_case::DataLoaderConfig;
pub use data::{
    batcher::{WindowBatch, WindowBatcher},
    collate::{collate, CollatedBatch, PaddedGrid, PAD_ID},
    dataset::{DatasetStats, WindowedCorpusDataset},
    loader::TextCorpus,
    pipeline::{build_loader, build_split, SplitData},
    vocab_builder::build_vocabulary,
};
pub use domain::{
    vocabulary::{Vocabulary, EOS_ID, UNK_ID},
    window::WindowPair,
};
pub use error::DataError;
