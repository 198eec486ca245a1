// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Shows what the model will actually be fed: the first few
// (src, tgt) windows of a split, decoded back into words through
// the vocabulary's frozen id_to_word table.
//
// Useful for eyeballing the one-position shift and for spotting
// how much of a corpus collapses to <unk> at a given threshold.

use anyhow::{Context, Result};

use crate::application::prepare_use_case::DataLoaderConfig;
use crate::data::pipeline::build_split;
use crate::domain::vocabulary::{Vocabulary, UNK_TOKEN};

/// One window pair rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWindow {
    pub index: usize,
    pub src:   String,
    pub tgt:   String,
}

pub struct InspectUseCase {
    config: DataLoaderConfig,
}

impl InspectUseCase {
    pub fn new(config: DataLoaderConfig) -> Self {
        Self { config }
    }

    /// Decode the first `count` windows of `split`.
    pub fn execute(&self, split: &str, count: usize) -> Result<Vec<DecodedWindow>> {
        let cfg = &self.config;
        cfg.validate()?;

        let source = build_split(cfg, cfg.vocab_split(), None)
            .with_context(|| format!("Building vocabulary from '{}'", cfg.vocab_split()))?;
        let vocab = source
            .vocab
            .context("vocabulary source split did not return a vocabulary")?;

        let dataset = if split == cfg.vocab_split() {
            source.dataset
        } else {
            build_split(cfg, split, Some(&vocab))
                .with_context(|| format!("Preparing split '{split}'"))?
                .dataset
        };

        let decoded = (0..count)
            .map_while(|index| dataset.window(index).map(|w| (index, w)))
            .map(|(index, (src, tgt))| DecodedWindow {
                index,
                src: decode(src, &vocab),
                tgt: decode(tgt, &vocab),
            })
            .collect();

        Ok(decoded)
    }
}

/// Join the words for `ids` with spaces.
pub fn decode(ids: &[u32], vocab: &Vocabulary) -> String {
    ids.iter()
        .map(|&id| vocab.word(id).unwrap_or(UNK_TOKEN))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_decodes_shifted_windows() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("train.txt"), "the cat sat\non the mat\n").unwrap();
        fs::write(dir.path().join("valid.txt"), "the dog sat\n").unwrap();

        let cfg = DataLoaderConfig {
            data_dir:       dir.path().display().to_string(),
            window_length:  3,
            batch_size:     1,
            min_word_count: 1,
            ..DataLoaderConfig::default()
        };
        let use_case = InspectUseCase::new(cfg);

        let train = use_case.execute("train", 10).unwrap();
        assert_eq!(train.len(), 2);
        assert_eq!(train[0].src, "the cat sat");
        assert_eq!(train[0].tgt, "cat sat <eos>");

        // "dog" was never in train
        let valid = use_case.execute("valid", 1).unwrap();
        assert_eq!(valid[0].src, "the <unk> sat");
    }
}
