use burn::data::dataset::Dataset;

use crate::data::{encoder::encode_corpus, windowing};
use crate::domain::traits::CorpusSource;
use crate::domain::vocabulary::Vocabulary;
use crate::domain::window::WindowPair;
use crate::error::{DataError, Result};

/// Counts describing how a corpus was cut into windows.
/// The token stream itself is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    pub stream_tokens:    usize,
    pub num_batches:      usize,
    pub windows:          usize,
    /// Tokens past the last full B×L grid
    pub discarded_tokens: usize,
}

/// Fixed-length (src, tgt) windows over one corpus, indexable by
/// burn's DataLoader. Immutable after construction.
pub struct WindowedCorpusDataset {
    src_windows:   Vec<Vec<u32>>,
    tgt_windows:   Vec<Vec<u32>>,
    window_length: usize,
    batch_size:    usize,
    stats:         DatasetStats,
}

impl WindowedCorpusDataset {
    /// Encode `source` through a built `vocab` and slice it into windows.
    ///
    /// # Errors
    /// `InvalidConfig` for a zero window length or batch size,
    /// `ConstructionOrder` if `vocab` was never built.
    pub fn new(
        source:        &dyn CorpusSource,
        vocab:         &Vocabulary,
        window_length: usize,
        batch_size:    usize,
    ) -> Result<Self> {
        if window_length == 0 || batch_size == 0 {
            return Err(DataError::InvalidConfig(format!(
                "window_length ({window_length}) and batch_size ({batch_size}) must be positive"
            )));
        }

        let stream  = encode_corpus(source, vocab)?;
        let windows = windowing::slice_windows(&stream, window_length, batch_size);

        let num_batches = windowing::num_batches(stream.len(), window_length, batch_size);
        let stats = DatasetStats {
            stream_tokens:    stream.len(),
            num_batches,
            windows:          windows.len(),
            discarded_tokens: stream.len() - num_batches * batch_size * window_length,
        };
        // The flat stream is dropped here; only the windows survive.
        drop(stream);

        if windows.is_empty() {
            tracing::warn!(
                "'{}' has {} tokens, fewer than one {}x{} batch; dataset is empty",
                source.name(),
                stats.stream_tokens,
                batch_size,
                window_length,
            );
        } else {
            tracing::info!(
                "'{}': {} tokens → {} batches, {} windows ({} tail tokens dropped)",
                source.name(),
                stats.stream_tokens,
                stats.num_batches,
                stats.windows,
                stats.discarded_tokens,
            );
        }

        Ok(Self {
            src_windows: windows.src,
            tgt_windows: windows.tgt,
            window_length,
            batch_size,
            stats,
        })
    }

    pub fn stats(&self) -> DatasetStats {
        self.stats
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Borrowing access for callers that don't need an owned pair.
    pub fn window(&self, index: usize) -> Option<(&[u32], &[u32])> {
        let src = self.src_windows.get(index)?;
        let tgt = self.tgt_windows.get(index)?;
        Some((src.as_slice(), tgt.as_slice()))
    }
}

impl Dataset<WindowPair> for WindowedCorpusDataset {
    fn get(&self, index: usize) -> Option<WindowPair> {
        self.window(index)
            .map(|(src, tgt)| WindowPair::new(src.to_vec(), tgt.to_vec()))
    }

    fn len(&self) -> usize {
        self.src_windows.len()
    }
}
