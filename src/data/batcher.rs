// ============================================================
// Layer 4 — Window Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<WindowPair>
// into integer tensors for the training loop.
//
// How batching works here:
//   Input:  Vec of N WindowPairs, each side up to L tokens
//   Output: WindowBatch with src/tgt tensors of shape [N, max_len]
//
//   1. collate() pads src and tgt into row-major grids
//   2. each grid is flattened into one Vec<i32>
//   3. the flat Vec becomes a 1D tensor, reshaped to [N, max_len]
//
// Almost every window already has length L. The one exception
// is the final target window of a corpus whose length is an
// exact multiple of B×L; collate pads it with zeros.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::collate::{collate, PaddedGrid};
use crate::domain::window::WindowPair;

// ─── WindowBatch ──────────────────────────────────────────────────────────────
/// A batch of windows ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct WindowBatch<B: Backend> {
    /// Input IDs — shape: [batch_size, max_src_len]
    pub src: Tensor<B, 2, Int>,

    /// Next-token targets — shape: [batch_size, max_tgt_len]
    pub tgt: Tensor<B, 2, Int>,

    /// Unpadded length of each src row
    pub src_lengths: Vec<usize>,

    /// Unpadded length of each tgt row
    pub tgt_lengths: Vec<usize>,
}

// ─── WindowBatcher ────────────────────────────────────────────────────────────
/// Holds the target device so tensors are created in the right place.
#[derive(Clone, Debug)]
pub struct WindowBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> WindowBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    fn to_tensor(&self, grid: &PaddedGrid) -> Tensor<B, 2, Int> {
        // Burn uses i32 for Int tensor input
        let flat: Vec<i32> = grid.values.iter().map(|&x| x as i32).collect();

        Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device)
            .reshape(grid.shape())
    }
}

impl<B: Backend> Batcher<WindowPair, WindowBatch<B>> for WindowBatcher<B> {
    fn batch(&self, items: Vec<WindowPair>) -> WindowBatch<B> {
        let collated = collate(&items);

        WindowBatch {
            src:         self.to_tensor(&collated.src),
            tgt:         self.to_tensor(&collated.tgt),
            src_lengths: collated.src.lengths,
            tgt_lengths: collated.tgt.lengths,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn batcher() -> WindowBatcher<TestBackend> {
        WindowBatcher::new(Default::default())
    }

    fn ints(t: Tensor<TestBackend, 2, Int>) -> Vec<i64> {
        t.into_data().iter::<i64>().collect()
    }

    #[test]
    fn test_batch_shapes() {
        let items = vec![
            WindowPair::new(vec![2, 3, 4], vec![3, 4, 5]),
            WindowPair::new(vec![5, 6, 7], vec![6, 7, 8]),
        ];
        let batch = batcher().batch(items);

        assert_eq!(batch.src.dims(), [2, 3]);
        assert_eq!(batch.tgt.dims(), [2, 3]);
        assert_eq!(ints(batch.src), vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(ints(batch.tgt), vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_short_target_is_zero_padded() {
        let items = vec![
            WindowPair::new(vec![2, 3, 4], vec![3, 4, 5]),
            WindowPair::new(vec![5, 6, 7], vec![6, 7]),
        ];
        let batch = batcher().batch(items);

        assert_eq!(batch.tgt_lengths, vec![3, 2]);
        assert_eq!(ints(batch.tgt), vec![3, 4, 5, 6, 7, 0]);
    }
}
