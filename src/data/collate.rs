// ============================================================
// Layer 4 — Collation
// ============================================================
// Pads a list of sampled window pairs into rectangular grids.
//
// src and tgt are padded independently, each to the longest
// window of its own side in this batch:
//
//   windows (L = 4):   [5 6 7 8]   [9 2 3 4]   [6 7]
//
//   grid:              5 6 7 8
//                      9 2 3 4
//                      6 7 0 0     ← trailing PAD
//   lengths:           [4, 4, 2]
//
// PAD_ID is 0, the same number as UNK_ID. They mean different
// things: PAD marks "no token here", UNK marks "a token we don't
// know". Downstream masking tells them apart using `lengths`.
//
// Reference: Rust Book §8 (Vectors)

use crate::domain::window::WindowPair;

/// Value written into every padded position.
pub const PAD_ID: u32 = 0;

/// A `rows × cols` row-major integer grid plus the unpadded
/// length of every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedGrid {
    pub rows:    usize,
    pub cols:    usize,
    pub values:  Vec<u32>,
    pub lengths: Vec<usize>,
}

impl PaddedGrid {
    pub fn row(&self, i: usize) -> &[u32] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }
}

/// Padded source and target grids for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollatedBatch {
    pub src: PaddedGrid,
    pub tgt: PaddedGrid,
}

/// Pad `sequences` on the right with `PAD_ID` to the longest one.
pub fn merge<S: AsRef<[u32]>>(sequences: &[S]) -> PaddedGrid {
    let lengths: Vec<usize> = sequences.iter().map(|s| s.as_ref().len()).collect();
    let rows = sequences.len();
    let cols = lengths.iter().copied().max().unwrap_or(0);

    let mut values = vec![PAD_ID; rows * cols];
    for (i, seq) in sequences.iter().enumerate() {
        let seq = seq.as_ref();
        values[i * cols..i * cols + seq.len()].copy_from_slice(seq);
    }

    PaddedGrid { rows, cols, values, lengths }
}

/// Collate sampled pairs; src and tgt are padded separately.
pub fn collate(pairs: &[WindowPair]) -> CollatedBatch {
    let src: Vec<&[u32]> = pairs.iter().map(|p| p.src.as_slice()).collect();
    let tgt: Vec<&[u32]> = pairs.iter().map(|p| p.tgt.as_slice()).collect();

    CollatedBatch {
        src: merge(&src),
        tgt: merge(&tgt),
    }
}
