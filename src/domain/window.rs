// ============================================================
// Layer 3 — WindowPair Domain Type
// ============================================================
// One next-token-prediction example:
//
//   stream: t0 t1 t2 t3 t4 t5 ...
//   src:    t0 t1 t2
//   tgt:       t1 t2 t3
//
// tgt[k] is the token the model should predict after reading
// src[..=k]. Both are normally `window_length` long; only the
// very last retained target window can be one token shorter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPair {
    pub src: Vec<u32>,
    pub tgt: Vec<u32>,
}

impl WindowPair {
    pub fn new(src: Vec<u32>, tgt: Vec<u32>) -> Self {
        Self { src, tgt }
    }

    /// Number of positions where both an input and a target exist.
    pub fn aligned_len(&self) -> usize {
        self.src.len().min(self.tgt.len())
    }
}
