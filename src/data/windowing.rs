// ============================================================
// Layer 4 — Windowing
// ============================================================
// Slices the flat ID stream into offset-by-one (src, tgt)
// windows. Pure array arithmetic, no state.
//
// With L = window_length and B = batch_size:
//
//   num_batches = floor(len / (B * L))
//   src starts  = 0, L, 2L, ...       (while start < len - 1)
//   tgt starts  = 1, 1+L, 1+2L, ...   (while start < len)
//   keep        = first num_batches * B windows of each
//
// Example, L = 3, B = 1, stream = [2 3 2 4 1 2 3 1]   (len 8)
//   num_batches = 8 / 3 = 2
//   src: [2 3 2] [4 1 2]
//   tgt: [3 2 4] [1 2 3]
//   the tail [3 1] is dropped
//
// The tail that cannot fill a whole B×L grid is dropped so every
// batch has exactly B examples. When len is an exact multiple of
// B*L the last target window runs off the end of the stream and
// comes out one token short; collation pads it.
//
// Reference: Rust Book §8 (Slices)
//            Rust Book §13 (Iterators)

/// Number of full B×L batches the stream can fill.
pub fn num_batches(stream_len: usize, window_length: usize, batch_size: usize) -> usize {
    stream_len / (batch_size * window_length)
}

/// The retained windows of one corpus, src[i] paired with tgt[i].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Windows {
    pub src: Vec<Vec<u32>>,
    pub tgt: Vec<Vec<u32>>,
}

impl Windows {
    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }
}

/// Slice `stream` into src/tgt windows of `window_length`, keeping
/// only as many as fill whole batches of `batch_size`.
pub fn slice_windows(stream: &[u32], window_length: usize, batch_size: usize) -> Windows {
    debug_assert!(window_length > 0, "window_length must be positive");
    debug_assert!(batch_size > 0, "batch_size must be positive");

    let keep = num_batches(stream.len(), window_length, batch_size) * batch_size;

    let src = windows_from(stream, 0, stream.len().saturating_sub(1), window_length, keep);
    let tgt = windows_from(stream, 1, stream.len(), window_length, keep);

    Windows { src, tgt }
}

/// Windows starting at `first`, `first + L`, ... while the start is
/// below `end`; each clamped to the end of the stream.
fn windows_from(
    stream:        &[u32],
    first:         usize,
    end:           usize,
    window_length: usize,
    keep:          usize,
) -> Vec<Vec<u32>> {
    (first..end)
        .step_by(window_length)
        .take(keep)
        .map(|start| {
            let stop = (start + window_length).min(stream.len());
            stream[start..stop].to_vec()
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn stream(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    #[test]
    fn test_num_batches_floor() {
        assert_eq!(num_batches(100, 20, 2), 2);
        assert_eq!(num_batches(79, 20, 2), 1);
        assert_eq!(num_batches(39, 20, 2), 0);
    }

    #[test]
    fn test_retained_count_is_batches_times_batch_size() {
        let s = stream(103);
        for (l, b) in [(5, 2), (7, 3), (10, 1), (3, 4)] {
            let w = slice_windows(&s, l, b);
            assert_eq!(w.src.len(), num_batches(s.len(), l, b) * b);
            assert_eq!(w.tgt.len(), w.src.len());
        }
    }

    #[test]
    fn test_target_is_source_shifted_by_one() {
        let s = stream(50);
        let l = 4;
        let w = slice_windows(&s, l, 3);

        for i in 0..w.len() {
            let start = i * l + 1;
            let stop  = (start + l).min(s.len());
            assert_eq!(w.tgt[i], s[start..stop].to_vec());
            assert_eq!(w.src[i], s[i * l..i * l + l].to_vec());
        }
    }

    #[test]
    fn test_exact_multiple_shortens_last_target() {
        // len == B*L exactly: the last target has nothing to shift into
        let s = stream(6);
        let w = slice_windows(&s, 3, 2);

        assert_eq!(w.src, vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert_eq!(w.tgt, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_tail_is_dropped() {
        let s = vec![2, 3, 2, 4, 1, 2, 3, 1];
        let w = slice_windows(&s, 3, 1);

        assert_eq!(w.src, vec![vec![2, 3, 2], vec![4, 1, 2]]);
        assert_eq!(w.tgt, vec![vec![3, 2, 4], vec![1, 2, 3]]);
    }

    #[test]
    fn test_short_stream_yields_nothing() {
        assert!(slice_windows(&stream(5), 3, 2).is_empty());
        assert!(slice_windows(&[], 3, 1).is_empty());
        assert!(slice_windows(&[7], 1, 1).is_empty());
    }
}
