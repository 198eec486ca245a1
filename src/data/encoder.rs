// ============================================================
// Layer 4 — Corpus Encoder
// ============================================================
// Turns text into the flat token-ID stream that windowing
// slices up:
//
//   "a b a c"  →  [a, b, a, c, <eos>]
//   "a b"      →  [a, b, <eos>]
//   stream     =  [a, b, a, c, <eos>, a, b, <eos>]
//
// Every line ends with EOS_ID, blank lines included, so line
// boundaries stay visible inside the stream.
//
// The vocabulary must already be built: encoding is read-only
// and unknown tokens fall back to UNK_ID.

use crate::domain::traits::CorpusSource;
use crate::domain::vocabulary::{Vocabulary, EOS_ID};
use crate::error::{DataError, Result};

/// Encode one line, appending `EOS_ID`.
pub fn encode_line(line: &str, vocab: &Vocabulary) -> Vec<u32> {
    line.split_whitespace()
        .map(|token| vocab.id(token))
        .chain(std::iter::once(EOS_ID))
        .collect()
}

/// Encode every line of `source` into a single stream, in file order.
///
/// # Errors
/// `DataError::ConstructionOrder` if `vocab` has not been built.
pub fn encode_corpus(source: &dyn CorpusSource, vocab: &Vocabulary) -> Result<Vec<u32>> {
    if !vocab.is_built() {
        return Err(DataError::ConstructionOrder(format!(
            "cannot encode '{}' through a vocabulary that was never built",
            source.name()
        )));
    }

    let mut stream = Vec::new();
    for line in source.lines() {
        stream.extend(encode_line(line, vocab));
    }

    tracing::debug!("Encoded '{}' into {} token IDs", source.name(), stream.len());
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::TextCorpus;
    use crate::domain::vocabulary::UNK_ID;

    fn abc_vocab() -> Vocabulary {
        let mut v = Vocabulary::new();
        for w in ["a", "b", "c"] {
            v.add_word(w).unwrap();
        }
        v.build_vocab().unwrap();
        v
    }

    #[test]
    fn test_eos_after_every_line() {
        let vocab  = abc_vocab();
        let corpus = TextCorpus::from_text("mem", "a b a c\na b\n");
        let stream = encode_corpus(&corpus, &vocab).unwrap();
        assert_eq!(stream, vec![2, 3, 2, 4, EOS_ID, 2, 3, EOS_ID]);
    }

    #[test]
    fn test_unknown_tokens_fall_back() {
        let vocab = abc_vocab();
        assert_eq!(encode_line("a zebra c", &vocab), vec![2, UNK_ID, 4, EOS_ID]);
        // Encoding never grows the vocabulary
        assert!(!vocab.contains("zebra"));
    }

    #[test]
    fn test_blank_line_is_just_eos() {
        let vocab = abc_vocab();
        assert_eq!(encode_line("   ", &vocab), vec![EOS_ID]);
    }

    #[test]
    fn test_unbuilt_vocab_is_rejected() {
        let vocab  = Vocabulary::new();
        let corpus = TextCorpus::from_text("mem", "a\n");
        let err    = encode_corpus(&corpus, &vocab).unwrap_err();
        assert!(matches!(err, DataError::ConstructionOrder(_)));
    }
}
