// ============================================================
// Layer 4 — Vocabulary Builder (frequency pruning)
// ============================================================
// One pass over the vocabulary-source corpus (the training split):
//
//   1. Split every line on whitespace. No lowercasing, no
//      punctuation stripping: a token is exactly the substring.
//   2. Count each distinct token across the whole corpus.
//   3. Add every token with count >= min_word_count, in the
//      order it was FIRST encountered.
//   4. Freeze the vocabulary.
//
// Tokens under the threshold never get an ID and resolve to
// <unk> when encoded. Validation/test splits skip this pass
// and reuse the frozen result.
//
// Example with min_word_count = 2:
//   corpus:  "x y z y z"
//   counts:  x=1 y=2 z=2
//   result:  <unk>=0 <eos>=1 y=2 z=3        (x → <unk>)
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::HashMap;

use crate::domain::traits::CorpusSource;
use crate::domain::vocabulary::Vocabulary;
use crate::error::Result;

/// Count tokens in `source` and build a frozen vocabulary of every
/// token seen at least `min_word_count` times.
pub fn build_vocabulary(source: &dyn CorpusSource, min_word_count: usize) -> Result<Vocabulary> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    // HashMap iteration order is random; this keeps first-seen order
    let mut first_seen: Vec<&str> = Vec::new();

    for line in source.lines() {
        for token in line.split_whitespace() {
            let count = counts.entry(token).or_insert_with(|| {
                first_seen.push(token);
                0
            });
            *count += 1;
        }
    }

    let mut vocab = Vocabulary::new();
    let mut kept  = 0usize;

    for token in &first_seen {
        if counts[token] >= min_word_count {
            vocab.add_word(token)?;
            kept += 1;
        }
    }

    vocab.build_vocab()?;

    tracing::info!(
        "Vocabulary from '{}': {} distinct tokens, {} kept, {} pruned (min_word_count={}), size={}",
        source.name(),
        first_seen.len(),
        kept,
        first_seen.len() - kept,
        min_word_count,
        vocab.size(),
    );

    Ok(vocab)
}
