// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// Bidirectional mapping between word tokens and dense u32 IDs.
//
// A Vocabulary lives in two phases:
//
//   Building  → add_word() is insert-or-get; IDs are handed out
//               in first-seen order starting from the two
//               reserved tokens
//       │
//       ▼  build_vocab()
//   Built     → id() is get-or-unknown; the id_to_word snapshot
//               is frozen and the mapping never changes again
//
// Reserved IDs are fixed at construction, before any corpus word:
//   <unk> = 0
//   <eos> = 1
// so two runs over the same corpus with the same threshold always
// produce identical ID assignments.
//
// Reference: Rust Book §8 (Hash Maps)
//            Rust Book §6 (Enums)

use std::collections::HashMap;

use crate::error::DataError;

/// ID every unseen token resolves to once the vocabulary is built.
pub const UNK_ID: u32 = 0;
/// ID appended after every line of a corpus.
pub const EOS_ID: u32 = 1;

pub const UNK_TOKEN: &str = "<unk>";
pub const EOS_TOKEN: &str = "<eos>";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    /// Mutable: new words get the next sequential ID.
    Building,
    /// Frozen: `id_to_word[id]` is the exact inverse of `word_to_id`.
    Built { id_to_word: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_to_id: HashMap<String, u32>,
    phase:      Phase,
}

impl Vocabulary {
    /// Create an empty vocabulary holding only `<unk>` (0) and `<eos>` (1).
    pub fn new() -> Self {
        let mut word_to_id = HashMap::new();
        word_to_id.insert(UNK_TOKEN.to_string(), UNK_ID);
        word_to_id.insert(EOS_TOKEN.to_string(), EOS_ID);
        Self { word_to_id, phase: Phase::Building }
    }

    /// Return the ID of `token`, assigning the next free ID if it is new.
    ///
    /// # Errors
    /// `DataError::ConstructionOrder` once `build_vocab` has been called.
    pub fn add_word(&mut self, token: &str) -> Result<u32, DataError> {
        if self.is_built() {
            return Err(DataError::ConstructionOrder(format!(
                "add_word('{token}') called after build_vocab"
            )));
        }

        if let Some(&id) = self.word_to_id.get(token) {
            return Ok(id);
        }

        let id = self.word_to_id.len() as u32;
        self.word_to_id.insert(token.to_string(), id);
        Ok(id)
    }

    /// Freeze the vocabulary.
    ///
    /// Builds `id_to_word` as the inverse of `word_to_id` at this moment.
    /// After this call unseen tokens resolve to `UNK_ID`.
    ///
    /// # Errors
    /// Calling it twice is a caller bug and returns
    /// `DataError::ConstructionOrder`; the frozen snapshot is left untouched.
    pub fn build_vocab(&mut self) -> Result<(), DataError> {
        if self.is_built() {
            return Err(DataError::ConstructionOrder(
                "build_vocab called on an already built vocabulary".to_string(),
            ));
        }

        // IDs are dense 0..len, so every slot gets filled exactly once.
        let mut id_to_word = vec![String::new(); self.word_to_id.len()];
        for (word, &id) in &self.word_to_id {
            id_to_word[id as usize] = word.clone();
        }

        tracing::debug!("Vocabulary frozen with {} entries", id_to_word.len());
        self.phase = Phase::Built { id_to_word };
        Ok(())
    }

    /// Resolve `token` to its ID, falling back to `UNK_ID`.
    /// Never inserts.
    pub fn id(&self, token: &str) -> u32 {
        self.word_to_id.get(token).copied().unwrap_or(UNK_ID)
    }

    /// Reverse lookup through the frozen snapshot.
    /// Always `None` before `build_vocab`.
    pub fn word(&self, id: u32) -> Option<&str> {
        match &self.phase {
            Phase::Built { id_to_word } => id_to_word.get(id as usize).map(String::as_str),
            Phase::Building => None,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.word_to_id.contains_key(token)
    }

    /// Number of distinct IDs in `id_to_word` (0 until built).
    pub fn size(&self) -> usize {
        match &self.phase {
            Phase::Built { id_to_word } => id_to_word.len(),
            Phase::Building => 0,
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self.phase, Phase::Built { .. })
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids_are_fixed() {
        let mut v = Vocabulary::new();
        v.add_word("hello").unwrap();
        v.build_vocab().unwrap();

        assert_eq!(v.id(UNK_TOKEN), UNK_ID);
        assert_eq!(v.id(EOS_TOKEN), EOS_ID);
        assert_eq!(v.word(0), Some("<unk>"));
        assert_eq!(v.word(1), Some("<eos>"));
    }

    #[test]
    fn test_ids_in_first_seen_order() {
        let mut v = Vocabulary::new();
        assert_eq!(v.add_word("b").unwrap(), 2);
        assert_eq!(v.add_word("a").unwrap(), 3);
        // Re-adding returns the existing ID
        assert_eq!(v.add_word("b").unwrap(), 2);
    }

    #[test]
    fn test_id_to_word_is_exact_inverse() {
        let mut v = Vocabulary::new();
        let words = ["the", "cat", "sat", "on", "mat"];
        for w in words {
            v.add_word(w).unwrap();
        }
        v.build_vocab().unwrap();

        assert_eq!(v.size(), words.len() + 2);
        for w in words {
            assert_eq!(v.word(v.id(w)), Some(w));
        }
    }

    #[test]
    fn test_unknown_lookup_does_not_mutate() {
        let mut v = Vocabulary::new();
        v.add_word("known").unwrap();
        v.build_vocab().unwrap();

        assert_eq!(v.id("never-seen"), UNK_ID);
        assert!(!v.contains("never-seen"));
        assert_eq!(v.size(), 3);
    }

    #[test]
    fn test_add_after_build_is_rejected() {
        let mut v = Vocabulary::new();
        v.build_vocab().unwrap();
        let err = v.add_word("late").unwrap_err();
        assert!(matches!(err, DataError::ConstructionOrder(_)));
    }

    #[test]
    fn test_double_build_is_rejected() {
        let mut v = Vocabulary::new();
        v.build_vocab().unwrap();
        assert!(v.build_vocab().is_err());
        assert_eq!(v.size(), 2);
    }

    #[test]
    fn test_size_is_zero_before_build() {
        let mut v = Vocabulary::new();
        v.add_word("x").unwrap();
        assert_eq!(v.size(), 0);
        assert_eq!(v.word(2), None);
    }
}
