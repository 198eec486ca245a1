// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pruning pass and the encoder only need "something that
// yields lines of text". Programming against this trait keeps
// them independent of where the text came from:
//   - TextCorpus::open       → a file on disk
//   - TextCorpus::from_text  → an in-memory string (tests)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

/// Any line-oriented text corpus.
pub trait CorpusSource {
    /// Human-readable identifier used in log lines.
    fn name(&self) -> &str;

    /// Iterate the corpus one line at a time, in file order,
    /// without the trailing newline.
    fn lines(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
