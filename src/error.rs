// ============================================================
// Crate Error Type
// ============================================================
// Structural failures of the data pipeline. None of these are
// retried: bad input and contract violations go straight back
// to the caller. The application layer wraps them in anyhow
// with extra context.
//
// A corpus too short to fill one batch is NOT an error; it
// simply yields zero windows.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    /// The corpus path does not exist or cannot be read as UTF-8 text.
    #[error("cannot read corpus '{}': {source}", path.display())]
    MissingFile {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// add_word after build_vocab, a second build_vocab, or encoding
    /// through a vocabulary that was never built.
    #[error("vocabulary construction order violated: {0}")]
    ConstructionOrder(String),

    /// A zero window length, batch size or threshold, or no splits.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
