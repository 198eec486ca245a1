// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads a plain-text corpus: one example per line, tokens
// separated by whitespace, no header, no escaping.
//
// The whole file is read in a single sequential pass and kept
// in memory. For the training split this one buffer serves both
// the frequency-counting pass and the encoding pass, so the
// file is never opened twice.
//
// A missing or unreadable file is fatal and surfaces
// immediately as DataError::MissingFile.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::{fs, path::Path};

use crate::domain::traits::CorpusSource;
use crate::error::{DataError, Result};

/// A fully materialised line-oriented corpus.
#[derive(Debug, Clone)]
pub struct TextCorpus {
    /// File path or caller-supplied label, for log lines
    name: String,
    /// Raw file contents, newlines included
    text: String,
}

impl TextCorpus {
    /// Read `path` into memory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Read {} bytes from '{}'", text.len(), path.display());

        Ok(Self {
            name: path.display().to_string(),
            text,
        })
    }

    /// Wrap text that is already in memory.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

impl CorpusSource for TextCorpus {
    fn name(&self) -> &str {
        &self.name
    }

    fn lines(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        // str::lines strips both "\n" and "\r\n" and yields no
        // phantom empty line after a trailing newline.
        Box::new(self.text.lines())
    }
}
