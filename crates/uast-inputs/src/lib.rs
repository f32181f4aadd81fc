//! Source files and byte-offset to line/column conversion.

mod position;

use std::io::{self, Read as _};

use camino::{Utf8Path, Utf8PathBuf};
pub use position::{LineColumn, PositionIndex};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: Utf8PathBuf,
    text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<Utf8PathBuf>, text: impl Into<String>) -> Self {
        Self { path: path.into(), text: text.into() }
    }

    /// Reads `path` from disk, or standard input when `path` is `-`.
    pub fn read(path: &Utf8Path) -> Result<Self, ReadError> {
        let io_error = |source| ReadError::Io { path: path.to_owned(), source };

        let text = if path == STDIN_PATH {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(io_error)?;
            text
        } else {
            std::fs::read_to_string(path).map_err(io_error)?
        };

        Ok(Self::new(path, text))
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn position_index(&self) -> PositionIndex<'_> {
        PositionIndex::new(&self.text)
    }
}
