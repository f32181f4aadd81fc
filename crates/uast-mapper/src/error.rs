use std::fmt;

use camino::Utf8PathBuf;
use text_size::{TextRange, TextSize};
use uast_errors::Diagnostic;
use uast_inputs::LineColumn;

/// A byte range of a file and, when it resolves, the position of its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub offset: TextSize,
    pub end: TextSize,
    pub path: Utf8PathBuf,
    pub position: Option<LineColumn>,
}

impl Location {
    pub fn range(&self) -> TextRange {
        TextRange::new(self.offset.min(self.end), self.end.max(self.offset))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " at offset {}:{} for file {}",
            u32::from(self.offset),
            u32::from(self.end),
            self.path
        )?;
        if let Some(LineColumn { line, column }) = self.position {
            write!(f, ":{line}:{column}")?;
        }
        Ok(())
    }
}

/// Why a file could not be turned into a generic tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// A gap between two nodes holds text that is not implied punctuation.
    #[error("Invalid missing token '{text}'{location}")]
    MissingToken { text: String, location: Location },
    #[error("Invalid token sequence{location}")]
    Overlap { location: Location },
    #[error("Invalid token{location}")]
    InvalidSpan { location: Location },
    #[error("Invalid empty token{location}")]
    EmptyToken { location: Location },
    #[error("Invalid token value '{found}' instead of '{expected}'{location}")]
    TokenMismatch { found: String, expected: String, location: Location },
    #[error("Invalid token position{location}")]
    InvalidPosition { location: Location },
    #[error("Unexpected file size, expect {expected} instead of {found} for file {path}")]
    FileSize { expected: usize, found: usize, path: Utf8PathBuf },
}

impl MapError {
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::MissingToken { location, .. }
            | Self::Overlap { location }
            | Self::InvalidSpan { location }
            | Self::EmptyToken { location }
            | Self::TokenMismatch { location, .. }
            | Self::InvalidPosition { location } => Some(location),
            Self::FileSize { .. } => None,
        }
    }

    pub fn range(&self) -> TextRange {
        self.location().map_or_else(|| TextRange::empty(TextSize::new(0)), Location::range)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.range())
    }

    /// Errors that relaxed mode works around by dropping or widening a token.
    pub(crate) fn is_tolerable(&self) -> bool {
        matches!(
            self,
            Self::MissingToken { .. }
                | Self::EmptyToken { .. }
                | Self::TokenMismatch { .. }
                | Self::InvalidPosition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use text_size::{TextRange, TextSize};
    use uast_inputs::LineColumn;

    use super::{Location, MapError};

    fn location(position: Option<LineColumn>) -> Location {
        Location {
            offset: TextSize::new(28),
            end: TextSize::new(31),
            path: Utf8PathBuf::from("main.go"),
            position,
        }
    }

    #[test]
    fn messages() {
        let error = MapError::MissingToken {
            text: "foo".to_owned(),
            location: location(Some(LineColumn::new(3, 5))),
        };
        assert_eq!(error.to_string(), "Invalid missing token 'foo' at offset 28:31 for file main.go:3:5");

        let error = MapError::Overlap { location: location(None) };
        assert_eq!(error.to_string(), "Invalid token sequence at offset 28:31 for file main.go");

        let error = MapError::FileSize { expected: 10, found: 12, path: "a.go".into() };
        assert_eq!(error.to_string(), "Unexpected file size, expect 10 instead of 12 for file a.go");
    }

    #[test]
    fn ranges() {
        let inverted = Location { offset: TextSize::new(9), end: TextSize::new(4), ..location(None) };
        let error = MapError::Overlap { location: inverted };
        assert_eq!(error.range(), TextRange::new(4.into(), 9.into()));
        assert!(!error.is_tolerable());

        let error = MapError::EmptyToken { location: location(None) };
        assert_eq!(error.to_diagnostic().range(), TextRange::new(28.into(), 31.into()));
        assert!(error.is_tolerable());
    }
}
