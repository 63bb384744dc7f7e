//! Error types for the trigram/hexagram algebra and notation codec.
//!
//! Every failure is a caller contract violation surfaced at the offending
//! call. There are no transient failures: nothing here performs I/O.

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// # Example
///
/// ```
/// use iching::{ErrorKind, Trigram};
///
/// let err = Trigram::new(9).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index, line number or draw value outside its valid domain.
    Range,
    /// A value of the wrong kind (e.g. a bit string containing non-bits).
    Type,
    /// A key absent from a static lookup table.
    Lookup,
    /// A moving-line query on a hexagram without draws.
    State,
    /// A notation codec failure.
    Format,
}

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Trigram index outside 1..=8.
    #[error("trigram index must be an integer between 1 and 8, got {0}")]
    TrigramIndex(u32),

    /// Hexagram number outside 1..=64.
    #[error("hexagram number must be an integer between 1 and 64, got {0}")]
    HexagramNumber(u32),

    /// Line number outside 1..=6.
    #[error("line number must be 1..6, got {0}")]
    LineNumber(usize),

    /// Emblem pair start outside 1..=5.
    #[error("emblem pair must start at line 1..5, got {0}")]
    EmblemPair(usize),

    /// Draw sequence with a length other than six.
    #[error("draws must contain exactly six values, got {0}")]
    DrawCount(usize),

    /// Draw value outside 1..=8.
    #[error("draw for line {line} must be between 1 and 8, got {value}")]
    DrawValue {
        /// 1-based line the draw belongs to.
        line: usize,
        /// The offending value.
        value: u32,
    },

    /// A bit string that is not made of `0`/`1` or has the wrong width.
    #[error("expected a {width}-character string of 0/1, got {input:?}")]
    InvalidBits {
        /// Required number of characters.
        width: usize,
        /// The rejected input.
        input: String,
    },

    /// Trigram index pair absent from the hexagram table.
    #[error("unknown hexagram for trigrams {lower},{upper}")]
    UnknownPair {
        /// Lower trigram index.
        lower: u32,
        /// Upper trigram index.
        upper: u32,
    },

    /// Moving-line derivation requested on a hexagram without draws.
    #[error("draws not set; attach six draws before querying moving lines")]
    DrawsNotSet,

    /// Notation name not known to the codec.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// Tokenizer yielded a count other than six.
    #[error("expected 6 line tokens, got {0}")]
    WrongTokenCount(usize),

    /// Token not part of the selected notation's alphabet.
    #[error("invalid {format} token: {token}")]
    InvalidToken {
        /// Name of the notation being decoded.
        format: &'static str,
        /// The rejected token.
        token: String,
    },

    /// Auto-detection matched no notation.
    #[error("unable to auto-detect format")]
    UnrecognizedFormat,
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TrigramIndex(_)
            | Self::HexagramNumber(_)
            | Self::LineNumber(_)
            | Self::EmblemPair(_)
            | Self::DrawCount(_)
            | Self::DrawValue { .. } => ErrorKind::Range,
            Self::InvalidBits { .. } => ErrorKind::Type,
            Self::UnknownPair { .. } => ErrorKind::Lookup,
            Self::DrawsNotSet => ErrorKind::State,
            Self::UnknownFormat(_)
            | Self::WrongTokenCount(_)
            | Self::InvalidToken { .. }
            | Self::UnrecognizedFormat => ErrorKind::Format,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::TrigramIndex(0).kind(), ErrorKind::Range);
        assert_eq!(Error::DrawCount(5).kind(), ErrorKind::Range);
        assert_eq!(
            Error::InvalidBits {
                width: 3,
                input: "012".into()
            }
            .kind(),
            ErrorKind::Type
        );
        assert_eq!(
            Error::UnknownPair { lower: 0, upper: 9 }.kind(),
            ErrorKind::Lookup
        );
        assert_eq!(Error::DrawsNotSet.kind(), ErrorKind::State);
        assert_eq!(Error::WrongTokenCount(7).kind(), ErrorKind::Format);
        assert_eq!(Error::UnrecognizedFormat.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::WrongTokenCount(4).to_string(),
            "expected 6 line tokens, got 4"
        );
        assert_eq!(
            Error::InvalidToken {
                format: "binary",
                token: "2".into()
            }
            .to_string(),
            "invalid binary token: 2"
        );
        assert_eq!(
            Error::DrawValue { line: 3, value: 9 }.to_string(),
            "draw for line 3 must be between 1 and 8, got 9"
        );
    }
}
