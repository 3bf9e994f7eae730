//! Error types for URI parsing.

use std::fmt;

/// Errors that can occur when parsing a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// The `Display` output of each kind is the bare diagnostic, without the
/// offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The first byte of the scheme is not an ASCII letter
    SchemeStart {
        /// The character found, if the input was not empty
        found: Option<char>,
    },
    /// A byte outside the scheme alphabet appeared before `:`
    InvalidSchemeChar {
        /// The invalid character
        char: char,
        /// Byte offset in the input
        position: usize,
    },
    /// The input ended before the `:` that terminates the scheme
    ExpectedColon,
    /// A single `/` followed the scheme where `//` was required
    ExpectedSlash,
    /// The hierarchical part does not start with `//`
    Unsupported,
    /// A `[` host literal was never closed with `]`
    UnterminatedIpLiteral,
    /// A `:` after the host was not followed by any digit
    MissingPortDigits {
        /// Byte offset where digits were expected
        position: usize,
    },
    /// The port digits do not fit in a `u64`
    PortOverflow {
        /// The digit run as written
        digits: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemeStart { .. } => write!(f, "Scheme should start with an alphabet."),
            Self::InvalidSchemeChar { char, .. } => write!(f, "Invalid char '{char}' in scheme."),
            Self::ExpectedColon => write!(f, "Incomplete URI expected colon."),
            Self::ExpectedSlash => write!(f, "Expected /"),
            Self::Unsupported => write!(f, "URI not yet supported."),
            Self::UnterminatedIpLiteral => write!(f, "Incomplete URI expected ]."),
            Self::MissingPortDigits { .. } => write!(f, "Expected port digits after colon."),
            Self::PortOverflow { digits } => write!(f, "Port '{digits}' is too large."),
        }
    }
}

impl std::error::Error for ParseErrorKind {}
