use thiserror::Error;

/// A fatal decode failure.
///
/// The first invalid condition observed anywhere in the document aborts the
/// decode; nothing past it is scanned and no partial tree is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Error: '{kind}' at line {line}")]
pub struct DecodeError {
    /// Which invalid condition was observed.
    pub kind: ErrorKind,
    /// 1-based line number, derived from newline bytes consumed before the
    /// error point.
    pub line: usize,
}

/// The invalid conditions a decode can fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The buffer ended before a string's closing quote.
    #[error("Malformed string")]
    MalformedString,
    /// A token that cannot appear at this position in an object or array,
    /// including premature end of input.
    #[error("Invalid token")]
    InvalidToken,
    /// An object member name was not followed by `:`.
    #[error("Invalid token; expected ':'")]
    ExpectedColon,
    /// No value production matches the token at the cursor.
    #[error("Unable to parse value")]
    UnableToParseValue,
}
