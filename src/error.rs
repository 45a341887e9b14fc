//! Error types for the validator and the parser.
//!
//! The two failure domains are kept separate end to end: a [`UnicodeError`]
//! means the input is not well-formed UTF-8, a [`JsonError`] means the input
//! is well-formed UTF-8 but not a JSON document. [`Error`] is the umbrella
//! returned by [`parse`](crate::parse), and callers (including the CLI) can
//! always tell the two apart.

use thiserror::Error;

/// A defect in the UTF-8 encoding of the input.
///
/// Raised only by the [`Utf8Validator`](crate::unicode::Utf8Validator);
/// always fatal to the current parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnicodeError {
    /// A byte that cannot begin a UTF-8 sequence (0xC0, 0xC1, 0xF5..=0xFF).
    #[error("invalid leading byte 0x{0:02x}")]
    InvalidLeadByte(u8),

    /// A continuation byte (0x80..=0xBF) with no sequence in progress.
    #[error("unexpected continuation byte 0x{0:02x}")]
    UnexpectedContinuation(u8),

    /// A non-continuation byte inside a multi-byte sequence.
    #[error("invalid continuation byte 0x{0:02x}")]
    InvalidContinuation(u8),

    /// A sequence using more bytes than its codepoint requires.
    #[error("overlong encoding of U+{0:04X}")]
    OverlongEncoding(u32),

    /// A codepoint in the surrogate range 0xD800..=0xDFFF, which must never
    /// appear in UTF-8.
    #[error("surrogate codepoint U+{0:04X}")]
    SurrogateCodepoint(u32),

    /// A codepoint above 0x10FFFF.
    #[error("codepoint 0x{0:x} out of range")]
    CodepointOutOfRange(u32),

    /// The input ended in the middle of a multi-byte sequence.
    #[error("input ends inside a multi-byte sequence")]
    TruncatedSequence,
}

/// A violation of the JSON grammar.
///
/// Raised by the lexer and parser; always fatal to the current parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// The input ended where the grammar requires more.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A byte that cannot start any JSON token.
    #[error("unexpected byte 0x{0:02x}")]
    UnexpectedByte(u8),

    /// A well-formed token in a position the grammar does not allow.
    #[error("unexpected {0}")]
    UnexpectedToken(&'static str),

    /// A backslash followed by a character that is not an escape.
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),

    /// A string with no closing quote before end of input.
    #[error("unterminated string")]
    UnterminatedString,

    /// A raw control character inside a string; these must be escaped.
    #[error("unescaped control character 0x{0:02x} in string")]
    ControlCharacter(u8),

    /// A number literal that does not match the JSON number grammar.
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),

    /// A `\uXXXX` escape encoding a surrogate half without its partner.
    #[error("unpaired surrogate \\u{0:04x} in string escape")]
    UnpairedSurrogate(u16),

    /// Non-whitespace bytes after the top-level value.
    #[error("trailing content after top-level value")]
    TrailingContent,

    /// Arrays/objects nested deeper than the configured limit.
    #[error("nesting depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),

    /// An internal invariant breach, reported instead of panicking.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// Any failure produced while parsing a document.
///
/// The variant tells the caller which layer rejected the input; the two
/// kinds are never collapsed into one another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input violates the JSON grammar.
    #[error("parse error: {0}")]
    Json(#[from] JsonError),

    /// The input is not well-formed UTF-8.
    #[error("unicode error: {0}")]
    Unicode(#[from] UnicodeError),
}

/// Result alias used throughout the crate.
pub type ParseResult<T> = Result<T, Error>;
