//! Lexical error types.
//!
//! All lex errors are fatal to the current lex attempt. The lexer does not
//! resynchronize; the caller aborts the surrounding compilation unit.

use thiserror::Error;

/// Error type for lexing operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A short string literal was not closed before end of stream.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A long-bracket string or comment was not closed at its separator
    /// level before end of stream.
    #[error("unterminated long string or comment")]
    UnterminatedLongLiteral,

    /// A `[` followed by a run of `=` that resolves to neither a valid
    /// long-bracket opener nor a plain bracket.
    #[error("invalid long-bracket delimiter")]
    InvalidLongBracketDelimiter,

    /// [`expect_next_token`](crate::Lexer::expect_next_token) was called
    /// after the lexer already signaled end of stream. This is a
    /// programming-contract violation in the caller, not an input error.
    #[error("next token requested after end of stream")]
    CalledAfterEnd,
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
